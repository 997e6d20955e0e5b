//! Runs shell commands against a session

use crate::app::Glimmerly;
use crate::error::AppError;
use crate::model::AppView;
use crate::views::{
    CategoryFilter, ChallengeCard, FeedTab, FeedView, ProfileTab, ProfileView, Resolution, Swipe,
};

use super::command::{ParseError, ShellCommand};

/// What the loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

fn card<'a>(
    app: &'a mut Glimmerly,
    action: &'static str,
) -> Result<&'a mut ChallengeCard, ShellError> {
    let view = app.view();
    app.challenge_mut()
        .ok_or(ShellError::App(AppError::InvalidTransition { view, action }))
}

fn feed<'a>(
    app: &'a mut Glimmerly,
    action: &'static str,
) -> Result<&'a mut FeedView, ShellError> {
    let view = app.view();
    app.feed_mut()
        .ok_or(ShellError::App(AppError::InvalidTransition { view, action }))
}

fn profile<'a>(
    app: &'a mut Glimmerly,
    action: &'static str,
) -> Result<&'a mut ProfileView, ShellError> {
    let view = app.view();
    app.profile_mut()
        .ok_or(ShellError::App(AppError::InvalidTransition { view, action }))
}

/// Execute one command
pub async fn execute(app: &mut Glimmerly, cmd: ShellCommand) -> Result<Flow, ShellError> {
    tracing::debug!(command = ?cmd, view = %app.view(), "Executing shell command");

    match cmd {
        ShellCommand::Help => return Ok(Flow::Help),
        ShellCommand::Quit => return Ok(Flow::Quit),
        ShellCommand::Show => {}

        ShellCommand::Toggle(category) => {
            app.toggle_category(category)?;
        }
        ShellCommand::Continue => app.confirm_onboarding()?,

        ShellCommand::Reveal => app.reveal()?,
        ShellCommand::Skip => app.skip_challenge()?,
        ShellCommand::Accept => app.complete_challenge()?,

        ShellCommand::Media(media_type) => {
            card(app, "choose a media type")?.select_media_type(media_type)?;
        }
        ShellCommand::Capture => {
            if app.capture().await? == Resolution::Stale {
                tracing::debug!("Capture finished after the card changed");
            }
        }
        ShellCommand::Retry => app.retry_capture()?,
        ShellCommand::Describe(text) => {
            card(app, "describe the challenge")?.set_description(text)?;
        }
        ShellCommand::Recategorize(category) => {
            card(app, "change the category")?.set_category(category)?;
        }
        ShellCommand::Public(is_public) => {
            card(app, "change visibility")?.set_public(is_public)?;
        }
        ShellCommand::Submit => {
            app.submit_challenge()?;
        }
        ShellCommand::Cancel => app.cancel_challenge()?,

        ShellCommand::Next => {
            feed(app, "scroll the feed")?.next();
        }
        ShellCommand::Previous => {
            feed(app, "scroll the feed")?.previous();
        }
        ShellCommand::Swipe(delta_y) => {
            if feed(app, "swipe the feed")?.swipe(delta_y) == Swipe::None {
                tracing::debug!(delta_y, "Swipe below threshold");
            }
        }
        ShellCommand::Tap => {
            feed(app, "pause playback")?.tap();
        }
        ShellCommand::Like => {
            feed(app, "like a video")?.toggle_like_current();
        }
        ShellCommand::Filter(filter) => {
            let filter: CategoryFilter = filter.parse().map_err(ParseError::Invalid)?;
            feed(app, "filter the feed")?.set_filter(filter);
        }
        ShellCommand::Author => app.open_current_author()?,

        ShellCommand::Tab(tab) => match app.view() {
            AppView::Feed => {
                let tab: FeedTab = tab.parse().map_err(ParseError::Invalid)?;
                feed(app, "switch tabs")?.set_tab(tab);
            }
            AppView::Profile => {
                let tab: ProfileTab = tab.parse().map_err(ParseError::Invalid)?;
                profile(app, "switch tabs")?.set_tab(tab);
            }
            view => {
                return Err(AppError::InvalidTransition {
                    view,
                    action: "switch tabs",
                }
                .into())
            }
        },

        ShellCommand::Profile(user_id) => app.view_profile(&user_id)?,
        ShellCommand::Follow => {
            profile(app, "follow")?.toggle_follow();
        }
        ShellCommand::Back => app.leave_profile()?,

        ShellCommand::Go(view) => app.navigate(view)?,
    }

    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::SimulatedCapture;
    use crate::catalog::Catalog;
    use crate::config::SessionConfig;
    use crate::storage::MemoryStore;
    use std::sync::Arc;
    use std::time::Duration;

    fn app() -> Glimmerly {
        Glimmerly::new(
            Catalog::sample(),
            Box::new(MemoryStore::new()),
            Arc::new(SimulatedCapture::new(Duration::from_millis(1))),
            &SessionConfig {
                daily_skips: 1,
                seed: Some(9),
            },
        )
    }

    async fn run(app: &mut Glimmerly, line: &str) -> Result<Flow, ShellError> {
        let cmd: ShellCommand = line.parse()?;
        execute(app, cmd).await
    }

    #[tokio::test]
    async fn test_full_session() {
        let mut app = app();

        run(&mut app, "toggle body").await.unwrap();
        run(&mut app, "continue").await.unwrap();
        assert_eq!(app.view(), AppView::Daily);

        run(&mut app, "reveal").await.unwrap();
        run(&mut app, "accept").await.unwrap();
        run(&mut app, "media photo").await.unwrap();
        run(&mut app, "capture").await.unwrap();
        run(&mut app, "describe Squats at the bus stop").await.unwrap();
        run(&mut app, "public off").await.unwrap();
        run(&mut app, "submit").await.unwrap();
        assert_eq!(app.view(), AppView::Feed);

        run(&mut app, "filter learning").await.unwrap();
        assert_eq!(app.feed().unwrap().len(), 1);

        run(&mut app, "author").await.unwrap();
        run(&mut app, "tab photos").await.unwrap();
        assert_eq!(app.profile().unwrap().tab(), ProfileTab::Photos);

        assert_eq!(run(&mut app, "quit").await.unwrap(), Flow::Quit);
    }

    #[tokio::test]
    async fn test_errors_do_not_change_screen() {
        let mut app = app();

        assert!(matches!(
            run(&mut app, "like").await,
            Err(ShellError::App(AppError::InvalidTransition { .. }))
        ));
        assert!(matches!(
            run(&mut app, "go home").await,
            Err(ShellError::App(AppError::OnboardingIncomplete))
        ));
        assert!(matches!(
            run(&mut app, "continue").await,
            Err(ShellError::App(AppError::EmptySelection))
        ));
        assert_eq!(app.view(), AppView::Onboarding);
    }

    #[tokio::test]
    async fn test_tab_depends_on_screen() {
        let mut app = app();
        app.complete_onboarding(vec![crate::model::Category::Social]).unwrap();

        assert!(run(&mut app, "tab popular").await.is_err());

        run(&mut app, "go home").await.unwrap();
        run(&mut app, "tab popular").await.unwrap();
        assert_eq!(app.feed().unwrap().tab(), FeedTab::Popular);

        assert!(matches!(
            run(&mut app, "tab videos").await,
            Err(ShellError::Parse(ParseError::Invalid(_)))
        ));
    }
}
