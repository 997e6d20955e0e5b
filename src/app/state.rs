//! Application state and transitions
//!
//! Cross-screen state lives in [`AppState`]. Every user intent is an
//! [`AppEvent`]; [`reduce`] turns `(state, event)` into the next state plus
//! the side effects the controller must carry out. The only impurity is the
//! random daily draw, which goes through the injected RNG.
//!
//! ```text
//! Onboarding ──CompleteOnboarding──▶ Daily ──CompleteChallenge──▶ Challenge
//!                                     ▲  ◀──────CancelChallenge──────┘ │
//!                                     │                         SubmitChallenge
//!                    Navigate ◀──────▶│                                ▼
//!                                  Profile ◀──ViewProfile / LeaveProfile──▶ Feed
//! ```

use rand::Rng;
use serde::Serialize;

use super::notice::Notice;
use crate::catalog::Catalog;
use crate::error::{AppError, AppResult};
use crate::model::{AppView, Category, Glimmer};
use crate::views::{ChallengePayload, NavBar};

/// State shared across screens
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub view: AppView,
    pub has_completed_onboarding: bool,
    pub selected_categories: Vec<Category>,
    pub daily_glimmer: Glimmer,
    pub remaining_skips: u32,
    /// Id of the profile shown on the profile screen
    pub viewing_user: String,
}

impl AppState {
    /// Fresh, not yet onboarded state with a glimmer drawn from the whole catalog
    pub fn initial<R: Rng + ?Sized>(catalog: &Catalog, daily_skips: u32, rng: &mut R) -> Self {
        Self {
            view: AppView::Onboarding,
            has_completed_onboarding: false,
            selected_categories: Vec::new(),
            daily_glimmer: catalog.random_glimmer(&[], rng).clone(),
            remaining_skips: daily_skips,
            viewing_user: catalog.current_user().id.clone(),
        }
    }
}

/// User intents and lifecycle events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Saved onboarding preferences were found at startup
    Restored(Vec<Category>),
    CompleteOnboarding(Vec<Category>),
    SkipChallenge,
    CompleteChallenge,
    CancelChallenge,
    SubmitChallenge(ChallengePayload),
    ViewProfile(String),
    LeaveProfile,
    Navigate(AppView),
}

/// Side effects requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    PersistOnboarding(Vec<Category>),
    Notify(Notice),
    /// Discard the screen-local state of `view` and build it afresh
    Mount(AppView),
    CancelCapture,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: AppState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn unchanged(state: &AppState) -> Self {
        Self {
            state: state.clone(),
            effects: Vec::new(),
        }
    }
}

fn expect_view(state: &AppState, view: AppView, action: &'static str) -> AppResult<()> {
    if state.view == view {
        Ok(())
    } else {
        Err(AppError::InvalidTransition {
            view: state.view,
            action,
        })
    }
}

fn expect_onboarded(state: &AppState) -> AppResult<()> {
    if state.has_completed_onboarding {
        Ok(())
    } else {
        Err(AppError::OnboardingIncomplete)
    }
}

/// Move to `target`, remounting it and cancelling capture when leaving the challenge
fn enter(next: &mut AppState, from: AppView, target: AppView, effects: &mut Vec<Effect>) {
    if from == AppView::Challenge && target != AppView::Challenge {
        effects.push(Effect::CancelCapture);
    }
    next.view = target;
    effects.push(Effect::Mount(target));
}

/// Compute the transition for `event`
///
/// Errors leave `state` untouched; callers keep using the old state.
pub fn reduce<R: Rng + ?Sized>(
    state: &AppState,
    event: AppEvent,
    catalog: &Catalog,
    rng: &mut R,
) -> AppResult<Transition> {
    let mut next = state.clone();
    let mut effects = Vec::new();

    match event {
        AppEvent::Restored(categories) => {
            if state.has_completed_onboarding {
                return Err(AppError::InvalidTransition {
                    view: state.view,
                    action: "restore onboarding",
                });
            }
            next.daily_glimmer = catalog.random_glimmer(&categories, rng).clone();
            next.selected_categories = categories;
            next.has_completed_onboarding = true;
            enter(&mut next, state.view, AppView::Daily, &mut effects);
        }

        AppEvent::CompleteOnboarding(categories) => {
            expect_view(state, AppView::Onboarding, "complete onboarding")?;
            if categories.is_empty() {
                return Err(AppError::EmptySelection);
            }
            next.daily_glimmer = catalog.random_glimmer(&categories, rng).clone();
            next.selected_categories = categories.clone();
            next.has_completed_onboarding = true;
            effects.push(Effect::PersistOnboarding(categories));
            effects.push(Effect::Notify(Notice::Welcome));
            enter(&mut next, state.view, AppView::Daily, &mut effects);
        }

        AppEvent::SkipChallenge => {
            expect_view(state, AppView::Daily, "skip the challenge")?;
            if state.remaining_skips == 0 {
                return Ok(Transition::unchanged(state));
            }
            next.daily_glimmer = catalog
                .random_glimmer(&state.selected_categories, rng)
                .clone();
            next.remaining_skips = state.remaining_skips - 1;
            effects.push(Effect::Notify(Notice::ChallengeSkipped));
        }

        AppEvent::CompleteChallenge => {
            expect_view(state, AppView::Daily, "complete the challenge")?;
            enter(&mut next, state.view, AppView::Challenge, &mut effects);
        }

        AppEvent::CancelChallenge => {
            expect_view(state, AppView::Challenge, "cancel the challenge")?;
            enter(&mut next, state.view, AppView::Daily, &mut effects);
        }

        AppEvent::SubmitChallenge(payload) => {
            expect_view(state, AppView::Challenge, "submit a challenge")?;
            tracing::info!(
                glimmer = %state.daily_glimmer.id,
                media_type = %payload.media_type,
                category = %payload.category,
                is_public = payload.is_public,
                "Challenge submitted"
            );
            effects.push(Effect::Notify(Notice::ChallengePublished));
            enter(&mut next, state.view, AppView::Feed, &mut effects);
        }

        AppEvent::ViewProfile(user_id) => {
            expect_view(state, AppView::Feed, "open a profile")?;
            if catalog.user(&user_id).is_none() {
                return Err(AppError::UserNotFound(user_id));
            }
            next.viewing_user = user_id;
            enter(&mut next, state.view, AppView::Profile, &mut effects);
        }

        AppEvent::LeaveProfile => {
            expect_view(state, AppView::Profile, "leave the profile")?;
            enter(&mut next, state.view, AppView::Feed, &mut effects);
        }

        AppEvent::Navigate(target) => {
            expect_onboarded(state)?;
            if !NavBar::is_visible(state.has_completed_onboarding, state.view) {
                return Err(AppError::InvalidTransition {
                    view: state.view,
                    action: "use the navigation bar",
                });
            }
            if !NavBar::is_destination(target) {
                return Err(AppError::InvalidTransition {
                    view: state.view,
                    action: "navigate to a screen outside the navigation bar",
                });
            }
            if target == AppView::Profile {
                next.viewing_user = catalog.current_user().id.clone();
            }
            if next.view != target || next.viewing_user != state.viewing_user {
                enter(&mut next, state.view, target, &mut effects);
            }
        }
    }

    Ok(Transition {
        state: next,
        effects,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MediaType;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn setup() -> (Catalog, StdRng) {
        (Catalog::sample(), StdRng::seed_from_u64(3))
    }

    fn onboarded(catalog: &Catalog, rng: &mut StdRng, categories: Vec<Category>) -> AppState {
        let initial = AppState::initial(catalog, 1, rng);
        reduce(&initial, AppEvent::CompleteOnboarding(categories), catalog, rng)
            .unwrap()
            .state
    }

    fn payload() -> ChallengePayload {
        ChallengePayload {
            media_type: MediaType::Video,
            description: String::new(),
            category: Category::Body,
            is_public: true,
        }
    }

    #[test]
    fn test_initial_state() {
        let (catalog, mut rng) = setup();
        let state = AppState::initial(&catalog, 1, &mut rng);

        assert_eq!(state.view, AppView::Onboarding);
        assert!(!state.has_completed_onboarding);
        assert_eq!(state.remaining_skips, 1);
        assert_eq!(state.viewing_user, "u1");
    }

    #[test]
    fn test_complete_onboarding() {
        let (catalog, mut rng) = setup();
        let initial = AppState::initial(&catalog, 1, &mut rng);

        let t = reduce(
            &initial,
            AppEvent::CompleteOnboarding(vec![Category::Wild]),
            &catalog,
            &mut rng,
        )
        .unwrap();

        assert_eq!(t.state.view, AppView::Daily);
        assert!(t.state.has_completed_onboarding);
        assert_eq!(t.state.daily_glimmer.category, Category::Wild);
        assert_eq!(
            t.effects,
            vec![
                Effect::PersistOnboarding(vec![Category::Wild]),
                Effect::Notify(Notice::Welcome),
                Effect::Mount(AppView::Daily),
            ]
        );
    }

    #[test]
    fn test_onboarding_rejects_empty_selection() {
        let (catalog, mut rng) = setup();
        let initial = AppState::initial(&catalog, 1, &mut rng);

        let result = reduce(&initial, AppEvent::CompleteOnboarding(vec![]), &catalog, &mut rng);
        assert!(matches!(result, Err(AppError::EmptySelection)));
    }

    #[test]
    fn test_skip_draws_from_selection_and_stops_at_zero() {
        let (catalog, mut rng) = setup();
        let state = onboarded(&catalog, &mut rng, vec![Category::Body]);

        let skipped = reduce(&state, AppEvent::SkipChallenge, &catalog, &mut rng)
            .unwrap()
            .state;
        assert_eq!(skipped.daily_glimmer.category, Category::Body);
        assert_eq!(skipped.remaining_skips, 0);

        let again = reduce(&skipped, AppEvent::SkipChallenge, &catalog, &mut rng).unwrap();
        assert_eq!(again.state, skipped);
        assert!(again.effects.is_empty());
    }

    #[test]
    fn test_skip_from_non_body_glimmer() {
        let (catalog, mut rng) = setup();
        let mut state = onboarded(&catalog, &mut rng, vec![Category::Body]);
        state.daily_glimmer = catalog.glimmer("w1").unwrap().clone();

        let next = reduce(&state, AppEvent::SkipChallenge, &catalog, &mut rng)
            .unwrap()
            .state;

        assert_eq!(next.daily_glimmer.category, Category::Body);
        assert_eq!(state.remaining_skips, 1);
        assert_eq!(next.remaining_skips, 0);
    }

    #[test]
    fn test_challenge_round_trip() {
        let (catalog, mut rng) = setup();
        let daily = onboarded(&catalog, &mut rng, vec![Category::Social]);

        let challenge = reduce(&daily, AppEvent::CompleteChallenge, &catalog, &mut rng).unwrap();
        assert_eq!(challenge.state.view, AppView::Challenge);
        assert_eq!(challenge.state.daily_glimmer, daily.daily_glimmer);

        let cancelled =
            reduce(&challenge.state, AppEvent::CancelChallenge, &catalog, &mut rng).unwrap();
        assert_eq!(cancelled.state.view, AppView::Daily);
        assert_eq!(
            cancelled.effects,
            vec![Effect::CancelCapture, Effect::Mount(AppView::Daily)]
        );

        let submitted = reduce(
            &challenge.state,
            AppEvent::SubmitChallenge(payload()),
            &catalog,
            &mut rng,
        )
        .unwrap();
        assert_eq!(submitted.state.view, AppView::Feed);
        assert!(submitted
            .effects
            .contains(&Effect::Notify(Notice::ChallengePublished)));
    }

    #[test]
    fn test_wrong_screen_is_rejected() {
        let (catalog, mut rng) = setup();
        let daily = onboarded(&catalog, &mut rng, vec![Category::Social]);

        let result = reduce(&daily, AppEvent::SubmitChallenge(payload()), &catalog, &mut rng);
        assert!(matches!(
            result,
            Err(AppError::InvalidTransition { view: AppView::Daily, .. })
        ));
    }

    #[test]
    fn test_view_profile() {
        let (catalog, mut rng) = setup();
        let mut feed = onboarded(&catalog, &mut rng, vec![Category::Social]);
        feed.view = AppView::Feed;

        let t = reduce(&feed, AppEvent::ViewProfile("u2".into()), &catalog, &mut rng).unwrap();
        assert_eq!(t.state.view, AppView::Profile);
        assert_eq!(t.state.viewing_user, "u2");

        let missing = reduce(&feed, AppEvent::ViewProfile("u42".into()), &catalog, &mut rng);
        assert!(matches!(missing, Err(AppError::UserNotFound(id)) if id == "u42"));
    }

    #[test]
    fn test_view_profile_only_from_feed() {
        let (catalog, mut rng) = setup();
        let daily = onboarded(&catalog, &mut rng, vec![Category::Social]);
        let mut in_challenge = daily.clone();
        in_challenge.view = AppView::Challenge;

        for state in [&daily, &in_challenge] {
            let result = reduce(state, AppEvent::ViewProfile("u2".into()), &catalog, &mut rng);
            assert!(matches!(
                result,
                Err(AppError::InvalidTransition { view, .. }) if view == state.view
            ));
        }
    }

    #[test]
    fn test_navigation_rules() {
        let (catalog, mut rng) = setup();
        let initial = AppState::initial(&catalog, 1, &mut rng);
        assert!(matches!(
            reduce(&initial, AppEvent::Navigate(AppView::Feed), &catalog, &mut rng),
            Err(AppError::OnboardingIncomplete)
        ));

        let daily = onboarded(&catalog, &mut rng, vec![Category::Social]);
        assert!(reduce(&daily, AppEvent::Navigate(AppView::Challenge), &catalog, &mut rng).is_err());

        let mut on_profile = daily.clone();
        on_profile.view = AppView::Profile;
        on_profile.viewing_user = "u3".into();
        let own = reduce(&on_profile, AppEvent::Navigate(AppView::Profile), &catalog, &mut rng)
            .unwrap();
        assert_eq!(own.state.viewing_user, "u1");
        assert_eq!(own.effects, vec![Effect::Mount(AppView::Profile)]);

        let mut in_challenge = daily.clone();
        in_challenge.view = AppView::Challenge;
        assert!(reduce(&in_challenge, AppEvent::Navigate(AppView::Feed), &catalog, &mut rng).is_err());

        // Re-selecting the active screen keeps its local state
        let mut on_feed = daily;
        on_feed.view = AppView::Feed;
        let same = reduce(&on_feed, AppEvent::Navigate(AppView::Feed), &catalog, &mut rng).unwrap();
        assert!(same.effects.is_empty());
    }

    #[test]
    fn test_restore_skips_persist() {
        let (catalog, mut rng) = setup();
        let initial = AppState::initial(&catalog, 1, &mut rng);

        let t = reduce(
            &initial,
            AppEvent::Restored(vec![Category::Learning]),
            &catalog,
            &mut rng,
        )
        .unwrap();

        assert_eq!(t.state.view, AppView::Daily);
        assert_eq!(t.state.selected_categories, vec![Category::Learning]);
        assert_eq!(t.state.daily_glimmer.category, Category::Learning);
        assert_eq!(t.effects, vec![Effect::Mount(AppView::Daily)]);
    }
}
