//! Session controller
//!
//! [`Glimmerly`] owns the cross-screen [`AppState`], the mounted screen and
//! the collaborators (catalog, local store, capture device, RNG). Intents go
//! through [`reduce`]; the resulting effects are applied here.

use chrono::Local;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use uuid::Uuid;

use super::clock::time_remaining;
use super::notice::Notice;
use super::state::{reduce, AppEvent, AppState, Effect};
use crate::capture::{
    spawn_capture, CancelHandle, CaptureOutcome, CaptureService, PendingCapture, SimulatedCapture,
};
use crate::catalog::Catalog;
use crate::config::{Config, SessionConfig};
use crate::error::{AppError, AppResult};
use crate::model::{AppView, Category};
use crate::storage::{load_onboarding, save_onboarding, FileStore, LocalStore};
use crate::views::{
    CaptureTicket, ChallengeCard, ChallengePayload, DailyGlimmerView, FeedView, OnboardingView,
    ProfileView, Resolution,
};

/// The mounted screen and its local state
#[derive(Debug, Clone)]
pub enum Screen {
    Onboarding(OnboardingView),
    Daily(DailyGlimmerView),
    Challenge(ChallengeCard),
    Feed(FeedView),
    Profile(ProfileView),
}

impl Screen {
    pub fn view(&self) -> AppView {
        match self {
            Screen::Onboarding(_) => AppView::Onboarding,
            Screen::Daily(_) => AppView::Daily,
            Screen::Challenge(_) => AppView::Challenge,
            Screen::Feed(_) => AppView::Feed,
            Screen::Profile(_) => AppView::Profile,
        }
    }
}

/// One interactive session
pub struct Glimmerly {
    session_id: Uuid,
    catalog: Catalog,
    store: Box<dyn LocalStore>,
    capture: Arc<dyn CaptureService>,
    rng: StdRng,
    state: AppState,
    screen: Screen,
    /// Bumped on every challenge card mount so old capture tickets go stale
    card_generation: u64,
    active_capture: Option<(CaptureTicket, CancelHandle)>,
    notices: Vec<Notice>,
}

impl Glimmerly {
    /// Create a session showing onboarding
    ///
    /// Call [`Glimmerly::mount`] afterwards to restore saved preferences.
    pub fn new(
        catalog: Catalog,
        store: Box<dyn LocalStore>,
        capture: Arc<dyn CaptureService>,
        session: &SessionConfig,
    ) -> Self {
        let mut rng = match session.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let state = AppState::initial(&catalog, session.daily_skips, &mut rng);

        let session_id = Uuid::new_v4();
        tracing::info!(session = %session_id, skips = session.daily_skips, "Session created");

        Self {
            session_id,
            catalog,
            store,
            capture,
            rng,
            state,
            screen: Screen::Onboarding(OnboardingView::new()),
            card_generation: 0,
            active_capture: None,
            notices: Vec::new(),
        }
    }

    /// Session backed by the file store and simulated capture from `config`
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let store = FileStore::open(config.data_dir())?;
        tracing::info!("Local storage at {:?}", store.path());

        let capture = SimulatedCapture::new(config.capture.delay())
            .url(config.capture.placeholder_url.clone());

        Ok(Self::new(
            Catalog::sample(),
            Box::new(store),
            Arc::new(capture),
            &config.session,
        ))
    }

    /// Restore onboarding from the local store
    ///
    /// When both flags are present the session jumps to the daily screen
    /// with a freshly drawn glimmer. Returns whether anything was restored.
    pub fn mount(&mut self) -> AppResult<bool> {
        match load_onboarding(&*self.store)? {
            Some(categories) => {
                tracing::info!(session = %self.session_id, categories = ?categories, "Restored onboarding");
                self.dispatch(AppEvent::Restored(categories))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn view(&self) -> AppView {
        self.state.view
    }

    /// Countdown shown on the daily screen
    pub fn time_remaining(&self) -> String {
        time_remaining(&Local::now())
    }

    /// Take all queued notices
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Feed an event through the reducer and apply its effects
    pub fn dispatch(&mut self, event: AppEvent) -> AppResult<()> {
        let transition = match reduce(&self.state, event, &self.catalog, &mut self.rng) {
            Ok(t) => t,
            Err(e) => {
                tracing::warn!(session = %self.session_id, view = %self.state.view, error = %e, "Transition rejected");
                return Err(e);
            }
        };

        if transition.state.view != self.state.view {
            tracing::info!(
                session = %self.session_id,
                from = %self.state.view,
                to = %transition.state.view,
                "View changed"
            );
        }
        self.state = transition.state;

        // Every effect runs so the screen always matches the new state
        let mut first_error = None;
        for effect in transition.effects {
            if let Err(e) = self.apply(effect) {
                tracing::error!(session = %self.session_id, error = %e, "Effect failed");
                first_error.get_or_insert(e);
            }
        }

        if let Screen::Daily(daily) = &mut self.screen {
            daily.sync(&self.state.daily_glimmer);
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn apply(&mut self, effect: Effect) -> AppResult<()> {
        match effect {
            Effect::PersistOnboarding(categories) => {
                save_onboarding(&mut *self.store, &categories)?;
            }
            Effect::Notify(notice) => self.notify(notice),
            Effect::Mount(view) => self.mount_view(view),
            Effect::CancelCapture => self.cancel_capture(),
        }
        Ok(())
    }

    fn notify(&mut self, notice: Notice) {
        if notice.is_error() {
            tracing::warn!(session = %self.session_id, "{}", notice);
        } else {
            tracing::info!(session = %self.session_id, "{}", notice);
        }
        self.notices.push(notice);
    }

    fn mount_view(&mut self, view: AppView) {
        self.screen = match view {
            AppView::Onboarding => Screen::Onboarding(OnboardingView::new()),
            AppView::Daily => Screen::Daily(DailyGlimmerView::new(&self.state.daily_glimmer)),
            AppView::Challenge => {
                self.card_generation += 1;
                Screen::Challenge(ChallengeCard::new(
                    self.state.daily_glimmer.clone(),
                    self.card_generation,
                ))
            }
            AppView::Feed => Screen::Feed(FeedView::new(self.catalog.feed().to_vec())),
            AppView::Profile => Screen::Profile(self.profile_for(&self.state.viewing_user)),
        };
        tracing::debug!(session = %self.session_id, %view, "Mounted screen");
    }

    fn profile_for(&self, user_id: &str) -> ProfileView {
        let user = self
            .catalog
            .user(user_id)
            .unwrap_or_else(|| self.catalog.current_user());
        let challenges = self
            .catalog
            .challenges_by(&user.id, None)
            .into_iter()
            .cloned()
            .collect();

        ProfileView::new(user.clone(), self.catalog.is_current_user(&user.id), challenges)
    }

    // Onboarding

    pub fn onboarding_mut(&mut self) -> Option<&mut OnboardingView> {
        match &mut self.screen {
            Screen::Onboarding(view) => Some(view),
            _ => None,
        }
    }

    /// Toggle a category on the onboarding screen
    pub fn toggle_category(&mut self, category: Category) -> AppResult<bool> {
        let view = self.state.view;
        self.onboarding_mut()
            .map(|onboarding| onboarding.toggle(category))
            .ok_or(AppError::InvalidTransition {
                view,
                action: "pick categories",
            })
    }

    /// Confirm the categories picked on the onboarding screen
    pub fn confirm_onboarding(&mut self) -> AppResult<()> {
        let categories = match &self.screen {
            Screen::Onboarding(view) => view.confirm()?,
            _ => {
                return Err(AppError::InvalidTransition {
                    view: self.state.view,
                    action: "complete onboarding",
                })
            }
        };
        self.complete_onboarding(categories)
    }

    pub fn complete_onboarding(&mut self, categories: Vec<Category>) -> AppResult<()> {
        self.dispatch(AppEvent::CompleteOnboarding(categories))
    }

    // Daily glimmer

    pub fn daily(&self) -> Option<&DailyGlimmerView> {
        match &self.screen {
            Screen::Daily(view) => Some(view),
            _ => None,
        }
    }

    pub fn reveal(&mut self) -> AppResult<()> {
        match &mut self.screen {
            Screen::Daily(view) => {
                view.reveal();
                Ok(())
            }
            _ => Err(AppError::InvalidTransition {
                view: self.state.view,
                action: "reveal the glimmer",
            }),
        }
    }

    /// Swap the daily glimmer for a new draw; no-op once skips run out
    pub fn skip_challenge(&mut self) -> AppResult<()> {
        self.dispatch(AppEvent::SkipChallenge)
    }

    pub fn complete_challenge(&mut self) -> AppResult<()> {
        self.dispatch(AppEvent::CompleteChallenge)
    }

    // Challenge card

    pub fn challenge(&self) -> Option<&ChallengeCard> {
        match &self.screen {
            Screen::Challenge(card) => Some(card),
            _ => None,
        }
    }

    pub fn challenge_mut(&mut self) -> Option<&mut ChallengeCard> {
        match &mut self.screen {
            Screen::Challenge(card) => Some(card),
            _ => None,
        }
    }

    fn require_card(&mut self, action: &'static str) -> AppResult<&mut ChallengeCard> {
        let view = self.state.view;
        self.challenge_mut()
            .ok_or(AppError::InvalidTransition { view, action })
    }

    /// Start capturing on the challenge card
    ///
    /// Must be called from within a Tokio runtime. The returned future
    /// resolves independently; hand its outcome to [`Glimmerly::resolve_capture`].
    pub fn start_capture(&mut self) -> AppResult<(CaptureTicket, PendingCapture)> {
        let card = self.require_card("capture media")?;
        let ticket = card.begin_capture()?;
        let media_type = card.media_type();

        let (pending, cancel) = spawn_capture(Arc::clone(&self.capture), media_type);
        self.active_capture = Some((ticket, cancel));

        tracing::debug!(
            session = %self.session_id,
            generation = ticket.generation,
            attempt = ticket.attempt,
            device = self.capture.name(),
            "Capture started"
        );
        Ok((ticket, pending))
    }

    /// Apply a finished capture; stale outcomes are dropped
    pub fn resolve_capture(&mut self, ticket: CaptureTicket, outcome: CaptureOutcome) -> Resolution {
        if matches!(&self.active_capture, Some((active, _)) if *active == ticket) {
            self.active_capture = None;
        }

        let failure = match &outcome {
            CaptureOutcome::Failed(e) => Some(e.to_string()),
            _ => None,
        };

        let resolution = match &mut self.screen {
            Screen::Challenge(card) => card.resolve(ticket, outcome),
            _ => Resolution::Stale,
        };

        match resolution {
            Resolution::Stale => {
                tracing::warn!(
                    session = %self.session_id,
                    generation = ticket.generation,
                    attempt = ticket.attempt,
                    "Dropped stale capture result"
                );
            }
            Resolution::Reset => {
                if let Some(reason) = failure {
                    self.notify(Notice::CaptureFailed(reason));
                }
            }
            Resolution::Captured => {
                tracing::info!(session = %self.session_id, "Media captured");
            }
        }
        resolution
    }

    /// Capture and wait for the result
    pub async fn capture(&mut self) -> AppResult<Resolution> {
        let (ticket, pending) = self.start_capture()?;
        let outcome = pending.outcome().await;
        Ok(self.resolve_capture(ticket, outcome))
    }

    /// Abort an in-flight capture, if any
    pub fn cancel_capture(&mut self) {
        if let Some((ticket, handle)) = self.active_capture.take() {
            tracing::debug!(
                session = %self.session_id,
                generation = ticket.generation,
                attempt = ticket.attempt,
                "Cancelling capture"
            );
            handle.cancel();
        }
    }

    /// Discard captured media and edits on the challenge card
    pub fn retry_capture(&mut self) -> AppResult<()> {
        self.require_card("retry the capture")?.retry();
        self.cancel_capture();
        Ok(())
    }

    pub fn cancel_challenge(&mut self) -> AppResult<()> {
        self.dispatch(AppEvent::CancelChallenge)
    }

    /// Publish the captured media and move to the feed
    ///
    /// Nothing is uploaded or stored; the payload is returned to the caller.
    pub fn submit_challenge(&mut self) -> AppResult<ChallengePayload> {
        let payload = self.require_card("submit a challenge")?.publish()?;
        self.dispatch(AppEvent::SubmitChallenge(payload.clone()))?;
        Ok(payload)
    }

    // Feed and profiles

    pub fn feed(&self) -> Option<&FeedView> {
        match &self.screen {
            Screen::Feed(view) => Some(view),
            _ => None,
        }
    }

    pub fn feed_mut(&mut self) -> Option<&mut FeedView> {
        match &mut self.screen {
            Screen::Feed(view) => Some(view),
            _ => None,
        }
    }

    /// Open the profile of the author of the feed item on screen
    pub fn open_current_author(&mut self) -> AppResult<()> {
        let user_id = self
            .feed()
            .and_then(|feed| feed.current())
            .map(|item| item.user_id.clone())
            .ok_or(AppError::InvalidTransition {
                view: self.state.view,
                action: "open the author's profile",
            })?;
        self.view_profile(&user_id)
    }

    pub fn view_profile(&mut self, user_id: &str) -> AppResult<()> {
        self.dispatch(AppEvent::ViewProfile(user_id.to_string()))
    }

    pub fn leave_profile(&mut self) -> AppResult<()> {
        self.dispatch(AppEvent::LeaveProfile)
    }

    pub fn profile(&self) -> Option<&ProfileView> {
        match &self.screen {
            Screen::Profile(view) => Some(view),
            _ => None,
        }
    }

    pub fn profile_mut(&mut self) -> Option<&mut ProfileView> {
        match &mut self.screen {
            Screen::Profile(view) => Some(view),
            _ => None,
        }
    }

    /// Nav bar dispatch
    pub fn navigate(&mut self, view: AppView) -> AppResult<()> {
        self.dispatch(AppEvent::Navigate(view))
    }
}
