//! Page controller: the single owner of per-page state.
//!
//! A [`PageController`] holds everything a page session mutates (the
//! loaded catalog, the scheduler with every pending timer, and the state
//! machines of each component) together with the injected environment
//! (store, clock, randomness). Hosts forward user input to it, drive time
//! with [`PageController::advance`], and perform the [`Effect`]s it emits.
//!
//! ## Lifecycle
//!
//! ```text
//! load(location) ── access check ──> Granted/Stay  (page shown)
//!                                └─> Redirect*     (Effect::Navigate)
//!
//! Home: load_catalog().await ──> install_catalog() ──> daily message,
//!                                                      buttons, session timer
//! ```
//!
//! Any navigation clears the scheduler: the page context is gone, so no
//! timer of the old page can fire afterwards.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use crate::catalog::{CatalogLoad, CatalogSource, MessageCatalog, Pool};
use crate::celebration::HeartBurst;
use crate::clock::{Clock, SystemClock};
use crate::comfort::{ComfortModal, PointerTarget, Viewport};
use crate::config::Config;
use crate::daily::{self, DailySelection, GenerateButton, MessageDisplay, WELCOME_FALLBACK};
use crate::error::{ComfortError, ComfortResult};
use crate::login::{LoginFlow, LoginOutcome};
use crate::page::{Effect, Location, TimerEvent};
use crate::random::{RandomSource, ThreadRandom};
use crate::scheduler::{Scheduler, TimerId};
use crate::session::{self, AccessDecision, Activity, SessionTimer, EXPIRY_NOTICE};
use crate::storage::KeyValueStore;
use crate::transition::PageTransition;

/// Injected collaborators.
#[derive(Clone)]
pub struct Environment {
    pub store: Arc<dyn KeyValueStore>,
    pub clock: Arc<dyn Clock>,
    pub random: Arc<dyn RandomSource>,
}

impl Environment {
    /// Wall clock and thread RNG over the given store.
    pub fn system(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            clock: Arc::new(SystemClock),
            random: Arc::new(ThreadRandom),
        }
    }
}

pub struct PageController {
    env: Environment,
    config: Config,
    location: Location,
    leaving: bool,
    scheduler: Scheduler<TimerEvent>,
    catalog: Option<CatalogLoad>,
    daily: Option<DailySelection>,
    session: SessionTimer,
    login: LoginFlow,
    celebration: Option<(HeartBurst, TimerId)>,
    redirect: Option<TimerId>,
    message: MessageDisplay,
    generate: GenerateButton,
    comfort: ComfortModal,
    transition: PageTransition,
    effects: VecDeque<Effect>,
}

impl PageController {
    pub fn new(env: Environment, config: Config) -> Self {
        let session = SessionTimer::new(config.session_timeout());
        let login = LoginFlow::new(config.mask_glyph);

        Self {
            env,
            config,
            location: Location::Landing,
            leaving: false,
            scheduler: Scheduler::new(),
            catalog: None,
            daily: None,
            session,
            login,
            celebration: None,
            redirect: None,
            message: MessageDisplay::new(),
            generate: GenerateButton::new(),
            comfort: ComfortModal::new(),
            transition: PageTransition::new(),
            effects: VecDeque::new(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Page lifecycle
    // ═══════════════════════════════════════════════════════════════════════

    /// Start a fresh page session at `location` and run the access check.
    pub fn load(&mut self, location: Location) -> ComfortResult<AccessDecision> {
        self.reset_page(location);

        let decision = session::check_access(self.env.store.as_ref(), location)?;
        tracing::debug!(?location, ?decision, "Page load");

        match decision {
            AccessDecision::RedirectToLogin => self.navigate(Location::Login.href().to_string()),
            AccessDecision::RedirectToHome => self.navigate(Location::Home.href().to_string()),
            AccessDecision::Granted | AccessDecision::Stay => {}
        }

        Ok(decision)
    }

    /// Whether the host should load the catalog and call
    /// [`install_catalog`](Self::install_catalog).
    pub fn needs_catalog(&self) -> bool {
        self.location == Location::Home && !self.leaving && self.catalog.is_none()
    }

    /// Finish home-page initialization once the catalog load completed.
    ///
    /// Shows the daily message and arms the session timer. Ignored if the
    /// page was left while the catalog was loading. A catalog with an empty
    /// pool is swapped for the fallback. If today's message can't be
    /// resolved a welcome line is shown instead; the buttons and the
    /// session timer still work.
    pub fn install_catalog(&mut self, load: CatalogLoad) -> ComfortResult<()> {
        if self.location != Location::Home {
            return Err(ComfortError::InvalidState(format!(
                "catalog installed on {:?} page",
                self.location
            )));
        }
        if self.leaving {
            tracing::debug!("Page left before catalog arrived, ignoring");
            return Ok(());
        }

        let load = match load.catalog.validate() {
            Ok(()) => load,
            Err(e) => CatalogLoad::fallback(e.to_string()),
        };
        if let CatalogSource::Fallback(reason) = &load.source {
            tracing::warn!("Using fallback messages: {}", reason);
        }

        let message = match daily::initialize(
            self.env.store.as_ref(),
            self.env.clock.as_ref(),
            self.env.random.as_ref(),
            &load.catalog,
        ) {
            Ok(selection) => {
                let message = selection.message.clone();
                self.daily = Some(selection);
                message
            }
            Err(e) => {
                tracing::error!("Failed to initialize daily message: {}", e);
                WELCOME_FALLBACK.to_string()
            }
        };

        self.message
            .show(&mut self.scheduler, self.config.message_swap(), message);
        self.catalog = Some(load);
        self.session.arm(&mut self.scheduler);

        Ok(())
    }

    /// Clear the authentication flag and go to the landing page.
    pub fn logout(&mut self) -> ComfortResult<()> {
        session::revoke(self.env.store.as_ref())?;
        tracing::info!("Logged out");
        self.navigate(Location::Landing.href().to_string());
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Login page
    // ═══════════════════════════════════════════════════════════════════════

    /// Feed a change of the PIN field; returns the masked value to show.
    pub fn pin_input(&mut self, field: &str) -> String {
        self.login.input(field)
    }

    /// Submit the PIN form.
    pub fn submit_pin(&mut self) -> ComfortResult<LoginOutcome> {
        if self.location != Location::Login || self.leaving {
            return Err(ComfortError::InvalidState(
                "PIN submitted outside the login page".to_string(),
            ));
        }
        if self.redirect.is_some() {
            return Ok(LoginOutcome::Accepted);
        }

        let outcome = self.login.submit(
            &self.config.secret_pin,
            &mut self.scheduler,
            self.config.shake(),
        );

        match outcome {
            LoginOutcome::Accepted => {
                tracing::info!("PIN accepted");
                self.celebrate();
                session::grant(self.env.store.as_ref())?;
                self.redirect = Some(
                    self.scheduler
                        .schedule_after(self.config.login_redirect(), TimerEvent::LoginRedirect),
                );
            }
            LoginOutcome::Rejected => {
                tracing::info!("PIN rejected");
                self.effects.push_back(Effect::FocusPin);
            }
        }

        Ok(outcome)
    }

    fn celebrate(&mut self) {
        let burst = HeartBurst::spawn(self.config.heart_count, self.env.random.as_ref());
        for heart in burst.hearts() {
            self.scheduler
                .schedule_after(heart.lifetime(), TimerEvent::HeartExpired(heart.id));
        }
        let overlay = self
            .scheduler
            .schedule_after(self.config.celebration(), TimerEvent::CelebrationEnded);
        self.celebration = Some((burst, overlay));
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Home page
    // ═══════════════════════════════════════════════════════════════════════

    /// Tracked user activity; keeps the session alive.
    pub fn activity(&mut self, activity: Activity) {
        self.session.on_activity(&mut self.scheduler, activity);
    }

    /// Roll an extra message. Returns false while the button is loading.
    pub fn generate_extra(&mut self) -> ComfortResult<bool> {
        let message = daily::roll(
            self.env.random.as_ref(),
            self.require_catalog()?,
            Pool::Extra,
        );
        Ok(self
            .generate
            .press(&mut self.scheduler, self.config.generate_delay(), message))
    }

    /// Open the comfort overlay with a freshly rolled message.
    pub fn open_comfort(&mut self, viewport: Viewport) -> ComfortResult<()> {
        let message = daily::roll(
            self.env.random.as_ref(),
            self.require_catalog()?,
            Pool::Comfort,
        );
        self.comfort.open(&mut self.scheduler, message, viewport);
        Ok(())
    }

    pub fn close_comfort(&mut self) -> bool {
        self.comfort
            .close(&mut self.scheduler, self.config.modal_close())
    }

    /// Pointer event on the modal; closes it when the overlay itself was hit.
    pub fn modal_pointer(&mut self, target: PointerTarget) -> bool {
        if self.comfort.closes_on(target) {
            self.close_comfort()
        } else {
            false
        }
    }

    fn require_catalog(&self) -> ComfortResult<&MessageCatalog> {
        self.catalog
            .as_ref()
            .map(|load| &load.catalog)
            .ok_or_else(|| ComfortError::InvalidState("messages not loaded yet".to_string()))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Navigation
    // ═══════════════════════════════════════════════════════════════════════

    /// Link activation. Returns true when default navigation must be
    /// suppressed because the exit animation is taking over.
    pub fn follow_link(&mut self, href: &str) -> bool {
        if self.leaving {
            return true;
        }
        self.transition
            .follow(&mut self.scheduler, self.config.page_exit(), href)
    }

    fn navigate(&mut self, href: String) {
        tracing::debug!("Navigating to {}", href);
        self.session.disarm(&mut self.scheduler);
        self.scheduler.clear();
        self.leaving = true;
        self.effects.push_back(Effect::Navigate(href));
    }

    fn reset_page(&mut self, location: Location) {
        self.scheduler.clear();
        self.location = location;
        self.leaving = false;
        self.catalog = None;
        self.daily = None;
        self.session = SessionTimer::new(self.config.session_timeout());
        self.login = LoginFlow::new(self.config.mask_glyph);
        self.celebration = None;
        self.redirect = None;
        self.message = MessageDisplay::new();
        self.generate = GenerateButton::new();
        self.comfort = ComfortModal::new();
        self.transition = PageTransition::new();
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Time
    // ═══════════════════════════════════════════════════════════════════════

    /// Let `elapsed` pass, firing every timer that comes due, in order.
    pub fn advance(&mut self, elapsed: Duration) -> ComfortResult<()> {
        let target = self.scheduler.now() + elapsed;
        while let Some((id, event)) = self.scheduler.pop_due(target) {
            self.fire(id, event)?;
        }
        self.scheduler.advance_to(target);
        Ok(())
    }

    /// Time until the next pending timer, if any.
    pub fn time_until_next(&self) -> Option<Duration> {
        self.scheduler.time_until_next()
    }

    /// Whether letting `elapsed` pass would fire at least one timer.
    pub fn timer_due(&self, elapsed: Duration) -> bool {
        self.time_until_next().is_some_and(|next| next <= elapsed)
    }

    fn fire(&mut self, id: TimerId, event: TimerEvent) -> ComfortResult<()> {
        match event {
            TimerEvent::SessionExpired => {
                if self.session.expire(id) {
                    tracing::info!("Session expired after inactivity");
                    session::revoke(self.env.store.as_ref())?;
                    self.effects
                        .push_back(Effect::Alert(EXPIRY_NOTICE.to_string()));
                    self.navigate(Location::Landing.href().to_string());
                }
            }
            TimerEvent::MessageSwap => {
                self.message.swap(id);
            }
            TimerEvent::GenerateSettled => {
                if let Some(message) = self.generate.settle(id) {
                    self.message
                        .show(&mut self.scheduler, self.config.message_swap(), message);
                }
            }
            TimerEvent::ModalClosed => {
                self.comfort.finish_close(id);
            }
            TimerEvent::ShakeEnded => self.login.end_shake(id),
            TimerEvent::HeartExpired(heart) => {
                if let Some((burst, _)) = self.celebration.as_mut() {
                    burst.remove(heart);
                }
            }
            TimerEvent::CelebrationEnded => {
                if matches!(&self.celebration, Some((_, overlay)) if *overlay == id) {
                    self.celebration = None;
                }
            }
            TimerEvent::LoginRedirect => {
                if self.redirect == Some(id) {
                    self.redirect = None;
                    self.navigate(Location::Home.href().to_string());
                }
            }
            TimerEvent::Navigate(href) => {
                if self.transition.finish(id) {
                    self.navigate(href);
                }
            }
        }
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // View state
    // ═══════════════════════════════════════════════════════════════════════

    /// Take every effect emitted since the last call.
    pub fn drain_effects(&mut self) -> Vec<Effect> {
        self.effects.drain(..).collect()
    }

    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn is_leaving(&self) -> bool {
        self.leaving
    }

    pub fn catalog(&self) -> Option<&CatalogLoad> {
        self.catalog.as_ref()
    }

    pub fn daily(&self) -> Option<&DailySelection> {
        self.daily.as_ref()
    }

    pub fn message(&self) -> &MessageDisplay {
        &self.message
    }

    pub fn generate(&self) -> &GenerateButton {
        &self.generate
    }

    pub fn comfort(&self) -> &ComfortModal {
        &self.comfort
    }

    pub fn login(&self) -> &LoginFlow {
        &self.login
    }

    pub fn celebration(&self) -> Option<&HeartBurst> {
        self.celebration.as_ref().map(|(burst, _)| burst)
    }

    pub fn transition(&self) -> &PageTransition {
        &self.transition
    }

    pub fn session_armed(&self) -> bool {
        self.session.is_armed()
    }
}
