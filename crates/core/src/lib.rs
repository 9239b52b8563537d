pub mod demo;
pub mod errors;
pub mod format;
pub mod models;
pub mod services;
pub mod storage;

use std::collections::{BTreeSet, VecDeque};
use std::time::Duration;

use chrono::{DateTime, FixedOffset, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;
use uuid::Uuid;

use errors::CoreError;
use models::{
    app_state::AppState,
    chart::ChartSeries,
    config::AssistantConfig,
    event::ViewChange,
    notification::{Notification, Severity},
    onboarding::OnboardingState,
    order::TradeSide,
    pattern::{Pattern, PatternDetailView},
    theme::ThemePreference,
    tour::{TourState, TourView},
    view::{Navigation, Tab, View},
    watchlist::Watchlist,
};
use services::{
    export_service::{ExportService, PositionsExport},
    navigation_service::NavigationService,
    notification_service::NotificationService,
    onboarding_service::{OnboardingService, OnboardingTransition},
    pattern_service::PatternService,
    scheduler::{Scheduler, TimerKind},
    simulation_service::SimulationService,
    theme_service::ThemeService,
    tour_service::{RegionLocator, TourService},
    trading_service::TradingService,
    watchlist_service::{WatchlistChange, WatchlistService},
};
use storage::kv::KeyValueStore;

/// Handle returned by [`TradingAssistant::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&ViewChange)>;

/// Main entry point for the trading assistant core.
///
/// Holds the application state, the services that transform it, the
/// virtual-clock scheduler, and the rendering surface's listeners. All
/// calls run to completion on the caller's thread.
#[must_use]
pub struct TradingAssistant {
    state: AppState,
    config: AssistantConfig,
    store: Box<dyn KeyValueStore>,
    rng: StdRng,
    scheduler: Scheduler,
    /// Wall-clock instant at virtual t = 0. Its offset is the display zone
    /// for chart labels; export dates use the UTC date.
    started_at: DateTime<FixedOffset>,
    notification_service: NotificationService,
    watchlist_service: WatchlistService,
    theme_service: ThemeService,
    onboarding_service: OnboardingService,
    navigation_service: NavigationService,
    pattern_service: PatternService,
    tour_service: TourService,
    simulation_service: SimulationService,
    trading_service: TradingService,
    export_service: ExportService,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
}

impl std::fmt::Debug for TradingAssistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TradingAssistant")
            .field("onboarding", &self.state.onboarding)
            .field("tab", &self.state.active_tab)
            .field("view", &self.state.active_view)
            .field("watchlist", &self.state.watchlist.len())
            .field("notifications", &self.state.notifications.len())
            .field("now_ms", &self.scheduler.now_ms())
            .field("pending_timers", &self.scheduler.pending())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl TradingAssistant {
    /// Start with default configuration, an OS-entropy random source, and
    /// the local wall clock.
    pub fn start(store: Box<dyn KeyValueStore>) -> Result<Self, CoreError> {
        let mut seed = [0u8; 32];
        getrandom::getrandom(&mut seed)?;
        let rng = StdRng::from_seed(seed);
        let now = chrono::Local::now();
        Self::build(
            AssistantConfig::default(),
            store,
            rng,
            now.with_timezone(now.offset()),
        )
    }

    /// Start deterministically: fixed seed and fixed wall-clock origin.
    /// The offset of `started_at` is used as the local display zone.
    pub fn start_with(
        config: AssistantConfig,
        store: Box<dyn KeyValueStore>,
        seed: u64,
        started_at: DateTime<FixedOffset>,
    ) -> Result<Self, CoreError> {
        Self::build(config, store, StdRng::seed_from_u64(seed), started_at)
    }

    // ── Subscriptions ───────────────────────────────────────────────

    /// Register a rendering-surface listener for state changes.
    pub fn subscribe(&mut self, listener: impl FnMut(&ViewChange) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `true` if the listener was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    // ── Time ────────────────────────────────────────────────────────

    /// Move virtual time forward, firing every timer that comes due in
    /// order. Returns the number of timers fired.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        let until = self.scheduler.now_ms().saturating_add(elapsed_ms);
        let mut fired = 0;
        while let Some(timer) = self.scheduler.pop_due(until) {
            self.dispatch(timer.kind);
            fired += 1;
        }
        self.scheduler.set_now(until);
        fired
    }

    /// Virtual milliseconds since start.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    /// Wall-clock time corresponding to the current virtual time.
    #[must_use]
    pub fn wall_clock(&self) -> DateTime<FixedOffset> {
        let elapsed = i64::try_from(self.scheduler.now_ms()).unwrap_or(i64::MAX);
        self.started_at + chrono::Duration::milliseconds(elapsed)
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// Cancel every pending timer (simulation ticks, dismissals, order
    /// fills) and clear visible notifications. Safe to call repeatedly.
    pub fn shutdown(&mut self) {
        let removed = self
            .notification_service
            .clear(&mut self.state.notifications, &mut self.scheduler);
        let cancelled = self.scheduler.cancel_all();
        log::info!("Trading assistant shut down ({cancelled} timers cancelled)");
        for id in removed {
            self.emit(ViewChange::NotificationRemoved(id));
        }
    }

    // ── Onboarding ──────────────────────────────────────────────────

    /// Primary wizard button: next step, or finish on the last one.
    pub fn next_onboarding_step(&mut self) -> OnboardingTransition {
        let transition = self.onboarding_service.advance(&mut self.state.onboarding);
        match transition {
            OnboardingTransition::Advanced(step) => {
                log::debug!("Onboarding advanced to step {step}");
                self.emit(ViewChange::Onboarding(self.state.onboarding));
            }
            OnboardingTransition::Completed => {
                log::debug!("Onboarding completed");
                self.emit(ViewChange::Onboarding(self.state.onboarding));
                self.notify(
                    "Welcome to Smart Trading Assistant!",
                    "Your trading patterns have been analyzed and automation suggestions are ready.",
                    Severity::Success,
                );
            }
            OnboardingTransition::Ignored => {}
        }
        transition
    }

    /// Close the wizard without completing it.
    pub fn skip_onboarding(&mut self) -> bool {
        let closed = self.onboarding_service.skip(&mut self.state.onboarding);
        if closed {
            log::debug!("Onboarding skipped");
            self.emit(ViewChange::Onboarding(self.state.onboarding));
        }
        closed
    }

    /// The wizard's close control; same as skipping.
    pub fn close_onboarding(&mut self) -> bool {
        self.skip_onboarding()
    }

    #[must_use]
    pub fn onboarding(&self) -> OnboardingState {
        self.state.onboarding
    }

    #[must_use]
    pub fn is_onboarding_complete(&self) -> bool {
        self.state.onboarding.is_completed()
    }

    // ── Tabs & Navigation ───────────────────────────────────────────

    /// Activate a positions-section tab by label (case-insensitive).
    pub fn select_tab(&mut self, name: &str) -> Option<Tab> {
        let tab = self.navigation_service.select_tab(&mut self.state, name);
        match tab {
            Some(tab) => self.emit(ViewChange::Tab(tab)),
            None => log::debug!("Ignoring unknown tab '{name}'"),
        }
        tab
    }

    #[must_use]
    pub fn active_tab(&self) -> Tab {
        self.state.active_tab
    }

    /// `(tab, visible)` for every panel; exactly one is visible.
    #[must_use]
    pub fn visible_panels(&self) -> Vec<(Tab, bool)> {
        self.navigation_service.visible_panels(&self.state)
    }

    /// Handle a nav-link click (`"#dashboard"`, `"#learn"`, ...).
    pub fn navigate(&mut self, target: &str) -> Navigation {
        let previous = self.state.active_view;
        let outcome = self.navigation_service.navigate(&mut self.state, target);
        if let Some(link) = self.state.active_nav_link.clone() {
            self.emit(ViewChange::NavLink(link));
        }
        match &outcome {
            Navigation::Shown(view) => {
                if *view != previous {
                    self.emit(ViewChange::View(*view));
                }
            }
            Navigation::Unrecognized(section) => {
                let message = format!("Navigating to {section} section");
                self.notify("Navigation", message, Severity::Info);
            }
        }
        outcome
    }

    #[must_use]
    pub fn active_view(&self) -> View {
        self.state.active_view
    }

    #[must_use]
    pub fn active_nav_link(&self) -> Option<&str> {
        self.state.active_nav_link.as_deref()
    }

    // ── Watchlist ───────────────────────────────────────────────────

    /// Add an exact symbol.
    pub fn add_to_watchlist(&mut self, symbol: &str) -> WatchlistChange {
        let change = self
            .watchlist_service
            .add(&mut self.state.watchlist, self.store.as_mut(), symbol);
        self.announce_watchlist(&change);
        change
    }

    /// Form submission: trims and uppercases, ignores blank input.
    pub fn submit_watchlist_input(&mut self, raw: &str) -> WatchlistChange {
        match WatchlistService::normalize_input(raw) {
            Some(symbol) => self.add_to_watchlist(&symbol),
            None => WatchlistChange::Ignored,
        }
    }

    /// Remove every exact match. Announces the removal even when the
    /// symbol was not present.
    pub fn remove_from_watchlist(&mut self, symbol: &str) -> WatchlistChange {
        let change = self
            .watchlist_service
            .remove(&mut self.state.watchlist, self.store.as_mut(), symbol);
        self.announce_watchlist(&change);
        change
    }

    #[must_use]
    pub fn watchlist(&self) -> &Watchlist {
        &self.state.watchlist
    }

    // ── Theme ───────────────────────────────────────────────────────

    pub fn toggle_theme(&mut self) -> ThemePreference {
        let theme = self
            .theme_service
            .toggle(&mut self.state.theme, self.store.as_mut());
        self.emit(ViewChange::Theme(theme));
        theme
    }

    #[must_use]
    pub fn theme(&self) -> ThemePreference {
        self.state.theme
    }

    // ── Notifications ───────────────────────────────────────────────

    /// Push a toast; it disappears after the configured timeout.
    pub fn notify(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
    ) -> Uuid {
        let (id, evicted) = self.notification_service.push(
            &mut self.state.notifications,
            &mut self.scheduler,
            &mut self.rng,
            title,
            message,
            severity,
        );
        for old in evicted {
            self.emit(ViewChange::NotificationRemoved(old));
        }
        self.emit(ViewChange::NotificationAdded(id));
        id
    }

    /// Remove a toast before its timeout.
    pub fn dismiss_notification(&mut self, id: Uuid) -> bool {
        let removed = self.notification_service.dismiss(
            &mut self.state.notifications,
            &mut self.scheduler,
            id,
        );
        if removed {
            self.emit(ViewChange::NotificationRemoved(id));
        }
        removed
    }

    /// Visible toasts, oldest first.
    #[must_use]
    pub fn notifications(&self) -> &VecDeque<Notification> {
        &self.state.notifications
    }

    // ── Patterns ────────────────────────────────────────────────────

    #[must_use]
    pub fn patterns(&self) -> &[Pattern] {
        &self.state.patterns
    }

    /// Open the detail modal. Unknown ids return `None` and change nothing.
    pub fn show_pattern_details(&mut self, id: &str) -> Option<PatternDetailView> {
        let view = self.pattern_service.show_details(&mut self.state, id);
        match &view {
            Some(v) => self.emit(ViewChange::PatternModal(Some(v.pattern_id.clone()))),
            None => log::debug!("No pattern with id '{id}'"),
        }
        view
    }

    pub fn close_pattern_details(&mut self) -> bool {
        let closed = self.pattern_service.close_details(&mut self.state);
        if closed {
            self.emit(ViewChange::PatternModal(None));
        }
        closed
    }

    /// Flip a pattern's automate control to active. Presentation only.
    pub fn automate_pattern(&mut self, id: &str) -> Option<Pattern> {
        let was_open = self.state.open_pattern.is_some();
        let pattern = match self.pattern_service.automate(&mut self.state, id) {
            Some(p) => p,
            None => {
                log::debug!("No pattern with id '{id}' to automate");
                return None;
            }
        };
        self.notify(
            "Pattern Automated!",
            PatternService::automation_message(&pattern),
            Severity::Success,
        );
        self.emit(ViewChange::PatternAutomated(pattern.id.clone()));
        if was_open {
            self.emit(ViewChange::PatternModal(None));
        }
        Some(pattern)
    }

    #[must_use]
    pub fn open_pattern(&self) -> Option<&str> {
        self.state.open_pattern.as_deref()
    }

    #[must_use]
    pub fn automated_patterns(&self) -> &BTreeSet<String> {
        &self.state.automated_patterns
    }

    // ── Guided Tour ─────────────────────────────────────────────────

    pub fn start_tour(&mut self) -> TourState {
        let state = self.tour_service.start(&mut self.state.tour);
        self.emit(ViewChange::Tour(state));
        state
    }

    pub fn next_tour_step(&mut self) -> TourState {
        self.tour_transition(|svc, tour| svc.next(tour))
    }

    pub fn prev_tour_step(&mut self) -> TourState {
        self.tour_transition(|svc, tour| svc.prev(tour))
    }

    pub fn close_tour(&mut self) -> TourState {
        self.tour_transition(|svc, tour| svc.close(tour))
    }

    #[must_use]
    pub fn tour_state(&self) -> TourState {
        self.state.tour
    }

    /// Tooltip for the current step, placed using the surface's layout.
    #[must_use]
    pub fn render_tour(&self, locator: &dyn RegionLocator) -> Option<TourView> {
        self.tour_service.render(&self.state.tour, locator)
    }

    // ── Chart & Simulation ──────────────────────────────────────────

    #[must_use]
    pub fn chart(&self) -> &ChartSeries {
        &self.state.chart
    }

    /// Switch timeframe: regenerates the whole series.
    pub fn select_timeframe(&mut self, timeframe: &str) {
        let now = self.wall_clock().naive_local();
        self.simulation_service
            .reseed(&mut self.state.chart, Some(timeframe), now, &mut self.rng);
        self.emit(ViewChange::ChartReset);
        self.notify(
            "Chart Updated",
            format!("Switched to {timeframe} timeframe"),
            Severity::Info,
        );
    }

    /// Pointer entered a data point: reveal the quick-trade overlay.
    pub fn show_chart_overlay(&mut self) {
        self.set_chart_overlay(true);
    }

    /// Pointer left the chart.
    pub fn hide_chart_overlay(&mut self) {
        self.set_chart_overlay(false);
    }

    #[must_use]
    pub fn is_chart_overlay_visible(&self) -> bool {
        self.state.chart_overlay_visible
    }

    // ── Portfolio & Trading ─────────────────────────────────────────

    #[must_use]
    pub fn portfolio(&self) -> &models::portfolio::PortfolioSnapshot {
        &self.state.portfolio
    }

    #[must_use]
    pub fn user_stats(&self) -> &models::portfolio::UserStats {
        &self.state.user_stats
    }

    /// Simulated market order from the chart overlay. A follow-up
    /// "Order Executed" toast arrives after the configured fill delay.
    pub fn quick_trade(&mut self, side: TradeSide) {
        let (title, message) = self
            .trading_service
            .order_placed(side, &self.state.chart.instrument);
        self.notify(title, message, Severity::Success);
        self.set_chart_overlay(false);
        self.scheduler
            .schedule_once(self.config.order_fill_delay_ms, TimerKind::OrderFill(side));
    }

    /// Mark a suggestion implemented; raises the automation rate.
    pub fn implement_suggestion(&mut self, suggestion_id: &str) -> &'static str {
        let message = self
            .trading_service
            .implement_suggestion(&mut self.state.portfolio, suggestion_id);
        self.notify("Implementation Complete", message, Severity::Success);
        self.emit(ViewChange::Portfolio);
        message
    }

    pub fn suggest_automation(&mut self, symbol: &str) -> Uuid {
        let message = self.trading_service.automation_suggestion(symbol);
        self.notify("Automation Suggestion", message, Severity::Info)
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Export the displayed positions as CSV, dated by the current UTC date.
    pub fn export_positions_csv(&mut self) -> PositionsExport {
        let date = self.wall_clock().naive_utc().date();
        self.export_positions_csv_on(date)
    }

    pub fn export_positions_csv_on(&mut self, date: NaiveDate) -> PositionsExport {
        let export = self
            .export_service
            .export_positions(&self.state.portfolio.positions, date);
        self.notify("Export", "Positions exported as CSV.", Severity::Success);
        export
    }

    // ── Snapshot ────────────────────────────────────────────────────

    /// Read-only view of the whole state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    /// Serialize the state as JSON (debugging / devtools display).
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.state)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize state: {e}")))
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(
        config: AssistantConfig,
        store: Box<dyn KeyValueStore>,
        mut rng: StdRng,
        started_at: DateTime<FixedOffset>,
    ) -> Result<Self, CoreError> {
        config.validate()?;

        let watchlist_service = WatchlistService::new(config.watchlist_key.clone());
        let theme_service = ThemeService::new(config.theme_key.clone());
        let simulation_service = SimulationService::new(&config);

        let watchlist = watchlist_service.load(store.as_ref(), config.watchlist_capacity);
        let theme = theme_service.load(store.as_ref());

        let mut chart = ChartSeries::default();
        simulation_service.reseed(&mut chart, None, started_at.naive_local(), &mut rng);

        let state = AppState {
            onboarding: OnboardingState::default(),
            active_tab: Tab::default(),
            active_view: View::default(),
            active_nav_link: None,
            watchlist,
            theme,
            notifications: VecDeque::new(),
            tour: TourState::Closed,
            chart,
            chart_overlay_visible: false,
            portfolio: demo::portfolio(),
            user_stats: demo::user_stats(),
            patterns: demo::patterns(),
            automated_patterns: BTreeSet::new(),
            open_pattern: None,
        };

        let mut scheduler = Scheduler::new();
        scheduler.schedule_interval(config.chart_tick_ms, TimerKind::ChartTick);
        scheduler.schedule_interval(config.pnl_tick_ms, TimerKind::PnlTick);

        log::info!(
            "Real-time data simulation started ({} watchlist symbols, {} theme)",
            state.watchlist.len(),
            state.theme
        );

        Ok(Self {
            notification_service: NotificationService::new(
                config.notification_timeout_ms,
                config.max_notifications,
            ),
            watchlist_service,
            theme_service,
            onboarding_service: OnboardingService::new(),
            navigation_service: NavigationService::new(),
            pattern_service: PatternService::new(),
            tour_service: TourService::new(demo::tour_steps()),
            simulation_service,
            trading_service: TradingService::new(),
            export_service: ExportService::new(),
            state,
            config,
            store,
            rng,
            scheduler,
            started_at,
            listeners: Vec::new(),
            next_listener_id: 0,
        })
    }

    fn dispatch(&mut self, kind: TimerKind) {
        match kind {
            TimerKind::ChartTick => {
                if let Some(price) = self
                    .simulation_service
                    .tick_chart(&mut self.state.chart, &mut self.rng)
                {
                    self.emit(ViewChange::ChartTick(price));
                }
            }
            TimerKind::PnlTick => {
                let moved = self
                    .simulation_service
                    .tick_pnl(&mut self.state.portfolio.positions, &mut self.rng);
                if moved > 0 {
                    self.emit(ViewChange::Positions);
                }
            }
            TimerKind::DismissNotification(id) => {
                if self
                    .notification_service
                    .expire(&mut self.state.notifications, id)
                {
                    self.emit(ViewChange::NotificationRemoved(id));
                }
            }
            TimerKind::OrderFill(side) => {
                let (title, message) = self.trading_service.order_executed(side);
                self.notify(title, message, Severity::Success);
                let change = self
                    .trading_service
                    .apply_fill(&mut self.state.portfolio, &mut self.rng);
                log::debug!("{side} fill booked, today's PnL +{change}");
                self.emit(ViewChange::Portfolio);
            }
        }
    }

    fn announce_watchlist(&mut self, change: &WatchlistChange) {
        if change.mutated() {
            self.emit(ViewChange::Watchlist);
        }
        if let Some((title, message, severity)) = change.notification() {
            self.notify(title, message, severity);
        }
    }

    fn tour_transition(
        &mut self,
        transition: impl FnOnce(&TourService, &mut TourState) -> TourState,
    ) -> TourState {
        let before = self.state.tour;
        let after = transition(&self.tour_service, &mut self.state.tour);
        if after != before {
            self.emit(ViewChange::Tour(after));
        }
        after
    }

    fn set_chart_overlay(&mut self, visible: bool) {
        if self.state.chart_overlay_visible != visible {
            self.state.chart_overlay_visible = visible;
            self.emit(ViewChange::ChartOverlay(visible));
        }
    }

    fn emit(&mut self, change: ViewChange) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&change);
        }
    }
}
