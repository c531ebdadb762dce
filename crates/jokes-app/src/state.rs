//! Application state (Model in TEA pattern)

use jokes_core::{AppPhase, Joke, RequestToken};

use crate::config::Settings;

/// What the content panel shows.
///
/// Exactly one variant is active, so "loading with an error" cannot be
/// represented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    /// No fetch issued yet
    #[default]
    Idle,
    /// The most recent fetch is outstanding
    Loading,
    /// The most recent fetch succeeded
    Loaded(Joke),
    /// The most recent fetch failed; holds the user-visible message
    Failed(String),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// Anything but `Loading`
    pub fn is_settled(&self) -> bool {
        !self.is_loading()
    }

    /// User-visible error message, if the view is in the error state
    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// The joke being displayed, if any
    pub fn displayed_joke(&self) -> Option<&Joke> {
        match self {
            ViewState::Loaded(joke) => Some(joke),
            _ => None,
        }
    }

    /// Short lowercase name used in logs and headless output
    pub fn label(&self) -> &'static str {
        match self {
            ViewState::Idle => "idle",
            ViewState::Loading => "loading",
            ViewState::Loaded(_) => "loaded",
            ViewState::Failed(_) => "failed",
        }
    }
}

/// A rectangular screen region in terminal cells.
///
/// Recorded by the renderer so mouse clicks can be hit-tested without the
/// app crate depending on the terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitBox {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl HitBox {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && u32::from(column) < u32::from(self.x) + u32::from(self.width)
            && u32::from(row) < u32::from(self.y) + u32::from(self.height)
    }
}

/// Number of frames in the loading spinner
pub const SPINNER_FRAMES: usize = 10;

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application lifecycle phase
    pub phase: AppPhase,

    /// What the content panel shows
    pub view: ViewState,

    /// Last successfully fetched joke.
    ///
    /// Survives later failures and reloads; only the view decides whether
    /// it is displayed.
    pub joke: Option<Joke>,

    /// Token of the most recently issued fetch
    pub latest_token: RequestToken,

    /// Fetches issued but not yet answered (including superseded ones)
    pub in_flight: usize,

    /// Results applied to the view (successes and failures)
    pub results_applied: u64,

    /// Superseded responses that were dropped
    pub stale_discarded: u64,

    /// Token of the most recently dropped response
    pub last_discarded: Option<RequestToken>,

    /// Quit as soon as the view settles
    pub quit_when_settled: bool,

    /// Loading spinner frame, advanced on every tick while loading
    pub spinner_frame: usize,

    /// Where the "Get New Joke" button was last drawn
    pub button_area: Option<HitBox>,

    /// Endpoint description shown in the footer
    pub endpoint: String,

    /// Application settings
    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create a new AppState with settings
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Initializing,
            view: ViewState::Idle,
            joke: None,
            latest_token: RequestToken::NONE,
            in_flight: 0,
            results_applied: 0,
            stale_discarded: 0,
            last_discarded: None,
            quit_when_settled: false,
            spinner_frame: 0,
            button_area: None,
            endpoint: settings.endpoint.url.clone(),
            settings,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Text of the last successfully fetched joke, or "" if none yet
    pub fn joke_text(&self) -> &str {
        self.joke.as_ref().map(Joke::as_str).unwrap_or("")
    }

    /// Allocate the token for a new fetch and enter the loading state
    pub fn begin_fetch(&mut self) -> RequestToken {
        let token = self.latest_token.next();
        self.latest_token = token;
        self.in_flight += 1;
        self.spinner_frame = 0;
        self.view = ViewState::Loading;
        token
    }

    /// Whether `token` belongs to the most recently issued fetch
    pub fn is_current(&self, token: RequestToken) -> bool {
        token == self.latest_token
    }

    /// Bookkeeping shared by every fetch result, stale or not
    pub fn record_response(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    pub fn tick_spinner(&mut self) {
        if self.view.is_loading() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES;
        }
    }

    /// Quit now if a settled quit was requested and the view has settled
    pub fn quit_if_settled(&mut self) {
        if self.quit_when_settled && self.view.is_settled() {
            self.phase = AppPhase::Quitting;
        }
    }
}
