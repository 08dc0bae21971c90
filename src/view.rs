/// View state
///
/// Explicit rendition of the page flags the original client toggled in
/// place: the loading indicator, the failure notice, and the results
/// container. Transitions are named after the user-visible events; the
/// fade and reveal delays are fixed constants reported to the caller, not
/// slept on here.
use serde::Serialize;

/// Milliseconds the loading indicator keeps fading after a run settles.
pub const LOADER_FADE_MS: u64 = 500;

/// Milliseconds before the results container is revealed on success.
pub const RESULTS_REVEAL_MS: u64 = 1000;

/// Visible phase of the page, derived from the visibility flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    Idle,
    Loading,
    Results,
    Fail,
}

/// The page's visibility flags plus the injected markup.
#[derive(Debug, Clone, Default)]
pub struct ViewModel {
    loader_visible: bool,
    fail_visible: bool,
    results_visible: bool,
    results_html: Option<String>,
}

impl ViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-empty title submitted: loader on, any previous failure cleared.
    pub fn begin_loading(&mut self) {
        self.loader_visible = true;
        self.fail_visible = false;
    }

    /// Soft not-found: failure shown, results hidden, loader fading.
    pub fn show_failure(&mut self) {
        self.fail_visible = true;
        self.results_visible = false;
        self.loader_visible = false;
    }

    /// Markup injected verbatim; results revealed, loader fading. The
    /// embedding page also clears its input and scrolls to the top at
    /// this point.
    pub fn show_results(&mut self, html: String) {
        self.fail_visible = false;
        self.results_visible = true;
        self.results_html = Some(html);
        self.loader_visible = false;
    }

    /// Hard failure: only the loader settles; the alert is surfaced to
    /// the caller separately and the rest of the page is left as-is.
    pub fn dismiss_loader(&mut self) {
        self.loader_visible = false;
    }

    pub fn state(&self) -> ViewState {
        if self.loader_visible {
            ViewState::Loading
        } else if self.results_visible {
            ViewState::Results
        } else if self.fail_visible {
            ViewState::Fail
        } else {
            ViewState::Idle
        }
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            state: self.state(),
            loader_visible: self.loader_visible,
            fail_visible: self.fail_visible,
            results_visible: self.results_visible,
            results_html: self.results_html.clone(),
            loader_fade_ms: LOADER_FADE_MS,
            results_reveal_ms: RESULTS_REVEAL_MS,
        }
    }
}

/// Serializable snapshot of the view, exposed over the API.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ViewSnapshot {
    pub state: ViewState,
    pub loader_visible: bool,
    pub fail_visible: bool,
    pub results_visible: bool,
    pub results_html: Option<String>,
    pub loader_fade_ms: u64,
    pub results_reveal_ms: u64,
}
