//! Widget model - the complete state of one code block
//!
//! Follows the Elm Architecture: the model is only changed by
//! [`crate::update::update`], which returns commands for side effects.

mod state;

pub use state::{BlockData, CodeBlockState, SavedData, DEFAULT_LANGUAGE, DEFAULT_THEME};

use crate::config::WidgetConfig;

/// Mirror of the plain-text surface (textarea) the user types into
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceState {
    /// Displayed value
    pub text: String,
    /// Caret offset in chars
    pub caret: usize,
}

impl SurfaceState {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            caret: text.chars().count(),
        }
    }
}

/// Bookkeeping for versioned render requests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderTracker {
    /// Highest version handed out so far (0 = nothing issued yet)
    pub latest: u64,
    /// Version whose outcome is currently painted, if any
    pub applied: Option<u64>,
}

impl RenderTracker {
    /// Hand out the next version
    pub fn next_version(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Whether a completion for `version` is still the newest request
    pub fn is_current(&self, version: u64) -> bool {
        version == self.latest
    }

    /// Whether the painted overlay reflects the latest request
    pub fn is_settled(&self) -> bool {
        self.latest == 0 || self.applied == Some(self.latest)
    }
}

/// The complete widget model
#[derive(Debug, Clone)]
pub struct WidgetModel {
    /// Committed state snapshot
    pub state: CodeBlockState,
    /// Plain-text surface contents
    pub surface: SurfaceState,
    /// Construction-time configuration
    pub config: WidgetConfig,
    /// Read-only widgets ignore user edits
    pub read_only: bool,
    /// Render versioning
    pub render: RenderTracker,
}

impl WidgetModel {
    pub fn new(saved: Option<&SavedData>, config: WidgetConfig, read_only: bool) -> Self {
        let state = CodeBlockState::seed(saved, &config);
        let surface = SurfaceState::new(state.code());
        Self {
            state,
            surface,
            config,
            read_only,
            render: RenderTracker::default(),
        }
    }

    /// Getter half of the data accessor
    pub fn data(&self) -> BlockData {
        self.state.to_data()
    }
}

impl Default for WidgetModel {
    fn default() -> Self {
        Self::new(None, WidgetConfig::default(), false)
    }
}
