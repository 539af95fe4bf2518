//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::error::RenderError;
use crate::highlight::RenderResult;
use crate::model::{BlockData, SavedData};

/// Messages originating from the editable surface and its controls
#[derive(Debug, Clone)]
pub enum SurfaceMsg {
    /// The surface's value changed (typing, cut, drop)
    Input { text: String, caret: usize },
    /// The caret moved without a text change
    SelectionChanged { caret: usize },
    /// Tab on the surface
    Indent,
    /// Shift+Tab on the surface
    Outdent,
    /// Language picked in the language selector
    SelectLanguage(String),
    /// Theme picked in the theme selector
    SelectTheme(String),
}

/// Messages from the host editor
#[derive(Debug, Clone)]
pub enum HostMsg {
    /// Setter half of the data accessor (does not re-highlight)
    SetData(SavedData),
    /// Pasted text replaces the code, keeping language and theme
    Paste(String),
    /// Explicit re-highlight of the current state
    Refresh,
}

/// Messages produced by the render pipeline
#[derive(Debug, Clone)]
pub enum RenderMsg {
    /// A render request resolved (in any order)
    Completed {
        version: u64,
        outcome: Result<RenderResult, RenderError>,
    },
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Surface(SurfaceMsg),
    Host(HostMsg),
    Render(RenderMsg),
}

impl From<BlockData> for HostMsg {
    fn from(data: BlockData) -> Self {
        HostMsg::SetData(data.into())
    }
}
