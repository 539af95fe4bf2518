//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::error::RenderError;
use crate::highlight::{RenderRequest, RenderResult};

/// Side effects requested by the update function
#[derive(Debug, Clone)]
pub enum Cmd {
    /// Start an asynchronous highlight render
    Render(RenderRequest),
    /// Write text (and optionally the caret) into the editable surface
    SyncSurface { text: String, caret: Option<usize> },
    /// Paint a highlight result into the overlay and chrome
    PaintOverlay(RenderResult),
    /// Paint unhighlighted code into the overlay
    PaintFallback { code: String },
    /// Tell the host a render failed
    ReportError(RenderError),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Combine two optional commands into one
    pub fn merge(first: Option<Cmd>, second: Option<Cmd>) -> Option<Cmd> {
        match (first, second) {
            (None, None) => None,
            (Some(cmd), None) | (None, Some(cmd)) => Some(cmd),
            (Some(Cmd::Batch(mut cmds)), Some(other)) => {
                cmds.push(other);
                Some(Cmd::Batch(cmds))
            }
            (Some(a), Some(b)) => Some(Cmd::Batch(vec![a, b])),
        }
    }

    /// Flatten nested batches into a list, preserving order
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            cmd => vec![cmd],
        }
    }

    /// The render request carried by this command tree, if any
    pub fn render_request(&self) -> Option<&RenderRequest> {
        match self {
            Cmd::Render(request) => Some(request),
            Cmd::Batch(cmds) => cmds.iter().find_map(Cmd::render_request),
            _ => None,
        }
    }
}
