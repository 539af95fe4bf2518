//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod host;
mod render;
mod surface;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::WidgetModel;

pub use host::update_host;
pub use render::{schedule_render, update_render};
pub use surface::update_surface;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps the dispatch in a tracing span.
#[inline]
pub fn update(model: &mut WidgetModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    let _span = tracing::debug_span!("update", version = model.render.latest).entered();

    match msg {
        Msg::Surface(m) => update_surface(model, m),
        Msg::Host(m) => update_host(model, m),
        Msg::Render(m) => update_render(model, m),
    }
}
