//! Editable surface update handlers
//!
//! Handles typing, caret moves, Tab/Shift+Tab and the two selectors.

use super::render::schedule_render;
use crate::commands::Cmd;
use crate::editable::{transform, IndentDirection};
use crate::messages::SurfaceMsg;
use crate::model::{SurfaceState, WidgetModel};

/// Handle messages from the editable surface and its controls
pub fn update_surface(model: &mut WidgetModel, msg: SurfaceMsg) -> Option<Cmd> {
    if model.read_only && !matches!(msg, SurfaceMsg::SelectionChanged { .. }) {
        tracing::debug!("Ignoring {:?} on read-only block", msg);
        return None;
    }

    match msg {
        SurfaceMsg::Input { text, caret } => {
            let caret = caret.min(text.chars().count());
            model.state = model.state.with_code(text.as_str());
            model.surface = SurfaceState { text, caret };
            Some(schedule_render(model))
        }

        SurfaceMsg::SelectionChanged { caret } => {
            model.surface.caret = caret.min(model.surface.text.chars().count());
            Some(schedule_render(model))
        }

        SurfaceMsg::Indent => indent(model, IndentDirection::Forward),
        SurfaceMsg::Outdent => indent(model, IndentDirection::Backward),

        SurfaceMsg::SelectLanguage(language) => {
            tracing::debug!("Language changed to {}", language);
            model.state = model.state.with_language(language);
            Some(schedule_render(model))
        }

        SurfaceMsg::SelectTheme(theme) => {
            tracing::debug!("Theme changed to {}", theme);
            model.state = model.state.with_theme(theme);
            Some(schedule_render(model))
        }
    }
}

/// Apply an indentation edit, write it back to the surface and re-render
fn indent(model: &mut WidgetModel, direction: IndentDirection) -> Option<Cmd> {
    let edit = transform(&model.surface.text, model.surface.caret, direction);

    if edit.new_text == model.surface.text && edit.new_caret == model.surface.caret {
        tracing::trace!("{:?} is a no-op at caret {}", direction, model.surface.caret);
        return None;
    }

    model.state = model.state.with_code(edit.new_text.as_str());
    model.surface = SurfaceState {
        text: edit.new_text.clone(),
        caret: edit.new_caret,
    };

    Some(Cmd::Batch(vec![
        Cmd::SyncSurface {
            text: edit.new_text,
            caret: Some(edit.new_caret),
        },
        schedule_render(model),
    ]))
}
