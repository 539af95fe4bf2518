//! Host-initiated update handlers (data setter, paste, refresh)

use super::render::schedule_render;
use crate::commands::Cmd;
use crate::messages::HostMsg;
use crate::model::{CodeBlockState, SurfaceState, WidgetModel};

/// Handle messages from the host editor
pub fn update_host(model: &mut WidgetModel, msg: HostMsg) -> Option<Cmd> {
    match msg {
        // Setter: replace the triple and push code into the surface.
        // Re-highlighting is left to the caller (HostMsg::Refresh).
        HostMsg::SetData(saved) => {
            let current = &model.state;
            model.state = CodeBlockState::new(
                saved.code.unwrap_or_else(|| current.code().to_string()),
                saved.lang.unwrap_or_else(|| current.language().to_string()),
                saved.theme.unwrap_or_else(|| current.theme().to_string()),
            );
            model.surface = SurfaceState::new(model.state.code());
            Some(Cmd::SyncSurface {
                text: model.state.code().to_string(),
                caret: None,
            })
        }

        HostMsg::Paste(text) => {
            if model.read_only {
                tracing::debug!("Ignoring paste on read-only block");
                return None;
            }
            model.state = model.state.with_code(text.as_str());
            model.surface = SurfaceState::new(&text);
            Some(Cmd::Batch(vec![
                Cmd::SyncSurface { text, caret: None },
                schedule_render(model),
            ]))
        }

        HostMsg::Refresh => Some(schedule_render(model)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlockData, SavedData};

    #[test]
    fn test_set_data_syncs_surface_without_render() {
        let mut model = WidgetModel::default();
        let cmd = update_host(
            &mut model,
            BlockData::new("x", "python", "nord").into(),
        );

        assert!(matches!(cmd, Some(Cmd::SyncSurface { ref text, caret: None }) if text == "x"));
        assert!(cmd.unwrap().render_request().is_none());
        assert_eq!(model.render.latest, 0);
        assert_eq!(model.data(), BlockData::new("x", "python", "nord"));
        assert_eq!(model.surface.text, "x");
    }

    #[test]
    fn test_set_data_partial_keeps_current_fields() {
        let mut model = WidgetModel::default();
        update_host(
            &mut model,
            HostMsg::SetData(SavedData {
                code: Some("y".to_string()),
                ..SavedData::default()
            }),
        );
        assert_eq!(model.data(), BlockData::new("y", "javascript", "vitesse-dark"));
    }

    #[test]
    fn test_paste_replaces_code_and_renders() {
        let mut model = WidgetModel::default();
        model.state = model.state.with_language("rust");
        let cmd = update_host(&mut model, HostMsg::Paste("fn x() {}".to_string())).unwrap();

        let request = cmd.render_request().unwrap();
        assert_eq!(request.code, "fn x() {}");
        assert_eq!(request.language, "rust");
        assert_eq!(model.surface.caret, 9);
    }

    #[test]
    fn test_refresh_always_issues_new_version() {
        let mut model = WidgetModel::default();
        update_host(&mut model, HostMsg::Refresh);
        let cmd = update_host(&mut model, HostMsg::Refresh).unwrap();
        assert_eq!(cmd.render_request().unwrap().version, 2);
    }
}
