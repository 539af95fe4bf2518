//! Render pipeline update handlers
//!
//! Every state change that should be visible issues a new version. A
//! completion is applied only while its version is still the latest one,
//! so a slow older render can never overwrite a newer one.

use crate::commands::Cmd;
use crate::highlight::RenderRequest;
use crate::messages::RenderMsg;
use crate::model::WidgetModel;

/// Issue a render of the current state under a fresh version
pub fn schedule_render(model: &mut WidgetModel) -> Cmd {
    let version = model.render.next_version();
    tracing::debug!(
        "schedule_render: v{} ({}, {}, {} chars)",
        version,
        model.state.language(),
        model.state.theme(),
        model.state.code().len()
    );
    Cmd::Render(RenderRequest::snapshot(&model.state, version))
}

/// Handle render completions
pub fn update_render(model: &mut WidgetModel, msg: RenderMsg) -> Option<Cmd> {
    match msg {
        RenderMsg::Completed { version, outcome } => {
            if !model.render.is_current(version) {
                tracing::debug!(
                    "Discarding stale render: v{} (latest v{})",
                    version,
                    model.render.latest
                );
                return None;
            }

            model.render.applied = Some(version);

            match outcome {
                Ok(result) => {
                    tracing::debug!("Applying render v{}", version);
                    Some(Cmd::PaintOverlay(result))
                }
                Err(err) => {
                    tracing::warn!("Render v{} failed: {}", version, err);
                    Some(Cmd::Batch(vec![
                        Cmd::PaintFallback {
                            code: model.state.code().to_string(),
                        },
                        Cmd::ReportError(err),
                    ]))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use crate::highlight::RenderResult;

    fn completed(version: u64, markup: &str) -> RenderMsg {
        RenderMsg::Completed {
            version,
            outcome: Ok(RenderResult {
                markup: markup.to_string(),
                style_string: String::new(),
            }),
        }
    }

    #[test]
    fn test_schedule_render_snapshots_state() {
        let mut model = WidgetModel::default();
        model.state = model.state.with_code("let a = 1;");
        let cmd = schedule_render(&mut model);

        let request = cmd.render_request().expect("Render command");
        assert_eq!(request.version, 1);
        assert_eq!(request.code, "let a = 1;");
        assert_eq!(request.language, "javascript");
        assert_eq!(request.theme, "vitesse-dark");
        assert_eq!(model.render.latest, 1);
    }

    #[test]
    fn test_current_completion_is_painted() {
        let mut model = WidgetModel::default();
        schedule_render(&mut model);

        let cmd = update_render(&mut model, completed(1, "<pre>v1</pre>"));
        assert!(matches!(cmd, Some(Cmd::PaintOverlay(ref r)) if r.markup == "<pre>v1</pre>"));
        assert_eq!(model.render.applied, Some(1));
        assert!(model.render.is_settled());
    }

    #[test]
    fn test_older_completion_after_newer_is_discarded() {
        let mut model = WidgetModel::default();
        schedule_render(&mut model);
        schedule_render(&mut model);

        // v2 resolves first
        let cmd = update_render(&mut model, completed(2, "<pre>v2</pre>"));
        assert!(matches!(cmd, Some(Cmd::PaintOverlay(_))));

        // v1 resolves last and must not be applied
        let cmd = update_render(&mut model, completed(1, "<pre>v1</pre>"));
        assert!(cmd.is_none(), "Stale render should be discarded");
        assert_eq!(model.render.applied, Some(2));
    }

    #[test]
    fn test_older_completion_before_newer_is_discarded() {
        let mut model = WidgetModel::default();
        schedule_render(&mut model);
        schedule_render(&mut model);

        assert!(update_render(&mut model, completed(1, "<pre>v1</pre>")).is_none());
        assert_eq!(model.render.applied, None);
        assert!(update_render(&mut model, completed(2, "<pre>v2</pre>")).is_some());
    }

    #[test]
    fn test_failure_paints_fallback_and_reports() {
        let mut model = WidgetModel::default();
        model.state = model.state.with_code("a < b");
        schedule_render(&mut model);

        let cmd = update_render(
            &mut model,
            RenderMsg::Completed {
                version: 1,
                outcome: Err(RenderError::UnsupportedTheme("nope".to_string())),
            },
        )
        .expect("Failure should produce commands");

        let cmds = cmd.flatten();
        assert!(matches!(&cmds[0], Cmd::PaintFallback { code } if code == "a < b"));
        assert!(matches!(
            &cmds[1],
            Cmd::ReportError(RenderError::UnsupportedTheme(id)) if id == "nope"
        ));
        // State is untouched by the failure
        assert_eq!(model.state.code(), "a < b");
    }

    #[test]
    fn test_stale_failure_is_silent() {
        let mut model = WidgetModel::default();
        schedule_render(&mut model);
        schedule_render(&mut model);

        let cmd = update_render(
            &mut model,
            RenderMsg::Completed {
                version: 1,
                outcome: Err(RenderError::RenderFailure("boom".to_string())),
            },
        );
        assert!(cmd.is_none());
    }
}
