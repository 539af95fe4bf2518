//! The code block widget: model, view and render workers wired together
//!
//! Host calls are translated into messages and run through
//! [`update`](crate::update::update). Commands are executed here: renders go
//! to a worker thread each and come back as [`RenderMsg::Completed`] over a
//! channel, paints go to the [`BlockView`].

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::commands::Cmd;
use crate::config::WidgetConfig;
use crate::error::RenderError;
use crate::highlight::{Catalog, HighlightEngine, HighlightRenderer};
use crate::input::{handle_key, KeyOutcome, KeyPress};
use crate::messages::{HostMsg, Msg, RenderMsg, SurfaceMsg};
use crate::model::{BlockData, SavedData, WidgetModel};
use crate::overlay::{ChromeTarget, OverlaySync, Paint};
use crate::syntax::TreeSitterEngine;
use crate::update::update;
use crate::view::{BlockView, ViewNode};

/// One editable, highlighted code block
pub struct EditorWidget {
    model: WidgetModel,
    view: BlockView,
    renderer: Arc<HighlightRenderer>,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    /// Render workers that have not reported back yet
    in_flight: usize,
    errors: Vec<RenderError>,
    started: bool,
}

impl EditorWidget {
    pub fn new(
        saved: Option<SavedData>,
        config: WidgetConfig,
        read_only: bool,
        engine: Arc<dyn HighlightEngine>,
        catalog: &dyn Catalog,
    ) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let renderer = Arc::new(HighlightRenderer::new(engine, &config.overlay_class));
        let model = WidgetModel::new(saved.as_ref(), config, read_only);
        let view = BlockView::build(&model, catalog);

        tracing::debug!(
            "EditorWidget created ({}, {}, read_only={})",
            model.state.language(),
            model.state.theme(),
            read_only
        );

        Self {
            model,
            view,
            renderer,
            msg_tx,
            msg_rx,
            in_flight: 0,
            errors: Vec::new(),
            started: false,
        }
    }

    /// Widget backed by the built-in tree-sitter engine and its catalog
    pub fn with_builtin_engine(
        saved: Option<SavedData>,
        config: WidgetConfig,
        read_only: bool,
    ) -> Self {
        let engine = Arc::new(TreeSitterEngine::new());
        let catalog = Arc::clone(&engine);
        Self::new(saved, config, read_only, engine, catalog.as_ref())
    }

    // =========================================================================
    // Host lifecycle
    // =========================================================================

    /// Root of the view; the first call issues the initial render
    pub fn render(&mut self) -> &ViewNode {
        if !self.started {
            self.started = true;
            self.dispatch(Msg::Host(HostMsg::Refresh));
        }
        self.view.root()
    }

    /// Serialized block for the host to persist
    pub fn save(&self) -> BlockData {
        self.model.data()
    }

    /// Getter half of the data accessor
    pub fn data(&self) -> BlockData {
        self.model.data()
    }

    /// Setter half of the data accessor; does not re-highlight
    pub fn set_data(&mut self, data: impl Into<SavedData>) {
        self.dispatch(Msg::Host(HostMsg::SetData(data.into())));
    }

    /// Replace the code with pasted text and re-highlight
    pub fn on_paste(&mut self, text: &str) {
        self.dispatch(Msg::Host(HostMsg::Paste(text.to_string())));
    }

    /// Re-highlight the current state
    pub fn refresh(&mut self) {
        self.dispatch(Msg::Host(HostMsg::Refresh));
    }

    // =========================================================================
    // Surface events
    // =========================================================================

    pub fn input(&mut self, text: &str, caret: usize) {
        self.dispatch(Msg::Surface(SurfaceMsg::Input {
            text: text.to_string(),
            caret,
        }));
    }

    pub fn selection_changed(&mut self, caret: usize) {
        self.dispatch(Msg::Surface(SurfaceMsg::SelectionChanged { caret }));
    }

    pub fn select_language(&mut self, language: &str) {
        self.dispatch(Msg::Surface(SurfaceMsg::SelectLanguage(language.to_string())));
    }

    pub fn select_theme(&mut self, theme: &str) {
        self.dispatch(Msg::Surface(SurfaceMsg::SelectTheme(theme.to_string())));
    }

    /// Key-down on the surface; `Handled` means suppress the native default
    pub fn key_down(&mut self, press: &KeyPress) -> KeyOutcome {
        if self.model.read_only {
            return KeyOutcome::Ignored;
        }
        let (outcome, msg) = handle_key(press);
        if let Some(msg) = msg {
            self.dispatch(msg);
        }
        outcome
    }

    // =========================================================================
    // Event loop
    // =========================================================================

    /// Run a message through the reducer and execute the resulting commands
    pub fn dispatch(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.process_cmd(cmd);
        }
        self.view
            .select_option(ChromeTarget::LanguageSelect, self.model.state.language());
        self.view
            .select_option(ChromeTarget::ThemeSelect, self.model.state.theme());
    }

    /// Apply every completion that has already arrived; returns how many
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.handle_async(msg);
            handled += 1;
        }
        handled
    }

    /// Block until no render is in flight or `timeout` elapses
    ///
    /// Returns `true` if the pipeline went idle in time.
    pub fn wait_idle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.in_flight > 0 {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.msg_rx.recv_timeout(remaining) {
                Ok(msg) => self.handle_async(msg),
                Err(RecvTimeoutError::Timeout) => {
                    tracing::warn!("{} render(s) still in flight after {:?}", self.in_flight, timeout);
                    return false;
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        true
    }

    /// Render errors reported since the last call
    pub fn take_errors(&mut self) -> Vec<RenderError> {
        std::mem::take(&mut self.errors)
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Whether the overlay shows the outcome of the latest request
    pub fn is_settled(&self) -> bool {
        self.model.render.is_settled()
    }

    pub fn model(&self) -> &WidgetModel {
        &self.model
    }

    pub fn view(&self) -> &BlockView {
        &self.view
    }

    fn handle_async(&mut self, msg: Msg) {
        if matches!(msg, Msg::Render(RenderMsg::Completed { .. })) {
            self.in_flight = self.in_flight.saturating_sub(1);
        }
        self.dispatch(msg);
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::Render(request) => {
                self.in_flight += 1;
                let tx = self.msg_tx.clone();
                let renderer = Arc::clone(&self.renderer);
                std::thread::spawn(move || {
                    // A panicking engine still has to report back, or the
                    // request stays in flight forever
                    let outcome = panic::catch_unwind(AssertUnwindSafe(|| renderer.render(&request)))
                        .unwrap_or_else(|payload| {
                            let message = panic_message(payload.as_ref());
                            tracing::error!("render v{} panicked: {}", request.version, message);
                            Err(RenderError::RenderFailure(format!("engine panicked: {}", message)))
                        });
                    let _ = tx.send(Msg::Render(RenderMsg::Completed {
                        version: request.version,
                        outcome,
                    }));
                });
            }
            Cmd::SyncSurface { text, caret } => {
                self.view.set_surface_text(&text, caret);
            }
            Cmd::PaintOverlay(result) => {
                OverlaySync::apply(&result, &mut self.view);
            }
            Cmd::PaintFallback { code } => {
                OverlaySync::apply_fallback(&code, &self.model.config.overlay_class, &mut self.view);
            }
            Cmd::ReportError(err) => {
                self.errors.push(err);
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }
}

/// Text of a panic payload (`panic!` with a literal or a formatted message)
fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

impl std::fmt::Debug for EditorWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorWidget")
            .field("model", &self.model)
            .field("in_flight", &self.in_flight)
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}
