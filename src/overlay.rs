//! Overlay synchronization
//!
//! Applies render outcomes to whatever displays the block. The target is
//! abstract ([`Paint`]) so the same sink drives the headless view, a DOM
//! bridge or a test recorder.

use crate::highlight::{escape_html, Element, RenderResult};

/// Controls that mirror the theme's background/foreground
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChromeTarget {
    Wrapper,
    LanguageSelect,
    ThemeSelect,
}

impl ChromeTarget {
    /// Every control that receives the root style, in paint order
    pub const ALL: [ChromeTarget; 3] = [
        ChromeTarget::Wrapper,
        ChromeTarget::LanguageSelect,
        ChromeTarget::ThemeSelect,
    ];
}

/// Sink for everything the widget paints
pub trait Paint {
    /// Replace the overlay's inner markup
    fn set_overlay_markup(&mut self, markup: &str);

    /// Set the inline style of a chrome control
    fn set_chrome_style(&mut self, target: ChromeTarget, style: &str);

    /// Replace the editable surface's value; `caret` is in chars
    fn set_surface_text(&mut self, text: &str, caret: Option<usize>);
}

/// Applies render results and failures to a [`Paint`] target
pub struct OverlaySync;

impl OverlaySync {
    /// Paint highlighted markup and mirror its root style onto the chrome
    pub fn apply(result: &RenderResult, paint: &mut dyn Paint) {
        paint.set_overlay_markup(&result.markup);
        for target in ChromeTarget::ALL {
            paint.set_chrome_style(target, &result.style_string);
        }
    }

    /// Paint the raw code in place of stale markup; chrome is left alone
    pub fn apply_fallback(code: &str, overlay_class: &str, paint: &mut dyn Paint) {
        paint.set_overlay_markup(&fallback_markup(code, overlay_class));
    }
}

/// Unhighlighted overlay contents for `code`
pub fn fallback_markup(code: &str, overlay_class: &str) -> String {
    let mut pre = Element::new("pre");
    pre.add_class(overlay_class);
    pre.inner_html = format!("<code>{}\n</code>", escape_html(code));
    pre.to_html()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        overlay: Vec<String>,
        chrome: Vec<(ChromeTarget, String)>,
        surface: Vec<String>,
    }

    impl Paint for Recorder {
        fn set_overlay_markup(&mut self, markup: &str) {
            self.overlay.push(markup.to_string());
        }

        fn set_chrome_style(&mut self, target: ChromeTarget, style: &str) {
            self.chrome.push((target, style.to_string()));
        }

        fn set_surface_text(&mut self, text: &str, _caret: Option<usize>) {
            self.surface.push(text.to_string());
        }
    }

    #[test]
    fn test_apply_mirrors_style_to_all_chrome() {
        let mut paint = Recorder::default();
        let result = RenderResult {
            markup: "<pre>hi</pre>".to_string(),
            style_string: "background-color:#121212;color:#dbd7ca".to_string(),
        };
        OverlaySync::apply(&result, &mut paint);

        assert_eq!(paint.overlay, ["<pre>hi</pre>"]);
        assert_eq!(paint.chrome.len(), 3);
        assert!(paint
            .chrome
            .iter()
            .all(|(_, style)| style == "background-color:#121212;color:#dbd7ca"));
        assert!(paint.surface.is_empty());
    }

    #[test]
    fn test_fallback_escapes_and_skips_chrome() {
        let mut paint = Recorder::default();
        OverlaySync::apply_fallback("<b>&", "overlay", &mut paint);

        assert_eq!(
            paint.overlay,
            [r#"<pre class="overlay"><code>&lt;b&gt;&amp;
</code></pre>"#]
        );
        assert!(paint.chrome.is_empty());
    }
}
