//! The style and script block injected into every branded page.

use crate::core::color;
use crate::domain::model::{Palette, PaletteRole};

/// Id of the injected `<style>` element. Its presence means a page was already themed.
pub const INJECTION_MARKER: &str = "hb-heartbeat-theme";

// Placeholders are `{role}` plus `{main_rgb}`; literal CSS braces never enclose a bare role name.
// Attribute selectors use single quotes so the page-level `fill="..."` rewrite cannot reach them.
const THEME_TEMPLATE: &str = r##"
<!-- Heartbeat theme injection -->
<style id="hb-heartbeat-theme">
    :root {
        --hb-accent: {main};
        --hb-accent-bright: {bright};
        --hb-accent-bold: {bold};
        --n-primary-color: var(--hb-accent);
        --n-primary-color-hover: var(--hb-accent-bright);
        --n-primary-color-pressed: var(--hb-accent-bold);
        --n-primary-color-suppl: var(--hb-accent);
        --n-item-text-color-active: var(--hb-accent);
        --n-item-text-color-active-hover: var(--hb-accent-bright);
        --n-item-icon-color-active: var(--hb-accent);
        --n-item-icon-color-active-hover: var(--hb-accent-bright);
        --n-item-border-color-active: var(--hb-accent);
        --n-info-color: var(--hb-accent);
        --n-success-color: var(--hb-accent);
        --n-input-border-color: var(--hb-accent);
        --n-input-border-color-hover: var(--hb-accent-bright);
        --n-input-border-color-pressed: var(--hb-accent-bold);
        --n-base-selection-border-color: var(--hb-accent);
        --n-base-selection-border-color-hover: var(--hb-accent-bright);
        --n-base-selection-border-color-active: var(--hb-accent);
        --n-color-picker-border-color: var(--hb-accent);
        --n-border-color: rgba(255, 255, 255, 0.08);
        --n-border-color-hover: rgba(255, 255, 255, 0.2);
        --n-border-color-pressed: rgba(255, 255, 255, 0.25);
        --n-border-radius: 4px;
        --n-border-radius-large: 4px;
        --n-close-color-hover: var(--hb-accent-bright);
        --n-color: rgba(12, 12, 18, 0.9);
        --n-color-hover: rgba(15, 15, 22, 0.95);
        --n-color-pressed: rgba(10, 10, 15, 0.95);
        --n-color-target: rgba(12, 12, 18, 0.95);
        --n-button-border-radius: 4px;
        --n-button-text-color: #f8f8ff;
        --n-button-text-color-hover: #fff;
        --n-loading-color: var(--hb-accent);
        --n-border-radius-circle: 4px;
    }

    body {
        scrollbar-width: thin;
        scrollbar-color: var(--hb-accent-bold) rgba(6, 6, 12, 0.95);
        background: radial-gradient(circle at 20% 20%, rgba({main_rgb}, 0.08), rgba(6, 6, 10, 0.95)) !important;
        color: #f8f8ff;
    }

    body, #app {
        min-height: 100vh;
        background-color: #0b0c11;
    }

    .n-layout, .n-layout-scroll-container, .n-scrollbar, .n-scrollbar-content {
        background: transparent !important;
    }

    .n-card, .n-collapse, .n-collapse-item, .n-tabs-pane, .n_drawer {
        background: rgba(12, 12, 18, 0.9) !important;
        border-radius: 4px !important;
        border: 1px solid rgba(255, 255, 255, 0.08) !important;
        box-shadow: 0 25px 60px rgba(9, 11, 22, 0.45) !important;
    }

    .n-card-header, .n-card__content, .n-collapse-item__content-inner {
        background: transparent !important;
    }

    .n-input, .n-input--textarea, .n-select, .n-base-selection-label, .n-input-number, .n-upload-dragger {
        background: rgba(20, 20, 26, 0.9) !important;
        border-radius: 4px !important;
        border: 1px solid rgba(255, 255, 255, 0.08) !important;
        color: #f2f4ff !important;
    }

    .n-input:hover,
    .n-input--textarea:hover,
    .n-select:hover,
    .n-base-selection:hover,
    .n-base-selection-label:hover,
    .n-input-number:hover,
    .n-upload-dragger:hover {
        border-color: var(--hb-accent) !important;
        box-shadow: 0 0 0 1px var(--hb-accent) inset !important;
    }

    .n-input:focus-within, .n-select:focus-within, .n-base-selection:focus-within {
        border-color: var(--hb-accent) !important;
        box-shadow: 0 0 0 1px var(--hb-accent) inset !important;
        background: rgba(20, 8, 8, 0.92) !important;
    }

    .n-button {
        border-radius: 4px !important;
        text-transform: uppercase;
        letter-spacing: 0.05em;
    }

    .n-button--primary-type {
        background: linear-gradient(135deg, var(--hb-accent) 0%, var(--hb-accent-bold) 100%) !important;
        border: 1px solid var(--hb-accent-bold) !important;
        color: #fff !important;
    }

    .n-button--primary-type:hover {
        background: linear-gradient(135deg, var(--hb-accent-bright) 0%, var(--hb-accent) 100%) !important;
    }

    .n-switch {
        --n-switch-rail-background-color-active: var(--hb-accent);
        --n-switch-rail-border-color-active: var(--hb-accent);
        --n-switch-rail-background-color-hover: var(--hb-accent-bright);
    }

    .n-tabs-nav-scroll-content, .n-tabs, .n-tabs-nav {
        --n-tab-text-color-active: var(--hb-accent);
        --n-tab-text-color-hover: var(--hb-accent-bright);
    }

    .n-gradient-text {
        --n-color-start: var(--hb-accent);
        --n-color-end: var(--hb-accent-bright);
    }

    ::-webkit-scrollbar {
        width: 12px;
        height: 12px;
        background: transparent;
    }

    ::-webkit-scrollbar-track {
        background: rgba(6, 6, 12, 0.95);
        border-radius: 999px;
        border: 1px solid rgba(255, 255, 255, 0.04);
        box-shadow: inset 0 0 10px rgba(0, 0, 0, 0.85);
    }

    ::-webkit-scrollbar-thumb {
        background: linear-gradient(180deg, var(--hb-accent-bright) 0%, var(--hb-accent) 95%);
        border-radius: 999px;
        border: 2px solid rgba(8, 8, 10, 0.85);
        box-shadow: inset 0 0 6px rgba(0, 0, 0, 0.58), 0 0 10px var(--hb-accent);
    }

    ::-webkit-scrollbar-thumb:hover {
        background: linear-gradient(180deg, {hover} 0%, var(--hb-accent) 90%);
        box-shadow: inset 0 0 8px rgba(0, 0, 0, 0.72), 0 0 12px {hover};
    }

    ::-webkit-scrollbar-thumb:active {
        background: linear-gradient(180deg, var(--hb-accent) 5%, {active} 100%);
    }

    svg.gradient stop:nth-of-type(1) {
        stop-color: var(--hb-accent-bright) !important;
    }

    svg.gradient stop:nth-of-type(2),
    svg.gradient stop:nth-of-type(3) {
        stop-color: var(--hb-accent) !important;
    }

    svg.gradient path[fill='#14a058'] {
        fill: var(--hb-accent-bold) !important;
    }

    svg.gradient path[fill='url(#a)'] {
        fill: var(--hb-accent) !important;
    }

    a.support-button,
    [class*="support-button"],
    a[href*="buymeacoffee"],
    a[href*="buy-me-a-coffee"] {
        display: none !important;
    }
</style>
<script id="hb-heartbeat-sanitize">
    (function () {
        const hideSupport = () => {
            document
                .querySelectorAll('a[href*="buymeacoffee"], .support-button')
                .forEach((node) => {
                    const target = node.closest('[data-v-6488e27f]') || node;
                    target.style.setProperty('display', 'none', 'important');
                });
        };
        hideSupport();
        const observer = new MutationObserver(hideSupport);
        observer.observe(document.documentElement, { childList: true, subtree: true });
    })();
</script>
"##;

/// Render the block with `palette` substituted in.
pub fn render_theme_snippet(palette: &Palette) -> String {
    let (r, g, b) = color::rgb(&palette.main);
    let mut snippet = THEME_TEMPLATE.replace("{main_rgb}", &format!("{r}, {g}, {b}"));
    for role in PaletteRole::ALL {
        snippet = snippet.replace(&format!("{{{}}}", role.name()), palette.get(role));
    }
    snippet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::{derive_palette, DEFAULT_ACCENT};

    #[test]
    fn test_all_placeholders_filled() {
        let snippet = render_theme_snippet(&derive_palette(DEFAULT_ACCENT));
        for role in PaletteRole::ALL {
            assert!(!snippet.contains(&format!("{{{}}}", role.name())), "{role} left unfilled");
        }
        assert!(!snippet.contains("{main_rgb}"));
    }

    #[test]
    fn test_palette_values_present() {
        let palette = derive_palette("#0055aa");
        let snippet = render_theme_snippet(&palette);
        assert!(snippet.contains("--hb-accent: #0055aa;"));
        assert!(snippet.contains(&format!("--hb-accent-bright: {};", palette.bright)));
        assert!(snippet.contains(&format!("--hb-accent-bold: {};", palette.bold)));
        assert!(snippet.contains(&palette.hover));
        assert!(snippet.contains(&palette.active));
        assert!(snippet.contains("rgba(0, 85, 170, 0.08)"));
    }

    #[test]
    fn test_snippet_carries_marker_and_observer() {
        let snippet = render_theme_snippet(&derive_palette(DEFAULT_ACCENT));
        assert!(snippet.contains(&format!("<style id=\"{INJECTION_MARKER}\">")));
        assert!(snippet.contains("new MutationObserver(hideSupport)"));
        assert!(snippet.contains("subtree: true"));
        assert!(!snippet.contains("fill=\"#14a058\""));
    }
}
