#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the desktop UI (the
  dashboard window, charts, and the export/share panels in particular)
  remain present in the unified shared theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes,
  preventing a silent styling regression in packaged (embedded) builds.

How it works:
- We compile‑time embed the unified theme using `include_str!` pointing to
  the shared `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    "[data-theme=\"light\"]",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--ghost",
    // Search + errors
    ".search-form",
    ".error-banner",
    // Dashboard shell
    ".dashboard-window",
    ".dashboard-placeholder",
    ".stats-grid",
    ".stat-card",
    ".progress-bar",
    ".progress-bar__fill",
    // Charts
    ".chart-container",
    ".chart-canvas",
    ".chart-canvas--revealed",
    ".chart-actions",
    ".donut-legend",
    ".legend-item",
    // Tweets
    ".tweet-card",
    ".sentiment-badge",
    ".sentiment-badge--positive",
    ".sentiment-badge--negative",
    ".sentiment-badge--neutral",
    // Export / share panels
    ".panel-overlay",
    ".panel__meta--success",
    ".panel__meta--error",
    ".choice--active",
    ".share-target",
    ".audience-grid",
    ".message-editor",
    ".char-count--over",
    // Accessibility helpers
    ".sr-only",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 3_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn reveal_animation_is_paint_only() {
    // The chart reveal must stay CSS-driven (clip/opacity), never a markup
    // mutation, so exports always capture the final state.
    assert!(THEME_CSS.contains("clip-path"));
    assert!(THEME_CSS.contains(".chart-canvas--revealed"));
}
