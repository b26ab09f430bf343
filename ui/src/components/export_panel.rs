use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::core::platform;

use crate::charts::ChartHandle;
use crate::export::{self, Background, ExportFormat, ExportOptions, Watermark};

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working(&'static str),
    Done(String),
    Error(String),
}

/// Export options card for one chart: format, background, watermark, go.
/// A failed export aborts that invocation only — the chart and the rest of
/// the dashboard stay usable.
#[component]
pub fn ExportPanel(handle: ChartHandle, on_close: EventHandler<()>) -> Element {
    let format = use_signal(ExportFormat::default);
    let background = use_signal(Background::default);
    let watermark_on = use_signal(|| true);
    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working(label) => {
            Some(("panel__meta".to_string(), format!("{label}…")))
        }
        ExportStatus::Done(message) => Some((
            "panel__meta panel__meta--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "panel__meta panel__meta--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let export_handler = {
        let handle = handle.clone();
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }
            busy_signal.set(true);

            let options = ExportOptions {
                format: format(),
                background: background(),
                watermark: if watermark_on() {
                    Watermark::Subtle
                } else {
                    Watermark::None
                },
                ..Default::default()
            };
            status_signal.set(ExportStatus::Working(match options.format {
                ExportFormat::Png => "Preparing PNG",
                ExportFormat::Svg => "Preparing SVG",
            }));

            let handle = handle.clone();
            #[cfg(target_arch = "wasm32")]
            {
                let mut status_signal = status_signal;
                let mut busy_signal = busy_signal;
                platform::spawn_future(async move {
                    let outcome = export::export_chart(&handle, &handle.title, &options).await;
                    status_signal.set(describe_outcome(outcome));
                    busy_signal.set(false);
                });
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let outcome = futures::executor::block_on(export::export_chart(
                    &handle,
                    &handle.title,
                    &options,
                ));
                status_signal.set(describe_outcome(outcome));
                busy_signal.set(false);
            }
        }
    };

    let mut format_signal = format;
    let mut background_signal = background;
    let mut watermark_signal = watermark_on;
    let current_format = format();
    let current_background = background();

    rsx! {
        div { class: "panel-overlay", onclick: move |_| on_close.call(()),
            div { class: "panel panel--export", onclick: move |evt| evt.stop_propagation(),
                div { class: "panel__header",
                    h3 { class: "panel__title", "📤 Export Chart: {handle.title}" }
                    button {
                        r#type: "button",
                        class: "panel__close",
                        aria_label: "Close export panel",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }

                div { class: "panel__body",
                    div { class: "panel__group",
                        span { class: "panel__label", "Format" }
                        div { class: "panel__choices",
                            button {
                                r#type: "button",
                                class: if current_format == ExportFormat::Png { "choice choice--active" } else { "choice" },
                                onclick: move |_| format_signal.set(ExportFormat::Png),
                                "PNG"
                            }
                            button {
                                r#type: "button",
                                class: if current_format == ExportFormat::Svg { "choice choice--active" } else { "choice" },
                                onclick: move |_| format_signal.set(ExportFormat::Svg),
                                "SVG"
                            }
                        }
                    }

                    div { class: "panel__group",
                        span { class: "panel__label", "Background" }
                        div { class: "panel__choices",
                            button {
                                r#type: "button",
                                class: if current_background == Background::Transparent { "choice choice--active" } else { "choice" },
                                onclick: move |_| background_signal.set(Background::Transparent),
                                "Transparent"
                            }
                            button {
                                r#type: "button",
                                class: if current_background == Background::Solid("#ffffff".to_string()) { "choice choice--active" } else { "choice" },
                                onclick: move |_| background_signal.set(Background::Solid("#ffffff".to_string())),
                                "White"
                            }
                            button {
                                r#type: "button",
                                class: if current_background == Background::Solid("#000000".to_string()) { "choice choice--active" } else { "choice" },
                                onclick: move |_| background_signal.set(Background::Solid("#000000".to_string())),
                                "Black"
                            }
                        }
                    }

                    label { class: "panel__checkbox",
                        input {
                            r#type: "checkbox",
                            checked: watermark_on(),
                            oninput: move |evt| watermark_signal.set(evt.checked()),
                        }
                        "Include SentimentX watermark"
                    }
                }

                div { class: "panel__footer",
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        disabled: busy(),
                        onclick: export_handler,
                        "📤 Export Chart"
                    }
                }

                if let Some((class_name, message)) = feedback {
                    p { class: "{class_name}", "{message}" }
                }
            }
        }
    }
}

fn describe_outcome(outcome: Result<Option<String>, export::ExportError>) -> ExportStatus {
    match outcome {
        Ok(Some(path)) => ExportStatus::Done(format!("Export saved to {path}")),
        Ok(None) => ExportStatus::Done("Download started".to_string()),
        Err(err) => ExportStatus::Error(err.to_string()),
    }
}
