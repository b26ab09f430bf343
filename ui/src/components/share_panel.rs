use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::core::platform;

use crate::charts::ChartHandle;
use crate::core::stats::SentimentStats;
use crate::export::ExportFormat;
use crate::share::{
    self, message, Audience, CloudService, MessageLength, ShareOptions, SharePlatform,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ShareTab {
    Social,
    Cloud,
}

#[derive(Clone, Debug, PartialEq)]
enum ShareStatus {
    Idle,
    Working,
    Done(String),
    Error(String),
}

/// Share card for one chart: target pickers, the smart-message controls,
/// and dispatch. Template misses leave the editor empty (and editable);
/// dispatch failures only abort this share.
#[component]
pub fn SharePanel(
    handle: ChartHandle,
    stats: SentimentStats,
    on_close: EventHandler<()>,
) -> Element {
    let tab = use_signal(|| ShareTab::Social);
    let platform_choice = use_signal(|| Option::<SharePlatform>::None);
    let service_choice = use_signal(|| Option::<CloudService>::None);
    let audience = use_signal(|| Audience::Business);
    let length = use_signal(|| MessageLength::Medium);
    let use_preset = use_signal(|| true);
    let message_text = use_signal(String::new);
    let watermark_on = use_signal(|| true);
    let cloud_format = use_signal(ExportFormat::default);
    let status = use_signal(|| ShareStatus::Idle);
    let busy = use_signal(|| false);

    let title = handle.title.clone();

    // Regenerate the smart message whenever the preset controls change,
    // mirroring the preset→editor flow of the share dialog. A catalog miss
    // clears the editor instead of erroring.
    use_effect({
        let title = title.clone();
        let mut message_text = message_text;
        move || {
            let platform = platform_choice();
            let audience = audience();
            let length = length();
            if !use_preset() {
                return;
            }
            let Some(platform) = platform else {
                return;
            };
            let generated = message::generate_message(
                platform,
                audience,
                length,
                &title,
                &stats,
                &mut rand::thread_rng(),
            );
            message_text.set(generated.unwrap_or_default());
        }
    });

    let regenerate_handler = {
        let title = title.clone();
        let mut message_text = message_text;
        move |_| {
            if let Some(platform) = platform_choice() {
                if let Some(generated) = message::generate_message(
                    platform,
                    audience(),
                    length(),
                    &title,
                    &stats,
                    &mut rand::thread_rng(),
                ) {
                    message_text.set(generated);
                }
            }
        }
    };

    let share_handler = {
        let handle = handle.clone();
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }

            let options = ShareOptions {
                message: message_text(),
                format: cloud_format(),
                include_watermark: watermark_on(),
                ..Default::default()
            };
            let target = match tab() {
                ShareTab::Social => platform_choice().map(ShareTarget::Social),
                ShareTab::Cloud => service_choice().map(ShareTarget::Cloud),
            };
            let Some(target) = target else {
                return;
            };

            busy_signal.set(true);
            status_signal.set(ShareStatus::Working);

            let handle = handle.clone();
            #[cfg(target_arch = "wasm32")]
            {
                let mut status_signal = status_signal;
                let mut busy_signal = busy_signal;
                platform::spawn_future(async move {
                    status_signal.set(dispatch(&handle, target, &options).await);
                    busy_signal.set(false);
                });
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let outcome = futures::executor::block_on(dispatch(&handle, target, &options));
                status_signal.set(outcome);
                busy_signal.set(false);
            }
        }
    };

    let mut tab_signal = tab;
    let mut platform_signal = platform_choice;
    let mut service_signal = service_choice;
    let mut audience_signal = audience;
    let mut length_signal = length;
    let mut preset_signal = use_preset;
    let mut message_signal = message_text;
    let mut watermark_signal = watermark_on;
    let mut cloud_format_signal = cloud_format;

    let current_tab = tab();
    let current_platform = platform_choice();
    let current_service = service_choice();
    let current_audience = audience();
    let current_length = length();
    let preset_on = use_preset();
    let current_message = message_text();
    let current_cloud_format = cloud_format();

    let message_limit = current_platform.map(|p| p.max_length());
    let over_limit = message_limit
        .map(|limit| current_message.chars().count() > limit)
        .unwrap_or(false);
    let share_disabled = busy()
        || match current_tab {
            ShareTab::Social => current_platform.is_none() || current_message.trim().is_empty(),
            ShareTab::Cloud => current_service.is_none(),
        };
    let share_label = match current_tab {
        ShareTab::Social => current_platform.map(|p| p.name()).unwrap_or("Platform"),
        ShareTab::Cloud => current_service.map(|s| s.name()).unwrap_or("Service"),
    };

    let feedback = match &status() {
        ShareStatus::Idle => None,
        ShareStatus::Working => Some(("panel__meta".to_string(), "Sharing…".to_string())),
        ShareStatus::Done(note) => Some((
            "panel__meta panel__meta--success".to_string(),
            format!("✅ {note}"),
        )),
        ShareStatus::Error(err) => Some((
            "panel__meta panel__meta--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    rsx! {
        div { class: "panel-overlay", onclick: move |_| on_close.call(()),
            div { class: "panel panel--share", onclick: move |evt| evt.stop_propagation(),
                div { class: "panel__header",
                    h3 { class: "panel__title", "🚀 Share Chart: {handle.title}" }
                    button {
                        r#type: "button",
                        class: "panel__close",
                        aria_label: "Close share panel",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }

                div { class: "panel__body",
                    div { class: "panel__choices panel__tabs",
                        button {
                            r#type: "button",
                            class: if current_tab == ShareTab::Social { "choice choice--active" } else { "choice" },
                            onclick: move |_| tab_signal.set(ShareTab::Social),
                            "📱 Social Media"
                        }
                        button {
                            r#type: "button",
                            class: if current_tab == ShareTab::Cloud { "choice choice--active" } else { "choice" },
                            onclick: move |_| tab_signal.set(ShareTab::Cloud),
                            "☁️ Cloud Storage"
                        }
                    }

                    if current_tab == ShareTab::Social {
                        div { class: "share-targets",
                            for platform in SharePlatform::all() {
                                button {
                                    key: "{platform.id()}",
                                    r#type: "button",
                                    class: if current_platform == Some(platform) { "share-target share-target--selected" } else { "share-target" },
                                    onclick: move |_| platform_signal.set(Some(platform)),
                                    span { class: "share-target__name", "{platform.icon()} {platform.name()}" }
                                    span { class: "share-target__description", "{platform.description()}" }
                                    span { class: "share-target__limit", "Max: {platform.max_length()} chars" }
                                }
                            }
                        }
                    } else {
                        div { class: "share-targets",
                            for service in CloudService::all() {
                                button {
                                    key: "{service.id()}",
                                    r#type: "button",
                                    class: if current_service == Some(service) { "share-target share-target--selected" } else { "share-target" },
                                    onclick: move |_| service_signal.set(Some(service)),
                                    span { class: "share-target__name", "{service.icon()} {service.name()}" }
                                    span { class: "share-target__description", "{service.description()}" }
                                }
                            }
                        }
                    }

                    if current_tab == ShareTab::Social && current_platform.is_some() {
                        div { class: "panel__group",
                            label { class: "panel__checkbox",
                                input {
                                    r#type: "checkbox",
                                    checked: preset_on,
                                    oninput: move |evt| preset_signal.set(evt.checked()),
                                }
                                "✨ Use Smart Templates"
                            }

                            if preset_on {
                                span { class: "panel__label", "Target Audience" }
                                div { class: "audience-grid",
                                    for audience_option in Audience::all() {
                                        button {
                                            key: "{audience_option.id()}",
                                            r#type: "button",
                                            class: if current_audience == audience_option { "audience-option audience-option--selected" } else { "audience-option" },
                                            onclick: move |_| audience_signal.set(audience_option),
                                            span { class: "audience-option__name", "{audience_option.icon()} {audience_option.name()}" }
                                            span { class: "audience-option__description", "{audience_option.description()}" }
                                        }
                                    }
                                }

                                span { class: "panel__label", "Message Style" }
                                div { class: "panel__choices",
                                    for length_option in MessageLength::all() {
                                        button {
                                            key: "{length_option.name()}",
                                            r#type: "button",
                                            class: if current_length == length_option { "choice choice--active" } else { "choice" },
                                            onclick: move |_| length_signal.set(length_option),
                                            "{length_option.name()}"
                                        }
                                    }
                                }
                            }

                            div { class: "message-editor",
                                div { class: "message-editor__header",
                                    span { class: "panel__label",
                                        if preset_on { "Generated Message (Editable)" } else { "Custom Message" }
                                    }
                                    if let Some(limit) = message_limit {
                                        span {
                                            class: if over_limit { "char-count char-count--over" } else { "char-count" },
                                            "{current_message.chars().count()}/{limit}"
                                        }
                                    }
                                }
                                textarea {
                                    class: "message-editor__textarea",
                                    rows: "6",
                                    placeholder: if preset_on { "Smart message will appear here..." } else { "Write your custom message..." },
                                    value: "{current_message}",
                                    oninput: move |evt| message_signal.set(evt.value()),
                                }
                                if preset_on {
                                    button {
                                        r#type: "button",
                                        class: "button button--ghost",
                                        onclick: regenerate_handler,
                                        "🔄 Generate New Message"
                                    }
                                }
                            }
                        }
                    }

                    div { class: "panel__group",
                        label { class: "panel__checkbox",
                            input {
                                r#type: "checkbox",
                                checked: watermark_on(),
                                oninput: move |evt| watermark_signal.set(evt.checked()),
                            }
                            "Include SentimentX watermark"
                        }

                        if current_tab == ShareTab::Cloud {
                            span { class: "panel__label", "Format" }
                            div { class: "panel__choices",
                                button {
                                    r#type: "button",
                                    class: if current_cloud_format == ExportFormat::Png { "choice choice--active" } else { "choice" },
                                    onclick: move |_| cloud_format_signal.set(ExportFormat::Png),
                                    "PNG"
                                }
                                button {
                                    r#type: "button",
                                    class: if current_cloud_format == ExportFormat::Svg { "choice choice--active" } else { "choice" },
                                    onclick: move |_| cloud_format_signal.set(ExportFormat::Svg),
                                    "SVG"
                                }
                            }
                        }
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
                        disabled: share_disabled,
                        onclick: share_handler,
                        "🚀 Share to {share_label}"
                    }
                }

                if let Some((class_name, note)) = feedback {
                    p { class: "{class_name}", "{note}" }
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum ShareTarget {
    Social(SharePlatform),
    Cloud(CloudService),
}

async fn dispatch(
    handle: &ChartHandle,
    target: ShareTarget,
    options: &ShareOptions,
) -> ShareStatus {
    let outcome = match target {
        ShareTarget::Social(platform) => share::share_to_social(handle, platform, options).await,
        ShareTarget::Cloud(service) => share::share_to_cloud(handle, service, options).await,
    };
    match outcome {
        Ok(outcome) => ShareStatus::Done(outcome.describe()),
        Err(err) => ShareStatus::Error(err.to_string()),
    }
}
