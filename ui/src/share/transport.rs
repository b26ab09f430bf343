//! Share transports: one capability probe per call, then a single dispatch
//! path. Keeps the per-platform branching out of the panels.

use crate::core::format::slugify;
use crate::core::platform;
use crate::export;

use super::{ShareError, ShareOutcome, SharePlatform};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTransport {
    /// OS share sheet carrying title + text + file together.
    NativeShare,
    /// Platform web-intent URL opened in a new window.
    WebIntent,
    /// Save the artifact locally and tell the user how to finish.
    LocalDownload,
}

impl ShareTransport {
    /// Pick the transport once, from platform capability: the share sheet
    /// when the host offers one, a web intent when the platform has one,
    /// local download otherwise (photo-only platforms, desktop Instagram…).
    pub fn select(platform: SharePlatform) -> Self {
        if platform::supports_native_share() {
            ShareTransport::NativeShare
        } else if platform.intent_url("").is_some() {
            ShareTransport::WebIntent
        } else {
            ShareTransport::LocalDownload
        }
    }

    pub(crate) async fn dispatch_social(
        self,
        platform: SharePlatform,
        title: &str,
        message: &str,
        bytes: Vec<u8>,
    ) -> Result<ShareOutcome, ShareError> {
        let filename = format!("{}.png", slugify(title));

        match self {
            ShareTransport::NativeShare => {
                native_share(title, message, &filename, "image/png", bytes)
                    .await
                    .map(|_| ShareOutcome::NativeShared)
            }
            ShareTransport::WebIntent => {
                let url = platform
                    .intent_url(message)
                    .ok_or_else(|| ShareError::Dispatch("no web intent for platform".into()))?;
                open_window(&url)?;
                Ok(ShareOutcome::IntentOpened)
            }
            ShareTransport::LocalDownload => {
                let path = export::deliver(&filename, "image/png", bytes)
                    .await
                    .map_err(ShareError::Dispatch)?;
                // Best effort: put the caption on the clipboard so the user
                // can paste it after uploading manually.
                if !message.is_empty() {
                    if let Err(err) = copy_to_clipboard(message.to_string()).await {
                        #[cfg(debug_assertions)]
                        eprintln!("[share] clipboard copy failed: {err}");
                        #[cfg(not(debug_assertions))]
                        let _ = err;
                    }
                }
                Ok(ShareOutcome::Downloaded {
                    path,
                    note: format!(
                        "📸 Image downloaded! Open {} and upload it to share your analytics.",
                        platform.name()
                    ),
                })
            }
        }
    }
}

/// Invoke the OS share sheet with title, text, and the artifact attached.
#[cfg(target_arch = "wasm32")]
pub(crate) async fn native_share(
    title: &str,
    text: &str,
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<(), ShareError> {
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Blob, BlobPropertyBag, File, FilePropertyBag, ShareData};

    let window = web_sys::window().ok_or_else(|| ShareError::Dispatch("window unavailable".into()))?;

    let array = js_sys::Uint8Array::from(bytes.as_slice());
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let mut blob_opts = BlobPropertyBag::new();
    blob_opts.type_(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &blob_opts)
        .map_err(|_| ShareError::Dispatch("failed to build share blob".into()))?;

    let file_parts = js_sys::Array::new();
    file_parts.push(&blob);
    let mut file_opts = FilePropertyBag::new();
    file_opts.type_(mime);
    let file = File::new_with_blob_sequence_and_options(&file_parts, filename, &file_opts)
        .map_err(|_| ShareError::Dispatch("failed to build share file".into()))?;

    let files = js_sys::Array::new();
    files.push(&file);

    let mut data = ShareData::new();
    data.title(&format!("SentimentX - {title}"));
    if !text.is_empty() {
        data.text(text);
    }
    data.files(&JsValue::from(files));

    JsFuture::from(window.navigator().share_with_data(&data))
        .await
        .map(|_| ())
        .map_err(|_| ShareError::Dispatch("share sheet dismissed or unavailable".into()))
}

/// Native builds never report share-sheet support, so this is unreachable in
/// practice; it exists to keep the call sites platform-agnostic.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) async fn native_share(
    _title: &str,
    _text: &str,
    _filename: &str,
    _mime: &str,
    _bytes: Vec<u8>,
) -> Result<(), ShareError> {
    Err(ShareError::Dispatch("share sheet unavailable".into()))
}

/// Open a share intent in a new window (web) or the default browser
/// (native).
fn open_window(url: &str) -> Result<(), ShareError> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()
            .ok_or_else(|| ShareError::Dispatch("window unavailable".into()))?;
        window
            .open_with_url_and_target_and_features(url, "_blank", "width=550,height=420")
            .map_err(|_| ShareError::Dispatch("popup blocked".into()))?;
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        open::that(url).map_err(|err| ShareError::Dispatch(err.to_string()))
    }
}

async fn copy_to_clipboard(payload: String) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or("window unavailable")?;
        let document = window.document().ok_or("document unavailable")?;
        let body = document.body().ok_or("missing body")?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| "Unable to create textarea")?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| "Textarea cast failed")?;
        textarea.set_value(&payload);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("top", "0").ok();
        style.set_property("left", "0").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        if !document.exec_command("copy").unwrap_or(false) {
            textarea.remove();
            return Err("Clipboard copy blocked".into());
        }
        textarea.remove();
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use arboard::Clipboard;

        let mut clipboard = Clipboard::new().map_err(|err| err.to_string())?;
        clipboard.set_text(payload).map_err(|err| err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_prefers_intent_then_download() {
        // Native test builds have no share sheet, so selection falls through
        // to the capability-based branches.
        assert_eq!(
            ShareTransport::select(SharePlatform::Twitter),
            ShareTransport::WebIntent
        );
        assert_eq!(
            ShareTransport::select(SharePlatform::Reddit),
            ShareTransport::WebIntent
        );
        assert_eq!(
            ShareTransport::select(SharePlatform::Instagram),
            ShareTransport::LocalDownload
        );
    }
}
