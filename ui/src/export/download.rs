//! Artifact delivery: anchor-click download on the web, the exports
//! directory on native.

use crate::core::format::slugify;

/// `Weekly Positive Sentiment` + `png` → `weekly-positive-sentiment-2024-01-15.png`.
pub fn stamped_filename(base_name: &str, extension: &str) -> String {
    format!("{}-{}.{}", slugify(base_name), date_slug(), extension)
}

fn date_slug() -> String {
    use time::{macros::format_description, OffsetDateTime};

    OffsetDateTime::now_utc()
        .format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| "export".into())
}

/// Hand finished bytes to the user. Returns the written path on native,
/// `None` on the web where the browser owns the download location.
pub async fn deliver(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let mut opts = BlobPropertyBag::new();
        opts.type_(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;
        use std::io::Write;

        let _ = mime;
        let dir = crate::core::storage::export_dir()?;
        fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(filename);
        let mut file = fs::File::create(&path).map_err(|err| err.to_string())?;
        file.write_all(&bytes).map_err(|err| err.to_string())?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filenames_are_slugged_stamped_and_suffixed() {
        let filename = stamped_filename("Weekly Positive Sentiment", "png");
        assert_eq!(
            filename,
            format!("weekly-positive-sentiment-{}.png", date_slug())
        );
        assert!(stamped_filename("Sentiment Trends", "svg").ends_with(".svg"));
    }

    #[test]
    fn date_slug_is_iso_shaped() {
        let slug = date_slug();
        let parts: Vec<&str> = slug.split('-').collect();
        assert_eq!(parts.len(), 3, "expected year-month-day, got {slug}");
        assert_eq!(parts[0].len(), 4);
        assert_eq!(parts[1].len(), 2);
        assert_eq!(parts[2].len(), 2);
    }
}
