//! SVG → PNG conversion.
//!
//! On the web this is inherently asynchronous: the document is loaded into
//! an offscreen image, decoded, drawn to a canvas at the requested size, and
//! re-encoded. Native builds render directly through resvg into a pixmap.
//! Either way the returned future resolves only once the raster bytes
//! exist.

#[cfg(target_arch = "wasm32")]
pub(crate) async fn rasterize(
    document: &str,
    width: u32,
    height: u32,
    quality: f64,
) -> Result<Vec<u8>, String> {
    use base64::Engine as _;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Blob, BlobPropertyBag, CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, Url};

    let mut opts = BlobPropertyBag::new();
    opts.type_("image/svg+xml");
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(document));
    let blob = Blob::new_with_str_sequence_and_options(&parts, &opts)
        .map_err(|_| "Unable to build SVG blob".to_string())?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Unable to create SVG URL".to_string())?;

    let dom = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("Document unavailable")?;

    let canvas: HtmlCanvasElement = dom
        .create_element("canvas")
        .map_err(|_| "Unable to create canvas")?
        .dyn_into()
        .map_err(|_| "Canvas cast failed")?;
    canvas.set_width(width);
    canvas.set_height(height);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|_| "Canvas context unavailable")?
        .ok_or("Canvas context missing")?
        .dyn_into()
        .map_err(|_| "Context cast failed")?;

    let image = HtmlImageElement::new().map_err(|_| "Unable to create image")?;
    let decode = image.decode();
    image.set_src(&url);
    let decoded = JsFuture::from(decode).await;
    if decoded.is_err() {
        Url::revoke_object_url(&url).ok();
        return Err("Image decode failed".to_string());
    }

    context
        .draw_image_with_html_image_element_and_dw_and_dh(
            &image,
            0.0,
            0.0,
            f64::from(width),
            f64::from(height),
        )
        .map_err(|_| "Unable to draw image")?;

    let data_url = canvas
        .to_data_url_with_type_and_encoder_options("image/png", &JsValue::from_f64(quality))
        .map_err(|_| "Unable to serialise canvas")?;
    Url::revoke_object_url(&url).ok();

    let encoded = data_url
        .split(',')
        .nth(1)
        .ok_or("Malformed data URL")?;
    base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map_err(|_| "PNG decode failed".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) async fn rasterize(
    document: &str,
    width: u32,
    height: u32,
    quality: f64,
) -> Result<Vec<u8>, String> {
    use std::sync::Arc;

    use once_cell::sync::Lazy;

    // PNG is lossless; the quality fraction only matters to the web encoder.
    let _ = quality;

    static FONTDB: Lazy<Arc<fontdb::Database>> = Lazy::new(|| {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        Arc::new(db)
    });

    let mut options = usvg::Options::default();
    options.fontdb = FONTDB.clone();

    let tree = usvg::Tree::from_str(document, &options).map_err(|err| err.to_string())?;

    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or("Invalid raster dimensions")?;
    let size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        f64::from(width) as f32 / size.width(),
        f64::from(height) as f32 / size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let mut buffer = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buffer, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder
            .write_header()
            .map_err(|err| err.to_string())?
            .write_image_data(pixmap.data())
            .map_err(|err| err.to_string())?;
    }

    Ok(buffer)
}
