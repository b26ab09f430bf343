//! Styled SVG document assembly shared by export and share.
//!
//! One builder for every chart kind: requested dimensions, a bottom-most
//! rounded background layer, the chart content scaled through a nested
//! viewport, and an optional product watermark appended after all data
//! layers (corner placement and reduced opacity keep it clear of the data).

pub const WATERMARK_TEXT: &str = "SentimentX Analytics";

const GRADIENT_ID: &str = "export-bg-gradient";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Background {
    /// Renders the house gradient, like the on-screen premium backdrop.
    #[default]
    Transparent,
    Solid(String),
    Gradient,
}

impl Background {
    /// `transparent`, `gradient`, or a hex color; anything else falls back
    /// to the default.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "transparent" | "" => Background::Transparent,
            "gradient" => Background::Gradient,
            _ if trimmed.starts_with('#') => Background::Solid(trimmed.to_string()),
            _ => Background::Transparent,
        }
    }

    fn fill(&self) -> String {
        match self {
            Background::Transparent | Background::Gradient => format!("url(#{GRADIENT_ID})"),
            Background::Solid(color) => color.clone(),
        }
    }

    fn needs_gradient(&self) -> bool {
        matches!(self, Background::Transparent | Background::Gradient)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Watermark {
    None,
    /// Small grey label for downloaded artifacts.
    #[default]
    Subtle,
    /// Brand-colored label for social cards.
    Accent,
}

#[derive(Debug, Clone)]
pub struct SvgDocumentBuilder {
    markup: String,
    width: u32,
    height: u32,
    background: Background,
    watermark: Watermark,
}

impl SvgDocumentBuilder {
    pub fn new(markup: &str) -> Self {
        Self {
            markup: markup.to_string(),
            width: super::DEFAULT_WIDTH,
            height: super::DEFAULT_HEIGHT,
            background: Background::default(),
            watermark: Watermark::default(),
        }
    }

    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    pub fn watermark(mut self, watermark: Watermark) -> Self {
        self.watermark = watermark;
        self
    }

    pub fn build(self) -> String {
        let (view_box, inner) = split_markup(&self.markup, self.width, self.height);
        let width = self.width;
        let height = self.height;

        let mut document = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        );

        if self.background.needs_gradient() {
            document.push_str(&format!(
                r##"<defs><linearGradient id="{GRADIENT_ID}" x1="0%" y1="0%" x2="100%" y2="100%"><stop offset="0%" stop-color="#0a0a0a"/><stop offset="100%" stop-color="#1a1a1a"/></linearGradient></defs>"##
            ));
        }

        // Background first so every data layer paints above it.
        document.push_str(&format!(
            r#"<rect width="100%" height="100%" rx="20" fill="{}"/>"#,
            self.background.fill(),
        ));

        // Nested viewport scales the cloned chart to the requested size.
        document.push_str(&format!(
            r#"<svg x="0" y="0" width="{width}" height="{height}" viewBox="{view_box}" preserveAspectRatio="xMidYMid meet">{inner}</svg>"#
        ));

        match self.watermark {
            Watermark::None => {}
            Watermark::Subtle => document.push_str(&format!(
                r##"<text x="{}" y="{}" text-anchor="end" font-family="Inter, sans-serif" font-size="12" font-weight="500" fill="#888888" opacity="0.7">{WATERMARK_TEXT}</text>"##,
                width.saturating_sub(10),
                height.saturating_sub(10),
            )),
            Watermark::Accent => document.push_str(&format!(
                r##"<text x="{}" y="{}" text-anchor="end" font-family="Inter, sans-serif" font-size="16" font-weight="600" fill="#FF6B35" opacity="0.8">{WATERMARK_TEXT}</text>"##,
                width.saturating_sub(20),
                height.saturating_sub(20),
            )),
        }

        document.push_str("</svg>");
        document
    }
}

/// Pull the source viewBox and inner content out of snapshot markup.
/// Markup without a viewBox scales 1:1 against the requested dimensions.
fn split_markup(markup: &str, width: u32, height: u32) -> (String, String) {
    let fallback_view_box = format!("0 0 {width} {height}");

    let Some(open_end) = markup.find('>') else {
        return (fallback_view_box, markup.to_string());
    };
    let open_tag = &markup[..open_end];

    let view_box = open_tag
        .find("viewBox=\"")
        .and_then(|start| {
            let rest = &open_tag[start + "viewBox=\"".len()..];
            rest.find('"').map(|end| rest[..end].to_string())
        })
        .unwrap_or(fallback_view_box);

    let inner = match markup.rfind("</svg>") {
        Some(close) if close > open_end => markup[open_end + 1..close].to_string(),
        _ => markup[open_end + 1..].to_string(),
    };

    (view_box, inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKUP: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100%" height="200" viewBox="0 0 400 200"><path d="M 0 0 L 10 10"/></svg>"#;

    #[test]
    fn background_parse_recognises_the_three_forms() {
        assert_eq!(Background::parse("transparent"), Background::Transparent);
        assert_eq!(Background::parse("gradient"), Background::Gradient);
        assert_eq!(
            Background::parse("#ffffff"),
            Background::Solid("#ffffff".to_string())
        );
        assert_eq!(Background::parse("plaid"), Background::Transparent);
    }

    #[test]
    fn background_is_bottom_most_and_rounded() {
        let document = SvgDocumentBuilder::new(MARKUP)
            .dimensions(800, 600)
            .build();
        let rect = document.find("<rect").expect("background rect");
        let content = document.find("<path").expect("chart content");
        assert!(rect < content, "background must paint below the data");
        assert!(document.contains(r#"rx="20""#));
    }

    #[test]
    fn watermark_is_appended_after_all_data_layers() {
        let document = SvgDocumentBuilder::new(MARKUP)
            .dimensions(800, 600)
            .watermark(Watermark::Subtle)
            .build();
        let content = document.find("<path").expect("chart content");
        let watermark = document.find(WATERMARK_TEXT).expect("watermark");
        assert!(watermark > content);
        assert!(document.contains(r#"opacity="0.7""#));

        let bare = SvgDocumentBuilder::new(MARKUP)
            .watermark(Watermark::None)
            .build();
        assert!(!bare.contains(WATERMARK_TEXT));
    }

    #[test]
    fn accent_watermark_uses_brand_styling() {
        let document = SvgDocumentBuilder::new(MARKUP)
            .dimensions(1200, 630)
            .watermark(Watermark::Accent)
            .build();
        assert!(document.contains(r##"fill="#FF6B35""##));
        assert!(document.contains(r#"x="1180" y="610""#));
    }

    #[test]
    fn solid_background_skips_the_gradient() {
        let document = SvgDocumentBuilder::new(MARKUP)
            .background(Background::Solid("#ffffff".to_string()))
            .build();
        assert!(document.contains(r##"fill="#ffffff""##));
        assert!(!document.contains("<linearGradient id=\"export-bg-gradient\""));
    }

    #[test]
    fn requested_dimensions_and_source_viewbox_are_applied() {
        let document = SvgDocumentBuilder::new(MARKUP)
            .dimensions(1024, 512)
            .build();
        assert!(document.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="1024" height="512" viewBox="0 0 1024 512">"#
        ));
        assert!(document.contains(r#"viewBox="0 0 400 200" preserveAspectRatio"#));
    }

    #[test]
    fn markup_without_viewbox_scales_one_to_one() {
        let document = SvgDocumentBuilder::new("<svg><circle r=\"5\"/></svg>")
            .dimensions(100, 100)
            .build();
        assert!(document.contains(r#"viewBox="0 0 100 100" preserveAspectRatio"#));
        assert!(document.contains("<circle"));
    }
}
