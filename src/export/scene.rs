//! Vector scene built from the card state.
//!
//! The scene is the rasterization input: a background rectangle and a
//! centered caption line. Export-time typography (larger Impact face,
//! raised baseline) is applied to a copy of the scene only, so the
//! on-screen editing view is never affected.

use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::constants::{
    CARD_LOGICAL_HEIGHT, CARD_LOGICAL_WIDTH, EXPORT_BASELINE_OFFSET, EXPORT_FONT_FAMILY,
    EXPORT_FONT_SIZE, SCREEN_FONT_SIZE,
};
use crate::models::CardState;

/// A renderable snapshot of the card.
///
/// Built from [`CardState`] at capture time; colors and caption are copied
/// so later edits cannot affect an in-flight export.
#[derive(Debug, Clone)]
pub struct CardScene {
    /// Logical width in SVG user units.
    pub width: u32,
    /// Logical height in SVG user units.
    pub height: u32,
    background: String,
    text_color: String,
    caption: String,
    font_family: String,
    font_size: u32,
    baseline_offset: i32,
}

impl CardScene {
    /// Builds the scene with on-screen typography.
    #[must_use]
    pub fn from_card(card: &CardState) -> Self {
        Self {
            width: CARD_LOGICAL_WIDTH,
            height: CARD_LOGICAL_HEIGHT,
            background: card.background_color.to_hex(),
            text_color: card.text_color.to_hex(),
            caption: card.caption().to_string(),
            font_family: "sans-serif".to_string(),
            font_size: SCREEN_FONT_SIZE,
            baseline_offset: 0,
        }
    }

    /// Returns a copy with the export-only typography overrides applied.
    ///
    /// Mirrors the capture hook contract: the adjustment happens on the
    /// cloned scene, never on the live card.
    #[must_use]
    pub fn with_export_typography(&self) -> Self {
        let mut scene = self.clone();
        scene.font_family = EXPORT_FONT_FAMILY.to_string();
        scene.font_size = EXPORT_FONT_SIZE;
        scene.baseline_offset = EXPORT_BASELINE_OFFSET;
        scene
    }

    /// Serializes the scene to SVG markup.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let cx = self.width / 2;
        // Center the line vertically on the dominant baseline, then apply
        // the export offset.
        let cy = (self.height / 2) as i32 + (self.font_size / 3) as i32 + self.baseline_offset;

        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}">"#,
                r#"<rect width="{w}" height="{h}" fill="{bg}"/>"#,
                r#"<text x="{cx}" y="{cy}" text-anchor="middle" "#,
                r#"font-family="{family}" font-size="{size}" font-weight="bold" "#,
                r#"word-spacing="0.1em" fill="{fg}">{caption}</text>"#,
                "</svg>"
            ),
            w = self.width,
            h = self.height,
            bg = self.background,
            cx = cx,
            cy = cy,
            family = self.font_family,
            size = self.font_size,
            fg = self.text_color,
            caption = escape_xml(&self.caption),
        )
    }

    /// Rasterizes the scene so the output width equals `target_width`.
    ///
    /// The scale factor is `target_width / logical width`; height follows
    /// the card's fixed aspect ratio.
    ///
    /// # Errors
    ///
    /// Returns an error if the scene fails to parse or the pixel buffer
    /// cannot be allocated.
    pub fn rasterize(&self, target_width: u32) -> Result<RgbaImage> {
        let svg = self.to_svg();

        let mut opts = Options::default();
        opts.fontdb_mut().load_system_fonts();

        let tree = Tree::from_str(&svg, &opts).context("Failed to parse card scene")?;

        let scale = target_width as f32 / self.width as f32;
        let target_height = (self.height as f32 * scale).round() as u32;

        let mut pixmap = Pixmap::new(target_width, target_height)
            .context("Failed to allocate pixel buffer for card capture")?;
        resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

        Ok(pixmap_to_rgba_image(&pixmap))
    }
}

/// Escapes text content for embedding in SVG markup.
fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Converts a tiny-skia pixmap to an `image::RgbaImage`.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let width = pixmap.width();
    let height = pixmap.height();
    let mut img = RgbaImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            if let Some(pixel) = pixmap.pixel(x, y) {
                // tiny-skia stores premultiplied alpha
                let (r, g, b, a) =
                    unpremultiply(pixel.red(), pixel.green(), pixel.blue(), pixel.alpha());
                img.put_pixel(x, y, Rgba([r, g, b, a]));
            }
        }
    }

    img
}

/// Unpremultiplies a premultiplied alpha pixel.
fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, u8) {
    if a == 0 {
        (0, 0, 0, 0)
    } else {
        let a_f = f32::from(a) / 255.0;
        (
            (f32::from(r) / a_f).round().min(255.0) as u8,
            (f32::from(g) / a_f).round().min(255.0) as u8,
            (f32::from(b) / a_f).round().min(255.0) as u8,
            a,
        )
    }
}
