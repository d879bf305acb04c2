// File: crates/calwall-core/src/text.rs
// Summary: Font handle loaded once at startup and a Skia textlayout shaper built from it.

use std::path::Path;
use std::sync::Arc;

use skia_safe as skia;
use skia::textlayout::{
    FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle,
    TypefaceFontProvider,
};

/// Family the bundled caption fonts are registered under.
pub const CAPTION_FAMILY: &str = "GoogleSans";

const FONT_FILES: &[&str] = &["GoogleSans-Regular.ttf", "GoogleSans-Bold.ttf"];

/// One font file's bytes and the family it is registered as.
#[derive(Clone, Debug)]
pub struct FontFace {
    pub family: String,
    pub data: Arc<[u8]>,
}

/// Immutable set of font faces, shared read-only across render threads.
///
/// An empty handle means "system fonts only".
#[derive(Clone, Debug, Default)]
pub struct FontHandle {
    faces: Arc<Vec<FontFace>>,
}

impl FontHandle {
    pub fn system() -> Self {
        Self::default()
    }

    pub fn from_faces(faces: Vec<FontFace>) -> Self {
        Self { faces: Arc::new(faces) }
    }

    /// Load the caption fonts from `dir`. Missing files are not an error: the
    /// caption falls back to the system default sans-serif.
    pub fn load_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let mut faces = Vec::new();
        for name in FONT_FILES {
            let path = dir.join(name);
            match std::fs::read(&path) {
                Ok(bytes) => {
                    tracing::debug!(path = %path.display(), bytes = bytes.len(), "loaded font");
                    faces.push(FontFace { family: CAPTION_FAMILY.to_string(), data: bytes.into() });
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "font not found, will use system default");
                }
            }
        }
        Self::from_faces(faces)
    }

    pub fn faces(&self) -> &[FontFace] {
        &self.faces
    }

    pub fn is_system_only(&self) -> bool {
        self.faces.is_empty()
    }
}

/// Paragraph shaper over the handle's faces with system fallback.
///
/// Not shared between threads; build one per render thread from a `FontHandle`.
pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new(handle: &FontHandle) -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);

        if !handle.is_system_only() {
            let mgr = skia::FontMgr::new();
            let mut provider = TypefaceFontProvider::new();
            for face in handle.faces() {
                match mgr.new_from_data(&face.data, None) {
                    Some(tf) => {
                        provider.register_typeface(tf, Some(face.family.as_str()));
                    }
                    None => tracing::warn!(family = %face.family, "font data could not be decoded"),
                }
            }
            fc.set_asset_font_manager(Some(provider.into()));
        }
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&[CAPTION_FAMILY, "Roboto", "Segoe UI", "Helvetica", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, align: TextAlign, width: f32) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(align);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(width.max(1.0));
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        let p = self.layout(text, size, skia::Color::TRANSPARENT, TextAlign::Left, 100_000.0);
        p.longest_line()
    }

    /// Draw one line horizontally centered across `band_width` and vertically
    /// centered on `center_y`.
    pub fn draw_centered(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        band_width: f32,
        center_y: f32,
        size: f32,
        color: skia::Color,
    ) {
        let p = self.layout(text, size, color, TextAlign::Center, band_width);
        p.paint(canvas, (0.0, center_y - p.height() / 2.0));
    }
}
