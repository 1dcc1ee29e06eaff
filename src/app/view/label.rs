// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/label.rs
//
// "W x H" size label drawn above the crop square.

#[cfg(feature = "label")]
use std::sync::Arc;

#[cfg(feature = "label")]
use resvg::usvg::{self, fontdb};

/// Installed families tried, in order, when the generic sans-serif family
/// does not resolve.
#[cfg(feature = "label")]
const SANS_SERIF_FALLBACKS: &[&str] = &[
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
    "Cantarell",
    "FreeSans",
    "Arial",
    "Helvetica",
];

use super::Canvas;
use crate::constant::LABEL_FONT_FAMILY;

/// Text of the size label for an image of the given natural size.
pub fn size_text(width: u32, height: u32) -> String {
    format!("{width} x {height}")
}

/// Centered text label rendered through resvg.
pub struct SizeLabel {
    font_size: f64,
    color: [u8; 4],
    #[cfg(feature = "label")]
    fontdb: Arc<fontdb::Database>,
}

impl SizeLabel {
    /// Create a label painter; system fonts are loaded once here.
    pub fn new(font_size: f64, color: [u8; 4]) -> Self {
        #[cfg(feature = "label")]
        let fontdb = {
            let mut db = fontdb::Database::new();
            db.load_system_fonts();
            log::debug!("Loaded {} font faces for the size label", db.len());
            resolve_sans_serif(&mut db);
            Arc::new(db)
        };

        Self {
            font_size,
            color,
            #[cfg(feature = "label")]
            fontdb,
        }
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Whether a face is available to lay the label out with.
    pub fn has_font(&self) -> bool {
        #[cfg(feature = "label")]
        {
            sans_serif_resolves(&self.fontdb)
        }
        #[cfg(not(feature = "label"))]
        {
            false
        }
    }

    /// SVG markup of a single centered text node at `(x, baseline)`.
    pub fn markup(&self, text: &str, x: f64, baseline: f64, canvas: (u32, u32)) -> String {
        let [r, g, b, a] = self.color;
        let (width, height) = canvas;
        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}">"#,
                r##"<text x="{x}" y="{y}" font-family="{family}" font-size="{size}" "##,
                r##"text-anchor="middle" fill="#{r:02x}{g:02x}{b:02x}" fill-opacity="{opacity}">"##,
                "{text}</text></svg>"
            ),
            w = width.max(1),
            h = height.max(1),
            x = x,
            y = baseline,
            family = LABEL_FONT_FAMILY,
            size = self.font_size,
            r = r,
            g = g,
            b = b,
            opacity = f64::from(a) / 255.0,
            text = text,
        )
    }

    /// Draw `text` centered on `x` with its baseline at `baseline`.
    #[cfg(feature = "label")]
    pub fn draw(&self, canvas: &mut Canvas, text: &str, x: f64, baseline: f64) {
        let svg = self.markup(text, x, baseline, (canvas.width(), canvas.height()));
        let options = usvg::Options {
            fontdb: Arc::clone(&self.fontdb),
            ..usvg::Options::default()
        };

        match usvg::Tree::from_str(&svg, &options) {
            Ok(tree) => canvas.render_tree(&tree),
            Err(e) => log::warn!("Failed to lay out size label: {}", e),
        }
    }

    #[cfg(not(feature = "label"))]
    pub fn draw(&self, _canvas: &mut Canvas, _text: &str, _x: f64, _baseline: f64) {}
}

#[cfg(feature = "label")]
fn sans_serif_resolves(db: &fontdb::Database) -> bool {
    db.query(&fontdb::Query {
        families: &[fontdb::Family::SansSerif],
        ..fontdb::Query::default()
    })
    .is_some()
}

/// Point the generic sans-serif family at a face that is installed.
///
/// The database maps it to "Arial" out of the box, which many Linux
/// systems lack; the label would then lay out as an empty text node.
#[cfg(feature = "label")]
fn resolve_sans_serif(db: &mut fontdb::Database) {
    if sans_serif_resolves(db) {
        return;
    }

    let installed = |name: &str| {
        db.faces()
            .any(|face| face.families.iter().any(|(family, _)| family == name))
    };
    let family = SANS_SERIF_FALLBACKS
        .iter()
        .map(|name| name.to_string())
        .find(|name| installed(name))
        .or_else(|| {
            db.faces()
                .find_map(|face| face.families.first().map(|(family, _)| family.clone()))
        });

    match family {
        Some(family) => {
            log::debug!("Using '{}' for the size label", family);
            db.set_sans_serif_family(family);
        }
        None => log::warn!("No font faces found; the size label will not be drawn"),
    }
}
