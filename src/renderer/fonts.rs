//! Font loading and discovery

use femtovg::{Canvas, FontId, renderer::OpenGl};

use crate::error::{AppError, Result};

/// Load fonts that cover digits and the `×` / `÷` signs, with fallbacks
pub fn load_fonts(canvas: &mut Canvas<OpenGl>) -> Result<Vec<FontId>> {
    let mut fonts = Vec::new();

    // 1. Proportional sans fonts; the expression glyphs are all in Latin-1
    let primary_paths = [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ];

    for path in &primary_paths {
        if let Ok(font) = canvas.add_font(path) {
            tracing::info!(path = %path, "loaded font");
            fonts.push(font);
            break;
        }
    }

    // 2. Fallback for glyphs the primary font lacks
    let fallback_paths = [
        "/usr/share/fonts/truetype/droid/DroidSansFallbackFull.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    ];

    for path in &fallback_paths {
        if let Ok(font) = canvas.add_font(path) {
            fonts.push(font);
        }
    }

    // 3. Last resort: the first TTF found under the system font directory
    if fonts.is_empty() {
        if let Some(font) = first_ttf_under(canvas, "/usr/share/fonts/truetype") {
            fonts.push(font);
        }
    }

    if fonts.is_empty() {
        return Err(AppError::NoFont);
    }
    Ok(fonts)
}

fn first_ttf_under(canvas: &mut Canvas<OpenGl>, root: &str) -> Option<FontId> {
    let entries = std::fs::read_dir(root).ok()?;
    for entry in entries.flatten() {
        let dir = entry.path();
        if !dir.is_dir() {
            continue;
        }
        let Ok(sub_entries) = std::fs::read_dir(&dir) else {
            continue;
        };
        for sub_entry in sub_entries.flatten() {
            let path = sub_entry.path();
            if path.extension().is_some_and(|e| e == "ttf") {
                if let Ok(font) = canvas.add_font(&path) {
                    tracing::info!(path = %path.display(), "loaded fallback font");
                    return Some(font);
                }
            }
        }
    }
    None
}
