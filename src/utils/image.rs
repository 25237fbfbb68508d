//! Kodning och avkodning av bilder som data-URL:er
//!
//! Posternas bildfält lagrar hela bilden inbäddad som
//! `data:image/...;base64,...` så att biblioteksfilen är självständig
//! och kan exporteras/importeras utan sidofiler.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::utils::error::{AppError, AppResult};
use crate::utils::path::image_mime_type;

/// Läs en bildfil och koda den som data-URL
pub fn encode_data_url(path: &Path) -> AppResult<String> {
    let bytes = std::fs::read(path)?;

    // Kontrollera att innehållet faktiskt är en avkodbar bild
    image::load_from_memory(&bytes)
        .map_err(|e| AppError::validation(format!("Ogiltig bildfil: {}", e)))?;

    Ok(format!(
        "data:{};base64,{}",
        image_mime_type(path),
        STANDARD.encode(&bytes)
    ))
}

/// Avkoda en data-URL till råa bildbytes.
/// Returnerar `None` för tomma eller oigenkännliga värden — importerade
/// poster kan innehålla vad som helst i bildfältet.
pub fn decode_data_url(data_url: &str) -> Option<Vec<u8>> {
    if data_url.is_empty() {
        return None;
    }
    let encoded = data_url.strip_prefix("data:")?.split_once(",")?.1;
    STANDARD.decode(encoded).ok()
}

/// Ladda en data-URL som egui-textur, nedskalad till `max_dim` om angiven
pub fn load_data_url_texture(
    ctx: &egui::Context,
    key: &str,
    data_url: &str,
    max_dim: Option<u32>,
) -> Option<egui::TextureHandle> {
    let bytes = decode_data_url(data_url)?;
    let mut img = image::load_from_memory(&bytes).ok()?;

    if let Some(max) = max_dim {
        img = img.thumbnail(max, max);
    }

    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let pixels = rgba.into_raw();

    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &pixels);
    Some(ctx.load_texture(key, color_image, egui::TextureOptions::LINEAR))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Skriv en liten giltig PNG till en fil
    fn write_test_png(path: &Path) {
        let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([200, 30, 30, 255]));
        img.save(path).unwrap();
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.png");
        write_test_png(&path);

        let data_url = encode_data_url(&path).unwrap();
        assert!(data_url.starts_with("data:image/png;base64,"));

        let decoded = decode_data_url(&data_url).unwrap();
        assert_eq!(decoded, std::fs::read(&path).unwrap());
        assert!(image::load_from_memory(&decoded).is_ok());
    }

    #[test]
    fn test_encode_rejects_non_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inte_bild.png");
        std::fs::write(&path, b"hejsan").unwrap();

        assert!(encode_data_url(&path).is_err());
    }

    #[test]
    fn test_decode_garbage_is_none() {
        assert!(decode_data_url("").is_none());
        assert!(decode_data_url("hejsan").is_none());
        assert!(decode_data_url("data:image/png;base64,!!!").is_none());
    }
}
