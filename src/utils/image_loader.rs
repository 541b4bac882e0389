use eframe::egui;

use crate::utils::errors::{AppError, AppResult};

/// Largest avatar edge we keep; bigger images are downscaled before upload.
const MAX_AVATAR_EDGE: u32 = 256;

/// Decode raw image bytes (png/jpeg/gif/webp) into an egui image
pub fn decode_image(bytes: &[u8]) -> AppResult<egui::ColorImage> {
    let img = image::load_from_memory(bytes).map_err(|e| AppError::Image(e.to_string()))?;

    let img = if img.width() > MAX_AVATAR_EDGE || img.height() > MAX_AVATAR_EDGE {
        img.thumbnail(MAX_AVATAR_EDGE, MAX_AVATAR_EDGE)
    } else {
        img
    };

    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    log::debug!("[Image] Decoded avatar {}x{}", size[0], size[1]);

    Ok(egui::ColorImage::from_rgba_unmultiplied(
        size,
        rgba.as_flat_samples().as_slice(),
    ))
}

/// Download and decode an image
pub async fn fetch_image(url: &str) -> AppResult<egui::ColorImage> {
    let client = crate::utils::http::client()?;
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(AppError::HttpStatus(response.status().as_u16()));
    }

    let bytes = response.bytes().await?;
    decode_image(&bytes)
}
