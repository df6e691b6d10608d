use crate::constants::JPEG_QUALITY;
use crate::error::AnalyzeError;
use image::{DynamicImage, ImageOutputFormat};
use std::io::Cursor;
use std::path::Path;

/// JPEG-encode an in-memory image and return the bytes as a base64 string.
/// The image is flattened to RGB first; the JPEG encoder rejects alpha.
pub fn encode_image(image: &DynamicImage) -> Result<String, AnalyzeError> {
    let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
    let mut buffer = Cursor::new(Vec::new());
    rgb.write_to(&mut buffer, ImageOutputFormat::Jpeg(JPEG_QUALITY))?;
    Ok(base64::encode(buffer.into_inner()))
}

/// Load an image from disk. Only the upload types the tool accepts
/// (jpg, jpeg, png) are allowed.
pub fn load_image(path: &str) -> Result<DynamicImage, AnalyzeError> {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();
    if !matches!(extension.as_str(), "jpg" | "jpeg" | "png") {
        return Err(AnalyzeError::UnsupportedImageType(path.to_string()));
    }

    image::open(path).map_err(|source| AnalyzeError::ImageRead {
        path: path.to_string(),
        source,
    })
}
