use std::path::Path;
use std::sync::Arc;

use image::{DynamicImage, ImageFormat};
use tracing::debug;

use crate::error::AppError;

/// Raw bytes of a user-supplied fridge photo.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub name: String,
    pub bytes: Arc<[u8]>,
}

impl ImageUpload {
    pub fn new(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let bytes =
            std::fs::read(path).map_err(|e| AppError::ImageRead(e, path.to_path_buf()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(name, bytes))
    }

    /// Decodes the upload. Only PNG and JPEG are accepted.
    pub fn decode(&self) -> Result<DynamicImage, AppError> {
        let format = image::guess_format(&self.bytes)?;
        if !matches!(format, ImageFormat::Png | ImageFormat::Jpeg) {
            return Err(AppError::UnsupportedFormat(format!("{format:?}")));
        }

        let image = image::load_from_memory_with_format(&self.bytes, format)?;
        debug!(
            "Decoded {} as {:?} ({}x{})",
            self.name,
            format,
            image.width(),
            image.height()
        );
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};
    use std::io::Cursor;

    fn encode(format: ImageFormat) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(ImageBuffer::<Rgb<u8>, Vec<u8>>::from_pixel(
            8,
            8,
            Rgb([10, 200, 30]),
        ));
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), format).unwrap();
        buf
    }

    #[test]
    fn test_decodes_png_and_jpeg() {
        let png = ImageUpload::new("fridge.png", encode(ImageFormat::Png));
        assert_eq!(png.decode().unwrap().width(), 8);

        let jpeg = ImageUpload::new("fridge.jpg", encode(ImageFormat::Jpeg));
        assert_eq!(jpeg.decode().unwrap().height(), 8);
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        let upload = ImageUpload::new("notes.txt", b"definitely not an image".to_vec());
        assert!(matches!(upload.decode(), Err(AppError::ImageDecode(_))));
    }

    #[test]
    fn test_truncated_png_is_an_error() {
        let mut bytes = encode(ImageFormat::Png);
        bytes.truncate(bytes.len() / 2);
        let upload = ImageUpload::new("broken.png", bytes);
        assert!(upload.decode().is_err());
    }

    #[test]
    fn test_other_formats_are_rejected() {
        let upload = ImageUpload::new("fridge.bmp", encode(ImageFormat::Bmp));
        assert!(matches!(upload.decode(), Err(AppError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = ImageUpload::from_path(Path::new("no/such/fridge.png")).unwrap_err();
        assert!(matches!(err, AppError::ImageRead(_, ref p) if p.ends_with("fridge.png")));
    }
}
