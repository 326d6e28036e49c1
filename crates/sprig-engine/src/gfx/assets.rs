use std::fs;
use std::path::Path;

use image::RgbaImage;

use super::error::GfxError;

/// Reads a shader source file as UTF-8 text.
pub fn load_shader_source(path: &Path) -> Result<String, GfxError> {
    fs::read_to_string(path).map_err(|e| GfxError::AssetLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Decodes an image file to straight-alpha RGBA8.
///
/// The rows are flipped vertically so the first row is the bottom of the
/// image, matching GL's texture origin. Decoders emit top row first.
pub fn load_rgba(path: &Path) -> Result<RgbaImage, GfxError> {
    let image = image::open(path).map_err(|e| GfxError::AssetLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(image.flipv().to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("sprig-assets-{}-{name}", std::process::id()))
    }

    #[test]
    fn load_rgba_decodes_and_flips() {
        let path = temp_path("2x2.png");

        // Top row red, bottom row blue.
        let mut img = RgbaImage::new(2, 2);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(0, 1, Rgba([0, 0, 255, 255]));
        img.put_pixel(1, 1, Rgba([0, 0, 255, 255]));
        img.save(&path).unwrap();

        let loaded = load_rgba(&path).unwrap();
        assert_eq!(loaded.dimensions(), (2, 2));
        // After the flip, row 0 is the image's bottom row (blue).
        assert_eq!(loaded.get_pixel(0, 0), &Rgba([0, 0, 255, 255]));
        assert_eq!(loaded.get_pixel(0, 1), &Rgba([255, 0, 0, 255]));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn load_rgba_missing_file_reports_path() {
        let path = temp_path("does-not-exist.png");
        let err = load_rgba(&path).unwrap_err();
        match err {
            GfxError::AssetLoad { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected AssetLoad, got {other:?}"),
        }
    }

    #[test]
    fn load_shader_source_roundtrip_and_missing() {
        let path = temp_path("demo.vert");
        fs::write(&path, "#version 330 core\nvoid main() {}\n").unwrap();
        let src = load_shader_source(&path).unwrap();
        assert!(src.starts_with("#version 330"));
        let _ = fs::remove_file(&path);

        let missing = temp_path("missing.frag");
        let err = load_shader_source(&missing).unwrap_err();
        assert!(matches!(err, GfxError::AssetLoad { .. }));
        assert!(err.to_string().contains("missing.frag"));
    }
}
