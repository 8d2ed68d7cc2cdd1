//! Media discovery and decoding for the showcase screenshots.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use eframe::egui;
use walkdir::WalkDir;

use crate::selection::ALL_ASSETS;

/// Folder under the media root that asset paths point into.
const MEDIA_FOLDER: &str = "media";

/// Resolves asset paths against a root directory.
#[derive(Clone, Debug)]
pub struct MediaLibrary {
    root: PathBuf,
}

impl MediaLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Join a `media/...` asset path onto the root.
    pub fn resolve(&self, asset: &str) -> PathBuf {
        self.root.join(asset)
    }

    /// List every supported image under the root's media folder.
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        let media_dir = self.root.join(MEDIA_FOLDER);
        if !media_dir.is_dir() {
            return Err(anyhow!("media folder not found: {}", media_dir.display()));
        }
        let mut images = Vec::new();
        for entry in WalkDir::new(&media_dir).follow_links(true) {
            let entry = entry?;
            if entry.file_type().is_file() && is_supported_image(entry.path()) {
                images.push(entry.path().to_path_buf());
            }
        }
        images.sort();
        Ok(images)
    }

    /// Known asset paths that do not exist under the root.
    pub fn missing_assets(&self) -> Vec<&'static str> {
        ALL_ASSETS
            .into_iter()
            .filter(|asset| !self.resolve(asset).is_file())
            .collect()
    }

    /// Decode an asset into an egui image.
    pub fn load_image(&self, asset: &str) -> Result<egui::ColorImage> {
        let path = self.resolve(asset);
        let img = image::open(&path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        let rgba = img.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
    }
}

/// Return true when the file extension is a supported image type.
pub fn is_supported_image(path: &Path) -> bool {
    match path.extension().and_then(OsStr::to_str) {
        Some(ext) => matches!(
            ext.to_ascii_lowercase().as_str(),
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp"
        ),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_png(path: &Path, width: u32, height: u32) {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
        img.save(path).unwrap();
    }

    #[test]
    fn supported_extensions_ignore_case() {
        assert!(is_supported_image(Path::new("media/wike-toc.PNG")));
        assert!(is_supported_image(Path::new("a/b.jpeg")));
        assert!(!is_supported_image(Path::new("media/scripts.js")));
        assert!(!is_supported_image(Path::new("media/noext")));
    }

    #[test]
    fn scan_lists_images_only() {
        let dir = TempDir::new().unwrap();
        let media = dir.path().join(MEDIA_FOLDER);
        fs::create_dir_all(media.join("nested")).unwrap();
        fs::write(media.join("wike-dark.png"), b"").unwrap();
        fs::write(media.join("nested/extra.webp"), b"").unwrap();
        fs::write(media.join("notes.txt"), b"").unwrap();

        let library = MediaLibrary::new(dir.path());
        let found = library.scan().unwrap();
        assert_eq!(
            found,
            vec![media.join("nested/extra.webp"), media.join("wike-dark.png")]
        );
    }

    #[test]
    fn scan_without_media_folder_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(MediaLibrary::new(dir.path()).scan().is_err());
    }

    #[test]
    fn missing_assets_reports_absent_files() {
        let dir = TempDir::new().unwrap();
        let library = MediaLibrary::new(dir.path());
        assert_eq!(library.missing_assets().len(), ALL_ASSETS.len());

        fs::create_dir_all(dir.path().join(MEDIA_FOLDER)).unwrap();
        for asset in ALL_ASSETS {
            fs::write(library.resolve(asset), b"").unwrap();
        }
        fs::remove_file(library.resolve("media/wike-toc.png")).unwrap();
        assert_eq!(library.missing_assets(), vec!["media/wike-toc.png"]);
    }

    #[test]
    fn load_image_decodes_dimensions() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(MEDIA_FOLDER)).unwrap();
        let library = MediaLibrary::new(dir.path());
        write_png(&library.resolve("media/wike-light.png"), 4, 3);

        let image = library.load_image("media/wike-light.png").unwrap();
        assert_eq!(image.size, [4, 3]);
    }

    #[test]
    fn load_image_reports_missing_and_corrupt_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(MEDIA_FOLDER)).unwrap();
        let library = MediaLibrary::new(dir.path());
        assert!(library.load_image("media/wike-dark.png").is_err());

        fs::write(library.resolve("media/wike-dark.png"), b"not a png").unwrap();
        assert!(library.load_image("media/wike-dark.png").is_err());
    }
}
