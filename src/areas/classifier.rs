//! Content classification of one diff side
//!
//! Decides, per side and path, whether the content can be diffed line by
//! line. Checks run in this order:
//!
//! 1. the file does not exist: `Missing`
//! 2. metadata or read failure: `Unreadable`
//! 3. larger than the configured ceiling: `TooLarge` (before reading it)
//! 4. known image extension whose magic number matches: `ImageBinary`, with
//!    the bytes copied to a temporary file that lives as long as the result
//! 5. NUL byte in the leading sniff window: `Binary`
//! 6. anything else: `Text`

use crate::areas::config::ClassifierConfig;
use crate::areas::workspace::Workspace;
use crate::artifacts::diff::entry_content::{EntryContent, ImagePreview};
use crate::artifacts::diff::raw_text::RawText;
use bytes::Bytes;
use derive_new::new;
use phf::phf_map;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImageKind {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Webp,
}

impl ImageKind {
    fn matches(&self, data: &[u8]) -> bool {
        match self {
            ImageKind::Png => data.starts_with(b"\x89PNG\r\n\x1a\n"),
            ImageKind::Jpeg => data.starts_with(&[0xff, 0xd8, 0xff]),
            ImageKind::Gif => data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a"),
            ImageKind::Bmp => data.starts_with(b"BM"),
            ImageKind::Webp => data.len() >= 12 && &data[..4] == b"RIFF" && &data[8..12] == b"WEBP",
        }
    }
}

static IMAGE_EXTENSIONS: phf::Map<&'static str, ImageKind> = phf_map! {
    "png" => ImageKind::Png,
    "jpg" => ImageKind::Jpeg,
    "jpeg" => ImageKind::Jpeg,
    "gif" => ImageKind::Gif,
    "bmp" => ImageKind::Bmp,
    "webp" => ImageKind::Webp,
};

#[derive(Debug, Clone, new)]
pub struct ContentClassifier {
    config: ClassifierConfig,
}

impl ContentClassifier {
    /// Classifies `path` as found in `workspace`
    pub fn classify(&self, workspace: &Workspace, path: &Path) -> EntryContent {
        let size = match workspace.file_size(path) {
            Ok(Some(size)) => size,
            Ok(None) => return EntryContent::Missing,
            Err(e) => return EntryContent::Unreadable(e.to_string()),
        };

        if size > self.config.max_file_size {
            log::debug!(
                "{} is {size} bytes, above the {} bytes ceiling",
                path.display(),
                self.config.max_file_size
            );
            return EntryContent::TooLarge;
        }

        match workspace.read_file(path) {
            Ok(Some(data)) => self.classify_bytes(path, data),
            Ok(None) => EntryContent::Missing,
            Err(e) => EntryContent::Unreadable(e.to_string()),
        }
    }

    /// Classifies content that has already been read
    pub fn classify_bytes(&self, path: &Path, data: Bytes) -> EntryContent {
        if data.len() as u64 > self.config.max_file_size {
            return EntryContent::TooLarge;
        }

        if self.config.image_previews
            && let Some(kind) = Self::image_kind(path)
            && kind.matches(&data)
        {
            return match Self::materialize(path, &data) {
                Ok(preview) => {
                    log::debug!(
                        "{} is an image, preview at {}",
                        path.display(),
                        preview.path().display()
                    );
                    EntryContent::ImageBinary(preview)
                }
                Err(e) => {
                    log::warn!("Could not write image preview for {}: {e}", path.display());
                    EntryContent::Binary
                }
            };
        }

        if self.is_binary(&data) {
            log::debug!("{} is binary", path.display());
            return EntryContent::Binary;
        }

        EntryContent::Text(RawText::new(data))
    }

    fn is_binary(&self, data: &[u8]) -> bool {
        let window = data.len().min(self.config.binary_sniff_len);
        data[..window].contains(&0)
    }

    fn image_kind(path: &Path) -> Option<ImageKind> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        IMAGE_EXTENSIONS.get(extension.as_str()).copied()
    }

    fn materialize(path: &Path, data: &[u8]) -> std::io::Result<ImagePreview> {
        let suffix = path
            .extension()
            .map(|extension| format!(".{}", extension.to_string_lossy()))
            .unwrap_or_default();

        let mut file = tempfile::Builder::new()
            .prefix("bitdiff-preview-")
            .suffix(&suffix)
            .tempfile()?;
        file.write_all(data)?;

        Ok(ImagePreview::new(file.into_temp_path()))
    }
}
