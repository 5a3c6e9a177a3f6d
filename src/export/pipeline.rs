//! Capture, download, and share flows for the card.
//!
//! The share flow is fully contained: every failure degrades to opening
//! the compose URL, and the user is never shown a raw error. The download
//! flow has no such containment; its errors propagate to the caller.

use anyhow::{Context, Result};
use image::RgbaImage;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::constants::{EXPORT_FILENAME, EXPORT_MIME, EXPORT_WIDTH, FALLBACK_HASHTAG};
use crate::models::CardState;

use super::scene::CardScene;
use super::share::{intent_url, Navigator, ShareRequest, ShareTarget};

/// Terminal state of a share flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The platform share facility accepted the payload.
    Shared,
    /// The compose URL was opened instead (capability missing or a
    /// contained failure along the way).
    FallbackOpened,
}

/// Export pipeline with injected share capabilities.
pub struct ExportPipeline<'a> {
    navigator: &'a dyn Navigator,
    share_target: &'a dyn ShareTarget,
}

impl<'a> ExportPipeline<'a> {
    /// Creates a pipeline around the given capabilities.
    #[must_use]
    pub fn new(navigator: &'a dyn Navigator, share_target: &'a dyn ShareTarget) -> Self {
        Self {
            navigator,
            share_target,
        }
    }

    /// Rasterizes the card's current state at the export resolution.
    ///
    /// The export typography overrides are applied to the captured scene
    /// copy only; the live card is never touched.
    ///
    /// # Errors
    ///
    /// Returns an error if rasterization fails.
    pub fn capture(card: &CardState) -> Result<RgbaImage> {
        CardScene::from_card(card)
            .with_export_typography()
            .rasterize(EXPORT_WIDTH)
    }

    /// Download path: capture, encode, and write `card.png` into `output_dir`.
    ///
    /// # Errors
    ///
    /// Any capture, encoding, or write failure propagates to the caller;
    /// this path has no fallback.
    pub fn download(card: &CardState, output_dir: &Path) -> Result<PathBuf> {
        let image = Self::capture(card)?;
        let png = encode_png(&image)?;

        fs::create_dir_all(output_dir).with_context(|| {
            format!("Failed to create output directory {}", output_dir.display())
        })?;

        let path = output_dir.join(EXPORT_FILENAME);
        fs::write(&path, png)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        info!(path = %path.display(), "card exported");
        Ok(path)
    }

    /// Share path: capture, encode, and offer the card to the platform
    /// share facility, degrading to the compose URL on any failure.
    ///
    /// There is no retry and no cancellation once the flow starts.
    pub fn share(&self, card: &CardState) -> ShareOutcome {
        let image = match Self::capture(card) {
            Ok(image) => image,
            Err(err) => {
                error!("An error occurred while capturing the card: {err:#}");
                return self.open_fallback(FALLBACK_HASHTAG);
            }
        };

        self.share_encoded(encode_png(&image))
    }

    /// Advances the share flow from the encoding step.
    ///
    /// Split out so tests can drive the blob-failed branch directly.
    pub fn share_encoded(&self, blob: Result<Vec<u8>>) -> ShareOutcome {
        let blob = match blob {
            Ok(blob) => blob,
            Err(err) => {
                error!("Could not generate image data from the card: {err:#}");
                return self.open_fallback(FALLBACK_HASHTAG);
            }
        };

        let request = ShareRequest {
            file_name: EXPORT_FILENAME,
            mime: EXPORT_MIME,
            bytes: &blob,
            text: FALLBACK_HASHTAG,
        };

        if !self.share_target.can_share(&request) {
            return self.open_fallback(FALLBACK_HASHTAG);
        }

        match self.share_target.share(&request) {
            Ok(()) => ShareOutcome::Shared,
            Err(err) => {
                error!("An error occurred while sharing the card: {err:#}");
                self.open_fallback(FALLBACK_HASHTAG)
            }
        }
    }

    /// Opens the compose URL with the given message. Fire and forget: a
    /// navigation failure is logged, nothing else is attempted.
    pub fn open_fallback(&self, message: &str) -> ShareOutcome {
        let url = intent_url(message);
        if let Err(err) = self.navigator.open(&url) {
            error!("Failed to open compose URL {url}: {err:#}");
        }
        ShareOutcome::FallbackOpened
    }
}

/// Encodes the captured image as PNG bytes.
///
/// # Errors
///
/// Returns an error if the encoder produces no usable data.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buffer), image::ImageFormat::Png)
        .context("Failed to encode card as PNG")?;
    if buffer.is_empty() {
        anyhow::bail!("PNG encoder produced no data");
    }
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Navigator that records opened URLs instead of spawning a browser.
    struct RecordingNavigator {
        opened: RefCell<Vec<String>>,
    }

    impl RecordingNavigator {
        fn new() -> Self {
            Self {
                opened: RefCell::new(Vec::new()),
            }
        }
    }

    impl Navigator for RecordingNavigator {
        fn open(&self, url: &str) -> Result<()> {
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    /// Share target with scripted capability and result.
    struct ScriptedShare {
        supported: bool,
        fails: bool,
        shared: RefCell<Vec<(String, String, usize)>>,
    }

    impl ShareTarget for ScriptedShare {
        fn can_share(&self, _request: &ShareRequest<'_>) -> bool {
            self.supported
        }

        fn share(&self, request: &ShareRequest<'_>) -> Result<()> {
            if self.fails {
                anyhow::bail!("share dialog dismissed");
            }
            self.shared.borrow_mut().push((
                request.file_name.to_string(),
                request.text.to_string(),
                request.bytes.len(),
            ));
            Ok(())
        }
    }

    fn scripted(supported: bool, fails: bool) -> ScriptedShare {
        ScriptedShare {
            supported,
            fails,
            shared: RefCell::new(Vec::new()),
        }
    }

    #[test]
    fn share_unsupported_opens_compose_url() {
        let navigator = RecordingNavigator::new();
        let target = scripted(false, false);
        let pipeline = ExportPipeline::new(&navigator, &target);

        let outcome = pipeline.share(&CardState::new());
        assert_eq!(outcome, ShareOutcome::FallbackOpened);

        let opened = navigator.opened.borrow();
        assert_eq!(opened.len(), 1);
        assert!(opened[0].starts_with("https://x.com/intent/post?text="));
        assert!(opened[0].contains("%23justmakethings"));
    }

    #[test]
    fn share_supported_hands_off_named_file() {
        let navigator = RecordingNavigator::new();
        let target = scripted(true, false);
        let pipeline = ExportPipeline::new(&navigator, &target);

        let outcome = pipeline.share(&CardState::new());
        assert_eq!(outcome, ShareOutcome::Shared);
        assert!(navigator.opened.borrow().is_empty());

        let shared = target.shared.borrow();
        assert_eq!(shared.len(), 1);
        assert_eq!(shared[0].0, "card.png");
        assert_eq!(shared[0].1, "#justmakethings");
        assert!(shared[0].2 > 0, "payload should carry encoded bytes");
    }

    #[test]
    fn share_rejection_falls_back() {
        let navigator = RecordingNavigator::new();
        let target = scripted(true, true);
        let pipeline = ExportPipeline::new(&navigator, &target);

        let outcome = pipeline.share(&CardState::new());
        assert_eq!(outcome, ShareOutcome::FallbackOpened);
        assert_eq!(navigator.opened.borrow().len(), 1);
    }

    #[test]
    fn blob_failure_falls_back_without_share_attempt() {
        let navigator = RecordingNavigator::new();
        let target = scripted(true, false);
        let pipeline = ExportPipeline::new(&navigator, &target);

        let outcome = pipeline.share_encoded(Err(anyhow::anyhow!("encoder returned no data")));
        assert_eq!(outcome, ShareOutcome::FallbackOpened);
        assert!(target.shared.borrow().is_empty());
        assert_eq!(navigator.opened.borrow().len(), 1);
    }

    #[test]
    fn encode_png_produces_magic_bytes() {
        let image = ExportPipeline::capture(&CardState::new()).expect("capture");
        let png = encode_png(&image).expect("encode");
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n']);
    }

    #[test]
    fn download_writes_fixed_filename() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = ExportPipeline::download(&CardState::new(), dir.path()).expect("download");
        assert_eq!(path.file_name().unwrap(), "card.png");
        assert!(path.exists());
    }

    #[test]
    fn download_is_idempotent_for_unchanged_state() {
        let dir = tempfile::tempdir().expect("tempdir");
        let card = CardState::new();
        let first = ExportPipeline::download(&card, dir.path()).expect("download");
        let bytes_a = std::fs::read(&first).expect("read");
        let second = ExportPipeline::download(&card, dir.path()).expect("download");
        let bytes_b = std::fs::read(&second).expect("read");
        assert_eq!(first, second);
        assert_eq!(bytes_a, bytes_b);
    }
}
