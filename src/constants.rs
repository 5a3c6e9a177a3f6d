//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application identity, caption rules, and export settings.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "makecard";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "makecard";

/// Caption shown and stored whenever the user-entered caption is empty.
pub const PLACEHOLDER_CAPTION: &str = "just make things";

/// Maximum caption length in characters. Excess input is truncated, not rejected.
pub const MAX_CAPTION_LEN: usize = 30;

/// Default text color for a freshly created card.
pub const DEFAULT_TEXT_COLOR: &str = "#FFFFFF";

/// Default background color for a freshly created card.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#0B0E11";

/// Width of the exported raster image in pixels. Height follows the card aspect.
pub const EXPORT_WIDTH: u32 = 1920;

/// Logical card width the scene is built at before export scaling.
pub const CARD_LOGICAL_WIDTH: u32 = 960;

/// Logical card height (16:9 aspect).
pub const CARD_LOGICAL_HEIGHT: u32 = 540;

/// Fixed filename for the exported and shared image.
pub const EXPORT_FILENAME: &str = "card.png";

/// MIME type of the export artifact.
pub const EXPORT_MIME: &str = "image/png";

/// Font stack applied to the exported copy only.
pub const EXPORT_FONT_FAMILY: &str = "Impact, sans-serif";

/// Font size (SVG user units) applied to the exported copy only.
pub const EXPORT_FONT_SIZE: u32 = 72;

/// Upward baseline offset (SVG user units) applied to the exported copy only.
pub const EXPORT_BASELINE_OFFSET: i32 = -30;

/// On-screen caption font size (SVG user units) before export overrides.
pub const SCREEN_FONT_SIZE: u32 = 60;

/// Hashtag used as share caption and as the fallback compose message.
pub const FALLBACK_HASHTAG: &str = "#justmakethings";

/// Promotional compose message for the "made with" credit.
pub const PROMO_MESSAGE: &str = "made with v0.dev";

/// Base URL of the social compose endpoint.
pub const INTENT_BASE_URL: &str = "https://x.com/intent/post";
