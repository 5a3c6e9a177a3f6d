//! Export pipeline: scene capture, rasterization, download, and sharing.
//!
//! The pipeline reads the card's current state, rasterizes it into a
//! 1920 px wide PNG, and either writes it to disk or hands it to the
//! share flow with its compose-URL fallback.

pub mod pipeline;
pub mod scene;
pub mod share;

pub use pipeline::{ExportPipeline, ShareOutcome};
pub use scene::CardScene;
pub use share::{intent_url, Navigator, ShareRequest, ShareTarget, SystemNavigator, SystemShare};
