/// Shared utilities and types used across all layers
///
/// This module contains:
/// - Default sizes and naming shared by the CLI and the use case
/// - Asset path layout (where each exported artefact lands)

pub mod defaults;
pub mod layout;

// Re-export commonly used types
pub use defaults::{DEFAULT_ICO_SIZES, DEFAULT_PNG_SIZES, ICNS_SOURCE_SIZE, MAX_ICON_SIZE, MAX_ICO_SIZE};
pub use layout::AssetLayout;
