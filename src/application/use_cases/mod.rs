/// Use Cases - High-level operations
///
/// ## Available Use Cases
/// - `ExportIconsUseCase`: Renders the icon and writes PNG/ICO/ICNS

pub mod export_icons;

// Re-export key types
pub use export_icons::{ExportConfig, ExportError, ExportIconsUseCase};
