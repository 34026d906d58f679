/// Application Layer - Use Cases and Report DTOs
///
/// This layer orchestrates domain drawing and infrastructure encoders into
/// the export pipeline. It never touches pixels directly.
///
/// ## Modules
/// - `use_cases`: The export pipeline
/// - `dto`: Report types handed back to the interfaces layer

pub mod use_cases;
pub mod dto;

// Re-export key types
pub use dto::{ArtifactKind, ArtifactReport, ExportReport, Outcome, ReportError};
pub use use_cases::{ExportConfig, ExportError, ExportIconsUseCase};
