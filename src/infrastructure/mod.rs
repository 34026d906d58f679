/// Infrastructure Layer - Technical Implementations
///
/// This layer contains everything that touches the file system or other
/// processes: image encoding and ICNS generation.
///
/// The infrastructure layer depends on the domain layer but the domain
/// layer does not depend on infrastructure.
///
/// ## Modules
/// - `encoders`: PNG and ICO encoding
/// - `icns`: ICNS backends (external tool, native writer)

pub mod encoders;
pub mod icns;

// Re-export key types
pub use encoders::{EncodeError, IcoEntry};
pub use icns::{IcnsBackend, IcnsBackendKind, IcnsError, IcnsRequest, IcnsToolConfig};
