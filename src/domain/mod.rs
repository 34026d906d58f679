/// Domain Layer - Icon Drawing
///
/// Pure pixel logic: colours, drawing primitives, the composed icon and
/// the size rules. No file system access happens here; the only external
/// type is `image::RgbaImage` used as the canvas.
///
/// ## Modules
/// - `palette`: Colour constants and the diagonal gradient
/// - `glyph`: "K" glyph, spark and background fill
/// - `icon`: Layer composition (`IconRenderer`)
/// - `validation`: Requested size checks

pub mod palette;
pub mod glyph;
pub mod icon;
pub mod validation;

// Re-export key types
pub use icon::{IconRenderer, IconStyle};
pub use palette::Gradient;
pub use validation::{SizeList, SizeValidator, ValidationError};
