/// Size Validator - Export Size Rules
///
/// This module checks the requested icon sizes before anything is rendered.
///
/// ## Validation Rules
/// - The size list must not be empty
/// - Sizes must be greater than zero
/// - Sizes must not exceed the configured maximum (1024 for PNG, 256 for ICO)
/// - Duplicates are dropped, first occurrence wins
///
/// ## Usage
/// ```rust
/// use icon_forge::domain::validation::SizeValidator;
///
/// let validator = SizeValidator::new();
/// match validator.validate(&[16, 32, 32, 64]) {
///     Ok(sizes) => assert_eq!(sizes.as_slice(), &[16, 32, 64]),
///     Err(e) => println!("Validation error: {}", e),
/// }
/// ```

use smallvec::SmallVec;

use crate::shared::defaults::{MAX_ICON_SIZE, MAX_ICO_SIZE};

/// 校验后的尺寸列表，常见情况下不分配堆内存
pub type SizeList = SmallVec<[u32; 8]>;

/// Validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// No sizes requested
    EmptySizes,

    /// Size is zero
    InvalidSize(String),

    /// Size exceeds maximum allowed
    SizeOutOfRange(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptySizes => write!(f, "No sizes requested"),
            ValidationError::InvalidSize(msg) => write!(f, "Invalid size: {}", msg),
            ValidationError::SizeOutOfRange(msg) => write!(f, "Size out of range: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Size validation configuration
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Maximum edge length (inclusive)
    pub max_size: u32,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_size: MAX_ICON_SIZE,
        }
    }
}

/// Size validator
pub struct SizeValidator {
    config: ValidationConfig,
}

impl SizeValidator {
    /// Creates a validator for rendered PNG sizes
    pub fn new() -> Self {
        Self {
            config: ValidationConfig::default(),
        }
    }

    /// Creates a validator for ICO frame sizes
    pub fn for_ico() -> Self {
        Self::with_config(ValidationConfig {
            max_size: MAX_ICO_SIZE,
        })
    }

    pub fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validates a size list
    ///
    /// # Returns
    /// * `Ok(SizeList)` with duplicates removed, original order kept
    /// * `Err(ValidationError)` on the first offending size
    pub fn validate(&self, sizes: &[u32]) -> Result<SizeList, ValidationError> {
        if sizes.is_empty() {
            return Err(ValidationError::EmptySizes);
        }

        let mut out = SizeList::new();
        for &size in sizes {
            self.validate_size(size)?;
            if !out.contains(&size) {
                out.push(size);
            }
        }

        Ok(out)
    }

    fn validate_size(&self, size: u32) -> Result<(), ValidationError> {
        if size == 0 {
            return Err(ValidationError::InvalidSize(
                "Size must be greater than zero".to_string()
            ));
        }

        if size > self.config.max_size {
            return Err(ValidationError::SizeOutOfRange(
                format!("Size {} exceeds maximum {}", size, self.config.max_size)
            ));
        }

        Ok(())
    }
}

impl Default for SizeValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::defaults::{DEFAULT_ICO_SIZES, DEFAULT_PNG_SIZES};

    #[test]
    fn test_default_sizes_are_valid() {
        let sizes = SizeValidator::new().validate(&DEFAULT_PNG_SIZES).unwrap();
        assert_eq!(sizes.as_slice(), &DEFAULT_PNG_SIZES);

        let ico = SizeValidator::for_ico().validate(&DEFAULT_ICO_SIZES).unwrap();
        assert_eq!(ico.as_slice(), &DEFAULT_ICO_SIZES);
    }

    #[test]
    fn test_empty_sizes() {
        let result = SizeValidator::new().validate(&[]);
        assert_eq!(result.unwrap_err(), ValidationError::EmptySizes);
    }

    #[test]
    fn test_zero_size() {
        let result = SizeValidator::new().validate(&[16, 0]);
        assert!(matches!(result.unwrap_err(), ValidationError::InvalidSize(_)));
    }

    #[test]
    fn test_size_out_of_range() {
        assert!(matches!(
            SizeValidator::new().validate(&[2048]).unwrap_err(),
            ValidationError::SizeOutOfRange(_)
        ));

        // 512 可以渲染成 PNG，但放不进 ICO
        assert!(SizeValidator::new().validate(&[512]).is_ok());
        assert!(matches!(
            SizeValidator::for_ico().validate(&[512]).unwrap_err(),
            ValidationError::SizeOutOfRange(_)
        ));
    }

    #[test]
    fn test_duplicates_removed_in_order() {
        let sizes = SizeValidator::new().validate(&[64, 16, 64, 32, 16]).unwrap();
        assert_eq!(sizes.as_slice(), &[64, 16, 32]);
    }
}
