/// Errors raised when validating caller-supplied chart parameters.
///
/// Layout itself never fails: degenerate data falls back to defined
/// geometry. Only frames and configs that cannot describe a drawable area
/// are rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A dimension that must be positive was zero, negative or not finite.
    InvalidDimension { name: &'static str, value: f32 },

    /// A padding exceeds the dimension it is carved out of.
    PaddingExceedsDimension {
        padding: &'static str,
        value: f32,
        dimension: f32,
    },

    /// A calendar window must cover at least one day.
    EmptyDateWindow,
}

impl std::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryError::InvalidDimension { name, value } => {
                write!(f, "Invalid {}: {} (must be positive and finite)", name, value)
            }
            GeometryError::PaddingExceedsDimension {
                padding,
                value,
                dimension,
            } => write!(
                f,
                "Padding {} of {} exceeds the available dimension {}",
                padding, value, dimension
            ),
            GeometryError::EmptyDateWindow => {
                write!(f, "Calendar window must contain at least one day")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Result type for validating geometry inputs.
pub type GeometryResult<T> = Result<T, GeometryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GeometryError::InvalidDimension {
            name: "width",
            value: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid width: -1 (must be positive and finite)"
        );

        let err = GeometryError::PaddingExceedsDimension {
            padding: "padding_right",
            value: 120.0,
            dimension: 100.0,
        };
        assert!(err.to_string().contains("padding_right"));
    }
}
