//! Crate-level error type
//!
//! The vector and scalar modules never fail; only the cost calculations and
//! the command-line front end produce errors.

use thiserror::Error;

use crate::costs::CostError;

/// Main error type for the gamemath library
#[derive(Debug, Error, PartialEq)]
pub enum GameMathError {
    /// Error from the cost calculations
    #[error("Cost error: {0}")]
    Cost(#[from] CostError),

    /// A caller-supplied argument is outside its valid range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for gamemath operations
pub type Result<T> = std::result::Result<T, GameMathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_error_converts() {
        fn fails() -> Result<f64> {
            let data = crate::costs::CostData::new(10.0, 1.07)?;
            Ok(crate::costs::get_cost(0, &data, 0)?)
        }

        let err = fails().unwrap_err();
        assert_eq!(err, GameMathError::Cost(CostError::InvalidAmount(0)));
        assert_eq!(err.to_string(), "Cost error: Amount out of range: 0");
    }
}
