use thiserror::Error;

/// Reasons a fuel calculation can be rejected.
///
/// The `Display` output is the user-facing message; GDScript callers receive
/// it verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FuelError {
    #[error("Invalid mass: must be a positive number")]
    InvalidMass,

    #[error("Invalid flight path: must be a non-empty array")]
    InvalidFlightPath,

    /// `step` is 1-based
    #[error("Invalid action in step {step}: must be :launch or :land")]
    InvalidAction { step: usize },

    /// `planet` is the name exactly as supplied, empty when missing
    #[error("Unknown gravity for planet '{planet}' at step {step}")]
    UnknownGravity { planet: String, step: usize },

    #[error("Error in fuel calculation")]
    Calculation,
}

/// Raised by a direct registry lookup for a body that isn't in the table.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Unknown planet: {0}")]
pub struct UnknownBody(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(FuelError::InvalidMass.to_string(), "Invalid mass: must be a positive number");
        assert_eq!(
            FuelError::InvalidFlightPath.to_string(),
            "Invalid flight path: must be a non-empty array"
        );
        assert_eq!(
            FuelError::InvalidAction { step: 3 }.to_string(),
            "Invalid action in step 3: must be :launch or :land"
        );
        assert_eq!(
            FuelError::UnknownGravity { planet: "Jupiter".to_string(), step: 2 }.to_string(),
            "Unknown gravity for planet 'Jupiter' at step 2"
        );
        assert_eq!(FuelError::Calculation.to_string(), "Error in fuel calculation");
    }

    #[test]
    fn test_unknown_body_message() {
        assert_eq!(UnknownBody("Pluto".to_string()).to_string(), "Unknown planet: Pluto");
        assert_eq!(UnknownBody(String::new()).to_string(), "Unknown planet: ");
    }
}
