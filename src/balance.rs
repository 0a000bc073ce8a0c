/// Tuning parameters for the fuel model.
/// Base fuel for one burn is `floor(mass * gravity * factor - offset)`.

use crate::flight_path::Action;

// ==========================================
// Burn Coefficients
// ==========================================

pub const LAUNCH_FACTOR: f64 = 0.042;
pub const LAUNCH_OFFSET: f64 = 33.0;

pub const LANDING_FACTOR: f64 = 0.033;
pub const LANDING_OFFSET: f64 = 42.0;

/// Factor and offset applied to a single burn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelCoefficients {
    pub factor: f64,
    pub offset: f64,
}

/// Get the burn coefficients for an action.
pub fn fuel_coefficients(action: Action) -> FuelCoefficients {
    match action {
        Action::Launch => FuelCoefficients { factor: LAUNCH_FACTOR, offset: LAUNCH_OFFSET },
        Action::Land => FuelCoefficients { factor: LANDING_FACTOR, offset: LANDING_OFFSET },
    }
}

// ==========================================
// Convergence
// ==========================================

/// Upper bound on fuel-for-fuel iterations within one leg.
/// Realistic inputs settle in well under a hundred.
pub const MAX_FUEL_ITERATIONS: usize = 10_000;
