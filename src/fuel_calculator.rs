use crate::balance::{fuel_coefficients, MAX_FUEL_ITERATIONS};
use crate::body;
use crate::error::FuelError;
use crate::flight_path::{Action, FlightPath};
use crate::flight_path_validator::FlightPathValidator;
use crate::raw_input::RawValue;

/// Computes the fuel a vehicle needs for a multi-leg flight.
///
/// Input is checked by [`FlightPathValidator`] first; the first problem
/// found is returned instead of a fuel figure.
#[derive(Debug, Clone)]
pub struct FuelCalculator {
    mass: RawValue,
    flight_path: RawValue,
}

impl FuelCalculator {
    pub fn new(mass: impl Into<RawValue>, flight_path: impl Into<RawValue>) -> Self {
        Self {
            mass: mass.into(),
            flight_path: flight_path.into(),
        }
    }

    /// Build from already-typed input
    pub fn for_path(mass: f64, flight_path: &FlightPath) -> Self {
        Self::new(mass, flight_path.to_raw())
    }

    /// Total fuel for the whole flight.
    /// Whole-numbered, but returned as `f64` since mass may be fractional.
    pub fn call(&self) -> Result<f64, FuelError> {
        Ok(self.leg_fuel()?.iter().sum())
    }

    /// Fuel burned on each leg, in flight order
    pub fn leg_fuel(&self) -> Result<Vec<f64>, FuelError> {
        if let Some(err) = self.validation_error() {
            return Err(err);
        }
        let mass = self.mass.as_f64().ok_or(FuelError::InvalidMass)?;
        let path = FlightPath::from_raw(&self.flight_path)?;
        accumulate_fuel(mass, &path)
    }

    pub fn validation_error(&self) -> Option<FuelError> {
        let known = body::known_body_names();
        FlightPathValidator::new(&self.mass, &self.flight_path, &known).validate()
    }
}

/// Walk the flight backwards so each leg carries the fuel of every leg after it.
/// Returns per-leg fuel in flight order.
pub fn accumulate_fuel(initial_mass: f64, flight_path: &FlightPath) -> Result<Vec<f64>, FuelError> {
    let mut current_mass = initial_mass;
    let mut legs = vec![0.0; flight_path.len()];

    for (index, step) in flight_path.steps.iter().enumerate().rev() {
        let gravity = body::gravity(Some(step.body.as_str())).map_err(|_| FuelError::UnknownGravity {
            planet: step.body.clone(),
            step: index + 1,
        })?;

        let fuel = fuel_for_step(current_mass, step.action, gravity)?;
        if fuel < 0.0 {
            return Err(FuelError::Calculation);
        }

        legs[index] = fuel;
        current_mass += fuel;
    }

    Ok(legs)
}

/// Fuel for one leg, including fuel to lift the fuel itself.
///
/// Applies [`base_fuel`] to its own output until the result drops to zero
/// or below; the positive results are summed.
pub fn fuel_for_step(mass: f64, action: Action, gravity: f64) -> Result<f64, FuelError> {
    let mut total = 0.0;
    let mut fuel = base_fuel(mass, action, gravity);
    let mut iterations = 0;

    while fuel > 0.0 {
        iterations += 1;
        if iterations > MAX_FUEL_ITERATIONS {
            return Err(FuelError::Calculation);
        }
        total += fuel;
        fuel = base_fuel(fuel, action, gravity);
    }

    Ok(total)
}

/// One burn: `floor(mass * gravity * factor - offset)`
pub fn base_fuel(mass: f64, action: Action, gravity: f64) -> f64 {
    let c = fuel_coefficients(action);
    (mass * gravity * c.factor - c.offset).floor()
}

/// Validate and compute in one call
pub fn compute_fuel(mass: &RawValue, flight_path: &RawValue) -> Result<f64, FuelError> {
    FuelCalculator::new(mass.clone(), flight_path.clone()).call()
}
