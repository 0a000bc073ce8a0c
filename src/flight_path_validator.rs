use std::collections::BTreeSet;

use crate::body;
use crate::error::FuelError;
use crate::flight_path::Action;
use crate::raw_input::RawValue;

/// Checks caller input before any fuel is computed.
///
/// Reports only the first problem found, in this order: mass, path shape,
/// then each step from the first (action before body).
pub struct FlightPathValidator<'a> {
    mass: &'a RawValue,
    flight_path: &'a RawValue,
    known_bodies: &'a BTreeSet<&'static str>,
}

impl<'a> FlightPathValidator<'a> {
    pub fn new(
        mass: &'a RawValue,
        flight_path: &'a RawValue,
        known_bodies: &'a BTreeSet<&'static str>,
    ) -> Self {
        Self {
            mass,
            flight_path,
            known_bodies,
        }
    }

    /// `None` when the input is usable, otherwise the first error
    pub fn validate(&self) -> Option<FuelError> {
        if !self.valid_mass() {
            return Some(FuelError::InvalidMass);
        }
        let Some(steps) = self.flight_path.as_list().filter(|s| !s.is_empty()) else {
            return Some(FuelError::InvalidFlightPath);
        };
        self.validate_steps(steps)
    }

    fn valid_mass(&self) -> bool {
        // NaN fails the comparison
        self.mass.as_f64().is_some_and(|m| m > 0.0)
    }

    fn validate_steps(&self, steps: &[RawValue]) -> Option<FuelError> {
        for (index, entry) in steps.iter().enumerate() {
            let step = index + 1;
            let (action, planet) = entry.as_step_pair();

            if Action::try_from(action).is_err() {
                return Some(FuelError::InvalidAction { step });
            }
            if !self.known_planet(planet) {
                return Some(FuelError::UnknownGravity {
                    planet: planet.to_string(),
                    step,
                });
            }
        }
        None
    }

    fn known_planet(&self, planet: &RawValue) -> bool {
        match planet {
            RawValue::Str(name) => self.known_bodies.contains(name.to_lowercase().as_str()),
            // Missing names are looked up as ""
            RawValue::Nil => self.known_bodies.contains(""),
            _ => false,
        }
    }
}

/// Validate against the built-in body registry
pub fn validate(mass: &RawValue, flight_path: &RawValue) -> Option<FuelError> {
    let known = body::known_body_names();
    FlightPathValidator::new(mass, flight_path, &known).validate()
}
