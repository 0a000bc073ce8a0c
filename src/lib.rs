use godot::prelude::*;

pub mod balance;
pub mod body;
pub mod error;
pub mod flight_path;
pub mod flight_path_validator;
pub mod fuel_calculator;
pub mod raw_input;

mod fuel_planner;

pub use error::{FuelError, UnknownBody};
pub use flight_path::{Action, FlightPath, FlightStep};
pub use flight_path_validator::{validate, FlightPathValidator};
pub use fuel_calculator::{compute_fuel, FuelCalculator};
pub use raw_input::RawValue;

struct FlightFuelExtension;

#[gdextension]
unsafe impl ExtensionLibrary for FlightFuelExtension {}
