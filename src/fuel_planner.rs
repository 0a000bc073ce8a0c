use godot::builtin::VariantType;
use godot::prelude::*;

use crate::body;
use crate::fuel_calculator::FuelCalculator;
use crate::raw_input::RawValue;

/// Godot-accessible fuel planner node
/// Takes GDScript values as-is: mass as int/float, flight path as an
/// array of `[&"launch", "earth"]` pairs
#[derive(GodotClass)]
#[class(base=Node)]
pub struct FuelPlanner {
    base: Base<Node>,
}

#[godot_api]
impl INode for FuelPlanner {
    fn init(base: Base<Node>) -> Self {
        godot_print!("FuelPlanner initialized");
        Self { base }
    }
}

#[godot_api]
impl FuelPlanner {
    // ==========================================
    // Fuel Calculation
    // ==========================================

    /// Total fuel for the flight as a float, or the error message as a String
    #[func]
    pub fn calculate_fuel(&self, mass: Variant, flight_path: Variant) -> Variant {
        match calculator(&mass, &flight_path).call() {
            Ok(fuel) => fuel.to_variant(),
            Err(err) => {
                godot_warn!("calculate_fuel rejected: {}", err);
                GString::from(err.to_string().as_str()).to_variant()
            }
        }
    }

    /// Fuel per leg in flight order. Empty if the input is rejected
    #[func]
    pub fn calculate_leg_fuel(&self, mass: Variant, flight_path: Variant) -> Array<f64> {
        let mut result = Array::new();
        match calculator(&mass, &flight_path).leg_fuel() {
            Ok(legs) => {
                for fuel in legs {
                    result.push(fuel);
                }
            }
            Err(err) => godot_warn!("calculate_leg_fuel rejected: {}", err),
        }
        result
    }

    /// Returns empty string if valid, or an error message
    #[func]
    pub fn validate_flight_path(&self, mass: Variant, flight_path: Variant) -> GString {
        match calculator(&mass, &flight_path).validation_error() {
            None => GString::from(""),
            Some(err) => GString::from(err.to_string().as_str()),
        }
    }

    // ==========================================
    // Bodies
    // ==========================================

    /// Surface gravity in m/s², or 0.0 for an unknown body
    #[func]
    pub fn get_gravity(&self, body_name: GString) -> f64 {
        let name = body_name.to_string();
        match body::gravity(Some(name.as_str())) {
            Ok(g) => g,
            Err(err) => {
                godot_warn!("get_gravity: {}", err);
                0.0
            }
        }
    }

    #[func]
    pub fn is_known_body(&self, body_name: GString) -> bool {
        body::is_known(&body_name.to_string())
    }

    #[func]
    pub fn get_body_names(&self) -> Array<GString> {
        let mut result = Array::new();
        for name in body::known_body_names() {
            result.push(&GString::from(name));
        }
        result
    }
}

fn calculator(mass: &Variant, flight_path: &Variant) -> FuelCalculator {
    FuelCalculator::new(raw_from_variant(mass), raw_from_variant(flight_path))
}

/// StringName maps to a symbol, String to a string
fn raw_from_variant(value: &Variant) -> RawValue {
    match value.get_type() {
        VariantType::NIL => RawValue::Nil,
        VariantType::BOOL => RawValue::Bool(value.to::<bool>()),
        VariantType::INT => RawValue::Int(value.to::<i64>()),
        VariantType::FLOAT => RawValue::Float(value.to::<f64>()),
        VariantType::STRING => RawValue::Str(value.to::<GString>().to_string()),
        VariantType::STRING_NAME => RawValue::Symbol(value.to::<StringName>().to_string()),
        VariantType::ARRAY => RawValue::List(
            value
                .to::<Array<Variant>>()
                .iter_shared()
                .map(|item| raw_from_variant(&item))
                .collect(),
        ),
        _ => RawValue::Other(value.to_string()),
    }
}
