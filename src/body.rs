use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use crate::error::UnknownBody;

/// A celestial body a vehicle can launch from or land on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Canonical lowercase name
    pub name: &'static str,
    /// Surface gravity in m/s²
    pub gravity_m_s2: f64,
}

/// Every body the fuel planner knows about
pub const BODIES: &[Body] = &[
    Body { name: "earth", gravity_m_s2: 9.807 },
    Body { name: "moon", gravity_m_s2: 1.62 },
    Body { name: "mars", gravity_m_s2: 3.711 },
];

/// Global gravity table keyed by lowercase body name
pub static GRAVITIES: LazyLock<BTreeMap<&'static str, f64>> = LazyLock::new(|| {
    BODIES.iter().map(|b| (b.name, b.gravity_m_s2)).collect()
});

/// Surface gravity for a body, matched case-insensitively.
/// A missing name is treated as the empty string.
pub fn gravity(name: Option<&str>) -> Result<f64, UnknownBody> {
    let raw = name.unwrap_or("");
    GRAVITIES
        .get(raw.to_lowercase().as_str())
        .copied()
        .ok_or_else(|| UnknownBody(raw.to_string()))
}

/// Whether `name` (any casing) is in the gravity table
pub fn is_known(name: &str) -> bool {
    GRAVITIES.contains_key(name.to_lowercase().as_str())
}

/// Lowercase names of all known bodies
pub fn known_body_names() -> BTreeSet<&'static str> {
    GRAVITIES.keys().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_gravity_for_each_body() {
        assert_eq!(gravity(Some("earth")), Ok(9.807));
        assert_eq!(gravity(Some("moon")), Ok(1.62));
        assert_eq!(gravity(Some("mars")), Ok(3.711));
    }

    #[test]
    fn test_gravity_case_insensitive() {
        assert_eq!(gravity(Some("Earth")), Ok(9.807));
        assert_eq!(gravity(Some("MOON")), Ok(1.62));
        assert_eq!(gravity(Some("MaRs")), Ok(3.711));
    }

    #[test]
    fn test_gravity_random_casing() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for body in BODIES {
            for _ in 0..50 {
                let mixed: String = body
                    .name
                    .chars()
                    .map(|c| if rng.gen::<bool>() { c.to_ascii_uppercase() } else { c })
                    .collect();
                assert_eq!(gravity(Some(mixed.as_str())), Ok(body.gravity_m_s2), "{mixed}");
                assert!(is_known(&mixed));
            }
        }
    }

    #[test]
    fn test_unknown_body_keeps_original_name() {
        assert_eq!(gravity(Some("jupiter")), Err(UnknownBody("jupiter".to_string())));
        assert_eq!(gravity(Some("Jupiter")), Err(UnknownBody("Jupiter".to_string())));
        assert_eq!(
            gravity(Some("Jupiter")).unwrap_err().to_string(),
            "Unknown planet: Jupiter"
        );
    }

    #[test]
    fn test_missing_and_empty_names() {
        assert_eq!(gravity(None), Err(UnknownBody(String::new())));
        assert_eq!(gravity(Some("")), Err(UnknownBody(String::new())));
        assert!(!is_known(""));
    }

    #[test]
    fn test_known_body_names() {
        let names: Vec<_> = known_body_names().into_iter().collect();
        assert_eq!(names, vec!["earth", "mars", "moon"]);
    }

    #[test]
    fn test_static_table_matches_bodies() {
        assert_eq!(GRAVITIES.len(), BODIES.len());
        for body in BODIES {
            assert_eq!(GRAVITIES[body.name], body.gravity_m_s2);
        }
    }
}
