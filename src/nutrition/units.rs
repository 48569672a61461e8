//! Fallback unit table
//!
//! Food-independent grams-per-unit constants used when a food has no matching
//! portion record.

// ============================================================================
// Weight Conversion Constants (to grams)
// ============================================================================

pub const G_PER_GRAM: f64 = 1.0;
pub const G_PER_KG: f64 = 1000.0;
/// Rough cup weight, independent of the food
pub const G_PER_CUP: f64 = 150.0;
pub const G_PER_OZ: f64 = 28.3;
pub const G_PER_LB: f64 = 454.0;

/// Every fallback unit and its grams, in table order
pub const FALLBACK_UNITS: [(&str, f64); 5] = [
    ("gram", G_PER_GRAM),
    ("kg", G_PER_KG),
    ("cup", G_PER_CUP),
    ("oz", G_PER_OZ),
    ("lb", G_PER_LB),
];

/// Grams for one fallback unit; the unit must match a key exactly
pub fn fallback_grams_per_unit(unit: &str) -> Option<f64> {
    match unit {
        "gram" => Some(G_PER_GRAM),
        "kg" => Some(G_PER_KG),
        "cup" => Some(G_PER_CUP),
        "oz" => Some(G_PER_OZ),
        "lb" => Some(G_PER_LB),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_table_values() {
        assert_eq!(fallback_grams_per_unit("gram"), Some(1.0));
        assert_eq!(fallback_grams_per_unit("kg"), Some(1000.0));
        assert_eq!(fallback_grams_per_unit("cup"), Some(150.0));
        assert_eq!(fallback_grams_per_unit("oz"), Some(28.3));
        assert_eq!(fallback_grams_per_unit("lb"), Some(454.0));
    }

    #[test]
    fn test_fallback_is_exact_match() {
        assert_eq!(fallback_grams_per_unit("g"), None);
        assert_eq!(fallback_grams_per_unit("cups"), None);
        assert_eq!(fallback_grams_per_unit("Cup"), None);
        assert_eq!(fallback_grams_per_unit("each"), None);
    }

    #[test]
    fn test_table_and_lookup_agree() {
        for (unit, grams) in FALLBACK_UNITS {
            assert_eq!(fallback_grams_per_unit(unit), Some(grams));
        }
    }
}
