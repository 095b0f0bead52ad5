//! FILENAME: core/engine/src/normalize.rs
//! PURPOSE: Text normalization used before column lookup and value matching.
//! CONTEXT: Column names are trimmed and lowercased; compared values are
//! trimmed and uppercased. Only surrounding whitespace is removed, and case
//! folding is the plain Unicode mapping with no locale rules.

/// Normalizes a header for lookup: surrounding whitespace stripped, lowercased.
pub fn normalize_column_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Normalizes a cell value for comparison: surrounding whitespace stripped, uppercased.
pub fn normalize_match_value(value: &str) -> String {
    value.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_name_trims_and_lowercases() {
        assert_eq!(normalize_column_name("  Type "), "type");
        assert_eq!(normalize_column_name("\tTOTAL\n"), "total");
        assert_eq!(normalize_column_name("Region Name"), "region name");
    }

    #[test]
    fn test_column_name_is_idempotent() {
        for raw in ["  Type ", "TOTAL", "Mixed Case  Name", "", "   ", "Ünïcödé", "straße"] {
            let once = normalize_column_name(raw);
            let twice = normalize_column_name(&once);
            assert_eq!(once, twice, "normalizing {:?} twice changed it", raw);
        }
    }

    #[test]
    fn test_match_value_trims_and_uppercases() {
        assert_eq!(normalize_match_value(" district "), "DISTRICT");
        assert_eq!(normalize_match_value("Total"), "TOTAL");
    }

    #[test]
    fn test_internal_whitespace_is_kept() {
        assert_eq!(normalize_match_value(" dis trict "), "DIS TRICT");
        assert_eq!(normalize_column_name(" to  tal "), "to  tal");
    }

    #[test]
    fn test_match_value_is_idempotent() {
        for raw in ["district", " Total ", "", "straße"] {
            let once = normalize_match_value(raw);
            assert_eq!(normalize_match_value(&once), once);
        }
    }
}
