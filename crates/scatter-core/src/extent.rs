// File: crates/scatter-core/src/extent.rs
// Summary: Data extents used to derive scale domains.

use crate::record::Record;

/// Largest value of `field` across `records`, skipping NaN. `None` when no
/// record has a comparable value.
pub fn max_field(records: &[Record], field: &str) -> Option<f64> {
    records
        .iter()
        .map(|r| r.number(field))
        .filter(|v| !v.is_nan())
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
}

/// Domain `[min, max(field)]`; the upper bound is NaN when the field has no values.
pub fn domain_from(records: &[Record], min: f64, field: &str) -> [f64; 2] {
    [min, max_field(records, field).unwrap_or(f64::NAN)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(values: &[&str]) -> Vec<Record> {
        values.iter().map(|v| Record::from_pairs([("poverty", *v)])).collect()
    }

    #[test]
    fn max_skips_nan() {
        assert_eq!(max_field(&rows(&["10", "abc", "20", "15"]), "poverty"), Some(20.0));
    }

    #[test]
    fn empty_or_all_nan_has_no_max() {
        assert_eq!(max_field(&[], "poverty"), None);
        assert_eq!(max_field(&rows(&["x", "y"]), "poverty"), None);
        assert!(domain_from(&[], 7.0, "poverty")[1].is_nan());
    }
}
