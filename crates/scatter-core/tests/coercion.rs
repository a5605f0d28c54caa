// File: crates/scatter-core/tests/coercion.rs
// Purpose: Numeric coercion over real-looking datasets, per variant.

use scatter_core::{source, ChartConfig, Value};

fn fixture(name: &str) -> Vec<u8> {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name);
    std::fs::read(&path).expect("read fixture")
}

#[test]
fn enumerated_fields_become_numbers_and_others_stay_text() {
    let cfg = ChartConfig::responsive();
    let fields = cfg.numeric_field_refs();
    let mut rows = source::parse_csv(&fixture("data.csv")).expect("parse");
    assert_eq!(rows.len(), 20);
    for r in rows.iter_mut() {
        r.coerce(&fields);
    }

    for r in &rows {
        for f in &fields {
            match r.get(f) {
                Some(Value::Number(n)) => assert!(n.is_finite() || n.is_nan(), "{f} = {n}"),
                other => panic!("{f} not numeric: {other:?}"),
            }
        }
        assert!(matches!(r.get("state"), Some(Value::Text(_))));
        assert!(matches!(r.get("abbr"), Some(Value::Text(_))));
    }
    assert_eq!(rows[0].number("poverty"), 19.3);
    assert_eq!(rows[0].text("state"), Some("Alabama"));
}

#[test]
fn quirky_rows_are_kept_not_filtered() {
    let cfg = ChartConfig::responsive();
    let fields = cfg.numeric_field_refs();
    let mut rows = source::parse_csv(&fixture("quirks.csv")).expect("parse");
    for r in rows.iter_mut() {
        r.coerce(&fields);
    }
    assert_eq!(rows.len(), 4);
    // blank text coerces to zero, garbage and missing to NaN
    assert_eq!(rows[1].number("income"), 0.0);
    assert!(rows[2].number("poverty").is_nan());
    assert!(rows[3].number("healthcare").is_nan());
    assert_eq!(rows[3].number("poverty"), 9.5);
}

#[test]
fn static_variant_leaves_margins_as_text() {
    let cfg = ChartConfig::fixed();
    let mut rows = source::parse_csv(&fixture("data.csv")).expect("parse");
    for r in rows.iter_mut() {
        r.coerce(&cfg.numeric_field_refs());
    }
    assert!(rows[0].get("poverty").is_some_and(Value::is_number));
    assert_eq!(rows[0].text("povertyMoe"), Some("0.5"));
    assert_eq!(rows[0].text("smokesHigh"), Some("22.5"));
}
