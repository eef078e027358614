//! Integration tests for counts, countables, and multiplicity.

use pluralchain_foundation::{Count, Countable, Multiplicity};

// =============================================================================
// Singular/Plural Threshold
// =============================================================================

#[test]
fn one_is_singular() {
    assert!(Count::ONE.is_singular());
    assert_eq!(Count::new(1.0).multiplicity(), Multiplicity::Singular);
}

#[test]
fn zero_is_plural() {
    assert_eq!(Count::new(0.0).multiplicity(), Multiplicity::Plural);
}

#[test]
fn many_is_plural() {
    assert_eq!(Count::new(2.0).multiplicity(), Multiplicity::Plural);
    assert_eq!(Count::new(95.0).multiplicity(), Multiplicity::Plural);
}

#[test]
fn fractional_counts_are_plural() {
    assert_eq!(Count::new(0.75).multiplicity(), Multiplicity::Plural);
    assert_eq!(Count::new(1.0000001).multiplicity(), Multiplicity::Plural);
}

#[test]
fn non_finite_counts_are_plural() {
    assert_eq!(Count::new(f64::INFINITY).multiplicity(), Multiplicity::Plural);
    assert_eq!(
        Count::new(f64::NEG_INFINITY).multiplicity(),
        Multiplicity::Plural
    );
    assert_eq!(Count::new(f64::NAN).multiplicity(), Multiplicity::Plural);
}

#[test]
fn negative_counts_are_plural() {
    assert_eq!(Count::new(-1.0).multiplicity(), Multiplicity::Plural);
}

// =============================================================================
// Decimal Rendering
// =============================================================================

#[test]
fn integral_counts_render_without_fraction() {
    assert_eq!(Count::new(0.0).to_string(), "0");
    assert_eq!(Count::new(1.0).to_string(), "1");
    assert_eq!(Count::new(42.0).to_string(), "42");
}

#[test]
fn fractional_counts_render_exactly() {
    assert_eq!(Count::new(0.75).to_string(), "0.75");
    assert_eq!(Count::new(1.2345).to_string(), "1.2345");
    assert_eq!(Count::new(1.0000001).to_string(), "1.0000001");
}

#[test]
fn non_finite_counts_render_standard_forms() {
    assert_eq!(Count::new(f64::INFINITY).to_string(), "inf");
    assert_eq!(Count::new(f64::NAN).to_string(), "NaN");
}

// =============================================================================
// Countable Sources
// =============================================================================

#[test]
fn integers_are_countable() {
    assert_eq!(0_u32.count(), Count::new(0.0));
    assert_eq!(1_i64.count(), Count::new(1.0));
    assert_eq!(7_usize.count(), Count::new(7.0));
}

#[test]
fn floats_are_countable() {
    assert_eq!(0.75_f64.count(), Count::new(0.75));
    assert_eq!(1.5_f32.count(), Count::new(1.5));
}

#[test]
fn vec_counts_by_length() {
    let nephews = vec!["Tick", "Trick", "Track"];
    assert_eq!(nephews.count(), Count::new(3.0));
}

#[test]
fn slice_counts_by_length() {
    let items: &[u8] = &[1, 2];
    assert_eq!(items.count(), Count::new(2.0));
}

#[test]
fn empty_sequence_counts_zero() {
    let none: Vec<String> = Vec::new();
    assert_eq!(none.count(), Count::new(0.0));
    assert_eq!(none.count().multiplicity(), Multiplicity::Plural);
}

#[test]
fn references_are_countable() {
    let fruits = vec!["apple"];
    assert_eq!((&fruits).count(), Count::new(1.0));
    assert!((&fruits).count().is_singular());
}

// =============================================================================
// Multiplicity
// =============================================================================

#[test]
fn forced_counts_resolve_to_their_multiplicity() {
    assert_eq!(
        Multiplicity::Singular.forced_count().multiplicity(),
        Multiplicity::Singular
    );
    assert_eq!(
        Multiplicity::Plural.forced_count().multiplicity(),
        Multiplicity::Plural
    );
}

#[test]
fn multiplicity_display() {
    assert_eq!(format!("{}", Multiplicity::Singular), "singular");
    assert_eq!(format!("{}", Multiplicity::Plural), "plural");
}
