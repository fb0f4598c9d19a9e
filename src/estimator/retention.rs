//! Retention fractions used by the size estimator.
//!
//! All constants here are display-tuning values, not business rules. They
//! only shape the size indicator shown when the backend preview endpoint
//! cannot answer.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::RuleKind;

/// Retention applied to rules the estimator does not recognize.
pub const DEFAULT: Decimal = dec!(0.70);

/// Retention applied to a gender rule with no matching demographic entry.
pub const GENDER_SPLIT: Decimal = dec!(0.50);

/// Fraction retained by a "more than N purchases" rule.
///
/// Each additional required purchase cuts the audience by 15 points,
/// bottoming out at 10%.
#[must_use]
pub fn purchase_fraction(purchases: Decimal) -> Decimal {
    (Decimal::ONE - purchases * dec!(0.15)).max(dec!(0.10))
}

/// Fixed retention per age bracket label.
#[must_use]
pub fn age_fraction(bracket: &str) -> Decimal {
    match bracket {
        "18-24" => dec!(0.18),
        "25-34" => dec!(0.25),
        "35-44" => dec!(0.22),
        "45-54" => dec!(0.15),
        "55-64" => dec!(0.12),
        "65+" => dec!(0.08),
        _ => dec!(0.15),
    }
}

/// Deterministic retention for a label the snapshot has no entry for.
///
/// Derived from a hash of the label so the same rule always estimates the
/// same, landing in a band chosen per field.
#[must_use]
pub fn hashed_fraction(kind: &RuleKind, label: &str) -> Decimal {
    let (lo, hi) = band(kind);
    lo + (hi - lo) * Decimal::from(label_hash(label) % 1000) / dec!(1000)
}

fn band(kind: &RuleKind) -> (Decimal, Decimal) {
    match kind {
        RuleKind::RfmSegment => (dec!(0.10), dec!(0.25)),
        RuleKind::PreferenceSegment => (dec!(0.15), dec!(0.40)),
        RuleKind::ProductCategory => (dec!(0.10), dec!(0.35)),
        RuleKind::Material => (dec!(0.10), dec!(0.30)),
        _ => (dec!(0.10), dec!(0.40)),
    }
}

/// 32-bit wrapping polynomial fold, stable across runs and platforms.
fn label_hash(s: &str) -> u32 {
    s.bytes()
        .fold(0u32, |h, b| h.wrapping_mul(31).wrapping_add(u32::from(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purchase_fraction_floors_at_ten_percent() {
        assert_eq!(purchase_fraction(dec!(1)), dec!(0.85));
        assert_eq!(purchase_fraction(dec!(3)), dec!(0.55));
        assert_eq!(purchase_fraction(dec!(20)), dec!(0.10));
    }

    #[test]
    fn unknown_bracket_gets_default_age_fraction() {
        assert_eq!(age_fraction("25-34"), dec!(0.25));
        assert_eq!(age_fraction("101+"), dec!(0.15));
    }

    #[test]
    fn hashed_fraction_is_stable_and_in_band() {
        let kind = RuleKind::PreferenceSegment;
        let a = hashed_fraction(&kind, "Night Owls");
        let b = hashed_fraction(&kind, "Night Owls");
        assert_eq!(a, b);
        assert!(a >= dec!(0.15) && a <= dec!(0.40), "out of band: {a}");

        let other = hashed_fraction(&kind, "Early Birds");
        assert!(other >= dec!(0.15) && other <= dec!(0.40));
    }
}
