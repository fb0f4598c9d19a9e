//! Segment filter rules.
//!
//! A segment is defined by a list of [`SegmentRule`]s, each one a single
//! filter condition over a customer field. Rules are evaluated in list
//! order by the estimator.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::DomainError;

/// Customer field a rule filters on.
///
/// The wire format uses snake_case strings; unknown strings are preserved
/// as [`RuleKind::Other`] rather than rejected, so segments written by a
/// newer backend still deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RuleKind {
    /// Number of purchases made.
    Purchase,
    /// Product category bought from.
    ProductCategory,
    /// Product material bought.
    Material,
    /// Age bracket label (e.g. "25-34").
    Age,
    /// Customer gender.
    Gender,
    /// RFM value segment label (e.g. "Champions").
    RfmSegment,
    /// Preference segment label.
    PreferenceSegment,
    /// Customer location.
    Location,
    /// Any field this client does not know about.
    Other(String),
}

impl RuleKind {
    /// Wire name of the field.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Purchase => "purchase",
            Self::ProductCategory => "product_category",
            Self::Material => "material",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::RfmSegment => "rfm_segment",
            Self::PreferenceSegment => "preference_segment",
            Self::Location => "location",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for RuleKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "purchase" => Self::Purchase,
            "product_category" => Self::ProductCategory,
            "material" => Self::Material,
            "age" => Self::Age,
            "gender" => Self::Gender,
            "rfm_segment" => Self::RfmSegment,
            "preference_segment" => Self::PreferenceSegment,
            "location" => Self::Location,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for RuleKind {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<RuleKind> for String {
    fn from(kind: RuleKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Comparison operator applied by a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleOperator {
    Is,
    IsNot,
    GreaterThan,
    LessThan,
    EqualTo,
    Contains,
    InRange,
}

impl RuleOperator {
    /// Parse an operator from a CLI/URL parameter string.
    #[must_use]
    pub fn from_str_param(s: &str) -> Option<Self> {
        match s {
            "is" => Some(Self::Is),
            "is_not" => Some(Self::IsNot),
            "greater_than" | "gt" => Some(Self::GreaterThan),
            "less_than" | "lt" => Some(Self::LessThan),
            "equal_to" | "eq" => Some(Self::EqualTo),
            "contains" => Some(Self::Contains),
            "in_range" => Some(Self::InRange),
            _ => None,
        }
    }

    /// Wire name of the operator.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Is => "is",
            Self::IsNot => "is_not",
            Self::GreaterThan => "greater_than",
            Self::LessThan => "less_than",
            Self::EqualTo => "equal_to",
            Self::Contains => "contains",
            Self::InRange => "in_range",
        }
    }
}

impl fmt::Display for RuleOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rule comparison value: a label or a number, depending on the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    /// Numeric value (purchase counts, thresholds).
    Number(Decimal),
    /// Textual label (segment names, brackets, categories).
    Text(String),
}

impl RuleValue {
    /// Numeric view of the value; text that parses as a number counts.
    #[must_use]
    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Label used for distribution lookups.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

impl From<&str> for RuleValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RuleValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Decimal> for RuleValue {
    fn from(n: Decimal) -> Self {
        Self::Number(n)
    }
}

impl From<u64> for RuleValue {
    fn from(n: u64) -> Self {
        Self::Number(Decimal::from(n))
    }
}

/// One filter condition of a segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentRule {
    /// Opaque unique rule identifier.
    pub id: String,
    /// Field being filtered.
    #[serde(rename = "type")]
    pub kind: RuleKind,
    /// Comparison operator.
    pub operator: RuleOperator,
    /// Comparison value.
    pub value: RuleValue,
    /// Lower bound for range rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<Decimal>,
    /// Upper bound for range rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<Decimal>,
}

impl SegmentRule {
    /// Create a rule with a generated ID and no range bounds.
    pub fn new(kind: RuleKind, operator: RuleOperator, value: impl Into<RuleValue>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            operator,
            value: value.into(),
            min_value: None,
            max_value: None,
        }
    }

    /// Attach range bounds to the rule.
    #[must_use]
    pub fn with_bounds(mut self, min: Decimal, max: Decimal) -> Self {
        self.min_value = Some(min);
        self.max_value = Some(max);
        self
    }

    /// Check that the operator and value make sense for the field.
    ///
    /// Used on interactive create paths. The estimator itself accepts any
    /// rule and falls back to a default retention for combinations it does
    /// not recognize.
    pub fn validate(&self) -> Result<(), DomainError> {
        use RuleOperator::{Contains, EqualTo, GreaterThan, InRange, Is, IsNot, LessThan};

        let supported = match self.kind {
            RuleKind::Purchase => matches!(
                self.operator,
                GreaterThan | LessThan | EqualTo | InRange
            ),
            RuleKind::ProductCategory
            | RuleKind::Material
            | RuleKind::PreferenceSegment
            | RuleKind::RfmSegment
            | RuleKind::Location => matches!(self.operator, Is | IsNot | Contains),
            RuleKind::Age => matches!(self.operator, Is),
            RuleKind::Gender => matches!(self.operator, Is | IsNot),
            RuleKind::Other(_) => true,
        };
        if !supported {
            return Err(DomainError::OperatorNotSupported {
                field: self.kind.to_string(),
                operator: self.operator.to_string(),
            });
        }

        if self.operator == InRange && (self.min_value.is_none() || self.max_value.is_none()) {
            return Err(DomainError::MissingRangeBounds {
                field: self.kind.to_string(),
            });
        }

        if self.kind == RuleKind::Purchase
            && self.operator != InRange
            && self.value.as_number().is_none()
        {
            return Err(DomainError::NonNumericValue {
                field: self.kind.to_string(),
                value: self.value.label(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn unknown_kind_is_preserved() {
        let kind = RuleKind::from("loyalty_tier");
        assert_eq!(kind, RuleKind::Other("loyalty_tier".to_string()));
        assert_eq!(kind.as_str(), "loyalty_tier");
    }

    #[test]
    fn rule_serializes_with_wire_names() {
        let rule = SegmentRule {
            id: "r1".to_string(),
            kind: RuleKind::RfmSegment,
            operator: RuleOperator::IsNot,
            value: RuleValue::from("Champions"),
            min_value: None,
            max_value: None,
        };

        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["type"], "rfm_segment");
        assert_eq!(json["operator"], "is_not");
        assert_eq!(json["value"], "Champions");
        assert!(json.get("minValue").is_none());
    }

    #[test]
    fn numeric_value_round_trips() {
        let rule = SegmentRule::new(RuleKind::Purchase, RuleOperator::GreaterThan, 3u64);
        let json = serde_json::to_string(&rule).unwrap();
        let back: SegmentRule = serde_json::from_str(&json).unwrap();
        assert_eq!(back.value.as_number(), Some(dec!(3)));
    }

    #[test]
    fn validate_rejects_operator_mismatch() {
        let rule = SegmentRule::new(RuleKind::Age, RuleOperator::GreaterThan, "25-34");
        assert!(matches!(
            rule.validate(),
            Err(DomainError::OperatorNotSupported { .. })
        ));
    }

    #[test]
    fn validate_requires_range_bounds() {
        let rule = SegmentRule::new(RuleKind::Purchase, RuleOperator::InRange, 0u64);
        assert!(matches!(
            rule.validate(),
            Err(DomainError::MissingRangeBounds { .. })
        ));

        let bounded = SegmentRule::new(RuleKind::Purchase, RuleOperator::InRange, 0u64)
            .with_bounds(dec!(1), dec!(5));
        assert!(bounded.validate().is_ok());
    }

    #[test]
    fn validate_requires_numeric_purchase_value() {
        let rule = SegmentRule::new(RuleKind::Purchase, RuleOperator::GreaterThan, "lots");
        assert!(matches!(
            rule.validate(),
            Err(DomainError::NonNumericValue { .. })
        ));
    }
}
