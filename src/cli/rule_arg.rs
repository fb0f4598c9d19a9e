//! Parsing of `--rule` command-line arguments.
//!
//! Format: `field:operator:value[:min:max]`, e.g.
//! `rfm_segment:is:Champions` or `purchase:in_range:0:1:5`.

use rust_decimal::Decimal;

use crate::domain::{RuleKind, RuleOperator, RuleValue, SegmentRule};

/// Parse a `--rule` argument into a [`SegmentRule`].
pub fn parse(arg: &str) -> Result<SegmentRule, String> {
    let parts: Vec<&str> = arg.split(':').collect();
    if parts.len() < 3 {
        return Err(format!(
            "expected field:operator:value[:min:max], got '{arg}'"
        ));
    }

    let kind = RuleKind::from(parts[0]);
    let operator = RuleOperator::from_str_param(parts[1])
        .ok_or_else(|| format!("unknown operator '{}'", parts[1]))?;
    let value = parse_value(parts[2]);

    let mut rule = SegmentRule::new(kind, operator, value);
    match parts.len() {
        3 => {}
        5 => {
            let min = parse_bound(parts[3])?;
            let max = parse_bound(parts[4])?;
            rule = rule.with_bounds(min, max);
        }
        _ => {
            return Err(format!(
                "expected either 3 or 5 ':'-separated parts, got {}",
                parts.len()
            ));
        }
    }

    rule.validate().map_err(|e| e.to_string())?;
    Ok(rule)
}

fn parse_value(raw: &str) -> RuleValue {
    match raw.parse::<Decimal>() {
        Ok(number) => RuleValue::Number(number),
        Err(_) => RuleValue::Text(raw.to_string()),
    }
}

fn parse_bound(raw: &str) -> Result<Decimal, String> {
    raw.parse()
        .map_err(|_| format!("range bound '{raw}' is not a number"))
}
