//! Number and unit-string formatting
//!
//! Floating-point values in the output are never written with Rust's default
//! formatting. [`float_to_string`] renders them in a fixed canonical form:
//!
//! | Value | Form | Example |
//! |-------|------|---------|
//! | exactly zero | literal | `0.0` |
//! | `0.01 <= |x| < 10000` | positional, shortest round-trip | `298.15` |
//! | otherwise | scientific, shortest round-trip | `1.0e+13` |
//! | NaN / ±infinity | YAML specials | `.nan`, `.inf`, `-.inf` |
//!
//! CTML unit strings use a compact syntax (`cm3/mol/s`, `J-mol`); [`normalize_units`]
//! rewrites them with explicit `*` and `^` operators.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::ctml::{parse_float, CtmlError, Element};
use crate::yaml::{ToYaml, Yaml};

/// Render a float in the canonical output form
pub fn float_to_string(value: f64) -> String {
    if value.is_nan() {
        return ".nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { ".inf" } else { "-.inf" }.to_string();
    }
    if value == 0.0 {
        return "0.0".to_string();
    }

    let magnitude = value.abs();
    if (0.01..10000.0).contains(&magnitude) {
        positional(value)
    } else {
        scientific(value)
    }
}

fn positional(value: f64) -> String {
    let mut text = value.to_string();
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}

fn scientific(value: f64) -> String {
    let text = format!("{:e}", value);
    let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));

    let mut out = String::with_capacity(text.len() + 4);
    out.push_str(mantissa);
    if !mantissa.contains('.') {
        out.push_str(".0");
    }

    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    out.push('e');
    out.push(sign);
    if digits.len() < 2 {
        out.push('0');
    }
    out.push_str(digits);
    out
}

/// Rewrite compact CTML unit syntax with explicit operators.
///
/// Two left-to-right, non-overlapping passes:
/// 1. letter `-` letter becomes letter `*` letter (`J-mol` → `J*mol`)
/// 2. a letter followed by `-` or a digit gets a `^` inserted (`cm-3` → `cm^-3`)
pub fn normalize_units(units: &str) -> String {
    let Some([products, powers]) = unit_patterns() else {
        return units.to_string();
    };
    let joined = products.replace_all(units, "${1}*${2}");
    powers.replace_all(&joined, "${1}^${2}").into_owned()
}

static UNIT_PATTERNS: OnceLock<Option<[Regex; 2]>> = OnceLock::new();

fn unit_patterns() -> Option<&'static [Regex; 2]> {
    UNIT_PATTERNS
        .get_or_init(|| {
            Some([
                Regex::new(r"([A-Za-z])-([A-Za-z])").ok()?,
                Regex::new(r"([A-Za-z])([-\d])").ok()?,
            ])
        })
        .as_ref()
}

/// A numeric value as read from CTML: bare, or carrying a unit string
#[derive(Debug, Clone, PartialEq)]
pub enum Quantity {
    /// Plain number, emitted as a YAML float
    Value(f64),
    /// Number with normalized units, emitted as `"<number> <units>"`
    WithUnits {
        /// Numeric part
        value: f64,
        /// Units after [`normalize_units`]
        units: String,
    },
}

impl Quantity {
    /// Read a quantity from an element's text and optional `units` attribute
    pub fn from_node(node: &Element) -> Result<Self, CtmlError> {
        let value = parse_float(&node.text, &node.name)?;
        Ok(match node.attr("units") {
            Some(units) => Quantity::WithUnits {
                value,
                units: normalize_units(units),
            },
            None => Quantity::Value(value),
        })
    }

    /// Read the quantity held by a required child element
    pub fn from_child(parent: &Element, name: &str) -> Result<Self, CtmlError> {
        Self::from_node(parent.require(name)?)
    }

    /// Numeric part, regardless of units
    pub fn value(&self) -> f64 {
        match self {
            Quantity::Value(value) | Quantity::WithUnits { value, .. } => *value,
        }
    }

    /// Normalized units, if any
    pub fn units(&self) -> Option<&str> {
        match self {
            Quantity::Value(_) => None,
            Quantity::WithUnits { units, .. } => Some(units),
        }
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Quantity::Value(value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Value(value) => write!(f, "{}", float_to_string(*value)),
            Quantity::WithUnits { value, units } => {
                write!(f, "{} {}", float_to_string(*value), units)
            }
        }
    }
}

impl ToYaml for Quantity {
    fn to_yaml(&self) -> Yaml {
        match self {
            Quantity::Value(value) => value.to_yaml(),
            Quantity::WithUnits { .. } => Yaml::String(self.to_string()),
        }
    }
}
