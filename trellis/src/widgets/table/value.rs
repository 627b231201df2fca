//! Cell values extracted by column accessors.

use std::cmp::Ordering;
use std::fmt;

/// A dynamic value extracted from a row by a column accessor.
///
/// | Rust type | Variant |
/// |-----------|---------|
/// | `None` | `Absent` |
/// | `bool` | `Bool` |
/// | integers that fit in `i64` | `Int` |
/// | `u64` / `usize` above `i64::MAX` | `UInt` |
/// | `f32`, `f64` | `Float` |
/// | `&str`, `String` | `Text` |
///
/// `UInt` only holds values above `i64::MAX`, so every integer has exactly
/// one representation.
///
/// Dates stored as `YYYY-MM-DD` text order chronologically because that
/// format orders the same way lexicographically.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// No value (missing field, `None`).
    #[default]
    Absent,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Unsigned integer above `i64::MAX`.
    UInt(u64),
    /// Floating point value.
    Float(f64),
    /// Text value.
    Text(String),
}

impl CellValue {
    /// Returns `true` if this is an absent value.
    pub fn is_absent(&self) -> bool {
        matches!(self, CellValue::Absent)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Absent => "absent",
            CellValue::Bool(_) => "bool",
            CellValue::Int(_) => "int",
            CellValue::UInt(_) => "uint",
            CellValue::Float(_) => "float",
            CellValue::Text(_) => "text",
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            CellValue::Bool(_) => 0,
            CellValue::Int(_) | CellValue::UInt(_) | CellValue::Float(_) => 1,
            CellValue::Text(_) => 2,
            CellValue::Absent => 3,
        }
    }

    fn number(&self) -> Option<Number> {
        match self {
            CellValue::Int(v) => Some(Number::Int(i128::from(*v))),
            CellValue::UInt(v) => Some(Number::Int(i128::from(*v))),
            CellValue::Float(v) => Some(Number::Float(*v)),
            _ => None,
        }
    }

    /// Natural ordering of two values.
    ///
    /// Numbers compare by exact numeric value across `Int`, `UInt` and
    /// `Float`, with NaN after every other number. Values of different
    /// kinds order `Bool < number < Text < Absent`.
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        if let (Some(a), Some(b)) = (self.number(), other.number()) {
            return a.cmp(b);
        }
        match (self, other) {
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}

/// A numeric cell widened so integers and floats compare exactly.
#[derive(Clone, Copy)]
enum Number {
    Int(i128),
    Float(f64),
}

impl Number {
    fn cmp(self, other: Self) -> Ordering {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a.cmp(&b),
            (Number::Float(a), Number::Float(b)) => cmp_f64(a, b),
            (Number::Int(a), Number::Float(b)) => cmp_int_f64(a, b),
            (Number::Float(a), Number::Int(b)) => cmp_int_f64(b, a).reverse(),
        }
    }
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

/// 2^127, the first float outside the `i128` range.
const I128_LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// Compare an integer with a float without rounding either.
fn cmp_int_f64(int: i128, float: f64) -> Ordering {
    if float.is_nan() {
        return Ordering::Less;
    }
    if float >= I128_LIMIT {
        return Ordering::Less;
    }
    if float < -I128_LIMIT {
        return Ordering::Greater;
    }
    // In range, the integral part converts to i128 exactly.
    let whole = float.trunc();
    match int.cmp(&(whole as i128)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(float - whole)).unwrap_or(Ordering::Equal),
        ordering => ordering,
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Absent => Ok(()),
            CellValue::Bool(v) => write!(f, "{}", v),
            CellValue::Int(v) => write!(f, "{}", v),
            CellValue::UInt(v) => write!(f, "{}", v),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Text(v) => f.write_str(v),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for CellValue {
                fn from(v: $ty) -> Self {
                    CellValue::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for CellValue {
    fn from(v: u64) -> Self {
        i64::try_from(v)
            .map(CellValue::Int)
            .unwrap_or(CellValue::UInt(v))
    }
}

impl From<usize> for CellValue {
    fn from(v: usize) -> Self {
        // usize is at most 64 bits on supported targets.
        u64::try_from(v)
            .map(CellValue::from)
            .unwrap_or(CellValue::Float(v as f64))
    }
}

impl From<f32> for CellValue {
    fn from(v: f32) -> Self {
        CellValue::Float(f64::from(v))
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl From<&String> for CellValue {
    fn from(v: &String) -> Self {
        CellValue::Text(v.clone())
    }
}

impl<V: Into<CellValue>> From<Option<V>> for CellValue {
    fn from(v: Option<V>) -> Self {
        v.map(Into::into).unwrap_or(CellValue::Absent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_compare_across_kinds() {
        assert_eq!(
            CellValue::Int(2).natural_cmp(&CellValue::Float(2.5)),
            Ordering::Less
        );
        assert_eq!(
            CellValue::Float(3.0).natural_cmp(&CellValue::Int(3)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_nan_after_numbers() {
        assert_eq!(
            CellValue::Float(f64::NAN).natural_cmp(&CellValue::Int(i64::MAX)),
            Ordering::Greater
        );
        assert_eq!(
            CellValue::Float(f64::NAN).natural_cmp(&CellValue::Float(f64::NAN)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_integers_and_floats_compare_exactly() {
        let two_63 = CellValue::Float(9_223_372_036_854_775_808.0);
        assert_eq!(
            CellValue::Int(i64::MAX - 1).natural_cmp(&two_63),
            Ordering::Less
        );
        assert_eq!(CellValue::Int(i64::MAX).natural_cmp(&two_63), Ordering::Less);
        assert_eq!(
            CellValue::UInt(1 << 63).natural_cmp(&two_63),
            Ordering::Equal
        );

        let big = (1i64 << 53) + 1;
        assert_eq!(
            CellValue::Int(big).natural_cmp(&CellValue::Float(big as f64)),
            Ordering::Greater
        );
        assert_eq!(
            CellValue::Float(-3.5).natural_cmp(&CellValue::Int(-3)),
            Ordering::Less
        );
        assert_eq!(
            CellValue::Int(0).natural_cmp(&CellValue::Float(f64::INFINITY)),
            Ordering::Less
        );
        assert_eq!(
            CellValue::Int(i64::MIN).natural_cmp(&CellValue::Float(f64::NEG_INFINITY)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_u64_above_i64_max_stays_integral() {
        assert_eq!(CellValue::from(5u64), CellValue::Int(5));
        assert_eq!(CellValue::from(u64::MAX), CellValue::UInt(u64::MAX));
        assert_eq!(
            CellValue::from(i64::MAX as u64).natural_cmp(&CellValue::from(i64::MAX as u64 + 1)),
            Ordering::Less
        );
        assert_eq!(CellValue::from(u64::MAX).to_string(), "18446744073709551615");
    }

    #[test]
    fn test_mixed_kinds_order_by_kind() {
        assert_eq!(
            CellValue::Bool(true).natural_cmp(&CellValue::Int(0)),
            Ordering::Less
        );
        assert_eq!(
            CellValue::Text("0".into()).natural_cmp(&CellValue::Int(9)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_iso_dates_order_as_text() {
        let earlier = CellValue::from("2023-01-05");
        let later = CellValue::from("2023-01-15");
        assert_eq!(earlier.natural_cmp(&later), Ordering::Less);
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Absent.to_string(), "");
        assert_eq!(CellValue::from(99.99).to_string(), "99.99");
        assert_eq!(CellValue::from(Some(7u32)).to_string(), "7");
        assert_eq!(CellValue::from(None::<String>), CellValue::Absent);
    }
}
