// ── Shared building blocks ──

use std::fmt;

use serde::{Serialize, Serializer};

/// Literal emitted for values the device does not report.
pub const NOT_AVAILABLE: &str = "N/A";

/// A value that is either known or reported as the literal `"N/A"`.
///
/// Serializes transparently as the inner value, or as the string `"N/A"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaybeNa<T> {
    Known(T),
    #[default]
    NotAvailable,
}

impl<T> MaybeNa<T> {
    pub fn known(&self) -> Option<&T> {
        match self {
            Self::Known(v) => Some(v),
            Self::NotAvailable => None,
        }
    }
}

impl<T> From<Option<T>> for MaybeNa<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NotAvailable, Self::Known)
    }
}

impl<T: Serialize> Serialize for MaybeNa<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Known(v) => v.serialize(serializer),
            Self::NotAvailable => serializer.serialize_str(NOT_AVAILABLE),
        }
    }
}

impl<T: fmt::Display> fmt::Display for MaybeNa<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(v) => v.fmt(f),
            Self::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_inner_value_or_literal() {
        assert_eq!(serde_json::to_value(MaybeNa::Known(1500_u64)).unwrap(), json!(1500));
        assert_eq!(
            serde_json::to_value(MaybeNa::<u64>::NotAvailable).unwrap(),
            json!("N/A")
        );
    }

    #[test]
    fn from_option() {
        assert_eq!(MaybeNa::from(Some("x")), MaybeNa::Known("x"));
        assert_eq!(MaybeNa::<&str>::from(None), MaybeNa::NotAvailable);
        assert_eq!(MaybeNa::<u32>::NotAvailable.to_string(), "N/A");
        assert_eq!(MaybeNa::Known(7).known(), Some(&7));
    }
}
