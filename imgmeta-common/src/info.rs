use crate::datetime::DateTime;

/// One key/value pair of decoder-attached metadata
///
/// Keys are unique within one image. The order of entries follows the order
/// in which the underlying structures appear in the file.
pub type Entry = (String, Value);

/// Metadata value attached to a decoded image
///
/// The [`Display`](std::fmt::Display) implementation is the value's default
/// string representation as printed by the tools.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Value {
    Text(String),
    UInt(u64),
    Float(f64),
    UIntPair(u64, u64),
    FloatPair(f64, f64),
    DateTime(DateTime),
    /// Binary payload, represented by its length
    Bytes(usize),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::UInt(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::UIntPair(a, b) => write!(f, "({a}, {b})"),
            Self::FloatPair(a, b) => write!(f, "({a}, {b})"),
            Self::DateTime(datetime) => write!(f, "{datetime}"),
            Self::Bytes(len) => write!(f, "<{len} bytes>"),
        }
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<u8> for Value {
    fn from(n: u8) -> Self {
        Self::UInt(n.into())
    }
}

impl From<u16> for Value {
    fn from(n: u16) -> Self {
        Self::UInt(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::UInt(n.into())
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<DateTime> for Value {
    fn from(datetime: DateTime) -> Self {
        Self::DateTime(datetime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Value::from("sRGB IEC61966-2.1").to_string(), "sRGB IEC61966-2.1");
        assert_eq!(Value::from(300_u32).to_string(), "300");
        assert_eq!(Value::Float(0.45455).to_string(), "0.45455");
        assert_eq!(Value::UIntPair(1, 1).to_string(), "(1, 1)");
        assert_eq!(Value::Bytes(128).to_string(), "<128 bytes>");
    }
}
