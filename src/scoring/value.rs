use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// A raw answer as captured by the survey.
///
/// Loading never rejects an answer: values the engine cannot use (lists,
/// objects, null) become `Unsupported` and score 0, leaving the rest of the
/// submission intact. Booleans are kept as their text form (`"true"`).
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseValue {
    Number(i64),
    Decimal(f64),
    Text(String),
    Unsupported,
}

/// One submission's answers, keyed by question id.
pub type Responses = BTreeMap<String, ResponseValue>;

impl ResponseValue {
    /// The value if it was captured as a whole number (`4` or `4.0`).
    /// Numeric-looking text is not a number here.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            ResponseValue::Number(n) => Some(*n),
            ResponseValue::Decimal(f) => integral(*f),
            ResponseValue::Text(_) | ResponseValue::Unsupported => None,
        }
    }

    /// Lenient integer coercion: whole numbers as-is, text by its leading
    /// integer (`" 4"` -> 4, `"3 stars"` -> 3, `"-2"` -> -2, `"abc"` -> None).
    pub fn to_integer(&self) -> Option<i64> {
        match self {
            ResponseValue::Text(s) => leading_integer(s),
            _ => self.as_number(),
        }
    }
}

/// `f` as an i64 when it has no fractional part and fits.
fn integral(f: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let magnitude: i64 = rest[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

impl fmt::Display for ResponseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseValue::Number(n) => write!(f, "{}", n),
            ResponseValue::Decimal(d) => write!(f, "{}", d),
            ResponseValue::Text(s) => f.write_str(s),
            ResponseValue::Unsupported => Ok(()),
        }
    }
}

impl Serialize for ResponseValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ResponseValue::Number(n) => serializer.serialize_i64(*n),
            ResponseValue::Decimal(d) => serializer.serialize_f64(*d),
            ResponseValue::Text(s) => serializer.serialize_str(s),
            ResponseValue::Unsupported => serializer.serialize_unit(),
        }
    }
}

impl<'de> Deserialize<'de> for ResponseValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ResponseVisitor;

        impl<'de> Visitor<'de> for ResponseVisitor {
            type Value = ResponseValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a survey answer")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<ResponseValue, E> {
                Ok(ResponseValue::Text(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<ResponseValue, E> {
                Ok(ResponseValue::Number(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<ResponseValue, E> {
                Ok(match i64::try_from(v) {
                    Ok(n) => ResponseValue::Number(n),
                    Err(_) => ResponseValue::Decimal(v as f64),
                })
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<ResponseValue, E> {
                Ok(ResponseValue::Decimal(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ResponseValue, E> {
                Ok(ResponseValue::Text(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<ResponseValue, E> {
                Ok(ResponseValue::Text(v))
            }

            fn visit_unit<E: de::Error>(self) -> Result<ResponseValue, E> {
                Ok(ResponseValue::Unsupported)
            }

            fn visit_none<E: de::Error>(self) -> Result<ResponseValue, E> {
                Ok(ResponseValue::Unsupported)
            }

            fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<ResponseValue, D::Error> {
                ResponseValue::deserialize(d)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<ResponseValue, A::Error> {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(ResponseValue::Unsupported)
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ResponseValue, A::Error> {
                while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
                Ok(ResponseValue::Unsupported)
            }
        }

        deserializer.deserialize_any(ResponseVisitor)
    }
}

impl From<i64> for ResponseValue {
    fn from(n: i64) -> Self {
        ResponseValue::Number(n)
    }
}

impl From<f64> for ResponseValue {
    fn from(f: f64) -> Self {
        ResponseValue::Decimal(f)
    }
}

impl From<&str> for ResponseValue {
    fn from(s: &str) -> Self {
        ResponseValue::Text(s.to_string())
    }
}

impl From<String> for ResponseValue {
    fn from(s: String) -> Self {
        ResponseValue::Text(s)
    }
}
