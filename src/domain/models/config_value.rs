use serde::{Deserialize, Serialize};
use std::fmt;

/// A single configuration value.
///
/// `Null` is a real value: a key holding `Null` is considered set, so later
/// set-if-absent assignments leave it alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Explicitly unset
    Null,
    /// Boolean flag such as `MAIL_USE_TLS`
    Bool(bool),
    /// Integer value such as a port number
    Integer(i64),
    /// Free-form string
    String(String),
}

impl ConfigValue {
    /// Returns true for [`ConfigValue::Null`].
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrow the inner string, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer value, if this is an integer.
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a boolean.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u16> for ConfigValue {
    fn from(value: u16) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for ConfigValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_conversion() {
        assert_eq!(ConfigValue::from(None::<&str>), ConfigValue::Null);
        assert_eq!(
            ConfigValue::from(Some("abc")),
            ConfigValue::String("abc".to_string())
        );
        assert_eq!(ConfigValue::from(Some(6379u16)), ConfigValue::Integer(6379));
    }

    #[test]
    fn test_serializes_as_plain_scalars() {
        let values = vec![
            ConfigValue::Null,
            ConfigValue::Bool(true),
            ConfigValue::Integer(27017),
            ConfigValue::from("mongo"),
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[null,true,27017,"mongo"]"#);
    }

    #[test]
    fn test_deserializes_yaml_scalars() {
        let yaml = "a: ~\nb: false\nc: 5432\nd: text\n";
        let parsed: std::collections::BTreeMap<String, ConfigValue> =
            serde_yaml::from_str(yaml).unwrap();

        assert!(parsed["a"].is_null());
        assert_eq!(parsed["b"].as_bool(), Some(false));
        assert_eq!(parsed["c"].as_integer(), Some(5432));
        assert_eq!(parsed["d"].as_str(), Some("text"));
    }

    #[test]
    fn test_display() {
        assert_eq!(ConfigValue::Null.to_string(), "null");
        assert_eq!(ConfigValue::Bool(true).to_string(), "true");
        assert_eq!(ConfigValue::Integer(6379).to_string(), "6379");
        assert_eq!(ConfigValue::from("host").to_string(), "host");
    }
}
