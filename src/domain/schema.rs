use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// Ordered rule set decoded from a schema document.
///
/// Entries keep the document's insertion order so validation errors are
/// reported in the order the schema declares its variables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    entries: Vec<(String, SchemaRule)>,
}

impl Schema {
    pub fn from_entries(entries: Vec<(String, SchemaRule)>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaRule)> {
        self.entries
            .iter()
            .map(|(name, rule)| (name.as_str(), rule))
    }
}

/// Validation rules for a single variable.
///
/// Unknown fields in the source document are ignored; missing fields take
/// their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SchemaRule {
    pub required: bool,
    #[serde(rename = "type")]
    pub kind: TypeKind,
}

/// Expected primitive type for a variable value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum TypeKind {
    #[default]
    String,
    Int,
    Bool,
    /// Unrecognized type names impose no constraint.
    Other(String),
}

impl TypeKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Bool => "bool",
            Self::Other(name) => name,
        }
    }

    /// Returns true when `value` satisfies this type.
    ///
    /// Integers are parsed at arbitrary precision, so magnitude never
    /// rejects a value; only non-digit characters do.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Self::String | Self::Other(_) => true,
            Self::Int => value.parse::<BigInt>().is_ok(),
            Self::Bool => matches!(
                value.to_ascii_lowercase().as_str(),
                "true" | "false" | "1" | "0" | "yes" | "no"
            ),
        }
    }
}

impl From<String> for TypeKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "string" => Self::String,
            "int" => Self::Int,
            "bool" => Self::Bool,
            _ => Self::Other(value),
        }
    }
}

impl From<TypeKind> for String {
    fn from(value: TypeKind) -> Self {
        value.as_str().to_string()
    }
}
