use serde_json::Value;

use crate::domain::schema::{Schema, SchemaRule};
use crate::io::SchemaError;

/// Decodes a YAML schema document into an ordered rule set.
///
/// The document must be a mapping from variable name to rule mapping. An
/// empty document decodes to an empty schema. Rules written as anything
/// other than a mapping (a bare `NAME:` line yields null) fall back to the
/// default rule instead of failing the decode.
pub fn load_schema(text: &str) -> Result<Schema, SchemaError> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(text)?;
    if yaml.is_null() {
        return Ok(Schema::default());
    }

    // serde_json's preserve_order map keeps the document's entry order.
    let document = serde_json::to_value(yaml)?;
    let Value::Object(entries) = document else {
        return Err(SchemaError::NotAMapping);
    };

    let mut decoded = Vec::with_capacity(entries.len());
    for (name, rule_value) in entries {
        let rule = decode_rule(&name, rule_value)?;
        decoded.push((name, rule));
    }
    Ok(Schema::from_entries(decoded))
}

fn decode_rule(name: &str, value: Value) -> Result<SchemaRule, SchemaError> {
    if !value.is_object() {
        return Ok(SchemaRule::default());
    }
    serde_json::from_value(value).map_err(|source| SchemaError::InvalidRule {
        name: name.to_string(),
        source,
    })
}
