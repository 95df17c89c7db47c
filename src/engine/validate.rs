use crate::domain::report::CheckReport;
use crate::domain::schema::Schema;
use crate::engine::env::EnvMap;

/// Checks parsed variable assignments against schema rules.
///
/// Rules are evaluated in schema document order and every violation is
/// collected before returning; nothing short-circuits. Variables present in
/// the env map but absent from the schema are never reported, the schema is
/// a whitelist of checks rather than a closed key set.
pub fn validate(env: &EnvMap, schema: &Schema) -> CheckReport {
    let mut errors = Vec::new();

    for (name, rule) in schema.iter() {
        match env.get(name) {
            None => {
                if rule.required {
                    errors.push(format!("Missing required variable: {name}"));
                }
            }
            Some(value) => {
                if !rule.kind.accepts(value) {
                    errors.push(format!(
                        "{name}: expected {}, got '{value}'",
                        rule.kind.as_str()
                    ));
                }
            }
        }
    }

    CheckReport::from_errors(errors)
}
