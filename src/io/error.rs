use thiserror::Error;

/// Errors produced while decoding a schema document.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("yaml parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("schema conversion error: {0}")]
    Convert(#[from] serde_json::Error),

    #[error("schema document must be a mapping of variable names to rules")]
    NotAMapping,

    #[error("invalid rule for `{name}`: {source}")]
    InvalidRule {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}
