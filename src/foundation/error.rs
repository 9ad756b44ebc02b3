pub type AvatarResult<T> = Result<T, AvatarError>;

#[derive(thiserror::Error, Debug)]
pub enum AvatarError {
    /// A categorical pick was attempted over an empty option list (configuration bug).
    #[error("empty domain: {0}")]
    EmptyDomain(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("storage error: {0}")]
    Storage(String),

    /// One entry of a batch failed; the other entries are unaffected.
    #[error("batch item '{key}' failed: {source}")]
    BatchItem {
        key: String,
        #[source]
        source: Box<AvatarError>,
    },

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AvatarError {
    pub fn empty_domain(msg: impl Into<String>) -> Self {
        Self::EmptyDomain(msg.into())
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    pub fn batch_item(key: impl Into<String>, source: AvatarError) -> Self {
        Self::BatchItem {
            key: key.into(),
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
