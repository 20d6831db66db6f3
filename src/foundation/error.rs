pub type PhasorResult<T> = Result<T, PhasorError>;

#[derive(thiserror::Error, Debug)]
pub enum PhasorError {
    #[error("state key not found: {0}")]
    KeyNotFound(String),

    #[error("invalid frequency {0}: period length needs a finite, positive frequency")]
    InvalidFrequency(f64),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PhasorError {
    pub fn key_not_found(key: impl std::fmt::Debug) -> Self {
        Self::KeyNotFound(format!("{key:?}"))
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
