use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BloomError {
    #[error("container not found for selector {selector:?}")]
    TargetNotFound { selector: String },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// A host tree call was rejected. Carries the host's error text.
    #[error("host tree error: {0}")]
    Host(String),
}

impl BloomError {
    pub fn invalid(message: impl Into<String>) -> Self {
        BloomError::InvalidConfiguration(message.into())
    }
}

impl From<BloomError> for wasm_bindgen::JsValue {
    fn from(err: BloomError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
