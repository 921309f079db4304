use thiserror::Error;

/// Failure of a single API call.
///
/// The UI does not branch on the variant: every error is logged and, for
/// user-initiated actions, shown verbatim in an alert via `Display`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] gloo_net::Error),

    #[error("Request failed with status code {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Could not build request: {0}")]
    Encode(String),
}

impl ApiError {
    pub(crate) fn from_js(value: wasm_bindgen::JsValue) -> Self {
        ApiError::Encode(format!("{:?}", value))
    }
}
