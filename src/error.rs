use thiserror::Error;

/// Failure of a single backend call.
///
/// `Display` is the text shown to the user, so every variant renders as one
/// readable sentence.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Network(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Unexpected response from server: {0}")]
    Decode(String),
    #[error("Could not encode request: {0}")]
    Encode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BrowserError {
    #[error("Browser window is not available")]
    NoWindow,
    #[error("Browser document is not available")]
    NoDocument,
    #[error("Could not prepare download: {0}")]
    Download(String),
    #[error("Could not open {0}")]
    Popup(String),
}

impl BrowserError {
    pub(crate) fn download(err: wasm_bindgen::JsValue) -> Self {
        BrowserError::Download(format!("{:?}", err))
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Could not write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("Export is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

pub type ApiResult<T> = Result<T, ApiError>;
