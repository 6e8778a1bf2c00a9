use thiserror::Error;

#[derive(Error, Debug)]
pub enum DasError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("indexer returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("indexer rpc error in `{method}` (code {code}): {message}")]
    Rpc {
        method: &'static str,
        code: i64,
        message: String,
    },

    #[error("missing result in `{method}` response")]
    MissingResult { method: &'static str },

    #[error("malformed `{method}` response: {source}")]
    Deserialize {
        method: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("received invalid response data from indexer")]
    InvalidResponseData,

    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("enumeration failed on page {page}: {source}")]
    Pagination {
        page: u32,
        #[source]
        source: Box<DasError>,
    },
}

impl DasError {
    /// Transport failures and server-side errors are worth retrying; decode
    /// and parameter errors never are.
    pub fn is_retryable(&self) -> bool {
        match self {
            DasError::Transport(_) => true,
            DasError::Http { status, .. } => *status >= 500,
            // -32603 is the JSON-RPC internal error; -32000..=-32099 is the
            // reserved server-error range indexers use for transient
            // conditions such as "node is behind".
            DasError::Rpc { code, .. } => {
                *code == -32603 || (-32099..=-32000).contains(code)
            }
            _ => false,
        }
    }
}
