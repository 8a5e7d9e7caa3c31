use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server responded with status {status}")]
    UnexpectedStatus { status: u16 },
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
