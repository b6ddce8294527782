use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("github error: {0}")]
    GitHub(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{source_name} responded with status {status}")]
    Status { source_name: &'static str, status: u16 },

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
