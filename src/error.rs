use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, GatewayError>;
