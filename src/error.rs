/// Error types for presentation generation.
use crate::opc::OpcError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("XML generation error: {0}")]
    Xml(String),

    #[error("Package error: {0}")]
    Opc(#[from] OpcError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
