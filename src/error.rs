//! Error types for WS-Security header construction.

use thiserror::Error;

/// Errors raised while building or serializing security headers.
///
/// Header construction itself is total over well-formed inputs; only XML
/// serialization can fail.
#[derive(Error, Debug)]
pub enum WsseError {
    #[error("XML write error: {0}")]
    XmlWrite(String),
}
