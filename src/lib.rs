//! WS-Security header construction for outgoing SOAP requests.
//!
//! Builds the `wsse:Security` envelope header carrying authentication
//! tokens (UsernameToken, Timestamp) as an XML element tree, for embedding
//! into SOAP envelopes by a surrounding SOAP client. This crate only
//! constructs outbound headers; it does not validate inbound security
//! headers, sign, or encrypt.
//!
//! # Example
//!
//! ```
//! use soap_wsse::{Security, UsernameToken};
//! use chrono::{TimeZone, Utc};
//!
//! let mut token = UsernameToken::new("alice", "secret");
//! token.set_created(Some(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()));
//! token.set_nonce(Some("abc123"));
//!
//! let mut security = Security::new();
//! security.add_token(token);
//!
//! let header = security.xml();
//! assert_eq!(header.attr("mustUnderstand"), Some("true"));
//! let xml = header.to_xml_string().unwrap();
//! assert!(xml.contains("<wsse:UsernameToken"));
//! ```

pub mod config;
pub mod element;
pub mod error;
pub mod profile;
pub mod security;
pub mod time;
pub mod token;

pub use config::SecurityOptions;
pub use element::{Element, Namespace};
pub use error::WsseError;
pub use security::Security;
pub use time::{Clock, FixedClock, SystemClock};
pub use token::{NonceMode, Timestamp, Token, UsernameToken};
