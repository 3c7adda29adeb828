//! Configuration types for WS-Security header construction.

use crate::token::NonceMode;
use serde::{Deserialize, Serialize};

/// Options controlling how a Security header is built.
///
/// Intended to be embedded in the SOAP client's own configuration file;
/// every field has a default matching the constructor behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityOptions {
    /// Render an inline Timestamp directly under Security
    pub use_timestamp: bool,

    /// Inline timestamp lifetime in seconds
    pub validity_secs: i64,

    /// Value of the SOAP mustUnderstand attribute
    pub must_understand: bool,

    /// Nonce generation mode for username tokens
    pub nonce_mode: NonceMode,
}

impl Default for SecurityOptions {
    fn default() -> Self {
        Self {
            use_timestamp: false,
            validity_secs: 90,
            must_understand: true,
            nonce_mode: NonceMode::Random,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = SecurityOptions::default();
        assert!(!options.use_timestamp);
        assert_eq!(options.validity_secs, 90);
        assert!(options.must_understand);
        assert_eq!(options.nonce_mode, NonceMode::Random);
    }

    #[test]
    fn test_options_serialization_round_trip() {
        let options = SecurityOptions::default();
        let yaml = serde_yaml::to_string(&options).unwrap();
        let parsed: SecurityOptions = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.validity_secs, options.validity_secs);
        assert_eq!(parsed.nonce_mode, options.nonce_mode);
    }

    #[test]
    fn test_options_from_yaml() {
        let yaml = r#"
use_timestamp: true
validity_secs: 300
nonce_mode: legacy_deterministic
"#;
        let options: SecurityOptions = serde_yaml::from_str(yaml).unwrap();
        assert!(options.use_timestamp);
        assert_eq!(options.validity_secs, 300);
        assert!(options.must_understand);
        assert_eq!(options.nonce_mode, NonceMode::LegacyDeterministic);
    }
}
