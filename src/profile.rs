//! WS-Security namespace and profile constants.

use crate::element::Namespace;

/// WS-Security extension namespace (security tokens live here).
pub const WSSE_NS: Namespace = Namespace {
    prefix: "wsse",
    uri: "http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-wssecurity-secext-1.0.xsd",
};

/// WS-Utility namespace (timestamps live here).
pub const WSU_NS: Namespace = Namespace {
    prefix: "wsu",
    uri: "http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-wssecurity-utility-1.0.xsd",
};

/// XML-Signature namespace. Reserved for signature support.
pub const DS_NS: Namespace = Namespace {
    prefix: "ds",
    uri: "http://www.w3.org/2000/09/xmldsig#",
};

/// XML-Encryption namespace. Reserved for encryption support.
pub const WSENC_NS: Namespace = Namespace {
    prefix: "wsenc",
    uri: "http://www.w3.org/2001/04/xmlenc#",
};

/// `EncodingType` attribute value for base64-encoded nonces.
pub const NONCE_BASE64_ENCODING: &str =
    "http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-soap-message-security-1.0#Base64Binary";

/// Base URI of the UsernameToken profile.
pub const USERNAME_TOKEN_PROFILE: &str =
    "http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-username-token-profile-1.0";

/// Password `Type` attribute value for digested passwords.
pub const PASSWORD_DIGEST_TYPE: &str =
    "http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-username-token-profile-1.0#PasswordDigest";

/// Password `Type` attribute value for plain-text passwords.
pub const PASSWORD_TEXT_TYPE: &str =
    "http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-username-token-profile-1.0#PasswordText";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_types_derive_from_profile() {
        assert_eq!(
            PASSWORD_DIGEST_TYPE,
            format!("{}#PasswordDigest", USERNAME_TOKEN_PROFILE)
        );
        assert_eq!(
            PASSWORD_TEXT_TYPE,
            format!("{}#PasswordText", USERNAME_TOKEN_PROFILE)
        );
    }

    #[test]
    fn test_namespace_prefixes() {
        assert_eq!(WSSE_NS.prefix, "wsse");
        assert_eq!(WSU_NS.prefix, "wsu");
        assert_eq!(DS_NS.prefix, "ds");
        assert_eq!(WSENC_NS.prefix, "wsenc");
    }
}
