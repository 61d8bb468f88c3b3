use anyhow::{bail, Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Identity claims carried in the provider credential.
///
/// Deliberately permissive: unknown keys are ignored and every expected key
/// may be missing, in which case the UI shows a blank instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityClaims {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

impl IdentityClaims {
    /// Name shown in the header, falling back to the email address.
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.email.clone())
            .unwrap_or_default()
    }

    /// Avatar source, blank when the claim is missing.
    pub fn picture_url(&self) -> String {
        self.picture.clone().unwrap_or_default()
    }
}

/// Decode a provider credential into displayable claims.
///
/// The credential is a period-delimited `header.payload.signature` string;
/// only the payload segment is looked at. The signature is not verified and
/// no expiry check is performed: the result gates nothing but what this page
/// renders.
pub fn decode_credential(credential: &str) -> Result<IdentityClaims> {
    let parts: Vec<&str> = credential.split('.').collect();
    if parts.len() != 3 {
        bail!(
            "credential has {} segments, expected header.payload.signature",
            parts.len()
        );
    }

    let payload =
        base64_url_decode(parts[1]).context("credential payload is not valid base64url")?;
    let text = percent_decode_utf8(&payload)
        .context("credential payload is not percent-encoded UTF-8 text")?;
    let claims = serde_json::from_str(&text).context("credential payload is not a JSON record")?;

    Ok(claims)
}

/// Decode base64url (the web-safe alphabet, unpadded) by substituting its two
/// non-alphanumeric characters with the standard alphabet's and re-padding.
fn base64_url_decode(input: &str) -> Result<Vec<u8>> {
    let mut mapped = input.replace('-', "+").replace('_', "/");
    match mapped.len() % 4 {
        2 => mapped.push_str("=="),
        3 => mapped.push('='),
        _ => {}
    }
    STANDARD.decode(mapped).map_err(Into::into)
}

/// Interpret raw payload bytes as percent-encoded UTF-8 text.
fn percent_decode_utf8(bytes: &[u8]) -> Result<String> {
    let escaped: String = bytes.iter().map(|b| format!("%{b:02x}")).collect();
    let text = urlencoding::decode(&escaped)?;
    Ok(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    /// Build a three-segment credential around the given payload bytes.
    fn credential_with_payload(payload: &[u8]) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload);
        format!("{header}.{body}.signature")
    }

    #[test]
    fn test_decode_credential_round_trip() {
        let token = credential_with_payload(
            br#"{"name":"Jane Doe","email":"jane@example.com","picture":"https://x/y.png"}"#,
        );

        let claims = decode_credential(&token).unwrap();
        assert_eq!(claims.name.as_deref(), Some("Jane Doe"));
        assert_eq!(claims.email.as_deref(), Some("jane@example.com"));
        assert_eq!(claims.picture.as_deref(), Some("https://x/y.png"));
    }

    #[test]
    fn test_decode_credential_multibyte_name() {
        let token = credential_with_payload(
            r#"{"name":"Bérénice Ayuningtyas","email":"b@example.com"}"#.as_bytes(),
        );

        let claims = decode_credential(&token).unwrap();
        assert_eq!(claims.name.as_deref(), Some("Bérénice Ayuningtyas"));
    }

    #[test]
    fn test_decode_credential_ignores_unknown_keys() {
        let token = credential_with_payload(
            br#"{"sub":"1234567890","aud":"client-id","name":"Jane Doe","iat":1716239022}"#,
        );

        let claims = decode_credential(&token).unwrap();
        assert_eq!(claims.name.as_deref(), Some("Jane Doe"));
        assert_eq!(claims.email, None);
        assert_eq!(claims.picture, None);
    }

    #[test]
    fn test_decode_credential_missing_segment() {
        assert!(decode_credential("header.payload").is_err());
        assert!(decode_credential("payload-only").is_err());
        assert!(decode_credential("").is_err());
    }

    #[test]
    fn test_decode_credential_extra_segment() {
        assert!(decode_credential("a.b.c.d").is_err());
    }

    #[test]
    fn test_decode_credential_invalid_base64_alphabet() {
        // '!' is outside the web-safe alphabet even after substitution.
        assert!(decode_credential("header.!!!!.signature").is_err());
    }

    #[test]
    fn test_decode_credential_invalid_utf8_payload() {
        let token = credential_with_payload(&[0xff, 0xfe, 0xfd]);
        assert!(decode_credential(&token).is_err());
    }

    #[test]
    fn test_decode_credential_non_json_payload() {
        let token = credential_with_payload(b"hello there");
        assert!(decode_credential(&token).is_err());
    }

    #[test]
    fn test_decode_credential_non_record_payload() {
        let token = credential_with_payload(b"[1,2,3]");
        assert!(decode_credential(&token).is_err());
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let claims = IdentityClaims {
            name: None,
            email: Some("jane@example.com".to_string()),
            picture: None,
        };
        assert_eq!(claims.display_name(), "jane@example.com");
    }

    #[test]
    fn test_display_name_blank_when_no_claims() {
        let claims = IdentityClaims {
            name: None,
            email: None,
            picture: None,
        };
        assert_eq!(claims.display_name(), "");
        assert_eq!(claims.picture_url(), "");
    }

    #[test]
    fn test_base64_url_decode_substitutes_websafe_characters() {
        // 0xfb 0xef 0xbe encodes to "++++" standard / "----" web-safe.
        assert_eq!(base64_url_decode("----").unwrap(), vec![0xfb, 0xef, 0xbe]);
        // 0xff 0xff 0xff encodes to "////" standard / "____" web-safe.
        assert_eq!(base64_url_decode("____").unwrap(), vec![0xff, 0xff, 0xff]);
    }
}
