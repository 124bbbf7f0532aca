//! Input validation for target URLs and short codes.
//!
//! Validation runs before any storage access. Each function returns the
//! reason for rejection; the service maps it to `BadUrl` or `BadShortLink`.

use thiserror::Error;
use url::Url;

use crate::utils::code_generator::SHORT_CODE_LEN;

/// Reasons a target URL is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlValidationError {
    #[error("url cannot be empty")]
    Empty,

    #[error("invalid url: {0}")]
    InvalidFormat(String),

    #[error("url scheme must be http or https")]
    UnsupportedScheme,

    #[error("url hostname is empty")]
    EmptyHost,

    #[error("url cannot be root domain")]
    RootDomain,
}

/// Reasons a short code is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortLinkValidationError {
    #[error("link cannot be empty")]
    Empty,

    #[error("invalid short link has space, [{0}]")]
    ContainsSpace(String),

    #[error("short link length must be {} characters", SHORT_CODE_LEN)]
    WrongLength,

    #[error("must be not URL: {0}")]
    IsUrl(String),
}

/// Validates a target URL submitted for shortening.
///
/// Accepts absolute `http`/`https` URLs whose host has at least two
/// dot-separated labels.
///
/// # Errors
///
/// Returns the first rule the input breaks, see [`UrlValidationError`].
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    // Url::parse silently strips tabs, newlines and surrounding spaces.
    if input
        .chars()
        .any(|c| c.is_ascii_control() || c.is_whitespace())
    {
        return Err(UrlValidationError::InvalidFormat(
            "url contains whitespace or control characters".to_string(),
        ));
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(UrlValidationError::UnsupportedScheme);
    }

    let host = match url.host_str() {
        Some(host) if !host.is_empty() => host,
        _ => return Err(UrlValidationError::EmptyHost),
    };

    if !host.contains('.') {
        return Err(UrlValidationError::RootDomain);
    }

    Ok(())
}

/// Validates a short code passed to lookup, redirect, or statistics paths.
///
/// Length is counted in characters, not bytes.
///
/// # Errors
///
/// Returns the first rule the input breaks, see [`ShortLinkValidationError`].
pub fn validate_short_link(code: &str) -> Result<(), ShortLinkValidationError> {
    if code.is_empty() {
        return Err(ShortLinkValidationError::Empty);
    }

    if code.contains(' ') {
        return Err(ShortLinkValidationError::ContainsSpace(code.to_string()));
    }

    if code.chars().count() != SHORT_CODE_LEN {
        return Err(ShortLinkValidationError::WrongLength);
    }

    if validate_url(code).is_ok() {
        return Err(ShortLinkValidationError::IsUrl(code.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_accepts_http_and_https() {
        assert!(validate_url("https://google.com/1").is_ok());
        assert!(validate_url("http://example.com").is_ok());
        assert!(validate_url("https://api.example.com/v1/users?page=2#top").is_ok());
        assert!(validate_url("http://192.168.1.1:8080/api").is_ok());
    }

    #[test]
    fn test_validate_url_empty() {
        assert_eq!(validate_url(""), Err(UrlValidationError::Empty));
        assert_eq!(validate_url("   \t"), Err(UrlValidationError::Empty));
    }

    #[test]
    fn test_validate_url_not_absolute() {
        assert!(matches!(
            validate_url("example.com/path"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
        assert!(matches!(
            validate_url("not a valid url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_validate_url_rejects_whitespace_and_control_chars() {
        let cases = [
            "https://exa\nmple.com/x",
            " https://google.com",
            "https://google.com ",
            "https://google.com/\t1",
            "https://google.com/a b",
            "https://google.com/\r\n",
            "https://google.com/\u{7f}",
        ];

        for input in cases {
            assert!(
                matches!(validate_url(input), Err(UrlValidationError::InvalidFormat(_))),
                "accepted {input:?}"
            );
        }
    }

    #[test]
    fn test_validate_url_scheme() {
        assert_eq!(
            validate_url("ftp://x.com"),
            Err(UrlValidationError::UnsupportedScheme)
        );
        assert_eq!(
            validate_url("htts://google./me/.com/1"),
            Err(UrlValidationError::UnsupportedScheme)
        );
        assert_eq!(
            validate_url("javascript:alert('xss')"),
            Err(UrlValidationError::UnsupportedScheme)
        );
        assert_eq!(
            validate_url("mailto:test@example.com"),
            Err(UrlValidationError::UnsupportedScheme)
        );
    }

    #[test]
    fn test_validate_url_root_domain() {
        assert_eq!(
            validate_url("http://localhost"),
            Err(UrlValidationError::RootDomain)
        );
        assert_eq!(
            validate_url("https://intranet:8443/wiki"),
            Err(UrlValidationError::RootDomain)
        );
    }

    #[test]
    fn test_validate_url_without_host() {
        assert!(validate_url("http://").is_err());
    }

    #[test]
    fn test_validate_short_link_accepts_opaque_tokens() {
        assert!(validate_short_link("o6nh7Zc0").is_ok());
        assert!(validate_short_link("a-b_c-d_").is_ok());
        assert!(validate_short_link("ääääääää").is_ok());
    }

    #[test]
    fn test_validate_short_link_empty() {
        assert_eq!(validate_short_link(""), Err(ShortLinkValidationError::Empty));
    }

    #[test]
    fn test_validate_short_link_space() {
        assert!(matches!(
            validate_short_link("abc defg"),
            Err(ShortLinkValidationError::ContainsSpace(_))
        ));
    }

    #[test]
    fn test_validate_short_link_length() {
        assert_eq!(
            validate_short_link("abc1234"),
            Err(ShortLinkValidationError::WrongLength)
        );
        assert_eq!(
            validate_short_link("abc123456"),
            Err(ShortLinkValidationError::WrongLength)
        );
        assert_eq!(
            validate_short_link("ääääääääää"),
            Err(ShortLinkValidationError::WrongLength)
        );
    }

    #[test]
    fn test_validate_short_link_rejects_full_url() {
        assert_eq!(
            validate_short_link("https://example.com/o6nh7Zc0"),
            Err(ShortLinkValidationError::WrongLength)
        );
    }
}
