//! Refresh-token cookie plumbing.
//!
//! The refresh token travels exclusively inside this cookie; it is never
//! accepted from a request body or an `Authorization` header.

use axum::http::header::InvalidHeaderValue;
use axum::http::HeaderMap;
use axum::http::HeaderValue;
use chrono::Duration;

pub const REFRESH_COOKIE_NAME: &str = "refreshToken";

/// Build the `Set-Cookie` value carrying a refresh token.
///
/// Scoped to the whole site, unreadable from scripts, and never sent
/// cross-site. `Secure` is added only when the deployment serves HTTPS.
pub fn refresh_cookie(
    token: &str,
    max_age: Duration,
    secure: bool,
) -> Result<HeaderValue, InvalidHeaderValue> {
    let max_age_seconds = max_age.num_seconds();
    let mut cookie = format!(
        "{REFRESH_COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Strict; Max-Age={max_age_seconds}"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

/// Extract the refresh token from the `Cookie` header, if present.
pub fn extract_refresh_token(headers: &HeaderMap) -> Option<String> {
    let header = headers.get(axum::http::header::COOKIE)?;
    let value = header.to_str().ok()?;
    for pair in value.split(';') {
        // Nameless pairs (cookies set without an `=`) are skipped, not
        // fatal to the scan.
        let Some((key, val)) = pair.trim().split_once('=') else {
            continue;
        };
        if key.trim() == REFRESH_COOKIE_NAME {
            return Some(val.trim().to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_cookie_attributes() {
        let cookie = refresh_cookie("token123", Duration::days(7), false).unwrap();
        let value = cookie.to_str().unwrap();

        assert!(value.starts_with("refreshToken=token123"));
        assert!(value.contains("Path=/"));
        assert!(value.contains("HttpOnly"));
        assert!(value.contains("SameSite=Strict"));
        assert!(value.contains("Max-Age=604800"));
        assert!(!value.contains("Secure"));
    }

    #[test]
    fn test_refresh_cookie_secure_flag() {
        let cookie = refresh_cookie("token123", Duration::days(7), true).unwrap();
        assert!(cookie.to_str().unwrap().ends_with("; Secure"));
    }

    #[test]
    fn test_extract_refresh_token() {
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::COOKIE,
            HeaderValue::from_static("other=1; refreshToken=abc.def.ghi; theme=dark"),
        );

        assert_eq!(
            extract_refresh_token(&headers),
            Some("abc.def.ghi".to_string())
        );
    }

    #[test]
    fn test_extract_refresh_token_skips_nameless_pairs() {
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::COOKIE,
            HeaderValue::from_static("foo; refreshToken=abc.def.ghi"),
        );

        assert_eq!(
            extract_refresh_token(&headers),
            Some("abc.def.ghi".to_string())
        );
    }

    #[test]
    fn test_extract_refresh_token_absent() {
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::COOKIE,
            HeaderValue::from_static("other=1"),
        );

        assert_eq!(extract_refresh_token(&headers), None);
        assert_eq!(extract_refresh_token(&HeaderMap::new()), None);
    }
}
