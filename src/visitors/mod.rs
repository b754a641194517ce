pub mod store;
pub mod token;

pub use store::{Visitor, VisitorStore};

pub const COOKIE_NAME: &str = "rah_visitor";

/// Pull the visitor token out of a `Cookie` header, if it is well formed.
pub fn token_from_cookie_header(header: &str) -> Option<&str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == COOKIE_NAME)
        .map(|(_, value)| value.trim())
        .filter(|value| token::looks_valid(value))
}

/// `Set-Cookie` value for a freshly issued token.
pub fn set_cookie(token: &str, max_age_secs: i64) -> String {
    format!("{COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_token_among_other_cookies() {
        let token = "a".repeat(43);
        let header = format!("theme=dark; {COOKIE_NAME}={token}; other=1");
        assert_eq!(token_from_cookie_header(&header), Some(token.as_str()));
    }

    #[test]
    fn ignores_missing_or_malformed_tokens() {
        assert_eq!(token_from_cookie_header("theme=dark"), None);
        assert_eq!(token_from_cookie_header(&format!("{COOKIE_NAME}=abc")), None);
    }

    #[test]
    fn set_cookie_is_scoped_to_site() {
        let value = set_cookie("tok", 60);
        assert!(value.starts_with("rah_visitor=tok;"));
        assert!(value.contains("HttpOnly"));
        assert!(value.contains("Max-Age=60"));
    }
}
