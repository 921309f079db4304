//! Build-time configuration.
//!
//! `BACKEND_URL` is read when the bundle is compiled (`BACKEND_URL=https://... trunk build`).
//! When it is unset the client talks to `/api` on its own origin. The value is
//! not validated; a wrong URL only shows up as failing requests.

const BACKEND_URL: Option<&str> = option_env!("BACKEND_URL");

/// Identity used by the gamification view until real accounts exist.
pub const DEMO_USER_ID: &str = "demo_user";

/// Base of every endpoint, e.g. `https://heritage.example/api`.
pub fn api_base() -> String {
    format!("{}/api", BACKEND_URL.unwrap_or("").trim_end_matches('/'))
}

/// Full URL for an endpoint path such as `"/documents"` or `"health"`.
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_handles_slashes() {
        assert_eq!(join_url("https://h.example/api", "/health"), "https://h.example/api/health");
        assert_eq!(join_url("https://h.example/api/", "health"), "https://h.example/api/health");
        assert_eq!(join_url("/api", "/"), "/api/");
    }

    #[test]
    fn api_url_ends_with_path() {
        assert!(api_url("/folk-songs").ends_with("/api/folk-songs"));
    }
}
