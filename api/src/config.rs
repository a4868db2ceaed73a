//! # Build-time environment configuration
//!
//! The API base URL and the media (object storage) base URL come from
//! build-time environment variables with hardcoded fallbacks, so a local
//! checkout works without any environment set up:
//!
//! | Variable | Fallback |
//! |----------|----------|
//! | `HOMELEDGER_API_URL` | `https://api.homeledger.example` |
//! | `HOMELEDGER_MEDIA_URL` | `https://media.homeledger.example` |
//!
//! Uploaded images (receipts, avatars) are served from the media base URL
//! joined with the server-returned relative path.

const DEFAULT_API_URL: &str = "https://api.homeledger.example";
const DEFAULT_MEDIA_URL: &str = "https://media.homeledger.example";
const PLACEHOLDER_AVATAR: &str = "https://media.homeledger.example/static/avatar-placeholder.png";

pub fn api_base_url() -> &'static str {
    option_env!("HOMELEDGER_API_URL").unwrap_or(DEFAULT_API_URL)
}

pub fn media_base_url() -> &'static str {
    option_env!("HOMELEDGER_MEDIA_URL").unwrap_or(DEFAULT_MEDIA_URL)
}

pub fn placeholder_avatar() -> &'static str {
    PLACEHOLDER_AVATAR
}

/// Absolute URL for a server-returned relative media path.
///
/// Some backend revisions return Windows-style separators in stored paths;
/// those are normalised before joining. `None` or an empty path falls back
/// to the placeholder avatar.
pub fn image_url(path: Option<&str>) -> String {
    match path {
        Some(p) if !p.is_empty() => {
            format!("{}/{}", media_base_url(), p.replace('\\', "/"))
        }
        _ => placeholder_avatar().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_url_normalises_backslashes() {
        let url = image_url(Some("profiles\\7\\avatar.jpg"));
        assert!(url.ends_with("/profiles/7/avatar.jpg"));
        assert!(url.starts_with(media_base_url()));
    }

    #[test]
    fn missing_path_falls_back_to_placeholder() {
        assert_eq!(image_url(None), placeholder_avatar());
        assert_eq!(image_url(Some("")), placeholder_avatar());
    }
}
