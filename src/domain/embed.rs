use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Classification of a raw, user-supplied video link into an allow-listed,
/// embeddable reference.
///
/// Only YouTube and Google Drive are accepted. The embed URL is rebuilt from
/// the extracted id, so no part of the raw string ever reaches an iframe
/// `src` attribute. `Invalid` is a normal outcome, not an error: callers
/// render a plain link (or nothing) instead of an embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EmbedResult {
    Youtube { embed_url: String },
    Drive { embed_url: String },
    Invalid,
}

static YOUTUBE_WATCH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"watch\?v=([A-Za-z0-9_-]+)").unwrap());
static YOUTUBE_SHORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"youtu\.be/([A-Za-z0-9_-]+)").unwrap());
static DRIVE_FILE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"drive\.google\.com/file/d/([A-Za-z0-9_-]+)").unwrap());

/// Maps a raw URL string to an embeddable reference or `Invalid`.
///
/// Matching is purely syntactic (no network lookup) and tried in a fixed
/// order: YouTube `watch` form, YouTube short form, then Drive. The input is
/// trimmed first. The function is pure, so it is safe to call on every
/// render, both for live preview and for persisted records.
pub fn normalize(raw: &str) -> EmbedResult {
    let raw = raw.trim();
    if raw.is_empty() {
        return EmbedResult::Invalid;
    }

    if let Some(caps) = YOUTUBE_WATCH.captures(raw) {
        return EmbedResult::Youtube {
            embed_url: format!("https://www.youtube.com/embed/{}", &caps[1]),
        };
    }
    if let Some(caps) = YOUTUBE_SHORT.captures(raw) {
        return EmbedResult::Youtube {
            embed_url: format!("https://www.youtube.com/embed/{}", &caps[1]),
        };
    }
    if let Some(caps) = DRIVE_FILE.captures(raw) {
        return EmbedResult::Drive {
            embed_url: format!("https://drive.google.com/file/d/{}/preview", &caps[1]),
        };
    }

    EmbedResult::Invalid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_form_extracts_full_id_charset() {
        assert_eq!(
            normalize("https://www.youtube.com/watch?v=abc123XYZ_-"),
            EmbedResult::Youtube {
                embed_url: "https://www.youtube.com/embed/abc123XYZ_-".to_string()
            }
        );
    }

    #[test]
    fn short_form_is_recognized() {
        assert_eq!(
            normalize("https://youtu.be/abc123"),
            EmbedResult::Youtube {
                embed_url: "https://www.youtube.com/embed/abc123".to_string()
            }
        );
    }

    #[test]
    fn drive_file_maps_to_preview() {
        assert_eq!(
            normalize("https://drive.google.com/file/d/1A2b3C/view?usp=sharing"),
            EmbedResult::Drive {
                embed_url: "https://drive.google.com/file/d/1A2b3C/preview".to_string()
            }
        );
    }

    #[test]
    fn unlisted_providers_are_invalid() {
        assert_eq!(normalize("https://vimeo.com/12345"), EmbedResult::Invalid);
    }

    #[test]
    fn empty_and_whitespace_are_invalid() {
        assert_eq!(normalize(""), EmbedResult::Invalid);
        assert_eq!(normalize("   \t"), EmbedResult::Invalid);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(
            normalize("  https://youtu.be/xyz  "),
            EmbedResult::Youtube {
                embed_url: "https://www.youtube.com/embed/xyz".to_string()
            }
        );
    }
}
