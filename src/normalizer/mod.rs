//! Video reference normalization
//!
//! Converts free-form user input (a full watch/share URL in several known
//! shapes, or a bare 11-character video id) into a canonical embed address
//! for the player frame. Extraction is permissive: input that matches no
//! known shape is passed through as-is and left for the embed provider to
//! reject, so normalization never blocks rendering.

use serde::{Deserialize, Serialize};

/// YouTube video ids are always 11 characters from `[A-Za-z0-9_-]`.
pub const VIDEO_ID_LEN: usize = 11;

const EMBED_BASE: &str = "https://www.youtube.com/embed";

/// Query flags appended to every embed address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerFlags {
    pub autoplay: bool,
    pub mute: bool,
    pub controls: bool,
}

impl Default for PlayerFlags {
    fn default() -> Self {
        Self {
            autoplay: true,
            mute: true,
            controls: true,
        }
    }
}

impl PlayerFlags {
    /// Render the flags as an embed query string.
    pub fn query_string(&self) -> String {
        format!(
            "autoplay={}&mute={}&controls={}",
            self.autoplay as u8, self.mute as u8, self.controls as u8
        )
    }
}

/// Attempt to extract an 11-character video id from a recognized URL shape.
///
/// Shapes are tried in priority order; the first one that yields a valid id
/// wins. Returns `None` when the input matches no known shape, in which case
/// callers fall back to the raw input (see [`normalize`]).
pub fn extract_video_id(input: &str) -> Option<&str> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Some(id) = id_after_query_param(input, "watch?v=") {
        return Some(id);
    }
    for marker in ["shorts/", "youtu.be/", "embed/"] {
        if let Some(id) = id_after_path_segment(input, marker) {
            return Some(id);
        }
    }

    if is_valid_id(input) {
        return Some(input);
    }

    None
}

/// Normalize a video reference to the identifier used for embedding.
///
/// Falls back to the raw trimmed input when no shape matches; validity is
/// deferred to the embed provider, which shows its own unavailable state.
pub fn normalize(input: &str) -> &str {
    let trimmed = input.trim();
    extract_video_id(trimmed).unwrap_or(trimmed)
}

/// Build the embed address for a reference with the default player flags.
///
/// Empty input yields an empty address; the caller renders a placeholder
/// instead of a playback frame.
pub fn embed_address(input: &str) -> String {
    embed_address_with_flags(input, &PlayerFlags::default())
}

/// Build the embed address for a reference with explicit player flags.
pub fn embed_address_with_flags(input: &str, flags: &PlayerFlags) -> String {
    let id = normalize(input);
    if id.is_empty() {
        return String::new();
    }
    format!("{}/{}?{}", EMBED_BASE, id, flags.query_string())
}

/// True when `input` is exactly an 11-character id from the id alphabet.
pub fn is_valid_id(input: &str) -> bool {
    input.len() == VIDEO_ID_LEN && input.bytes().all(is_id_byte)
}

fn is_id_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

/// Extract the id following a `?v=`-style marker, terminated by `&`, `?`,
/// `#`, newline, or end of input.
fn id_after_query_param<'a>(input: &'a str, marker: &str) -> Option<&'a str> {
    let start = input.find(marker)? + marker.len();
    let rest = &input[start..];
    let end = rest
        .find(['&', '?', '#', '\n'])
        .unwrap_or(rest.len());
    let candidate = &rest[..end];
    is_valid_id(candidate).then_some(candidate)
}

/// Extract the id following a path-segment marker such as `shorts/`.
///
/// The id is the run of id-alphabet characters after the marker; a run of
/// the wrong length is not an id and the caller falls through to the next
/// shape.
fn id_after_path_segment<'a>(input: &'a str, marker: &str) -> Option<&'a str> {
    let start = input.find(marker)? + marker.len();
    let rest = &input[start..];
    let end = rest
        .bytes()
        .position(|b| !is_id_byte(b))
        .unwrap_or(rest.len());
    let candidate = &rest[..end];
    is_valid_id(candidate).then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ID: &str = "dQw4w9WgXcQ";

    #[test]
    fn extracts_from_watch_url() {
        let url = format!("https://www.youtube.com/watch?v={}", ID);
        assert_eq!(extract_video_id(&url), Some(ID));
    }

    #[test]
    fn extracts_from_watch_url_with_extra_params() {
        let url = format!("https://www.youtube.com/watch?v={}&t=42s&list=PL123", ID);
        assert_eq!(extract_video_id(&url), Some(ID));
    }

    #[test]
    fn extracts_from_short_link() {
        let url = format!("https://youtu.be/{}", ID);
        assert_eq!(extract_video_id(&url), Some(ID));
    }

    #[test]
    fn extracts_from_shorts_url() {
        let url = format!("https://www.youtube.com/shorts/{}", ID);
        assert_eq!(extract_video_id(&url), Some(ID));
    }

    #[test]
    fn extracts_from_embed_url() {
        let url = format!("https://www.youtube.com/embed/{}", ID);
        assert_eq!(extract_video_id(&url), Some(ID));
    }

    #[test]
    fn bare_id_passes_through() {
        assert_eq!(extract_video_id(ID), Some(ID));
        assert_eq!(normalize(ID), ID);
    }

    #[test]
    fn watch_marker_takes_priority_over_short_link() {
        // Both markers present; watch?v= must win.
        let url = format!("https://youtu.be/AAAAAAAAAAA/watch?v={}", ID);
        assert_eq!(extract_video_id(&url), Some(ID));
    }

    #[test]
    fn unrecognized_input_falls_back_to_raw() {
        assert_eq!(extract_video_id("not a video"), None);
        assert_eq!(normalize("not a video"), "not a video");
        assert_eq!(
            embed_address("junk"),
            "https://www.youtube.com/embed/junk?autoplay=1&mute=1&controls=1"
        );
    }

    #[test]
    fn empty_input_yields_empty_address() {
        assert_eq!(embed_address(""), "");
        assert_eq!(embed_address("   "), "");
    }

    #[test]
    fn input_is_trimmed() {
        let url = format!("  https://youtu.be/{}  \n", ID);
        assert_eq!(extract_video_id(&url), Some(ID));
    }

    #[test]
    fn malformed_candidate_falls_through() {
        // Too-short id after watch?v=; the trailing bare id rule cannot
        // rescue a full URL, so the raw input is used.
        let url = "https://www.youtube.com/watch?v=short";
        assert_eq!(extract_video_id(url), None);
        assert_eq!(normalize(url), url);
    }

    #[test]
    fn id_with_underscore_and_dash() {
        assert!(is_valid_id("a_b-c_d-e_f"));
        assert!(!is_valid_id("a_b-c_d-e_"));
        assert!(!is_valid_id("a_b-c_d-e_f!"));
    }

    #[test]
    fn embed_address_respects_flags() {
        let flags = PlayerFlags {
            autoplay: false,
            mute: true,
            controls: false,
        };
        assert_eq!(
            embed_address_with_flags(ID, &flags),
            format!("https://www.youtube.com/embed/{}?autoplay=0&mute=1&controls=0", ID)
        );
    }

    fn arb_id() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Za-z0-9_-]{11}").unwrap()
    }

    proptest! {
        #[test]
        fn any_valid_id_survives_every_shape(id in arb_id()) {
            let shapes = [
                format!("https://www.youtube.com/watch?v={}", id),
                format!("https://www.youtube.com/watch?v={}&feature=share", id),
                format!("https://youtu.be/{}", id),
                format!("https://www.youtube.com/shorts/{}", id),
                format!("https://www.youtube.com/embed/{}", id),
                id.clone(),
            ];
            for shape in &shapes {
                prop_assert_eq!(extract_video_id(shape), Some(id.as_str()));
            }
        }

        #[test]
        fn normalize_never_panics(input in ".*") {
            let _ = embed_address(&input);
        }
    }
}
