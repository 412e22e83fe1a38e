use coachdesk_backend::embed::{normalize, EmbedResult};

#[test]
fn youtube_watch_link_is_classified() {
    assert_eq!(
        normalize("https://www.youtube.com/watch?v=abc123XYZ_-"),
        EmbedResult::Youtube {
            embed_url: "https://www.youtube.com/embed/abc123XYZ_-".to_string()
        }
    );
}

#[test]
fn youtube_short_link_is_classified() {
    assert_eq!(
        normalize("https://youtu.be/abc123"),
        EmbedResult::Youtube {
            embed_url: "https://www.youtube.com/embed/abc123".to_string()
        }
    );
}

#[test]
fn drive_file_link_maps_to_preview_url() {
    assert_eq!(
        normalize("https://drive.google.com/file/d/1A2b3C/view?usp=sharing"),
        EmbedResult::Drive {
            embed_url: "https://drive.google.com/file/d/1A2b3C/preview".to_string()
        }
    );
}

#[test]
fn non_allowlisted_provider_is_invalid() {
    assert_eq!(normalize("https://vimeo.com/12345"), EmbedResult::Invalid);
}

#[test]
fn empty_input_is_invalid() {
    assert_eq!(normalize(""), EmbedResult::Invalid);
}

#[test]
fn input_is_trimmed_before_matching() {
    assert_eq!(
        normalize("   https://www.youtube.com/watch?v=tr1mmed   "),
        EmbedResult::Youtube {
            embed_url: "https://www.youtube.com/embed/tr1mmed".to_string()
        }
    );
}

#[test]
fn watch_form_wins_over_short_form() {
    // Pathological input satisfying both patterns; the watch form is tried
    // first and must win for determinism.
    assert_eq!(
        normalize("https://youtu.be/short?next=watch?v=watchid"),
        EmbedResult::Youtube {
            embed_url: "https://www.youtube.com/embed/watchid".to_string()
        }
    );
}

#[test]
fn classification_is_idempotent() {
    let raw = "https://drive.google.com/file/d/9Z8y7X/view";
    assert_eq!(normalize(raw), normalize(raw));
}

#[test]
fn query_parameters_never_reach_the_embed_url() {
    let result = normalize("https://www.youtube.com/watch?v=safeid&autoplay=1&evil=//x");
    assert_eq!(
        result,
        EmbedResult::Youtube {
            embed_url: "https://www.youtube.com/embed/safeid".to_string()
        }
    );
}
