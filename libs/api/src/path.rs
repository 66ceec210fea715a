use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything outside the RFC 3986 unreserved set is escaped, so ids with
/// reserved characters still form valid request paths.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn encode(s: &str) -> String {
    utf8_percent_encode(s, UNRESERVED).to_string()
}

pub fn videos(model: &str) -> String {
    format!("/api/videos?model={}", encode(model))
}

pub fn video(video_id: &str, model: &str) -> String {
    format!("/api/videos/{}?model={}", encode(video_id), encode(model))
}

pub fn scene(video_id: &str, index: usize, model: &str) -> String {
    format!(
        "/api/videos/{}/scenes/{}?model={}",
        encode(video_id),
        index,
        encode(model)
    )
}

pub fn title(video_id: &str) -> String {
    format!("/api/titles/{}", encode(video_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_ids_pass_through() {
        assert_eq!("/api/videos?model=model1", videos("model1"));
        assert_eq!("/api/videos/vid-1.a?model=model2", video("vid-1.a", "model2"));
    }

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!("/api/videos/a%20b%3F?model=model1", video("a b?", "model1"));
        assert_eq!("/api/videos?model=model%262", videos("model&2"));
        assert_eq!("/api/titles/x%2Fy", title("x/y"));
    }
}
