use serde_json::Value;

use crate::value::is_empty_str;

pub const UNKNOWN: &str = "unknown";

/// Most frequent valid genre label, lowercased and trimmed.
///
/// Genres that are empty per the shared emptiness rule, or equal to
/// "none"/"unknown", never count. Ties keep the first-seen leader: the
/// scan uses a strictly-greater-than comparison over counts in insertion
/// order.
pub fn dominant_genre<'a, I>(genres: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut counts: Vec<(String, u32)> = Vec::new();
    for genre in genres {
        let Some(raw) = genre else { continue };
        if is_empty_str(raw) {
            continue;
        }
        let genre = raw.trim().to_lowercase();
        if genre == "none" || genre == UNKNOWN {
            continue;
        }
        match counts.iter_mut().find(|(g, _)| *g == genre) {
            Some((_, n)) => *n += 1,
            None => counts.push((genre, 1)),
        }
    }

    let mut best: Option<(&str, u32)> = None;
    for (genre, count) in counts.iter() {
        if best.map_or(true, |(_, max)| *count > max) {
            best = Some((genre, *count));
        }
    }
    match best {
        Some((genre, _)) => genre.to_string(),
        None => UNKNOWN.to_string(),
    }
}

/// Resolver over raw scene values, as parsed from a per-video JSON array.
pub fn resolve(scenes: &[Value]) -> String {
    dominant_genre(scenes.iter().map(|s| s.get("genre").and_then(Value::as_str)))
}
