//! Plain-text helpers for card rendering.

use chrono::{DateTime, Utc};

/// Flatten an HTML fragment to a single line of plain text.
///
/// Tags are dropped (block-level boundaries become spaces), the common
/// entities are decoded, and runs of whitespace collapse to one space.
pub fn strip_html(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut chars = html.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '<' => {
                // Skip to the end of the tag
                for t in chars.by_ref() {
                    if t == '>' {
                        break;
                    }
                }
                text.push(' ');
            }
            '&' => {
                let mut entity = String::new();
                while let Some(&e) = chars.peek() {
                    if e == ';' || entity.len() > 8 || !(e.is_ascii_alphanumeric() || e == '#') {
                        break;
                    }
                    entity.push(e);
                    chars.next();
                }
                match (chars.peek(), decode_entity(&entity)) {
                    (Some(';'), Some(decoded)) => {
                        chars.next();
                        text.push(decoded);
                    }
                    _ => {
                        text.push('&');
                        text.push_str(&entity);
                    }
                }
            }
            c => text.push(c),
        }
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let number = entity.strip_prefix('#')?;
            let code = match number.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => number.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

/// Cut `text` to at most `width` characters, marking the cut with `…`.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Humanized distance from `then` to `now`, e.g. "3 days ago".
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds();
    if seconds < 0 {
        return "in the future".to_string();
    }

    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    match (seconds, minutes, hours, days) {
        (s, ..) if s < 45 => "a few seconds ago".to_string(),
        (s, ..) if s < 90 => "a minute ago".to_string(),
        (_, m, ..) if m < 45 => format!("{} minutes ago", m.max(2)),
        (_, m, ..) if m < 90 => "an hour ago".to_string(),
        (_, _, h, _) if h < 22 => format!("{} hours ago", h.max(2)),
        (_, _, h, _) if h < 36 => "a day ago".to_string(),
        (.., d) if d < 26 => format!("{} days ago", d.max(2)),
        (.., d) if d < 45 => "a month ago".to_string(),
        (.., d) if d < 320 => format!("{} months ago", (d / 30).max(2)),
        (.., d) if d < 548 => "a year ago".to_string(),
        (.., d) => format!("{} years ago", (d / 365).max(2)),
    }
}
