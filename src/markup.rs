//! Light reply markup: `**bold**`, newlines and `[label](url)` links.

use std::sync::LazyLock;

use regex::Regex;

static INLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*(?P<bold>[^*\n]+)\*\*|\[(?P<label>[^\]\n]+)\]\((?P<url>[^)\s]+)\)")
        .expect("valid markup regex")
});

const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Bold(String),
    LineBreak,
    Link { label: String, url: String },
}

/// Split reply text into segments. Unterminated markers stay plain text.
pub fn parse(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();

    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            segments.push(Segment::LineBreak);
        }

        let mut last = 0;
        for caps in INLINE.captures_iter(line) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            if whole.start() > last {
                segments.push(Segment::Text(line[last..whole.start()].to_string()));
            }

            if let Some(bold) = caps.name("bold") {
                segments.push(Segment::Bold(bold.as_str().to_string()));
            } else if let (Some(label), Some(url)) = (caps.name("label"), caps.name("url")) {
                segments.push(Segment::Link {
                    label: label.as_str().to_string(),
                    url: url.as_str().to_string(),
                });
            }
            last = whole.end();
        }

        if last < line.len() {
            segments.push(Segment::Text(line[last..].to_string()));
        }
    }

    segments
}

/// Render segments for a terminal. `color` enables ANSI bold.
pub fn render_terminal(segments: &[Segment], color: bool) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Bold(text) if color => {
                out.push_str(ANSI_BOLD);
                out.push_str(text);
                out.push_str(ANSI_RESET);
            }
            Segment::Bold(text) => out.push_str(text),
            Segment::LineBreak => out.push('\n'),
            Segment::Link { label, url } => {
                out.push_str(label);
                out.push_str(" <");
                out.push_str(url);
                out.push('>');
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_markup() {
        let segments = parse("**Email:** a@b.c\nSee [LinkedIn](https://example.com/in/a).");
        assert_eq!(
            segments,
            vec![
                Segment::Bold("Email:".to_string()),
                Segment::Text(" a@b.c".to_string()),
                Segment::LineBreak,
                Segment::Text("See ".to_string()),
                Segment::Link {
                    label: "LinkedIn".to_string(),
                    url: "https://example.com/in/a".to_string(),
                },
                Segment::Text(".".to_string()),
            ]
        );
    }

    #[test]
    fn unterminated_markers_are_text() {
        assert_eq!(
            parse("**open [label](no-close"),
            vec![Segment::Text("**open [label](no-close".to_string())]
        );
    }

    #[test]
    fn blank_lines_keep_breaks() {
        assert_eq!(parse("a\n\nb").len(), 4);
    }

    #[test]
    fn renders_plain_terminal_text() {
        let rendered = render_terminal(&parse("**Hi** [x](http://y)\nz"), false);
        assert_eq!(rendered, "Hi x <http://y>\nz");
    }

    #[test]
    fn renders_ansi_bold() {
        let rendered = render_terminal(&parse("**Hi**"), true);
        assert_eq!(rendered, "\x1b[1mHi\x1b[0m");
    }
}
