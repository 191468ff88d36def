use std::io::Read;
use std::path::Path;

use taveren_core::model::Message;

use crate::error::CaptureError;
use crate::import::shape::ExportShape;

const USER_PREFIX: &str = "User:";
const ASSISTANT_PREFIX: &str = "Assistant:";

/// Reads chat exports from files or streams.
pub struct ExportImporter;

impl ExportImporter {
    /// Import messages from an export file on disk.
    pub fn import_file(path: &Path) -> Result<Vec<Message>, CaptureError> {
        let content = std::fs::read_to_string(path).map_err(CaptureError::Io)?;
        let messages = parse_export(&content);
        tracing::info!(
            path = %path.display(),
            messages = messages.len(),
            "Imported export"
        );
        Ok(messages)
    }

    /// Import messages from any reader (e.g. stdin).
    pub fn import_reader<R: Read>(mut reader: R) -> Result<Vec<Message>, CaptureError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Ok(parse_export(&content))
    }
}

/// Parse a ChatGPT export given as JSON or as `User:` / `Assistant:` text.
///
/// JSON is tried first. If it is not JSON, or the JSON yields no messages,
/// the (trimmed) input is parsed line by line instead. Never fails; input
/// with nothing recognisable gives an empty list.
pub fn parse_export(data: &str) -> Vec<Message> {
    let data = data.trim();
    if data.is_empty() {
        return Vec::new();
    }

    let shape = ExportShape::classify(data);
    let shape_name = shape.name();
    let messages = shape.into_messages();
    if !messages.is_empty() {
        tracing::debug!(shape = shape_name, count = messages.len(), "Parsed JSON export");
        return messages;
    }

    tracing::debug!(shape = shape_name, "No JSON messages, falling back to text parsing");
    parse_plain_text(data)
}

struct OpenMessage<'a> {
    role: &'static str,
    lines: Vec<&'a str>,
}

impl OpenMessage<'_> {
    fn finish(self) -> Message {
        Message::new(self.role, self.lines.join("\n").trim())
    }
}

fn parse_plain_text(data: &str) -> Vec<Message> {
    let mut messages = Vec::new();
    let mut current: Option<OpenMessage<'_>> = None;

    for line in split_lines(data) {
        let started = if let Some(rest) = line.strip_prefix(USER_PREFIX) {
            Some(("user", rest))
        } else {
            line.strip_prefix(ASSISTANT_PREFIX)
                .map(|rest| ("assistant", rest))
        };

        match started {
            Some((role, rest)) => {
                if let Some(open) = current.take() {
                    messages.push(open.finish());
                }
                current = Some(OpenMessage {
                    role,
                    lines: vec![rest.trim()],
                });
            }
            // Lines before the first role prefix have nowhere to go.
            None => {
                if let Some(open) = current.as_mut() {
                    open.lines.push(line);
                }
            }
        }
    }

    if let Some(open) = current {
        messages.push(open.finish());
    }
    messages
}

/// Split on every line boundary a chat export may carry: `\n`, `\r\n`, a
/// lone `\r`, vertical tab, form feed, the file/group/record separators,
/// NEL and the Unicode line and paragraph separators. A trailing break does
/// not produce an extra empty line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                start = j + 1;
            }
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_plain_text() {
        let messages = parse_export("User: hello\nAssistant: hi");
        assert_eq!(
            messages,
            vec![Message::new("user", "hello"), Message::new("assistant", "hi")]
        );
    }

    #[test]
    fn test_parse_threaded_parts() {
        let messages = parse_export(
            r#"{"messages":[{"author":{"role":"user"},"content":{"parts":["a","b"]}}]}"#,
        );
        assert_eq!(messages, vec![Message::new("user", "a\nb")]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_export("").is_empty());
        assert!(parse_export("   \n\t ").is_empty());
    }

    #[test]
    fn test_continuation_lines_keep_indentation() {
        let messages = parse_export(
            "User: write a loop\nAssistant: Here:\n    for x in xs {\n        f(x);\n    }\nUser: thanks",
        );
        assert_eq!(messages.len(), 3);
        assert_eq!(
            messages[1].content(),
            "Here:\n    for x in xs {\n        f(x);\n    }"
        );
        assert_eq!(messages[2], Message::new("user", "thanks"));
    }

    #[test]
    fn test_preamble_is_discarded() {
        let messages = parse_export("Exported on Monday\n\nUser:   hi there  \nAssistant: yo\n\n");
        assert_eq!(
            messages,
            vec![Message::new("user", "hi there"), Message::new("assistant", "yo")]
        );
    }

    #[test]
    fn test_lone_carriage_return_splits_turns() {
        let messages = parse_export("User: a\rAssistant: b");
        assert_eq!(
            messages,
            vec![Message::new("user", "a"), Message::new("assistant", "b")]
        );
    }

    #[test]
    fn test_split_lines_breaks() {
        assert_eq!(split_lines("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
        assert_eq!(
            split_lines("a\u{0b}b\u{0c}c\u{1c}d\u{1d}e\u{1e}f\u{85}g\u{2028}h\u{2029}i"),
            vec!["a", "b", "c", "d", "e", "f", "g", "h", "i"]
        );
        assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_windows_line_endings() {
        let messages = parse_export("User: hello\r\nthere\r\nAssistant: hi\r\n");
        assert_eq!(
            messages,
            vec![Message::new("user", "hello\nthere"), Message::new("assistant", "hi")]
        );
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        assert!(parse_export("user: hello\nassistant: hi").is_empty());
    }

    #[test]
    fn test_empty_turn_is_kept() {
        let messages = parse_export("User:\nAssistant: answer");
        assert_eq!(
            messages,
            vec![Message::new("user", ""), Message::new("assistant", "answer")]
        );
    }

    #[test]
    fn test_invalid_json_falls_back_to_text() {
        let messages = parse_export("{not json\nUser: still parsed");
        assert_eq!(messages, vec![Message::new("user", "still parsed")]);
    }

    #[test]
    fn test_empty_json_messages_fall_back_to_text() {
        // Valid JSON never has a line starting with a role prefix, so the
        // text pass over it finds nothing.
        assert!(parse_export(r#"{"messages": []}"#).is_empty());
        assert!(parse_export(r#"[{"role": "user"}]"#).is_empty());
        assert!(parse_export("{\"title\": \"x\",\n\"body\": \"User: quoted\"}").is_empty());
    }

    #[test]
    fn test_import_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("export.json");
        std::fs::write(&path, r#"[{"role": "user", "content": "from disk"}]"#).unwrap();

        let messages = ExportImporter::import_file(&path).unwrap();
        assert_eq!(messages, vec![Message::new("user", "from disk")]);
    }

    #[test]
    fn test_import_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = ExportImporter::import_file(&tmp.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, CaptureError::Io(_)));
    }

    #[test]
    fn test_import_reader() {
        let input = "User: piped\nAssistant: ok\n";
        let messages = ExportImporter::import_reader(input.as_bytes()).unwrap();
        assert_eq!(messages.len(), 2);
    }
}
