//! Environment configuration loaded from a commented JSON file.
//!
//! Environment files are JSON with `//` and `/* */` comments allowed, as the
//! surrounding tooling writes them. Comments are stripped by a small lexer
//! that tracks whether the cursor is inside a quoted string, so URL-like
//! values (`"https://..."`) survive intact.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Settings shared with the submission tooling. Only `ASSET_DIR` and
/// `UTC_OFFSET` feed the answer pipeline; the rest belong to the HTTP
/// collaborator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Environment {
    #[serde(rename = "BASE_URL", default)]
    pub base_url: Option<String>,
    #[serde(rename = "EMAIL", default)]
    pub email: Option<String>,
    #[serde(rename = "PASSWORD", default)]
    pub password: Option<String>,
    #[serde(rename = "ASSET_DIR", default)]
    pub asset_dir: Option<PathBuf>,
    #[serde(rename = "UTC_OFFSET", default)]
    pub utc_offset: Option<String>,
}

/// Loads an environment file, stripping comments before parsing.
pub fn load_environment(path: &Path) -> Result<Environment> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read environment file {}", path.display()))?;
    let stripped = strip_comments(&raw);
    serde_json::from_str(&stripped)
        .with_context(|| format!("parse environment file {}", path.display()))
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum LexState {
    Normal,
    InString { quote: char, escaped: bool },
    LineComment,
    BlockComment,
}

/// Removes `//` and `/* */` comments from JSON text.
///
/// Characters are classified as inside-string or outside-string first, so
/// comment-like sequences inside quoted values are never stripped. Line
/// comments keep their terminating newline.
pub fn strip_comments(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut state = LexState::Normal;
    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        match state {
            LexState::Normal => match ch {
                '"' | '\'' => {
                    state = LexState::InString {
                        quote: ch,
                        escaped: false,
                    };
                    output.push(ch);
                }
                '/' if chars.peek() == Some(&'/') => {
                    chars.next();
                    state = LexState::LineComment;
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    state = LexState::BlockComment;
                }
                _ => output.push(ch),
            },
            LexState::InString { quote, escaped } => {
                output.push(ch);
                if escaped {
                    state = LexState::InString {
                        quote,
                        escaped: false,
                    };
                } else if ch == '\\' {
                    state = LexState::InString {
                        quote,
                        escaped: true,
                    };
                } else if ch == quote {
                    state = LexState::Normal;
                }
            }
            LexState::LineComment => {
                if ch == '\n' {
                    output.push(ch);
                    state = LexState::Normal;
                }
            }
            LexState::BlockComment => {
                if ch == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    state = LexState::Normal;
                }
            }
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_line_and_block_comments() {
        let input = "{\n  // login target\n  \"BASE_URL\": \"x\", /* legacy */ \"EMAIL\": \"a@b\"\n}";
        let stripped = strip_comments(input);
        assert!(!stripped.contains("login target"));
        assert!(!stripped.contains("legacy"));
        let parsed: serde_json::Value = serde_json::from_str(&stripped).expect("valid json");
        assert_eq!(parsed["EMAIL"], "a@b");
    }

    #[test]
    fn preserves_slashes_inside_strings() {
        let input = "{\"BASE_URL\": \"https://api.example.com//v1\"} // trailing";
        let stripped = strip_comments(input);
        let parsed: serde_json::Value = serde_json::from_str(&stripped).expect("valid json");
        assert_eq!(parsed["BASE_URL"], "https://api.example.com//v1");
        assert!(!stripped.contains("trailing"));
    }

    #[test]
    fn handles_escaped_quotes_in_strings() {
        let input = "{\"NOTE\": \"say \\\"hi\\\" // not a comment\"}";
        let stripped = strip_comments(input);
        let parsed: serde_json::Value = serde_json::from_str(&stripped).expect("valid json");
        assert_eq!(parsed["NOTE"], "say \"hi\" // not a comment");
    }

    #[test]
    fn parses_environment_fields() {
        let stripped = strip_comments(
            "{\n  \"BASE_URL\": \"https://api.example.com\", // target\n  \
             \"ASSET_DIR\": \"answers/file\",\n  \"UTC_OFFSET\": \"+07:00\"\n}",
        );
        let environment: Environment = serde_json::from_str(&stripped).expect("parse");
        assert_eq!(
            environment.base_url.as_deref(),
            Some("https://api.example.com")
        );
        assert_eq!(
            environment.asset_dir,
            Some(PathBuf::from("answers/file"))
        );
        assert_eq!(environment.utc_offset.as_deref(), Some("+07:00"));
    }
}
