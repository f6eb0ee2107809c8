//! Event name decoding.
//!
//! Event names are hyphen-delimited: `<command>-<file...>-<marker>-<test...>`.
//! The file name may itself contain hyphens, so file tokens are accumulated
//! until the first token of at most [`MAX_MARKER_LEN`] characters. That token
//! is the marker: its first character is the open mode and its optional second
//! character is the compression level.
//!
//! ```text
//! minigzip-paper-100k.pdf-w6-roundtrip-default
//! ^cmd     ^file-------------^marker ^test------
//! ```

/// Tokens longer than this are part of the file name.
pub const MAX_MARKER_LEN: usize = 2;

const DELIMITER: char = '-';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub open_mode: Option<char>,
    pub compression_level: Option<char>,
}

impl Marker {
    fn from_token(token: &str) -> Self {
        let mut chars = token.chars();
        Marker {
            open_mode: chars.next(),
            compression_level: chars.next(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventNameParts {
    pub command: String,
    pub file: String,
    /// `None` when no token after the command is short enough to be a marker.
    pub marker: Option<Marker>,
    pub test: String,
}

impl EventNameParts {
    pub fn parse(event_name: &str) -> Self {
        let tokens: Vec<&str> = event_name.split(DELIMITER).collect();
        let command = tokens.first().copied().unwrap_or_default().to_string();
        let rest = tokens.get(1..).unwrap_or_default();

        let marker_idx = rest
            .iter()
            .position(|token| token.chars().count() <= MAX_MARKER_LEN);

        match marker_idx {
            Some(idx) => EventNameParts {
                command,
                file: rest[..idx].join("-"),
                marker: Some(Marker::from_token(rest[idx])),
                test: rest[idx + 1..].join(" "),
            },
            None => EventNameParts {
                command,
                file: rest.join("-"),
                marker: None,
                test: String::new(),
            },
        }
    }

    pub fn open_mode(&self) -> Option<char> {
        self.marker.as_ref().and_then(|m| m.open_mode)
    }

    pub fn compression_level(&self) -> Option<char> {
        self.marker.as_ref().and_then(|m| m.compression_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        "minigzip-paper-100k.pdf-w6-roundtrip-default",
        "minigzip",
        "paper-100k.pdf",
        Some('w'),
        Some('6'),
        "roundtrip default"
    )]
    #[case("deflate-alice29.txt-r-decompress", "deflate", "alice29.txt", Some('r'), None, "decompress")]
    #[case("compress-myfile-wb", "compress", "myfile", Some('w'), Some('b'), "")]
    #[case("inflate-w9-stream", "inflate", "", Some('w'), Some('9'), "stream")]
    #[case("gzip-data.bin-w1-level-one-check", "gzip", "data.bin", Some('w'), Some('1'), "level one check")]
    fn test_parse_with_marker(
        #[case] name: &str,
        #[case] command: &str,
        #[case] file: &str,
        #[case] open_mode: Option<char>,
        #[case] level: Option<char>,
        #[case] test: &str,
    ) {
        let parts = EventNameParts::parse(name);
        assert_eq!(parts.command, command);
        assert_eq!(parts.file, file);
        assert_eq!(parts.open_mode(), open_mode);
        assert_eq!(parts.compression_level(), level);
        assert_eq!(parts.test, test);
    }

    #[test]
    fn test_no_marker_token() {
        // "gz5" is three characters, so it belongs to the file name.
        let parts = EventNameParts::parse("compress-myfile-gz5-roundtrip test");
        assert_eq!(parts.command, "compress");
        assert_eq!(parts.file, "myfile-gz5-roundtrip test");
        assert_eq!(parts.marker, None);
        assert_eq!(parts.open_mode(), None);
        assert_eq!(parts.compression_level(), None);
        assert_eq!(parts.test, "");
    }

    #[test]
    fn test_command_only() {
        let parts = EventNameParts::parse("benchmark");
        assert_eq!(parts.command, "benchmark");
        assert_eq!(parts.file, "");
        assert_eq!(parts.marker, None);
        assert_eq!(parts.test, "");
    }

    #[test]
    fn test_empty_marker_token() {
        let parts = EventNameParts::parse("inflate-stream.bin--tail");
        assert_eq!(parts.file, "stream.bin");
        assert_eq!(
            parts.marker,
            Some(Marker {
                open_mode: None,
                compression_level: None
            })
        );
        assert_eq!(parts.test, "tail");
    }

    #[test]
    fn test_empty_event_name() {
        let parts = EventNameParts::parse("");
        assert_eq!(parts.command, "");
        assert_eq!(parts.file, "");
        assert_eq!(parts.marker, None);
    }

    #[test]
    fn test_marker_length_counts_characters() {
        // Two characters, four bytes.
        let parts = EventNameParts::parse("x-file.txt-éü-rest");
        assert_eq!(parts.file, "file.txt");
        assert_eq!(parts.open_mode(), Some('é'));
        assert_eq!(parts.compression_level(), Some('ü'));
        assert_eq!(parts.test, "rest");
    }
}
