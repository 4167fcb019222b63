use std::fmt::{Display, Formatter};

use crate::field::Field;
use crate::line_record::LineRecord;

/// Sort key field.
///
/// Selects the integer field the lines are ordered by and named after in the output. An
/// unknown token is kept as [Key::Unsupported]: every line then has the key 0, so a stable sort
/// leaves the order unchanged.
///
/// # Examples
/// ```
/// use song_analyzer::key::Key;
///
/// assert_eq!(Key::new("NO_APPLE_PLAYLISTS"), Key::ApplePlaylists);
/// assert_eq!(Key::new("STREAMS").column_name(), "streams");
/// assert!(!Key::new("BPM").is_supported());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// `STREAMS`
    Streams,
    /// `NO_SPOTIFY_PLAYLISTS`
    SpotifyPlaylists,
    /// `NO_APPLE_PLAYLISTS`
    ApplePlaylists,
    /// Any other token
    Unsupported(String),
}

impl Key {
    pub fn new(token: &str) -> Key {
        match token {
            "STREAMS" => Key::Streams,
            "NO_SPOTIFY_PLAYLISTS" => Key::SpotifyPlaylists,
            "NO_APPLE_PLAYLISTS" => Key::ApplePlaylists,
            _ => Key::Unsupported(token.to_string())
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Key::Unsupported(_))
    }

    /// Get the record [Field] this key reads.
    pub fn field(&self) -> Option<Field> {
        match self {
            Key::Streams => Some(Field::Streams),
            Key::SpotifyPlaylists => Some(Field::InSpotifyPlaylists),
            Key::ApplePlaylists => Some(Field::InApplePlaylists),
            Key::Unsupported(_) => None,
        }
    }

    /// Get the output column name, empty for an unsupported key.
    pub fn column_name(&self) -> &'static str {
        self.field().map(|field| field.name()).unwrap_or_default()
    }

    /// Get the key value of a record.
    pub fn value(&self, record: &LineRecord) -> i64 {
        self.field()
            .and_then(|field| record.value_of(field))
            .unwrap_or(0)
    }

    /// Parse `line` and get its key value.
    pub fn line_value(&self, line: &str, field_separator: char) -> i64 {
        match self {
            Key::Unsupported(_) => 0,
            _ => self.value(&LineRecord::new(line, field_separator)),
        }
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Streams => write!(f, "STREAMS"),
            Key::SpotifyPlaylists => write!(f, "NO_SPOTIFY_PLAYLISTS"),
            Key::ApplePlaylists => write!(f, "NO_APPLE_PLAYLISTS"),
            Key::Unsupported(token) => write!(f, "{}", token),
        }
    }
}
