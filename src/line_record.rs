use std::str::FromStr;

use crate::field::Field;

// a streams value longer than this is garbage from a broken row in the data set
const MAX_STREAMS_LEN: usize = 30;

/// A song record parsed from a single line.
///
/// The record is a view over the line and is never kept between pipeline stages. Each stage
/// that needs field values parses the line again.
///
/// Missing trailing fields are empty for text fields and 0 for integer fields, fields after the
/// 9th are ignored. There is no quoting, a separator inside a field shifts all following fields.
///
/// # Examples
/// ```
/// use song_analyzer::line_record::LineRecord;
///
/// let record = LineRecord::new("A,Artist1,1,2021,5,1,100,1000,50", ',');
/// assert_eq!(record.track_name(), "A");
/// assert_eq!(record.streams(), 1000);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineRecord {
    track_name: String,
    artist_names: String,
    artist_count: i32,
    released_year: i32,
    released_month: i32,
    released_day: i32,
    in_spotify_playlists: i32,
    streams: i64,
    in_apple_playlists: i32,
}

impl LineRecord {
    /// Parse `line` into a record using `field_separator` between fields.
    pub fn new(line: &str, field_separator: char) -> LineRecord {
        let mut parts = line.split(field_separator);
        let mut next = || parts.next().unwrap_or("");

        let track_name = next().to_string();
        let artist_names = next().to_string();
        let artist_count = parse_integer(next());
        let released_year = parse_integer(next());
        let released_month = parse_integer(next());
        let released_day = parse_integer(next());
        let in_spotify_playlists = parse_integer(next());
        let streams_text = next();
        let streams = if streams_text.len() > MAX_STREAMS_LEN {
            0
        } else {
            parse_integer(streams_text)
        };
        let in_apple_playlists = parse_integer(next());

        LineRecord {
            track_name,
            artist_names,
            artist_count,
            released_year,
            released_month,
            released_day,
            in_spotify_playlists,
            streams,
            in_apple_playlists,
        }
    }

    pub fn track_name(&self) -> &str {
        &self.track_name
    }

    pub fn artist_names(&self) -> &str {
        &self.artist_names
    }

    pub fn artist_count(&self) -> i32 {
        self.artist_count
    }

    pub fn released_year(&self) -> i32 {
        self.released_year
    }

    pub fn released_month(&self) -> i32 {
        self.released_month
    }

    pub fn released_day(&self) -> i32 {
        self.released_day
    }

    pub fn in_spotify_playlists(&self) -> i32 {
        self.in_spotify_playlists
    }

    pub fn streams(&self) -> i64 {
        self.streams
    }

    pub fn in_apple_playlists(&self) -> i32 {
        self.in_apple_playlists
    }

    /// Get the value of an integer field, None for text fields.
    pub fn value_of(&self, field: Field) -> Option<i64> {
        match field {
            Field::TrackName | Field::ArtistNames => None,
            Field::ArtistCount => Some(self.artist_count as i64),
            Field::ReleasedYear => Some(self.released_year as i64),
            Field::ReleasedMonth => Some(self.released_month as i64),
            Field::ReleasedDay => Some(self.released_day as i64),
            Field::InSpotifyPlaylists => Some(self.in_spotify_playlists as i64),
            Field::Streams => Some(self.streams),
            Field::InApplePlaylists => Some(self.in_apple_playlists as i64),
        }
    }
}

/// Parse the leading integer of `text`.
///
/// Leading blanks and an optional sign are accepted, parsing stops at the first non digit.
/// Text without leading digits, or a value that does not fit `T`, yields 0.
pub(crate) fn parse_integer<T: FromStr + Default>(text: &str) -> T {
    let text = text.trim_start();
    let sign_len = usize::from(text.starts_with(['+', '-']));
    let digits = text[sign_len..]
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    text[..sign_len + digits].parse::<T>().unwrap_or_default()
}
