use crate::field_type::FieldType;

/// Defines a positional field in a song line record.
///
/// A song line is composed of 9 comma separated fields in a fixed order. The [Field] is used to
/// look up a value in a parsed [LineRecord](crate::line_record::LineRecord) and to name columns
/// in the output.
///
/// # Examples
/// ```
/// use song_analyzer::field::Field;
/// use song_analyzer::field_type::FieldType;
///
/// assert_eq!(Field::Streams.index(), 8);
/// assert_eq!(Field::Streams.name(), "streams");
/// assert_eq!(Field::Streams.field_type(), FieldType::Integer);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    TrackName,
    ArtistNames,
    ArtistCount,
    ReleasedYear,
    ReleasedMonth,
    ReleasedDay,
    InSpotifyPlaylists,
    Streams,
    InApplePlaylists,
}

impl Field {
    /// All fields in the order they appear in a line
    pub const ALL: [Field; 9] = [
        Field::TrackName,
        Field::ArtistNames,
        Field::ArtistCount,
        Field::ReleasedYear,
        Field::ReleasedMonth,
        Field::ReleasedDay,
        Field::InSpotifyPlaylists,
        Field::Streams,
        Field::InApplePlaylists,
    ];

    /// Get the index of this field in a line, starting at 1.
    pub fn index(&self) -> usize {
        match self {
            Field::TrackName => 1,
            Field::ArtistNames => 2,
            Field::ArtistCount => 3,
            Field::ReleasedYear => 4,
            Field::ReleasedMonth => 5,
            Field::ReleasedDay => 6,
            Field::InSpotifyPlaylists => 7,
            Field::Streams => 8,
            Field::InApplePlaylists => 9,
        }
    }

    /// Get the column name for this field, as used in the data set header.
    pub fn name(&self) -> &'static str {
        match self {
            Field::TrackName => "track_name",
            Field::ArtistNames => "artist(s)_name",
            Field::ArtistCount => "artist_count",
            Field::ReleasedYear => "released_year",
            Field::ReleasedMonth => "released_month",
            Field::ReleasedDay => "released_day",
            Field::InSpotifyPlaylists => "in_spotify_playlists",
            Field::Streams => "streams",
            Field::InApplePlaylists => "in_apple_playlists",
        }
    }

    /// Get the [FieldType] for this field.
    pub fn field_type(&self) -> FieldType {
        match self {
            Field::TrackName | Field::ArtistNames => FieldType::String,
            _ => FieldType::Integer,
        }
    }
}
