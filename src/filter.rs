use crate::line_list::LineList;
use crate::line_record::{parse_integer, LineRecord};

/// Filter predicate, a record field and a target value.
///
/// # Examples
/// ```
/// use song_analyzer::filter::Filter;
/// use song_analyzer::line_record::LineRecord;
///
/// let record = LineRecord::new("Kill Bill,SZA,1,2022,12,8,8109,1163093654,77", ',');
/// assert!(Filter::new("ARTIST", "SZ").matches(&record));
/// assert!(Filter::new("YEAR", "2022").matches(&record));
/// assert!(!Filter::new("GENRE", "R&B").matches(&record));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    /// Every record matches
    All,
    /// The artist names contain the value
    Artist(String),
    /// The release year equals the value
    Year(i32),
    /// The stream count equals the value
    Streams(i64),
    /// Filtering on an unknown field, no record matches
    Unsupported(String),
}

impl Filter {
    /// Create a filter for the `field` token (`ARTIST`, `YEAR` or `STREAMS`) and `value`.
    ///
    /// Integer values are parsed leniently, an unparsable value is 0.
    pub fn new(field: &str, value: &str) -> Filter {
        match field {
            "ARTIST" => Filter::Artist(value.to_string()),
            "YEAR" => Filter::Year(parse_integer(value)),
            "STREAMS" => Filter::Streams(parse_integer(value)),
            _ => Filter::Unsupported(field.to_string()),
        }
    }

    pub fn matches(&self, record: &LineRecord) -> bool {
        match self {
            Filter::All => true,
            Filter::Artist(artist) => record.artist_names().contains(artist.as_str()),
            Filter::Year(year) => record.released_year() == *year,
            Filter::Streams(streams) => record.streams() == *streams,
            Filter::Unsupported(_) => false,
        }
    }
}

/// Keep the lines whose record matches `predicate`, preserving their order.
///
/// The input list is consumed. Matching lines move into a new list, the rest are released.
pub fn filter(lines: LineList, predicate: &Filter, field_separator: char) -> LineList {
    if let Filter::Unsupported(field) = predicate {
        log::warn!("Unsupported filter field: {}, no lines will match", field);
    }

    let filtered: LineList = lines
        .into_iter()
        .filter(|line| predicate.matches(&LineRecord::new(line, field_separator)))
        .collect();
    log::info!("Filter {:?} kept {} lines", predicate, filtered.len());
    filtered
}
