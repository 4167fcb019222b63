//! This crate implements a small analysis pipeline for song data sets stored as delimited text
//! files, one song per line. For example the
//! [Top Spotify Songs 2023](https://www.kaggle.com/datasets/nelgiriyewithana/top-spotify-songs-2023)
//! data set exported without a header.
//!
//! A line holds 9 positional fields: `track_name`, `artist(s)_name`, `artist_count`,
//! `released_year`, `released_month`, `released_day`, `in_spotify_playlists`, `streams` and
//! `in_apple_playlists`. The pipeline reads the lines into a singly linked [LineList](line_list::LineList),
//! then
//! * filters them by artist, release year or stream count,
//! * sorts them with a stable merge sort by streams or playlist counts,
//! * keeps the first or last N lines of the ordering,
//! * and writes the release date, track, artists and sort key value as CSV.
//!
//! Lines travel between the stages as raw text. Each stage parses the fields it needs on demand.
//!
//! # Examples
//! ```no_run
//! use std::path::PathBuf;
//! use song_analyzer::analyzer::SongAnalyzer;
//! use song_analyzer::filter::Filter;
//! use song_analyzer::key::Key;
//! use song_analyzer::order::Order;
//!
//! // the 10 songs by Taylor Swift found in most Spotify playlists
//! fn taylor_swift_top_10(input: PathBuf, output: PathBuf) -> Result<(), anyhow::Error> {
//!     let mut song_analyzer = SongAnalyzer::new(input, output);
//!     song_analyzer.with_filter(Filter::new("ARTIST", "Taylor Swift"));
//!     song_analyzer.with_key(Key::SpotifyPlaylists);
//!     song_analyzer.with_order(Order::Desc);
//!     song_analyzer.with_limit(10);
//!     song_analyzer.analyze()
//! }
//! ```
//!

pub(crate) mod config;

pub mod analyzer;
pub mod field;
pub mod field_type;
pub mod filter;
pub mod formatter;
pub mod key;
pub mod limit;
pub mod line_list;
pub mod line_reader;
pub mod line_record;
pub mod order;
pub mod sort;
