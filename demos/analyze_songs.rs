use std::path::{Path, PathBuf};

use anyhow::Error;
use song_analyzer::analyzer::SongAnalyzer;
use song_analyzer::filter::Filter;
use song_analyzer::key::Key;
use song_analyzer::order::Order;

fn most_streamed(input_path: &Path, output_path: &Path) -> Result<(), Error> {
    // streams and ascending order are the defaults
    let mut song_analyzer = SongAnalyzer::new(input_path.to_path_buf(), output_path.to_path_buf());
    song_analyzer.with_order(Order::Desc);
    song_analyzer.with_limit(5);
    song_analyzer.analyze()
}

fn artist_by_spotify_playlists(input_path: &Path, output_path: &Path) -> Result<(), Error> {
    let mut song_analyzer = SongAnalyzer::new(input_path.to_path_buf(), output_path.to_path_buf());
    song_analyzer.with_filter(Filter::new("ARTIST", "Taylor Swift"));
    song_analyzer.with_key(Key::SpotifyPlaylists);
    song_analyzer.analyze()
}

fn year_least_in_apple_playlists(input_path: &Path, output_path: &Path) -> Result<(), Error> {
    let mut song_analyzer = SongAnalyzer::new(input_path.to_path_buf(), output_path.to_path_buf());
    song_analyzer.with_filter(Filter::new("YEAR", "2023"));
    song_analyzer.with_key(Key::ApplePlaylists);
    song_analyzer.with_limit(3);
    song_analyzer.analyze()
}

// cargo run -r --example analyze_songs
pub fn main() -> Result<(), Error> {
    let input_path = PathBuf::from("./tests/fixtures/songs-20.csv");
    let most_streamed_path = PathBuf::from("./target/most-streamed.csv");
    let artist_path = PathBuf::from("./target/taylor-swift-spotify.csv");
    let year_path = PathBuf::from("./target/2023-apple.csv");

    most_streamed(&input_path, &most_streamed_path)?;
    artist_by_spotify_playlists(&input_path, &artist_path)?;
    year_least_in_apple_playlists(&input_path, &year_path)?;

    Ok(())
}
