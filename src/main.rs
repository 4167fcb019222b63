use std::path::PathBuf;
use std::str::FromStr;

use anyhow::anyhow;
use clap::Parser;
use log::LevelFilter;
use regex::Regex;
use simple_logger::SimpleLogger;

use song_analyzer::analyzer::SongAnalyzer;
use song_analyzer::filter::Filter;
use song_analyzer::key::Key;
use song_analyzer::order::Order;

#[derive(Parser)]
#[command(name = "song-analyzer")]
#[command(about = "Filter, sort and limit song records and write them as CSV")]
struct Args {
    /// Input data file, one song per line without a header
    #[arg(long, default_value = "data.csv")]
    data: PathBuf,

    /// Output CSV file, replaced if it exists
    #[arg(long, default_value = "output.csv")]
    output: PathBuf,

    /// Field to filter on: ARTIST, YEAR or STREAMS. All songs are kept when omitted
    #[arg(long)]
    filter: Option<String>,

    /// Value for the filter. All songs are kept when omitted
    #[arg(long)]
    value: Option<String>,

    /// Field to order by: STREAMS, NO_SPOTIFY_PLAYLISTS or NO_APPLE_PLAYLISTS
    #[arg(long = "order_by")]
    order_by: String,

    /// ASC keeps the smallest values, DES the largest
    #[arg(long)]
    order: String,

    /// Number of songs to keep, all when omitted
    #[arg(long, allow_hyphen_values = true)]
    limit: Option<i64>,

    #[arg(long, default_value_t = ',')]
    separator: char,

    /// Skip lines matching this regex
    #[arg(long)]
    ignore_lines: Option<String>,

    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<(), anyhow::Error> {
    // usage errors exit 1 like every other error, help and version still exit 0
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if !e.use_stderr() => {
            e.print()?;
            return Ok(());
        }
        Err(e) => return Err(anyhow!("{}", e)),
    };
    let level = if args.verbose { LevelFilter::Info } else { LevelFilter::Warn };
    SimpleLogger::new().with_level(level).init()?;

    let key = Key::new(&args.order_by);
    if !key.is_supported() {
        return Err(anyhow!("Unsupported order_by: {}, expected STREAMS, NO_SPOTIFY_PLAYLISTS or NO_APPLE_PLAYLISTS", key));
    }
    let order = Order::from_str(&args.order)?;

    let mut song_analyzer = SongAnalyzer::new(args.data, args.output);
    song_analyzer.with_field_separator(args.separator);
    match (&args.filter, &args.value) {
        (Some(filter), Some(value)) => song_analyzer.with_filter(Filter::new(filter, value)),
        (Some(filter), None) => log::warn!("No value for filter {}, all songs are kept", filter),
        _ => {}
    }
    song_analyzer.with_key(key);
    song_analyzer.with_order(order);
    if let Some(limit) = args.limit {
        song_analyzer.with_limit(limit);
    }
    if let Some(ignore_lines) = &args.ignore_lines {
        song_analyzer.with_ignore_lines(Regex::new(ignore_lines)?);
    }
    song_analyzer.analyze()
}
