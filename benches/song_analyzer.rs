use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Error};
use benchmark_rs::benchmarks::Benchmarks;
use benchmark_rs::stopwatch::StopWatch;
use data_encoding::HEXLOWER;
use rand::Rng;
use simple_logger::SimpleLogger;

use song_analyzer::analyzer::SongAnalyzer;
use song_analyzer::filter::Filter;
use song_analyzer::key::Key;
use song_analyzer::order::Order;

use tikv_jemallocator::Jemalloc;
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

#[derive(Clone)]
pub struct BenchmarkConfig {
    files: BTreeMap<usize, PathBuf>,
    bench_results_dir: PathBuf,
    filter: Filter,
    key: Key,
    order: Order,
    limit: Option<i64>,
    description: String,
}

impl BenchmarkConfig {
    pub fn new(files: BTreeMap<usize, PathBuf>, bench_results_dir: PathBuf, filter: Filter, key: Key, order: Order, limit: Option<i64>, description: &str) -> BenchmarkConfig {
        BenchmarkConfig {
            files,
            bench_results_dir,
            filter,
            key,
            order,
            limit,
            description: description.to_string(),
        }
    }

    pub fn get_input_path(&self, key: usize) -> PathBuf {
        self.files.get(&key).unwrap().clone()
    }

    pub fn bench_results_dir(&self) -> &PathBuf {
        &self.bench_results_dir
    }
}

impl Display for BenchmarkConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "filter: {:?}, key: {}, order: {}, limit: {:?}, description: {}",
                 self.filter,
                 self.key,
                 self.order,
                 self.limit,
                 self.description,
        )
    }
}

fn temp_file_name(dir: &PathBuf) -> PathBuf {
    let mut result = PathBuf::from(dir);
    let name = HEXLOWER.encode(&rand::random::<[u8; 16]>());
    result.push(name);
    result
}

fn setup(bench_input_dir: &PathBuf, bench_results_dir: &PathBuf) -> Result<(), anyhow::Error> {
    if bench_results_dir.exists() {
        fs::remove_dir_all(bench_results_dir.clone())
            .with_context(|| anyhow!("{}", bench_results_dir.to_string_lossy()))?;
    }

    for dir in [bench_input_dir, bench_results_dir] {
        if !dir.exists() {
            fs::create_dir_all(dir.clone())
                .with_context(|| anyhow!("{}", dir.to_string_lossy()))?;
        }
    }
    Ok(())
}

fn create_input_files(count: usize, factor: usize, base_path: PathBuf) -> Result<BTreeMap<usize, PathBuf>, anyhow::Error> {
    let artists = ["Taylor Swift", "Bad Bunny", "SZA", "The Weeknd", "Peso Pluma", "Harry Styles"];
    let mut rng = rand::thread_rng();
    let mut files: BTreeMap<usize, PathBuf> = BTreeMap::new();
    for i in 1..=count {
        let number_of_lines = i * factor;
        let path = base_path.join(PathBuf::from(format!("songs-{}.csv", number_of_lines)));
        if !path.exists() {
            let mut writer = BufWriter::new(
                File::create(&path)
                    .with_context(|| anyhow!("path: {}", path.to_string_lossy()))?);
            for j in 0..number_of_lines {
                writeln!(
                    writer,
                    "track-{},{},1,{},{},{},{},{},{}",
                    j,
                    artists[rng.gen_range(0..artists.len())],
                    rng.gen_range(1990..2024),
                    rng.gen_range(1..13),
                    rng.gen_range(1..29),
                    rng.gen_range(0..50_000),
                    rng.gen_range(0..4_000_000_000_i64),
                    rng.gen_range(0..700),
                )?;
            }
        }
        files.insert(number_of_lines, path);
    }
    Ok(files)
}

fn analyze(stop_watch: &mut StopWatch, config: BenchmarkConfig, work: usize) -> Result<(), anyhow::Error> {
    stop_watch.pause();
    let input_path = config.get_input_path(work);
    let output_path = temp_file_name(config.bench_results_dir());
    log::info!("Start analyzing {}", input_path.to_string_lossy());
    stop_watch.resume();
    let mut song_analyzer = SongAnalyzer::new(input_path.clone(), output_path.clone());
    song_analyzer.with_filter(config.filter.clone());
    song_analyzer.with_key(config.key.clone());
    song_analyzer.with_order(config.order);
    if let Some(limit) = config.limit {
        song_analyzer.with_limit(limit);
    }
    song_analyzer.analyze()?;
    stop_watch.pause();
    log::info!("Finish analyzing {}", input_path.to_string_lossy());
    fs::remove_file(output_path.clone())
        .with_context(|| anyhow!("{}", output_path.to_string_lossy()))?;
    Ok(())
}

#[test]
fn song_analyzer_bench() -> Result<(), Error> {
    SimpleLogger::new().init().unwrap();
    log::info!("Started song_analyzer_bench.");

    let bench_input_dir = PathBuf::from("./target/benchmarks/input");
    let bench_results_dir = PathBuf::from("./target/benchmarks/results");
    setup(&bench_input_dir, &bench_results_dir)?;

    let files = create_input_files(10, 20_000, bench_input_dir.clone())?;
    let work: Vec<usize> = files.keys().cloned().collect();

    let mut benchmarks = Benchmarks::new("song-analyzer");

    benchmarks.add(
        "all-streams-asc",
        analyze,
        BenchmarkConfig::new(
            files.clone(),
            bench_results_dir.clone(),
            Filter::All,
            Key::Streams,
            Order::Asc,
            None,
            "sort every line by streams",
        ),
        work.clone(),
        3,
        0,
    )?;

    benchmarks.add(
        "all-spotify-des-100",
        analyze,
        BenchmarkConfig::new(
            files.clone(),
            bench_results_dir.clone(),
            Filter::All,
            Key::SpotifyPlaylists,
            Order::Desc,
            Some(100),
            "top 100 by spotify playlists",
        ),
        work.clone(),
        3,
        0,
    )?;

    benchmarks.add(
        "artist-apple-asc-10",
        analyze,
        BenchmarkConfig::new(
            files.clone(),
            bench_results_dir.clone(),
            Filter::new("ARTIST", "Taylor Swift"),
            Key::ApplePlaylists,
            Order::Asc,
            Some(10),
            "one artist, bottom 10 by apple playlists",
        ),
        work.clone(),
        3,
        0,
    )?;

    benchmarks.add(
        "year-streams-des",
        analyze,
        BenchmarkConfig::new(
            files.clone(),
            bench_results_dir.clone(),
            Filter::new("YEAR", "2020"),
            Key::Streams,
            Order::Desc,
            None,
            "one year, all lines by streams descending",
        ),
        work,
        3,
        0,
    )?;

    benchmarks.run()?;
    benchmarks.save_to_csv(PathBuf::from("./target/benchmarks/"), true, true)?;
    benchmarks.save_to_json(PathBuf::from("./target/benchmarks/"))?;
    Ok(())
}
