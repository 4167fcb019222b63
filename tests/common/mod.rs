use std::fs;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

use data_encoding::HEXLOWER;
use rand::Rng;

pub fn setup() {
    let results_dir_path = PathBuf::from_str("./target/results/").unwrap();

    if !results_dir_path.exists() {
        fs::create_dir_all(&results_dir_path).unwrap_or_else(|_|
            panic!("Failed to create results directory: {:?}", results_dir_path)
        );
    }
}

#[allow(dead_code)]
pub fn read_lines(path: PathBuf) -> Result<Vec<String>, anyhow::Error> {
    let reader = BufReader::new(File::open(path)?);
    let lines = reader.lines().map(|x| x.unwrap()).collect();
    Ok(lines)
}

#[allow(dead_code)]
pub fn temp_file_name(dir: &str) -> PathBuf {
    let mut result = PathBuf::from(dir);
    let name = HEXLOWER.encode(&rand::random::<[u8; 16]>());
    result.push(name);
    result
}

/// Write `count` random songs. Streams and playlist counts are drawn from small ranges so
/// that equal keys are common.
#[allow(dead_code)]
pub fn write_random_songs(path: &PathBuf, count: usize) -> Result<(), anyhow::Error> {
    let mut rng = rand::thread_rng();
    let artists = ["Taylor Swift", "Bad Bunny", "SZA", "The Weeknd", "Peso Pluma"];
    let mut writer = BufWriter::new(File::create(path)?);
    for i in 0..count {
        writeln!(
            writer,
            "track-{},{},1,{},{},{},{},{},{}",
            i,
            artists[rng.gen_range(0..artists.len())],
            rng.gen_range(2018..2024),
            rng.gen_range(1..13),
            rng.gen_range(1..29),
            rng.gen_range(0..100),
            rng.gen_range(0..1_000),
            rng.gen_range(0..50),
        )?;
    }
    writer.flush()?;
    Ok(())
}
