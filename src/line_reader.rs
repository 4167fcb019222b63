use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use regex::Regex;

use crate::line_list::LineList;

/// Iterate over the non blank lines of a text file.
///
/// The line ending (`\n` or `\r\n`) is stripped. Lines that are empty or consist only of
/// whitespace are skipped, as are lines matching the optional `ignore_lines` regex. Bytes that
/// are not valid UTF-8 are replaced rather than failing the read.
pub struct LineReader {
    path: PathBuf,
    reader: BufReader<File>,
    buffer: Vec<u8>,
    line_number: usize,
    ignore_lines: Option<Regex>,
}

impl LineReader {
    pub fn new(path: &Path, ignore_lines: Option<Regex>) -> Result<LineReader, anyhow::Error> {
        let file = File::open(path)
            .with_context(|| anyhow!("path: {}", path.display()))?;

        Ok(
            LineReader {
                path: path.to_path_buf(),
                reader: BufReader::new(file),
                buffer: Vec::new(),
                line_number: 0,
                ignore_lines,
            }
        )
    }

    fn is_skipped(&self, line: &str) -> bool {
        if line.trim().is_empty() {
            return true;
        }

        match &self.ignore_lines {
            Some(r) => r.is_match(line.trim()),
            None => false,
        }
    }
}

impl Iterator for LineReader {
    type Item = Result<String, anyhow::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buffer.clear();
            match self.reader.read_until(b'\n', &mut self.buffer) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_number += 1;
                    let text = String::from_utf8_lossy(&self.buffer);
                    let line = text.trim_end_matches(['\n', '\r']);
                    if !self.is_skipped(line) {
                        return Some(Ok(line.to_string()));
                    }
                }
                Err(e) => {
                    return Some(
                        Err(anyhow::Error::new(e).context(format!("path: {}, line: {}", self.path.display(), self.line_number + 1)))
                    );
                }
            }
        }
    }
}

/// Load all lines of the file at `path` into a [LineList], in file order.
///
/// Fails without a partial result when the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use std::path::PathBuf;
/// use song_analyzer::line_reader::read_lines;
///
/// fn count(path: PathBuf) -> Result<usize, anyhow::Error> {
///     let lines = read_lines(&path, None)?;
///     Ok(lines.len())
/// }
/// ```
pub fn read_lines(path: &Path, ignore_lines: Option<Regex>) -> Result<LineList, anyhow::Error> {
    let lines = LineReader::new(path, ignore_lines)?.collect::<Result<LineList, anyhow::Error>>()?;
    log::info!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}
