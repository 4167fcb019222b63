use std::fmt::Write as _;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use tempfile::Builder;

use crate::key::Key;
use crate::line_list::LineList;
use crate::line_record::LineRecord;

/// Render lines as CSV with the release date, track name, artists and the `key` value.
///
/// The header names the column of the sort key. Dates are written as `year-month-day` without
/// zero padding. The list is released once rendered.
///
/// # Examples
/// ```
/// use song_analyzer::formatter::format;
/// use song_analyzer::key::Key;
/// use song_analyzer::line_list::LineList;
///
/// let lines: LineList = vec!["A,Artist1,1,2021,5,1,100,1000,50".to_string()].into_iter().collect();
/// let csv = format(lines, &Key::Streams, ',')?;
/// assert_eq!(csv, "released,track_name,artist(s)_name,streams\n2021-5-1,A,Artist1,1000\n");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format(lines: LineList, key: &Key, field_separator: char) -> Result<String, anyhow::Error> {
    let mut output = String::new();
    writeln!(output, "released,track_name,artist(s)_name,{}", key.column_name())?;
    for line in &lines {
        let record = LineRecord::new(line, field_separator);
        writeln!(
            output,
            "{}-{}-{},{},{},{}",
            record.released_year(),
            record.released_month(),
            record.released_day(),
            record.track_name(),
            record.artist_names(),
            key.value(&record),
        )?;
    }
    Ok(output)
}

/// Write `contents` to `path`, replacing an existing file.
///
/// The contents go to a temporary file in the same directory first, which is then renamed over
/// `path`, so a failed write leaves the previous file in place.
pub fn write_output(path: &Path, contents: &str) -> Result<(), anyhow::Error> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let mut tmp_file = Builder::new()
        .prefix("output-")
        .suffix(".tmp")
        .tempfile_in(&dir)
        .with_context(|| anyhow!("Failed to create temp file in {}", dir.display()))?;

    {
        let mut writer = BufWriter::new(&mut tmp_file);
        writer.write_all(contents.as_bytes())?;
        writer.flush()?;
    }

    tmp_file.persist(path)
        .with_context(|| anyhow!("Persist {}", path.display()))?;
    log::info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
