use std::path::PathBuf;

use regex::Regex;

use crate::config::Config;
use crate::filter::{filter, Filter};
use crate::formatter::{format, write_output};
use crate::key::Key;
use crate::limit::limit;
use crate::line_list::LineList;
use crate::line_reader::read_lines;
use crate::order::Order;
use crate::sort::{is_sorted, sort};

/// Filter, sort and limit the song lines of a text file and write them as CSV.
///
/// # Examples
/// ```no_run
/// use std::path::PathBuf;
/// use song_analyzer::analyzer::SongAnalyzer;
/// use song_analyzer::filter::Filter;
/// use song_analyzer::key::Key;
/// use song_analyzer::order::Order;
///
/// // the 5 most streamed songs of 2023
/// fn top_streams(input: PathBuf, output: PathBuf) -> Result<(), anyhow::Error> {
///     let mut song_analyzer = SongAnalyzer::new(input, output);
///     song_analyzer.with_filter(Filter::new("YEAR", "2023"));
///     song_analyzer.with_key(Key::Streams);
///     song_analyzer.with_order(Order::Desc);
///     song_analyzer.with_limit(5);
///     song_analyzer.analyze()
/// }
/// ```
pub struct SongAnalyzer {
    input: PathBuf,
    output: PathBuf,
    field_separator: char,
    ignore_lines: Option<Regex>,
    filter: Filter,
    key: Key,
    order: Order,
    limit: Option<i64>,
}

impl SongAnalyzer {
    /// Create a default SongAnalyzer definition.
    ///
    /// * The default field separator is a comma (',')
    /// * blank lines are ignored, no other lines are
    /// * all lines pass the filter
    /// * lines are sorted by [Key::Streams]
    /// * default [Order] is Asc
    /// * no limit, all lines are written
    pub fn new(input: PathBuf, output: PathBuf) -> SongAnalyzer {
        SongAnalyzer {
            input,
            output,
            field_separator: ',',
            ignore_lines: None,
            filter: Filter::All,
            key: Key::Streams,
            order: Order::Asc,
            limit: None,
        }
    }

    /// Set the field separator. The default is ','
    pub fn with_field_separator(&mut self, field_separator: char) {
        self.field_separator = field_separator
    }

    /// Specify which lines to ignore. Each line matching the regex will be ignored and will not
    /// appear in the output.
    pub fn with_ignore_lines(&mut self, r: Regex) {
        self.ignore_lines = Some(r)
    }

    /// Set the [Filter]. The default is [Filter::All]
    pub fn with_filter(&mut self, filter: Filter) {
        self.filter = filter
    }

    /// Set the sort [Key]. The output column follows the key
    pub fn with_key(&mut self, key: Key) {
        self.key = key
    }

    /// Set [Order]
    pub fn with_order(&mut self, order: Order) {
        self.order = order
    }

    /// Keep at most `limit` lines
    pub fn with_limit(&mut self, limit: i64) {
        self.limit = Some(limit)
    }

    /// Read the input, filter, sort and limit it and write the CSV output.
    pub fn analyze(&self) -> Result<(), anyhow::Error> {
        let config = self.create_config();
        log::debug!("Analyze {} into {}, config: {:?}", self.input.display(), self.output.display(), config);
        let lines = read_lines(&self.input, config.ignore_lines().clone())?;
        let limited = Self::internal_process(lines, &config);
        let csv = format(limited, config.key(), config.field_separator())?;
        write_output(&self.output, &csv)?;
        Ok(())
    }

    /// Filter, sort and limit `lines` in memory.
    pub fn process(&self, lines: LineList) -> LineList {
        let config = self.create_config();
        Self::internal_process(lines, &config)
    }

    /// Check whether the input lines are already in ascending key order.
    pub fn check(&self) -> Result<bool, anyhow::Error> {
        let config = self.create_config();
        let lines = read_lines(&self.input, config.ignore_lines().clone())?;
        Ok(is_sorted(&lines, config.key(), config.field_separator()))
    }

    fn create_config(&self) -> Config {
        Config::new(
            self.field_separator,
            self.ignore_lines.clone(),
            self.filter.clone(),
            self.key.clone(),
            self.order,
            self.limit,
        )
    }

    fn internal_process(lines: LineList, config: &Config) -> LineList {
        let filtered = filter(lines, config.filter(), config.field_separator());
        let sorted = sort(filtered, config.key(), config.field_separator());
        limit(sorted, config.order(), config.limit())
    }
}
