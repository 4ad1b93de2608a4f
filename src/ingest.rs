//! Load crime rows from comma-delimited text into a [`KDTree`].
//!
//! The expected layout, after a single header line, is
//! `X,Y,TIME,STREET,OFFENSE,DATE,TRACT,LAT,LON`. Fields past the ninth are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{error, info, warn};

use crate::error::{CrimeTreeError, Result};
use crate::kdtree::KDTree;
use crate::record::CrimeRecord;

/// The minimum number of comma-separated fields in a crime row.
pub const MIN_FIELDS: usize = 9;

/// The tree type produced by loading crime rows.
pub type CrimeTree = KDTree<f64, CrimeRecord>;

/// Counts from a single load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Rows inserted into the tree.
    pub loaded: usize,
    /// Non-blank rows that could not be parsed.
    pub skipped: usize,
}

/// Parse one data row into a record.
pub fn parse_row(line: &str) -> Result<CrimeRecord> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < MIN_FIELDS {
        return Err(CrimeTreeError::MalformedRow {
            line: line.to_string(),
            expected: MIN_FIELDS,
            found: fields.len(),
        });
    }

    let x = parse_field(fields[0], "x")?;
    let y = parse_field(fields[1], "y")?;
    let time = parse_field(fields[2], "time")?;

    Ok(CrimeRecord::new(
        x, y, time, fields[3], fields[4], fields[5], fields[6], fields[7], fields[8],
    ))
}

fn parse_field<V: std::str::FromStr>(value: &str, field: &'static str) -> Result<V> {
    value
        .trim()
        .parse()
        .map_err(|_| CrimeTreeError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

/// Insert every well-formed row of `reader` into `tree`.
///
/// The first line is a header and is skipped, as are blank lines. Rows that fail to parse are
/// logged and counted in [`LoadStats::skipped`]. Records are inserted as they are read, so if
/// reading fails part way the tree keeps everything before the failure.
pub fn load_from_reader<R: BufRead>(reader: R, tree: &mut CrimeTree) -> Result<LoadStats> {
    let mut stats = LoadStats::default();

    for line in reader.lines().skip(1) {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_row(&line) {
            Ok(record) => {
                tree.insert(record.x(), record.y(), record);
                stats.loaded += 1;
            }
            Err(err) => {
                warn!("Skipping crime row: {}", err);
                stats.skipped += 1;
            }
        }
    }

    Ok(stats)
}

/// Open the file at `path` and load it into `tree`.
pub fn load_from_path(path: impl AsRef<Path>, tree: &mut CrimeTree) -> Result<LoadStats> {
    let path = path.as_ref();
    info!("Loading crime data from {}", path.display());
    let file = File::open(path)?;
    let stats = load_from_reader(BufReader::new(file), tree)?;
    info!(
        "Crime file loaded into 2D tree with {} records ({} skipped)",
        stats.loaded, stats.skipped
    );
    Ok(stats)
}

/// Build a tree from the file at `path`, never failing.
///
/// An unreadable file is logged and yields whatever was inserted before the error, possibly an
/// empty tree.
pub fn load_or_empty(path: impl AsRef<Path>) -> CrimeTree {
    let path = path.as_ref();
    let mut tree = CrimeTree::new();
    if let Err(err) = load_from_path(path, &mut tree) {
        error!(
            "Error while loading crime data from {}: {}",
            path.display(),
            err
        );
    }
    tree
}
