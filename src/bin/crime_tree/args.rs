//! Command-line argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Explore crime incidents with a 2-d tree
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Crime data file
    ///
    /// Comma-delimited, with one header line followed by
    /// X,Y,TIME,STREET,OFFENSE,DATE,TRACT,LAT,LON rows.
    #[arg(long, default_value = "CrimeLatLonXY.csv")]
    pub data: PathBuf,

    /// KML output file
    ///
    /// Written on every rectangle search that finds at least one crime.
    #[arg(long, default_value = "PGHCrimes.kml")]
    pub kml: PathBuf,

    /// Enable debug logging
    ///
    /// Ignored when `RUST_LOG` is set.
    #[arg(short, long)]
    pub debug: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            data: PathBuf::from("CrimeLatLonXY.csv"),
            kml: PathBuf::from("PGHCrimes.kml"),
            debug: false,
        }
    }
}
