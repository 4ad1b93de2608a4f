#![doc = include_str!("../README.md")]

pub mod collections;
mod error;
pub mod ingest;
pub mod kdtree;
pub mod kml;
pub mod list;
pub mod record;
mod r#type;

pub use error::{CrimeTreeError, Result};
pub use r#type::{Coord, CoordNum};

#[cfg(test)]
pub(crate) mod test;
