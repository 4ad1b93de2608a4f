//! The crime incident record stored in each tree node.

use std::fmt;

use crate::r#type::Coord;

/// A single crime incident.
///
/// `x` and `y` are the planar coordinates the tree is keyed on. Every other field is carried
/// through untouched; in particular `latitude` and `longitude` stay in their source text form so
/// they can be exported verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct CrimeRecord {
    x: f64,
    y: f64,
    time: i32,
    street: String,
    offense: String,
    date: String,
    tract: String,
    latitude: String,
    longitude: String,
}

impl CrimeRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x: f64,
        y: f64,
        time: i32,
        street: impl Into<String>,
        offense: impl Into<String>,
        date: impl Into<String>,
        tract: impl Into<String>,
        latitude: impl Into<String>,
        longitude: impl Into<String>,
    ) -> Self {
        Self {
            x,
            y,
            time,
            street: street.into(),
            offense: offense.into(),
            date: date.into(),
            tract: tract.into(),
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// The planar coordinate this record is indexed by.
    pub fn coord(&self) -> Coord<f64> {
        Coord::new(self.x, self.y)
    }

    /// Time of day on a 24h clock, e.g. `1330`.
    pub fn time(&self) -> i32 {
        self.time
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn offense(&self) -> &str {
        &self.offense
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// Census tract identifier.
    pub fn tract(&self) -> &str {
        &self.tract
    }

    pub fn latitude(&self) -> &str {
        &self.latitude
    }

    pub fn longitude(&self) -> &str {
        &self.longitude
    }
}

impl fmt::Display for CrimeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?},{:?},{},{},{},{},{},{},{}",
            self.x,
            self.y,
            self.time,
            self.street,
            self.offense,
            self.date,
            self.tract,
            self.latitude,
            self.longitude
        )
    }
}
