//! Parsing of degree/minute/second (DMS) coordinate notations.
//!
//! Supported notations, tried in this order:
//!
//! 1. exact-match overrides (see [`CoordinateOverrides`])
//! 2. comma separated pairs, e.g. `37° 18' 3" N, 77° 16' 14" W`
//! 3. space separated pairs, e.g. `40°50'55"N 84°04'51"W`
//! 4. strict pairs without any inner whitespace, e.g. `40°50'55"N 84°04'51"W`
//!
//! Degree, minute and second marks may be written as `°'"` or `º′″`.
//! The seconds mark is optional and hemisphere letters are case-insensitive.

use lazy_static::lazy_static;
use plantmap_entities::geo::MapPoint;
use thiserror::Error;

mod dms;
mod grammar;
mod overrides;

pub use self::{
    dms::ConversionError,
    overrides::{CoordinateOverride, CoordinateOverrides},
};

use self::grammar::GRAMMARS;

/// A latitude/longitude pair in signed decimal degrees.
///
/// Either both values are present or none.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CoordinatePair(Option<(f64, f64)>);

impl CoordinatePair {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self(Some((latitude, longitude)))
    }

    pub const fn absent() -> Self {
        Self(None)
    }

    pub fn latitude(&self) -> Option<f64> {
        self.0.map(|(lat, _)| lat)
    }

    pub fn longitude(&self) -> Option<f64> {
        self.0.map(|(_, lng)| lng)
    }

    pub const fn lat_lng(&self) -> Option<(f64, f64)> {
        self.0
    }

    pub const fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    /// The position on the map without any range check.
    pub fn to_map_point(&self) -> Option<MapPoint> {
        self.0
            .map(|(lat, lng)| MapPoint::from_lat_lng_deg(lat, lng))
    }
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("No known coordinate format matches")]
    NoMatch,
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Converts DMS coordinate strings into decimal degrees.
///
/// The parser is immutable and can be shared between threads.
#[derive(Debug, Clone)]
pub struct CoordinateParser {
    overrides: CoordinateOverrides,
}

impl CoordinateParser {
    pub fn new(overrides: CoordinateOverrides) -> Self {
        if !overrides.is_empty() {
            log::warn!(
                "{} coordinate override(s) active, these inputs bypass the DMS grammars",
                overrides.len()
            );
            for o in overrides.iter() {
                log::debug!("Override: '{}' => ({}, {})", o.input, o.lat, o.lng);
            }
        }
        Self { overrides }
    }

    pub fn overrides(&self) -> &CoordinateOverrides {
        &self.overrides
    }

    /// Parses a coordinate string.
    ///
    /// Missing or blank input results in an absent pair.
    /// Unparsable input results in an absent pair and a log message,
    /// this function never fails.
    pub fn parse(&self, input: Option<&str>) -> CoordinatePair {
        let Some(raw) = input else {
            return CoordinatePair::absent();
        };
        if raw.trim().is_empty() {
            return CoordinatePair::absent();
        }
        match self.try_parse(raw) {
            Ok(pair) => pair,
            Err(ParseError::NoMatch) => {
                log::warn!("Could not parse coordinates: {raw}");
                CoordinatePair::absent()
            }
            Err(ParseError::Conversion(err)) => {
                log::error!("Error processing coordinates: {raw} - {err}");
                CoordinatePair::absent()
            }
        }
    }

    /// Parses a coordinate string and reports why it failed.
    pub fn try_parse(&self, input: &str) -> Result<CoordinatePair, ParseError> {
        let input = input.trim();
        if let Some(pair) = self.overrides.lookup(input) {
            log::debug!("Using coordinate override for '{input}'");
            return Ok(pair);
        }
        for grammar in GRAMMARS.iter() {
            if let Some(res) = grammar.extract(input) {
                log::trace!("'{input}' matches the {} grammar", grammar.name);
                return Ok(res?);
            }
        }
        Err(ParseError::NoMatch)
    }
}

impl Default for CoordinateParser {
    fn default() -> Self {
        Self::new(CoordinateOverrides::default())
    }
}

lazy_static! {
    static ref DEFAULT_PARSER: CoordinateParser = CoordinateParser::default();
}

/// Parses a coordinate string with the built-in overrides.
pub fn parse_coordinates(input: Option<&str>) -> CoordinatePair {
    DEFAULT_PARSER.parse(input)
}
