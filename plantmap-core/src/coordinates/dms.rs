use std::num::{ParseFloatError, ParseIntError};

use regex::Captures;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Missing capture group {0}")]
    MissingGroup(usize),
    #[error("Invalid {unit} value '{value}': {source}")]
    Integer {
        unit: &'static str,
        value: String,
        source: ParseIntError,
    },
    #[error("Invalid seconds value '{value}': {source}")]
    Seconds {
        value: String,
        source: ParseFloatError,
    },
    #[error("Invalid hemisphere '{0}'")]
    Hemisphere(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    fn from_letter(letter: &str) -> Result<Self, ConversionError> {
        match letter.to_ascii_uppercase().as_str() {
            "N" => Ok(Self::North),
            "S" => Ok(Self::South),
            "E" => Ok(Self::East),
            "W" => Ok(Self::West),
            _ => Err(ConversionError::Hemisphere(letter.to_owned())),
        }
    }
}

/// One degree/minute/second value with its hemisphere letter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DmsComponent {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f64,
    pub hemisphere: Hemisphere,
}

impl DmsComponent {
    /// Reads the four consecutive capture groups starting at `first`:
    /// degrees, minutes, seconds and hemisphere.
    pub fn from_captures(caps: &Captures, first: usize) -> Result<Self, ConversionError> {
        let group = |i: usize| {
            caps.get(i)
                .map(|m| m.as_str())
                .ok_or(ConversionError::MissingGroup(i))
        };
        let degrees = parse_integer("degrees", group(first)?)?;
        let minutes = parse_integer("minutes", group(first + 1)?)?;
        let seconds = group(first + 2)?;
        let seconds = seconds
            .parse::<f64>()
            .map_err(|source| ConversionError::Seconds {
                value: seconds.to_owned(),
                source,
            })?;
        let hemisphere = Hemisphere::from_letter(group(first + 3)?)?;
        Ok(Self {
            degrees,
            minutes,
            seconds,
            hemisphere,
        })
    }

    /// Converts to signed decimal degrees.
    ///
    /// Only `S` flips the sign of a latitude and only `W` flips
    /// the sign of a longitude.
    pub fn to_decimal_deg(self, axis: Axis) -> f64 {
        let Self {
            degrees,
            minutes,
            seconds,
            hemisphere,
        } = self;
        let abs = f64::from(degrees) + f64::from(minutes) / 60.0 + seconds / 3600.0;
        let negative = match axis {
            Axis::Latitude => hemisphere == Hemisphere::South,
            Axis::Longitude => hemisphere == Hemisphere::West,
        };
        if negative {
            -abs
        } else {
            abs
        }
    }
}

fn parse_integer(unit: &'static str, value: &str) -> Result<u32, ConversionError> {
    value
        .parse()
        .map_err(|source| ConversionError::Integer {
            unit,
            value: value.to_owned(),
            source,
        })
}
