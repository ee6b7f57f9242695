use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct LatCoord(f64);

impl LatCoord {
    const DEG_MIN: f64 = -90.0;
    const DEG_MAX: f64 = 90.0;

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    /// Creates a latitude without checking the range.
    pub const fn from_deg(deg: f64) -> Self {
        Self(deg)
    }

    pub fn try_from_deg(deg: f64) -> Option<Self> {
        let lat = Self(deg);
        lat.is_valid().then_some(lat)
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0.is_finite() && (Self::DEG_MIN..=Self::DEG_MAX).contains(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct LngCoord(f64);

impl LngCoord {
    const DEG_MIN: f64 = -180.0;
    const DEG_MAX: f64 = 180.0;

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    /// Creates a longitude without checking the range.
    pub const fn from_deg(deg: f64) -> Self {
        Self(deg)
    }

    pub fn try_from_deg(deg: f64) -> Option<Self> {
        let lng = Self(deg);
        lng.is_valid().then_some(lng)
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0.is_finite() && (Self::DEG_MIN..=Self::DEG_MAX).contains(&self.0)
    }
}

/// A position on the map in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

#[derive(Debug, Error, PartialEq)]
#[error("Position out of range: lat = {lat}, lng = {lng}")]
pub struct MapPointOutOfRange {
    pub lat: f64,
    pub lng: f64,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self::new(LatCoord::from_deg(lat), LngCoord::from_deg(lng))
    }

    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Result<Self, MapPointOutOfRange> {
        match (LatCoord::try_from_deg(lat), LngCoord::try_from_deg(lng)) {
            (Some(lat), Some(lng)) => Ok(Self::new(lat, lng)),
            _ => Err(MapPointOutOfRange { lat, lng }),
        }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_valid() && self.lng.is_valid()
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat.to_deg(), self.lng.to_deg())
    }
}
