use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

/// A plant as it is rendered on the map.
///
/// Text fields are never empty: missing values are replaced by
/// [`Producer::UNKNOWN`], [`Producer::NOT_AVAILABLE`] or [`Producer::NOT_SPECIFIED`].
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Producer {
    pub company     : String,
    pub address     : String,
    pub city        : String,
    pub state       : String,
    pub country     : String,
    pub coordinates : String,
    pub latitude    : Option<f64>,
    pub longitude   : Option<f64>,
    pub plant_type  : String,
    pub gas_source  : String,
    pub capacity    : String,
}

impl Producer {
    pub const UNKNOWN: &'static str = "Unknown";
    pub const NOT_AVAILABLE: &'static str = "Not available";
    pub const NOT_SPECIFIED: &'static str = "Not specified";
}
