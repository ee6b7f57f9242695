use crate::{address::*, category::*, country::*, geo::*};

/// A production facility as read from one record of the input table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Plant {
    pub company: Option<String>,
    pub address: Address,
    /// The coordinates exactly as written in the source record.
    pub coordinates: Option<String>,
    /// `None` if the coordinates are missing or could not be parsed.
    pub pos: Option<MapPoint>,
    pub plant_type: Option<String>,
    pub gas_source: Option<String>,
    pub capacity: Option<String>,
}

impl Plant {
    pub fn is_located(&self) -> bool {
        self.pos.is_some()
    }

    pub fn category(&self) -> PlantCategory {
        self.plant_type
            .as_deref()
            .map(PlantCategory::classify)
            .unwrap_or(PlantCategory::Other)
    }

    pub fn country_group(&self) -> CountryGroup {
        self.address
            .country
            .as_deref()
            .map(CountryGroup::classify)
            .unwrap_or(CountryGroup::Other)
    }
}
