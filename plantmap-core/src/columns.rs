use std::fmt;

use strum::{EnumIter, IntoEnumIterator};

/// The meaning of a column in the input table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ColumnRole {
    Company,
    Coordinates,
    PlantType,
    Address,
    City,
    State,
    Country,
    GasSource,
    Capacity,
}

impl ColumnRole {
    /// Lower case header names that are accepted for this role.
    pub const fn synonyms(self) -> &'static [&'static str] {
        match self {
            Self::Company => &["owner", "company", "producer"],
            Self::Coordinates => &["coordinates", "coords", "location"],
            Self::PlantType => &["type of plant", "plant type", "planttype"],
            Self::Address => &["address", "addr"],
            Self::City => &["city", "town"],
            Self::State => &["state", "province"],
            Self::Country => &["country", "nation"],
            Self::GasSource => &["gas source", "gas_source", "source"],
            Self::Capacity => &["plant capacity", "capacity"],
        }
    }

    pub const fn is_required(self) -> bool {
        matches!(self, Self::Company | Self::Coordinates)
    }

    fn matches(self, header: &str) -> bool {
        let header = header.trim().to_lowercase();
        self.synonyms().iter().any(|s| *s == header)
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Company => "company",
            Self::Coordinates => "coordinates",
            Self::PlantType => "plant type",
            Self::Address => "address",
            Self::City => "city",
            Self::State => "state",
            Self::Country => "country",
            Self::GasSource => "gas source",
            Self::Capacity => "capacity",
        };
        f.write_str(name)
    }
}

/// Column indices of all roles found in a header row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnMap {
    columns: Vec<(ColumnRole, usize)>,
}

impl ColumnMap {
    /// Assigns every role to the first header that matches one of its synonyms.
    pub fn discover<S: AsRef<str>>(headers: &[S]) -> Self {
        let columns = ColumnRole::iter()
            .filter_map(|role| {
                headers
                    .iter()
                    .position(|h| role.matches(h.as_ref()))
                    .map(|idx| (role, idx))
            })
            .collect();
        Self { columns }
    }

    pub fn get(&self, role: ColumnRole) -> Option<usize> {
        self.columns
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, idx)| *idx)
    }

    /// The first required role without a matching column.
    pub fn missing_required(&self) -> Option<ColumnRole> {
        ColumnRole::iter().find(|role| role.is_required() && self.get(*role).is_none())
    }
}
