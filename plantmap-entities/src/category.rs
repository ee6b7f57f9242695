use strum::{AsRefStr, EnumIter, EnumString};

/// Production process of a plant, derived from its free-text plant type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, AsRefStr, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PlantCategory {
    Sulfur,
    Metallurgical,
    Regeneration,
    Other,
}

impl PlantCategory {
    /// Classifies a plant type description.
    ///
    /// The first matching keyword wins, so a "sulfur burner with acid regeneration"
    /// is a sulfur burner.
    pub fn classify(plant_type: &str) -> Self {
        let plant_type = plant_type.to_lowercase();
        if plant_type.contains("sulfur") {
            Self::Sulfur
        } else if plant_type.contains("metallurgical") {
            Self::Metallurgical
        } else if plant_type.contains("regenerat") {
            Self::Regeneration
        } else {
            Self::Other
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Sulfur => "Sulfur Burner",
            Self::Metallurgical => "Metallurgical",
            Self::Regeneration => "Acid Regeneration",
            Self::Other => "Other",
        }
    }
}
