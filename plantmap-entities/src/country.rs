use strum::{AsRefStr, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum CountryGroup {
    Usa,
    Canada,
    Mexico,
    Other,
}

impl CountryGroup {
    pub fn classify(country: &str) -> Self {
        let country = country.to_lowercase();
        if country.contains("usa") || country.contains("united states") {
            Self::Usa
        } else if country.contains("canada") {
            Self::Canada
        } else if country.contains("mexico") {
            Self::Mexico
        } else {
            Self::Other
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Usa => "USA",
            Self::Canada => "Canada",
            Self::Mexico => "Mexico",
            Self::Other => "Other",
        }
    }
}
