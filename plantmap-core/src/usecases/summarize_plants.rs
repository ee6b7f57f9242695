use std::collections::BTreeMap;

use strum::IntoEnumIterator;

use super::prelude::*;

/// Number of located plants per category and country group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantSummary {
    pub total: usize,
    pub located: usize,
    pub by_category: BTreeMap<PlantCategory, usize>,
    pub by_country: BTreeMap<CountryGroup, usize>,
}

impl PlantSummary {
    pub fn unlocated(&self) -> usize {
        self.total - self.located
    }
}

pub fn summarize_plants(plants: &[Plant]) -> PlantSummary {
    let mut by_category: BTreeMap<_, _> = PlantCategory::iter().map(|c| (c, 0)).collect();
    let mut by_country: BTreeMap<_, _> = CountryGroup::iter().map(|c| (c, 0)).collect();
    let mut located = 0;
    for plant in plants.iter().filter(|p| p.is_located()) {
        located += 1;
        *by_category.entry(plant.category()).or_default() += 1;
        *by_country.entry(plant.country_group()).or_default() += 1;
    }
    PlantSummary {
        total: plants.len(),
        located,
        by_category,
        by_country,
    }
}

#[cfg(test)]
mod tests {
    use plantmap_entities::builders::*;

    use super::*;

    fn located(plant_type: &str, country: &str) -> Plant {
        Plant::build()
            .plant_type(plant_type)
            .address(Address::build().country(country).finish())
            .pos(MapPoint::from_lat_lng_deg(40.0, -100.0))
            .finish()
    }

    #[test]
    fn count_located_plants() {
        let plants = vec![
            located("Sulfur Burner", "USA"),
            located("sulfur burner", "United States"),
            located("Metallurgical", "Canada"),
            located("Acid regeneration", "Mexico"),
            located("", "Germany"),
            Plant::build().plant_type("Sulfur Burner").finish(),
        ];
        let summary = summarize_plants(&plants);
        assert_eq!(6, summary.total);
        assert_eq!(5, summary.located);
        assert_eq!(1, summary.unlocated());
        assert_eq!(2, summary.by_category[&PlantCategory::Sulfur]);
        assert_eq!(1, summary.by_category[&PlantCategory::Metallurgical]);
        assert_eq!(1, summary.by_category[&PlantCategory::Regeneration]);
        assert_eq!(1, summary.by_category[&PlantCategory::Other]);
        assert_eq!(2, summary.by_country[&CountryGroup::Usa]);
        assert_eq!(1, summary.by_country[&CountryGroup::Canada]);
        assert_eq!(1, summary.by_country[&CountryGroup::Mexico]);
        assert_eq!(1, summary.by_country[&CountryGroup::Other]);
    }

    #[test]
    fn empty_summary_lists_all_groups() {
        let summary = summarize_plants(&[]);
        assert_eq!(0, summary.total);
        assert_eq!(4, summary.by_category.len());
        assert!(summary.by_country.values().all(|n| *n == 0));
    }
}
