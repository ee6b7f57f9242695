pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{address_builder::*, plant_builder::*};

pub mod plant_builder {

    use super::*;
    use crate::{address::*, geo::*, plant::*};

    #[derive(Debug)]
    pub struct PlantBuild {
        plant: Plant,
    }

    impl PlantBuild {
        pub fn company(mut self, company: &str) -> Self {
            self.plant.company = Some(company.into());
            self
        }
        pub fn address(mut self, address: Address) -> Self {
            self.plant.address = address;
            self
        }
        pub fn coordinates(mut self, coordinates: &str) -> Self {
            self.plant.coordinates = Some(coordinates.into());
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.plant.pos = Some(pos);
            self
        }
        pub fn plant_type(mut self, plant_type: &str) -> Self {
            self.plant.plant_type = Some(plant_type.into());
            self
        }
        pub fn gas_source(mut self, gas_source: &str) -> Self {
            self.plant.gas_source = Some(gas_source.into());
            self
        }
        pub fn capacity(mut self, capacity: &str) -> Self {
            self.plant.capacity = Some(capacity.into());
            self
        }
        pub fn finish(self) -> Plant {
            self.plant
        }
    }

    impl Builder for Plant {
        type Build = PlantBuild;
        fn build() -> PlantBuild {
            PlantBuild {
                plant: Plant::default(),
            }
        }
    }
}

pub mod address_builder {

    use super::*;
    use crate::address::*;

    #[derive(Debug)]
    pub struct AddressBuild {
        addr: Address,
    }

    impl AddressBuild {
        pub fn street(mut self, x: &str) -> Self {
            self.addr.street = Some(x.into());
            self
        }
        pub fn city(mut self, x: &str) -> Self {
            self.addr.city = Some(x.into());
            self
        }
        pub fn state(mut self, x: &str) -> Self {
            self.addr.state = Some(x.into());
            self
        }
        pub fn country(mut self, x: &str) -> Self {
            self.addr.country = Some(x.into());
            self
        }
        pub fn finish(self) -> Address {
            self.addr
        }
    }

    impl Builder for Address {
        type Build = AddressBuild;
        fn build() -> Self::Build {
            AddressBuild {
                addr: Address::default(),
            }
        }
    }

    #[test]
    fn empty_address() {
        assert!(Address::default().is_empty());
        assert!(!Address::build().street("x").finish().is_empty());
        assert!(!Address::build().city("x").finish().is_empty());
        assert!(!Address::build().state("x").finish().is_empty());
        assert!(!Address::build().country("x").finish().is_empty());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{address::*, category::*, country::*, geo::*, plant::*};

    #[test]
    fn plant_category_and_country_group() {
        let p = Plant::build()
            .company("Acme")
            .plant_type("Sulfur burner")
            .address(Address::build().country("Canada").finish())
            .finish();
        assert_eq!(PlantCategory::Sulfur, p.category());
        assert_eq!(CountryGroup::Canada, p.country_group());
        assert!(!p.is_located());
    }

    #[test]
    fn plant_without_type_or_country() {
        let p = Plant::build()
            .pos(MapPoint::from_lat_lng_deg(1.0, 2.0))
            .finish();
        assert_eq!(PlantCategory::Other, p.category());
        assert_eq!(CountryGroup::Other, p.country_group());
        assert!(p.is_located());
    }
}
