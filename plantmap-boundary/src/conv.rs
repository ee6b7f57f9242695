use super::*;
use plantmap_entities as e;

fn or_default(value: Option<String>, default: &str) -> String {
    value.unwrap_or_else(|| default.to_owned())
}

impl From<e::plant::Plant> for Producer {
    fn from(from: e::plant::Plant) -> Self {
        let e::plant::Plant {
            company,
            address,
            coordinates,
            pos,
            plant_type,
            gas_source,
            capacity,
        } = from;
        let e::address::Address {
            street,
            city,
            state,
            country,
        } = address;
        Self {
            company: or_default(company, Producer::UNKNOWN),
            address: or_default(street, Producer::NOT_AVAILABLE),
            city: or_default(city, Producer::NOT_AVAILABLE),
            state: or_default(state, Producer::NOT_AVAILABLE),
            country: or_default(country, Producer::NOT_AVAILABLE),
            coordinates: or_default(coordinates, Producer::NOT_AVAILABLE),
            latitude: pos.map(|p| p.lat().to_deg()),
            longitude: pos.map(|p| p.lng().to_deg()),
            plant_type: or_default(plant_type, Producer::NOT_SPECIFIED),
            gas_source: or_default(gas_source, Producer::NOT_SPECIFIED),
            capacity: or_default(capacity, Producer::NOT_SPECIFIED),
        }
    }
}
