use super::prelude::*;

/// Turns the records of a table into plants.
///
/// Every record becomes a plant, in table order, even if its
/// coordinates are missing or cannot be parsed.
pub fn import_plants(table: &Table, parser: &CoordinateParser) -> Result<Vec<Plant>> {
    log::info!("Columns in file: {:?}", table.headers);
    let columns = ColumnMap::discover(&table.headers);
    if let Some(role) = columns.missing_required() {
        return Err(Error::MissingColumn(role));
    }
    if table.is_empty() {
        return Err(Error::EmptyTable);
    }

    log::info!("Processing coordinates...");
    let plants: Vec<_> = (0..table.len())
        .map(|row| {
            let cell = |role| {
                columns
                    .get(role)
                    .and_then(|col| table.cell(row, col))
                    .map(|s| s.trim().to_owned())
            };
            let coordinates = cell(ColumnRole::Coordinates);
            let pos = parser.parse(coordinates.as_deref()).to_map_point();
            if let Some(pos) = pos.filter(|p| !p.is_valid()) {
                log::warn!("Parsed position of record {} is out of range: {pos}", row + 1);
            }
            Plant {
                company: cell(ColumnRole::Company),
                address: Address {
                    street: cell(ColumnRole::Address),
                    city: cell(ColumnRole::City),
                    state: cell(ColumnRole::State),
                    country: cell(ColumnRole::Country),
                },
                coordinates,
                pos,
                plant_type: cell(ColumnRole::PlantType),
                gas_source: cell(ColumnRole::GasSource),
                capacity: cell(ColumnRole::Capacity),
            }
        })
        .collect();

    let located = plants.iter().filter(|p| p.is_located()).count();
    log::info!(
        "Found {located} valid coordinates out of {} records",
        plants.len()
    );
    Ok(plants)
}
