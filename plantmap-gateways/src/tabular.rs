use std::{fs::File, io, path::Path};

use calamine::{open_workbook_auto, Data, Range, Reader};
use plantmap_entities::table::Table;

use crate::{Error, Result};

/// Sheets that are read instead of the first sheet of a workbook, in order of preference.
const PREFERRED_SHEETS: &[&str] = &["North America Producers", "Sheet1"];

/// Reads a table from a file, choosing the format by the file extension.
pub fn read_table(path: &Path) -> Result<Table> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    let table = match ext.as_str() {
        "csv" => {
            log::info!("Reading CSV file: {}", path.display());
            read_csv(File::open(path)?)?
        }
        "xlsx" | "xls" => {
            log::info!("Reading Excel file: {}", path.display());
            read_workbook(path)?
        }
        _ => return Err(Error::UnsupportedFormat(ext)),
    };
    log::info!(
        "Successfully read data file: {} ({} records)",
        path.display(),
        table.len()
    );
    Ok(table)
}

/// Reads comma separated values with a header row.
///
/// Records may have more or fewer fields than the header.
pub fn read_csv<R: io::Read>(reader: R) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    let headers = reader.headers()?.iter().map(ToOwned::to_owned).collect();
    let mut table = Table::new(headers);
    for record in reader.records() {
        table.push_row(record?.iter());
    }
    Ok(table)
}

/// Reads the preferred sheet of an Excel workbook.
///
/// The first row of the sheet holds the headers.
pub fn read_workbook(path: &Path) -> Result<Table> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_names = workbook.sheet_names();
    let sheet = choose_sheet(&sheet_names)
        .ok_or(Error::EmptyWorkbook)?
        .to_owned();
    log::info!("Using sheet '{sheet}'");
    let range = workbook.worksheet_range(&sheet)?;
    Ok(table_from_range(&range))
}

fn choose_sheet<S: AsRef<str>>(names: &[S]) -> Option<&str> {
    PREFERRED_SHEETS
        .iter()
        .find_map(|preferred| {
            names
                .iter()
                .map(|name| name.as_ref())
                .find(|name| name == preferred)
        })
        .or_else(|| names.first().map(|name| name.as_ref()))
}

fn table_from_range(range: &Range<Data>) -> Table {
    let mut rows = range.rows();
    let headers = rows
        .next()
        .map(|row| {
            row.iter()
                .map(|cell| cell.to_string().trim().to_owned())
                .collect()
        })
        .unwrap_or_default();
    let mut table = Table::new(headers);
    for row in rows {
        table.push_row(row.iter().map(ToString::to_string));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_quoted_dms_coordinates() {
        let data = "Company,City,Coordinates\n\
                    Acme,Hopewell,\"37° 18' 3\"\" N, 77° 16' 14\"\" W\"\n\
                    Borealis,,\n";
        let table = read_csv(data.as_bytes()).unwrap();
        assert_eq!(vec!["Company", "City", "Coordinates"], table.headers);
        assert_eq!(2, table.len());
        assert_eq!(Some(r#"37° 18' 3" N, 77° 16' 14" W"#), table.cell(0, 2));
        assert_eq!(Some("Borealis"), table.cell(1, 0));
        assert_eq!(None, table.cell(1, 1));
        assert_eq!(None, table.cell(1, 2));
    }

    #[test]
    fn headers_are_trimmed_and_records_may_be_short() {
        let data = " Owner , Coords \nAcme\n";
        let table = read_csv(data.as_bytes()).unwrap();
        assert_eq!(vec!["Owner", "Coords"], table.headers);
        assert_eq!(Some("Acme"), table.cell(0, 0));
        assert_eq!(None, table.cell(0, 1));
    }

    #[test]
    fn unsupported_file_format() {
        let err = read_table(Path::new("producers.json")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(ext) if ext == "json"));
        let err = read_table(Path::new("producers")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(ext) if ext.is_empty()));
    }

    #[test]
    fn missing_file() {
        let err = read_table(Path::new("does/not/exist.CSV")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn missing_workbook() {
        let err = read_table(Path::new("does/not/exist.XLSX")).unwrap_err();
        assert!(matches!(err, Error::Spreadsheet(_)));
    }

    #[test]
    fn choose_preferred_sheet() {
        assert_eq!(
            Some("North America Producers"),
            choose_sheet(&["Summary", "Sheet1", "North America Producers"])
        );
        assert_eq!(Some("Sheet1"), choose_sheet(&["Summary", "Sheet1"]));
        assert_eq!(Some("Summary"), choose_sheet(&["Summary", "Data"]));
        assert_eq!(Some("Data"), choose_sheet(&["Data", "sheet1"]));
        assert_eq!(None, choose_sheet::<&str>(&[]));
    }

    #[test]
    fn read_worksheet_range() {
        let mut range = Range::new((0, 0), (2, 2));
        range.set_value((0, 0), Data::String(" Owner ".into()));
        range.set_value((0, 1), Data::String("Capacity".into()));
        range.set_value((0, 2), Data::String("Coordinates".into()));
        range.set_value((1, 0), Data::String("Acme".into()));
        range.set_value((1, 1), Data::Float(1200.0));
        range.set_value(
            (1, 2),
            Data::String(r#"37° 18' 3" N, 77° 16' 14" W"#.into()),
        );
        range.set_value((2, 0), Data::String("Borealis".into()));

        let table = table_from_range(&range);
        assert_eq!(vec!["Owner", "Capacity", "Coordinates"], table.headers);
        assert_eq!(2, table.len());
        assert_eq!(Some("1200"), table.cell(0, 1));
        assert_eq!(Some(r#"37° 18' 3" N, 77° 16' 14" W"#), table.cell(0, 2));
        assert_eq!(Some("Borealis"), table.cell(1, 0));
        assert_eq!(None, table.cell(1, 1));
        assert_eq!(None, table.cell(1, 2));
    }

    #[test]
    fn empty_worksheet() {
        let table = table_from_range(&Range::<Data>::empty());
        assert!(table.headers.is_empty());
        assert!(table.is_empty());
    }
}
