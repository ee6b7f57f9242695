use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use plantmap_boundary::Producer;
use plantmap_core::{
    coordinates::CoordinateParser,
    usecases::{self, PlantSummary},
};
use plantmap_gateways::{map_page, tabular};

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "plantmap", version, about)]
struct Cli {
    /// Configuration file (default: plantmap.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render an interactive map of all producers in a data file
    Map {
        /// Table with one producer per row (CSV or Excel)
        #[arg(value_name = "DATA_FILE")]
        data_file: PathBuf,

        /// The HTML file to write
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Convert DMS coordinates into decimal degrees
    Coords {
        #[arg(value_name = "TEXT", required = true)]
        text: Vec<String>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = Config::try_load_from_file_or_default(cli.config.as_deref())?;
    let parser = CoordinateParser::new(cfg.coordinates.overrides.clone());
    match cli.command {
        Command::Map { data_file, output } => {
            let output = output.unwrap_or_else(|| cfg.output.file.clone());
            let summary = render_map(&data_file, &output, &cfg, &parser)?;
            print!("{}", SummaryReport(&summary));
        }
        Command::Coords { text } => {
            for t in &text {
                println!("{}", format_pair(&parser, t));
            }
        }
    }
    Ok(())
}

fn render_map(
    data_file: &Path,
    output: &Path,
    cfg: &Config,
    parser: &CoordinateParser,
) -> Result<PlantSummary> {
    log::info!("Read producers from {}", data_file.display());
    let table = tabular::read_table(data_file)
        .with_context(|| format!("Unable to read {}", data_file.display()))?;
    let plants = usecases::import_plants(&table, parser)?;
    let summary = usecases::summarize_plants(&plants);
    let producers: Vec<_> = plants.into_iter().map(Producer::from).collect();
    let html = map_page::render_map_page(&cfg.map, &producers)?;
    fs::write(output, html).with_context(|| format!("Unable to write {}", output.display()))?;
    log::info!("Map has been saved to {}", output.display());
    Ok(summary)
}

fn format_pair(parser: &CoordinateParser, text: &str) -> String {
    match parser.parse(Some(text)).lat_lng() {
        Some((lat, lng)) => format!("{lat:.6}, {lng:.6}"),
        None => "-".to_string(),
    }
}

struct SummaryReport<'a>(&'a PlantSummary);

impl fmt::Display for SummaryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.0;
        writeln!(
            f,
            "{} producers, {} on the map, {} without valid coordinates",
            summary.total,
            summary.located,
            summary.unlocated()
        )?;
        writeln!(f, "By plant type:")?;
        for (category, count) in &summary.by_category {
            writeln!(f, "  {:<20}{count:>5}", category.label())?;
        }
        writeln!(f, "By country:")?;
        for (country, count) in &summary.by_country {
            writeln!(f, "  {:<20}{count:>5}", country.label())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use plantmap_entities::{address::Address, builders::*, geo::MapPoint, plant::Plant};

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_map_command() {
        let cli = Cli::parse_from(["plantmap", "map", "plants.csv", "-o", "out.html"]);
        assert!(cli.config.is_none());
        match cli.command {
            Command::Map { data_file, output } => {
                assert_eq!(Path::new("plants.csv"), data_file);
                assert_eq!(Some(PathBuf::from("out.html")), output);
            }
            Command::Coords { .. } => panic!("unexpected command"),
        }
    }

    #[test]
    fn coords_command_requires_text() {
        assert!(Cli::try_parse_from(["plantmap", "coords"]).is_err());
        let cli = Cli::try_parse_from(["plantmap", "coords", "a", "b", "-c", "x.toml"]).unwrap();
        assert_eq!(Some(PathBuf::from("x.toml")), cli.config);
    }

    #[test]
    fn format_parsed_pairs() {
        let parser = CoordinateParser::default();
        assert_eq!(
            "37.300833, -77.270556",
            format_pair(&parser, r#"37° 18' 3" N, 77° 16' 14" W"#)
        );
        assert_eq!("-", format_pair(&parser, "invalid coordinate data"));
    }

    #[test]
    fn format_plant_summary() {
        let plants = vec![
            Plant::build()
                .plant_type("Sulfur Burner")
                .address(Address::build().country("USA").finish())
                .pos(MapPoint::from_lat_lng_deg(40.0, -100.0))
                .finish(),
            Plant::build().plant_type("Metallurgical").finish(),
        ];
        let s = SummaryReport(&usecases::summarize_plants(&plants)).to_string();
        assert!(s.starts_with("2 producers, 1 on the map, 1 without valid coordinates\n"));
        assert!(s.contains("  Sulfur Burner           1\n"));
        assert!(s.contains("  Metallurgical           0\n"));
        assert!(s.contains("  USA                     1\n"));
    }

    #[test]
    fn render_map_from_csv_file() {
        let dir = std::env::temp_dir().join(format!("plantmap-cli-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let data_file = dir.join("plants.csv");
        fs::write(
            &data_file,
            "Company,City,Country,Type of Plant,Coordinates\n\
             Acme,Hopewell,USA,Sulfur Burner,\"37° 18' 3\"\" N, 77° 16' 14\"\" W\"\n\
             Nowhere,,,,unknown\n",
        )
        .unwrap();
        let output = dir.join("map.html");
        let cfg = Config::try_load_from_file_or_default(None::<&Path>).unwrap();

        let summary =
            render_map(&data_file, &output, &cfg, &CoordinateParser::default()).unwrap();
        assert_eq!(2, summary.total);
        assert_eq!(1, summary.located);

        let html = fs::read_to_string(&output).unwrap();
        assert!(html.contains(r#""company": "Acme""#));
        assert!(html.contains(r#""company": "Nowhere""#));
        fs::remove_dir_all(&dir).unwrap();
    }
}
