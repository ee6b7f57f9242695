use anyhow::{anyhow, Result};
use plantmap_core::coordinates::{CoordinateOverride, CoordinateOverrides};
use plantmap_entities::geo::MapPoint;
use plantmap_gateways::map_page::MapPage;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "plantmap.toml";

const ENV_NAME_OUTPUT_FILE: &str = "PLANTMAP_OUTPUT";

/// Highest zoom level of the tile server.
const MAX_ZOOM: u8 = 19;

pub struct Config {
    pub map: MapPage,
    pub output: Output,
    pub coordinates: Coordinates,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let raw_config = match file_path {
            Some(file_path) => {
                let file_path = file_path.as_ref();
                log::info!("Load configuration from {}", file_path.display());
                let cfg_string = fs::read_to_string(file_path).map_err(|err| {
                    anyhow!("Unable to read configuration {}: {err}", file_path.display())
                })?;
                toml::from_str(&cfg_string)?
            }
            None => {
                log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
                match fs::read_to_string(DEFAULT_CONFIG_FILE_NAME) {
                    Ok(cfg_string) => toml::from_str(&cfg_string)?,
                    Err(err) => match err.kind() {
                        ErrorKind::NotFound => {
                            log::info!(
                                "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                            );
                            Ok(raw::Config::default())
                        }
                        _ => Err(err),
                    }?,
                }
            }
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(file) = env::var(ENV_NAME_OUTPUT_FILE) {
            cfg.output.file = PathBuf::from(file);
        }
        Ok(cfg)
    }
}

pub struct Output {
    /// The generated HTML page.
    pub file: PathBuf,
}

pub struct Coordinates {
    /// Built-in corrections extended by the configured ones.
    pub overrides: CoordinateOverrides,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            map,
            output,
            coordinates,
        } = from;

        let raw::Map {
            title,
            subtitle,
            center_lat,
            center_lng,
            zoom,
        } = map.unwrap_or_default();

        let defaults = MapPage::default();
        let center = MapPoint::try_from_lat_lng_deg(
            center_lat.unwrap_or_else(|| defaults.center.lat().to_deg()),
            center_lng.unwrap_or_else(|| defaults.center.lng().to_deg()),
        )
        .map_err(|err| anyhow!("Invalid map center: {err}"))?;
        let zoom = zoom.unwrap_or(defaults.zoom);
        if zoom > MAX_ZOOM {
            return Err(anyhow!("Invalid zoom level {zoom} (max. {MAX_ZOOM})"));
        }
        let map = MapPage {
            title: title.unwrap_or(defaults.title),
            subtitle: subtitle.unwrap_or(defaults.subtitle),
            center,
            zoom,
        };

        let raw::Output { file } = output.unwrap_or_default();
        let output = Output { file };

        let raw::Coordinates { overrides: raw_overrides } = coordinates.unwrap_or_default();
        let mut overrides = CoordinateOverrides::builtin();
        for raw::CoordinateOverride { input, lat, lng } in raw_overrides {
            if MapPoint::try_from_lat_lng_deg(lat, lng).is_err() {
                return Err(anyhow!(
                    "Invalid coordinate override for '{input}': {lat}, {lng}"
                ));
            }
            overrides.insert(CoordinateOverride::new(input, lat, lng));
        }
        let coordinates = Coordinates { overrides };

        Ok(Self {
            map,
            output,
            coordinates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(s: &str) -> Result<Config> {
        let raw: raw::Config = toml::from_str(s)?;
        Config::try_from(raw)
    }

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let _: Config = Config::try_load_from_file_or_default(file).unwrap();
    }

    #[test]
    fn default_config() {
        let cfg = Config::try_from(raw::Config::default()).unwrap();
        assert_eq!(MapPage::default(), cfg.map);
        assert_eq!(Path::new("sulfuric_acid_map.html"), cfg.output.file);
        assert_eq!(CoordinateOverrides::builtin(), cfg.coordinates.overrides);
    }

    #[test]
    fn configured_overrides_extend_the_builtin_ones() {
        let cfg = from_toml(
            r#"
            [[coordinates.overrides]]
            input = "49°06'N 117°42'W"
            lat = 49.1
            lng = -117.7
            "#,
        )
        .unwrap();
        let overrides = cfg.coordinates.overrides;
        assert_eq!(2, overrides.len());
        let pair = overrides.lookup("49°06'N 117°42'W").unwrap();
        assert_eq!(Some((49.1, -117.7)), pair.lat_lng());
    }

    #[test]
    fn reject_invalid_map_center() {
        assert!(from_toml("[map]\ncenter-lat = 95.0\n").is_err());
        assert!(from_toml("[map]\ncenter-lng = -181.0\n").is_err());
    }

    #[test]
    fn reject_invalid_zoom() {
        assert!(from_toml("[map]\nzoom = 20\n").is_err());
    }

    #[test]
    fn reject_invalid_override() {
        let res = from_toml(
            r#"
            [[coordinates.overrides]]
            input = "somewhere"
            lat = 91.0
            lng = 0.0
            "#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn explicit_config_file_must_exist() {
        let res = Config::try_load_from_file_or_default(Some("does-not-exist.toml"));
        assert!(res.is_err());
    }
}
