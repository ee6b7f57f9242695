use lazy_static::lazy_static;
use regex::Regex;

use super::{
    dms::{Axis, ConversionError, DmsComponent},
    CoordinatePair,
};

/// A single DMS value: degrees, minutes, optional seconds mark and hemisphere.
///
/// Digits and hemisphere letters are restricted to ASCII, the characters
/// accepted by the numeric conversion.
const DMS: &str = r#"([0-9]+)[°º]\s*([0-9]+)['′]\s*([0-9]+(?:\.[0-9]+)?)["″]?\s*((?-u:[NSEW]))"#;

/// Like [`DMS`] but without any whitespace between the tokens and with integer seconds.
const DMS_STRICT_LAT: &str = r#"([0-9]+)[°º]([0-9]+)['′]([0-9]+)["″]?((?-u:[NS]))"#;
const DMS_STRICT_LNG: &str = r#"([0-9]+)[°º]([0-9]+)['′]([0-9]+)["″]?((?-u:[EW]))"#;

/// A named pattern for a latitude/longitude pair.
///
/// Every pattern captures exactly eight groups: four for the latitude
/// followed by four for the longitude.
#[derive(Debug)]
pub struct Grammar {
    pub name: &'static str,
    regex: Regex,
}

impl Grammar {
    fn new(name: &'static str, pattern: &str) -> Self {
        let regex = Regex::new(&format!("(?i){pattern}")).unwrap();
        debug_assert_eq!(regex.captures_len(), 9);
        Self { name, regex }
    }

    /// Searches the grammar anywhere in `input`.
    ///
    /// Returns `None` if the grammar does not match.
    pub fn extract(&self, input: &str) -> Option<Result<CoordinatePair, ConversionError>> {
        let caps = self.regex.captures(input)?;
        let pair = DmsComponent::from_captures(&caps, 1).and_then(|lat| {
            let lng = DmsComponent::from_captures(&caps, 5)?;
            Ok(CoordinatePair::new(
                lat.to_decimal_deg(Axis::Latitude),
                lng.to_decimal_deg(Axis::Longitude),
            ))
        });
        Some(pair)
    }
}

lazy_static! {
    /// All supported grammars in order of precedence.
    pub static ref GRAMMARS: Vec<Grammar> = vec![
        // 37° 18' 3" N, 77° 16' 14" W
        Grammar::new("comma separated", &format!(r"{DMS},\s*{DMS}")),
        // 40°50'55"N 84°04'51"W
        Grammar::new("space separated", &format!(r"{DMS}\s+{DMS}")),
        Grammar::new(
            "strict",
            &format!(r"{DMS_STRICT_LAT}\s+{DMS_STRICT_LNG}")
        ),
    ];
}
