use askama::Template;
use plantmap_boundary::Producer;
use plantmap_entities::geo::MapPoint;

use crate::Result;

/// Static settings of the rendered map page.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPage {
    pub title: String,
    pub subtitle: String,
    pub center: MapPoint,
    pub zoom: u8,
}

impl Default for MapPage {
    fn default() -> Self {
        Self {
            title: "Sulfuric Acid Producers Map".into(),
            subtitle: "Interactive map of sulfuric acid production facilities across North America"
                .into(),
            center: MapPoint::from_lat_lng_deg(40.0, -100.0),
            zoom: 4,
        }
    }
}

#[derive(Template)]
#[template(path = "map.html")]
struct MapPageTemplate<'a> {
    title: &'a str,
    subtitle: &'a str,
    center_lat: f64,
    center_lng: f64,
    zoom: u8,
    producer_data: &'a str,
}

/// Renders a self-contained HTML page that shows all producers on a map.
pub fn render_map_page(page: &MapPage, producers: &[Producer]) -> Result<String> {
    let producer_data = producer_data_json(producers)?;
    let html = MapPageTemplate {
        title: &page.title,
        subtitle: &page.subtitle,
        center_lat: page.center.lat().to_deg(),
        center_lng: page.center.lng().to_deg(),
        zoom: page.zoom,
        producer_data: &producer_data,
    }
    .render()?;
    Ok(html)
}

/// JSON that can be embedded into a `<script>` element.
///
/// Every `<` is written as `\u003c`. It only occurs inside JSON strings.
fn producer_data_json(producers: &[Producer]) -> Result<String> {
    let json = serde_json::to_string_pretty(producers)?;
    Ok(json.replace('<', "\\u003c"))
}
