use serde::{Deserialize, Serialize};

/// A stop on the route, located by its cumulative distance from the origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    pub position_km: f64,
}

impl Station {
    #[must_use]
    pub fn new(name: impl Into<String>, position_km: f64) -> Self {
        Self {
            name: name.into(),
            position_km,
        }
    }

    /// Lowercase identifier with spaces removed, used for SVG element ids
    #[must_use]
    pub fn slug(&self) -> String {
        self.name
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect()
    }
}
