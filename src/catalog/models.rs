// Analysis model catalog.
// The technique styles a stroke can be compared against.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Technique style chosen for an analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelSelection {
    #[default]
    Standard,
    Federer,
    Nadal,
}

impl ModelSelection {
    pub const ALL: [ModelSelection; 3] = [
        ModelSelection::Standard,
        ModelSelection::Federer,
        ModelSelection::Nadal,
    ];

    /// Stable lowercase identifier.
    pub fn id(&self) -> &'static str {
        match self {
            ModelSelection::Standard => "standard",
            ModelSelection::Federer => "federer",
            ModelSelection::Nadal => "nadal",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ModelSelection::Standard => "Standard",
            ModelSelection::Federer => "Federer",
            ModelSelection::Nadal => "Nadal",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ModelSelection::Standard => "General tennis technique analysis",
            ModelSelection::Federer => "Analysis based on Roger Federer's technique",
            ModelSelection::Nadal => "Analysis based on Rafael Nadal's technique",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ModelSelection::Standard => ModelSelection::Federer,
            ModelSelection::Federer => ModelSelection::Nadal,
            ModelSelection::Nadal => ModelSelection::Standard,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            ModelSelection::Standard => ModelSelection::Nadal,
            ModelSelection::Federer => ModelSelection::Standard,
            ModelSelection::Nadal => ModelSelection::Federer,
        }
    }
}

impl fmt::Display for ModelSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|model| model.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown analysis model: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_cycle() {
        let mut model = ModelSelection::default();
        assert_eq!(model, ModelSelection::Standard);
        for _ in 0..ModelSelection::ALL.len() {
            model = model.next();
        }
        assert_eq!(model, ModelSelection::Standard);
        assert_eq!(ModelSelection::Standard.prev(), ModelSelection::Nadal);
    }

    #[test]
    fn test_model_parse() {
        assert_eq!("federer".parse(), Ok(ModelSelection::Federer));
        assert_eq!(" Nadal ".parse(), Ok(ModelSelection::Nadal));
        assert!("djokovic".parse::<ModelSelection>().is_err());
    }

    #[test]
    fn test_model_serde_uses_ids() {
        let json = serde_json::to_string(&ModelSelection::Federer).unwrap();
        assert_eq!(json, "\"federer\"");
    }
}
