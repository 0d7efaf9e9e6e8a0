//! Resource types used as crafting currency.

use serde::{Deserialize, Serialize};

pub mod crafting;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Metal,
    Crystal,
    Energy,
    Bio,
}

impl ResourceType {
    pub const ALL: [ResourceType; 4] = [
        ResourceType::Metal,
        ResourceType::Crystal,
        ResourceType::Energy,
        ResourceType::Bio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Metal => "metal",
            ResourceType::Crystal => "crystal",
            ResourceType::Energy => "energy",
            ResourceType::Bio => "bio",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "metal" => Some(ResourceType::Metal),
            "crystal" => Some(ResourceType::Crystal),
            "energy" => Some(ResourceType::Energy),
            "bio" => Some(ResourceType::Bio),
            _ => None,
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrip() {
        for res in ResourceType::ALL {
            assert_eq!(ResourceType::from_name(res.as_str()), Some(res));
        }
        assert_eq!(ResourceType::from_name("gold"), None);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ResourceType::Crystal).unwrap();
        assert_eq!(json, "\"crystal\"");
        let parsed: ResourceType = serde_json::from_str("\"bio\"").unwrap();
        assert_eq!(parsed, ResourceType::Bio);
    }
}
