use serde::{Deserialize, Serialize};

/// How hard a recipe is to cook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A recipe record from the built-in (or configured) recipe list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    /// Total time in minutes
    pub time: u32,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_optional_fields_are_omitted() {
        let recipe = Recipe {
            name: "Toast".to_string(),
            ingredients: vec!["bread".to_string()],
            steps: vec!["Toast the bread".to_string()],
            time: 3,
            difficulty: Difficulty::Easy,
            tips: None,
            image: None,
        };

        let value = serde_json::to_value(&recipe).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Toast",
                "ingredients": ["bread"],
                "steps": ["Toast the bread"],
                "time": 3,
                "difficulty": "Easy"
            })
        );
    }

    #[test]
    fn test_unknown_difficulty_is_rejected() {
        let result = serde_json::from_value::<Recipe>(json!({
            "name": "Soufflé",
            "ingredients": ["eggs"],
            "steps": ["Pray"],
            "time": 45,
            "difficulty": "Impossible"
        }));
        assert!(result.is_err());
    }
}
