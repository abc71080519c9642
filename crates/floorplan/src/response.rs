use std::{fs, path::Path};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use crate::{
    error::Result,
    types::{WallDetection, WallRect},
};

/// The `{"walls": [...]}` document returned to clients.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WallsResponse {
    #[schemars(description = "Wall bounding boxes in discovery order")]
    pub walls: Vec<WallRect>,
}

impl WallsResponse {
    pub fn new(walls: Vec<WallRect>) -> Self {
        Self { walls }
    }

    /// Get the JSON schema of the response document
    pub fn schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(WallsResponse)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Save the document to a file (e.g. `walls.json`)
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

impl From<Vec<WallRect>> for WallsResponse {
    fn from(walls: Vec<WallRect>) -> Self {
        Self::new(walls)
    }
}

impl From<WallDetection> for WallsResponse {
    fn from(detection: WallDetection) -> Self {
        Self::new(detection.walls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_and_order() {
        let response = WallsResponse::new(vec![
            WallRect::new(1, 2, 3, 4),
            WallRect::new(0, 0, 1, 1),
        ]);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "walls": [
                    {"x": 1, "y": 2, "width": 3, "height": 4},
                    {"x": 0, "y": 0, "width": 1, "height": 1}
                ]
            })
        );
    }

    #[test]
    fn empty_response_keeps_the_array() {
        let json = serde_json::to_string(&WallsResponse::default()).unwrap();
        assert_eq!(json, r#"{"walls":[]}"#);
    }

    #[test]
    fn saved_file_parses_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("walls.json");
        let response = WallsResponse::new(vec![WallRect::new(4, 5, 6, 7)]);

        response.save_json(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(WallsResponse::from_json(&content).unwrap(), response);
    }

    #[test]
    fn schema_lists_walls() {
        let schema = serde_json::to_value(WallsResponse::schema()).unwrap();
        assert!(schema["properties"]["walls"].is_object());
    }
}
