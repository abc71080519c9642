//! # Floorplan Common - Shared Project Types
//!
//! Building / floor / wall / opening hierarchy exchanged with the client
//! application. The server's project endpoint answers with a fixed sample of
//! this hierarchy; the CLI can export the same sample.
//!
//! ## Example
//!
//! ```rust
//! use floorplan_common::ProjectData;
//!
//! let project = ProjectData::sample();
//! assert_eq!(project.buildings[0].floors[0].walls.len(), 2);
//! println!("{}", project.to_json().unwrap());
//! ```

use serde::{Deserialize, Serialize};
use schemars::JsonSchema;
use thiserror::Error;
use uuid::Uuid;

// Re-exports for convenience
pub use chrono::{DateTime, Local, NaiveDateTime};

/// Format of [`ProjectData::last_updated`].
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Result type for shared operations
pub type Result<T> = std::result::Result<T, CommonError>;

#[derive(Error, Debug)]
pub enum CommonError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid timestamp '{value}': {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// 3D vector, metres. Placement points use whole-metre `Vec3<i64>`,
/// opening offsets use `Vec3<f64>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Vec3<T = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// Whole-metre grid point used for building and wall placement
pub type GridPoint = Vec3<i64>;

impl<T> Vec3<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl GridPoint {
    pub const ORIGIN: GridPoint = Vec3::new(0, 0, 0);

    pub fn distance_to(self, other: Self) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        let dz = (self.z - other.z) as f64;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Top-level project document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectData {
    pub project_id: String,
    /// Local time, `YYYY-MM-DD HH:MM:SS`
    pub last_updated: String,
    pub buildings: Vec<Building>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Building {
    pub id: String,
    pub name: String,
    pub position: GridPoint,
    pub floors: Vec<Floor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Floor {
    pub id: String,
    pub name: String,
    /// Storey height in metres
    pub height: f64,
    pub walls: Vec<Wall>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Wall {
    pub id: String,
    pub name: String,
    pub properties: WallProperties,
    /// Openings hosted by this wall
    pub children: Vec<Opening>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WallProperties {
    pub start_point: GridPoint,
    pub end_point: GridPoint,
    pub thickness: f64,
}

impl WallProperties {
    pub fn length(&self) -> f64 {
        self.start_point.distance_to(self.end_point)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OpeningKind {
    Door,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Opening {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: OpeningKind,
    pub properties: OpeningProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OpeningProperties {
    /// Offset from the wall's start point
    pub offset: Vec3<f64>,
    pub width: f64,
    pub height: f64,
}

impl ProjectData {
    /// Sample project with a fresh id, stamped with the current local time.
    pub fn sample() -> Self {
        Self::sample_with(Uuid::new_v4(), Local::now().naive_local())
    }

    /// Sample project: one building, one floor, two walls, one door.
    pub fn sample_with(project_id: Uuid, last_updated: NaiveDateTime) -> Self {
        let door = Opening {
            id: "door_001".to_string(),
            name: "door_1".to_string(),
            kind: OpeningKind::Door,
            properties: OpeningProperties {
                offset: Vec3::new(1.0, 0.0, 0.0),
                width: 1.2,
                height: 2.1,
            },
        };

        let walls = vec![
            Wall {
                id: "w_1".to_string(),
                name: "wall_1".to_string(),
                properties: WallProperties {
                    start_point: GridPoint::ORIGIN,
                    end_point: Vec3::new(10, 0, 0),
                    thickness: 0.25,
                },
                children: vec![door],
            },
            Wall {
                id: "w_2".to_string(),
                name: "wall_2".to_string(),
                properties: WallProperties {
                    start_point: Vec3::new(10, 0, 0),
                    end_point: Vec3::new(10, 0, 10),
                    thickness: 0.25,
                },
                children: Vec::new(),
            },
        ];

        Self {
            project_id: project_id.to_string(),
            last_updated: last_updated.format(TIMESTAMP_FORMAT).to_string(),
            buildings: vec![Building {
                id: "b_1".to_string(),
                name: "empty_building".to_string(),
                position: GridPoint::ORIGIN,
                floors: vec![Floor {
                    id: "f_1".to_string(),
                    name: "1층".to_string(),
                    height: 3.0,
                    walls,
                }],
            }],
        }
    }

    /// Parse `last_updated` back into a timestamp
    pub fn last_updated_at(&self) -> Result<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.last_updated, TIMESTAMP_FORMAT).map_err(|source| {
            CommonError::Timestamp {
                value: self.last_updated.clone(),
                source,
            }
        })
    }

    /// Get the JSON schema of the project document
    pub fn schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(ProjectData)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
