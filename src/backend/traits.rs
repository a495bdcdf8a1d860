//! Common traits and types for the map generation service

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Result;

/// Visual style applied to a generated map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapStyle {
    #[default]
    Realistic,
    Fantasy,
    Vintage,
    Minimalist,
}

impl MapStyle {
    pub const ALL: [MapStyle; 4] = [
        MapStyle::Realistic,
        MapStyle::Fantasy,
        MapStyle::Vintage,
        MapStyle::Minimalist,
    ];

    /// Wire name of the style
    pub fn as_str(&self) -> &'static str {
        match self {
            MapStyle::Realistic => "realistic",
            MapStyle::Fantasy => "fantasy",
            MapStyle::Vintage => "vintage",
            MapStyle::Minimalist => "minimalist",
        }
    }
}

impl fmt::Display for MapStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MapStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        MapStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == wanted)
            .ok_or_else(|| {
                format!(
                    "unknown map style '{}', expected one of: realistic, fantasy, vintage, minimalist",
                    s
                )
            })
    }
}

/// Request body sent to the generation service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapRequest {
    pub prompt: String,
    pub style: MapStyle,
}

/// A successfully generated map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMap {
    /// Location of the rendered image, never empty
    pub url: String,
}

/// The remote service that turns a [`MapRequest`] into an image
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Get the service name, used in log fields
    fn name(&self) -> &str;

    /// Issue a single generation call. Implementations must not retry.
    async fn generate(&self, request: MapRequest) -> Result<GeneratedMap>;
}
