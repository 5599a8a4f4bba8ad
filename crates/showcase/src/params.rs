//! Data-driven showcase parameters.
//!
//! Gathers the compiled-in constants from [`config`](crate::config) into a
//! single [`ShowcaseParams`] resource so they can be tuned without
//! recompiling. The binary may replace the defaults with a JSON override at
//! startup; systems always read `Res<ShowcaseParams>`.

use std::fmt;
use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config;

// ---------------------------------------------------------------------------
// ParamsError
// ---------------------------------------------------------------------------

/// Errors raised while loading a parameter override.
#[derive(Debug)]
pub enum ParamsError {
    /// The override file could not be read.
    Io(std::io::Error),
    /// The override is not valid JSON for [`ShowcaseParams`].
    Parse(serde_json::Error),
    /// A field parsed but holds a value the choreography cannot use.
    Invalid { field: &'static str, reason: String },
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamsError::Io(e) => write!(f, "I/O error: {e}"),
            ParamsError::Parse(e) => write!(f, "Parse error: {e}"),
            ParamsError::Invalid { field, reason } => {
                write!(f, "Invalid value for `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for ParamsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParamsError::Io(e) => Some(e),
            ParamsError::Parse(e) => Some(e),
            ParamsError::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for ParamsError {
    fn from(e: std::io::Error) -> Self {
        ParamsError::Io(e)
    }
}

impl From<serde_json::Error> for ParamsError {
    fn from(e: serde_json::Error) -> Self {
        ParamsError::Parse(e)
    }
}

// ---------------------------------------------------------------------------
// ShowcaseParams
// ---------------------------------------------------------------------------

/// Largest accepted snow box half extent; the scatter range `2 * e` must
/// stay finite.
pub const MAX_SNOW_HALF_EXTENT: f32 = 1.0e6;

/// Largest accepted snow particle count.
pub const MAX_SNOW_PARTICLES: usize = 100_000;

/// Tunables for the travel choreography, backdrop cycling and snow overlay.
///
/// Missing fields in a JSON override fall back to the compiled-in default.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseParams {
    pub road_scroll_step: f32,
    pub backdrop_scroll_step: f32,
    pub backdrop_loop_threshold: f32,
    pub exit_target_x: f32,
    pub exit_duration_ms: u64,
    pub cross_from_x: f32,
    pub cross_to_x: f32,
    pub cross_duration_ms: u64,
    pub selection_delay_ms: u64,
    pub snow_particle_count: usize,
    pub snow_half_extents: [f32; 3],
    pub snow_fall_step: f32,
    pub rng_seed: u64,
}

impl Default for ShowcaseParams {
    fn default() -> Self {
        Self {
            road_scroll_step: config::ROAD_SCROLL_STEP,
            backdrop_scroll_step: config::BACKDROP_SCROLL_STEP,
            backdrop_loop_threshold: config::BACKDROP_LOOP_THRESHOLD,
            exit_target_x: config::EXIT_TARGET_X,
            exit_duration_ms: config::EXIT_DURATION_MS,
            cross_from_x: config::CROSS_FROM_X,
            cross_to_x: config::CROSS_TO_X,
            cross_duration_ms: config::CROSS_DURATION_MS,
            selection_delay_ms: config::SELECTION_DELAY_MS,
            snow_particle_count: config::SNOW_PARTICLE_COUNT,
            snow_half_extents: [
                config::SNOW_HALF_WIDTH,
                config::SNOW_HALF_HEIGHT,
                config::SNOW_HALF_DEPTH,
            ],
            snow_fall_step: config::SNOW_FALL_STEP,
            rng_seed: config::DEFAULT_RNG_SEED,
        }
    }
}

impl ShowcaseParams {
    /// Parse and validate a JSON override.
    pub fn from_json_str(json: &str) -> Result<Self, ParamsError> {
        let params: ShowcaseParams = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Read, parse and validate a JSON override file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self, ParamsError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        if !(self.backdrop_loop_threshold > 0.0) {
            return Err(ParamsError::Invalid {
                field: "backdrop_loop_threshold",
                reason: format!("must be positive, got {}", self.backdrop_loop_threshold),
            });
        }
        if !(self.backdrop_scroll_step > 0.0) {
            return Err(ParamsError::Invalid {
                field: "backdrop_scroll_step",
                reason: format!("must be positive, got {}", self.backdrop_scroll_step),
            });
        }
        if self.cross_to_x <= self.cross_from_x {
            return Err(ParamsError::Invalid {
                field: "cross_to_x",
                reason: format!(
                    "must be right of cross_from_x ({} <= {})",
                    self.cross_to_x, self.cross_from_x
                ),
            });
        }
        if self
            .snow_half_extents
            .iter()
            .any(|e| !(*e > 0.0 && *e <= MAX_SNOW_HALF_EXTENT))
        {
            return Err(ParamsError::Invalid {
                field: "snow_half_extents",
                reason: format!(
                    "all extents must be in (0, {MAX_SNOW_HALF_EXTENT}], got {:?}",
                    self.snow_half_extents
                ),
            });
        }
        if self.snow_particle_count > MAX_SNOW_PARTICLES {
            return Err(ParamsError::Invalid {
                field: "snow_particle_count",
                reason: format!(
                    "at most {MAX_SNOW_PARTICLES} particles, got {}",
                    self.snow_particle_count
                ),
            });
        }
        Ok(())
    }

    pub fn exit_duration(&self) -> Duration {
        Duration::from_millis(self.exit_duration_ms)
    }

    pub fn cross_duration(&self) -> Duration {
        Duration::from_millis(self.cross_duration_ms)
    }

    pub fn selection_delay(&self) -> Duration {
        Duration::from_millis(self.selection_delay_ms)
    }

    /// Lowest Y a snow particle reaches before wrapping back to the top.
    pub fn snow_floor(&self) -> f32 {
        -self.snow_half_extents[1]
    }

    pub fn snow_ceiling(&self) -> f32 {
        self.snow_half_extents[1]
    }
}
