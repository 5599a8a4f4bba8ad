//! Compiled-in defaults. [`ShowcaseParams`](crate::params::ShowcaseParams)
//! starts from these and may override them at startup.

/// Road scroll per frame, in world units (towards -X).
pub const ROAD_SCROLL_STEP: f32 = 0.7;

/// Backdrop texture offset advance per frame, in UV units.
pub const BACKDROP_SCROLL_STEP: f32 = 0.0005;

/// Offset past which the backdrop loops to the next texture.
pub const BACKDROP_LOOP_THRESHOLD: f32 = 0.5;

/// X the vehicle exits to before a backdrop change.
pub const EXIT_TARGET_X: f32 = -500.0;
pub const EXIT_DURATION_MS: u64 = 500;

/// Start and end X of the drive-across that follows every backdrop change.
pub const CROSS_FROM_X: f32 = -1200.0;
pub const CROSS_TO_X: f32 = 1400.0;
pub const CROSS_DURATION_MS: u64 = 17_000;

/// Delay between picking a vehicle and entering travel mode.
pub const SELECTION_DELAY_MS: u64 = 1000;

/// Backdrop name that turns the snow overlay on.
pub const SNOW_BACKDROP: &str = "Winter";

pub const SNOW_PARTICLE_COUNT: usize = 1000;
/// Half extents of the box particles are scattered in.
pub const SNOW_HALF_WIDTH: f32 = 500.0;
pub const SNOW_HALF_HEIGHT: f32 = 250.0;
pub const SNOW_HALF_DEPTH: f32 = 500.0;
/// Vertical fall per frame.
pub const SNOW_FALL_STEP: f32 = 0.1;

pub const DEFAULT_RNG_SEED: u64 = 42;

/// Viewport used for pointer mapping until the first cursor event arrives.
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1280.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 720.0;

/// Camera placement and projection.
pub const CAMERA_Z: f32 = 500.0;
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
