//! Shared application-wide constants.
//! Centralizes the surface geometry and scene defaults used across rendering and the UI.

// Surface
/// Width of the output surface in logical pixels.
pub const CANVAS_WIDTH: u32 = 800;
/// Height of the output surface in logical pixels.
pub const CANVAS_HEIGHT: u32 = 550;
/// Edge length of one grid cell in pixels.
pub const BLOCK_SIZE: u32 = 8;
/// Height reserved below the canvas for the status bar (in screen points).
pub const STATUS_BAR_HEIGHT: f32 = 30.0;

// Scene defaults
/// Number of planets requested per scene.
pub const DEFAULT_PLANET_COUNT: usize = 3;
/// Smallest planet radius in grid cells.
pub const MIN_PLANET_RADIUS: i32 = 10;
/// Largest planet radius in grid cells.
pub const MAX_PLANET_RADIUS: i32 = 20;
/// Upper bound for the random ring count of a planet.
pub const MAX_RINGS: u32 = 3;
/// Ring fade parameter. Accepted by the ring renderer but not used numerically.
pub const RING_FADE: u32 = 15;
/// Distance in cells between a planet's surface and its first ring, and between rings.
pub const RING_SPACING: i32 = 10;
/// Angular step between ring samples, in degrees.
pub const RING_STEP_DEGREES: u32 = 4;

// Moons
/// Upper bound for the random moon count of a planet.
pub const MAX_MOONS: u32 = 3;
/// Smallest moon radius in grid cells.
pub const MIN_MOON_RADIUS: i32 = 3;
/// Largest moon radius in grid cells.
pub const MAX_MOON_RADIUS: i32 = 6;
/// Gap in cells between a planet's surface and a moon's surface, drawn per moon.
pub const MOON_GAP: std::ops::RangeInclusive<i32> = 8..=18;

// Shading
/// Rim-light band width in normalized distance around the planet edge.
pub const RIM_WIDTH: f64 = 0.08;
/// How far rim cells are pulled towards white.
pub const RIM_HIGHLIGHT_MIX: f64 = 0.8;

// Placement
/// Minimum gap between a planet's disk and the grid edge.
pub const PLACEMENT_MARGIN: i32 = 16;
/// Extra clearance required between two planets beyond their radii.
pub const PLACEMENT_SPACING: f64 = 28.0;
/// Sampling attempts allowed per requested planet.
pub const ATTEMPTS_PER_PLANET: usize = 20;

// Stars
/// Stars per grid cell when the star field is enabled.
pub const STAR_DENSITY: f64 = 0.004;

// Export
/// File name offered for PNG exports.
pub const EXPORT_FILE_NAME: &str = "space_art.png";
