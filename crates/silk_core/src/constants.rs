// Lattice and integration defaults.
// Positions are expressed in clip-space units (the visible square spans
// [-1, 1] on both axes); radii are in physical pixels and resolved by the
// kernels against the dimensions buffer.

/// Columns in the generated particle lattice
pub const GRID_WIDTH: u32 = 25;

/// Rows in the generated particle lattice
pub const GRID_HEIGHT: u32 = 25;

/// Distance between neighboring lattice sites
pub const SPACING: f32 = 0.05;

/// Integration step handed to the update kernel, per frame
pub const TIME_STEP: f32 = 1.0;

/// Starting age for every particle; the update kernel counts it down and
/// fades alpha against it
pub const INITIAL_AGE: f32 = 30000.0;

/// Half-range of the uniform per-axis velocity jitter applied at creation
pub const VELOCITY_JITTER: f32 = 0.001;

/// Point radius in pixels
pub const INITIAL_RADIUS: f32 = 5.0;

/// Particle mass; force integration divides by it, so it must stay positive
pub const INITIAL_MASS: f32 = 1.0;

/// Opaque blue, the lattice's uniform starting color
pub const INITIAL_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

/// Default seed for the lattice jitter RNG
pub const DEFAULT_SEED: u64 = 42;
