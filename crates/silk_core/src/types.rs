use bytemuck::{Pod, Zeroable};

use crate::constants::{INITIAL_COLOR, INITIAL_MASS, INITIAL_RADIUS};

/// GPU-resident particle record.
///
/// The layout mirrors the WGSL `Particle` struct byte for byte: vec2
/// fields are 8-aligned and the vec4 color is 16-aligned over there, so
/// the explicit `_pad` fields here are load-bearing. The update kernel
/// rewrites this record in place every frame; the draw pipeline reads the
/// same buffer as vertex input with the same stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct Particle {
    /// Position in clip-space coordinates
    pub position: [f32; 2],
    /// Velocity in clip-space units per tick
    pub velocity: [f32; 2],
    /// Point radius in pixels
    pub radius: f32,
    pub _pad0: f32,
    /// Forces applied by the update kernel, per tick
    pub acceleration: [f32; 2],
    /// Must stay positive for force integration to be well-defined
    pub mass: f32,
    pub _pad1: [f32; 3],
    /// RGBA, each channel nominally in [0, 1]
    pub color: [f32; 4],
    /// Lattice-derived identifier, unique within one generation
    pub unique_id: u32,
    /// Remaining lifetime; the update kernel counts it down
    pub age: f32,
    /// Reserved material coefficient, not read by any kernel yet
    pub viscosity: f32,
    /// Reserved material coefficient, not read by any kernel yet
    pub elasticity: f32,
    /// Reserved material coefficient, not read by any kernel yet
    pub surface_tension: f32,
    pub _pad2: [f32; 3],
}

/// WGSL-side size of one particle: the array stride of the storage buffer
/// and the vertex stride of the draw pipeline
pub const PARTICLE_STRIDE: usize = 96;

// The kernels address fields by these offsets; a drift here corrupts every
// particle silently, so pin the layout at compile time.
const _: () = assert!(size_of::<Particle>() == PARTICLE_STRIDE);
const _: () = assert!(core::mem::offset_of!(Particle, velocity) == 8);
const _: () = assert!(core::mem::offset_of!(Particle, radius) == 16);
const _: () = assert!(core::mem::offset_of!(Particle, acceleration) == 24);
const _: () = assert!(core::mem::offset_of!(Particle, mass) == 32);
const _: () = assert!(core::mem::offset_of!(Particle, color) == 48);
const _: () = assert!(core::mem::offset_of!(Particle, unique_id) == 64);
const _: () = assert!(core::mem::offset_of!(Particle, age) == 68);
const _: () = assert!(core::mem::offset_of!(Particle, surface_tension) == 80);

impl Particle {
    /// Build a lattice-site particle. Everything not passed in starts at
    /// the shared constants; the material coefficients stay zeroed until a
    /// force model reads them.
    pub fn at_site(position: [f32; 2], velocity: [f32; 2], unique_id: u32, age: f32) -> Self {
        Self {
            position,
            velocity,
            radius: INITIAL_RADIUS,
            _pad0: 0.0,
            acceleration: [0.0, 0.0],
            mass: INITIAL_MASS,
            _pad1: [0.0; 3],
            color: INITIAL_COLOR,
            unique_id,
            age,
            viscosity: 0.0,
            elasticity: 0.0,
            surface_tension: 0.0,
            _pad2: [0.0; 3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_bytes_match_stride() {
        let particles = [Particle::at_site([0.0, 0.0], [0.0, 0.0], 0, 1.0); 3];
        let bytes: &[u8] = bytemuck::cast_slice(&particles);
        assert_eq!(bytes.len(), 3 * PARTICLE_STRIDE);
    }

    #[test]
    fn site_starts_from_shared_constants() {
        let p = Particle::at_site([0.5, -0.5], [0.001, -0.001], 7, 30000.0);
        assert_eq!(p.radius, INITIAL_RADIUS);
        assert_eq!(p.mass, INITIAL_MASS);
        assert_eq!(p.color, INITIAL_COLOR);
        assert_eq!(p.acceleration, [0.0, 0.0]);
        assert_eq!(p.viscosity, 0.0);
        assert_eq!(p.elasticity, 0.0);
        assert_eq!(p.surface_tension, 0.0);
    }
}
