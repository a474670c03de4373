use rand::Rng;
use silk_core::{Particle, SimConfig};

/// Generate the initial particle lattice.
///
/// Sites cover a `grid_width x grid_height` grid centered near the origin:
/// index `(i, j)` lands at `((i - w/2) * spacing, (j - h/2) * spacing)`.
/// Each site gets a small random velocity so the lattice does not start
/// perfectly static; with `velocity_jitter = 0` the result is fully
/// deterministic.
pub fn generate_lattice(config: &SimConfig, rng: &mut impl Rng) -> Vec<Particle> {
    let mut particles = Vec::with_capacity(config.particle_count() as usize);

    let center_x = config.grid_width as f32 / 2.0;
    let center_y = config.grid_height as f32 / 2.0;

    for i in 0..config.grid_width {
        for j in 0..config.grid_height {
            let position = [
                (i as f32 - center_x) * config.spacing,
                (j as f32 - center_y) * config.spacing,
            ];
            let velocity = [
                rng.gen_range(-config.velocity_jitter..=config.velocity_jitter),
                rng.gen_range(-config.velocity_jitter..=config.velocity_jitter),
            ];

            // Unique only while the lattice is square; `i * grid_height + j`
            // would hold for any shape.
            let unique_id = i * config.grid_width + j;

            particles.push(Particle::at_site(
                position,
                velocity,
                unique_id,
                config.initial_age,
            ));
        }
    }

    particles
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use silk_core::constants::{INITIAL_COLOR, INITIAL_MASS, INITIAL_RADIUS};
    use std::collections::HashSet;

    fn at_rest(config: &SimConfig) -> Vec<Particle> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        generate_lattice(config, &mut rng)
    }

    #[test]
    fn default_lattice_has_one_particle_per_site() {
        let config = SimConfig::default();
        let particles = at_rest(&config);

        assert_eq!(particles.len(), 625);

        let ids: HashSet<u32> = particles.iter().map(|p| p.unique_id).collect();
        assert_eq!(ids.len(), 625);
        assert!(ids.iter().all(|&id| id < 625));
    }

    #[test]
    fn sites_start_from_shared_constants() {
        let config = SimConfig::default();
        for p in at_rest(&config) {
            assert_eq!(p.age, config.initial_age);
            assert_eq!(p.mass, INITIAL_MASS);
            assert_eq!(p.radius, INITIAL_RADIUS);
            assert_eq!(p.color, INITIAL_COLOR);
            assert_eq!(p.acceleration, [0.0, 0.0]);
            assert_eq!(p.viscosity, 0.0);
            assert_eq!(p.elasticity, 0.0);
            assert_eq!(p.surface_tension, 0.0);
        }
    }

    #[test]
    fn jitter_stays_within_configured_range() {
        let config = SimConfig::default();
        for p in at_rest(&config) {
            assert!(p.velocity[0].abs() <= config.velocity_jitter);
            assert!(p.velocity[1].abs() <= config.velocity_jitter);
        }
    }

    #[test]
    fn same_seed_reproduces_the_lattice() {
        let config = SimConfig::default();
        let a = at_rest(&config);
        let b = at_rest(&config);

        for (pa, pb) in a.iter().zip(&b) {
            assert_eq!(pa.position, pb.position);
            assert_eq!(pa.velocity, pb.velocity);
            assert_eq!(pa.unique_id, pb.unique_id);
        }
    }

    #[test]
    fn lattice_is_symmetric_through_its_center() {
        // The grid centers on (w/2, h/2) in index space, which sits half a
        // site off the origin: mirrored indices sum to exactly one spacing
        // below zero on both axes.
        let config = SimConfig {
            velocity_jitter: 0.0,
            ..SimConfig::default()
        };
        let particles = at_rest(&config);

        let w = config.grid_width as usize;
        let h = config.grid_height as usize;
        for i in 0..w {
            for j in 0..h {
                let a = particles[i * h + j].position;
                let b = particles[(w - 1 - i) * h + (h - 1 - j)].position;
                assert!((a[0] + b[0] + config.spacing).abs() < 1e-6);
                assert!((a[1] + b[1] + config.spacing).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn two_by_two_layout_matches_the_closed_form() {
        let config = SimConfig {
            grid_width: 2,
            grid_height: 2,
            spacing: 1.0,
            velocity_jitter: 0.0,
            ..SimConfig::default()
        };
        let particles = at_rest(&config);

        // (i - w/2) * spacing with w/2 = 1.0, in generation order
        let expected = [[-1.0, -1.0], [-1.0, 0.0], [0.0, -1.0], [0.0, 0.0]];
        for (k, p) in particles.iter().enumerate() {
            assert_eq!(p.position, expected[k]);
            assert_eq!(p.velocity, [0.0, 0.0]);
            assert_eq!(p.unique_id, k as u32);
        }
    }
}
