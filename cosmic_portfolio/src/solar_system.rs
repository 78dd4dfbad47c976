//! The portfolio solar-system scene
//!
//! Planets represent portfolio categories and move on closed-form circular
//! orbits around a central sun; there is no dynamics here, only
//! choreography. One configurable [`OrbitLayout`] drives radii, speeds and
//! sizing for every planet.

use glam::Vec3;
use std::f32::consts::TAU;

use crate::content::Category;

/// Layout parameters shared by all planets
#[derive(Debug, Clone)]
pub struct OrbitLayout {
    /// Orbit radius of the innermost planet
    pub base_radius: f32,
    /// Radius added per orbit index
    pub radius_step: f32,
    /// Angular speed of the innermost planet in rad/s
    pub base_speed: f32,
    /// Per-index slowdown; outer planets orbit slower, like a real system
    pub speed_falloff: f32,
    /// Display radius bounds after scaling a category's size weight
    pub min_display_radius: f32,
    pub max_display_radius: f32,
    pub size_divisor: f32,
}

impl Default for OrbitLayout {
    fn default() -> Self {
        Self {
            base_radius: 40.0,
            radius_step: 20.0,
            base_speed: 0.3,
            speed_falloff: 0.2,
            min_display_radius: 3.0,
            max_display_radius: 6.0,
            size_divisor: 6.0,
        }
    }
}

/// A category planet placed on its orbit
pub struct PlanetNode {
    pub category: &'static Category,
    pub orbit_radius: f32,
    pub orbit_speed: f32,
    pub initial_angle: f32,
    pub display_radius: f32,
    /// Self-rotation angle, visual only
    pub spin: f32,
    /// Surface seed in (0, 1); drives band frequency and gloss in the shader
    pub material: f32,
}

impl PlanetNode {
    /// Position on the XZ orbital plane at scene time `time`
    pub fn position(&self, time: f32) -> Vec3 {
        let angle = time * self.orbit_speed + self.initial_angle;
        Vec3::new(angle.cos() * self.orbit_radius, 0.0, angle.sin() * self.orbit_radius)
    }
}

/// The complete scene: sun, category planets, elapsed scene time
pub struct SolarSystem {
    pub planets: Vec<PlanetNode>,
    pub sun_radius: f32,
    pub time: f32,
    pub hovered: Option<usize>,
}

impl SolarSystem {
    pub fn new(categories: &'static [Category], layout: &OrbitLayout) -> Self {
        let count = categories.len();
        let planets = categories
            .iter()
            .enumerate()
            .map(|(index, category)| PlanetNode {
                category,
                orbit_radius: layout.base_radius + index as f32 * layout.radius_step,
                orbit_speed: layout.base_speed / (1.0 + index as f32 * layout.speed_falloff),
                initial_angle: index as f32 / count as f32 * TAU,
                display_radius: (category.size / layout.size_divisor)
                    .clamp(layout.min_display_radius, layout.max_display_radius),
                spin: 0.0,
                material: (index as f32 + 0.5) / count as f32,
            })
            .collect();

        Self {
            planets,
            sun_radius: 12.0,
            time: 0.0,
            hovered: None,
        }
    }

    /// Advance the choreography
    pub fn step(&mut self, dt: f32) {
        self.time += dt;
        for planet in &mut self.planets {
            planet.spin += 0.6 * dt;
        }
    }

    /// Current world position of planet `index`
    pub fn planet_position(&self, index: usize) -> Vec3 {
        self.planets[index].position(self.time)
    }

    /// Points of one orbit path circle, for line rendering
    pub fn orbit_path(&self, index: usize, segments: usize) -> Vec<Vec3> {
        let radius = self.planets[index].orbit_radius;
        (0..=segments)
            .map(|i| {
                let angle = i as f32 / segments as f32 * TAU;
                Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
            })
            .collect()
    }

    /// Nearest planet hit by a world-space ray, if any.
    ///
    /// The pick radius is slightly larger than the visual radius so small
    /// planets stay comfortably clickable.
    pub fn pick(&self, origin: Vec3, dir: Vec3) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;

        for (index, planet) in self.planets.iter().enumerate() {
            let center = planet.position(self.time);
            let radius = planet.display_radius * 1.2;

            let oc = origin - center;
            let b = oc.dot(dir);
            let c = oc.length_squared() - radius * radius;
            let discriminant = b * b - c;
            if discriminant < 0.0 {
                continue;
            }

            let t = -b - discriminant.sqrt();
            if t > 0.0 && best.map_or(true, |(_, best_t)| t < best_t) {
                best = Some((index, t));
            }
        }

        best.map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CATEGORIES;

    fn scene() -> SolarSystem {
        SolarSystem::new(CATEGORIES, &OrbitLayout::default())
    }

    #[test]
    fn orbit_radii_step_outward() {
        let scene = scene();
        for (i, planet) in scene.planets.iter().enumerate() {
            assert_eq!(planet.orbit_radius, 40.0 + 20.0 * i as f32);
        }
    }

    #[test]
    fn inner_planets_orbit_faster() {
        let scene = scene();
        for pair in scene.planets.windows(2) {
            assert!(pair[0].orbit_speed > pair[1].orbit_speed);
        }
        assert!((scene.planets[0].orbit_speed - 0.3).abs() < 1e-6);
    }

    #[test]
    fn planets_start_evenly_distributed() {
        let scene = scene();
        let n = scene.planets.len() as f32;
        for (i, planet) in scene.planets.iter().enumerate() {
            assert!((planet.initial_angle - i as f32 / n * TAU).abs() < 1e-6);
        }
    }

    #[test]
    fn display_radius_is_clamped() {
        let scene = scene();
        for planet in &scene.planets {
            assert!(planet.display_radius >= 3.0);
            assert!(planet.display_radius <= 6.0);
        }
    }

    #[test]
    fn material_seeds_are_distinct_and_in_range() {
        let scene = scene();
        for pair in scene.planets.windows(2) {
            assert!(pair[0].material < pair[1].material);
        }
        for planet in &scene.planets {
            assert!(planet.material > 0.0 && planet.material < 1.0);
        }
    }

    #[test]
    fn planets_stay_on_their_orbits() {
        let mut scene = scene();
        for _ in 0..100 {
            scene.step(0.35);
            for (i, planet) in scene.planets.iter().enumerate() {
                let pos = scene.planet_position(i);
                assert!((pos.length() - planet.orbit_radius).abs() < 1e-3);
                assert_eq!(pos.y, 0.0);
            }
        }
    }

    #[test]
    fn orbit_path_is_closed() {
        let scene = scene();
        let path = scene.orbit_path(2, 128);
        assert_eq!(path.len(), 129);
        assert!((path[0] - path[128]).length() < 1e-3);
    }

    #[test]
    fn pick_hits_the_planet_under_the_ray() {
        let scene = scene();
        // Planet 0 starts at angle 0 -> (40, 0, 0).
        let target = scene.planet_position(0);
        let origin = target + Vec3::new(0.0, 0.0, 100.0);
        let hit = scene.pick(origin, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(hit, Some(0));
    }

    #[test]
    fn pick_misses_empty_space() {
        let scene = scene();
        let hit = scene.pick(Vec3::new(0.0, 500.0, 0.0), Vec3::Y);
        assert_eq!(hit, None);
    }
}
