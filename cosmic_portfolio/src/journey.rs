//! The space-travel intro animation
//!
//! A 20-second, non-interactive forward-flight illusion rendered from three
//! recycled particle populations:
//! - 800 stars (white discs, motion-blur streaks at high speed)
//! - 200 dust particles (cyan accent discs with per-particle speed factors)
//! - 20 nebula clouds (large soft background discs in two hues)
//!
//! Every entity carries a depth `z` that shrinks each frame by the global
//! speed (times an entity multiplier) and is projected to the screen with a
//! perspective divide. An entity that crosses the viewer (`z <= 0`) is
//! recycled to its far plane with a fresh lateral position, producing an
//! endless approaching field. Total duration is wall-clock bounded: frame
//! rate only changes smoothness, never journey length.
//!
//! The animator owns its collections and mutates them only through
//! [`JourneyAnimator::tick`], which takes the elapsed time since activation
//! so tests can drive it with a fake clock and no drawing surface.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Total journey duration in milliseconds
pub const JOURNEY_DURATION_MS: f32 = 20_000.0;
/// Delay between the flight ending and the completion signal
pub const ARRIVAL_GRACE_MS: f32 = 1_000.0;

const STAR_COUNT: usize = 800;
const STAR_FAR: f32 = 2000.0;
const STAR_SPREAD: f32 = 2000.0;

const DUST_COUNT: usize = 200;
const DUST_FAR: f32 = 1000.0;
const DUST_SPREAD: f32 = 1000.0;

const CLOUD_COUNT: usize = 20;
const CLOUD_RECYCLE_DEPTH: f32 = 3000.0;
const CLOUD_SPREAD: f32 = 3000.0;

/// Perspective projection scale: screen = world / depth * SCALE + center
const PROJECTION_SCALE: f32 = 1000.0;

/// Nebula hues: deep violet and dark blue
const NEBULA_VIOLET: [f32; 3] = [0.298, 0.114, 0.584];
const NEBULA_BLUE: [f32; 3] = [0.118, 0.251, 0.686];
/// Accent color for dust particles
const DUST_COLOR: [f32; 3] = [0.392, 0.784, 1.0];
/// Core color of the arrival glow (violet fading to blue at the rim)
const ARRIVAL_CORE: [f32; 3] = [0.576, 0.2, 0.918];

struct Star {
    x: f32,
    y: f32,
    z: f32,
    size: f32,
}

struct DustParticle {
    x: f32,
    y: f32,
    z: f32,
    speed_factor: f32,
    size: f32,
    base_opacity: f32,
}

struct NebulaCloud {
    x: f32,
    y: f32,
    z: f32,
    size: f32,
    base_opacity: f32,
    color: [f32; 3],
}

/// How a disc's fragment falloff should be shaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscKind {
    /// Hard-edged filled circle (stars, dust)
    Solid,
    /// Radial gradient fading to transparent at the rim (nebula clouds)
    Soft,
    /// Three-stop destination glow (violet core, blue mid, transparent rim)
    ArrivalGlow,
}

/// One disc to draw this frame, in screen pixels
#[derive(Debug, Clone, Copy)]
pub struct Disc {
    pub center: Vec2,
    pub radius: f32,
    pub color: [f32; 4],
    pub kind: DiscKind,
}

/// A motion-blur line segment behind a fast star
#[derive(Debug, Clone, Copy)]
pub struct Streak {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f32,
    pub color: [f32; 4],
}

/// Where the journey stands after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JourneyStatus {
    /// Still flying (progress < 1)
    InFlight,
    /// Flight over, holding the final frame through the grace delay
    Landed,
    /// Grace delay elapsed; the host should leave the journey phase
    Complete,
}

/// Everything the host needs to present one frame
pub struct JourneyFrame {
    /// Elapsed fraction of the journey in [0, 1], monotonically non-decreasing
    pub progress: f32,
    /// Instantaneous field speed from the three-piece schedule
    pub speed: f32,
    /// Whole-surface shake offset in pixels, applied to both axes
    pub shake: f32,
    /// Painter-ordered discs: clouds first, then stars, then dust
    pub discs: Vec<Disc>,
    /// Star streaks, drawn over the discs
    pub streaks: Vec<Streak>,
    /// Destination glow, drawn last when present
    pub arrival_glow: Option<Disc>,
    pub status: JourneyStatus,
}

/// Instantaneous field speed for a given progress.
///
/// Three linear pieces: launch ramps 0 → 2 over the first quarter, cruise
/// ramps 2 → 12 over the middle half, landing eases 12 → 9.5 over the last
/// quarter. The landing leg deliberately never reaches zero; the field is
/// still moving at arrival.
pub fn speed_at(progress: f32) -> f32 {
    if progress < 0.25 {
        progress * 8.0
    } else if progress < 0.75 {
        2.0 + (progress - 0.25) * 20.0
    } else {
        12.0 - (progress - 0.75) * 10.0
    }
}

/// Shake offset in pixels. Exactly zero outside the open (0.3, 0.7) window.
pub fn shake_at(progress: f32, elapsed_ms: f32) -> f32 {
    if progress > 0.3 && progress < 0.7 {
        (elapsed_ms * 0.01).sin() * 3.0
    } else {
        0.0
    }
}

/// Owns the particle field for one journey activation.
///
/// Created when the journey phase begins and dropped when it ends; dropping
/// it is the whole teardown (nothing keeps drawing afterwards).
pub struct JourneyAnimator {
    width: f32,
    height: f32,
    center: Vec2,
    stars: Vec<Star>,
    dust: Vec<DustParticle>,
    clouds: Vec<NebulaCloud>,
    rng: StdRng,
    /// Set once progress reaches 1; the field stops mutating from then on
    frozen: bool,
}

impl JourneyAnimator {
    /// Create the animator for a viewport. Dimensions are read once here;
    /// the journey does not track live resizes.
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_rng(width, height, StdRng::from_entropy())
    }

    /// Deterministic construction for tests
    pub fn seeded(width: f32, height: f32, seed: u64) -> Self {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }

    fn with_rng(width: f32, height: f32, mut rng: StdRng) -> Self {
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                x: rng.gen_range(-STAR_SPREAD..STAR_SPREAD),
                y: rng.gen_range(-STAR_SPREAD..STAR_SPREAD),
                z: rng.gen_range(0.0..STAR_FAR),
                size: rng.gen_range(1.0..4.0),
            })
            .collect();

        let dust = (0..DUST_COUNT)
            .map(|_| DustParticle {
                x: rng.gen_range(-DUST_SPREAD..DUST_SPREAD),
                y: rng.gen_range(-DUST_SPREAD..DUST_SPREAD),
                z: rng.gen_range(0.0..DUST_FAR),
                speed_factor: rng.gen_range(1.0..3.0),
                size: rng.gen_range(0.5..2.5),
                base_opacity: rng.gen_range(0.3..0.8),
            })
            .collect();

        let clouds = (0..CLOUD_COUNT)
            .map(|_| NebulaCloud {
                x: rng.gen_range(-CLOUD_SPREAD..CLOUD_SPREAD),
                y: rng.gen_range(-CLOUD_SPREAD..CLOUD_SPREAD),
                z: rng.gen_range(1000.0..4000.0),
                size: rng.gen_range(100.0..400.0),
                base_opacity: rng.gen_range(0.1..0.4),
                color: if rng.gen_bool(0.5) {
                    NEBULA_VIOLET
                } else {
                    NEBULA_BLUE
                },
            })
            .collect();

        Self {
            width,
            height,
            center: Vec2::new(width / 2.0, height / 2.0),
            stars,
            dust,
            clouds,
            rng,
            frozen: false,
        }
    }

    /// Advance and project one frame.
    ///
    /// `elapsed` is the time since the journey phase was activated. Ticking
    /// past the end keeps re-emitting the frozen final field (the flight
    /// lasts exactly 20 seconds of wall clock regardless of frame rate).
    pub fn tick(&mut self, elapsed: Duration) -> JourneyFrame {
        let elapsed_ms = elapsed.as_secs_f64() as f32 * 1000.0;
        let progress = (elapsed_ms / JOURNEY_DURATION_MS).min(1.0);
        let speed = speed_at(progress);

        if !self.frozen {
            self.advance(speed);
            if progress >= 1.0 {
                self.frozen = true;
            }
        }

        let status = if progress < 1.0 {
            JourneyStatus::InFlight
        } else if elapsed_ms < JOURNEY_DURATION_MS + ARRIVAL_GRACE_MS {
            JourneyStatus::Landed
        } else {
            JourneyStatus::Complete
        };

        let mut frame = JourneyFrame {
            progress,
            speed,
            shake: shake_at(progress, elapsed_ms),
            discs: Vec::with_capacity(CLOUD_COUNT + STAR_COUNT + DUST_COUNT),
            streaks: Vec::new(),
            arrival_glow: None,
            status,
        };

        self.emit_clouds(&mut frame);
        self.emit_stars(speed, &mut frame);
        self.emit_dust(&mut frame);

        if progress > 0.75 {
            let t = (progress - 0.75) * 4.0;
            frame.arrival_glow = Some(Disc {
                center: self.center,
                radius: (t * 300.0 + 100.0).max(1.0),
                color: [ARRIVAL_CORE[0], ARRIVAL_CORE[1], ARRIVAL_CORE[2], t * 0.8],
                kind: DiscKind::ArrivalGlow,
            });
        }

        frame
    }

    /// Decrement depths and recycle anything that crossed the viewer.
    ///
    /// Recycling happens before projection, so depth is strictly positive
    /// whenever it is used as a divisor.
    fn advance(&mut self, speed: f32) {
        for cloud in &mut self.clouds {
            cloud.z -= speed * 0.3;
            if cloud.z <= 0.0 {
                cloud.z = CLOUD_RECYCLE_DEPTH;
                cloud.x = self.rng.gen_range(-CLOUD_SPREAD..CLOUD_SPREAD);
                cloud.y = self.rng.gen_range(-CLOUD_SPREAD..CLOUD_SPREAD);
            }
        }

        for star in &mut self.stars {
            star.z -= speed;
            if star.z <= 0.0 {
                star.z = STAR_FAR;
                star.x = self.rng.gen_range(-STAR_SPREAD..STAR_SPREAD);
                star.y = self.rng.gen_range(-STAR_SPREAD..STAR_SPREAD);
            }
        }

        for particle in &mut self.dust {
            particle.z -= speed * particle.speed_factor;
            if particle.z <= 0.0 {
                particle.z = DUST_FAR;
                particle.x = self.rng.gen_range(-DUST_SPREAD..DUST_SPREAD);
                particle.y = self.rng.gen_range(-DUST_SPREAD..DUST_SPREAD);
            }
        }
    }

    fn project(&self, x: f32, y: f32, z: f32) -> Vec2 {
        Vec2::new(
            (x / z) * PROJECTION_SCALE + self.center.x,
            (y / z) * PROJECTION_SCALE + self.center.y,
        )
    }

    fn emit_clouds(&self, frame: &mut JourneyFrame) {
        for cloud in &self.clouds {
            let pos = self.project(cloud.x, cloud.y, cloud.z);
            let size = (300.0 - cloud.z * 0.1) / cloud.z * PROJECTION_SCALE;

            let on_screen = pos.x > -size
                && pos.x < self.width + size
                && pos.y > -size
                && pos.y < self.height + size;
            if on_screen && size > 0.0 {
                frame.discs.push(Disc {
                    center: pos,
                    radius: size.max(1.0),
                    color: [cloud.color[0], cloud.color[1], cloud.color[2], cloud.base_opacity],
                    kind: DiscKind::Soft,
                });
            }
        }
    }

    fn emit_stars(&self, speed: f32, frame: &mut JourneyFrame) {
        for star in &self.stars {
            let pos = self.project(star.x, star.y, star.z);
            let falloff = 1.0 - star.z / STAR_FAR;
            let size = falloff * star.size;
            let opacity = falloff;

            if pos.x > 0.0 && pos.x < self.width && pos.y > 0.0 && pos.y < self.height {
                frame.discs.push(Disc {
                    center: pos,
                    radius: size.max(0.5),
                    color: [1.0, 1.0, 1.0, opacity],
                    kind: DiscKind::Solid,
                });

                // Motion blur: a line from roughly one sub-step ago
                if speed > 5.0 {
                    let prev = self.project(
                        star.x + speed * 2.0,
                        star.y + speed * 2.0,
                        star.z + speed,
                    );
                    frame.streaks.push(Streak {
                        from: prev,
                        to: pos,
                        width: (size * 0.5).max(0.5),
                        color: [1.0, 1.0, 1.0, opacity * 0.5],
                    });
                }
            }
        }
    }

    fn emit_dust(&self, frame: &mut JourneyFrame) {
        for particle in &self.dust {
            let pos = self.project(particle.x, particle.y, particle.z);
            let falloff = 1.0 - particle.z / DUST_FAR;
            let size = falloff * particle.size;
            let opacity = falloff * particle.base_opacity;

            let on_screen =
                pos.x > 0.0 && pos.x < self.width && pos.y > 0.0 && pos.y < self.height;
            if on_screen && size > 0.0 {
                frame.discs.push(Disc {
                    center: pos,
                    radius: size.max(0.5),
                    color: [DUST_COLOR[0], DUST_COLOR[1], DUST_COLOR[2], opacity],
                    kind: DiscKind::Solid,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn animator() -> JourneyAnimator {
        JourneyAnimator::seeded(1280.0, 720.0, 42)
    }

    #[test]
    fn speed_schedule_launch_leg() {
        assert_eq!(speed_at(0.0), 0.0);
        assert!((speed_at(0.1) - 0.8).abs() < 1e-6);
        assert!((speed_at(0.2499) - 1.9992).abs() < 1e-3);
    }

    #[test]
    fn speed_schedule_cruise_leg() {
        assert!((speed_at(0.25) - 2.0).abs() < 1e-6);
        assert!((speed_at(0.5) - 7.0).abs() < 1e-6);
        assert!((speed_at(0.7499) - 11.998).abs() < 1e-3);
    }

    #[test]
    fn speed_schedule_landing_leg_never_reaches_zero() {
        assert!((speed_at(0.75) - 12.0).abs() < 1e-6);
        assert!((speed_at(0.9) - 10.5).abs() < 1e-5);
        // Bottoms out at 9.5 rather than decelerating to a stop.
        assert!((speed_at(1.0) - 9.5).abs() < 1e-6);
    }

    #[test]
    fn progress_is_clamped_and_monotonic() {
        let mut animator = animator();
        let mut last = -1.0f32;
        for millis in [0u64, 1, 500, 5000, 10_000, 19_999, 20_000, 25_000] {
            let frame = animator.tick(ms(millis));
            assert!(frame.progress >= last);
            assert!(frame.progress <= 1.0);
            last = frame.progress;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn first_frame_is_quiet() {
        let mut animator = animator();
        let frame = animator.tick(ms(0));
        assert_eq!(frame.progress, 0.0);
        assert_eq!(frame.speed, 0.0);
        assert_eq!(frame.shake, 0.0);
        assert!(frame.arrival_glow.is_none());
        assert!(frame.streaks.is_empty());
        assert_eq!(frame.status, JourneyStatus::InFlight);
    }

    #[test]
    fn shake_window_is_exact() {
        assert_eq!(shake_at(0.3, 6000.0), 0.0);
        assert_eq!(shake_at(0.7, 14_000.0), 0.0);
        assert_eq!(shake_at(0.2, 4000.0), 0.0);
        assert_eq!(shake_at(0.8, 16_000.0), 0.0);

        let expected = (10_000.0f32 * 0.01).sin() * 3.0;
        assert!((shake_at(0.5, 10_000.0) - expected).abs() < 1e-6);
    }

    #[test]
    fn arrival_glow_near_the_end() {
        let mut animator = animator();
        let frame = animator.tick(ms(19_999));
        let glow = frame.arrival_glow.expect("glow should be active past 75%");
        assert!((glow.radius - 399.94).abs() < 0.05);
        assert!((glow.color[3] - 0.79984).abs() < 1e-3);
        assert_eq!(glow.kind, DiscKind::ArrivalGlow);
    }

    #[test]
    fn no_glow_before_final_leg() {
        let mut animator = animator();
        assert!(animator.tick(ms(14_000)).arrival_glow.is_none());
    }

    #[test]
    fn streaks_appear_only_at_high_speed() {
        let mut animator = animator();
        // progress 0.1 -> speed 0.8, below the streak threshold
        assert!(animator.tick(ms(2000)).streaks.is_empty());
        // progress 0.5 -> speed 7.0
        let frame = animator.tick(ms(10_000));
        assert!(!frame.streaks.is_empty());
        assert!(frame.streaks.iter().all(|s| s.width > 0.0));
    }

    #[test]
    fn depths_stay_in_range_across_the_flight() {
        let mut animator = animator();
        let mut millis = 0u64;
        while millis <= 20_000 {
            animator.tick(ms(millis));
            for star in &animator.stars {
                assert!(star.z > 0.0 && star.z <= STAR_FAR);
                assert!(star.x.abs() <= STAR_SPREAD && star.y.abs() <= STAR_SPREAD);
            }
            for particle in &animator.dust {
                assert!(particle.z > 0.0 && particle.z <= DUST_FAR);
                assert!(particle.x.abs() <= DUST_SPREAD);
            }
            for cloud in &animator.clouds {
                assert!(cloud.z > 0.0 && cloud.z <= 4000.0);
                assert!(cloud.x.abs() <= CLOUD_SPREAD);
            }
            millis += 160;
        }
    }

    #[test]
    fn no_disc_has_a_non_positive_radius() {
        let mut animator = animator();
        for millis in (0..=20_000).step_by(500) {
            let frame = animator.tick(ms(millis as u64));
            assert!(frame.discs.iter().all(|d| d.radius > 0.0));
            if let Some(glow) = frame.arrival_glow {
                assert!(glow.radius > 0.0);
            }
        }
    }

    #[test]
    fn field_freezes_after_landing() {
        let mut animator = animator();
        animator.tick(ms(20_000));
        let depth_snapshot: Vec<f32> = animator.stars.iter().map(|s| s.z).collect();

        // Further ticks re-emit the frozen field without mutating it.
        animator.tick(ms(20_500));
        let after: Vec<f32> = animator.stars.iter().map(|s| s.z).collect();
        assert_eq!(depth_snapshot, after);
    }

    #[test]
    fn status_follows_the_grace_delay() {
        let mut animator = animator();
        assert_eq!(animator.tick(ms(19_000)).status, JourneyStatus::InFlight);
        assert_eq!(animator.tick(ms(20_000)).status, JourneyStatus::Landed);
        assert_eq!(animator.tick(ms(20_900)).status, JourneyStatus::Landed);
        assert_eq!(animator.tick(ms(21_000)).status, JourneyStatus::Complete);
    }

    #[test]
    fn teardown_mid_flight_is_safe() {
        let mut animator = animator();
        animator.tick(ms(10_000));
        drop(animator);
        // Dropping the animator is the whole teardown; nothing else to stop.
    }

    #[test]
    fn population_counts_match_the_design() {
        let animator = animator();
        assert_eq!(animator.stars.len(), STAR_COUNT);
        assert_eq!(animator.dust.len(), DUST_COUNT);
        assert_eq!(animator.clouds.len(), CLOUD_COUNT);
    }
}
