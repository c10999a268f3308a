// SPDX-License-Identifier: MPL-2.0
//! Floating particle field drawn behind the hero section.
//!
//! Particles spawn on a fixed cadence, drift upward with a small horizontal
//! wander, and fade in and out over their lifetime. Positions are stored as
//! fractions of the canvas so the field scales with the hero bounds.

use crate::ui::design_tokens::palette;
use iced::widget::canvas::{self, Cache, Geometry, Path};
use iced::{mouse, Color, Point, Rectangle, Renderer, Theme};
use rand::Rng;
use std::time::{Duration, Instant};

/// Cadence at which new particles appear.
pub const SPAWN_INTERVAL: Duration = Duration::from_millis(300);

/// Upper bound on live particles.
const MAX_PARTICLES: usize = 64;

/// Radius of a particle, in pixels.
const PARTICLE_RADIUS: f32 = 2.0;

/// Fraction of the lifetime spent fading in (and out).
const FADE_FRACTION: f32 = 0.1;

#[derive(Debug, Clone, Copy)]
struct Particle {
    /// Horizontal position as a fraction of the canvas width.
    x: f32,
    /// Vertical position as a fraction of the canvas height.
    y: f32,
    /// Horizontal wander, width fractions per second.
    drift: f32,
    /// Upward speed, height fractions per second.
    rise: f32,
    age: f32,
    lifetime: f32,
}

impl Particle {
    fn spawn(rng: &mut impl Rng) -> Self {
        let lifetime = rng.random_range(5.0..15.0);
        Self {
            x: rng.random_range(0.0..1.0),
            y: rng.random_range(0.0..1.0),
            drift: rng.random_range(-0.02..0.02),
            rise: 1.0 / lifetime,
            age: 0.0,
            lifetime,
        }
    }

    fn advance(&mut self, dt: f32) {
        self.age += dt;
        self.x += self.drift * dt;
        self.y -= self.rise * dt;
    }

    fn expired(&self) -> bool {
        self.age >= self.lifetime || self.y < -0.02
    }

    /// Opacity envelope: fade in over the first 10% of the lifetime, fade out
    /// over the last 10%.
    fn alpha(&self) -> f32 {
        let t = (self.age / self.lifetime).clamp(0.0, 1.0);
        if t < FADE_FRACTION {
            t / FADE_FRACTION
        } else if t > 1.0 - FADE_FRACTION {
            (1.0 - t) / FADE_FRACTION
        } else {
            1.0
        }
    }
}

/// Live particle state plus the canvas cache.
pub struct ParticleField {
    particles: Vec<Particle>,
    spawn_budget: Duration,
    last_tick: Option<Instant>,
    cache: Cache,
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticleField {
    #[must_use]
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            spawn_budget: Duration::ZERO,
            last_tick: None,
            cache: Cache::default(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Advances the field to `now`: moves particles, retires expired ones,
    /// and spawns new ones on the 300 ms cadence.
    pub fn tick(&mut self, now: Instant) {
        let Some(last) = self.last_tick.replace(now) else {
            return;
        };
        // Long gaps (window hidden, debugger) are treated as one short frame.
        let dt = now
            .saturating_duration_since(last)
            .min(Duration::from_millis(250));

        let secs = dt.as_secs_f32();
        for particle in &mut self.particles {
            particle.advance(secs);
        }
        self.particles.retain(|particle| !particle.expired());

        self.spawn_budget += dt;
        let mut rng = rand::rng();
        while self.spawn_budget >= SPAWN_INTERVAL {
            self.spawn_budget -= SPAWN_INTERVAL;
            if self.particles.len() < MAX_PARTICLES {
                self.particles.push(Particle::spawn(&mut rng));
            }
        }

        self.cache.clear();
    }
}

impl<Message> canvas::Program<Message> for ParticleField {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            for particle in &self.particles {
                let center = Point::new(
                    particle.x * frame.width(),
                    particle.y * frame.height(),
                );
                let dot = Path::circle(center, PARTICLE_RADIUS);
                frame.fill(
                    &dot,
                    Color {
                        a: palette::PARTICLE.a * particle.alpha(),
                        ..palette::PARTICLE
                    },
                );
            }
        });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticked(field: &mut ParticleField, start: Instant, offsets_ms: &[u64]) {
        for &ms in offsets_ms {
            field.tick(start + Duration::from_millis(ms));
        }
    }

    #[test]
    fn first_tick_only_arms_the_clock() {
        let mut field = ParticleField::new();
        field.tick(Instant::now());
        assert!(field.is_empty());
    }

    #[test]
    fn particles_spawn_on_cadence() {
        let mut field = ParticleField::new();
        let start = Instant::now();
        field.tick(start);
        // 4 frames of 250 ms = 1 s elapsed, but each frame's spawn budget
        // accrues separately: expect floor(1000/300) = 3 particles.
        ticked(&mut field, start, &[250, 500, 750, 1000]);
        assert_eq!(field.len(), 3);
    }

    #[test]
    fn population_is_capped() {
        let mut field = ParticleField::new();
        let start = Instant::now();
        field.tick(start);
        for i in 1..=2000 {
            field.tick(start + Duration::from_millis(250 * i));
        }
        assert!(field.len() <= MAX_PARTICLES);
    }

    #[test]
    fn particle_expires_after_lifetime() {
        let mut particle = Particle {
            x: 0.5,
            y: 0.5,
            drift: 0.0,
            rise: 0.2,
            age: 0.0,
            lifetime: 5.0,
        };
        particle.advance(4.9);
        assert!(!particle.expired());
        particle.advance(0.2);
        assert!(particle.expired());
    }

    #[test]
    fn particle_expires_when_leaving_the_top() {
        let mut particle = Particle {
            x: 0.5,
            y: 0.1,
            drift: 0.0,
            rise: 1.0,
            age: 0.0,
            lifetime: 15.0,
        };
        particle.advance(0.2);
        assert!(particle.expired());
    }

    #[test]
    fn alpha_envelope_fades_in_and_out() {
        let particle = |age: f32| Particle {
            x: 0.5,
            y: 0.5,
            drift: 0.0,
            rise: 0.1,
            age,
            lifetime: 10.0,
        };
        assert_eq!(particle(0.0).alpha(), 0.0);
        assert_eq!(particle(5.0).alpha(), 1.0);
        assert!(particle(9.9).alpha() < 0.2);
    }
}
