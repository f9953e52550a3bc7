//! Exhaust particle trail
//!
//! Particles live in screen space: they do not scroll with the camera and
//! move only by their own velocity. Purely visual, never gameplay-affecting.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::ship::Ship;
use crate::consts::GAME_SCALE;
use crate::heading;

/// Which exhaust state emitted the particle (renderer picks the color)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExhaustKind {
    /// Emitted while the engine is firing
    Thrust,
    /// Emitted while coasting
    Coast,
}

/// Distance behind the ship center where particles appear (unscaled)
const EMIT_OFFSET: f32 = 22.0;
/// Emission attempts per tick
const THRUST_ATTEMPTS: u32 = 3;
const COAST_ATTEMPTS: u32 = 2;
/// Probability that an attempt produces a particle
const EMIT_PROBABILITY: f32 = 0.35;
/// Total angular spread of the exhaust cone (radians)
const SPREAD: f32 = 0.55;

/// A single exhaust particle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining life in ticks
    pub life: f32,
    pub max_life: f32,
    pub kind: ExhaustKind,
    pub size: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, life: f32, kind: ExhaustKind) -> Self {
        Self {
            pos,
            vel,
            life,
            max_life: life,
            kind,
            size: 2.5 * GAME_SCALE,
        }
    }

    /// Move and age by one tick. Returns false when expired.
    pub fn update(&mut self) -> bool {
        self.pos += self.vel;
        self.life -= 1.0;
        self.life > 0.0
    }

    /// Opacity for fading out (0.8 at birth, 0 at death)
    pub fn alpha(&self) -> f32 {
        (self.life / self.max_life).clamp(0.0, 1.0) * 0.8
    }
}

/// Emit exhaust particles behind the ship, respecting a total cap
pub fn emit_exhaust(ship: &Ship, rng: &mut impl Rng, particles: &mut Vec<Particle>, cap: usize) {
    let back = ship.angle + std::f32::consts::PI;
    let origin = ship.center() + heading(back) * EMIT_OFFSET * GAME_SCALE;

    let (attempts, kind) = if ship.thrusting {
        (THRUST_ATTEMPTS, ExhaustKind::Thrust)
    } else {
        (COAST_ATTEMPTS, ExhaustKind::Coast)
    };

    for _ in 0..attempts {
        if rng.random::<f32>() > EMIT_PROBABILITY {
            continue;
        }
        if particles.len() >= cap {
            break;
        }
        let dir = back + (rng.random::<f32>() - 0.5) * SPREAD;
        let speed = rng.random_range(0.8f32..3.0);
        let life = rng.random_range(38.0f32..63.0);
        particles.push(Particle::new(origin, heading(dir) * speed, life, kind));
    }
}

/// Advance all particles and drop the expired ones
pub fn update_particles(particles: &mut Vec<Particle>) {
    particles.retain_mut(Particle::update);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::camera::Viewport;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_particle_expires() {
        let mut p = Particle::new(Vec2::ZERO, Vec2::new(1.0, 0.0), 2.0, ExhaustKind::Coast);
        assert!(p.update());
        assert_eq!(p.pos, Vec2::new(1.0, 0.0));
        assert!(!p.update());
    }

    #[test]
    fn test_alpha_fades() {
        let mut p = Particle::new(Vec2::ZERO, Vec2::ZERO, 40.0, ExhaustKind::Thrust);
        assert!((p.alpha() - 0.8).abs() < 1e-6);
        p.life = 20.0;
        assert!((p.alpha() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_emission_behind_ship() {
        let ship = Ship::new(Viewport::new(800.0, 600.0));
        let mut rng = Pcg32::seed_from_u64(5);
        let mut particles = Vec::new();
        for _ in 0..200 {
            emit_exhaust(&ship, &mut rng, &mut particles, usize::MAX);
        }
        assert!(!particles.is_empty());
        // Ship faces up, so the exhaust point is below the center and moves down
        for p in &particles {
            assert!(p.pos.y > ship.screen_y);
            assert!(p.vel.y > 0.0);
            assert!(p.life >= 38.0 && p.life < 63.0);
            assert_eq!(p.kind, ExhaustKind::Coast);
        }
        // At most two per tick while coasting
        assert!(particles.len() <= 400);
    }

    #[test]
    fn test_emission_respects_cap() {
        let mut ship = Ship::new(Viewport::new(800.0, 600.0));
        ship.thrusting = true;
        let mut rng = Pcg32::seed_from_u64(6);
        let mut particles = Vec::new();
        for _ in 0..500 {
            emit_exhaust(&ship, &mut rng, &mut particles, 10);
        }
        assert_eq!(particles.len(), 10);
        assert!(particles.iter().all(|p| p.kind == ExhaustKind::Thrust));
    }

    #[test]
    fn test_update_particles_drops_dead() {
        let mut particles = vec![
            Particle::new(Vec2::ZERO, Vec2::ZERO, 1.0, ExhaustKind::Coast),
            Particle::new(Vec2::ZERO, Vec2::ZERO, 5.0, ExhaustKind::Coast),
        ];
        update_particles(&mut particles);
        assert_eq!(particles.len(), 1);
        assert_eq!(particles[0].life, 4.0);
    }
}
