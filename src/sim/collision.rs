//! Ship collision tests and hazard sweeping
//!
//! Obstacles use a strict axis-aligned overlap (touching edges miss). Stars use
//! a circle test against the ship's half-width only; the star's own size does
//! not widen the pickup radius.

use super::hazards::{Obstacle, Star};
use super::ship::Ship;

/// Strict AABB overlap between the ship box and an obstacle rectangle
pub fn ship_hits_obstacle(ship: &Ship, obstacle: &Obstacle) -> bool {
    ship.screen_x - ship.half_w < obstacle.screen_x + obstacle.width
        && ship.screen_x + ship.half_w > obstacle.screen_x
        && ship.screen_y - ship.half_h < obstacle.screen_y + obstacle.height
        && ship.screen_y + ship.half_h > obstacle.screen_y
}

/// Distance from the ship center to the star center is below the ship half-width
pub fn ship_collects_star(ship: &Ship, star: &Star) -> bool {
    ship.center().distance(star.center()) < ship.half_w
}

/// What happened to a hazard this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fate {
    /// Still on screen, untouched
    Retained,
    /// Fully scrolled off the left edge
    ScrolledOff,
    /// Touched the ship
    Collided,
}

/// Removal counts from one sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub scrolled_off: u32,
    pub collided: u32,
}

/// Decide each item's fate and drop everything not retained.
///
/// Iteration order is preserved for the survivors.
pub fn sweep<T>(items: &mut Vec<T>, mut fate: impl FnMut(&mut T) -> Fate) -> SweepReport {
    let mut report = SweepReport::default();
    items.retain_mut(|item| match fate(item) {
        Fate::Retained => true,
        Fate::ScrolledOff => {
            report.scrolled_off += 1;
            false
        }
        Fate::Collided => {
            report.collided += 1;
            false
        }
    });
    report
}

/// Advance an obstacle and classify it: scroll-off beats collision
pub fn obstacle_fate(obstacle: &mut Obstacle, ship: &Ship, speed: f32) -> Fate {
    if !obstacle.advance(ship.cam_x, speed) {
        Fate::ScrolledOff
    } else if ship_hits_obstacle(ship, obstacle) {
        Fate::Collided
    } else {
        Fate::Retained
    }
}

/// Advance a star and classify it
pub fn star_fate(star: &mut Star, ship: &Ship) -> Fate {
    if !star.advance(ship.cam_x) {
        Fate::ScrolledOff
    } else if ship_collects_star(ship, star) {
        Fate::Collided
    } else {
        Fate::Retained
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::camera::Viewport;

    fn ship_at(x: f32, y: f32) -> Ship {
        let mut ship = Ship::new(Viewport::new(800.0, 600.0));
        ship.world_x = x;
        ship.screen_y = y;
        ship.follow_camera(Viewport::new(800.0, 600.0));
        ship
    }

    fn obstacle(x: f32, y: f32, w: f32, h: f32) -> Obstacle {
        Obstacle {
            world_x: x,
            screen_x: x,
            screen_y: y,
            width: w,
            height: h,
        }
    }

    #[test]
    fn test_overlap_hits() {
        let ship = ship_at(200.0, 300.0);
        assert!(ship_hits_obstacle(&ship, &obstacle(190.0, 290.0, 40.0, 40.0)));
    }

    #[test]
    fn test_touching_edges_do_not_hit() {
        let ship = ship_at(200.0, 300.0);
        let hw = ship.half_w;
        let hh = ship.half_h;
        // Obstacle right edge exactly at ship left edge
        let left = obstacle(200.0 - hw - 50.0, 280.0, 50.0, 40.0);
        assert_eq!(left.screen_x + left.width, ship.screen_x - hw);
        assert!(!ship_hits_obstacle(&ship, &left));
        // Obstacle left edge exactly at ship right edge
        assert!(!ship_hits_obstacle(&ship, &obstacle(200.0 + hw, 280.0, 50.0, 40.0)));
        // Obstacle bottom edge exactly at ship top edge
        assert!(!ship_hits_obstacle(&ship, &obstacle(180.0, 300.0 - hh - 40.0, 50.0, 40.0)));
        // Obstacle top edge exactly at ship bottom edge
        assert!(!ship_hits_obstacle(&ship, &obstacle(180.0, 300.0 + hh, 50.0, 40.0)));
    }

    #[test]
    fn test_star_radius_ignores_star_size() {
        let ship = ship_at(200.0, 300.0);
        let big = Star {
            world_x: 200.0 + ship.half_w + 1.0,
            screen_x: 200.0 + ship.half_w + 1.0,
            screen_y: 300.0,
            speed: 0.0,
            size: 0.0,
        };
        assert!(!ship_collects_star(&ship, &big));

        let near = Star {
            world_x: 200.0,
            screen_x: 200.0,
            screen_y: 300.0 + ship.half_w - 6.0,
            speed: 0.0,
            size: 4.0,
        };
        assert!(ship_collects_star(&ship, &near));
    }

    #[test]
    fn test_scroll_off_takes_priority_over_collision() {
        let mut ship = ship_at(30.0, 300.0);
        ship.half_w = 1000.0;
        ship.half_h = 1000.0;
        let mut gone = obstacle(0.0, 300.0, 5.0, 5.0);
        assert_eq!(obstacle_fate(&mut gone, &ship, 10.0), Fate::ScrolledOff);
        let mut hit = obstacle(100.0, 300.0, 5.0, 5.0);
        assert_eq!(obstacle_fate(&mut hit, &ship, 10.0), Fate::Collided);
    }

    #[test]
    fn test_sweep_counts_and_preserves_order() {
        let mut items = vec![1, 2, 3, 4, 5, 6];
        let report = sweep(&mut items, |n| match *n % 3 {
            0 => Fate::ScrolledOff,
            1 => Fate::Retained,
            _ => Fate::Collided,
        });
        assert_eq!(items, vec![1, 4]);
        assert_eq!(
            report,
            SweepReport {
                scrolled_off: 2,
                collided: 2
            }
        );
    }
}
