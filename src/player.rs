use crate::map::Grid;
use crate::ray::normalize_degrees;
use glam::Vec2;

/// Viewer position and facing angle in degrees, kept in `[0, 360)`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Player {
    pub position: Vec2,
    angle: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            angle: 90.,
        }
    }
}

impl Player {
    pub fn new(position: Vec2, angle: f32) -> Self {
        Self {
            position,
            angle: normalize_degrees(angle),
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Displacement for moving `distance` along the facing angle.
    fn step(&self, distance: f32) -> Vec2 {
        Vec2::from_angle(self.angle.to_radians()) * distance
    }

    /// Translate along the facing angle. Rays are cast along the opposite
    /// vector, so a negative distance moves toward what the viewer sees.
    pub fn move_by(&mut self, distance: f32) {
        self.position += self.step(distance);
    }

    /// Like [`Player::move_by`], but each axis is only applied when the tile
    /// it leads into is on the grid and empty. Returns whether anything moved.
    pub fn try_move(&mut self, distance: f32, grid: &Grid) -> bool {
        let step = self.step(distance);
        let mut moved = false;

        if step.x != 0. && grid.occupied_at(self.position + Vec2::new(step.x, 0.)) == Some(false) {
            self.position.x += step.x;
            moved = true;
        }

        if step.y != 0. && grid.occupied_at(self.position + Vec2::new(0., step.y)) == Some(false) {
            self.position.y += step.y;
            moved = true;
        }

        moved
    }

    /// Add `degrees` to the facing angle. Deltas are expected within ±360,
    /// the result is wrapped once.
    pub fn turn(&mut self, degrees: f32) {
        self.angle += degrees;
        if self.angle >= 360. {
            self.angle -= 360.;
        } else if self.angle < 0. {
            self.angle += 360.;
        }
    }
}
