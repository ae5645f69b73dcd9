use crate::config::Config;
use crate::player::Player;
use crate::ray::{Caster, RayHit};

/// How distances turn into wall slices on screen.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Projection {
    /// Field of view in degrees, centred on the facing angle.
    pub fov: f32,
    /// Degrees between neighbouring columns.
    pub angle_step: f32,
    pub column_width: f32,
    /// Height of a wall touching the viewer; slices are centred on this y.
    pub max_wall_height: f32,
    /// Screen x of the middle column.
    pub view_origin_x: f32,
    pub fisheye_correction: bool,
}

impl Projection {
    /// The 3D view sits to the right of the top-down view, which is
    /// `screen.dimension` wide.
    pub fn from_config(config: &Config) -> Self {
        let projection = &config.projection;
        Self {
            fov: projection.fov,
            angle_step: projection.angle_step,
            column_width: projection.column_width,
            max_wall_height: projection.max_wall_height,
            view_origin_x: config.screen.dimension * 1.5,
            fisheye_correction: projection.fisheye_correction,
        }
    }

    pub fn columns(&self) -> usize {
        (self.fov / self.angle_step).round() as usize
    }

    /// Wall height for a hit `distance` away; capped at `max_wall_height`.
    pub fn slice_height(&self, block_size: f32, distance: f32) -> f32 {
        (block_size * self.max_wall_height / distance).min(self.max_wall_height)
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct WallSlice {
    /// Centre x of the column.
    pub x: f32,
    pub top: f32,
    pub height: f32,
    pub width: f32,
    /// Ray angle in degrees, not normalized.
    pub angle: f32,
    pub hit: RayHit,
}

/// Cast one ray per column across the field of view, left to right.
pub fn sweep(caster: &Caster, player: &Player, projection: &Projection) -> Vec<WallSlice> {
    let columns = projection.columns();
    let half = columns as f32 / 2.;
    let block_size = caster.grid().block_size();

    (0..columns)
        .map(|column| {
            let offset = column as f32 - half;
            let angle = player.angle() + offset * projection.angle_step;
            let hit = caster.cast(angle, player.position);

            let distance = if projection.fisheye_correction {
                hit.distance * (angle - player.angle()).to_radians().cos()
            } else {
                hit.distance
            };
            let height = projection.slice_height(block_size, distance);

            WallSlice {
                x: projection.view_origin_x + offset * projection.column_width,
                top: projection.max_wall_height - height / 2.,
                height,
                width: projection.column_width,
                angle,
                hit,
            }
        })
        .collect()
}
