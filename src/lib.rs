//! Grid raycasting: a first-person view of a square occupancy grid, one ray
//! per screen column.
//!
//! Each ray is traced twice, once across horizontal grid lines and once across
//! vertical ones, stepping a whole tile per iteration. The nearer of the two
//! crossings is the wall hit.

pub mod config;
pub mod error;
pub mod frame;
pub mod map;
pub mod player;
pub mod ray;

pub use config::Config;
pub use error::{ConfigError, GridError};
pub use frame::{sweep, Projection, WallSlice};
pub use map::Grid;
pub use player::Player;
pub use ray::{cast_ray, horizontal_intersect, vertical_intersect, Axis, Caster, RayHit};
