use crate::map::Grid;
use glam::Vec2;

/// Angular tolerance, in degrees, for treating a ray as axis aligned.
pub const ANGLE_TOLERANCE: f32 = 0.0001;

/// Pulls a starting boundary onto the far side of the grid line it sits on,
/// so the first tile lookup lands in the tile the ray is entering.
const BOUNDARY_EPSILON: f32 = 0.0001;

/// Nudge for a boundary at `line`: [`BOUNDARY_EPSILON`], widened to a few
/// ulps where a fixed offset would round back onto the line.
fn boundary_nudge(line: f32) -> f32 {
    BOUNDARY_EPSILON.max(line.abs() * 4. * f32::EPSILON)
}

pub const DEFAULT_MAX_TRACE_STEPS: usize = 10;

pub fn near(lhs: f32, rhs: f32) -> bool {
    (lhs - rhs).abs() < ANGLE_TOLERANCE
}

/// Wrap an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(angle: f32) -> f32 {
    let angle = angle.rem_euclid(360.);
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if angle >= 360. {
        0.
    } else {
        angle
    }
}

/// Which set of grid lines a traversal crosses.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Axis {
    /// Horizontal lines of constant y, between rows.
    Rows,
    /// Vertical lines of constant x, between columns.
    Columns,
}

impl Axis {
    /// Split a point into (primary, secondary) coordinates, the primary one
    /// being the coordinate that is constant along the traced lines.
    fn split(self, point: Vec2) -> (f32, f32) {
        match self {
            Axis::Rows => (point.y, point.x),
            Axis::Columns => (point.x, point.y),
        }
    }

    fn join(self, primary: f32, secondary: f32) -> Vec2 {
        match self {
            Axis::Rows => Vec2::new(secondary, primary),
            Axis::Columns => Vec2::new(primary, secondary),
        }
    }
}

/// Describes one family of grid lines and how a ray walks across it.
#[derive(Clone, Copy, Debug)]
pub struct Family {
    pub axis: Axis,
    /// Angles at which a ray runs parallel to the family's lines.
    pub degenerate: &'static [f32],
    /// Open interval of angles for which the primary coordinate increases
    /// along the ray. Outside it the primary coordinate decreases.
    pub advancing: (f32, f32),
    /// Secondary change per unit of primary change, from an angle in radians.
    pub slope: fn(f32) -> f32,
}

fn cotangent(radians: f32) -> f32 {
    1. / radians.tan()
}

/// Horizontal grid lines. Rays at 0° and 180° never cross them.
pub const ROWS: Family = Family {
    axis: Axis::Rows,
    degenerate: &[0., 180., 360.],
    advancing: (180., 360.),
    slope: cotangent,
};

/// Vertical grid lines. Rays at 90° and 270° never cross them.
pub const COLUMNS: Family = Family {
    axis: Axis::Columns,
    degenerate: &[90., 270.],
    advancing: (90., 270.),
    slope: f32::tan,
};

impl Family {
    /// `angle` must already be normalized.
    pub fn is_degenerate(&self, angle: f32) -> bool {
        self.degenerate.iter().any(|&d| near(angle, d))
    }

    fn advances(&self, angle: f32) -> bool {
        angle > self.advancing.0 && angle < self.advancing.1
    }
}

/// Walk a ray across one family of grid lines.
///
/// Returns the first crossing that lands in an occupied tile or off the grid.
/// After `max_steps` advances without reaching either, the crossing reached
/// last is returned. A ray parallel to the family yields `origin` unchanged.
pub fn trace(grid: &Grid, family: Family, angle: f32, origin: Vec2, max_steps: usize) -> Vec2 {
    let angle = normalize_degrees(angle);
    if family.is_degenerate(angle) {
        return origin;
    }

    let block = grid.block_size();
    let slope = (family.slope)(angle.to_radians());
    let (primary, secondary) = family.axis.split(origin);
    let line = (primary / block).floor() * block;
    let (start, step) = if family.advances(angle) {
        (line + block, block)
    } else {
        (line - boundary_nudge(line), -block)
    };

    let mut point = family
        .axis
        .join(start, secondary + (start - primary) * slope);
    let delta = family.axis.join(step, step * slope);

    for _ in 0..max_steps {
        match grid.occupied_at(point) {
            Some(false) => point += delta,
            _ => break,
        }
    }

    log::trace!("{:?} trace at {angle}° from {origin} stopped at {point}", family.axis);
    point
}

/// Candidate where the ray first meets a horizontal grid line bounding an
/// occupied tile.
pub fn horizontal_intersect(grid: &Grid, angle: f32, origin: Vec2, max_steps: usize) -> Vec2 {
    trace(grid, ROWS, angle, origin, max_steps)
}

/// Candidate where the ray first meets a vertical grid line bounding an
/// occupied tile.
pub fn vertical_intersect(grid: &Grid, angle: f32, origin: Vec2, max_steps: usize) -> Vec2 {
    trace(grid, COLUMNS, angle, origin, max_steps)
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RayHit {
    pub point: Vec2,
    /// Euclidean distance from the ray's origin.
    pub distance: f32,
    /// Family of the line that was struck.
    pub axis: Axis,
}

impl RayHit {
    fn new(origin: Vec2, point: Vec2, axis: Axis) -> Self {
        Self {
            point,
            distance: origin.distance(point),
            axis,
        }
    }
}

/// Cast a single ray and reconcile the two family candidates.
///
/// When the ray is parallel to one family only the other family's candidate
/// is meaningful and it is returned as is. Otherwise the nearer candidate
/// wins, ties going to the column family.
pub fn cast_ray(grid: &Grid, angle: f32, origin: Vec2, max_steps: usize) -> RayHit {
    let angle = normalize_degrees(angle);
    let rows = RayHit::new(
        origin,
        horizontal_intersect(grid, angle, origin, max_steps),
        Axis::Rows,
    );
    let columns = RayHit::new(
        origin,
        vertical_intersect(grid, angle, origin, max_steps),
        Axis::Columns,
    );

    if COLUMNS.is_degenerate(angle) {
        return rows;
    }
    if ROWS.is_degenerate(angle) {
        return columns;
    }

    if rows.distance < columns.distance {
        rows
    } else {
        columns
    }
}

/// A grid paired with a traversal budget.
#[derive(Clone, Copy, Debug)]
pub struct Caster<'a> {
    grid: &'a Grid,
    max_steps: usize,
}

impl<'a> Caster<'a> {
    pub fn new(grid: &'a Grid, max_steps: usize) -> Self {
        Self { grid, max_steps }
    }

    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    pub fn cast(&self, angle: f32, origin: Vec2) -> RayHit {
        cast_ray(self.grid, angle, origin, self.max_steps)
    }

    /// Both family candidates before reconciliation, as `(rows, columns)`.
    pub fn candidates(&self, angle: f32, origin: Vec2) -> (Vec2, Vec2) {
        (
            horizontal_intersect(self.grid, angle, origin, self.max_steps),
            vertical_intersect(self.grid, angle, origin, self.max_steps),
        )
    }
}
