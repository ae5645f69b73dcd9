use gridcast::Grid;

/// N x N grid with every tile in `walls` occupied; `(row, col)` pairs.
pub fn grid_with_walls(size: usize, dimension: f32, walls: &[(usize, usize)]) -> Grid {
    let mut rows = vec![vec![0; size]; size];
    for &(row, col) in walls {
        rows[row][col] = 1;
    }
    Grid::new(rows, dimension).expect("grid should build")
}

/// N x N grid enclosed by a one-tile wall.
pub fn boxed_grid(size: usize, dimension: f32) -> Grid {
    let mut walls = Vec::new();
    for i in 0..size {
        walls.extend([(0, i), (size - 1, i), (i, 0), (i, size - 1)]);
    }
    grid_with_walls(size, dimension, &walls)
}

/// Angles in [0, 360) at `step` degrees, skipping any within `margin` of an axis.
pub fn oblique_angles(step: f32, margin: f32) -> Vec<f32> {
    let mut angles = Vec::new();
    let mut angle = 0.5;
    while angle < 360. {
        let off_axis = [0., 90., 180., 270., 360.]
            .iter()
            .all(|axis: &f32| (angle - axis).abs() > margin);
        if off_axis {
            angles.push(angle);
        }
        angle += step;
    }
    angles
}
