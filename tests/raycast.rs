mod common;

use common::{boxed_grid, grid_with_walls, oblique_angles};
use glam::Vec2;
use gridcast::{cast_ray, horizontal_intersect, vertical_intersect, Axis, Caster};

#[test]
fn oblique_rays_take_the_nearer_candidate() {
    let grid = boxed_grid(8, 800.);
    let origins = [
        Vec2::new(150., 150.),
        Vec2::new(430., 270.),
        Vec2::new(640., 610.),
        Vec2::new(333., 520.),
    ];

    for origin in origins {
        for angle in oblique_angles(7.3, 0.5) {
            let rows = horizontal_intersect(&grid, angle, origin, 10);
            let columns = vertical_intersect(&grid, angle, origin, 10);
            let hit = cast_ray(&grid, angle, origin, 10);

            assert!(
                hit.point == rows || hit.point == columns,
                "angle {angle} from {origin}: {hit:?} is neither candidate"
            );
            assert!(hit.distance <= origin.distance(rows), "angle {angle} from {origin}");
            assert!(hit.distance <= origin.distance(columns), "angle {angle} from {origin}");
        }
    }
}

#[test]
fn vertical_rays_use_the_row_candidate() {
    let grid = boxed_grid(4, 400.);
    let origin = Vec2::new(150., 250.);

    for angle in [90., 270., 90.00005] {
        let hit = cast_ray(&grid, angle, origin, 10);
        assert_eq!(hit.axis, Axis::Rows);
        assert_eq!(hit.point, horizontal_intersect(&grid, angle, origin, 10));
        // the column family is parallel here and stays at the origin
        assert_eq!(vertical_intersect(&grid, angle, origin, 10), origin);
    }
}

#[test]
fn horizontal_rays_short_circuit_the_row_family() {
    let grid = boxed_grid(4, 400.);
    let origin = Vec2::new(150., 250.);

    for angle in [0., 180., 360., -0.00005] {
        assert_eq!(horizontal_intersect(&grid, angle, origin, 10), origin);
        let hit = cast_ray(&grid, angle, origin, 10);
        assert_eq!(hit.axis, Axis::Columns);
        assert_eq!(hit.point, vertical_intersect(&grid, angle, origin, 10));
        assert!(hit.distance > 0.);
    }
}

#[test]
fn approaching_a_wall_never_increases_distance() {
    let grid = boxed_grid(8, 800.);
    let angle = 30f32;
    // rays travel against (cos, sin)
    let direction = -Vec2::from_angle(angle.to_radians());
    let start = Vec2::new(650., 650.);

    let mut previous = f32::INFINITY;
    for t in (0..=300).step_by(10) {
        let origin = start + direction * t as f32;
        let hit = cast_ray(&grid, angle, origin, 10);
        assert!(
            hit.distance <= previous + 1e-3,
            "distance grew to {} from {previous} at t = {t}",
            hit.distance
        );
        assert!((hit.point.x - 100.).abs() < 1e-2, "{}", hit.point);
        previous = hit.distance;
    }
}

#[test]
fn outward_rays_stop_at_the_grid_edge() {
    let grid = grid_with_walls(4, 400., &[]);

    let corner = cast_ray(&grid, 45., Vec2::new(10., 10.), 10);
    assert!(corner.point.x <= 0. || corner.point.y <= 0., "{}", corner.point);
    assert!(corner.distance < grid.block_size());

    let right = cast_ray(&grid, 180., Vec2::new(390., 200.), 10);
    assert!(right.point.x >= 400., "{}", right.point);
    assert!((right.distance - 10.).abs() < 1e-3);

    let across = cast_ray(&grid, 180., Vec2::new(50., 50.), 10);
    assert!((across.point.x - 400.).abs() < 1e-3, "{}", across.point);
}

#[test]
fn wall_on_row_zero_is_hit_at_its_boundary() {
    let walls: Vec<_> = (0..4).map(|col| (0, col)).collect();
    let grid = grid_with_walls(4, 400., &walls);
    let block = grid.block_size();
    let origin = Vec2::new(1.5 * block, 1.5 * block);

    // 90° travels toward row 0
    let hit = cast_ray(&grid, 90., origin, 10);
    assert!((hit.point.y - block).abs() < 1e-3, "{}", hit.point);
    assert!((hit.point.x - origin.x).abs() < 1e-3, "{}", hit.point);
    assert!((hit.distance - 0.5 * block).abs() < 1e-3);
    assert_eq!(grid.cell_at(hit.point).0, 0);

    // 270° travels away from it and leaves through the bottom edge
    let away = cast_ray(&grid, 270., origin, 10);
    assert!((away.point.y - 4. * block).abs() < 1e-3, "{}", away.point);
}

#[test]
fn trace_budget_bounds_sight_distance() {
    let walls: Vec<_> = (0..16).map(|row| (row, 0)).collect();
    let grid = grid_with_walls(16, 800., &walls);
    let origin = Vec2::new(775., 425.);

    let short = Caster::new(&grid, 10).cast(0., origin);
    assert!((short.point.x - 250.).abs() < 1e-3, "{}", short.point);

    let long = Caster::new(&grid, 20).cast(0., origin);
    assert!((long.point.x - 50.).abs() < 1e-3, "{}", long.point);
    assert_eq!(grid.cell_at(long.point), (8, 0));

    let tight = Caster::new(&grid, 3).cast(0., origin);
    assert!((tight.point.x - 600.).abs() < 1e-3, "{}", tight.point);
}
