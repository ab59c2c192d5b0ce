use map3d_core::{Direction, Quadrant, Renderer, Stretch, ViewParameters};
use std::collections::{HashMap, HashSet};

#[test]
fn every_angle_in_range_maps_to_exactly_one_quadrant() {
    let mut counts: HashMap<Quadrant, usize> = HashMap::new();
    for degrees in 0..360 {
        let quadrant = Quadrant::from_rotation(degrees)
            .unwrap_or_else(|| panic!("{degrees} has no quadrant"));
        *counts.entry(quadrant).or_default() += 1;
    }
    assert_eq!(counts.len(), 4);
    for quadrant in Quadrant::ALL {
        assert_eq!(counts[&quadrant], 90, "{quadrant:?}");
    }
}

#[test]
fn quadrant_boundaries() {
    let cases = [
        (0, Quadrant::North),
        (44, Quadrant::North),
        (45, Quadrant::East),
        (134, Quadrant::East),
        (135, Quadrant::South),
        (224, Quadrant::South),
        (225, Quadrant::West),
        (314, Quadrant::West),
        (315, Quadrant::North),
        (359, Quadrant::North),
    ];
    for (degrees, expected) in cases {
        assert_eq!(Quadrant::from_rotation(degrees), Some(expected), "{degrees}");
    }
}

#[test]
fn out_of_range_angles_are_not_wrapped() {
    for degrees in [360, 361, 720, -1, -90, i32::MIN, i32::MAX] {
        assert_eq!(Quadrant::from_rotation(degrees), None, "{degrees}");
    }
}

#[test]
fn each_order_visits_every_quad_once() {
    let (width, height) = (7, 5);
    for quadrant in Quadrant::ALL {
        let order = quadrant.draw_order(width, height);
        let mut seen = HashSet::new();
        for ay in order.y.anchors() {
            for ax in order.x.anchors() {
                let cell = (
                    ax.min(order.x.neighbor(ax)),
                    ay.min(order.y.neighbor(ay)),
                );
                assert!(seen.insert(cell), "{quadrant:?} visits {cell:?} twice");
            }
        }
        assert_eq!(seen.len(), (width - 1) * (height - 1), "{quadrant:?}");
    }
}

#[test]
fn orders_start_at_their_far_corner() {
    let north = Quadrant::North.draw_order(6, 4);
    assert_eq!((north.x.start, north.y.start), (5, 3));
    assert_eq!(north.x.direction(), Direction::Descending);

    let east = Quadrant::East.draw_order(6, 4);
    assert_eq!((east.x.start, east.y.start), (5, 0));

    let south = Quadrant::South.draw_order(6, 4);
    assert_eq!((south.x.start, south.y.start), (0, 0));
    assert_eq!(south.y.direction(), Direction::Ascending);

    let west = Quadrant::West.draw_order(6, 4);
    assert_eq!((west.x.start, west.y.start), (0, 3));
}

#[test]
fn first_drawn_corner_is_farther_from_the_eye_than_the_last() {
    let mut renderer = Renderer::with_grid(10, 10, 800, 600);
    for degrees in [0, 30, 90, 120, 180, 200, 270, 300, 330] {
        let view = ViewParameters {
            rotation_degrees: degrees,
            ..ViewParameters::default()
        };
        renderer.project(&view, Stretch::default()).unwrap();
        let grid = renderer.ortho_projected();
        let order = Quadrant::from_rotation(degrees)
            .unwrap()
            .draw_order(grid.width(), grid.height());

        let first = grid.get(order.x.start, order.y.start);
        let last = grid.get(order.x.neighbor(order.x.stop), order.y.neighbor(order.y.stop));
        assert!(
            first.depth > last.depth,
            "rotation {degrees}: first {first:?} last {last:?}"
        );
    }
}

#[test]
fn row_clear_only_in_row_aligned_quadrants() {
    assert!(Quadrant::North.supports_row_clear());
    assert!(Quadrant::South.supports_row_clear());
    assert!(!Quadrant::East.supports_row_clear());
    assert!(!Quadrant::West.supports_row_clear());
}
