use map3d_core::{FrameRequest, HeightField, Quadrant, RecordingCanvas, Renderer};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Edit {
    Point(usize, usize, i32),
    Row(usize, i32),
    Scroll(i32),
    Clear,
}

fn edit(width: usize, height: usize) -> impl Strategy<Value = Edit> {
    prop_oneof![
        (0..width, 0..height, any::<i32>()).prop_map(|(x, y, v)| Edit::Point(x, y, v)),
        (0..height, any::<i32>()).prop_map(|(y, v)| Edit::Row(y, v)),
        any::<i32>().prop_map(Edit::Scroll),
        Just(Edit::Clear),
    ]
}

fn border_is_zero(field: &HeightField) -> bool {
    let (w, h) = (field.storage_width(), field.storage_height());
    (0..w).all(|i| field.stored(i, 0) == 0 && field.stored(i, h - 1) == 0)
        && (0..h).all(|j| field.stored(0, j) == 0 && field.stored(w - 1, j) == 0)
}

proptest! {
    #[test]
    fn border_stays_zero_under_edits(edits in prop::collection::vec(edit(5, 4), 0..40)) {
        let mut field = HeightField::new(5, 4);
        for edit in edits {
            match edit {
                Edit::Point(x, y, v) => field.set_point(x, y, v),
                Edit::Row(y, v) => field.set_row(y, &[v; 5]),
                Edit::Scroll(v) => field.scroll_in_row(&[v; 5]),
                Edit::Clear => field.clear(),
            }
            prop_assert!(border_is_zero(&field));
        }
    }

    #[test]
    fn in_range_rotation_has_exactly_one_quadrant(degrees in 0i32..360) {
        let quadrant = Quadrant::from_rotation(degrees);
        prop_assert!(quadrant.is_some());
        let matches = Quadrant::ALL
            .iter()
            .filter(|q| Some(**q) == quadrant)
            .count();
        prop_assert_eq!(matches, 1);
    }

    #[test]
    fn out_of_range_rotation_has_none(degrees in prop_oneof![i32::MIN..0, 360i32..]) {
        prop_assert_eq!(Quadrant::from_rotation(degrees), None);
    }

    #[test]
    fn paint_fills_every_quad_once(
        width in 1usize..6,
        height in 1usize..6,
        degrees in 0i32..360,
    ) {
        let mut renderer = Renderer::with_grid(width, height, 400, 400);
        let mut request = FrameRequest::default();
        request.view.rotation_degrees = degrees;
        let mut canvas = RecordingCanvas::new(400, 400);
        renderer.paint(&mut canvas, &request).unwrap();
        prop_assert_eq!(canvas.fills().count(), (width + 1) * (height + 1));
    }
}
