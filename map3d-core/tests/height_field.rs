use map3d_core::{to_storage_index, HeightField};

fn border_is_zero(field: &HeightField) -> bool {
    let (w, h) = (field.storage_width(), field.storage_height());
    (0..w).all(|i| field.stored(i, 0) == 0 && field.stored(i, h - 1) == 0)
        && (0..h).all(|j| field.stored(0, j) == 0 && field.stored(w - 1, j) == 0)
}

#[test]
fn storage_is_padded_by_one_cell() {
    let field = HeightField::new(3, 4);
    assert_eq!(field.storage_width(), 5);
    assert_eq!(field.storage_height(), 6);
    assert!(border_is_zero(&field));
}

#[test]
fn set_point_lands_at_offset_storage_cell() {
    let mut field = HeightField::new(3, 3);
    field.set_point(0, 0, 7);
    field.set_point(2, 1, 9);
    assert_eq!(field.stored(1, 1), 7);
    let (i, j) = to_storage_index(2, 1);
    assert_eq!(field.stored(i, j), 9);
    assert_eq!(field.get(2, 1), 9);
    assert!(border_is_zero(&field));
}

#[test]
fn full_rows_keep_border_zero() {
    let mut field = HeightField::new(4, 3);
    for y in 0..3 {
        field.set_row(y, &[i32::MAX, -5, 12, 80]);
    }
    assert!(border_is_zero(&field));
    assert_eq!(field.row(1), &[i32::MAX, -5, 12, 80]);
    field.scroll_in_row(&[1, 2, 3, 4]);
    assert!(border_is_zero(&field));
    assert_eq!(field.row(2), &[1, 2, 3, 4]);
}

#[test]
fn clear_and_resize_reset_samples() {
    let mut field = HeightField::new(2, 2);
    field.set_row(0, &[3, 4]);
    field.clear();
    assert_eq!(field.row(0), &[0, 0]);

    field.set_point(1, 1, 6);
    field.resize(5, 1);
    assert_eq!(field.data_width(), 5);
    assert_eq!(field.data_height(), 1);
    assert_eq!(field.row(0), &[0; 5]);
}

#[test]
#[should_panic(expected = "out of range")]
fn point_outside_logical_range_panics() {
    let mut field = HeightField::new(3, 3);
    field.set_point(3, 0, 1);
}

#[test]
#[should_panic(expected = "out of range")]
fn row_outside_logical_range_panics() {
    let mut field = HeightField::new(3, 3);
    field.set_row(3, &[1, 2, 3]);
}

#[test]
#[should_panic(expected = "row length must match data width")]
fn short_row_panics() {
    let mut field = HeightField::new(3, 3);
    field.set_row(0, &[1, 2]);
}
