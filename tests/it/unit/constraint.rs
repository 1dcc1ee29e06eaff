//! Constraint API on a ready cropper.

use kadr::app::ImageSource;
use kadr::{CropError, Cropper, Square};

use crate::helpers::ready_cropper;

#[test]
fn initial_constraint_is_centered_three_quarters() {
    for (width, height) in [(200, 100), (100, 200), (64, 64), (3, 1000)] {
        let cropper = ready_cropper(width, height);
        let square = cropper.get_constraint().unwrap();

        let expected_side = f64::from(width.min(height)) * 0.75;
        assert_eq!(square.side, expected_side);
        assert_eq!(square.x + square.side / 2.0, f64::from(width) / 2.0);
        assert_eq!(square.y + square.side / 2.0, f64::from(height) / 2.0);
    }
}

#[test]
fn set_then_get_is_bit_identical() {
    let mut cropper = ready_cropper(100, 100);
    let x = 0.1 + 0.2;
    let y = 1.0 / 3.0;
    let side = 12.345_678_9;

    cropper.set_constraint(Some(x), Some(y), Some(side)).unwrap();
    let square = cropper.get_constraint().unwrap();
    assert_eq!(square.x.to_bits(), x.to_bits());
    assert_eq!(square.y.to_bits(), y.to_bits());
    assert_eq!(square.side.to_bits(), side.to_bits());
}

#[test]
fn partial_set_keeps_other_fields() {
    let mut cropper = ready_cropper(100, 100);
    cropper.set_constraint(Some(5.0), Some(6.0), Some(7.0)).unwrap();
    cropper.set_constraint(None, Some(60.0), None).unwrap();
    assert_eq!(cropper.get_constraint().unwrap(), Square::new(5.0, 60.0, 7.0));
}

#[test]
fn move_treats_missing_deltas_as_zero() {
    let mut cropper = ready_cropper(100, 100);
    cropper.set_constraint(Some(10.0), Some(10.0), Some(50.0)).unwrap();
    cropper.move_constraint(Some(5.0), None, Some(-4.0)).unwrap();
    assert_eq!(cropper.get_constraint().unwrap(), Square::new(15.0, 10.0, 46.0));

    cropper.move_constraint(Some(-5.0), None, Some(4.0)).unwrap();
    assert_eq!(cropper.get_constraint().unwrap(), Square::new(10.0, 10.0, 50.0));
}

#[test]
fn out_of_range_values_are_stored_verbatim() {
    let mut cropper = ready_cropper(100, 100);
    cropper.set_constraint(Some(-40.0), Some(250.0), Some(0.0)).unwrap();
    assert_eq!(cropper.get_constraint().unwrap(), Square::new(-40.0, 250.0, 0.0));

    // Rendering a degenerate square must not fail.
    assert!(cropper.frame().unwrap());
}

#[test]
fn constraint_calls_before_ready_report_not_ready() {
    let mut cropper = Cropper::new(ImageSource::Bytes(b"not an image".to_vec()));
    assert!(matches!(cropper.get_constraint(), Err(CropError::NotReady)));
    assert!(matches!(
        cropper.move_constraint(Some(1.0), None, None),
        Err(CropError::NotReady)
    ));
}
