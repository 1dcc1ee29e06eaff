//! Coordinate form bound to a cropper.

use kadr::ui::CoordinateForm;
use kadr::{CropError, Square};

use crate::helpers::mounted_cropper;

#[test]
fn form_shows_floored_initial_values() {
    let (cropper, _host) = mounted_cropper(200, 100);
    let form = CoordinateForm::for_cropper(&cropper).unwrap();

    // Centered 75 x 75 square at (62.5, 12.5).
    assert_eq!(form.values(), Square::new(62.0, 12.0, 75.0));
    assert!(form.submit_enabled());
}

#[test]
fn form_follows_change_notifications() {
    let (mut cropper, _host) = mounted_cropper(200, 100);
    let mut events = cropper.subscribe();
    let mut form = CoordinateForm::for_cropper(&cropper).unwrap();

    cropper.move_constraint(Some(10.7), Some(-3.2), None).unwrap();
    cropper.frame().unwrap();

    let event = events.try_recv().unwrap();
    form.on_event(event, &cropper).unwrap();
    assert_eq!(form.values(), Square::new(73.0, 9.0, 75.0));
}

#[test]
fn edits_reach_the_cropper_even_when_invalid() {
    let (mut cropper, _host) = mounted_cropper(200, 100);
    let mut form = CoordinateForm::for_cropper(&cropper).unwrap();

    form.edit(Some(150.0), None, None, &mut cropper).unwrap();
    assert_eq!(cropper.get_constraint().unwrap(), Square::new(150.0, 12.0, 75.0));
    assert!(!form.submit_enabled());
    assert!(form.error_message().is_some());
    assert!(matches!(form.submit(&cropper), Err(CropError::InvalidForm(_))));

    form.edit(Some(0.0), Some(0.0), Some(100.0), &mut cropper).unwrap();
    assert!(form.submit_enabled());
    let exported = form.submit(&cropper).unwrap();
    assert_eq!(exported.width, 100);
}
