//! Coalesced redraws and the composed editor picture.

use image::GenericImageView;
use kadr::CropperEvent;

use crate::helpers::mounted_cropper;

#[test]
fn several_mutations_coalesce_into_one_render() {
    let (mut cropper, _host) = mounted_cropper(100, 100);
    let mut events = cropper.subscribe();
    let passes = cropper.render_passes();

    cropper.set_constraint(Some(1.0), None, None).unwrap();
    cropper.set_constraint(Some(2.0), None, None).unwrap();
    cropper.move_constraint(None, Some(3.0), None).unwrap();
    assert!(cropper.is_render_pending());

    assert!(cropper.frame().unwrap());
    assert!(!cropper.frame().unwrap());
    assert_eq!(cropper.render_passes(), passes + 1);

    assert_eq!(events.try_recv().unwrap(), CropperEvent::ConstraintChanged);
    assert!(events.try_recv().is_err());
    assert_eq!(cropper.get_constraint().unwrap().x, 2.0);
}

#[test]
fn no_notification_without_a_render() {
    let (mut cropper, _host) = mounted_cropper(100, 100);
    let mut events = cropper.subscribe();

    assert!(!cropper.frame().unwrap());
    assert!(events.try_recv().is_err());
}

#[test]
fn outside_of_the_crop_is_darkened() {
    let (cropper, _host) = mounted_cropper(200, 100);
    let picture = cropper.canvas().unwrap().to_image();
    assert_eq!(picture.dimensions(), (200, 100));

    // Crop square spans x 62.5..137.5, y 12.5..87.5.
    let inside = picture.get_pixel(100, 50);
    assert_eq!(inside.0, [100, 50, 0, 255]);

    let outside = picture.get_pixel(190, 50);
    assert!(outside[0] < 60, "{outside:?}");
    assert_eq!(outside[3], 255);
}

#[test]
fn huge_side_still_completes_a_frame() {
    let (mut cropper, _host) = mounted_cropper(100, 100);
    cropper.set_constraint(Some(0.0), Some(0.0), Some(1e18)).unwrap();
    assert!(cropper.frame().unwrap());

    cropper.set_constraint(None, None, Some(1e9)).unwrap();
    assert!(cropper.frame().unwrap());
}

#[cfg(feature = "label")]
#[test]
fn default_config_draws_the_size_label() {
    use kadr::app::ImageSurface;
    use kadr::app::view::label::SizeLabel;
    use kadr::{Cropper, CropperConfig};

    if !SizeLabel::new(20.0, [0xff; 4]).has_font() {
        eprintln!("no usable system font, skipping");
        return;
    }

    let render = |config: CropperConfig| {
        let surface = ImageSurface::from_image(&crate::helpers::gradient_image(200, 200)).unwrap();
        let mut cropper = Cropper::from_surface(surface, config);
        assert!(cropper.poll_ready());
        cropper.frame().unwrap();
        cropper.canvas().unwrap().to_image().to_rgba8()
    };
    let labelled = render(CropperConfig::default());
    let plain = render(crate::helpers::quiet_config());

    // 150 x 150 square centered at (100, 100); label baseline at y = 25 - 16 = 9.
    let changed = (0..25)
        .flat_map(|y| (40..160).map(move |x| (x, y)))
        .filter(|&(x, y)| labelled.get_pixel(x, y) != plain.get_pixel(x, y))
        .count();
    assert!(changed > 0, "size label drew nothing");
}
