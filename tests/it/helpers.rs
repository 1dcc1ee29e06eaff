//! Test helpers for building images and ready croppers.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use kadr::app::{Container, ImageSurface};
use kadr::{Cropper, CropperConfig};

/// Config without the size label, so tests do not depend on system fonts.
pub fn quiet_config() -> CropperConfig {
    CropperConfig {
        show_label: false,
        ..CropperConfig::default()
    }
}

/// Image whose red and green channels encode the pixel position.
pub fn gradient_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
        Rgba([x as u8, y as u8, 0, 255])
    }))
}

/// The same gradient, encoded as PNG.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = Vec::new();
    gradient_image(width, height)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

/// Cropper over a gradient image that is already ready.
pub fn ready_cropper(width: u32, height: u32) -> Cropper {
    let surface = ImageSurface::from_image(&gradient_image(width, height)).unwrap();
    let mut cropper = Cropper::from_surface(surface, quiet_config());
    assert!(cropper.poll_ready());
    cropper
}

/// Ready cropper mounted into a fresh host, with its first frame drawn.
pub fn mounted_cropper(width: u32, height: u32) -> (Cropper, Container) {
    let mut cropper = ready_cropper(width, height);
    let mut host = Container::with_elements(["resize-controls"]);
    cropper.attach(&mut host).unwrap();
    cropper.frame().unwrap();
    (cropper, host)
}
