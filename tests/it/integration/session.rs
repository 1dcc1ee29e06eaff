//! Whole upload-and-crop sessions through the headless app.

use std::time::Duration;

use image::{GenericImageView, ImageFormat};
use kadr::app::ImageSource;
use kadr::domain::crop::Coordinate;
use kadr::ui::CropApp;
use kadr::{AppConfig, Square};

use crate::helpers::{png_bytes, quiet_config};

fn config() -> AppConfig {
    AppConfig {
        output_dir: None,
        load_timeout: Duration::from_secs(5),
        cropper: quiet_config(),
    }
}

#[tokio::test]
async fn edit_drag_and_submit() {
    let mut app = CropApp::new(ImageSource::Bytes(png_bytes(200, 100)), config()).unwrap();
    app.wait_ready().await.unwrap();

    let form = app.form().unwrap();
    assert_eq!(form.values(), Square::new(62.0, 12.0, 75.0));
    assert_eq!(app.cropper().render_passes(), 1);

    app.drag(Coordinate::new(100.0, 50.0), Coordinate::new(90.0, 60.0))
        .unwrap();
    assert_eq!(app.form().unwrap().values(), Square::new(72.0, 2.0, 75.0));

    app.edit(Some(10.0), Some(10.0), Some(50.0)).unwrap();
    let exported = app.submit(ImageFormat::Png).unwrap();
    let image = image::load_from_memory(&exported.bytes).unwrap();
    assert_eq!(image.dimensions(), (50, 50));
    assert_eq!(image.get_pixel(0, 0).0, [10, 10, 0, 255]);

    app.close();
}

#[tokio::test]
async fn invalid_values_block_submission() {
    let mut app = CropApp::new(ImageSource::Bytes(png_bytes(100, 100)), config()).unwrap();
    app.wait_ready().await.unwrap();

    app.edit(None, None, Some(150.0)).unwrap();
    assert!(app.form().unwrap().error_message().is_some());
    assert!(app.submit(ImageFormat::Png).is_err());

    let preview = app.preview().unwrap();
    assert_eq!(preview.dimensions(), (100, 100));
}

#[tokio::test]
async fn load_timeout_is_reported() {
    let config = AppConfig {
        load_timeout: Duration::from_millis(100),
        ..config()
    };
    let mut app = CropApp::new(ImageSource::Bytes(vec![0, 1, 2, 3]), config).unwrap();
    assert!(app.wait_ready().await.is_err());
    assert!(app.form().is_none());
}
