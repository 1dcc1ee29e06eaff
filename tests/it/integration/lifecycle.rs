//! Asynchronous readiness and teardown.

use std::time::Duration;

use kadr::app::{Container, ImageSource};
use kadr::{CropError, Cropper, CropperEvent, Square};

use crate::helpers::{png_bytes, quiet_config};

#[tokio::test]
async fn cropper_becomes_ready_after_decoding() {
    let mut cropper = Cropper::with_config(ImageSource::Bytes(png_bytes(120, 80)), quiet_config());
    let mut events = cropper.subscribe();

    tokio::time::timeout(Duration::from_secs(5), cropper.ready())
        .await
        .expect("decode timed out")
        .unwrap();

    assert!(cropper.is_ready());
    assert_eq!(cropper.dimensions().unwrap(), (120, 80));
    assert_eq!(cropper.get_constraint().unwrap(), Square::new(30.0, 10.0, 60.0));
    assert_eq!(events.try_recv().unwrap(), CropperEvent::Ready);

    // Awaiting again resolves immediately.
    cropper.ready().await.unwrap();
}

#[tokio::test]
async fn data_url_sources_decode() {
    use base64::Engine as _;
    let url = format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(png_bytes(10, 10))
    );
    let mut cropper = Cropper::with_config(ImageSource::DataUrl(url), quiet_config());

    tokio::time::timeout(Duration::from_secs(5), cropper.ready())
        .await
        .expect("decode timed out")
        .unwrap();
    assert_eq!(cropper.dimensions().unwrap(), (10, 10));
}

#[tokio::test]
async fn undecodable_image_never_becomes_ready() {
    let mut cropper = Cropper::with_config(
        ImageSource::Bytes(b"definitely not a png".to_vec()),
        quiet_config(),
    );

    let waited = tokio::time::timeout(Duration::from_millis(200), cropper.ready()).await;
    assert!(waited.is_err());
    assert!(!cropper.is_ready());
    assert!(matches!(cropper.get_constraint(), Err(CropError::NotReady)));
}

#[tokio::test]
async fn attach_is_allowed_while_loading() {
    let mut host = Container::new();
    let mut cropper = Cropper::with_config(ImageSource::Bytes(png_bytes(50, 50)), quiet_config());
    cropper.attach(&mut host).unwrap();
    assert!(host.contains(cropper.surface_id()));

    tokio::time::timeout(Duration::from_secs(5), cropper.ready())
        .await
        .expect("decode timed out")
        .unwrap();
    assert!(cropper.frame().unwrap());
}

#[tokio::test]
async fn removed_cropper_reports_released() {
    let mut host = Container::new();
    let mut cropper = Cropper::with_config(ImageSource::Bytes(png_bytes(50, 50)), quiet_config());
    cropper.attach(&mut host).unwrap();
    cropper.ready().await.unwrap();

    cropper.remove(&mut host);
    assert!(!cropper.is_ready());
    assert!(matches!(cropper.get_constraint(), Err(CropError::Released)));
    assert!(matches!(cropper.export_image(), Err(CropError::Released)));
    assert!(matches!(cropper.attach(&mut host), Err(CropError::Released)));
    assert!(matches!(cropper.ready().await, Err(CropError::Released)));
}
