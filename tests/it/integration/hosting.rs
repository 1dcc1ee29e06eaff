//! Mounting into host elements and listener bookkeeping.

use kadr::CropError;
use kadr::app::{Container, Host, Listener, Node, PointerEvent};

use crate::helpers::{mounted_cropper, ready_cropper};

#[test]
fn surface_is_inserted_before_existing_children() {
    let mut cropper = ready_cropper(30, 30);
    let mut host = Container::with_elements(["resize-controls", "resize-fwd"]);

    cropper.attach(&mut host).unwrap();
    assert_eq!(
        host.children(),
        &[
            Node::Surface(cropper.surface_id()),
            Node::Element("resize-controls".into()),
            Node::Element("resize-fwd".into()),
        ]
    );
    assert_eq!(cropper.listeners().len(), 1);

    // Attaching to the same host again changes nothing.
    cropper.attach(&mut host).unwrap();
    assert_eq!(host.children().len(), 3);
    assert_eq!(cropper.listeners().len(), 1);
}

#[test]
fn remove_unmounts_and_drops_every_listener() {
    let (mut cropper, mut host) = mounted_cropper(100, 100);
    cropper.dispatch(&PointerEvent::press(10.0, 10.0)).unwrap();
    assert!(cropper.listeners().contains(Listener::ViewportMove));

    cropper.remove(&mut host);
    assert!(!host.contains(cropper.surface_id()));
    assert_eq!(host.children(), &[Node::Element("resize-controls".into())]);
    assert!(cropper.listeners().is_empty());
    assert!(cropper.host().is_none());
    assert!(!cropper.is_render_pending());

    assert!(!cropper.dispatch(&PointerEvent::press(10.0, 10.0)).unwrap());
}

#[test]
fn subscribers_are_dropped_on_remove() {
    let (mut cropper, mut host) = mounted_cropper(20, 20);
    let mut events = cropper.subscribe();
    cropper.remove(&mut host);
    assert!(events.try_recv().is_err());
    assert!(events.is_closed());
}

#[test]
fn surface_lives_in_one_host_at_a_time() {
    let mut cropper = ready_cropper(30, 30);
    let mut first = Container::new();
    let mut second = Container::with_elements(["controls"]);

    cropper.attach(&mut first).unwrap();
    assert!(matches!(
        cropper.attach(&mut second),
        Err(CropError::MountedElsewhere)
    ));
    assert!(first.contains(cropper.surface_id()));
    assert!(!second.contains(cropper.surface_id()));

    cropper.move_to(&mut first, &mut second).unwrap();
    assert!(!first.contains(cropper.surface_id()));
    assert_eq!(second.children()[0], Node::Surface(cropper.surface_id()));
    assert_eq!(cropper.host(), Some(second.id()));
    assert!(matches!(
        cropper.move_to(&mut first, &mut second),
        Err(CropError::NotMounted)
    ));

    cropper.remove(&mut second);
    assert!(first.children().is_empty());
    assert_eq!(second.children(), &[Node::Element("controls".into())]);
}
