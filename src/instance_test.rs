use super::*;

#[test]
fn allocate_is_monotonic() {
    let a = InstanceId::allocate();
    let b = InstanceId::allocate();
    assert!(b > a);
    assert_ne!(a, b);
}

#[test]
fn element_id_is_prefixed_and_suffixed() {
    let id = InstanceId(3);
    assert_eq!(id.element_id("area"), "select-image-area__area3");
    assert_eq!(id.element_id("resize-tl"), "select-image-area__resize-tl3");
}

#[test]
fn element_ids_differ_between_instances() {
    let a = InstanceId::allocate();
    let b = InstanceId::allocate();
    assert_ne!(a.element_id("area-selected"), b.element_id("area-selected"));
}

#[test]
fn display_is_bare_number() {
    assert_eq!(InstanceId(12).to_string(), "12");
}
