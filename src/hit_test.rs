use super::*;

fn selection() -> Rect {
    Rect::new(100.0, 100.0, 200.0, 100.0)
}

fn hit(x: f64, y: f64) -> Option<HitPart> {
    hit_test(selection(), Point::new(x, y), 7.0)
}

// =============================================================
// DirectionalVector
// =============================================================

#[test]
fn vector_rejects_zero() {
    assert!(DirectionalVector::new(0, 0).is_none());
}

#[test]
fn vector_rejects_out_of_range_components() {
    assert!(DirectionalVector::new(2, 0).is_none());
    assert!(DirectionalVector::new(0, -2).is_none());
}

#[test]
fn vector_accepts_unit_and_diagonal() {
    let v = DirectionalVector::new(-1, 1);
    assert_eq!(v.map(DirectionalVector::x), Some(-1));
    assert_eq!(v.map(DirectionalVector::y), Some(1));
}

#[test]
fn vector_and_anchor_are_bijective() {
    for anchor in ResizeAnchor::ALL {
        assert_eq!(anchor.vector().anchor(), anchor);
    }
}

// =============================================================
// ResizeAnchor
// =============================================================

#[test]
fn resize_anchor_all_variants_distinct() {
    for (i, a) in ResizeAnchor::ALL.iter().enumerate() {
        for (j, b) in ResizeAnchor::ALL.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
                assert_ne!(a.vector(), b.vector());
                assert_ne!(a.key(), b.key());
            }
        }
    }
}

#[test]
fn resize_anchor_vectors() {
    assert_eq!((ResizeAnchor::N.vector().x(), ResizeAnchor::N.vector().y()), (0, -1));
    assert_eq!((ResizeAnchor::Se.vector().x(), ResizeAnchor::Se.vector().y()), (1, 1));
    assert_eq!((ResizeAnchor::W.vector().x(), ResizeAnchor::W.vector().y()), (-1, 0));
    assert_eq!((ResizeAnchor::Nw.vector().x(), ResizeAnchor::Nw.vector().y()), (-1, -1));
}

#[test]
fn resize_anchor_corners() {
    let corners: Vec<_> = ResizeAnchor::ALL.into_iter().filter(|a| a.is_corner()).collect();
    assert_eq!(corners, vec![ResizeAnchor::Ne, ResizeAnchor::Se, ResizeAnchor::Sw, ResizeAnchor::Nw]);
}

#[test]
fn resize_anchor_keys_match_element_ids() {
    assert_eq!(ResizeAnchor::Nw.key(), "tl");
    assert_eq!(ResizeAnchor::S.key(), "b");
    assert_eq!(ResizeAnchor::E.key(), "r");
}

#[test]
fn resize_anchor_cursors() {
    assert_eq!(ResizeAnchor::Nw.cursor(), "nwse-resize");
    assert_eq!(ResizeAnchor::Se.cursor(), "nwse-resize");
    assert_eq!(ResizeAnchor::Ne.cursor(), "nesw-resize");
    assert_eq!(ResizeAnchor::N.cursor(), "n-resize");
    assert_eq!(ResizeAnchor::W.cursor(), "w-resize");
}

#[test]
fn contact_points_sit_on_corners_and_midpoints() {
    let r = selection();
    assert_eq!(ResizeAnchor::Nw.contact_point(r), Point::new(100.0, 100.0));
    assert_eq!(ResizeAnchor::Se.contact_point(r), Point::new(300.0, 200.0));
    assert_eq!(ResizeAnchor::E.contact_point(r), Point::new(300.0, 150.0));
    assert_eq!(ResizeAnchor::N.contact_point(r), Point::new(200.0, 100.0));
}

// =============================================================
// hit_test
// =============================================================

#[test]
fn hit_corner_handles() {
    assert_eq!(hit(103.0, 98.0), Some(HitPart::ResizeHandle(ResizeAnchor::Nw)));
    assert_eq!(hit(300.0, 100.0), Some(HitPart::ResizeHandle(ResizeAnchor::Ne)));
    assert_eq!(hit(305.0, 205.0), Some(HitPart::ResizeHandle(ResizeAnchor::Se)));
    assert_eq!(hit(96.0, 200.0), Some(HitPart::ResizeHandle(ResizeAnchor::Sw)));
}

#[test]
fn hit_side_midpoints() {
    assert_eq!(hit(305.0, 150.0), Some(HitPart::ResizeHandle(ResizeAnchor::E)));
    assert_eq!(hit(100.0, 147.0), Some(HitPart::ResizeHandle(ResizeAnchor::W)));
}

#[test]
fn hit_top_and_bottom_bands_span_width() {
    assert_eq!(hit(150.0, 104.0), Some(HitPart::ResizeHandle(ResizeAnchor::N)));
    assert_eq!(hit(250.0, 196.0), Some(HitPart::ResizeHandle(ResizeAnchor::S)));
}

#[test]
fn hit_body() {
    assert_eq!(hit(200.0, 150.0), Some(HitPart::Body));
    // Left edge away from its midpoint handle.
    assert_eq!(hit(100.0, 120.0), Some(HitPart::Body));
}

#[test]
fn hit_outside_is_none() {
    assert_eq!(hit(10.0, 10.0), None);
    assert_eq!(hit(350.0, 150.0), None);
}

#[test]
fn hit_part_debug_format() {
    let s = format!("{:?}", HitPart::ResizeHandle(ResizeAnchor::Ne));
    assert!(s.contains("Ne"));
}
