use colcache3d::backend::{BruteForceBackend, BruteForceDetector};
use colcache3d::detector::{CollisionObjectHandle, ObjectSharing};
use colcache3d::frame::{FrameSet, ShapeFrame};
use colcache3d::math::{Isometry, Vector};

#[test]
fn every_claim_builds_a_new_object() {
    let mut frames = FrameSet::new();
    let a = frames.insert(ShapeFrame::cuboid(Vector::repeat(1.0), Isometry::identity()));
    let detector = BruteForceDetector::new(BruteForceBackend::new(), frames.into_shared());

    let mut group1 = detector.create_collision_group();
    let mut group2 = detector.create_collision_group();
    group1.add_frame(a).unwrap();
    group2.add_frame(a).unwrap();

    assert!(!CollisionObjectHandle::ptr_eq(
        &group1.objects()[0],
        &group2.objects()[0]
    ));
    assert_eq!(detector.num_cached_objects(), 0);
    assert_eq!(detector.backend().num_live_objects(), 2);

    drop(group1);
    assert_eq!(detector.backend().num_live_objects(), 1);
    drop(group2);
    assert_eq!(detector.backend().num_destroyed_objects(), 2);
}

#[test]
fn detector_policy_overrides_the_backend_default() {
    let mut frames = FrameSet::new();
    let a = frames.insert(ShapeFrame::ball(1.0, Isometry::identity()));
    let detector = BruteForceDetector::with_object_sharing(
        BruteForceBackend::sharable(),
        frames.into_shared(),
        ObjectSharing::Unsharable,
    );

    let h1 = detector.claim_collision_object(a).unwrap();
    let h2 = detector.claim_collision_object(a).unwrap();
    assert!(!CollisionObjectHandle::ptr_eq(&h1, &h2));
    assert_eq!(detector.object_sharing(), Some(ObjectSharing::Unsharable));

    // Unshared objects can outlive their detector.
    drop(detector);
    drop(h1);
    drop(h2);
}
