use approx::assert_relative_eq;
use colcache2d::backend::{BruteForceBackend, BruteForceDetector};
use colcache2d::detector::{CollisionOption, CollisionResult};
use colcache2d::frame::{FrameSet, ShapeFrame};
use colcache2d::math::{Isometry, Point, Vector};

#[test]
fn ball_cuboid_contact() {
    let mut frames = FrameSet::new();
    let ball = frames.insert(ShapeFrame::ball(1.0, Isometry::translation(0.0, 1.5)));
    let ground = frames.insert(ShapeFrame::cuboid(
        Vector::new(10.0, 1.0),
        Isometry::translation(0.0, 0.0),
    ));
    let detector = BruteForceDetector::new(BruteForceBackend::new(), frames.into_shared());

    let mut group = detector.create_collision_group();
    group.add_frames([ball, ground]).unwrap();

    let mut result = CollisionResult::new();
    assert!(detector.collide(&group, &CollisionOption::default(), &mut result));
    let contact = result.contact(0).unwrap();
    assert_relative_eq!(contact.normal, -Vector::y());
    assert_relative_eq!(contact.penetration_depth, 0.5);
    assert_relative_eq!(contact.point, Point::new(0.0, 0.75));
}

#[test]
fn rotated_boxes_collide_on_their_bounds() {
    let mut frames = FrameSet::new();
    let a = frames.insert(ShapeFrame::cuboid(
        Vector::new(2.0, 0.1),
        Isometry::new(Vector::zeros(), core::f32::consts::FRAC_PI_2),
    ));
    let b = frames.insert(ShapeFrame::ball(0.5, Isometry::translation(0.0, 2.2)));
    let detector = BruteForceDetector::new(BruteForceBackend::sharable(), frames.into_shared());

    let mut group = detector.create_collision_group();
    group.add_frames([a, b]).unwrap();
    assert!(detector.collide_binary(&group, &CollisionOption::default()));

    detector.frames().borrow_mut().get_mut(a).unwrap().position = Isometry::identity();
    assert!(!detector.collide_binary(&group, &CollisionOption::default()));
}
