use approx::assert_relative_eq;
use colcache3d::backend::{BruteForceBackend, BruteForceDetector};
use colcache3d::detector::{CollisionFilter, CollisionOption, CollisionResult, PairBlacklistFilter};
use colcache3d::frame::{FrameKey, FrameSet, ShapeFrame};
use colcache3d::math::{Isometry, Point, Vector};
use std::rc::Rc;

// Three unit balls on the x axis, the first two overlapping, and a box far away.
fn scene() -> (BruteForceDetector, [FrameKey; 4]) {
    let mut frames = FrameSet::new();
    let keys = [
        frames.insert(ShapeFrame::ball(1.0, Isometry::identity())),
        frames.insert(ShapeFrame::ball(1.0, Isometry::translation(1.5, 0.0, 0.0))),
        frames.insert(ShapeFrame::ball(1.0, Isometry::translation(5.0, 0.0, 0.0))),
        frames.insert(ShapeFrame::cuboid(
            Vector::new(1.0, 2.0, 1.0),
            Isometry::translation(0.0, 10.0, 0.0),
        )),
    ];
    let detector = BruteForceDetector::new(BruteForceBackend::sharable(), frames.into_shared());
    (detector, keys)
}

#[test]
fn full_check_reports_ball_ball_contacts() {
    let (detector, [a, b, c, d]) = scene();
    let mut group = detector.create_collision_group();
    group.add_frames([a, b, c, d]).unwrap();

    let mut result = CollisionResult::new();
    assert!(detector.collide(&group, &CollisionOption::default(), &mut result));
    assert_eq!(result.num_contacts(), 1);

    let contact = result.contact(0).unwrap();
    assert_eq!((contact.frame1, contact.frame2), (a, b));
    assert_relative_eq!(contact.normal, Vector::x());
    assert_relative_eq!(contact.point, Point::new(0.75, 0.0, 0.0));
    assert_relative_eq!(contact.penetration_depth, 0.5);

    assert!(result.in_collision(a));
    assert!(result.in_collision(b));
    assert!(!result.in_collision(c));
    assert_eq!(result.colliding_frames().count(), 2);
}

#[test]
fn contacts_follow_the_frames() {
    let (detector, [a, b, c, _]) = scene();
    let mut group = detector.create_collision_group();
    group.add_frames([a, b, c]).unwrap();

    detector.frames().borrow_mut().get_mut(c).unwrap().position =
        Isometry::translation(2.5, 0.0, 0.0);

    let mut result = CollisionResult::new();
    assert!(detector.collide(&group, &CollisionOption::default(), &mut result));
    assert_eq!(result.num_contacts(), 2);
    assert!(result.in_collision(c));
    // Moving a frame does not rebuild its object.
    assert_eq!(detector.backend().num_created_objects(), 3);
}

#[test]
fn box_contacts_use_bounding_boxes() {
    let (detector, [a, _, _, d]) = scene();
    let mut group = detector.create_collision_group();
    group.add_frames([a, d]).unwrap();

    detector.frames().borrow_mut().get_mut(a).unwrap().position =
        Isometry::translation(0.0, 7.5, 0.0);

    let mut result = CollisionResult::new();
    assert!(detector.collide(&group, &CollisionOption::default(), &mut result));
    let contact = result.contact(0).unwrap();
    assert_relative_eq!(contact.normal, Vector::y());
    assert_relative_eq!(contact.penetration_depth, 0.5);
    assert_relative_eq!(contact.point, Point::new(0.0, 8.25, 0.0));
}

#[test]
fn filters_skip_pairs() {
    let (detector, [a, b, c, _]) = scene();
    let mut group = detector.create_collision_group();
    group.add_frames([a, b]).unwrap();

    let mut blacklist = PairBlacklistFilter::new();
    blacklist.add_pair(b, a);
    assert!(blacklist.contains_pair(a, b));
    let option = CollisionOption::default().with_filter(Rc::new(blacklist));

    let mut result = CollisionResult::new();
    assert!(!detector.collide(&group, &option, &mut result));
    assert!(!detector.collide_binary(&group, &option));

    let keep_all: Rc<dyn CollisionFilter> = Rc::new(|_: FrameKey, _: FrameKey| false);
    assert!(detector.collide_binary(&group, &CollisionOption::default().with_filter(keep_all)));

    let mut blacklist = PairBlacklistFilter::new();
    blacklist.add_pair(a, b);
    blacklist.remove_pair(b, a);
    assert!(blacklist.is_empty());
    assert!(detector.collide_binary(&group, &CollisionOption::binary().with_filter(Rc::new(blacklist))));

    let mut blacklist = PairBlacklistFilter::new();
    blacklist.add_pair(a, b);
    blacklist.add_pair(a, c);
    blacklist.add_pair(b, c);
    blacklist.remove_frame(a);
    assert_eq!(blacklist.len(), 1);
    assert!(!blacklist.contains_pair(a, b));
    assert!(blacklist.contains_pair(c, b));
}

#[test]
fn disabled_contacts_still_report_collisions() {
    let (detector, [a, b, _, _]) = scene();
    let mut group = detector.create_collision_group();
    group.add_frames([a, b]).unwrap();

    let option = CollisionOption::new(false, false, 10, None);
    let mut result = CollisionResult::new();
    assert!(detector.collide(&group, &option, &mut result));
    assert_eq!(result.num_contacts(), 0);
    assert!(result.is_collision());
    assert!(result.in_collision(a));
}

#[test]
fn contact_cap_stops_the_check() {
    let mut frames = FrameSet::new();
    let keys: Vec<_> = (0..4)
        .map(|_| frames.insert(ShapeFrame::ball(1.0, Isometry::identity())))
        .collect();
    let detector = BruteForceDetector::new(BruteForceBackend::new(), frames.into_shared());
    let mut group = detector.create_collision_group();
    group.add_frames(keys.iter().copied()).unwrap();

    let mut result = CollisionResult::new();
    assert!(detector.collide(&group, &CollisionOption::default(), &mut result));
    assert_eq!(result.num_contacts(), 6);

    let capped = CollisionOption::new(true, false, 2, None);
    assert!(detector.collide(&group, &capped, &mut result));
    assert_eq!(result.num_contacts(), 2);

    let binary = CollisionOption::new(true, true, 1000, None);
    assert!(detector.collide(&group, &binary, &mut result));
    assert_eq!(result.num_contacts(), 1);

    let none = CollisionOption::new(true, false, 0, None);
    assert!(!detector.collide(&group, &none, &mut result));
}

#[test]
fn binary_checks_honor_the_cap_of_binary_options() {
    let (detector, [a, b, _, _]) = scene();
    let mut group = detector.create_collision_group();
    group.add_frames([a, b]).unwrap();

    // Binary options are forwarded as-is, cap included.
    assert!(!detector.collide_binary(&group, &CollisionOption::new(true, true, 0, None)));
    // Other options only contribute their filter.
    assert!(detector.collide_binary(&group, &CollisionOption::new(true, false, 0, None)));

    let mut result = CollisionResult::new();
    assert!(!detector.collide(&group, &CollisionOption::new(true, false, 0, None), &mut result));
}

#[test]
fn group_pairs_only_cross_groups() {
    let (detector, [a, b, c, _]) = scene();
    let mut group1 = detector.create_collision_group();
    let mut group2 = detector.create_collision_group();
    group1.add_frames([a, b]).unwrap();
    group2.add_frame(c).unwrap();

    let mut result = CollisionResult::new();
    // a and b overlap, but they are in the same group.
    assert!(!detector.collide_groups(&group1, &group2, &CollisionOption::default(), &mut result));
    assert!(!detector.collide_groups_binary(&group1, &group2, &CollisionOption::default()));

    group2.add_frame(b).unwrap();
    assert!(detector.collide_groups(&group1, &group2, &CollisionOption::default(), &mut result));
    // The shared object of b is never checked against itself.
    assert_eq!(result.num_contacts(), 1);
    assert_eq!(result.contact(0).unwrap().frame1, a);
    assert!(detector.collide_groups_binary(&group1, &group2, &CollisionOption::binary()));
}

#[test]
fn removed_frames_are_skipped() {
    let (detector, [a, b, _, _]) = scene();
    let mut group = detector.create_collision_group();
    group.add_frames([a, b]).unwrap();

    let _ = detector.frames().borrow_mut().remove(b);
    assert!(!detector.collide_binary(&group, &CollisionOption::default()));
}
