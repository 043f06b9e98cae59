use colcache3d::backend::{BruteForceBackend, BruteForceDetector};
use colcache3d::detector::CollisionObjectHandle;
use colcache3d::frame::{FrameSet, ShapeFrame};
use colcache3d::math::Isometry;
use oorandom::Rand32;

#[test]
fn random_claims_and_releases_keep_the_cache_consistent() {
    let mut rng = Rand32::new(42);
    let mut frames = FrameSet::new();
    let keys: Vec<_> = (0..8)
        .map(|i| frames.insert(ShapeFrame::ball(0.5, Isometry::translation(i as f32, 0.0, 0.0))))
        .collect();
    let detector = BruteForceDetector::new(BruteForceBackend::sharable(), frames.into_shared());
    let mut handles = Vec::new();

    for _ in 0..2000 {
        if handles.is_empty() || rng.rand_range(0..3) != 0 {
            let key = keys[rng.rand_range(0..keys.len() as u32) as usize];
            handles.push(detector.claim_collision_object(key).unwrap());
        } else {
            let i = rng.rand_range(0..handles.len() as u32) as usize;
            drop(handles.swap_remove(i));
        }

        let mut live_keys: Vec<_> = handles.iter().map(|h| h.frame_key()).collect();
        live_keys.sort();
        live_keys.dedup();

        assert_eq!(detector.num_cached_objects(), live_keys.len());
        assert_eq!(detector.backend().num_live_objects(), live_keys.len());

        // Every handle points to the object of the first handle claimed for its frame.
        let mut representatives: Vec<&CollisionObjectHandle<BruteForceBackend>> = Vec::new();
        for handle in &handles {
            match representatives
                .iter()
                .find(|r| r.frame_key() == handle.frame_key())
            {
                Some(r) => assert!(CollisionObjectHandle::ptr_eq(r, handle)),
                None => {
                    assert!(representatives
                        .iter()
                        .all(|r| !CollisionObjectHandle::ptr_eq(r, handle)));
                    representatives.push(handle);
                }
            }
        }
    }

    handles.clear();
    assert_eq!(detector.num_cached_objects(), 0);
    assert_eq!(
        detector.backend().num_created_objects(),
        detector.backend().num_destroyed_objects()
    );
}
