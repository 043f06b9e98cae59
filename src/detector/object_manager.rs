use super::collision_detector::DetectorCore;
use super::object_handle::ClaimedObject;
use super::{CollisionBackend, CollisionObjectHandle, ObjectSharing};
use crate::frame::FrameKey;
use crate::utils::hashmap::{self, HashMap};
use alloc::rc::{Rc, Weak};
use core::cell::RefCell;
use core::ptr;

/// Decides whether a claim builds a new collision object or reuses one.
pub(crate) enum CollisionObjectManager<B: CollisionBackend> {
    /// Every claim builds a new object; nothing is cached.
    Unsharable,
    /// Claims go through a cache of the live objects, keyed by frame.
    Sharable(SharableObjects<B>),
}

impl<B: CollisionBackend> CollisionObjectManager<B> {
    pub fn new(sharing: ObjectSharing) -> Self {
        match sharing {
            ObjectSharing::Unsharable => Self::Unsharable,
            ObjectSharing::Sharable => Self::Sharable(SharableObjects::default()),
        }
    }

    pub fn sharing(&self) -> ObjectSharing {
        match self {
            Self::Unsharable => ObjectSharing::Unsharable,
            Self::Sharable(_) => ObjectSharing::Sharable,
        }
    }

    pub fn num_cached_objects(&self) -> usize {
        match self {
            Self::Unsharable => 0,
            Self::Sharable(objects) => objects.len(),
        }
    }

    pub fn claim(
        &self,
        detector: &Rc<DetectorCore<B>>,
        key: FrameKey,
        frame: &B::Frame,
    ) -> CollisionObjectHandle<B> {
        match self {
            Self::Unsharable => {
                log::trace!("building unshared collision object for {key:?}");
                let object = detector.backend.create_collision_object(key, frame);
                CollisionObjectHandle::new(detector, key, object)
            }
            Self::Sharable(objects) => objects.claim(detector, key, frame),
        }
    }

    /// Called by the destruction hook of `claimed`, after the backend was notified.
    pub fn release(&self, claimed: &ClaimedObject<B>) {
        if let Self::Sharable(objects) = self {
            objects.erase(claimed);
        }
    }
}

/// The cache of a sharing manager.
///
/// The map only holds weak references: ownership of the objects stays with the
/// handles. An entry is inserted once its object is fully built, and erased by
/// the object's destruction hook before the object is destroyed.
pub(crate) struct SharableObjects<B: CollisionBackend> {
    objects: RefCell<HashMap<FrameKey, Weak<ClaimedObject<B>>>>,
}

impl<B: CollisionBackend> Default for SharableObjects<B> {
    fn default() -> Self {
        Self {
            objects: RefCell::new(HashMap::default()),
        }
    }
}

impl<B: CollisionBackend> SharableObjects<B> {
    fn len(&self) -> usize {
        self.objects.borrow().len()
    }

    fn claim(
        &self,
        detector: &Rc<DetectorCore<B>>,
        key: FrameKey,
        frame: &B::Frame,
    ) -> CollisionObjectHandle<B> {
        if let Some(cached) = self.objects.borrow().get(&key) {
            let Some(claimed) = cached.upgrade() else {
                panic!(
                    "the collision object cached for {key:?} was destroyed without erasing its cache entry"
                );
            };
            log::trace!("reusing cached collision object for {key:?}");
            return CollisionObjectHandle::from_shared(claimed);
        }

        log::trace!("building shared collision object for {key:?}");
        // No borrow of the map is held while the backend builds the object.
        let object = detector.backend.create_collision_object(key, frame);
        let handle = CollisionObjectHandle::new(detector, key, object);
        let _ = self
            .objects
            .borrow_mut()
            .insert(key, handle.downgrade());

        handle
    }

    fn erase(&self, claimed: &ClaimedObject<B>) {
        let mut objects = self.objects.borrow_mut();
        // The entry may only be erased by the object it points to.
        let is_cached = objects
            .get(&claimed.frame)
            .is_some_and(|cached| ptr::eq(cached.as_ptr(), claimed));

        if is_cached {
            log::trace!("erasing cached collision object of {:?}", claimed.frame);
            let _ = hashmap::remove_entry(&mut objects, &claimed.frame);
        }
    }
}

impl<B: CollisionBackend> Drop for SharableObjects<B> {
    fn drop(&mut self) {
        // Not checked while unwinding: a second panic would abort.
        #[cfg(feature = "std")]
        if std::thread::panicking() {
            return;
        }

        let num_live = self.objects.get_mut().len();
        assert!(
            num_live == 0,
            "collision detector dropped while {num_live} shared collision object(s) are still alive"
        );
    }
}
