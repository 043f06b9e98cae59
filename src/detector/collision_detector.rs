use super::object_handle::ClaimedObject;
use super::object_manager::CollisionObjectManager;
use super::{
    ClaimError, CollisionBackend, CollisionGroup, CollisionObjectHandle, CollisionOption,
    CollisionResult, ObjectSharing, SharingPolicyError,
};
use crate::frame::{FrameKey, SharedFrames};
use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{OnceCell, RefCell, RefMut};

/// The part of a detector collision objects point back to.
pub(crate) struct DetectorCore<B: CollisionBackend> {
    pub(crate) backend: B,
    frames: SharedFrames<B::Frame>,
    manager: OnceCell<CollisionObjectManager<B>>,
}

impl<B: CollisionBackend> DetectorCore<B> {
    fn manager(&self) -> &CollisionObjectManager<B> {
        self.manager.get_or_init(|| {
            let sharing = self.backend.object_sharing();
            log::debug!("installing the {sharing:?} collision object manager");
            CollisionObjectManager::new(sharing)
        })
    }

    pub(crate) fn claim(
        self: &Rc<Self>,
        key: FrameKey,
    ) -> Result<CollisionObjectHandle<B>, ClaimError> {
        let frames = self.frames.borrow();
        let frame = frames.get(key).ok_or(ClaimError::StaleFrame(key))?;
        Ok(self.manager().claim(self, key, frame))
    }

    pub(crate) fn release(&self, claimed: &ClaimedObject<B>) {
        self.backend
            .notify_collision_object_destroying(&claimed.object);

        if let Some(manager) = self.manager.get() {
            manager.release(claimed);
        }
    }
}

/// Hands out collision objects and runs collision queries through a backend.
///
/// The detector owns the cache of collision objects and the scratch option and
/// result used by the binary collision checks. It is bound to a set of frames
/// it never owns exclusively, and is meant to be used from a single thread.
///
/// # Lifetime
///
/// Collision objects only hold a weak reference to their detector. When the
/// detector shares its objects, every handle it gave out must be dropped before
/// the detector itself: dropping it earlier panics, as the cached objects would
/// otherwise outlive the cache they are registered in.
pub struct CollisionDetector<B: CollisionBackend> {
    core: Rc<DetectorCore<B>>,
    dummy_option: RefCell<Option<Box<CollisionOption>>>,
    dummy_result: RefCell<Option<Box<CollisionResult>>>,
}

impl<B: CollisionBackend> CollisionDetector<B> {
    /// Creates a detector bound to `frames`.
    ///
    /// The object-sharing policy is chosen by the backend on the first claim,
    /// unless [`Self::set_object_sharing`] is called before.
    pub fn new(backend: B, frames: SharedFrames<B::Frame>) -> Self {
        Self::with_manager(backend, frames, OnceCell::new())
    }

    /// Creates a detector bound to `frames`, with the given object-sharing policy.
    pub fn with_object_sharing(
        backend: B,
        frames: SharedFrames<B::Frame>,
        sharing: ObjectSharing,
    ) -> Self {
        Self::with_manager(
            backend,
            frames,
            OnceCell::from(CollisionObjectManager::new(sharing)),
        )
    }

    fn with_manager(
        backend: B,
        frames: SharedFrames<B::Frame>,
        manager: OnceCell<CollisionObjectManager<B>>,
    ) -> Self {
        Self {
            core: Rc::new(DetectorCore {
                backend,
                frames,
                manager,
            }),
            dummy_option: RefCell::new(None),
            dummy_result: RefCell::new(None),
        }
    }

    /// Installs the object-sharing policy of this detector.
    ///
    /// This must happen before the first claim: once installed, the policy is
    /// fixed. Installing the policy that is already in place is a no-op.
    pub fn set_object_sharing(&self, sharing: ObjectSharing) -> Result<(), SharingPolicyError> {
        match self.object_sharing() {
            Some(installed) if installed == sharing => Ok(()),
            Some(installed) => Err(SharingPolicyError::AlreadyInstalled(installed)),
            None => {
                log::debug!("installing the {sharing:?} collision object manager");
                let _ = self.core.manager.set(CollisionObjectManager::new(sharing));
                Ok(())
            }
        }
    }

    /// The object-sharing policy of this detector, if it was installed already.
    pub fn object_sharing(&self) -> Option<ObjectSharing> {
        self.core.manager.get().map(|manager| manager.sharing())
    }

    /// The backend of this detector.
    pub fn backend(&self) -> &B {
        &self.core.backend
    }

    /// The frames this detector is bound to.
    pub fn frames(&self) -> &SharedFrames<B::Frame> {
        &self.core.frames
    }

    /// Gets a collision object for the frame designated by `key`.
    ///
    /// With [`ObjectSharing::Sharable`], the object already built for this frame
    /// is returned if any of its handles is still alive. Otherwise, the backend
    /// builds a new object.
    pub fn claim_collision_object(
        &self,
        key: FrameKey,
    ) -> Result<CollisionObjectHandle<B>, ClaimError> {
        self.core.claim(key)
    }

    /// The number of live collision objects cached by this detector.
    ///
    /// Always zero when objects are not shared.
    pub fn num_cached_objects(&self) -> usize {
        self.core
            .manager
            .get()
            .map_or(0, |manager| manager.num_cached_objects())
    }

    /// Creates an empty collision group claiming its objects from this detector.
    pub fn create_collision_group(&self) -> CollisionGroup<B> {
        CollisionGroup::new(Rc::downgrade(&self.core))
    }

    /// Creates an empty collision group that can be shared.
    pub fn create_collision_group_as_shared(&self) -> Rc<RefCell<CollisionGroup<B>>> {
        Rc::new(RefCell::new(self.create_collision_group()))
    }

    fn owns(&self, group: &CollisionGroup<B>) -> bool {
        if group.is_created_by(&self.core) {
            true
        } else {
            log::warn!("attempted to check collisions of a group created by another detector");
            false
        }
    }

    /// Checks for collisions between the objects of `group`.
    ///
    /// Returns `true` if at least one colliding pair was found, in which case
    /// `result` describes it. Groups created by another detector never collide.
    pub fn collide(
        &self,
        group: &CollisionGroup<B>,
        option: &CollisionOption,
        result: &mut CollisionResult,
    ) -> bool {
        if !self.owns(group) {
            return false;
        }

        let frames = self.core.frames.borrow();
        self.core.backend.collide(&frames, group, option, result)
    }

    /// Checks for collisions between the objects of `group1` and those of `group2`.
    ///
    /// Returns `true` if at least one colliding pair was found, in which case
    /// `result` describes it. Groups created by another detector never collide.
    pub fn collide_groups(
        &self,
        group1: &CollisionGroup<B>,
        group2: &CollisionGroup<B>,
        option: &CollisionOption,
        result: &mut CollisionResult,
    ) -> bool {
        if !self.owns(group1) || !self.owns(group2) {
            return false;
        }

        let frames = self.core.frames.borrow();
        self.core
            .backend
            .collide_groups(&frames, group1, group2, option, result)
    }

    /// Checks whether any two objects of `group` collide, without computing
    /// contacts.
    ///
    /// Only the collision filter of `option` is taken into account, unless
    /// `option` already requests a binary check in which case it is used as-is.
    /// On that path its `max_num_contacts` is honored too, so a cap of zero
    /// reports no collision.
    pub fn collide_binary(&self, group: &CollisionGroup<B>, option: &CollisionOption) -> bool {
        let mut result = self.dummy_result();

        if option.binary_check {
            return self.collide(group, option, &mut result);
        }

        let dummy_option = self.dummy_option(option);
        self.collide(group, &dummy_option, &mut result)
    }

    /// Checks whether any object of `group1` collides with any object of
    /// `group2`, without computing contacts.
    ///
    /// Only the collision filter of `option` is taken into account, unless
    /// `option` already requests a binary check in which case it is used as-is.
    /// On that path its `max_num_contacts` is honored too, so a cap of zero
    /// reports no collision.
    pub fn collide_groups_binary(
        &self,
        group1: &CollisionGroup<B>,
        group2: &CollisionGroup<B>,
        option: &CollisionOption,
    ) -> bool {
        let mut result = self.dummy_result();

        if option.binary_check {
            return self.collide_groups(group1, group2, option, &mut result);
        }

        let dummy_option = self.dummy_option(option);
        self.collide_groups(group1, group2, &dummy_option, &mut result)
    }

    // The scratch result of the binary checks, cleared.
    fn dummy_result(&self) -> RefMut<'_, CollisionResult> {
        let mut result = RefMut::map(self.dummy_result.borrow_mut(), |result| {
            &mut **result.get_or_insert_with(|| Box::new(CollisionResult::new()))
        });
        result.clear();
        result
    }

    // The scratch option of the binary checks, with the filter of `option`.
    fn dummy_option(&self, option: &CollisionOption) -> RefMut<'_, CollisionOption> {
        let mut dummy = RefMut::map(self.dummy_option.borrow_mut(), |dummy| {
            &mut **dummy.get_or_insert_with(|| Box::new(CollisionOption::binary()))
        });

        debug_assert!(!dummy.enable_contact);
        debug_assert!(dummy.binary_check);
        debug_assert_eq!(dummy.max_num_contacts, 1);

        dummy.collision_filter = option.collision_filter.clone();
        dummy
    }
}
