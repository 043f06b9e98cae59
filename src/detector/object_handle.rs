use super::collision_detector::DetectorCore;
use super::CollisionBackend;
use crate::frame::FrameKey;
use alloc::rc::{Rc, Weak};
use core::fmt;
use core::ops::Deref;

/// A collision object, together with what its destruction hook needs.
pub(crate) struct ClaimedObject<B: CollisionBackend> {
    pub(crate) object: B::Object,
    pub(crate) frame: FrameKey,
    // Non-owning: the hook must not keep the detector alive.
    detector: Weak<DetectorCore<B>>,
}

impl<B: CollisionBackend> Drop for ClaimedObject<B> {
    // Runs once the last handle is gone. `object` is destroyed after this
    // returns, so the order is: notify, erase the cache entry, destroy.
    fn drop(&mut self) {
        match self.detector.upgrade() {
            Some(detector) => detector.release(self),
            None => log::warn!(
                "collision object of {:?} outlived its detector, nobody to notify",
                self.frame
            ),
        }
    }
}

/// A shared handle to a collision object claimed from a
/// [`CollisionDetector`](super::CollisionDetector).
///
/// Cloning a handle is cheap and never builds a new object. The object is
/// destroyed when the last clone is dropped.
pub struct CollisionObjectHandle<B: CollisionBackend>(Rc<ClaimedObject<B>>);

impl<B: CollisionBackend> CollisionObjectHandle<B> {
    pub(crate) fn new(detector: &Rc<DetectorCore<B>>, frame: FrameKey, object: B::Object) -> Self {
        Self(Rc::new(ClaimedObject {
            object,
            frame,
            detector: Rc::downgrade(detector),
        }))
    }

    pub(crate) fn from_shared(claimed: Rc<ClaimedObject<B>>) -> Self {
        Self(claimed)
    }

    pub(crate) fn downgrade(&self) -> Weak<ClaimedObject<B>> {
        Rc::downgrade(&self.0)
    }

    /// The key of the frame this object was built for.
    #[inline]
    pub fn frame_key(&self) -> FrameKey {
        self.0.frame
    }

    /// The collision object.
    #[inline]
    pub fn object(&self) -> &B::Object {
        &self.0.object
    }

    /// Do these two handles point to the same collision object?
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.0, &other.0)
    }

    /// The number of handles currently pointing to this object.
    #[inline]
    pub fn num_handles(this: &Self) -> usize {
        Rc::strong_count(&this.0)
    }
}

impl<B: CollisionBackend> Clone for CollisionObjectHandle<B> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<B: CollisionBackend> Deref for CollisionObjectHandle<B> {
    type Target = B::Object;

    fn deref(&self) -> &B::Object {
        &self.0.object
    }
}

impl<B: CollisionBackend> fmt::Debug for CollisionObjectHandle<B>
where
    B::Object: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollisionObjectHandle")
            .field("frame", &self.0.frame)
            .field("object", &self.0.object)
            .finish()
    }
}
