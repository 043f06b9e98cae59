use super::collision_detector::DetectorCore;
use super::{ClaimError, CollisionBackend, CollisionObjectHandle};
use crate::frame::FrameKey;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;

/// A set of frames whose collision objects are checked together.
///
/// Adding a frame claims a collision object from the detector that created the
/// group; removing it drops the group's handle, which destroys the object unless
/// another group shares it.
pub struct CollisionGroup<B: CollisionBackend> {
    detector: Weak<DetectorCore<B>>,
    objects: Vec<CollisionObjectHandle<B>>,
}

impl<B: CollisionBackend> CollisionGroup<B> {
    pub(crate) fn new(detector: Weak<DetectorCore<B>>) -> Self {
        Self {
            detector,
            objects: Vec::new(),
        }
    }

    pub(crate) fn is_created_by(&self, detector: &Rc<DetectorCore<B>>) -> bool {
        core::ptr::eq(self.detector.as_ptr(), Rc::as_ptr(detector))
    }

    /// Adds a frame to this group.
    ///
    /// Adding a frame that is already part of the group does nothing.
    pub fn add_frame(&mut self, key: FrameKey) -> Result<(), ClaimError> {
        if self.has_frame(key) {
            return Ok(());
        }

        let detector = self.detector.upgrade().ok_or(ClaimError::DetectorDropped)?;
        let handle = detector.claim(key)?;
        self.objects.push(handle);
        Ok(())
    }

    /// Adds several frames to this group.
    ///
    /// Stops at the first frame that cannot be claimed; the frames added before
    /// it remain in the group.
    pub fn add_frames(&mut self, keys: impl IntoIterator<Item = FrameKey>) -> Result<(), ClaimError> {
        for key in keys {
            self.add_frame(key)?;
        }

        Ok(())
    }

    /// Removes a frame from this group.
    ///
    /// Returns `false` if the frame was not part of the group.
    pub fn remove_frame(&mut self, key: FrameKey) -> bool {
        match self.objects.iter().position(|handle| handle.frame_key() == key) {
            Some(i) => {
                drop(self.objects.remove(i));
                true
            }
            None => false,
        }
    }

    /// Removes several frames from this group.
    pub fn remove_frames(&mut self, keys: impl IntoIterator<Item = FrameKey>) {
        for key in keys {
            let _ = self.remove_frame(key);
        }
    }

    /// Removes every frame of this group.
    pub fn remove_all_frames(&mut self) {
        self.objects.clear();
    }

    /// Is the given frame part of this group?
    pub fn has_frame(&self, key: FrameKey) -> bool {
        self.objects.iter().any(|handle| handle.frame_key() == key)
    }

    /// The number of frames in this group.
    pub fn num_frames(&self) -> usize {
        self.objects.len()
    }

    /// Does this group contain no frame?
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// The keys of the frames of this group, in insertion order.
    pub fn frame_keys(&self) -> impl Iterator<Item = FrameKey> + '_ {
        self.objects.iter().map(|handle| handle.frame_key())
    }

    /// The collision objects of this group, in insertion order.
    pub fn objects(&self) -> &[CollisionObjectHandle<B>] {
        &self.objects
    }
}
