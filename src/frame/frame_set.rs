use super::FrameKey;
use alloc::rc::Rc;
use core::cell::RefCell;
use slab::Slab;

/// A frame set shared between its owner and the collision detectors bound to it.
pub type SharedFrames<F> = Rc<RefCell<FrameSet<F>>>;

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
struct StampedFrame<F> {
    stamp: u32,
    frame: F,
}

/// An arena of frames addressed by stamped [`FrameKey`]s.
///
/// Slots are recycled, stamps are not: every insertion receives the next stamp,
/// so a key obtained before a [`FrameSet::remove`] stays stale forever even after
/// its slot is handed to a new frame. This is what lets collision-object caches
/// key on frame identity without ever mistaking a new frame for an old one.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct FrameSet<F> {
    frames: Slab<StampedFrame<F>>,
    next_stamp: u32,
}

impl<F> Default for FrameSet<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> FrameSet<F> {
    /// Creates an empty frame set.
    pub fn new() -> Self {
        Self {
            frames: Slab::new(),
            next_stamp: 0,
        }
    }

    /// Wraps this frame set so it can be shared with collision detectors.
    pub fn into_shared(self) -> SharedFrames<F> {
        Rc::new(RefCell::new(self))
    }

    /// Inserts a frame and returns its key.
    ///
    /// # Panics
    ///
    /// Panics if the set would hold more than `u32::MAX + 1` slots.
    pub fn insert(&mut self, frame: F) -> FrameKey {
        let index = slot_index(self.frames.vacant_key());
        let stamp = self.next_stamp;
        // Stamps wrap after 2^32 insertions; a key would have to stay alive that
        // long for a collision to be possible.
        self.next_stamp = self.next_stamp.wrapping_add(1);
        let slot = self.frames.insert(StampedFrame { stamp, frame });
        debug_assert_eq!(slot, index as usize);

        FrameKey { index, stamp }
    }

    /// Removes the frame designated by `key`, if it is still part of this set.
    pub fn remove(&mut self, key: FrameKey) -> Option<F> {
        if !self.contains(key) {
            return None;
        }

        Some(self.frames.remove(key.index as usize).frame)
    }

    /// Does `key` designate a frame that is still part of this set?
    #[inline]
    pub fn contains(&self, key: FrameKey) -> bool {
        self.get(key).is_some()
    }

    /// The frame designated by `key`.
    #[inline]
    pub fn get(&self, key: FrameKey) -> Option<&F> {
        self.frames
            .get(key.index as usize)
            .filter(|stamped| stamped.stamp == key.stamp)
            .map(|stamped| &stamped.frame)
    }

    /// The frame designated by `key`, mutably.
    #[inline]
    pub fn get_mut(&mut self, key: FrameKey) -> Option<&mut F> {
        self.frames
            .get_mut(key.index as usize)
            .filter(|stamped| stamped.stamp == key.stamp)
            .map(|stamped| &mut stamped.frame)
    }

    /// The number of frames in this set.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Is this set empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Iterates through every frame of this set, with its key.
    pub fn iter(&self) -> impl Iterator<Item = (FrameKey, &F)> {
        self.frames.iter().map(|(index, stamped)| {
            (
                FrameKey {
                    // Checked on insertion.
                    index: index as u32,
                    stamp: stamped.stamp,
                },
                &stamped.frame,
            )
        })
    }
}

fn slot_index(index: usize) -> u32 {
    match u32::try_from(index) {
        Ok(index) => index,
        Err(_) => panic!("frame set slot {index} does not fit in a frame key"),
    }
}
