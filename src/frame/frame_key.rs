use core::fmt;

/// The identity of a frame inside a [`FrameSet`](super::FrameSet).
///
/// Two keys are equal only if they designate the same insertion into the same
/// slot: the `stamp` is unique per insertion, so a slot reused for another frame
/// yields a key that never compares equal to the keys of its previous occupants.
/// Frame values are never compared.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct FrameKey {
    pub(crate) index: u32,
    pub(crate) stamp: u32,
}

impl FrameKey {
    /// The slot of the frame set this key points to.
    #[inline]
    pub fn index(self) -> u32 {
        self.index
    }

    /// The insertion stamp distinguishing successive occupants of the same slot.
    #[inline]
    pub fn stamp(self) -> u32 {
        self.stamp
    }
}

impl fmt::Debug for FrameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FrameKey({}#{})", self.index, self.stamp)
    }
}
