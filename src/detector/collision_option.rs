use crate::frame::FrameKey;
use crate::utils::hashmap::HashSet;
use crate::utils::SortedPair;
use alloc::rc::Rc;
use core::fmt;

/// Decides which pairs of frames are not checked for collision.
pub trait CollisionFilter {
    /// Returns `true` if collisions between these two frames must be ignored.
    fn ignores_collision(&self, frame1: FrameKey, frame2: FrameKey) -> bool;
}

impl<F: Fn(FrameKey, FrameKey) -> bool> CollisionFilter for F {
    fn ignores_collision(&self, frame1: FrameKey, frame2: FrameKey) -> bool {
        self(frame1, frame2)
    }
}

/// A filter ignoring an explicit list of unordered frame pairs.
#[derive(Clone, Debug, Default)]
pub struct PairBlacklistFilter {
    pairs: HashSet<SortedPair<FrameKey>>,
}

impl PairBlacklistFilter {
    /// Creates a filter that ignores nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ignores collisions between `frame1` and `frame2`.
    pub fn add_pair(&mut self, frame1: FrameKey, frame2: FrameKey) {
        let _ = self.pairs.insert(SortedPair::new(frame1, frame2));
    }

    /// Stops ignoring collisions between `frame1` and `frame2`.
    pub fn remove_pair(&mut self, frame1: FrameKey, frame2: FrameKey) {
        let _ = self.pairs.remove(&SortedPair::new(frame1, frame2));
    }

    /// Stops ignoring every pair involving `frame`.
    pub fn remove_frame(&mut self, frame: FrameKey) {
        self.pairs.retain(|pair| !pair.contains(&frame));
    }

    /// Does this filter ignore collisions between `frame1` and `frame2`?
    pub fn contains_pair(&self, frame1: FrameKey, frame2: FrameKey) -> bool {
        self.pairs.contains(&SortedPair::new(frame1, frame2))
    }

    /// The number of ignored pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Does this filter ignore nothing?
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Stops ignoring any pair.
    pub fn clear(&mut self) {
        self.pairs.clear();
    }
}

impl CollisionFilter for PairBlacklistFilter {
    fn ignores_collision(&self, frame1: FrameKey, frame2: FrameKey) -> bool {
        self.contains_pair(frame1, frame2)
    }
}

/// Parameters of a collision check.
#[derive(Clone)]
pub struct CollisionOption {
    /// Whether contact points are computed. When `false`, colliding pairs are
    /// still reported, without contact geometry.
    pub enable_contact: bool,
    /// Whether the check stops at the first colliding pair.
    pub binary_check: bool,
    /// The maximum number of contacts recorded by a single check.
    pub max_num_contacts: usize,
    /// The filter deciding which pairs are skipped, if any.
    pub collision_filter: Option<Rc<dyn CollisionFilter>>,
}

impl Default for CollisionOption {
    fn default() -> Self {
        Self::new(true, false, 1000, None)
    }
}

impl CollisionOption {
    /// Creates a new collision option.
    pub fn new(
        enable_contact: bool,
        binary_check: bool,
        max_num_contacts: usize,
        collision_filter: Option<Rc<dyn CollisionFilter>>,
    ) -> Self {
        Self {
            enable_contact,
            binary_check,
            max_num_contacts,
            collision_filter,
        }
    }

    /// An option for yes/no checks: no contacts, stop at the first hit.
    pub fn binary() -> Self {
        Self::new(false, true, 1, None)
    }

    /// Returns this option with its filter replaced by `filter`.
    pub fn with_filter(mut self, filter: Rc<dyn CollisionFilter>) -> Self {
        self.collision_filter = Some(filter);
        self
    }

    /// Does the filter of this option ignore collisions between these frames?
    #[inline]
    pub fn ignores_collision(&self, frame1: FrameKey, frame2: FrameKey) -> bool {
        self.collision_filter
            .as_ref()
            .is_some_and(|filter| filter.ignores_collision(frame1, frame2))
    }
}

impl fmt::Debug for CollisionOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollisionOption")
            .field("enable_contact", &self.enable_contact)
            .field("binary_check", &self.binary_check)
            .field("max_num_contacts", &self.max_num_contacts)
            .field("collision_filter", &self.collision_filter.is_some())
            .finish()
    }
}
