//! Collision detectors and the cache of collision objects they hand out.
//!
//! # Overview
//!
//! A [`CollisionDetector`] turns [`FrameKey`](crate::frame::FrameKey)s into
//! [`CollisionObjectHandle`]s. The objects themselves are built by the
//! detector's [`CollisionBackend`], which also runs the actual collision
//! queries. What the detector adds on top of the backend is the lifetime
//! management of those objects:
//!
//! * with [`ObjectSharing::Unsharable`], every claim builds a new object, so two
//!   collision groups containing the same frame own two independent objects;
//! * with [`ObjectSharing::Sharable`], claims for a frame that already has a live
//!   object return a handle to that object.
//!
//! Either way, an object is destroyed as soon as its last handle is dropped.
//! Right before that happens the backend is notified through
//! [`CollisionBackend::notify_collision_object_destroying`] and, when objects are
//! shared, the cache entry of the object is erased.
//!
//! # Example
//!
//! ```
//! # #[cfg(all(feature = "dim3", feature = "f32"))] {
//! use colcache3d::backend::BruteForceBackend;
//! use colcache3d::detector::{CollisionDetector, CollisionOption};
//! use colcache3d::frame::{FrameSet, ShapeFrame};
//! use colcache3d::math::Isometry;
//!
//! let mut frames = FrameSet::new();
//! let a = frames.insert(ShapeFrame::ball(1.0, Isometry::identity()));
//! let b = frames.insert(ShapeFrame::ball(1.0, Isometry::translation(1.5, 0.0, 0.0)));
//! let frames = frames.into_shared();
//!
//! let detector = CollisionDetector::new(BruteForceBackend::sharable(), frames);
//! let mut group = detector.create_collision_group();
//! group.add_frames([a, b]).unwrap();
//!
//! assert!(detector.collide_binary(&group, &CollisionOption::default()));
//! # }
//! ```

pub use self::collision_backend::{CollisionBackend, ObjectSharing};
pub use self::collision_detector::CollisionDetector;
pub use self::collision_group::CollisionGroup;
pub use self::collision_option::{CollisionFilter, CollisionOption, PairBlacklistFilter};
pub use self::collision_result::{CollisionResult, Contact};
pub use self::error::{ClaimError, SharingPolicyError};
pub use self::object_handle::CollisionObjectHandle;

mod collision_backend;
mod collision_detector;
mod collision_group;
mod collision_option;
mod collision_result;
mod error;
mod object_handle;
mod object_manager;
