use super::ObjectSharing;
use crate::frame::FrameKey;

/// Errors raised when claiming a collision object.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClaimError {
    /// The key does not designate a frame of the detector's frame set, either
    /// because the frame was removed or because the key belongs to a previous
    /// occupant of its slot.
    #[error("the frame {0:?} is not part of the frame set of this detector")]
    StaleFrame(FrameKey),
    /// The detector a collision group was created by has been dropped.
    #[error("the collision detector of this group has been dropped")]
    DetectorDropped,
}

/// Error raised when changing the object-sharing policy of a detector.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum SharingPolicyError {
    /// A collision object manager with a different policy was already installed.
    /// The policy of a detector cannot change once it has been installed.
    #[error("the detector already manages its collision objects with the {0:?} policy")]
    AlreadyInstalled(ObjectSharing),
}
