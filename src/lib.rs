//! This crate estimates the real-world distance to a single object photographed
//! simultaneously by two horizontally-offset cameras, given the detected bounding
//! box of the object in each image. It does not detect objects itself; a detector
//! (or any other source of pixel positions) supplies one [`ObjectObservation`] per
//! image and the [`StereoRig`] turns the pair into a physical distance.
//!
//! Two independent estimators are provided. The primary one classifies where the
//! object sits relative to the camera pair from the signs of the per-image angular
//! offsets, builds the triangle formed by the two optical centers and the object,
//! and solves it with trigonometric relations. The secondary one is the classic
//! rectified-stereo disparity formula and serves as a cross-check; the two need
//! not agree for all geometries and are reported independently.
//!
//! - `L`, `R` the optical centers of the left and right cameras
//! - `p` the object being ranged
//! - `b` the baseline between the optical centers
//!
//! ```text
//!             p
//!            / \
//!           /   \
//!          /     \
//!         L---b---R
//! ```
//!
//! The per-image angular offset is signed: positive means the object appears to
//! the left of the image center, negative to the right. The sign pair decides the
//! triangle's internal angles at `L` and `R`. Sign pairs that match none of the
//! three known configurations (an exactly-zero offset included) are reported as
//! [`RangeError::UnclassifiedGeometry`] rather than guessed at.
//!
//! ```
//! use stereo_range::{ObjectObservation, Placement, StereoRig};
//!
//! // A rig with a 55 degree horizontal field of view and cameras 26.5 cm apart.
//! let mut rig = StereoRig::new(55.0, 0.265);
//! rig.update_pixel_to_angle_ratio(640);
//!
//! // The object sits right of center in the left image and left of center in
//! // the right image, so it lies between the cameras.
//! let left = rig.observe(640, 436).unwrap();
//! let right = rig.observe(640, 227).unwrap();
//!
//! let estimate = rig.calculate_distance(left, right).unwrap();
//! assert_eq!(estimate.placement, Placement::BetweenCameras);
//! assert!(estimate.distance_m > 0.0);
//!
//! // Independent cross-check from pixel disparity.
//! let check = rig.calculate_distance_from_disparity(left, right).unwrap();
//! assert!(check > 0.0);
//! ```
//!
//! Every failure mode of the geometry (degenerate triangles, zero disparity,
//! unclassifiable sign pairs, non-finite arithmetic) is returned as a
//! [`RangeError`] value; no public method panics on numeric input.

mod camera;
mod disparity;
mod error;
mod observation;
mod triangulation;

pub use camera::*;
pub use error::*;
pub use nalgebra;
pub use observation::*;
pub use triangulation::*;
