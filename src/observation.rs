#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// What one camera saw of the object, reduced to the horizontal axis.
///
/// One of these is built per image, either through
/// [`StereoRig::observe`](crate::StereoRig::observe) /
/// [`StereoRig::observe_box`](crate::StereoRig::observe_box) or directly by a
/// caller that computes the fields itself. All three fields refer to the same
/// image and must be consistent with each other; in particular
/// `angle_of_view_deg` must be derived from `image_center_x`,
/// `object_center_x` and the degrees-per-pixel ratio of the image the object
/// was detected in.
///
/// Observations are short-lived plain data, created per ranging call and
/// discarded once the caller has consumed the result.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ObjectObservation {
    /// Half the image width, floor division.
    pub image_center_x: u32,
    /// Midpoint of the detected bounding box's horizontal extent, floor division.
    pub object_center_x: u32,
    /// Signed angular offset of the object from the image's optical axis:
    /// `(image_center_x - object_center_x) * degrees_per_pixel`. Positive means
    /// the object appears left of the image center, negative right of it.
    pub angle_of_view_deg: f64,
}
