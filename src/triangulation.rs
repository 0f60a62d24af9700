use crate::{ObjectObservation, RangeError, StereoRig};
use core::fmt;
use log::debug;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// Where the object sits relative to the camera pair, decided from the signs
/// of the two angular offsets. Its `Display` impl renders the human-readable
/// case text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Placement {
    /// The object projects right of center in the left image and left of
    /// center in the right image.
    BetweenCameras,
    /// The object appears left of center in both images.
    LeftOfLeftCamera,
    /// The object appears right of center in both images.
    RightOfRightCamera,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Placement::BetweenCameras => "between the cameras",
            Placement::LeftOfLeftCamera => "to the left of the left camera",
            Placement::RightOfRightCamera => "to the right of the right camera",
        })
    }
}

/// A successful triangulation: the estimated distance plus the classified
/// placement it was computed under.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct RangeEstimate {
    /// Estimated distance from the rig to the object in meters.
    pub distance_m: f64,
    /// The camera-relative configuration the estimate was computed under.
    pub placement: Placement,
}

impl RangeEstimate {
    /// Human-readable rationale for presentation, e.g.
    /// `"Object is between the cameras."`.
    pub fn details(&self) -> String {
        format!("Object is {}.", self.placement)
    }
}

/// Classifies the sign pair and returns the placement together with the
/// triangle's internal angles at the left and right camera, in degrees.
///
/// The offsets are measured from each image's optical axis, so an offset of
/// zero magnitude would put the object exactly on the axis; that boundary
/// matches none of the three configurations and is reported as
/// [`RangeError::UnclassifiedGeometry`]. NaN offsets fail every comparison
/// and land there as well.
fn classify(left_deg: f64, right_deg: f64) -> Result<(Placement, f64, f64), RangeError> {
    if left_deg < 0.0 && right_deg > 0.0 {
        Ok((
            Placement::BetweenCameras,
            90.0 - left_deg.abs(),
            90.0 - right_deg.abs(),
        ))
    } else if left_deg > 0.0 && right_deg > 0.0 {
        Ok((
            Placement::LeftOfLeftCamera,
            90.0 + left_deg.abs(),
            90.0 - right_deg.abs(),
        ))
    } else if left_deg < 0.0 && right_deg < 0.0 {
        Ok((
            Placement::RightOfRightCamera,
            90.0 - left_deg.abs(),
            90.0 + right_deg.abs(),
        ))
    } else {
        Err(RangeError::UnclassifiedGeometry {
            left_deg,
            right_deg,
        })
    }
}

impl StereoRig {
    /// Triangulates the distance to the object from one observation per
    /// camera.
    ///
    /// The sign pair of the angular offsets picks the camera-relative
    /// configuration and the internal angles of the triangle formed by the
    /// two optical centers and the object; the remaining angle at the object
    /// follows from the angle sum, and the distance from the law of sines
    /// applied to the triangle's median:
    ///
    /// ```text
    /// d = (b / 2) * sqrt(2 * (sin²(L) + sin²(R)) / sin²(O) - 1)
    /// ```
    ///
    /// with `b` the baseline and `L`, `R`, `O` the internal angles at the
    /// left camera, right camera and object.
    ///
    /// A pure function of its inputs: repeated calls with identical
    /// observations return bit-identical results. All degenerate geometry is
    /// reported through the `Err` arm; the method never panics.
    ///
    /// ```
    /// use stereo_range::{ObjectObservation, Placement, StereoRig};
    ///
    /// let rig = StereoRig::new(55.0, 0.265);
    /// let left = ObjectObservation {
    ///     image_center_x: 320,
    ///     object_center_x: 436,
    ///     angle_of_view_deg: -10.0,
    /// };
    /// let right = ObjectObservation {
    ///     image_center_x: 320,
    ///     object_center_x: 227,
    ///     angle_of_view_deg: 8.0,
    /// };
    /// let estimate = rig.calculate_distance(left, right).unwrap();
    /// assert_eq!(estimate.placement, Placement::BetweenCameras);
    /// assert_eq!(estimate.details(), "Object is between the cameras.");
    /// assert!(estimate.distance_m > 0.0);
    /// ```
    pub fn calculate_distance(
        &self,
        left: ObjectObservation,
        right: ObjectObservation,
    ) -> Result<RangeEstimate, RangeError> {
        let (placement, internal_left_deg, internal_right_deg) =
            classify(left.angle_of_view_deg, right.angle_of_view_deg)?;

        let internal_obj_deg = 180.0 - (internal_left_deg + internal_right_deg);
        debug!(
            "placement: {}, internal angles: left={} right={} object={}",
            placement, internal_left_deg, internal_right_deg, internal_obj_deg
        );
        if internal_obj_deg <= 0.0 {
            return Err(RangeError::DegenerateTriangle {
                object_angle_deg: internal_obj_deg,
            });
        }

        let internal_left_rad = internal_left_deg.to_radians();
        let internal_right_rad = internal_right_deg.to_radians();
        let internal_obj_rad = internal_obj_deg.to_radians();

        let denominator = internal_obj_rad.sin().powi(2);
        if denominator == 0.0 {
            return Err(RangeError::SingularDenominator);
        }

        let numerator = internal_left_rad.sin().powi(2) + internal_right_rad.sin().powi(2);
        let radicand = 2.0 * (numerator / denominator) - 1.0;
        if radicand < 0.0 {
            return Err(RangeError::NegativeRadicand { radicand });
        }

        let distance_m = (self.baseline_m() / 2.0) * radicand.sqrt();
        if !distance_m.is_finite() {
            return Err(RangeError::NumericFault { value: distance_m });
        }

        Ok(RangeEstimate {
            distance_m,
            placement,
        })
    }
}
