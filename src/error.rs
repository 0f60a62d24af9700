use thiserror::Error;

/// Everything that can go wrong while turning a pair of observations into a
/// distance. Each variant corresponds to one anticipated failure mode of the
/// geometry; the `Display` text carries the diagnostic detail.
///
/// The ranging methods never panic on numeric input. Callers distinguish
/// success from failure solely through the returned `Result`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RangeError {
    /// The signs of the two angular offsets match none of the three known
    /// camera-relative configurations. An exactly-zero offset on either side
    /// lands here: the along-axis case has no defined camera-relative label.
    #[error("unknown case based on angles: left={left_deg}, right={right_deg}")]
    UnclassifiedGeometry { left_deg: f64, right_deg: f64 },

    /// The internal angles at the two cameras already consume the full
    /// triangle, leaving a non-positive angle at the object.
    #[error("invalid internal angles leading to degenerate triangle (object angle {object_angle_deg} deg)")]
    DegenerateTriangle { object_angle_deg: f64 },

    /// The triangulation denominator evaluated to exactly zero.
    #[error("division by zero encountered in distance calculation")]
    SingularDenominator,

    /// The argument of the square root in the distance formula came out
    /// negative, so the configured geometry admits no real solution.
    #[error("invalid value inside square root in distance calculation ({radicand})")]
    NegativeRadicand { radicand: f64 },

    /// The object centers coincide in the two images, so the disparity
    /// formula has nothing to divide by.
    #[error("disparity is zero, unable to calculate distance")]
    ZeroDisparity,

    /// [`StereoRig::update_pixel_to_angle_ratio`](crate::StereoRig::update_pixel_to_angle_ratio)
    /// has not been called yet, so no degrees-per-pixel ratio exists for the
    /// current image resolution.
    #[error("pixel-to-angle ratio not initialized; call update_pixel_to_angle_ratio first")]
    RatioNotInitialized,

    /// Catch-all boundary for arithmetic that produced a non-finite value,
    /// e.g. NaN pixel coordinates leaking through an otherwise valid call.
    #[error("error during distance calculation: non-finite value {value}")]
    NumericFault { value: f64 },
}
