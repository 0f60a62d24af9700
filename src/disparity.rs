use crate::{ObjectObservation, RangeError, StereoRig};
use log::debug;

impl StereoRig {
    /// Estimates the distance from the pixel disparity between the two
    /// object centers, `d = f * b / disparity`, with `f` the focal length in
    /// pixel units and `b` the baseline.
    ///
    /// This is an independent cross-check against
    /// [`calculate_distance`](Self::calculate_distance): it assumes a
    /// simplified rectified-stereo model, so the two estimates need not agree
    /// in sign or magnitude for all geometries and are not reconciled here.
    /// In particular the sign of the result follows the sign of the
    /// disparity.
    ///
    /// ```
    /// use stereo_range::{ObjectObservation, StereoRig};
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
    /// let distance = rig.calculate_distance_from_disparity(left, right).unwrap();
    /// assert_eq!(distance, rig.focal_length_px() * 0.265 / 209.0);
    /// ```
    pub fn calculate_distance_from_disparity(
        &self,
        left: ObjectObservation,
        right: ObjectObservation,
    ) -> Result<f64, RangeError> {
        let disparity = i64::from(left.object_center_x) - i64::from(right.object_center_x);
        debug!("disparity: {} px", disparity);
        if disparity == 0 {
            return Err(RangeError::ZeroDisparity);
        }
        Ok(self.focal_length_px() * self.baseline_m() / disparity as f64)
    }
}
