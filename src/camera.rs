use crate::{ObjectObservation, RangeError};
use nalgebra::Point2;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// Image width in pixels used as the calibration basis when deriving the
/// focal length from the field of view.
pub const REFERENCE_WIDTH_PX: f64 = 640.0;

/// Configuration of a two-camera rig: the horizontal field of view shared by
/// both cameras, the baseline between their optical centers, and the focal
/// length in pixel units derived from them at construction.
///
/// The degrees-per-pixel ratio depends on the resolution of the images
/// actually being processed and is therefore not known at construction. It
/// starts out unset and must be initialized with
/// [`update_pixel_to_angle_ratio`](Self::update_pixel_to_angle_ratio) before
/// observations are built, and refreshed whenever the image resolution
/// changes. Callers own that ordering; reads of an unset ratio fail with
/// [`RangeError::RatioNotInitialized`].
///
/// Construction never rejects its inputs. A field of view outside
/// `(0, 180)` degrees or a non-positive baseline produces degenerate
/// geometry that surfaces through the error paths of the ranging methods
/// instead.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct StereoRig {
    fov_horizontal_deg: f64,
    baseline_m: f64,
    focal_length_px: f64,
    pixel_to_angle_ratio: Option<f64>,
}

impl StereoRig {
    /// Creates a rig from the horizontal field of view in degrees and the
    /// distance between the two optical centers in meters.
    ///
    /// The focal length in pixel units is derived immediately as
    /// `w / (2 * tan(fov / 2))` with `w` the fixed reference width of 640
    /// pixels, and never changes afterwards.
    ///
    /// ```
    /// use stereo_range::StereoRig;
    /// let rig = StereoRig::new(55.0, 0.265);
    /// assert!((rig.focal_length_px() - 615.04).abs() < 1e-2);
    /// ```
    pub fn new(fov_horizontal_deg: f64, baseline_m: f64) -> Self {
        let focal_length_px =
            REFERENCE_WIDTH_PX / (2.0 * (fov_horizontal_deg / 2.0).to_radians().tan());
        Self {
            fov_horizontal_deg,
            baseline_m,
            focal_length_px,
            pixel_to_angle_ratio: None,
        }
    }

    /// Horizontal field of view in degrees.
    pub fn fov_horizontal_deg(&self) -> f64 {
        self.fov_horizontal_deg
    }

    /// Distance between the two optical centers in meters.
    pub fn baseline_m(&self) -> f64 {
        self.baseline_m
    }

    /// Focal length in pixel units, derived at construction against the
    /// 640 px reference width.
    pub fn focal_length_px(&self) -> f64 {
        self.focal_length_px
    }

    /// Sets the degrees-per-pixel ratio for images of the given width.
    ///
    /// Must be called before any observation is built from a new image
    /// resolution; the previous ratio stays in effect until then.
    ///
    /// ```
    /// use stereo_range::StereoRig;
    /// let mut rig = StereoRig::new(55.0, 0.265);
    /// rig.update_pixel_to_angle_ratio(320);
    /// assert_eq!(rig.pixel_to_angle_ratio().unwrap(), 0.171875);
    /// ```
    pub fn update_pixel_to_angle_ratio(&mut self, resolution_width: u32) {
        self.pixel_to_angle_ratio = Some(self.fov_horizontal_deg / f64::from(resolution_width));
    }

    /// Degrees-per-pixel ratio of the current image resolution.
    ///
    /// Fails with [`RangeError::RatioNotInitialized`] until
    /// [`update_pixel_to_angle_ratio`](Self::update_pixel_to_angle_ratio)
    /// has been called.
    ///
    /// ```
    /// use stereo_range::{RangeError, StereoRig};
    /// let rig = StereoRig::new(55.0, 0.265);
    /// assert_eq!(rig.pixel_to_angle_ratio(), Err(RangeError::RatioNotInitialized));
    /// ```
    pub fn pixel_to_angle_ratio(&self) -> Result<f64, RangeError> {
        self.pixel_to_angle_ratio.ok_or(RangeError::RatioNotInitialized)
    }

    /// Builds the observation for one image from the horizontal pixel
    /// position of the detected object's center.
    ///
    /// The signed angular offset is positive when the object appears left of
    /// the image center and negative when it appears right of it.
    ///
    /// ```
    /// use stereo_range::StereoRig;
    /// let mut rig = StereoRig::new(55.0, 0.265);
    /// rig.update_pixel_to_angle_ratio(640);
    /// let obs = rig.observe(640, 200).unwrap();
    /// assert_eq!(obs.image_center_x, 320);
    /// assert_eq!(obs.angle_of_view_deg, (320.0 - 200.0) * 55.0 / 640.0);
    /// ```
    pub fn observe(
        &self,
        image_width: u32,
        object_center_x: u32,
    ) -> Result<ObjectObservation, RangeError> {
        let ratio = self.pixel_to_angle_ratio()?;
        let image_center_x = image_width / 2;
        let angle_of_view_deg =
            (f64::from(image_center_x) - f64::from(object_center_x)) * ratio;
        Ok(ObjectObservation {
            image_center_x,
            object_center_x,
            angle_of_view_deg,
        })
    }

    /// Builds the observation for one image from the corners of the detected
    /// bounding box, in pixel coordinates.
    ///
    /// Only the horizontal extent matters: the box is reduced to the floor of
    /// its horizontal midpoint and handed to [`observe`](Self::observe).
    /// Non-finite corner coordinates are rejected with
    /// [`RangeError::NumericFault`] rather than allowed to poison the angle.
    ///
    /// ```
    /// use stereo_range::StereoRig;
    /// use stereo_range::nalgebra::Point2;
    /// let mut rig = StereoRig::new(55.0, 0.265);
    /// rig.update_pixel_to_angle_ratio(640);
    /// let obs = rig
    ///     .observe_box(640, Point2::new(180.0, 95.0), Point2::new(221.0, 303.0))
    ///     .unwrap();
    /// assert_eq!(obs.object_center_x, 200);
    /// ```
    pub fn observe_box(
        &self,
        image_width: u32,
        min: Point2<f64>,
        max: Point2<f64>,
    ) -> Result<ObjectObservation, RangeError> {
        for &value in min.coords.iter().chain(max.coords.iter()) {
            if !value.is_finite() {
                return Err(RangeError::NumericFault { value });
            }
        }
        let object_center_x = ((min.x + max.x) / 2.0).floor() as u32;
        self.observe(image_width, object_center_x)
    }
}
