use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use stereo_range::{ObjectObservation, Placement, RangeError, StereoRig};

/// Triangulation only consumes the angular offsets, so the pixel fields can
/// stay fixed for these cases.
fn observation(angle_of_view_deg: f64) -> ObjectObservation {
    ObjectObservation {
        image_center_x: 320,
        object_center_x: 320,
        angle_of_view_deg,
    }
}

#[test]
fn between_the_cameras_scenario() {
    let _ = pretty_env_logger::try_init();
    let rig = StereoRig::new(55.0, 0.265);

    let estimate = rig
        .calculate_distance(observation(-10.0), observation(8.0))
        .unwrap();

    assert_eq!(estimate.placement, Placement::BetweenCameras);
    assert_eq!(estimate.details(), "Object is between the cameras.");
    assert!(estimate.distance_m.is_finite());
    assert!(estimate.distance_m > 0.0);

    // Internal angles for (-10, +8) are 80 at the left camera, 82 at the
    // right camera and 18 at the object; the distance must match the median
    // formula evaluated on exactly those angles.
    let (l, r, o) = (
        80.0_f64.to_radians(),
        82.0_f64.to_radians(),
        18.0_f64.to_radians(),
    );
    let expected = (0.265 / 2.0)
        * (2.0 * ((l.sin().powi(2) + r.sin().powi(2)) / o.sin().powi(2)) - 1.0).sqrt();
    assert_eq!(estimate.distance_m, expected);
}

#[test]
fn same_sign_placements() {
    let rig = StereoRig::new(55.0, 0.265);

    // Left of the left camera: both offsets positive, right one larger.
    let estimate = rig
        .calculate_distance(observation(3.0), observation(10.0))
        .unwrap();
    assert_eq!(estimate.placement, Placement::LeftOfLeftCamera);
    assert_eq!(estimate.details(), "Object is to the left of the left camera.");
    assert!(estimate.distance_m > 0.0);

    // Right of the right camera: both offsets negative, left one larger.
    let estimate = rig
        .calculate_distance(observation(-10.0), observation(-3.0))
        .unwrap();
    assert_eq!(estimate.placement, Placement::RightOfRightCamera);
    assert_eq!(
        estimate.details(),
        "Object is to the right of the right camera."
    );
    assert!(estimate.distance_m > 0.0);
}

#[test]
fn zero_or_mismatched_signs_are_unclassified() {
    let rig = StereoRig::new(55.0, 0.265);

    for (left, right) in [(0.0, 8.0), (-10.0, 0.0), (0.0, 0.0), (10.0, -8.0)] {
        assert_eq!(
            rig.calculate_distance(observation(left), observation(right)),
            Err(RangeError::UnclassifiedGeometry {
                left_deg: left,
                right_deg: right,
            }),
            "angles ({left}, {right}) should not classify",
        );
    }

    // The diagnostic names both angle values.
    let err = rig
        .calculate_distance(observation(0.0), observation(8.0))
        .unwrap_err();
    assert_eq!(err.to_string(), "unknown case based on angles: left=0, right=8");
}

#[test]
fn nan_offsets_are_unclassified() {
    let rig = StereoRig::new(55.0, 0.265);
    let err = rig
        .calculate_distance(observation(f64::NAN), observation(8.0))
        .unwrap_err();
    assert!(matches!(err, RangeError::UnclassifiedGeometry { .. }));
}

#[test]
fn degenerate_triangles() {
    let rig = StereoRig::new(55.0, 0.265);

    // Both positive with the left offset dominating: internal angles are
    // 90 + 10 and 90 - 5, consuming more than the full triangle.
    assert_eq!(
        rig.calculate_distance(observation(10.0), observation(5.0)),
        Err(RangeError::DegenerateTriangle {
            object_angle_deg: -5.0,
        })
    );

    // Internal angles summing to exactly 180 leave nothing for the object.
    assert_eq!(
        rig.calculate_distance(observation(5.0), observation(5.0)),
        Err(RangeError::DegenerateTriangle {
            object_angle_deg: 0.0,
        })
    );
}

#[test]
fn repeated_calls_are_bit_identical() {
    let rig = StereoRig::new(55.0, 0.265);
    let left = observation(-10.0);
    let right = observation(8.0);

    let first = rig.calculate_distance(left, right).unwrap();
    let second = rig.calculate_distance(left, right).unwrap();
    assert_eq!(first.distance_m.to_bits(), second.distance_m.to_bits());
    assert_eq!(first.placement, second.placement);
}

#[test]
fn random_between_camera_pairs_triangulate() {
    let _ = pretty_env_logger::try_init();
    let mut rng = Pcg64::from_seed([5; 32]);
    let rig = StereoRig::new(55.0, 0.265);

    for _ in 0..1000 {
        let left = -rng.gen_range(0.5..40.0);
        let right = rng.gen_range(0.5..40.0);
        let estimate = rig
            .calculate_distance(observation(left), observation(right))
            .unwrap_or_else(|e| panic!("angles ({left}, {right}) failed: {e}"));
        assert_eq!(estimate.placement, Placement::BetweenCameras);
        assert!(
            estimate.distance_m.is_finite() && estimate.distance_m > 0.0,
            "angles ({left}, {right}) gave distance {}",
            estimate.distance_m,
        );
    }
}
