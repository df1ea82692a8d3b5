use {
    crate::{error::SpatialError, height::Height},
    pose::{Joint, Keypoints3D},
};

const ANCHORS: [Joint; 4] = [Joint::LeftEye, Joint::RightEye, Joint::LeftHeel, Joint::RightHeel];

/// Factor that makes the eye-center to heel-center distance equal `height`.
pub fn try_calibrate(points: &Keypoints3D, height: &Height) -> Result<f64, SpatialError> {
    let missing: Vec<Joint> = ANCHORS
        .into_iter()
        .filter(|joint| !points.contains(*joint))
        .collect();
    let (Some(eyes), Some(heels)) = (points.eye_center(), points.heel_center()) else {
        return Err(SpatialError::MissingAnchorKeypoints(missing));
    };

    let real_height = height.to_meters();
    if !(real_height > 0.0 && real_height.is_finite()) {
        return Err(SpatialError::InvalidHeight(height.value));
    }

    let virtual_height = eyes.distance_to(heels);
    if !(virtual_height > 0.0 && virtual_height.is_finite()) {
        return Err(SpatialError::DegenerateGeometry(format!(
            "eye-to-heel distance is {virtual_height}"
        )));
    }
    Ok(real_height / virtual_height)
}

/// `try_calibrate`, falling back to the identity scale when the skeleton
/// cannot be calibrated.
pub fn calibrate(points: &Keypoints3D, height: &Height) -> f64 {
    try_calibrate(points, height).unwrap_or_else(|error| {
        base::log_warn!("calibration skipped: {}", error);
        1.0
    })
}

/// Uniform scale of every coordinate.
pub fn apply_scale(points: &Keypoints3D, factor: f64) -> Keypoints3D {
    points.map_points(|_, p| p * factor)
}
