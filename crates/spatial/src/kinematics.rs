use pose::{Joint, Keypoints3D};

/// Angle at `vertex` between the segments to `a` and `b`, in degrees.
pub fn joint_angle(points: &Keypoints3D, a: Joint, vertex: Joint, b: Joint) -> Option<f64> {
    let center = points.get(vertex)?;
    let to_a = points.get(a)? - center;
    let to_b = points.get(b)? - center;
    to_a.angle_to(to_b).map(f64::to_degrees)
}

/// Finite-difference velocity per joint present in both frames, in units per second.
pub fn velocity(previous: &Keypoints3D, current: &Keypoints3D, fps: f64) -> Keypoints3D {
    current
        .iter()
        .filter_map(|(joint, point)| Some((joint, (point - previous.get(joint)?) * fps)))
        .collect()
}

/// Acceleration per joint from two consecutive velocity frames, as returned
/// by `velocity`. Differentiating velocity is the same finite difference as
/// differentiating position.
pub fn acceleration(v0: &Keypoints3D, v1: &Keypoints3D, fps: f64) -> Keypoints3D {
    velocity(v0, v1, fps)
}

/// Magnitude of the fastest joint, if any.
pub fn peak_speed(velocity: &Keypoints3D) -> Option<(Joint, f64)> {
    velocity
        .iter()
        .map(|(joint, v)| (joint, v.length()))
        .fold(None, |best, (joint, speed)| match best {
            Some((_, best_speed)) if best_speed >= speed => best,
            _ => Some((joint, speed)),
        })
}
