use glam::Vec3;

/// Distance along the ray to the horizontal plane `y = plane_height`.
///
/// Returns `None` when the ray runs parallel to the plane or the
/// intersection lies behind the origin.
pub fn ray_plane_intersection(origin: Vec3, dir: Vec3, plane_height: f32) -> Option<f32> {
    if dir.y.abs() < 1e-6 {
        return None;
    }
    let t = (plane_height - origin.y) / dir.y;
    if t < 0.0 {
        return None;
    }
    Some(t)
}

/// World-space point where the ray crosses the ground plane.
pub fn ray_ground_point(origin: Vec3, dir: Vec3, plane_height: f32) -> Option<Vec3> {
    let t = ray_plane_intersection(origin, dir, plane_height)?;
    Some(origin + dir * t)
}
