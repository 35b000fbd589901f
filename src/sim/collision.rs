//! Collision detection and response for straight segments and circles
//!
//! Flippers are thick line segments, bumpers are circles. Both tests return
//! the contact normal pointing from the shape toward the ball center, which
//! is what the reflection and push-out code needs.

use glam::Vec2;

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Closest point on the shape's core (segment or circle center)
    pub point: Vec2,
    /// Unit normal from `point` toward the ball center
    pub normal: Vec2,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
        }
    }
}

/// Closest point to `p` on the segment `a`-`b`
///
/// The projection parameter is clamped to the segment, so points beyond either
/// end map to that endpoint.
pub fn closest_point_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let line_vec = b - a;
    let len_sq = line_vec.length_squared();
    if len_sq == 0.0 {
        return a;
    }
    let t = ((p - a).dot(line_vec) / len_sq).clamp(0.0, 1.0);
    a + line_vec * t
}

/// Minimum distance from `p` to the segment `a`-`b`
#[inline]
pub fn point_segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    (p - closest_point_on_segment(p, a, b)).length()
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Check a ball against a segment thickened by `half_width` on each side
///
/// A ball centered exactly on the segment has no usable normal and is
/// reported as a miss, as is a zero-length segment.
pub fn ball_segment_collision(
    ball_pos: Vec2,
    ball_radius: f32,
    a: Vec2,
    b: Vec2,
    half_width: f32,
) -> CollisionResult {
    if (b - a).length_squared() == 0.0 {
        return CollisionResult::miss();
    }

    let closest = closest_point_on_segment(ball_pos, a, b);
    let offset = ball_pos - closest;
    let dist = offset.length();
    let reach = ball_radius + half_width;

    if dist > reach || dist == 0.0 {
        return CollisionResult::miss();
    }

    CollisionResult {
        hit: true,
        point: closest,
        normal: offset / dist,
    }
}

/// Check a ball against a solid circle
///
/// Coincident centers are a miss rather than a division by zero.
pub fn ball_circle_collision(
    ball_pos: Vec2,
    ball_radius: f32,
    center: Vec2,
    radius: f32,
) -> CollisionResult {
    let offset = ball_pos - center;
    let dist = offset.length();
    let reach = ball_radius + radius;

    if dist > reach || dist == 0.0 {
        return CollisionResult::miss();
    }

    CollisionResult {
        hit: true,
        point: center,
        normal: offset / dist,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closest_point_clamps_to_endpoints() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);

        assert_eq!(closest_point_on_segment(Vec2::new(5.0, 3.0), a, b), Vec2::new(5.0, 0.0));
        assert_eq!(closest_point_on_segment(Vec2::new(-4.0, 3.0), a, b), a);
        assert_eq!(closest_point_on_segment(Vec2::new(14.0, -3.0), a, b), b);
    }

    #[test]
    fn test_point_segment_distance() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);

        assert!((point_segment_distance(Vec2::new(5.0, 3.0), a, b) - 3.0).abs() < 1e-6);
        // Past the end: distance to the endpoint
        assert!((point_segment_distance(Vec2::new(13.0, 4.0), a, b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_reflect_velocity() {
        // Ball moving right, hits vertical wall (normal pointing left)
        let velocity = Vec2::new(100.0, 0.0);
        let normal = Vec2::new(-1.0, 0.0);

        let reflected = reflect_velocity(velocity, normal);
        assert!((reflected.x - (-100.0)).abs() < 0.001);
        assert!(reflected.y.abs() < 0.001);
    }

    #[test]
    fn test_reflect_preserves_tangential_component() {
        let reflected = reflect_velocity(Vec2::new(3.0, 4.0), Vec2::new(0.0, -1.0));
        assert!((reflected.x - 3.0).abs() < 1e-6);
        assert!((reflected.y + 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_ball_segment_collision_hit() {
        let a = Vec2::new(0.0, 100.0);
        let b = Vec2::new(80.0, 100.0);

        // Ball above the segment, within radius + half width
        let result = ball_segment_collision(Vec2::new(40.0, 90.0), 8.0, a, b, 5.0);
        assert!(result.hit);
        assert_eq!(result.point, Vec2::new(40.0, 100.0));
        assert!((result.normal - Vec2::new(0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_ball_segment_collision_miss() {
        let a = Vec2::new(0.0, 100.0);
        let b = Vec2::new(80.0, 100.0);

        let result = ball_segment_collision(Vec2::new(40.0, 80.0), 8.0, a, b, 5.0);
        assert!(!result.hit);
    }

    #[test]
    fn test_ball_segment_collision_degenerate() {
        let a = Vec2::new(0.0, 100.0);
        let b = Vec2::new(80.0, 100.0);

        // Ball center on the segment itself
        assert!(!ball_segment_collision(Vec2::new(40.0, 100.0), 8.0, a, b, 5.0).hit);
        // Zero-length segment
        assert!(!ball_segment_collision(Vec2::new(2.0, 100.0), 8.0, a, a, 5.0).hit);
    }

    #[test]
    fn test_ball_circle_collision() {
        let center = Vec2::new(200.0, 300.0);

        let result = ball_circle_collision(Vec2::new(235.0, 300.0), 8.0, center, 30.0);
        assert!(result.hit);
        assert!((result.normal - Vec2::X).length() < 1e-6);
        assert_eq!(result.point, center);

        assert!(!ball_circle_collision(Vec2::new(240.0, 300.0), 8.0, center, 30.0).hit);
    }

    #[test]
    fn test_ball_circle_collision_coincident_centers() {
        let center = Vec2::new(200.0, 300.0);
        assert!(!ball_circle_collision(center, 8.0, center, 30.0).hit);
    }
}
