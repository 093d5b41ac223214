//! Size encoding for graph nodes.

/// World-space radius of a node whose size value is 1.
pub const NODE_REL_SIZE: f64 = 4.0;

/// Extra world-space slack around a node that still counts as a hit.
pub const HIT_PADDING: f64 = 3.0;

/// Radius for a node size value. Volume, not radius, is proportional to `val`.
pub fn node_radius(val: f64) -> f64 {
	val.max(0.0).cbrt() * NODE_REL_SIZE
}

pub fn hit_radius(val: f64) -> f64 {
	node_radius(val) + HIT_PADDING
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_unit_value_uses_relative_size() {
		assert_eq!(node_radius(1.0), NODE_REL_SIZE);
	}

	#[test]
	fn test_radius_scales_with_cube_root() {
		let eight = node_radius(8.0);
		assert!((eight - 2.0 * NODE_REL_SIZE).abs() < 1e-9);
	}

	#[test]
	fn test_negative_value_collapses_to_zero() {
		assert_eq!(node_radius(-5.0), 0.0);
		assert_eq!(hit_radius(-5.0), HIT_PADDING);
	}
}
