use chunk_realm_core::Point3i;

/// Key type shared by all levels of the spatial hash.
pub type HashKey = i32;

/// Hashes an integer coordinate into a table key.
///
/// The classic three-prime XOR hash. Multiplication wraps, matching the two's-complement
/// overflow the constants were chosen for. Pure and deterministic, but not injective: distinct
/// coordinates can alias, which the tables handle by keeping the first entry.
#[inline]
pub fn spatial_hash_key(p: Point3i) -> HashKey {
    (p.x().wrapping_mul(73856093)) ^ (p.y().wrapping_mul(19349663)) ^ (p.z().wrapping_mul(83492791))
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod tests {
    use super::*;
    use chunk_realm_core::Point3;

    #[test]
    fn unit_axis_keys_are_the_primes() {
        assert_eq!(spatial_hash_key(Point3([0, 0, 0])), 0);
        assert_eq!(spatial_hash_key(Point3([1, 0, 0])), 73856093);
        assert_eq!(spatial_hash_key(Point3([0, 1, 0])), 19349663);
        assert_eq!(spatial_hash_key(Point3([0, 0, 1])), 83492791);
    }

    #[test]
    fn negative_coordinates_negate_the_prime() {
        assert_eq!(spatial_hash_key(Point3([-1, 0, 0])), -73856093);
        assert_eq!(spatial_hash_key(Point3([0, -1, 0])), -19349663);
    }

    #[test]
    fn axes_combine_by_xor() {
        assert_eq!(
            spatial_hash_key(Point3([1, 1, 0])),
            73856093 ^ 19349663
        );
        assert_eq!(
            spatial_hash_key(Point3([2, 0, 3])),
            (2 * 73856093) ^ (3 * 83492791)
        );
    }

    #[test]
    fn large_coordinates_wrap_instead_of_panicking() {
        let key = spatial_hash_key(Point3([i32::MAX, i32::MIN, 12345678]));
        assert_eq!(key, spatial_hash_key(Point3([i32::MAX, i32::MIN, 12345678])));
    }
}
