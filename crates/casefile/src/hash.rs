//! Bucket hashing for the association table

/// Map `key` to a bucket in `[0, bucket_count)`.
///
/// Sums the unsigned value of every byte in a wrapping 32-bit accumulator,
/// then reduces modulo `bucket_count`. Not seeded and not collision
/// resistant: equal keys always land in the same bucket.
///
/// `bucket_count` must be non-zero.
///
/// # Example
///
/// ```
/// use casefile::bucket_index;
///
/// // 'a' (97) + 'b' (98) = 195
/// assert_eq!(bucket_index("ab", 10), 5);
/// assert_eq!(bucket_index("", 10), 0);
/// ```
pub fn bucket_index(key: &str, bucket_count: usize) -> usize {
    let sum = key
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_add(u32::from(b)));
    sum as usize % bucket_count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_of_bytes() {
        // k=107 n=110 i=105 f=102 e=101 -> 525
        assert_eq!(bucket_index("knife", 10), 5);
        // r=114 o=111 p=112 e=101 -> 438
        assert_eq!(bucket_index("rope", 10), 8);
        assert_eq!(bucket_index("knife", 1000), 525);
    }

    #[test]
    fn test_anagrams_collide() {
        assert_eq!(bucket_index("stop", 7), bucket_index("pots", 7));
    }

    #[test]
    fn test_high_bytes_are_unsigned() {
        // "é" is 0xC3 0xA9 -> 195 + 169 = 364
        assert_eq!(bucket_index("é", 1000), 364);
    }

    #[test]
    fn test_single_bucket() {
        assert_eq!(bucket_index("anything", 1), 0);
    }

    #[test]
    fn test_stable_across_calls() {
        let first = bucket_index("candlestick", 10);
        for _ in 0..8 {
            assert_eq!(bucket_index("candlestick", 10), first);
        }
    }
}
