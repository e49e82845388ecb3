/// Number of style slots a tag can land in.
pub const PALETTE_SIZE: usize = 8;

/// Maps a tag to a palette slot in `0..PALETTE_SIZE`.
///
/// The slot depends only on the tag text, so a tag keeps its color across
/// calls and across processes. The hash walks UTF-16 code units and computes
/// `hash = unit + ((hash << 5) - hash)` with wrapping 32-bit signed arithmetic.
/// Different tags may share a slot.
pub fn assign_tag_color(tag: &str) -> usize {
    let hash = tag.encode_utf16().fold(0i32, |hash, unit| {
        i32::from(unit).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
    });
    hash.unsigned_abs() as usize % PALETTE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tag_uses_first_slot() {
        assert_eq!(assign_tag_color(""), 0);
    }

    #[test]
    fn known_tags_land_on_fixed_slots() {
        // "a" = 97
        assert_eq!(assign_tag_color("a"), 1);
        // "ab" = 98 + 31 * 97 = 3105
        assert_eq!(assign_tag_color("ab"), 1);
        // "vip" = 112 + 31 * (105 + 31 * 118) = 116_765
        assert_eq!(assign_tag_color("vip"), 5);
        assert_eq!(assign_tag_color("售后"), 0);
    }

    #[test]
    fn is_stable_across_calls() {
        let first = assign_tag_color("vip");
        for _ in 0..100 {
            assert_eq!(assign_tag_color("vip"), first);
        }
    }

    #[test]
    fn always_within_palette() {
        let long = "x".repeat(10_000);
        for tag in ["vip", "售后", "urgent", "🎉 party", long.as_str(), "Z"] {
            assert!(assign_tag_color(tag) < PALETTE_SIZE);
        }
    }

    #[test]
    fn wrapped_hashes_use_absolute_value() {
        // Both wrap below zero: -836_906_175 and -1_302_107_194
        assert_eq!(assign_tag_color("urgent"), 7);
        assert_eq!(assign_tag_color("customer-service"), 2);
        // Wraps through several sign changes and ends at 1_769_310_199
        assert_eq!(assign_tag_color("overflowing-tag-name-that-keeps-going"), 7);
    }

    #[test]
    fn hashes_utf16_units_not_bytes() {
        // U+1F389 is a surrogate pair: 0xD83C, 0xDF89
        let expected = {
            let hash = 0xDF89i32.wrapping_add(0xD83Ci32.wrapping_shl(5).wrapping_sub(0xD83C));
            hash.unsigned_abs() as usize % PALETTE_SIZE
        };
        assert_eq!(assign_tag_color("🎉"), expected);
    }
}
