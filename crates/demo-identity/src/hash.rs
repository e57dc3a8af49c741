//! 32-bit FNV-1a hashing of seed material.

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Hashes `input` to a 32-bit value with the FNV-1a recurrence.
///
/// Each byte is folded in with an exclusive-or followed by a wrapping
/// multiplication, so keys that differ in a single trailing character land
/// far apart.
///
/// # Example
///
/// ```
/// use demo_identity::fnv1a32;
///
/// assert_eq!(fnv1a32(""), 0x811c_9dc5);
/// assert_eq!(fnv1a32("847392|Nigeria:Lagos:0"), 0x403a_64d5);
/// ```
#[must_use]
#[expect(
    clippy::indexing_slicing,
    reason = "const fn cannot use iterators; the loop condition bounds the index"
)]
pub const fn fnv1a32(input: &str) -> u32 {
    let bytes = input.as_bytes();
    let mut hash = FNV_OFFSET_BASIS;
    let mut index = 0;
    while index < bytes.len() {
        hash ^= bytes[index] as u32;
        hash = hash.wrapping_mul(FNV_PRIME);
        index += 1;
    }
    hash
}
