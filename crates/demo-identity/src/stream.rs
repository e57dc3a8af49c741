//! Xorshift32 stream generator.
//!
//! The generator is a plain value owned by whoever drives it. Synthesis of a
//! single identity constructs one, threads it through every draw by `&mut`,
//! and drops it, so no stream is ever shared between two syntheses.

/// Deterministic 32-bit xorshift stream.
///
/// Two generators built from the same seed and driven with the same call
/// sequence yield identical outputs.
///
/// # Example
///
/// ```
/// use demo_identity::XorShift32;
///
/// let mut a = XorShift32::new(0x403a_64d5);
/// let mut b = XorShift32::new(0x403a_64d5);
///
/// assert_eq!(a.next_u32(), 2_562_232_869);
/// assert_eq!(b.next_u32(), 2_562_232_869);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Seed substituted for zero, which would otherwise yield an all-zero
    /// stream.
    pub const ZERO_SEED_REPLACEMENT: u32 = 0x1234_5678;

    /// Creates a generator from `seed`.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        let state = if seed == 0 {
            Self::ZERO_SEED_REPLACEMENT
        } else {
            seed
        };
        Self { state }
    }

    /// Advances the state and returns it.
    pub const fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Returns the next draw scaled into `[0, 1]`.
    #[expect(
        clippy::float_arithmetic,
        reason = "the stream exposes a unit-interval float by contract"
    )]
    pub fn next_float(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX)
    }

    /// Picks an element at `floor(next_float() * len)`.
    ///
    /// A draw of exactly `1.0` is clamped onto the last element. An empty
    /// slice yields `None` without advancing the stream.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss,
        reason = "index selection scales a unit float by a small slice length"
    )]
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        let last = items.len().checked_sub(1)?;
        let scaled = (self.next_float() * items.len() as f64).floor() as usize;
        items.get(scaled.min(last))
    }

    /// Returns `min + (next_u32() mod (max_inclusive - min + 1))`.
    ///
    /// An inverted range collapses to `min` without advancing the stream.
    #[expect(
        clippy::integer_division_remainder_used,
        reason = "the modulo reduction is the documented range mapping"
    )]
    pub fn int_in_range(&mut self, min: u32, max_inclusive: u32) -> u32 {
        if max_inclusive < min {
            return min;
        }
        let span = u64::from(max_inclusive - min) + 1;
        let offset = u64::from(self.next_u32()) % span;
        // offset < span <= u32::MAX + 1, and min + offset <= max_inclusive
        u32::try_from(u64::from(min) + offset).unwrap_or(max_inclusive)
    }
}
