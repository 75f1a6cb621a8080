//! Random source for scramble characters and iteration jitter

/// Characters a scrambling glyph cycles through
pub const SEED_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Trait for a source of pseudo-random numbers
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;
}

/// Draw a random scramble character from [`SEED_CHARSET`]
pub fn random_seed_char<R: RandomSource + ?Sized>(rng: &mut R) -> char {
    let index = rng.next_u32() as usize % SEED_CHARSET.len();
    SEED_CHARSET[index] as char
}

/// Marsaglia xorshift32
///
/// Deterministic for a given seed, which keeps animations reproducible in
/// tests. Not suitable for anything security related.
#[derive(Debug, Clone)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Create a generator; a zero seed is remapped since zero is a fixed point
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9 } else { seed },
        }
    }
}

impl Default for XorShift32 {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RandomSource for XorShift32 {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}
