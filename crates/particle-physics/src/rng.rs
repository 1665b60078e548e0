//! Index-seeded pseudo-random restitution scale
//!
//! No generator state survives between calls: every draw is a pure function
//! of `(index, seed)`, so particles can be updated in any order on any thread
//! and still reproduce the same values.

/// Thomas Wang's 32-bit integer hash, used to spread consecutive indices
/// before they seed the xorshift
#[inline]
pub fn wang_hash(mut seed: u32) -> u32 {
    seed = (seed ^ 61) ^ (seed >> 16);
    seed = seed.wrapping_mul(9);
    seed ^= seed >> 4;
    seed = seed.wrapping_mul(0x27d4_eb2d);
    seed ^ (seed >> 15)
}

/// One step of Marsaglia's 32-bit xorshift (13, 17, 5)
#[inline]
pub fn xorshift32(mut state: u32) -> u32 {
    state ^= state << 13;
    state ^= state >> 17;
    state ^= state << 5;
    state
}

/// Restitution scale in `[0, 1)` for the particle at `index`.
///
/// With `seed == 0` the value depends on the index only, so a given particle
/// gets the same scale on every frame.
pub fn restitution_scale(index: u32, seed: u32) -> f32 {
    let mut state = wang_hash(index ^ seed.wrapping_mul(0x9e37_79b9));
    // xorshift has a fixed point at zero
    if state == 0 {
        state = 0x6d2b_79f5;
    }
    let bits = xorshift32(state) >> 8;
    bits as f32 * (1.0 / 16_777_216.0)
}
