super::impl_basic!(u32);

/// Returns `(lo, hi) = x * y`.
const fn widening_mul(x: u32, y: u32) -> (u32, u32) {
    // The result is contained in the larger type.
    let wide = (x as u64) * (y as u64);
    (wide as u32, (wide >> 32) as u32)
}
