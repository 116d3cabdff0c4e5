super::impl_basic!(u64);

/// Returns `(lo, hi) = x * y`.
const fn widening_mul(x: u64, y: u64) -> (u64, u64) {
    // The result is contained in the larger type.
    let wide = (x as u128) * (y as u128);
    (wide as u64, (wide >> 64) as u64)
}
