pub mod gf448;

// Return 0xFFFFFFFF if x >= 0x80000000, 0 otherwise (i.e. take the sign
// bit of the signed interpretation, and expand it to 32 bits).
#[inline(always)]
pub(crate) const fn sgnw(x: u32) -> u32 {
    ((x as i32) >> 31) as u32
}

// Return 0xFFFFFFFF if x < 0, 0 otherwise.
#[inline(always)]
pub(crate) const fn sgnw64(x: i64) -> u32 {
    (x >> 63) as u32
}
