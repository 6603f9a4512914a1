use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand_core::{CryptoRng, RngCore};

use super::{sgnw, sgnw64};

#[derive(Clone, Copy, Debug)]
pub struct GF448([u32; 16]);

// Limb geometry: 16 limbs of 28 bits each, i.e. 448 bits, i.e. 56 bytes.
// Since 224 = 8*28, the 2^224 term of the modulus lands exactly on the
// boundary of limb 8.
const LIMB_BITS: u32 = 28;
const LIMB_MASK: u32 = (1u32 << LIMB_BITS) - 1;

// Registers of the inverse square root addition chain.
const ISR_X: usize = 0;
const ISR_A: usize = 1;
const ISR_B: usize = 2;

impl GF448 {

    // Internal element representation: sixteen limbs in base 2^28, limb
    // i having weight 2^(28*i). Representation is redundant: limbs may
    // exceed 28 bits, and the value may exceed p. After a weak reduction
    // (which all arithmetic operations apply on their output), limbs 0
    // to 14 are lower than 2^28, and limb 15 is lower than 2^28 + 2^8.
    // All functions accept inputs within these bounds.

    #[allow(dead_code)]
    const COMPILE_TIME_CHECKS: () = Self::compile_time_checks();
    const fn compile_time_checks() {
        static_assert!(16 * LIMB_BITS == 448);
        static_assert!(8 * Self::ENC_LEN == 448);
    }

    // Modulus p in base 2^28 (low-to-high order).
    pub const MODULUS: [u32; 16] = [
        LIMB_MASK, LIMB_MASK, LIMB_MASK, LIMB_MASK,
        LIMB_MASK, LIMB_MASK, LIMB_MASK, LIMB_MASK,
        LIMB_MASK - 1, LIMB_MASK, LIMB_MASK, LIMB_MASK,
        LIMB_MASK, LIMB_MASK, LIMB_MASK, LIMB_MASK,
    ];

    // Element encoding length: 56 bytes.
    pub const ENC_LEN: usize = 56;

    pub const ZERO: GF448 = GF448([ 0; 16 ]);
    pub const ONE: GF448 = GF448([
        1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ]);
    pub const MINUS_ONE: GF448 = GF448([
        LIMB_MASK - 1, LIMB_MASK, LIMB_MASK, LIMB_MASK,
        LIMB_MASK, LIMB_MASK, LIMB_MASK, LIMB_MASK,
        LIMB_MASK - 1, LIMB_MASK, LIMB_MASK, LIMB_MASK,
        LIMB_MASK, LIMB_MASK, LIMB_MASK, LIMB_MASK,
    ]);

    // 2^224 (in the field)
    const T224: GF448 = GF448([
        0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    ]);

    // Inverse square root addition chain. Starting with c = x^2, each
    // entry (d, s, n) computes r[d] <- r[s]*c, then c <- r[d]^(2^n).
    // The final result is r[ISR_A]*c = x^((p-3)/4).
    const ISR_CHAIN: [(usize, usize, u32); 11] = [
        (ISR_B, ISR_X,   1),
        (ISR_B, ISR_X,   3),
        (ISR_A, ISR_B,   3),
        (ISR_A, ISR_B,   9),
        (ISR_B, ISR_A,   1),
        (ISR_A, ISR_X,  18),
        (ISR_A, ISR_B,  37),
        (ISR_B, ISR_A,  37),
        (ISR_B, ISR_A, 111),
        (ISR_A, ISR_B,   1),
        (ISR_B, ISR_X, 223),
    ];

    // Create an element by converting the provided integer.
    #[inline(always)]
    pub fn from_u32(x: u32) -> Self {
        let mut r = Self::ZERO;
        r.0[0] = x & LIMB_MASK;
        r.0[1] = x >> LIMB_BITS;
        r
    }

    // Create an element by converting the provided integer.
    #[inline(always)]
    pub fn from_u64(x: u64) -> Self {
        let mut r = Self::ZERO;
        r.0[0] = (x as u32) & LIMB_MASK;
        r.0[1] = ((x >> LIMB_BITS) as u32) & LIMB_MASK;
        r.0[2] = (x >> (2 * LIMB_BITS)) as u32;
        r
    }

    // Create an element by converting the provided integer.
    // If the source value is negative, then it is implicitly reduced
    // modulo the field order.
    #[inline(always)]
    pub fn from_i32(x: i32) -> Self {
        // Convert the absolute value, then negate if x < 0.
        let m = sgnw(x as u32);
        let mut r = Self::from_u32(((x as u32) ^ m).wrapping_sub(m));
        r.set_cond(&-r, m);
        r
    }

    // Create an element by converting the provided integer.
    // If the source value is negative, then it is implicitly reduced
    // modulo the field order.
    #[inline(always)]
    pub fn from_i64(x: i64) -> Self {
        let m = sgnw64(x);
        let mw = (m as u64) | ((m as u64) << 32);
        let mut r = Self::from_u64(((x as u64) ^ mw).wrapping_sub(mw));
        r.set_cond(&-r, m);
        r
    }

    // Weakly reduce this value: the top limb overflow is folded back
    // (2^448 = 2^224 + 1 mod p), then carries are propagated once around
    // all limbs. This does not change the represented value modulo p.
    #[inline]
    pub fn set_reduced(&mut self) {
        self.0[8] += self.0[15] >> LIMB_BITS;
        for j in 0..16 {
            let k = (j + 15) & 15;
            self.0[j] += self.0[k] >> LIMB_BITS;
            self.0[k] &= LIMB_MASK;
        }
    }

    #[inline(always)]
    pub fn reduced(self) -> Self {
        let mut r = self;
        r.set_reduced();
        r
    }

    #[inline]
    fn set_add(&mut self, rhs: &Self) {
        for i in 0..16 {
            self.0[i] += rhs.0[i];
        }
        self.set_reduced();
    }

    #[inline]
    fn set_sub(&mut self, rhs: &Self) {
        // Adding 2*p keeps all limbs nonnegative, since rhs limbs are
        // below 2^28 + 2^8.
        for i in 0..16 {
            self.0[i] = (self.0[i] + (Self::MODULUS[i] << 1)) - rhs.0[i];
        }
        self.set_reduced();
    }

    // Negate this value (in place).
    #[inline]
    pub fn set_neg(&mut self) {
        let mut r = Self::ZERO;
        r.set_sub(self);
        *self = r;
    }

    // Conditionally copy the provided value ('a') into self:
    //  - If ctl == 0xFFFFFFFF, then the value of 'a' is copied into self.
    //  - If ctl == 0, then the value of self is unchanged.
    // ctl MUST be equal to 0 or 0xFFFFFFFF.
    #[inline]
    pub fn set_cond(&mut self, a: &Self, ctl: u32) {
        for i in 0..16 {
            self.0[i] ^= ctl & (self.0[i] ^ a.0[i]);
        }
    }

    // Return a value equal to either a0 (if ctl == 0) or a1 (if
    // ctl == 0xFFFFFFFF). Value ctl MUST be either 0 or 0xFFFFFFFF.
    #[inline(always)]
    pub fn select(a0: &Self, a1: &Self, ctl: u32) -> Self {
        let mut r = *a0;
        r.set_cond(a1, ctl);
        r
    }

    // Conditionally swap two elements: values a and b are exchanged if
    // ctl == 0xFFFFFFFF, or not exchanged if ctl == 0x00000000. Value
    // ctl MUST be either 0x00000000 or 0xFFFFFFFF.
    #[inline]
    pub fn cswap(a: &mut Self, b: &mut Self, ctl: u32) {
        for i in 0..16 {
            let t = ctl & (a.0[i] ^ b.0[i]);
            a.0[i] ^= t;
            b.0[i] ^= t;
        }
    }

    fn set_mul(&mut self, rhs: &Self) {
        // Schoolbook product, with the reduction interleaved. Row i adds
        // aa*b[i] into the accumulators at offset i (modulo 16). Between
        // rows, the limb of aa that is about to wrap past 2^448 is also
        // added at the position that lands on 2^224 in the next row;
        // together with the wrap itself this applies 2^448 = 2^224 + 1.
        //
        // aa limbs stay below 3*(2^28 + 2^8), so each accumulator is
        // below 16*3*(2^28 + 2^8)^2 < 2^62.
        let mut aa = self.0;
        let mut acc = [0u64; 16];
        for i in 0..16 {
            let bw = rhs.0[i] as u64;
            for j in 0..16 {
                acc[(i + j) & 15] += bw * (aa[j] as u64);
            }
            aa[(15 - i) ^ 8] += aa[15 - i];
        }

        // Carry propagation. acc[14] is flushed first so that the fold
        // of acc[15] into acc[8] and acc[0] leaves a small top carry.
        acc[15] += acc[14] >> LIMB_BITS;
        acc[14] &= LIMB_MASK as u64;
        acc[8] += acc[15] >> LIMB_BITS;
        for j in 0..16 {
            let k = (j + 15) & 15;
            acc[j] += acc[k] >> LIMB_BITS;
            acc[k] &= LIMB_MASK as u64;
        }
        for j in 0..16 {
            self.0[j] = acc[j] as u32;
        }
    }

    // Multiply this value by a small integer (in place). The integer is
    // used as the single limb of a field element, which is then
    // multiplied with the generic routine.
    #[inline]
    pub fn set_mul_small(&mut self, x: u32) {
        let mut w = Self::ZERO;
        w.0[0] = x;
        self.set_mul(&w);
    }

    #[inline(always)]
    pub fn mul_small(self, x: u32) -> Self {
        let mut r = self;
        r.set_mul_small(x);
        r
    }

    // Square this value (in place).
    #[inline(always)]
    pub fn set_square(&mut self) {
        let a = *self;
        self.set_mul(&a);
    }

    // Square this value.
    #[inline(always)]
    pub fn square(self) -> Self {
        let mut r = self;
        r.set_square();
        r
    }

    // Square this value n times (in place).
    #[inline(always)]
    fn set_xsquare(&mut self, n: u32) {
        for _ in 0..n {
            self.set_square();
        }
    }

    // Square this value n times.
    #[inline(always)]
    pub fn xsquare(self, n: u32) -> Self {
        let mut r = self;
        r.set_xsquare(n);
        r
    }

    // Ensure that the internal value is in the 0..p-1 range, with all
    // limbs lower than 2^28.
    pub fn set_canonical(&mut self) {
        // After weak reduction, the value is lower than 2*p, so at most
        // one subtraction of p is needed.
        self.set_reduced();

        // Subtract p, with signed carry propagation.
        let mut cc = 0i64;
        for i in 0..16 {
            cc += (self.0[i] as i64) - (Self::MODULUS[i] as i64);
            self.0[i] = (cc as u32) & LIMB_MASK;
            cc >>= LIMB_BITS;
        }

        // The final carry is -1 if the value was lower than p, in which
        // case p must be added back; otherwise, it is 0.
        let m = sgnw64(cc);
        let mut cc = 0u32;
        for i in 0..16 {
            let t = self.0[i] + (Self::MODULUS[i] & m) + cc;
            self.0[i] = t & LIMB_MASK;
            cc = t >> LIMB_BITS;
        }
    }

    #[inline(always)]
    pub fn canonical(self) -> Self {
        let mut r = self;
        r.set_canonical();
        r
    }

    // Set this value to x^((p-3)/4) where x is the current value. If x
    // is a non-zero square, this is an inverse square root of x (which
    // one is not specified). If x is not a square, the output is an
    // inverse square root of -x. Zero yields zero. The sequence of
    // operations is fixed.
    pub fn set_invsqrt(&mut self) {
        let mut r = [ *self, Self::ZERO, Self::ZERO ];
        let mut c = self.square();
        for &(d, s, n) in Self::ISR_CHAIN.iter() {
            r[d] = r[s] * c;
            c = r[d].xsquare(n);
        }
        *self = r[ISR_A] * c;
    }

    #[inline(always)]
    pub fn invsqrt(self) -> Self {
        let mut r = self;
        r.set_invsqrt();
        r
    }

    // Invert this value (in place). Zero is "inverted" into zero.
    pub fn set_invert(&mut self) {
        // 1/sqrt(x^2) = +/- 1/x; squaring again cancels the sign and
        // yields 1/x^2, and multiplying by x yields 1/x.
        let x = *self;
        let w = x.square().invsqrt();
        *self = x * w.square();
    }

    #[inline(always)]
    pub fn invert(self) -> Self {
        let mut r = self;
        r.set_invert();
        r
    }

    #[inline]
    fn set_div(&mut self, y: &Self) {
        self.set_mul(&y.invert());
    }

    // Perform a batch inversion of some elements. All elements of
    // the slice are replaced with their respective inverse (elements
    // of value zero are "inverted" into themselves).
    pub fn batch_invert(xx: &mut [Self]) {
        // Montgomery's trick: with a single inversion of the product of
        // all elements, each inverse is obtained with three extra
        // multiplications. Zeros are replaced with ones in the running
        // product, then left untouched in the output. Batches of 100
        // elements keep the temporary array on the stack.
        for chunk in xx.chunks_mut(100) {
            let n = chunk.len();
            let mut tt = [Self::ZERO; 100];
            let mut zz = [0u32; 100];
            let mut acc = Self::ONE;
            for j in 0..n {
                zz[j] = chunk[j].iszero();
                acc *= Self::select(&chunk[j], &Self::ONE, zz[j]);
                tt[j] = acc;
            }
            let mut k = acc.invert();
            for j in (0..n).rev() {
                let x = Self::select(&chunk[j], &Self::ONE, zz[j]);
                let y = if j > 0 { k * tt[j - 1] } else { k };
                chunk[j].set_cond(&y, !zz[j]);
                k *= x;
            }
        }
    }

    // Compute the Legendre symbol on this value. Return value is:
    //   0   if this value is zero
    //  +1   if this value is a non-zero quadratic residue
    //  -1   if this value is not a quadratic residue
    pub fn legendre(self) -> i32 {
        // x^((p-1)/2) = x*(x^((p-3)/4))^2 is 0, 1 or -1.
        let e = self * self.invsqrt().square();
        let nqr = e.equals(Self::MINUS_ONE);
        let r = 1u32.wrapping_sub(nqr & 2);
        (r & !self.iszero()) as i32
    }

    // Set this value to its square root. Returned value is 0xFFFFFFFF
    // if the operation succeeded (value was indeed a quadratic
    // residue), 0 otherwise (value was not a quadratic residue). In the
    // latter case, this value is set to the square root of -self.
    // In all cases, the returned root is the one whose least significant
    // bit is 0 (when normalized in 0..p-1).
    fn set_sqrt_ext(&mut self) -> u32 {
        // Since p = 3 mod 4, the candidate root is y = x^((p+1)/4),
        // i.e. x times the inverse square root of x. We have
        // y^2 = x*x^((p-1)/2), which is x if x is a square, -x otherwise.
        let x = *self;
        let mut y = x * x.invsqrt();

        // Normalize y and negate it if necessary to set the low bit to 0.
        y.set_canonical();
        y.set_cond(&-y, (y.0[0] & 1).wrapping_neg());

        let r = y.square().equals(x);
        *self = y;
        r
    }

    // Set this value to its square root. Returned value is 0xFFFFFFFF
    // if the operation succeeded (value was indeed a quadratic
    // residue), 0 otherwise (value was not a quadratic residue). This
    // differs from set_sqrt_ext() in that this function sets the value
    // to zero if there is no square root.
    fn set_sqrt(&mut self) -> u32 {
        let r = self.set_sqrt_ext();
        self.set_cond(&Self::ZERO, !r);
        r
    }

    // Compute the square root of this value. Returned values are (y, r):
    //  - If this value is indeed a quadratic residue, then y is the
    //    square root whose least significant bit (when normalized in 0..p-1)
    //    is 0, and r is equal to 0xFFFFFFFF.
    //  - If this value is not a quadratic residue, then y is zero, and
    //    r is equal to 0.
    #[inline(always)]
    pub fn sqrt(self) -> (Self, u32) {
        let mut x = self;
        let r = x.set_sqrt();
        (x, r)
    }

    // Compute the square root of this value. Returned values are (y, r):
    //  - If this value is indeed a quadratic residue, then y is a
    //    square root of this value, and r is 0xFFFFFFFF.
    //  - If this value is not a quadratic residue, then y is set to
    //    a square root of -x, and r is 0x00000000.
    // In all cases, the returned root is normalized: the least significant
    // bit of its integer representation (in the 0..p-1 range) is 0.
    #[inline(always)]
    pub fn sqrt_ext(self) -> (Self, u32) {
        let mut x = self;
        let r = x.set_sqrt_ext();
        (x, r)
    }

    // Equality check between two field elements (constant-time);
    // returned value is 0xFFFFFFFF on equality, 0 otherwise.
    #[inline(always)]
    pub fn equals(self, rhs: Self) -> u32 {
        (self - rhs).iszero()
    }

    // Compare this value with zero (constant-time); returned value
    // is 0xFFFFFFFF if this element is zero, 0 otherwise.
    #[inline]
    pub fn iszero(self) -> u32 {
        let r = self.canonical();
        let mut t = 0u32;
        for i in 0..16 {
            t |= r.0[i];
        }

        // t < 2^28, hence t - 1 has its top bit set if and only if t == 0.
        sgnw(t.wrapping_sub(1))
    }

    // Decode 56 bytes (unsigned little-endian) into an element. No range
    // check is performed: all 448-bit integers are accepted, and the
    // result is not reduced modulo p (but all limbs are below 2^28).
    #[inline]
    pub fn decode56(buf: &[u8; 56]) -> Self {
        // Each group of 7 bytes holds exactly two limbs.
        let mut r = Self::ZERO;
        for k in 0..8 {
            let mut w = [0u8; 8];
            w[..7].copy_from_slice(&buf[(7 * k)..(7 * k + 7)]);
            let v = u64::from_le_bytes(w);
            r.0[2 * k] = (v as u32) & LIMB_MASK;
            r.0[2 * k + 1] = (v >> LIMB_BITS) as u32;
        }
        r
    }

    // Encode this value over exactly 56 bytes. Encoding is always canonical
    // (little-endian encoding of the value in the 0..p-1 range).
    pub fn encode(self) -> [u8; 56] {
        let r = self.canonical();
        let mut d = [0u8; 56];
        for k in 0..8 {
            let v = (r.0[2 * k] as u64) | ((r.0[2 * k + 1] as u64) << LIMB_BITS);
            d[(7 * k)..(7 * k + 7)].copy_from_slice(&v.to_le_bytes()[..7]);
        }
        d
    }

    // Decode a field element from 56 bytes. On success, this sets this
    // element to the decoded value, and returns 0xFFFFFFFF. If the source
    // encoding is not canonical (i.e. the unsigned little-endian
    // interpretation of the 56 bytes is not lower than the field modulus p,
    // or if the source slice has not length exactly 56 bytes), then this
    // sets this element to zero, and returns 0.
    pub fn set_decode_ct(&mut self, buf: &[u8]) -> u32 {
        *self = Self::ZERO;
        if buf.len() != Self::ENC_LEN {
            return 0;
        }
        let mut tmp = [0u8; 56];
        tmp[..].copy_from_slice(buf);
        *self = Self::decode56(&tmp);

        // Subtract p; the final borrow is -1 if and only if the decoded
        // integer is lower than p.
        let mut cc = 0i64;
        for i in 0..16 {
            cc = (cc + (self.0[i] as i64) - (Self::MODULUS[i] as i64)) >> LIMB_BITS;
        }
        let m = sgnw64(cc);
        for i in 0..16 {
            self.0[i] &= m;
        }
        m
    }

    // Decode a field element from 56 bytes. On success, this returns the
    // new element, and a status 0xFFFFFFFF. If the source encoding is not
    // canonical (i.e. the unsigned little-endian interpretation of the 56
    // bytes is not lower than the field modulus p, or if the source slice
    // has not length exactly 56 bytes), then this returns the element
    // zero and the status 0x00000000.
    #[inline(always)]
    pub fn decode_ct(buf: &[u8]) -> (Self, u32) {
        let mut r = Self::ZERO;
        let cc = r.set_decode_ct(buf);
        (r, cc)
    }

    // Decode a field element from 56 bytes. On success, this returns the
    // new element. If the source encoding is not canonical (i.e. the
    // unsigned little-endian interpretation of the 56 bytes is not lower
    // than the field modulus p, or if the source slice has not length
    // exactly 56 bytes), then this returns `None`.
    #[inline(always)]
    pub fn decode(buf: &[u8]) -> Option<Self> {
        let (r, cc) = Self::decode_ct(buf);
        if cc != 0 {
            Some(r)
        } else {
            None
        }
    }

    // Decode a field element from some bytes. The bytes are interpreted
    // in unsigned little-endian convention, and the resulting integer is
    // reduced modulo p. This process never fails.
    pub fn set_decode_reduce(&mut self, buf: &[u8]) {
        *self = Self::ZERO;
        let mut n = buf.len();
        if n == 0 {
            return;
        }

        // Input is split into 28-byte chunks, from the end; the top chunk
        // may be shorter. Chunks are then processed in high to low order:
        // the current value is multiplied by 2^224 and the next chunk is
        // added.
        let mut n1 = n % 28;
        if n1 == 0 {
            n1 = 28;
        }
        n -= n1;
        let mut tmp = [0u8; 56];
        tmp[..n1].copy_from_slice(&buf[n..]);
        *self = Self::decode56(&tmp);
        while n > 0 {
            n -= 28;
            tmp[..28].copy_from_slice(&buf[n..(n + 28)]);
            self.set_mul(&Self::T224);
            self.set_add(&Self::decode56(&tmp));
        }
    }

    // Decode a field element from some bytes. The bytes are interpreted
    // in unsigned little-endian convention, and the resulting integer is
    // reduced modulo p. This process never fails.
    #[inline(always)]
    pub fn decode_reduce(buf: &[u8]) -> Self {
        let mut r = Self::ZERO;
        r.set_decode_reduce(buf);
        r
    }

    // Get an element with an (almost) uniform distribution, using the
    // provided random source. 112 bytes are obtained and reduced modulo
    // p, which makes the bias negligible (about 2^-448).
    pub fn random<T: CryptoRng + RngCore>(rng: &mut T) -> Self {
        let mut tmp = [0u8; 112];
        rng.fill_bytes(&mut tmp);
        Self::decode_reduce(&tmp)
    }
}

// ========================================================================
// Implementations of all the traits needed to use the simple operators
// (+, *, /...) on field element instances, with or without references.

impl Add<GF448> for GF448 {
    type Output = GF448;

    #[inline(always)]
    fn add(self, other: GF448) -> GF448 {
        let mut r = self;
        r.set_add(&other);
        r
    }
}

impl Add<&GF448> for GF448 {
    type Output = GF448;

    #[inline(always)]
    fn add(self, other: &GF448) -> GF448 {
        let mut r = self;
        r.set_add(other);
        r
    }
}

impl Add<GF448> for &GF448 {
    type Output = GF448;

    #[inline(always)]
    fn add(self, other: GF448) -> GF448 {
        let mut r = *self;
        r.set_add(&other);
        r
    }
}

impl Add<&GF448> for &GF448 {
    type Output = GF448;

    #[inline(always)]
    fn add(self, other: &GF448) -> GF448 {
        let mut r = *self;
        r.set_add(other);
        r
    }
}

impl AddAssign<GF448> for GF448 {
    #[inline(always)]
    fn add_assign(&mut self, other: GF448) {
        self.set_add(&other);
    }
}

impl AddAssign<&GF448> for GF448 {
    #[inline(always)]
    fn add_assign(&mut self, other: &GF448) {
        self.set_add(other);
    }
}

impl Div<GF448> for GF448 {
    type Output = GF448;

    #[inline(always)]
    fn div(self, other: GF448) -> GF448 {
        let mut r = self;
        r.set_div(&other);
        r
    }
}

impl Div<&GF448> for GF448 {
    type Output = GF448;

    #[inline(always)]
    fn div(self, other: &GF448) -> GF448 {
        let mut r = self;
        r.set_div(other);
        r
    }
}

impl Div<GF448> for &GF448 {
    type Output = GF448;

    #[inline(always)]
    fn div(self, other: GF448) -> GF448 {
        let mut r = *self;
        r.set_div(&other);
        r
    }
}

impl Div<&GF448> for &GF448 {
    type Output = GF448;

    #[inline(always)]
    fn div(self, other: &GF448) -> GF448 {
        let mut r = *self;
        r.set_div(other);
        r
    }
}

impl DivAssign<GF448> for GF448 {
    #[inline(always)]
    fn div_assign(&mut self, other: GF448) {
        self.set_div(&other);
    }
}

impl DivAssign<&GF448> for GF448 {
    #[inline(always)]
    fn div_assign(&mut self, other: &GF448) {
        self.set_div(other);
    }
}

impl Mul<GF448> for GF448 {
    type Output = GF448;

    #[inline(always)]
    fn mul(self, other: GF448) -> GF448 {
        let mut r = self;
        r.set_mul(&other);
        r
    }
}

impl Mul<&GF448> for GF448 {
    type Output = GF448;

    #[inline(always)]
    fn mul(self, other: &GF448) -> GF448 {
        let mut r = self;
        r.set_mul(other);
        r
    }
}

impl Mul<GF448> for &GF448 {
    type Output = GF448;

    #[inline(always)]
    fn mul(self, other: GF448) -> GF448 {
        let mut r = *self;
        r.set_mul(&other);
        r
    }
}

impl Mul<&GF448> for &GF448 {
    type Output = GF448;

    #[inline(always)]
    fn mul(self, other: &GF448) -> GF448 {
        let mut r = *self;
        r.set_mul(other);
        r
    }
}

impl MulAssign<GF448> for GF448 {
    #[inline(always)]
    fn mul_assign(&mut self, other: GF448) {
        self.set_mul(&other);
    }
}

impl MulAssign<&GF448> for GF448 {
    #[inline(always)]
    fn mul_assign(&mut self, other: &GF448) {
        self.set_mul(other);
    }
}

impl Neg for GF448 {
    type Output = GF448;

    #[inline(always)]
    fn neg(self) -> GF448 {
        let mut r = self;
        r.set_neg();
        r
    }
}

impl Neg for &GF448 {
    type Output = GF448;

    #[inline(always)]
    fn neg(self) -> GF448 {
        let mut r = *self;
        r.set_neg();
        r
    }
}

impl Sub<GF448> for GF448 {
    type Output = GF448;

    #[inline(always)]
    fn sub(self, other: GF448) -> GF448 {
        let mut r = self;
        r.set_sub(&other);
        r
    }
}

impl Sub<&GF448> for GF448 {
    type Output = GF448;

    #[inline(always)]
    fn sub(self, other: &GF448) -> GF448 {
        let mut r = self;
        r.set_sub(other);
        r
    }
}

impl Sub<GF448> for &GF448 {
    type Output = GF448;

    #[inline(always)]
    fn sub(self, other: GF448) -> GF448 {
        let mut r = *self;
        r.set_sub(&other);
        r
    }
}

impl Sub<&GF448> for &GF448 {
    type Output = GF448;

    #[inline(always)]
    fn sub(self, other: &GF448) -> GF448 {
        let mut r = *self;
        r.set_sub(other);
        r
    }
}

impl SubAssign<GF448> for GF448 {
    #[inline(always)]
    fn sub_assign(&mut self, other: GF448) {
        self.set_sub(&other);
    }
}

impl SubAssign<&GF448> for GF448 {
    #[inline(always)]
    fn sub_assign(&mut self, other: &GF448) {
        self.set_sub(other);
    }
}

// ========================================================================
