mod util;
use util::core_cycles;

use gf448::field::GF448;

// Make a non-trivial starting element from the cycle counter, so that
// the compiler cannot precompute anything.
fn start_value() -> GF448 {
    let z = core_cycles();
    let mut buf = [0u8; 56];
    for i in 0..7 {
        let w = z.wrapping_mul((2 * i + 3) as u64);
        buf[(8 * i)..(8 * i + 8)].copy_from_slice(&w.to_le_bytes());
    }
    GF448::decode56(&buf)
}

fn bench_gf448_add() {
    let mut x = start_value();
    let mut y = x + GF448::ONE;
    let mut tt = [0; 10];
    for i in 0..30 {
        let begin = core_cycles();
        for _ in 0..1000 {
            x += y;
            y += x;
            x += y;
            y += x;
            x += y;
            y += x;
        }
        let end = core_cycles();
        if i >= 20 {
            tt[i - 20] = end.wrapping_sub(begin);
        }
    }
    tt.sort();
    println!("GF448 add:            {:11.2}  ({})", (tt[4] as f64) / 6000.0, x.encode()[0]);
}

fn bench_gf448_sub() {
    let mut x = start_value();
    let mut y = x + GF448::ONE;
    let mut tt = [0; 10];
    for i in 0..30 {
        let begin = core_cycles();
        for _ in 0..1000 {
            x -= y;
            y -= x;
            x -= y;
            y -= x;
            x -= y;
            y -= x;
        }
        let end = core_cycles();
        if i >= 20 {
            tt[i - 20] = end.wrapping_sub(begin);
        }
    }
    tt.sort();
    println!("GF448 sub:            {:11.2}  ({})", (tt[4] as f64) / 6000.0, x.encode()[0]);
}

fn bench_gf448_mul() {
    let mut x = start_value();
    let mut y = x + GF448::ONE;
    let mut tt = [0; 10];
    for i in 0..30 {
        let begin = core_cycles();
        for _ in 0..1000 {
            x *= y;
            y *= x;
            x *= y;
            y *= x;
            x *= y;
            y *= x;
        }
        let end = core_cycles();
        if i >= 20 {
            tt[i - 20] = end.wrapping_sub(begin);
        }
    }
    tt.sort();
    println!("GF448 mul:            {:11.2}  ({})", (tt[4] as f64) / 6000.0, x.encode()[0]);
}

fn bench_gf448_mul_small() {
    let mut x = start_value();
    let mut tt = [0; 10];
    for i in 0..30 {
        let begin = core_cycles();
        for _ in 0..6000 {
            x = x.mul_small(39081);
        }
        let end = core_cycles();
        if i >= 20 {
            tt[i - 20] = end.wrapping_sub(begin);
        }
    }
    tt.sort();
    println!("GF448 mul_small:      {:11.2}  ({})", (tt[4] as f64) / 6000.0, x.encode()[0]);
}

fn bench_gf448_square() {
    let mut x = start_value();
    let mut tt = [0; 10];
    for i in 0..30 {
        let begin = core_cycles();
        x = x.xsquare(6000);
        let end = core_cycles();
        if i >= 20 {
            tt[i - 20] = end.wrapping_sub(begin);
        }
    }
    tt.sort();
    println!("GF448 square:         {:11.2}  ({})", (tt[4] as f64) / 6000.0, x.encode()[0]);
}

fn bench_gf448_invert() {
    let mut x = start_value();
    let mut tt = [0; 10];
    for i in 0..30 {
        let begin = core_cycles();
        for _ in 0..100 {
            x = x.invert() + GF448::ONE;
        }
        let end = core_cycles();
        if i >= 20 {
            tt[i - 20] = end.wrapping_sub(begin);
        }
    }
    tt.sort();
    println!("GF448 invert:         {:11.2}  ({})", (tt[4] as f64) / 100.0, x.encode()[0]);
}

fn bench_gf448_invsqrt() {
    let mut x = start_value();
    let mut tt = [0; 10];
    for i in 0..30 {
        let begin = core_cycles();
        for _ in 0..100 {
            x = x.invsqrt() + GF448::ONE;
        }
        let end = core_cycles();
        if i >= 20 {
            tt[i - 20] = end.wrapping_sub(begin);
        }
    }
    tt.sort();
    println!("GF448 invsqrt:        {:11.2}  ({})", (tt[4] as f64) / 100.0, x.encode()[0]);
}

fn bench_gf448_sqrt() {
    let mut x = start_value();
    let mut tt = [0; 10];
    for i in 0..30 {
        let begin = core_cycles();
        for _ in 0..100 {
            let (x2, _) = x.sqrt();
            x += x2 + GF448::ONE;
        }
        let end = core_cycles();
        if i >= 20 {
            tt[i - 20] = end.wrapping_sub(begin);
        }
    }
    tt.sort();
    println!("GF448 sqrt:           {:11.2}  ({})", (tt[4] as f64) / 100.0, x.encode()[0]);
}

fn bench_gf448_encode() {
    let mut x = start_value();
    let mut tt = [0; 10];
    for i in 0..30 {
        let begin = core_cycles();
        for _ in 0..6000 {
            let buf = x.encode();
            x = GF448::decode56(&buf) + GF448::ONE;
        }
        let end = core_cycles();
        if i >= 20 {
            tt[i - 20] = end.wrapping_sub(begin);
        }
    }
    tt.sort();
    println!("GF448 encode+decode:  {:11.2}  ({})", (tt[4] as f64) / 6000.0, x.encode()[0]);
}

fn main() {
    bench_gf448_add();
    bench_gf448_sub();
    bench_gf448_mul();
    bench_gf448_mul_small();
    bench_gf448_square();
    bench_gf448_invert();
    bench_gf448_invsqrt();
    bench_gf448_sqrt();
    bench_gf448_encode();
}
