#![no_main]

use libfuzzer_sys::fuzz_target;
use trigkern::{cosf, f_cosf, f_sincosf, f_sinf, rem_pio2f, sincosf, sinf};

fuzz_target!(|data: u32| {
    let x = f32::from_bits(data);

    let s = sinf(x);
    let c = cosf(x);
    _ = f_sinf(x);
    _ = f_cosf(x);
    _ = f_sincosf(x);
    _ = rem_pio2f(x);

    assert_eq!(sincosf(x).0.to_bits(), s.to_bits());
    assert_eq!(sincosf(x).1.to_bits(), c.to_bits());

    if x.is_finite() {
        assert!(s.abs() <= 1.0);
        assert!(c.abs() <= 1.0);
        assert_eq!(sinf(-x).to_bits(), (-s).to_bits());
        assert_eq!(cosf(-x).to_bits(), c.to_bits());
        let norm = s as f64 * s as f64 + c as f64 * c as f64;
        assert!((norm - 1.0).abs() < 1e-6);
    } else {
        assert_eq!(s.to_bits(), x.to_bits());
        assert_eq!(c.to_bits(), x.to_bits());
    }
});
