/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use trigkern::{ReductionTier, cosf, rem_pio2f, sinf};

fn ulp_distance(a: f32, b: f32) -> u32 {
    fn ordered(v: f32) -> i64 {
        let t = v.to_bits() as i32 as i64;
        if t < 0 { i32::MIN as i64 - t } else { t }
    }
    (ordered(a) - ordered(b)).unsigned_abs() as u32
}

struct Report {
    max_ulp: u32,
    worst: f32,
    max_abs: f64,
}

fn measure(
    name: &str,
    samples: &[f32],
    func: impl Fn(f32) -> f32,
    reference: impl Fn(f64) -> f64,
) {
    let mut report = Report {
        max_ulp: 0,
        worst: 0.,
        max_abs: 0.,
    };
    for &x in samples {
        let expected = reference(x as f64);
        let got = func(x);
        let ulp = ulp_distance(got, expected as f32);
        if ulp > report.max_ulp {
            report.max_ulp = ulp;
            report.worst = x;
        }
        report.max_abs = report.max_abs.max((got as f64 - expected).abs());
    }
    println!(
        "{:<28} max ULP {:>4} (at {:e}), max abs err {:e}",
        name, report.max_ulp, report.worst, report.max_abs
    );
}

fn main() {
    let mut rng = StdRng::seed_from_u64(0x7219);

    let tiers: [(&str, f32, f32); 4] = [
        ("bypass", 1e-8, 1.2e-4),
        ("direct", 1.3e-4, std::f32::consts::FRAC_PI_4),
        ("medium", 0.8, 15_999_999.),
        ("large", 16_000_000., f32::MAX),
    ];

    for (tier, lo, hi) in tiers {
        let samples = (0..200_000)
            .map(|_| {
                let v = rng.random_range(lo.ln()..hi.ln()).exp();
                if rng.random::<bool>() { v } else { -v }
            })
            .filter(|v| v.is_finite())
            .collect::<Vec<f32>>();

        let tier_of_first = ReductionTier::of(samples[0].abs() as f64);
        println!("{tier} ({tier_of_first:?}), {} samples", samples.len());

        measure("trigkern::sinf", &samples, sinf, f64::sin);
        measure("libm::sinf", &samples, libm::sinf, f64::sin);
        measure("pxfm::f_sinf", &samples, pxfm::f_sinf, f64::sin);
        measure("trigkern::cosf", &samples, cosf, f64::cos);
        measure("libm::cosf", &samples, libm::cosf, f64::cos);
        measure("pxfm::f_cosf", &samples, pxfm::f_cosf, f64::cos);

        let regions = samples.iter().fold([0usize; 4], |mut acc, &x| {
            acc[rem_pio2f(x).region as usize] += 1;
            acc
        });
        println!("regions {regions:?}\n");
    }
}
