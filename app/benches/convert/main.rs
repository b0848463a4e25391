/*
 * Copyright (c) Radzivon Bartoshyk, 10/2026. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use st20_convert::{
    frame_size, rfc4175_422be10_to_422le10, rfc4175_422be10_to_v210,
    rfc4175_422be10_to_yuv422p10le, rfc4175_444be10_to_yuv444p10le, v210_to_rfc4175_422be10,
    yuv422p10le_to_rfc4175_422be10, CapabilityLevel, PixelFormat,
};

const WIDTH: u32 = 1920;
const HEIGHT: u32 = 1080;
const LEVELS: [CapabilityLevel; 4] = [
    CapabilityLevel::None,
    CapabilityLevel::Avx2,
    CapabilityLevel::Avx512,
    CapabilityLevel::Avx512Vbmi2,
];

fn random_bytes(len: usize) -> Vec<u8> {
    let mut rng = rand::rng();
    (0..len).map(|_| rng.random()).collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let pixels = (WIDTH * HEIGHT) as usize;
    let pg_be = random_bytes(frame_size(
        PixelFormat::Yuv422Rfc4175Pg2Be10,
        WIDTH,
        HEIGHT,
    ));
    let pg_444 = random_bytes(frame_size(
        PixelFormat::Yuv444Rfc4175Pg4Be10,
        WIDTH,
        HEIGHT,
    ));
    let mut y_plane = vec![0u16; pixels];
    let mut cb_plane = vec![0u16; pixels / 2];
    let mut cr_plane = vec![0u16; pixels / 2];
    let mut planes_444 = vec![vec![0u16; pixels]; 3];
    let mut pg_le = vec![0u8; pg_be.len()];
    let mut pg_back = vec![0u8; pg_be.len()];
    let mut v210 = vec![0u8; frame_size(PixelFormat::V210, WIDTH, HEIGHT)];

    rfc4175_422be10_to_v210(&pg_be, &mut v210, WIDTH, HEIGHT, CapabilityLevel::Auto).unwrap();

    for level in LEVELS {
        c.bench_function(&format!("RFC4175 BE10 -> YUV422P10LE {level}"), |b| {
            b.iter(|| {
                rfc4175_422be10_to_yuv422p10le(
                    &pg_be,
                    &mut y_plane,
                    &mut cb_plane,
                    &mut cr_plane,
                    WIDTH,
                    HEIGHT,
                    level,
                )
                .unwrap();
            })
        });

        c.bench_function(&format!("YUV422P10LE -> RFC4175 BE10 {level}"), |b| {
            b.iter(|| {
                yuv422p10le_to_rfc4175_422be10(
                    &y_plane,
                    &cb_plane,
                    &cr_plane,
                    &mut pg_back,
                    WIDTH,
                    HEIGHT,
                    level,
                )
                .unwrap();
            })
        });

        c.bench_function(&format!("RFC4175 BE10 -> LE10 {level}"), |b| {
            b.iter(|| {
                rfc4175_422be10_to_422le10(&pg_be, &mut pg_le, WIDTH, HEIGHT, level).unwrap();
            })
        });

        c.bench_function(&format!("V210 -> RFC4175 BE10 {level}"), |b| {
            b.iter(|| {
                v210_to_rfc4175_422be10(&v210, &mut pg_back, WIDTH, HEIGHT, level).unwrap();
            })
        });

        c.bench_function(&format!("RFC4175 444 BE10 -> YUV444P10LE {level}"), |b| {
            let [y, cb, cr] = planes_444.as_mut_slice() else {
                unreachable!()
            };
            b.iter(|| {
                rfc4175_444be10_to_yuv444p10le(&pg_444, y, cb, cr, WIDTH, HEIGHT, level).unwrap();
            })
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
