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

#![no_main]

use libfuzzer_sys::fuzz_target;
use st20_convert::{
    frame_size, rfc4175_422be10_to_422le10, rfc4175_422be10_to_yuv422p10le,
    rfc4175_422le10_to_422be10, rfc4175_444be12_to_yuv444p12le, yuv422p10le_to_rfc4175_422be10,
    yuv444p12le_to_rfc4175_444be12, CapabilityLevel, ConvertError, PixelFormat,
};

fn level_of(value: u8) -> CapabilityLevel {
    match value % 5 {
        0 => CapabilityLevel::None,
        1 => CapabilityLevel::Avx2,
        2 => CapabilityLevel::Avx512,
        3 => CapabilityLevel::Avx512Vbmi2,
        _ => CapabilityLevel::Auto,
    }
}

fn accept(result: Result<(), ConvertError>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            assert!(e.is_invalid_geometry(), "unexpected {e}");
            false
        }
    }
}

fuzz_target!(|data: (u8, u8, u8, u8, u8, Vec<u8>)| {
    fuzz_round_trip(data.0, data.1, data.2, data.3, data.4, &data.5);
});

fn fuzz_round_trip(
    i_width: u8,
    i_height: u8,
    encode: u8,
    decode: u8,
    salt: u8,
    payload: &[u8],
) {
    let (width, height) = (i_width as u32, i_height as u32);
    let (encode, decode) = (level_of(encode), level_of(decode));
    let pixels = width as usize * height as usize;

    let size = frame_size(PixelFormat::Yuv422Rfc4175Pg2Be10, width, height);
    let pg: Vec<u8> = (0..size)
        .map(|i| payload.get(i).copied().unwrap_or(salt ^ i as u8))
        .collect();
    let mut y = vec![0u16; pixels];
    let mut cb = vec![0u16; pixels / 2];
    let mut cr = vec![0u16; pixels / 2];
    if accept(rfc4175_422be10_to_yuv422p10le(
        &pg, &mut y, &mut cb, &mut cr, width, height, encode,
    )) {
        let mut back = vec![0u8; size];
        yuv422p10le_to_rfc4175_422be10(&y, &cb, &cr, &mut back, width, height, decode).unwrap();
        assert_eq!(back, pg);

        let mut le = vec![0u8; size];
        rfc4175_422be10_to_422le10(&pg, &mut le, width, height, decode).unwrap();
        rfc4175_422le10_to_422be10(&le, &mut back, width, height, encode).unwrap();
        assert_eq!(back, pg);
    }

    let size = frame_size(PixelFormat::Yuv444Rfc4175Pg2Be12, width, height);
    let pg: Vec<u8> = (0..size)
        .map(|i| payload.get(i).copied().unwrap_or(salt.wrapping_add(i as u8)))
        .collect();
    let mut planes = vec![vec![0u16; pixels]; 3];
    let [y, cb, cr] = planes.as_mut_slice() else {
        return;
    };
    if accept(rfc4175_444be12_to_yuv444p12le(
        &pg, y, cb, cr, width, height, encode,
    )) {
        let mut back = vec![0u8; size];
        yuv444p12le_to_rfc4175_444be12(y, cb, cr, &mut back, width, height, decode).unwrap();
        assert_eq!(back, pg);
    }
}
