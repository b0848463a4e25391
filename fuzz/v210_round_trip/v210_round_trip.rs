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
    frame_size, rfc4175_422be10_to_v210, rfc4175_422be10_to_y210, v210_to_rfc4175_422be10,
    y210_to_rfc4175_422be10, CapabilityLevel, ConvertError, PixelFormat,
};

fuzz_target!(|data: (u8, u8, bool, u8)| {
    fuzz_v210(data.0, data.1, data.2, data.3);
});

fn fuzz_v210(i_width: u8, i_height: u8, vectorized: bool, salt: u8) {
    let (width, height) = (i_width as u32, i_height as u32);
    let level = if vectorized {
        CapabilityLevel::Auto
    } else {
        CapabilityLevel::None
    };
    let size = frame_size(PixelFormat::Yuv422Rfc4175Pg2Be10, width, height);
    let pg: Vec<u8> = (0..size)
        .map(|i| (i as u8).wrapping_mul(31) ^ salt)
        .collect();

    let pixels = width as usize * height as usize;
    let mut v210 = vec![0u8; pixels * 8 / 3 + 16];
    match rfc4175_422be10_to_v210(&pg, &mut v210, width, height, level) {
        Ok(()) => {
            assert_eq!(pixels % 6, 0);
            let mut back = vec![0u8; size];
            v210_to_rfc4175_422be10(&v210, &mut back, width, height, level).unwrap();
            assert_eq!(back, pg);
        }
        Err(ConvertError::Misaligned(_)) => {
            assert_ne!(pixels % 6, 0);
            assert!(v210.iter().all(|&b| b == 0));
        }
        Err(e) => assert!(e.is_invalid_geometry(), "unexpected {e}"),
    }

    let mut y210 = vec![0u16; pixels * 2];
    if rfc4175_422be10_to_y210(&pg, &mut y210, width, height, level).is_ok() {
        assert!(y210.iter().all(|&cell| cell & 0x3f == 0));
        let mut back = vec![0u8; size];
        y210_to_rfc4175_422be10(&y210, &mut back, width, height, level).unwrap();
        assert_eq!(back, pg);
    }
}
