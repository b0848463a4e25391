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
use st20_convert::{convert_frame, CapabilityLevel, PixelFormat, VideoFrame, VideoFrameMut};

const FORMATS: [PixelFormat; 8] = [
    PixelFormat::Yuv422Rfc4175Pg2Be10,
    PixelFormat::Yuv422Rfc4175Pg2Le10,
    PixelFormat::V210,
    PixelFormat::Y210,
    PixelFormat::Yuv422Planar10Le,
    PixelFormat::RgbRfc4175Pg4Be10,
    PixelFormat::GbrPlanar10Le,
    PixelFormat::Uyvy,
];

fuzz_target!(|data: (u8, u8, u8, u8, u8)| {
    fuzz_frame(data.0, data.1, data.2, data.3, data.4);
});

fn fuzz_frame(i_width: u8, i_height: u8, src: u8, dst: u8, padding: u8) {
    let (width, height) = (i_width as u32, i_height as u32);
    let src_format = FORMATS[src as usize % FORMATS.len()];
    let dst_format = FORMATS[dst as usize % FORMATS.len()];

    let mut source = VideoFrameMut::alloc(src_format, width, height);
    for plane in source.planes.iter_mut() {
        for (i, byte) in plane.as_mut().iter_mut().enumerate() {
            *byte = i as u8;
        }
    }
    let frame: VideoFrame<'_> = source.to_fixed();

    let mut target = VideoFrameMut::alloc(dst_format, width, height);
    let linesize = target.linesize.map(|l| if l > 0 { l + padding as usize } else { 0 });
    let mut padded = VideoFrameMut::alloc_with_linesize(dst_format, width, height, linesize);

    let tight = convert_frame(&frame, &mut target, CapabilityLevel::Auto);
    let loose = convert_frame(&frame, &mut padded, CapabilityLevel::None);
    assert_eq!(tight.is_ok(), loose.is_ok());
}
