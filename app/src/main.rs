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
use log::{Level, LevelFilter, Log, Metadata, Record};
use rand::Rng;
use st20_convert::{
    convert_frame, detected_level, frame_size, rfc4175_422be10_to_v210,
    rfc4175_422le10_to_422be10, v210_to_rfc4175_422le10, CapabilityLevel, PixelFormat,
    VideoFrame, VideoFrameMut,
};
use std::time::Instant;

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Debug);

    let level = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<CapabilityLevel>().unwrap())
        .unwrap_or_default();
    println!("detected {}, requested {level}", detected_level());

    let (width, height) = (1920u32, 1080u32);
    let mut rng = rand::rng();
    let pg_be: Vec<u8> = (0..frame_size(PixelFormat::Yuv422Rfc4175Pg2Be10, width, height))
        .map(|_| rng.random())
        .collect();

    let mut v210 = vec![0u8; frame_size(PixelFormat::V210, width, height)];
    let mut pg_le = vec![0u8; pg_be.len()];
    let mut pg_back = vec![0u8; pg_be.len()];

    let start = Instant::now();
    rfc4175_422be10_to_v210(&pg_be, &mut v210, width, height, level).unwrap();
    println!("be10 -> v210 {:?}", start.elapsed());

    let start = Instant::now();
    v210_to_rfc4175_422le10(&v210, &mut pg_le, width, height, CapabilityLevel::None).unwrap();
    println!("v210 -> le10 on scalar {:?}", start.elapsed());

    let start = Instant::now();
    rfc4175_422le10_to_422be10(&pg_le, &mut pg_back, width, height, level).unwrap();
    println!("le10 -> be10 {:?}", start.elapsed());
    assert_eq!(pg_back, pg_be);

    let src = VideoFrame {
        format: PixelFormat::Yuv422Rfc4175Pg2Be10,
        width,
        height,
        planes: [&pg_be, &[], &[]],
        linesize: [4800, 0, 0],
    };
    let mut planar =
        VideoFrameMut::alloc_with_linesize(PixelFormat::Yuv422Planar10Le, width, height, [
            4096, 2048, 2048,
        ]);
    let start = Instant::now();
    convert_frame(&src, &mut planar, level).unwrap();
    println!("padded frame to planar {:?}", start.elapsed());

    let misaligned = rfc4175_422be10_to_v210(&pg_be[..3205], &mut v210, 2, 641, level);
    println!("2x641 to v210: {misaligned:?}");
}
