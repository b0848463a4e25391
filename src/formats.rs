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
use crate::layouts::LayoutKind;

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum ChromaSampling {
    Yuv422,
    Yuv444,
}

/// Pixel group of a packed wire format: `size` bytes carrying `coverage` pixels.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct PixelGroup {
    pub size: usize,
    pub coverage: usize,
}

/// Every layout the engine reads or writes.
///
/// Planar formats store one little endian `u16` per sample with the value in the low bits.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum PixelFormat {
    /// RFC4175 4:2:2 10 bit, 5 bytes per 2 pixels, big endian bit order
    Yuv422Rfc4175Pg2Be10,
    /// RFC4175 4:2:2 10 bit, 5 bytes per 2 pixels, little endian bit order
    Yuv422Rfc4175Pg2Le10,
    /// RFC4175 4:2:2 12 bit, 6 bytes per 2 pixels, big endian bit order
    Yuv422Rfc4175Pg2Be12,
    /// RFC4175 4:2:2 12 bit, 6 bytes per 2 pixels, little endian bit order
    Yuv422Rfc4175Pg2Le12,
    /// 8 bit 4:2:2 packed as Cb Y0 Cr Y1
    Uyvy,
    /// Three 10 bit samples per little endian 32 bit word, 16 bytes per 6 pixels
    V210,
    /// 4:2:2 in 16 bit cells ordered Y0 Cb Y1 Cr, values left justified
    Y210,
    Yuv422Planar10Le,
    Yuv422Planar12Le,
    Yuv444Rfc4175Pg4Be10,
    Yuv444Rfc4175Pg4Le10,
    Yuv444Rfc4175Pg2Be12,
    Yuv444Rfc4175Pg2Le12,
    RgbRfc4175Pg4Be10,
    RgbRfc4175Pg4Le10,
    RgbRfc4175Pg2Be12,
    RgbRfc4175Pg2Le12,
    Yuv444Planar10Le,
    Yuv444Planar12Le,
    /// Planes stored as G, B, R
    GbrPlanar10Le,
    /// Planes stored as G, B, R
    GbrPlanar12Le,
}

impl PixelFormat {
    pub const fn name(self) -> &'static str {
        match self {
            PixelFormat::Yuv422Rfc4175Pg2Be10 => "YUV422RFC4175PG2BE10",
            PixelFormat::Yuv422Rfc4175Pg2Le10 => "YUV422RFC4175PG2LE10",
            PixelFormat::Yuv422Rfc4175Pg2Be12 => "YUV422RFC4175PG2BE12",
            PixelFormat::Yuv422Rfc4175Pg2Le12 => "YUV422RFC4175PG2LE12",
            PixelFormat::Uyvy => "UYVY",
            PixelFormat::V210 => "V210",
            PixelFormat::Y210 => "Y210",
            PixelFormat::Yuv422Planar10Le => "YUV422PLANAR10LE",
            PixelFormat::Yuv422Planar12Le => "YUV422PLANAR12LE",
            PixelFormat::Yuv444Rfc4175Pg4Be10 => "YUV444RFC4175PG4BE10",
            PixelFormat::Yuv444Rfc4175Pg4Le10 => "YUV444RFC4175PG4LE10",
            PixelFormat::Yuv444Rfc4175Pg2Be12 => "YUV444RFC4175PG2BE12",
            PixelFormat::Yuv444Rfc4175Pg2Le12 => "YUV444RFC4175PG2LE12",
            PixelFormat::RgbRfc4175Pg4Be10 => "RGBRFC4175PG4BE10",
            PixelFormat::RgbRfc4175Pg4Le10 => "RGBRFC4175PG4LE10",
            PixelFormat::RgbRfc4175Pg2Be12 => "RGBRFC4175PG2BE12",
            PixelFormat::RgbRfc4175Pg2Le12 => "RGBRFC4175PG2LE12",
            PixelFormat::Yuv444Planar10Le => "YUV444PLANAR10LE",
            PixelFormat::Yuv444Planar12Le => "YUV444PLANAR12LE",
            PixelFormat::GbrPlanar10Le => "GBRPLANAR10LE",
            PixelFormat::GbrPlanar12Le => "GBRPLANAR12LE",
        }
    }

    pub const fn sampling(self) -> ChromaSampling {
        match self {
            PixelFormat::Yuv422Rfc4175Pg2Be10
            | PixelFormat::Yuv422Rfc4175Pg2Le10
            | PixelFormat::Yuv422Rfc4175Pg2Be12
            | PixelFormat::Yuv422Rfc4175Pg2Le12
            | PixelFormat::Uyvy
            | PixelFormat::V210
            | PixelFormat::Y210
            | PixelFormat::Yuv422Planar10Le
            | PixelFormat::Yuv422Planar12Le => ChromaSampling::Yuv422,
            _ => ChromaSampling::Yuv444,
        }
    }

    /// Number of planes the format occupies.
    pub const fn planes(self) -> usize {
        match self {
            PixelFormat::Yuv422Planar10Le
            | PixelFormat::Yuv422Planar12Le
            | PixelFormat::Yuv444Planar10Le
            | PixelFormat::Yuv444Planar12Le
            | PixelFormat::GbrPlanar10Le
            | PixelFormat::GbrPlanar12Le => 3,
            _ => 1,
        }
    }

    /// RGB wire formats and their GBR planar counterparts.
    pub const fn is_rgb(self) -> bool {
        matches!(
            self,
            PixelFormat::RgbRfc4175Pg4Be10
                | PixelFormat::RgbRfc4175Pg4Le10
                | PixelFormat::RgbRfc4175Pg2Be12
                | PixelFormat::RgbRfc4175Pg2Le12
                | PixelFormat::GbrPlanar10Le
                | PixelFormat::GbrPlanar12Le
        )
    }

    pub const fn is_planar(self) -> bool {
        self.planes() > 1
    }

    /// Pixel count `width * height` must be a multiple of this value.
    pub const fn pixel_granularity(self) -> usize {
        match self {
            PixelFormat::V210 => 6,
            PixelFormat::Yuv444Rfc4175Pg4Be10
            | PixelFormat::Yuv444Rfc4175Pg4Le10
            | PixelFormat::RgbRfc4175Pg4Be10
            | PixelFormat::RgbRfc4175Pg4Le10 => 4,
            PixelFormat::Yuv444Planar10Le
            | PixelFormat::Yuv444Planar12Le
            | PixelFormat::GbrPlanar10Le
            | PixelFormat::GbrPlanar12Le => 1,
            _ => 2,
        }
    }

    /// Pixel group of RFC4175 wire formats.
    pub const fn pixel_group(self) -> Option<PixelGroup> {
        match self {
            PixelFormat::Yuv422Rfc4175Pg2Be10 | PixelFormat::Yuv422Rfc4175Pg2Le10 => {
                Some(PixelGroup {
                    size: 5,
                    coverage: 2,
                })
            }
            PixelFormat::Yuv422Rfc4175Pg2Be12 | PixelFormat::Yuv422Rfc4175Pg2Le12 => {
                Some(PixelGroup {
                    size: 6,
                    coverage: 2,
                })
            }
            PixelFormat::Yuv444Rfc4175Pg4Be10
            | PixelFormat::Yuv444Rfc4175Pg4Le10
            | PixelFormat::RgbRfc4175Pg4Be10
            | PixelFormat::RgbRfc4175Pg4Le10 => Some(PixelGroup {
                size: 15,
                coverage: 4,
            }),
            PixelFormat::Yuv444Rfc4175Pg2Be12
            | PixelFormat::Yuv444Rfc4175Pg2Le12
            | PixelFormat::RgbRfc4175Pg2Be12
            | PixelFormat::RgbRfc4175Pg2Le12 => Some(PixelGroup {
                size: 9,
                coverage: 2,
            }),
            _ => None,
        }
    }

    /// Memory plane backing each kernel plane slot.
    ///
    /// Kernels address 4:4:4 planes as (Y or G, Cb or R, Cr or B), GBR planar stores G, B, R.
    pub(crate) const fn kernel_planes(self) -> [usize; 3] {
        match self {
            PixelFormat::GbrPlanar10Le | PixelFormat::GbrPlanar12Le => [0, 2, 1],
            _ => [0, 1, 2],
        }
    }

    pub(crate) const fn layout(self) -> LayoutKind {
        match self {
            PixelFormat::Yuv422Rfc4175Pg2Be10
            | PixelFormat::Yuv444Rfc4175Pg4Be10
            | PixelFormat::RgbRfc4175Pg4Be10 => LayoutKind::Be10,
            PixelFormat::Yuv422Rfc4175Pg2Le10
            | PixelFormat::Yuv444Rfc4175Pg4Le10
            | PixelFormat::RgbRfc4175Pg4Le10 => LayoutKind::Le10,
            PixelFormat::Yuv422Rfc4175Pg2Be12
            | PixelFormat::Yuv444Rfc4175Pg2Be12
            | PixelFormat::RgbRfc4175Pg2Be12 => LayoutKind::Be12,
            PixelFormat::Yuv422Rfc4175Pg2Le12
            | PixelFormat::Yuv444Rfc4175Pg2Le12
            | PixelFormat::RgbRfc4175Pg2Le12 => LayoutKind::Le12,
            PixelFormat::Uyvy => LayoutKind::Uyvy8,
            PixelFormat::V210 => LayoutKind::V210,
            PixelFormat::Y210 => LayoutKind::Y210,
            PixelFormat::Yuv422Planar10Le => LayoutKind::Planar422P10,
            PixelFormat::Yuv422Planar12Le => LayoutKind::Planar422P12,
            PixelFormat::Yuv444Planar10Le | PixelFormat::GbrPlanar10Le => LayoutKind::Planar444P10,
            PixelFormat::Yuv444Planar12Le | PixelFormat::GbrPlanar12Le => LayoutKind::Planar444P12,
        }
    }
}

/// Bytes occupied by a `width` x `height` frame stored contiguously.
///
/// Returns 0 for V210 when the pixel count is not a multiple of 3.
pub fn frame_size(format: PixelFormat, width: u32, height: u32) -> usize {
    let pixels = width as usize * height as usize;
    if let Some(pg) = format.pixel_group() {
        return pixels * pg.size / pg.coverage;
    }
    match format {
        PixelFormat::Uyvy => pixels * 2,
        PixelFormat::V210 => {
            if pixels % 3 != 0 {
                log::error!("v210 needs a pixel count multiple of 3, got {width}x{height}");
                return 0;
            }
            pixels * 8 / 3
        }
        PixelFormat::Y210 | PixelFormat::Yuv422Planar10Le | PixelFormat::Yuv422Planar12Le => {
            pixels * 4
        }
        _ => pixels * 6,
    }
}

/// Byte offset of `plane` inside a contiguous frame, `None` when the format has no such plane.
pub fn plane_offset(format: PixelFormat, width: u32, height: u32, plane: usize) -> Option<usize> {
    if plane >= format.planes() {
        return None;
    }
    let luma = width as usize * height as usize * 2;
    let offset = match (format.sampling(), plane) {
        (_, 0) => 0,
        (ChromaSampling::Yuv422, 1) => luma,
        (ChromaSampling::Yuv422, _) => luma + luma / 2,
        (ChromaSampling::Yuv444, p) => luma * p,
    };
    Some(offset)
}

/// Smallest line size in bytes of `plane` for a line `width` pixels wide.
///
/// Returns 0 for planes the format does not have.
pub fn least_linesize(format: PixelFormat, width: u32, plane: usize) -> usize {
    if plane >= format.planes() {
        log::error!("{} has no plane {plane}", format.name());
        return 0;
    }
    let line = frame_size(format, width, 1);
    if !format.is_planar() {
        return line;
    }
    match (format.sampling(), plane) {
        (ChromaSampling::Yuv422, 0) => line / 2,
        (ChromaSampling::Yuv422, _) => line / 4,
        (ChromaSampling::Yuv444, _) => line / 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_sizes() {
        assert_eq!(
            frame_size(PixelFormat::Yuv422Rfc4175Pg2Be10, 1920, 1080),
            1920 * 1080 * 5 / 2
        );
        assert_eq!(
            frame_size(PixelFormat::Yuv422Rfc4175Pg2Le12, 1920, 1080),
            1920 * 1080 * 3
        );
        assert_eq!(frame_size(PixelFormat::Uyvy, 1920, 1080), 1920 * 1080 * 2);
        assert_eq!(frame_size(PixelFormat::V210, 1920, 1080), 1920 * 1080 * 8 / 3);
        assert_eq!(frame_size(PixelFormat::V210, 2, 641), 0);
        assert_eq!(frame_size(PixelFormat::Y210, 1920, 1080), 1920 * 1080 * 4);
        assert_eq!(
            frame_size(PixelFormat::Yuv422Planar10Le, 1920, 1080),
            1920 * 1080 * 4
        );
        assert_eq!(
            frame_size(PixelFormat::RgbRfc4175Pg4Be10, 1920, 1080),
            1920 * 1080 * 15 / 4
        );
        assert_eq!(
            frame_size(PixelFormat::Yuv444Rfc4175Pg2Be12, 1920, 1080),
            1920 * 1080 * 9 / 2
        );
        assert_eq!(
            frame_size(PixelFormat::GbrPlanar12Le, 1920, 1080),
            1920 * 1080 * 6
        );
    }

    #[test]
    fn test_plane_offsets() {
        let format = PixelFormat::Yuv422Planar10Le;
        assert_eq!(plane_offset(format, 4, 2, 0), Some(0));
        assert_eq!(plane_offset(format, 4, 2, 1), Some(16));
        assert_eq!(plane_offset(format, 4, 2, 2), Some(24));
        assert_eq!(plane_offset(format, 4, 2, 3), None);
        let format = PixelFormat::GbrPlanar10Le;
        assert_eq!(plane_offset(format, 4, 2, 2), Some(32));
        assert_eq!(plane_offset(PixelFormat::V210, 6, 1, 1), None);
    }

    #[test]
    fn test_least_linesize() {
        assert_eq!(least_linesize(PixelFormat::Yuv422Rfc4175Pg2Be10, 1920, 0), 4800);
        assert_eq!(least_linesize(PixelFormat::Yuv422Planar10Le, 1920, 0), 3840);
        assert_eq!(least_linesize(PixelFormat::Yuv422Planar10Le, 1920, 1), 1920);
        assert_eq!(least_linesize(PixelFormat::Yuv422Planar12Le, 1920, 2), 1920);
        assert_eq!(least_linesize(PixelFormat::Yuv444Planar10Le, 1920, 2), 3840);
        assert_eq!(least_linesize(PixelFormat::V210, 1920, 0), 5120);
        assert_eq!(least_linesize(PixelFormat::V210, 1920, 1), 0);
    }

    #[test]
    fn test_granularity_matches_group() {
        for format in [
            PixelFormat::Yuv422Rfc4175Pg2Be10,
            PixelFormat::Yuv444Rfc4175Pg4Le10,
            PixelFormat::RgbRfc4175Pg2Be12,
        ] {
            let pg = format.pixel_group().unwrap();
            assert_eq!(format.pixel_granularity(), pg.coverage);
        }
    }
}
