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
use crate::capability::CapabilityLevel;
use crate::convert_error::{
    check_pixel_count, ConvertError, MismatchedPlane, MismatchedSize, Misalignment,
};
use crate::dispatch::{convert_planes, Conversion};
use crate::formats::{least_linesize, PixelFormat};
use crate::layouts::{DstPlanes, SrcPlanes};
use std::fmt::Debug;

#[derive(Debug)]
pub enum BufferStoreMut<'a, T: Copy + Debug> {
    Borrowed(&'a mut [T]),
    Owned(Vec<T>),
}

impl<T: Copy + Debug> BufferStoreMut<'_, T> {
    pub fn borrow(&self) -> &[T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    pub fn as_mut(&mut self) -> &mut [T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }
}

/// Line size of each plane the format has, zero for the rest.
fn least_linesizes(format: PixelFormat, width: u32) -> [usize; 3] {
    std::array::from_fn(|p| {
        if p < format.planes() {
            least_linesize(format, width, p)
        } else {
            0
        }
    })
}

/// Shared checks of both frame flavours, `plane_error` picks the variant for short planes.
fn check_frame(
    format: PixelFormat,
    width: u32,
    height: u32,
    plane_lengths: [usize; 3],
    linesize: [usize; 3],
    plane_error: fn(MismatchedPlane) -> ConvertError,
) -> Result<(), ConvertError> {
    check_pixel_count(width, height, 1)?;
    let granularity = format.pixel_granularity();
    if width as usize % granularity != 0 {
        return Err(ConvertError::Misaligned(Misalignment {
            width,
            height: 1,
            granularity,
        }));
    }
    let least = least_linesizes(format, width);
    for plane in 0..format.planes() {
        if linesize[plane] < least[plane] {
            return Err(ConvertError::LinesizeTooSmall(MismatchedPlane {
                plane,
                size: MismatchedSize {
                    expected: least[plane],
                    received: linesize[plane],
                },
            }));
        }
        let expected = linesize[plane]
            .checked_mul(height as usize - 1)
            .and_then(|body| body.checked_add(least[plane]))
            .ok_or(ConvertError::PointerOverflow)?;
        if plane_lengths[plane] < expected {
            return Err(plane_error(MismatchedPlane {
                plane,
                size: MismatchedSize {
                    expected,
                    received: plane_lengths[plane],
                },
            }));
        }
    }
    Ok(())
}

/// Read only video frame, planes as laid out in memory.
///
/// Packed formats use plane 0 only. Line sizes are in bytes.
#[derive(Debug, Clone, Copy)]
pub struct VideoFrame<'a> {
    pub format: PixelFormat,
    pub width: u32,
    pub height: u32,
    pub planes: [&'a [u8]; 3],
    pub linesize: [usize; 3],
}

impl VideoFrame<'_> {
    pub fn check_constraints(&self) -> Result<(), ConvertError> {
        check_frame(
            self.format,
            self.width,
            self.height,
            self.planes.map(|p| p.len()),
            self.linesize,
            ConvertError::SourceSizeMismatch,
        )
    }

    fn has_padding(&self) -> bool {
        has_padding(self.format, self.width, self.linesize)
    }
}

fn has_padding(format: PixelFormat, width: u32, linesize: [usize; 3]) -> bool {
    least_linesizes(format, width)
        .iter()
        .zip(linesize.iter())
        .any(|(least, size)| size > least)
}

#[derive(Debug)]
/// Mutable video frame, planes may be borrowed or owned.
pub struct VideoFrameMut<'a> {
    pub format: PixelFormat,
    pub width: u32,
    pub height: u32,
    pub planes: [BufferStoreMut<'a, u8>; 3],
    pub linesize: [usize; 3],
}

impl<'a> VideoFrameMut<'a> {
    /// Allocates a zeroed frame with tightly packed lines.
    pub fn alloc(format: PixelFormat, width: u32, height: u32) -> Self {
        Self::alloc_with_linesize(format, width, height, least_linesizes(format, width))
    }

    /// Allocates a zeroed frame with the given line sizes, planes the format lacks stay empty.
    pub fn alloc_with_linesize(
        format: PixelFormat,
        width: u32,
        height: u32,
        linesize: [usize; 3],
    ) -> Self {
        let planes = format.planes();
        let planes = std::array::from_fn(|p| {
            let len = if p < planes {
                linesize[p] * height as usize
            } else {
                0
            };
            BufferStoreMut::Owned(vec![0u8; len])
        });
        let linesize = std::array::from_fn(|p| if p < format.planes() { linesize[p] } else { 0 });
        VideoFrameMut {
            format,
            width,
            height,
            planes,
            linesize,
        }
    }

    pub fn check_constraints(&self) -> Result<(), ConvertError> {
        check_frame(
            self.format,
            self.width,
            self.height,
            std::array::from_fn(|p| self.planes[p].borrow().len()),
            self.linesize,
            ConvertError::DestinationSizeMismatch,
        )
    }

    pub fn to_fixed(&'a self) -> VideoFrame<'a> {
        VideoFrame {
            format: self.format,
            width: self.width,
            height: self.height,
            planes: std::array::from_fn(|p| self.planes[p].borrow()),
            linesize: self.linesize,
        }
    }
}

fn permute<T: Copy>(values: [T; 3], order: [usize; 3]) -> [T; 3] {
    order.map(|p| values[p])
}

fn permute_mut<'a>(planes: [&'a mut [u8]; 3], order: [usize; 3]) -> [&'a mut [u8]; 3] {
    let mut planes = planes.map(Some);
    order.map(|p| planes[p].take().unwrap_or_default())
}

#[inline]
fn line_of(plane: &[u8], line: usize, linesize: usize, len: usize) -> &[u8] {
    plane
        .get(line * linesize..line * linesize + len)
        .unwrap_or_default()
}

#[inline]
fn line_of_mut(plane: &mut [u8], line: usize, linesize: usize, len: usize) -> &mut [u8] {
    plane
        .get_mut(line * linesize..line * linesize + len)
        .unwrap_or_default()
}

/// Converts `src` into `dst`, the formats pick the conversion.
///
/// Frames must have equal dimensions. Frames with line padding are converted line by line,
/// tightly packed frames in one pass.
///
/// # Errors
///
/// [ConvertError::UnsupportedFormatPair] when no conversion joins the two formats, geometry
/// errors as for the plain conversions. Nothing is written on error.
pub fn convert_frame(
    src: &VideoFrame<'_>,
    dst: &mut VideoFrameMut<'_>,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    if (src.width, src.height) != (dst.width, dst.height) {
        log::error!(
            "frame dimensions differ, source {}x{}, destination {}x{}",
            src.width,
            src.height,
            dst.width,
            dst.height
        );
        return Err(ConvertError::DimensionsMismatch {
            source: (src.width, src.height),
            destination: (dst.width, dst.height),
        });
    }
    let Some(conversion) = Conversion::from_formats(src.format, dst.format) else {
        log::error!(
            "no conversion from {} to {}",
            src.format.name(),
            dst.format.name()
        );
        return Err(ConvertError::UnsupportedFormatPair(src.format, dst.format));
    };
    src.check_constraints()?;
    dst.check_constraints()?;

    let (width, height) = (src.width, src.height);
    check_pixel_count(width, height, conversion.pixel_granularity())?;

    let src_order = src.format.kernel_planes();
    let dst_order = dst.format.kernel_planes();
    let src_planes = permute(src.planes, src_order);
    let [p0, p1, p2] = &mut dst.planes;
    let dst_planes = permute_mut([p0.as_mut(), p1.as_mut(), p2.as_mut()], dst_order);

    if !src.has_padding() && !has_padding(dst.format, width, dst.linesize) {
        return convert_planes(
            conversion,
            level,
            &SrcPlanes::from_bytes(src_planes),
            &mut DstPlanes::from_bytes(dst_planes),
            width,
            height,
        );
    }

    let src_linesize = permute(src.linesize, src_order);
    let src_least = permute(least_linesizes(src.format, width), src_order);
    let dst_linesize = permute(dst.linesize, dst_order);
    let dst_least = permute(least_linesizes(dst.format, width), dst_order);
    let [d0, d1, d2] = dst_planes;
    for line in 0..height as usize {
        let src_line = SrcPlanes::from_bytes(std::array::from_fn(|p| {
            line_of(src_planes[p], line, src_linesize[p], src_least[p])
        }));
        let mut dst_line = DstPlanes::from_bytes([
            line_of_mut(d0, line, dst_linesize[0], dst_least[0]),
            line_of_mut(d1, line, dst_linesize[1], dst_least[1]),
            line_of_mut(d2, line, dst_linesize[2], dst_least[2]),
        ]);
        convert_planes(conversion, level, &src_line, &mut dst_line, width, 1)?;
    }
    Ok(())
}

/// Copies one of the four half resolution phases of `src` into `dst`.
///
/// Both frames share the same RFC4175 wire format and `src` is exactly twice `dst` in each
/// direction. Every other pixel group of every other line is taken, `index` bit 0 shifts the
/// pick by one pixel group and bit 1 by one line.
///
/// Lines are copied with AVX-512 VBMI byte permutes when the host has them.
pub fn downsample_frame(
    src: &VideoFrame<'_>,
    dst: &mut VideoFrameMut<'_>,
    index: u8,
) -> Result<(), ConvertError> {
    downsample_frame_at(src, dst, index, CapabilityLevel::Auto)
}

pub(crate) fn downsample_frame_at(
    src: &VideoFrame<'_>,
    dst: &mut VideoFrameMut<'_>,
    index: u8,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    let Some(pg) = src.format.pixel_group() else {
        log::error!(
            "downsample not supported from {} to {}",
            src.format.name(),
            dst.format.name()
        );
        return Err(ConvertError::UnsupportedDownsample(src.format, dst.format));
    };
    if src.format != dst.format {
        log::error!(
            "downsample not supported from {} to {}",
            src.format.name(),
            dst.format.name()
        );
        return Err(ConvertError::UnsupportedDownsample(src.format, dst.format));
    }
    if index > 3 {
        return Err(ConvertError::InvalidSampleIndex(index));
    }
    if src.width != dst.width.saturating_mul(2) || src.height != dst.height.saturating_mul(2) {
        return Err(ConvertError::DimensionsMismatch {
            source: (src.width, src.height),
            destination: (dst.width, dst.height),
        });
    }
    src.check_constraints()?;
    dst.check_constraints()?;

    let src_linesize = src.linesize[0];
    let dst_linesize = dst.linesize[0];
    let mut start = 0usize;
    if index & 1 != 0 {
        start += pg.size;
    }
    if index & 2 != 0 {
        start += src_linesize;
    }
    let groups = dst.width as usize / pg.coverage;
    let src_plane = src.planes[0];
    let dst_plane = dst.planes[0].as_mut();
    for line in 0..dst.height as usize {
        let src_line = &src_plane[start + src_linesize * line * 2..];
        let dst_line = &mut dst_plane[dst_linesize * line..][..groups * pg.size];
        downsample_line(src_line, dst_line, pg.size, groups, level);
    }
    Ok(())
}

#[allow(unused_variables)]
fn downsample_line(
    src: &[u8],
    dst: &mut [u8],
    group_size: usize,
    groups: usize,
    level: CapabilityLevel,
) {
    if groups == 0 {
        return;
    }
    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx512"))]
    {
        if level.resolve() >= CapabilityLevel::Avx512Vbmi2
            && group_size <= 32
            && src.len() >= (2 * groups - 1) * group_size
            && dst.len() >= groups * group_size
        {
            unsafe {
                crate::avx512bw::avx512vbmi_downsample_line(src, dst, group_size, groups);
            }
            return;
        }
    }
    for (group, dst_group) in dst.chunks_exact_mut(group_size).take(groups).enumerate() {
        let from = group * 2 * group_size;
        dst_group.copy_from_slice(&src[from..from + group_size]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::frame_size;
    use rand::Rng;

    fn random_bytes(len: usize) -> Vec<u8> {
        let mut rng = rand::rng();
        (0..len).map(|_| rng.random()).collect()
    }

    #[test]
    fn test_padded_frames_match_packed() {
        let (width, height) = (1920u32, 9u32);
        let format = PixelFormat::Yuv422Rfc4175Pg2Be10;
        let bytes = random_bytes(frame_size(format, width, height));
        let packed = VideoFrame {
            format,
            width,
            height,
            planes: [&bytes, &[], &[]],
            linesize: [4800, 0, 0],
        };

        let mut tight = VideoFrameMut::alloc(PixelFormat::Yuv422Planar10Le, width, height);
        convert_frame(&packed, &mut tight, CapabilityLevel::Auto).unwrap();

        let mut padded = VideoFrameMut::alloc_with_linesize(
            PixelFormat::Yuv422Planar10Le,
            width,
            height,
            [4096, 2048, 2048],
        );
        convert_frame(&packed, &mut padded, CapabilityLevel::None).unwrap();
        for (plane, least) in [(0usize, 3840usize), (1, 1920), (2, 1920)] {
            let linesize = padded.linesize[plane];
            for line in 0..height as usize {
                assert_eq!(
                    &padded.planes[plane].borrow()[line * linesize..][..least],
                    &tight.planes[plane].borrow()[line * least..][..least]
                );
                assert!(padded.planes[plane].borrow()[line * linesize + least..]
                    [..linesize - least]
                    .iter()
                    .all(|&b| b == 0));
            }
        }

        let mut back = VideoFrameMut::alloc_with_linesize(format, width, height, [5000, 0, 0]);
        convert_frame(&padded.to_fixed(), &mut back, CapabilityLevel::Auto).unwrap();
        for line in 0..height as usize {
            assert_eq!(
                &back.planes[0].borrow()[line * 5000..][..4800],
                &bytes[line * 4800..][..4800]
            );
        }
    }

    #[test]
    fn test_gbr_frame_plane_order() {
        let (width, height) = (4u32, 1u32);
        let format = PixelFormat::RgbRfc4175Pg4Be10;
        // R = 0x3ff, G = 0x001, B = 0x200 for the first pixel.
        let mut pg = vec![0u8; 15];
        pg[0] = 0xFF;
        pg[1] = 0xC0;
        pg[2] = 0x18;
        let src = VideoFrame {
            format,
            width,
            height,
            planes: [&pg, &[], &[]],
            linesize: [15, 0, 0],
        };
        let mut gbr = VideoFrameMut::alloc(PixelFormat::GbrPlanar10Le, width, height);
        convert_frame(&src, &mut gbr, CapabilityLevel::Auto).unwrap();
        assert_eq!(&gbr.planes[0].borrow()[..2], &[0x01, 0x00]);
        assert_eq!(&gbr.planes[1].borrow()[..2], &[0x00, 0x02]);
        assert_eq!(&gbr.planes[2].borrow()[..2], &[0xFF, 0x03]);
    }

    #[test]
    fn test_frame_errors_write_nothing() {
        let format = PixelFormat::Yuv422Rfc4175Pg2Be10;
        let bytes = random_bytes(frame_size(format, 64, 4));
        let src = VideoFrame {
            format,
            width: 64,
            height: 4,
            planes: [&bytes, &[], &[]],
            linesize: [160, 0, 0],
        };
        let mut small = VideoFrameMut::alloc(PixelFormat::V210, 60, 4);
        assert!(matches!(
            convert_frame(&src, &mut small, CapabilityLevel::Auto),
            Err(ConvertError::DimensionsMismatch { .. })
        ));
        let mut y210 = VideoFrameMut::alloc(PixelFormat::Y210, 64, 4);
        y210.linesize[0] = 200;
        assert!(matches!(
            convert_frame(&src, &mut y210, CapabilityLevel::Auto),
            Err(ConvertError::LinesizeTooSmall(_))
        ));
        assert!(y210.planes[0].borrow().iter().all(|&b| b == 0));
        let mut gbr = VideoFrameMut::alloc(PixelFormat::GbrPlanar10Le, 64, 4);
        assert_eq!(
            convert_frame(&src, &mut gbr, CapabilityLevel::Auto),
            Err(ConvertError::UnsupportedFormatPair(
                format,
                PixelFormat::GbrPlanar10Le
            ))
        );
        let mut v210 = VideoFrameMut::alloc(PixelFormat::V210, 64, 4);
        assert!(matches!(
            convert_frame(&src, &mut v210, CapabilityLevel::Auto),
            Err(ConvertError::Misaligned(_))
        ));
    }

    #[test]
    fn test_downsample_phases() {
        let format = PixelFormat::Yuv422Rfc4175Pg2Be10;
        let (width, height) = (8u32, 4u32);
        // Each pixel group holds its own column and line number.
        let mut bytes = vec![0u8; frame_size(format, width, height)];
        for line in 0..4usize {
            for group in 0..4usize {
                bytes[line * 20 + group * 5] = (line * 16 + group) as u8;
            }
        }
        let src = VideoFrame {
            format,
            width,
            height,
            planes: [&bytes, &[], &[]],
            linesize: [20, 0, 0],
        };
        for index in 0..4u8 {
            let mut dst = VideoFrameMut::alloc(format, 4, 2);
            downsample_frame(&src, &mut dst, index).unwrap();
            let line_phase = (index >> 1) as usize;
            let group_phase = (index & 1) as usize;
            let plane = dst.planes[0].borrow();
            for line in 0..2usize {
                for group in 0..2usize {
                    let expected = (line * 2 + line_phase) * 16 + group * 2 + group_phase;
                    assert_eq!(plane[line * 10 + group * 5], expected as u8);
                }
            }
        }
        let mut dst = VideoFrameMut::alloc(format, 4, 2);
        assert_eq!(
            downsample_frame(&src, &mut dst, 4),
            Err(ConvertError::InvalidSampleIndex(4))
        );
        let mut wrong = VideoFrameMut::alloc(format, 4, 4);
        assert!(matches!(
            downsample_frame(&src, &mut wrong, 0),
            Err(ConvertError::DimensionsMismatch { .. })
        ));
        let mut planar = VideoFrameMut::alloc(PixelFormat::Yuv422Planar10Le, 4, 2);
        assert!(matches!(
            downsample_frame(&src, &mut planar, 0),
            Err(ConvertError::UnsupportedDownsample(..))
        ));
    }

    #[test]
    fn test_downsample_tiers_match_scalar() {
        let (width, height) = (388u32, 3u32);
        for format in [
            PixelFormat::Yuv422Rfc4175Pg2Be10,
            PixelFormat::Yuv422Rfc4175Pg2Le12,
            PixelFormat::Yuv444Rfc4175Pg4Be10,
            PixelFormat::RgbRfc4175Pg2Le12,
        ] {
            let linesize = least_linesize(format, width * 2, 0) + 7;
            let bytes = random_bytes(linesize * (height as usize * 2));
            let src = VideoFrame {
                format,
                width: width * 2,
                height: height * 2,
                planes: [&bytes, &[], &[]],
                linesize: [linesize, 0, 0],
            };
            for index in 0..4u8 {
                let mut reference = VideoFrameMut::alloc(format, width, height);
                downsample_frame_at(&src, &mut reference, index, CapabilityLevel::None).unwrap();
                let mut fast = VideoFrameMut::alloc(format, width, height);
                downsample_frame_at(&src, &mut fast, index, CapabilityLevel::Auto).unwrap();
                assert_eq!(
                    reference.planes[0].borrow(),
                    fast.planes[0].borrow(),
                    "{format:?} index {index}"
                );
            }
        }
    }

    #[test]
    fn test_huge_linesize_is_rejected() {
        let format = PixelFormat::Yuv422Rfc4175Pg2Be10;
        let bytes = random_bytes(frame_size(format, 1920, 2));
        let src = VideoFrame {
            format,
            width: 1920,
            height: 2,
            planes: [&bytes, &[], &[]],
            linesize: [usize::MAX, 0, 0],
        };
        let mut y210 = VideoFrameMut::alloc(PixelFormat::Y210, 1920, 2);
        assert_eq!(
            convert_frame(&src, &mut y210, CapabilityLevel::Auto),
            Err(ConvertError::PointerOverflow)
        );
        assert!(y210.planes[0].borrow().iter().all(|&b| b == 0));

        let mut half = VideoFrameMut::alloc(format, 960, 1);
        assert_eq!(
            downsample_frame(&src, &mut half, 0),
            Err(ConvertError::PointerOverflow)
        );

        let mut twin = VideoFrameMut::alloc(format, 1920, 2);
        twin.linesize[0] = usize::MAX;
        assert_eq!(
            twin.check_constraints(),
            Err(ConvertError::PointerOverflow)
        );
    }
}
