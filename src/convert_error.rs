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
use crate::formats::PixelFormat;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

/// Size problem of a single plane, sizes are in bytes.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedPlane {
    pub plane: usize,
    pub size: MismatchedSize,
}

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct Misalignment {
    pub width: u32,
    pub height: u32,
    /// Pixel count `width * height` must be a multiple of this value.
    pub granularity: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConvertError {
    ZeroBaseSize,
    PointerOverflow,
    Misaligned(Misalignment),
    SourceSizeMismatch(MismatchedPlane),
    DestinationSizeMismatch(MismatchedPlane),
    LinesizeTooSmall(MismatchedPlane),
    DimensionsMismatch {
        source: (u32, u32),
        destination: (u32, u32),
    },
    UnsupportedFormatPair(PixelFormat, PixelFormat),
    UnsupportedDownsample(PixelFormat, PixelFormat),
    InvalidSampleIndex(u8),
    /// The copy channel rejected a descriptor while staging chunk `chunk`.
    ChannelSubmitFailure {
        chunk: usize,
    },
}

impl ConvertError {
    /// Returns true for every failure raised by geometry validation.
    ///
    /// Such failures are always reported before the first write to a destination.
    pub fn is_invalid_geometry(&self) -> bool {
        matches!(
            self,
            ConvertError::ZeroBaseSize
                | ConvertError::PointerOverflow
                | ConvertError::Misaligned(_)
                | ConvertError::SourceSizeMismatch(_)
                | ConvertError::DestinationSizeMismatch(_)
                | ConvertError::LinesizeTooSmall(_)
                | ConvertError::DimensionsMismatch { .. }
        )
    }
}

impl Display for ConvertError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::ZeroBaseSize => f.write_str("Zero sized images is not supported"),
            ConvertError::PointerOverflow => {
                f.write_str("Image size overflow pointer capabilities")
            }
            ConvertError::Misaligned(m) => f.write_fmt(format_args!(
                "Image {}x{} has {} pixels, pixel count must be a multiple of {}",
                m.width,
                m.height,
                m.width as u64 * m.height as u64,
                m.granularity
            )),
            ConvertError::SourceSizeMismatch(p) => f.write_fmt(format_args!(
                "Source plane {} must have at least {} bytes, but it has {}",
                p.plane, p.size.expected, p.size.received
            )),
            ConvertError::DestinationSizeMismatch(p) => f.write_fmt(format_args!(
                "Destination plane {} must have at least {} bytes, but it has {}",
                p.plane, p.size.expected, p.size.received
            )),
            ConvertError::LinesizeTooSmall(p) => f.write_fmt(format_args!(
                "Linesize of plane {} must be at least {}, but it is {}",
                p.plane, p.size.expected, p.size.received
            )),
            ConvertError::DimensionsMismatch {
                source,
                destination,
            } => f.write_fmt(format_args!(
                "Source is {}x{} but destination is {}x{}",
                source.0, source.1, destination.0, destination.1
            )),
            ConvertError::UnsupportedFormatPair(src, dst) => f.write_fmt(format_args!(
                "Conversion from {} to {} is not supported",
                src.name(),
                dst.name()
            )),
            ConvertError::UnsupportedDownsample(src, dst) => f.write_fmt(format_args!(
                "Downsampling from {} to {} is not supported",
                src.name(),
                dst.name()
            )),
            ConvertError::InvalidSampleIndex(idx) => f.write_fmt(format_args!(
                "Sample index must be in 0..4, but it was {idx}"
            )),
            ConvertError::ChannelSubmitFailure { chunk } => f.write_fmt(format_args!(
                "Copy channel rejected a descriptor for chunk {chunk}"
            )),
        }
    }
}

impl Error for ConvertError {}

#[inline]
pub(crate) fn check_overflow_v2(v0: usize, v1: usize) -> Result<(), ConvertError> {
    let (_, overflow) = v0.overflowing_mul(v1);
    if overflow {
        return Err(ConvertError::PointerOverflow);
    }
    Ok(())
}

/// Validates image dimensions against the pixel granularity, returning the pixel count.
#[inline]
pub(crate) fn check_pixel_count(
    width: u32,
    height: u32,
    granularity: usize,
) -> Result<usize, ConvertError> {
    if width == 0 || height == 0 {
        return Err(ConvertError::ZeroBaseSize);
    }
    check_overflow_v2(width as usize, height as usize)?;
    let pixels = width as usize * height as usize;
    // Largest per pixel expansion is 3 samples of 2 bytes each.
    check_overflow_v2(pixels, 6)?;
    if pixels % granularity != 0 {
        return Err(ConvertError::Misaligned(Misalignment {
            width,
            height,
            granularity,
        }));
    }
    Ok(pixels)
}

#[inline]
pub(crate) fn check_source_plane(
    plane: usize,
    data: &[u8],
    expected: usize,
) -> Result<(), ConvertError> {
    if data.len() < expected {
        return Err(ConvertError::SourceSizeMismatch(MismatchedPlane {
            plane,
            size: MismatchedSize {
                expected,
                received: data.len(),
            },
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_destination_plane(
    plane: usize,
    data: &[u8],
    expected: usize,
) -> Result<(), ConvertError> {
    if data.len() < expected {
        return Err(ConvertError::DestinationSizeMismatch(MismatchedPlane {
            plane,
            size: MismatchedSize {
                expected,
                received: data.len(),
            },
        }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_count_gate() {
        assert_eq!(check_pixel_count(1920, 1080, 6), Ok(1920 * 1080));
        assert_eq!(
            check_pixel_count(2, 641, 6),
            Err(ConvertError::Misaligned(Misalignment {
                width: 2,
                height: 641,
                granularity: 6
            }))
        );
        assert_eq!(check_pixel_count(0, 10, 2), Err(ConvertError::ZeroBaseSize));
        assert!(check_pixel_count(u32::MAX, u32::MAX, 1).is_err() || usize::BITS > 64);
    }

    #[test]
    fn test_geometry_class() {
        let misaligned = check_pixel_count(3, 1, 2).unwrap_err();
        assert!(misaligned.is_invalid_geometry());
        assert!(!ConvertError::ChannelSubmitFailure { chunk: 0 }.is_invalid_geometry());
        assert!(!ConvertError::UnsupportedFormatPair(PixelFormat::V210, PixelFormat::Y210)
            .is_invalid_geometry());
        let plane = check_destination_plane(1, &[0u8; 3], 4).unwrap_err();
        assert_eq!(
            plane.to_string(),
            "Destination plane 1 must have at least 4 bytes, but it has 3"
        );
    }
}
