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
//! 4:4:4 pixel group conversions.
//!
//! RFC4175 4:4:4 groups carry (Cb, Y, Cr) or (R, G, B) per pixel. YUV planes are passed as
//! Y, Cb, Cr and GBR planes as G, B, R, both share the same bit layout on the wire.
use crate::capability::CapabilityLevel;
use crate::convert_error::ConvertError;
use crate::dispatch::{convert_planes, Conversion};
use crate::layouts::{DstPlanes, SrcPlanes};

#[inline]
fn unpack_444(
    conversion: Conversion,
    pg: &[u8],
    y_g: &mut [u16],
    b_r: &mut [u16],
    r_b: &mut [u16],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    convert_planes(
        conversion,
        level,
        &SrcPlanes::packed(pg),
        &mut DstPlanes::planar(y_g, b_r, r_b),
        width,
        height,
    )
}

#[inline]
fn pack_444(
    conversion: Conversion,
    y_g: &[u16],
    b_r: &[u16],
    r_b: &[u16],
    pg: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    convert_planes(
        conversion,
        level,
        &SrcPlanes::planar(y_g, b_r, r_b),
        &mut DstPlanes::packed(pg),
        width,
        height,
    )
}
/// Unpacks RFC4175 4:4:4 10 bit big endian pixel groups into Y, Cb and Cr planes.
///
/// # Arguments
///
/// * `pg` - RFC4175 4:4:4 10 bit big endian pixel groups, `width * height * 15 / 4` bytes.
/// * `y` - Luma plane, `width * height` cells.
/// * `cb`, `cr` - Chroma planes, `width * height` cells each.
/// * `level` - Highest vector tier the call may use.
///
/// Groups are 15 bytes per 4 pixels, `width * height` must be a multiple of 4.
pub fn rfc4175_444be10_to_yuv444p10le(
    pg: &[u8],
    y: &mut [u16],
    cb: &mut [u16],
    cr: &mut [u16],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    unpack_444(
        Conversion::Rfc444Be10ToYuv444p10,
        pg,
        y,
        cb,
        cr,
        width,
        height,
        level,
    )
}

/// Packs Y, Cb and Cr planes into RFC4175 4:4:4 10 bit big endian pixel groups.
///
/// # Arguments
///
/// * `y` - Luma plane, `width * height` cells.
/// * `cb`, `cr` - Chroma planes, `width * height` cells each.
/// * `pg` - RFC4175 4:4:4 10 bit big endian pixel groups, `width * height * 15 / 4` bytes.
/// * `level` - Highest vector tier the call may use.
///
/// Only the 10 low bits of each cell are kept.
pub fn yuv444p10le_to_rfc4175_444be10(
    y: &[u16],
    cb: &[u16],
    cr: &[u16],
    pg: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    pack_444(
        Conversion::Yuv444p10ToRfc444Be10,
        y,
        cb,
        cr,
        pg,
        width,
        height,
        level,
    )
}

/// Unpacks RFC4175 RGB 10 bit big endian pixel groups into G, B and R planes.
///
/// # Arguments
///
/// * `pg` - RFC4175 4:4:4 10 bit big endian pixel groups, `width * height * 15 / 4` bytes.
/// * `g` - Green plane, `width * height` cells.
/// * `b` - Blue plane, `width * height` cells.
/// * `r` - Red plane, `width * height` cells.
/// * `level` - Highest vector tier the call may use.
pub fn rfc4175_444be10_to_gbrp10le(
    pg: &[u8],
    g: &mut [u16],
    b: &mut [u16],
    r: &mut [u16],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    unpack_444(
        Conversion::Rfc444Be10ToYuv444p10,
        pg,
        g,
        r,
        b,
        width,
        height,
        level,
    )
}

/// Converts 10 bit G, B and R planes into RFC4175 4:4:4 10 bit big endian pixel groups.
///
/// # Arguments
///
/// * `g` - Green plane, `width * height` cells.
/// * `b` - Blue plane, `width * height` cells.
/// * `r` - Red plane, `width * height` cells.
/// * `pg` - RFC4175 4:4:4 10 bit big endian pixel groups, `width * height * 15 / 4` bytes.
/// * `level` - Highest vector tier the call may use.
pub fn gbrp10le_to_rfc4175_444be10(
    g: &[u16],
    b: &[u16],
    r: &[u16],
    pg: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    pack_444(
        Conversion::Yuv444p10ToRfc444Be10,
        g,
        r,
        b,
        pg,
        width,
        height,
        level,
    )
}

/// Converts RFC4175 4:4:4 10 bit little endian pixel groups into 10 bit 4:4:4 Y, Cb and Cr planes.
///
/// # Arguments
///
/// * `pg` - RFC4175 4:4:4 10 bit little endian pixel groups, `width * height * 15 / 4` bytes.
/// * `y` - Luma plane, `width * height` cells.
/// * `cb`, `cr` - Chroma planes, `width * height` cells each.
/// * `level` - Highest vector tier the call may use.
pub fn rfc4175_444le10_to_yuv444p10le(
    pg: &[u8],
    y: &mut [u16],
    cb: &mut [u16],
    cr: &mut [u16],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    unpack_444(
        Conversion::Rfc444Le10ToYuv444p10,
        pg,
        y,
        cb,
        cr,
        width,
        height,
        level,
    )
}

/// Converts 10 bit 4:4:4 Y, Cb and Cr planes into RFC4175 4:4:4 10 bit little endian pixel groups.
///
/// # Arguments
///
/// * `y` - Luma plane, `width * height` cells.
/// * `cb`, `cr` - Chroma planes, `width * height` cells each.
/// * `pg` - RFC4175 4:4:4 10 bit little endian pixel groups, `width * height * 15 / 4` bytes.
/// * `level` - Highest vector tier the call may use.
pub fn yuv444p10le_to_rfc4175_444le10(
    y: &[u16],
    cb: &[u16],
    cr: &[u16],
    pg: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    pack_444(
        Conversion::Yuv444p10ToRfc444Le10,
        y,
        cb,
        cr,
        pg,
        width,
        height,
        level,
    )
}

/// Unpacks RFC4175 RGB 10 bit little endian pixel groups into G, B and R planes.
///
/// # Arguments
///
/// * `pg` - RFC4175 4:4:4 10 bit little endian pixel groups, `width * height * 15 / 4` bytes.
/// * `g` - Green plane, `width * height` cells.
/// * `b` - Blue plane, `width * height` cells.
/// * `r` - Red plane, `width * height` cells.
/// * `level` - Highest vector tier the call may use.
pub fn rfc4175_444le10_to_gbrp10le(
    pg: &[u8],
    g: &mut [u16],
    b: &mut [u16],
    r: &mut [u16],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    unpack_444(
        Conversion::Rfc444Le10ToYuv444p10,
        pg,
        g,
        r,
        b,
        width,
        height,
        level,
    )
}

/// Converts 10 bit G, B and R planes into RFC4175 4:4:4 10 bit little endian pixel groups.
///
/// # Arguments
///
/// * `g` - Green plane, `width * height` cells.
/// * `b` - Blue plane, `width * height` cells.
/// * `r` - Red plane, `width * height` cells.
/// * `pg` - RFC4175 4:4:4 10 bit little endian pixel groups, `width * height * 15 / 4` bytes.
/// * `level` - Highest vector tier the call may use.
pub fn gbrp10le_to_rfc4175_444le10(
    g: &[u16],
    b: &[u16],
    r: &[u16],
    pg: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    pack_444(
        Conversion::Yuv444p10ToRfc444Le10,
        g,
        r,
        b,
        pg,
        width,
        height,
        level,
    )
}

/// Unpacks RFC4175 4:4:4 12 bit big endian pixel groups into Y, Cb and Cr planes.
///
/// # Arguments
///
/// * `pg` - RFC4175 4:4:4 12 bit big endian pixel groups, `width * height * 9 / 2` bytes.
/// * `y` - Luma plane, `width * height` cells.
/// * `cb`, `cr` - Chroma planes, `width * height` cells each.
/// * `level` - Highest vector tier the call may use.
///
/// Groups are 9 bytes per 2 pixels, `width * height` must be a multiple of 2.
pub fn rfc4175_444be12_to_yuv444p12le(
    pg: &[u8],
    y: &mut [u16],
    cb: &mut [u16],
    cr: &mut [u16],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    unpack_444(
        Conversion::Rfc444Be12ToYuv444p12,
        pg,
        y,
        cb,
        cr,
        width,
        height,
        level,
    )
}

/// Converts 12 bit 4:4:4 Y, Cb and Cr planes into RFC4175 4:4:4 12 bit big endian pixel groups.
///
/// # Arguments
///
/// * `y` - Luma plane, `width * height` cells.
/// * `cb`, `cr` - Chroma planes, `width * height` cells each.
/// * `pg` - RFC4175 4:4:4 12 bit big endian pixel groups, `width * height * 9 / 2` bytes.
/// * `level` - Highest vector tier the call may use.
pub fn yuv444p12le_to_rfc4175_444be12(
    y: &[u16],
    cb: &[u16],
    cr: &[u16],
    pg: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    pack_444(
        Conversion::Yuv444p12ToRfc444Be12,
        y,
        cb,
        cr,
        pg,
        width,
        height,
        level,
    )
}

/// Converts RFC4175 4:4:4 12 bit big endian pixel groups into 12 bit G, B and R planes.
///
/// # Arguments
///
/// * `pg` - RFC4175 4:4:4 12 bit big endian pixel groups, `width * height * 9 / 2` bytes.
/// * `g` - Green plane, `width * height` cells.
/// * `b` - Blue plane, `width * height` cells.
/// * `r` - Red plane, `width * height` cells.
/// * `level` - Highest vector tier the call may use.
pub fn rfc4175_444be12_to_gbrp12le(
    pg: &[u8],
    g: &mut [u16],
    b: &mut [u16],
    r: &mut [u16],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    unpack_444(
        Conversion::Rfc444Be12ToYuv444p12,
        pg,
        g,
        r,
        b,
        width,
        height,
        level,
    )
}

/// Converts 12 bit G, B and R planes into RFC4175 4:4:4 12 bit big endian pixel groups.
///
/// # Arguments
///
/// * `g` - Green plane, `width * height` cells.
/// * `b` - Blue plane, `width * height` cells.
/// * `r` - Red plane, `width * height` cells.
/// * `pg` - RFC4175 4:4:4 12 bit big endian pixel groups, `width * height * 9 / 2` bytes.
/// * `level` - Highest vector tier the call may use.
pub fn gbrp12le_to_rfc4175_444be12(
    g: &[u16],
    b: &[u16],
    r: &[u16],
    pg: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    pack_444(
        Conversion::Yuv444p12ToRfc444Be12,
        g,
        r,
        b,
        pg,
        width,
        height,
        level,
    )
}

/// Converts RFC4175 4:4:4 12 bit little endian pixel groups into 12 bit 4:4:4 Y, Cb and Cr planes.
///
/// # Arguments
///
/// * `pg` - RFC4175 4:4:4 12 bit little endian pixel groups, `width * height * 9 / 2` bytes.
/// * `y` - Luma plane, `width * height` cells.
/// * `cb`, `cr` - Chroma planes, `width * height` cells each.
/// * `level` - Highest vector tier the call may use.
pub fn rfc4175_444le12_to_yuv444p12le(
    pg: &[u8],
    y: &mut [u16],
    cb: &mut [u16],
    cr: &mut [u16],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    unpack_444(
        Conversion::Rfc444Le12ToYuv444p12,
        pg,
        y,
        cb,
        cr,
        width,
        height,
        level,
    )
}

/// Converts 12 bit 4:4:4 Y, Cb and Cr planes into RFC4175 4:4:4 12 bit little endian pixel groups.
///
/// # Arguments
///
/// * `y` - Luma plane, `width * height` cells.
/// * `cb`, `cr` - Chroma planes, `width * height` cells each.
/// * `pg` - RFC4175 4:4:4 12 bit little endian pixel groups, `width * height * 9 / 2` bytes.
/// * `level` - Highest vector tier the call may use.
pub fn yuv444p12le_to_rfc4175_444le12(
    y: &[u16],
    cb: &[u16],
    cr: &[u16],
    pg: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    pack_444(
        Conversion::Yuv444p12ToRfc444Le12,
        y,
        cb,
        cr,
        pg,
        width,
        height,
        level,
    )
}

/// Converts RFC4175 4:4:4 12 bit little endian pixel groups into 12 bit G, B and R planes.
///
/// # Arguments
///
/// * `pg` - RFC4175 4:4:4 12 bit little endian pixel groups, `width * height * 9 / 2` bytes.
/// * `g` - Green plane, `width * height` cells.
/// * `b` - Blue plane, `width * height` cells.
/// * `r` - Red plane, `width * height` cells.
/// * `level` - Highest vector tier the call may use.
pub fn rfc4175_444le12_to_gbrp12le(
    pg: &[u8],
    g: &mut [u16],
    b: &mut [u16],
    r: &mut [u16],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    unpack_444(
        Conversion::Rfc444Le12ToYuv444p12,
        pg,
        g,
        r,
        b,
        width,
        height,
        level,
    )
}

/// Converts 12 bit G, B and R planes into RFC4175 4:4:4 12 bit little endian pixel groups.
///
/// # Arguments
///
/// * `g` - Green plane, `width * height` cells.
/// * `b` - Blue plane, `width * height` cells.
/// * `r` - Red plane, `width * height` cells.
/// * `pg` - RFC4175 4:4:4 12 bit little endian pixel groups, `width * height * 9 / 2` bytes.
/// * `level` - Highest vector tier the call may use.
pub fn gbrp12le_to_rfc4175_444le12(
    g: &[u16],
    b: &[u16],
    r: &[u16],
    pg: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    pack_444(
        Conversion::Yuv444p12ToRfc444Le12,
        g,
        r,
        b,
        pg,
        width,
        height,
        level,
    )
}

/// Reverses the bit order of RFC4175 4:4:4 10 bit pixel groups, big endian to little endian.
///
/// # Arguments
///
/// * `pg_be` - RFC4175 4:4:4 10 bit big endian pixel groups, `width * height * 15 / 4` bytes.
/// * `pg_le` - RFC4175 4:4:4 10 bit little endian pixel groups, `width * height * 15 / 4` bytes.
/// * `level` - Highest vector tier the call may use.
pub fn rfc4175_444be10_to_444le10(
    pg_be: &[u8],
    pg_le: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    convert_planes(
        Conversion::Rfc444Be10ToRfc444Le10,
        level,
        &SrcPlanes::packed(pg_be),
        &mut DstPlanes::packed(pg_le),
        width,
        height,
    )
}

/// Reverses the bit order of RFC4175 4:4:4 10 bit pixel groups, little endian to big endian.
///
/// # Arguments
///
/// * `pg_le` - RFC4175 4:4:4 10 bit little endian pixel groups, `width * height * 15 / 4` bytes.
/// * `pg_be` - RFC4175 4:4:4 10 bit big endian pixel groups, `width * height * 15 / 4` bytes.
/// * `level` - Highest vector tier the call may use.
pub fn rfc4175_444le10_to_444be10(
    pg_le: &[u8],
    pg_be: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    convert_planes(
        Conversion::Rfc444Le10ToRfc444Be10,
        level,
        &SrcPlanes::packed(pg_le),
        &mut DstPlanes::packed(pg_be),
        width,
        height,
    )
}

/// Reverses the bit order of RFC4175 4:4:4 12 bit pixel groups, big endian to little endian.
///
/// # Arguments
///
/// * `pg_be` - RFC4175 4:4:4 12 bit big endian pixel groups, `width * height * 9 / 2` bytes.
/// * `pg_le` - RFC4175 4:4:4 12 bit little endian pixel groups, `width * height * 9 / 2` bytes.
/// * `level` - Highest vector tier the call may use.
pub fn rfc4175_444be12_to_444le12(
    pg_be: &[u8],
    pg_le: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    convert_planes(
        Conversion::Rfc444Be12ToRfc444Le12,
        level,
        &SrcPlanes::packed(pg_be),
        &mut DstPlanes::packed(pg_le),
        width,
        height,
    )
}

/// Reverses the bit order of RFC4175 4:4:4 12 bit pixel groups, little endian to big endian.
///
/// # Arguments
///
/// * `pg_le` - RFC4175 4:4:4 12 bit little endian pixel groups, `width * height * 9 / 2` bytes.
/// * `pg_be` - RFC4175 4:4:4 12 bit big endian pixel groups, `width * height * 9 / 2` bytes.
/// * `level` - Highest vector tier the call may use.
pub fn rfc4175_444le12_to_444be12(
    pg_le: &[u8],
    pg_be: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    convert_planes(
        Conversion::Rfc444Le12ToRfc444Be12,
        level,
        &SrcPlanes::packed(pg_le),
        &mut DstPlanes::packed(pg_be),
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::{frame_size, PixelFormat};
    use rand::Rng;

    #[test]
    fn test_gbr_planes_follow_rgb_order() {
        // R = 0x3ff, G = 0x001, B = 0x200 then zeros, big endian bit order.
        let mut pg = [0u8; 15];
        pg[0] = 0xFF;
        pg[1] = 0xC0;
        pg[2] = 0x18;
        let (mut g, mut b, mut r) = ([0u16; 4], [0u16; 4], [0u16; 4]);
        rfc4175_444be10_to_gbrp10le(&pg, &mut g, &mut b, &mut r, 4, 1, CapabilityLevel::Auto)
            .unwrap();
        assert_eq!((r[0], g[0], b[0]), (0x3ff, 0x001, 0x200));

        let (mut y, mut cb, mut cr) = ([0u16; 4], [0u16; 4], [0u16; 4]);
        rfc4175_444be10_to_yuv444p10le(&pg, &mut y, &mut cb, &mut cr, 4, 1, CapabilityLevel::None)
            .unwrap();
        assert_eq!((cb[0], y[0], cr[0]), (0x3ff, 0x001, 0x200));

        let mut packed = [0u8; 15];
        gbrp10le_to_rfc4175_444be10(&g, &b, &r, &mut packed, 4, 1, CapabilityLevel::Auto)
            .unwrap();
        assert_eq!(packed, pg);
    }

    #[test]
    fn test_granularity_of_10bit_groups() {
        let pg = [0u8; 30];
        let mut planes = [[0u16; 8]; 3];
        let [y, cb, cr] = &mut planes;
        let result = rfc4175_444le10_to_yuv444p10le(&pg, y, cb, cr, 6, 1, CapabilityLevel::Auto);
        assert!(matches!(result, Err(ConvertError::Misaligned(_))));
        assert!(planes.iter().flatten().all(|&v| v == 0));
    }

    #[test]
    fn test_12bit_round_trip() {
        let (width, height) = (1922u32, 5u32);
        let pixels = (width * height) as usize;
        let mut rng = rand::rng();
        let planes: Vec<Vec<u16>> = (0..3)
            .map(|_| (0..pixels).map(|_| rng.random_range(0..4096u16)).collect())
            .collect();
        let size = frame_size(PixelFormat::RgbRfc4175Pg2Le12, width, height);
        let mut le = vec![0u8; size];
        gbrp12le_to_rfc4175_444le12(
            &planes[0],
            &planes[1],
            &planes[2],
            &mut le,
            width,
            height,
            CapabilityLevel::Auto,
        )
        .unwrap();
        let mut be = vec![0u8; size];
        rfc4175_444le12_to_444be12(&le, &mut be, width, height, CapabilityLevel::Avx2).unwrap();
        let mut back: Vec<Vec<u16>> = vec![vec![0u16; pixels]; 3];
        let [g, b, r] = back.as_mut_slice() else {
            unreachable!()
        };
        rfc4175_444be12_to_gbrp12le(&be, g, b, r, width, height, CapabilityLevel::None).unwrap();
        assert_eq!(back, planes);
    }
}
