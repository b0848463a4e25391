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
use crate::convert_error::ConvertError;
use crate::dispatch::{convert_planes, Conversion};
use crate::layouts::{DstPlanes, SrcPlanes};

#[inline]
fn packed_to_packed(
    conversion: Conversion,
    src: &[u8],
    dst: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    convert_planes(
        conversion,
        level,
        &SrcPlanes::packed(src),
        &mut DstPlanes::packed(dst),
        width,
        height,
    )
}

#[inline]
fn packed_to_planar(
    conversion: Conversion,
    pg: &[u8],
    y: &mut [u16],
    cb: &mut [u16],
    cr: &mut [u16],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    convert_planes(
        conversion,
        level,
        &SrcPlanes::packed(pg),
        &mut DstPlanes::planar(y, cb, cr),
        width,
        height,
    )
}

#[inline]
fn planar_to_packed(
    conversion: Conversion,
    y: &[u16],
    cb: &[u16],
    cr: &[u16],
    pg: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    convert_planes(
        conversion,
        level,
        &SrcPlanes::planar(y, cb, cr),
        &mut DstPlanes::packed(pg),
        width,
        height,
    )
}

/// Unpacks RFC4175 4:2:2 10 bit big endian pixel groups into 16 bit planes.
///
/// # Arguments
///
/// * `pg` - Pixel groups, `width * height * 5 / 2` bytes.
/// * `y` - Luma plane, `width * height` cells.
/// * `cb`, `cr` - Chroma planes, `width * height / 2` cells each.
/// * `level` - Highest vector tier the call may use.
///
/// Fails without writing when `width * height` is odd or any buffer is too small.
pub fn rfc4175_422be10_to_yuv422p10le(
    pg: &[u8],
    y: &mut [u16],
    cb: &mut [u16],
    cr: &mut [u16],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    packed_to_planar(
        Conversion::Rfc422Be10ToYuv422p10,
        pg,
        y,
        cb,
        cr,
        width,
        height,
        level,
    )
}

/// Packs 16 bit planes into RFC4175 4:2:2 10 bit big endian pixel groups.
///
/// # Arguments
///
/// * `y` - Luma plane, `width * height` cells.
/// * `cb`, `cr` - Chroma planes, `width * height / 2` cells each.
/// * `pg` - RFC4175 4:2:2 10 bit big endian pixel groups, `width * height * 5 / 2` bytes.
/// * `level` - Highest vector tier the call may use.
///
/// Bits above the 10 significant ones in each cell are discarded.
pub fn yuv422p10le_to_rfc4175_422be10(
    y: &[u16],
    cb: &[u16],
    cr: &[u16],
    pg: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    planar_to_packed(
        Conversion::Yuv422p10ToRfc422Be10,
        y,
        cb,
        cr,
        pg,
        width,
        height,
        level,
    )
}

/// Converts RFC4175 4:2:2 10 bit little endian pixel groups into 10 bit 4:2:2 Y, Cb and Cr planes.
///
/// # Arguments
///
/// * `pg` - RFC4175 4:2:2 10 bit little endian pixel groups, `width * height * 5 / 2` bytes.
/// * `y` - Luma plane, `width * height` cells.
/// * `cb`, `cr` - Chroma planes, `width * height / 2` cells each.
/// * `level` - Highest vector tier the call may use.
pub fn rfc4175_422le10_to_yuv422p10le(
    pg: &[u8],
    y: &mut [u16],
    cb: &mut [u16],
    cr: &mut [u16],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    packed_to_planar(
        Conversion::Rfc422Le10ToYuv422p10,
        pg,
        y,
        cb,
        cr,
        width,
        height,
        level,
    )
}

/// Converts 10 bit 4:2:2 Y, Cb and Cr planes into RFC4175 4:2:2 10 bit little endian pixel groups.
///
/// # Arguments
///
/// * `y` - Luma plane, `width * height` cells.
/// * `cb`, `cr` - Chroma planes, `width * height / 2` cells each.
/// * `pg` - RFC4175 4:2:2 10 bit little endian pixel groups, `width * height * 5 / 2` bytes.
/// * `level` - Highest vector tier the call may use.
pub fn yuv422p10le_to_rfc4175_422le10(
    y: &[u16],
    cb: &[u16],
    cr: &[u16],
    pg: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    planar_to_packed(
        Conversion::Yuv422p10ToRfc422Le10,
        y,
        cb,
        cr,
        pg,
        width,
        height,
        level,
    )
}

/// Reverses the bit order of RFC4175 4:2:2 10 bit pixel groups, big endian to little endian.
///
/// # Arguments
///
/// * `pg_be` - RFC4175 4:2:2 10 bit big endian pixel groups, `width * height * 5 / 2` bytes.
/// * `pg_le` - RFC4175 4:2:2 10 bit little endian pixel groups, `width * height * 5 / 2` bytes.
/// * `level` - Highest vector tier the call may use.
pub fn rfc4175_422be10_to_422le10(
    pg_be: &[u8],
    pg_le: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    packed_to_packed(
        Conversion::Rfc422Be10ToRfc422Le10,
        pg_be,
        pg_le,
        width,
        height,
        level,
    )
}

/// Reverses the bit order of RFC4175 4:2:2 10 bit pixel groups, little endian to big endian.
///
/// # Arguments
///
/// * `pg_le` - RFC4175 4:2:2 10 bit little endian pixel groups, `width * height * 5 / 2` bytes.
/// * `pg_be` - RFC4175 4:2:2 10 bit big endian pixel groups, `width * height * 5 / 2` bytes.
/// * `level` - Highest vector tier the call may use.
pub fn rfc4175_422le10_to_422be10(
    pg_le: &[u8],
    pg_be: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    packed_to_packed(
        Conversion::Rfc422Le10ToRfc422Be10,
        pg_le,
        pg_be,
        width,
        height,
        level,
    )
}

/// Truncates RFC4175 4:2:2 10 bit big endian pixel groups to 8 bit UYVY, dropping the two low bits.
///
/// # Arguments
///
/// * `pg_be` - RFC4175 4:2:2 10 bit big endian pixel groups, `width * height * 5 / 2` bytes.
/// * `uyvy` - 8 bit samples ordered Cb Y0 Cr Y1, `width * height * 2` bytes.
/// * `level` - Highest vector tier the call may use.
pub fn rfc4175_422be10_to_422le8(
    pg_be: &[u8],
    uyvy: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    packed_to_packed(
        Conversion::Rfc422Be10ToUyvy,
        pg_be,
        uyvy,
        width,
        height,
        level,
    )
}

/// Widens 8 bit UYVY to RFC4175 4:2:2 10 bit big endian pixel groups, low bits are zero.
///
/// # Arguments
///
/// * `uyvy` - 8 bit samples ordered Cb Y0 Cr Y1, `width * height * 2` bytes.
/// * `pg_be` - RFC4175 4:2:2 10 bit big endian pixel groups, `width * height * 5 / 2` bytes.
/// * `level` - Highest vector tier the call may use.
pub fn rfc4175_422le8_to_422be10(
    uyvy: &[u8],
    pg_be: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    packed_to_packed(
        Conversion::UyvyToRfc422Be10,
        uyvy,
        pg_be,
        width,
        height,
        level,
    )
}

/// Repacks RFC4175 4:2:2 10 bit little endian pixel groups into V210 words.
///
/// # Arguments
///
/// * `pg_le` - RFC4175 4:2:2 10 bit little endian pixel groups, `width * height * 5 / 2` bytes.
/// * `v210` - V210 words, `width * height * 8 / 3` bytes.
/// * `level` - Highest vector tier the call may use.
///
/// V210 needs `width * height` to be a multiple of 6, other sizes fail and leave `v210` untouched.
pub fn rfc4175_422le10_to_v210(
    pg_le: &[u8],
    v210: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    packed_to_packed(
        Conversion::Rfc422Le10ToV210,
        pg_le,
        v210,
        width,
        height,
        level,
    )
}

/// Converts V210 words into RFC4175 4:2:2 10 bit little endian pixel groups.
///
/// # Arguments
///
/// * `v210` - V210 words, `width * height * 8 / 3` bytes.
/// * `pg_le` - RFC4175 4:2:2 10 bit little endian pixel groups, `width * height * 5 / 2` bytes.
/// * `level` - Highest vector tier the call may use.
pub fn v210_to_rfc4175_422le10(
    v210: &[u8],
    pg_le: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    packed_to_packed(
        Conversion::V210ToRfc422Le10,
        v210,
        pg_le,
        width,
        height,
        level,
    )
}

/// Repacks RFC4175 4:2:2 10 bit big endian pixel groups into V210 words.
///
/// # Arguments
///
/// * `pg_be` - RFC4175 4:2:2 10 bit big endian pixel groups, `width * height * 5 / 2` bytes.
/// * `v210` - V210 words, `width * height * 8 / 3` bytes.
/// * `level` - Highest vector tier the call may use.
///
/// V210 needs `width * height` to be a multiple of 6, other sizes fail and leave `v210` untouched.
pub fn rfc4175_422be10_to_v210(
    pg_be: &[u8],
    v210: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    packed_to_packed(
        Conversion::Rfc422Be10ToV210,
        pg_be,
        v210,
        width,
        height,
        level,
    )
}

/// Converts V210 words into RFC4175 4:2:2 10 bit big endian pixel groups.
///
/// # Arguments
///
/// * `v210` - V210 words, `width * height * 8 / 3` bytes.
/// * `pg_be` - RFC4175 4:2:2 10 bit big endian pixel groups, `width * height * 5 / 2` bytes.
/// * `level` - Highest vector tier the call may use.
pub fn v210_to_rfc4175_422be10(
    v210: &[u8],
    pg_be: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    packed_to_packed(
        Conversion::V210ToRfc422Be10,
        v210,
        pg_be,
        width,
        height,
        level,
    )
}

/// Expands RFC4175 4:2:2 10 bit big endian pixel groups into Y210 cells.
///
/// # Arguments
///
/// * `pg_be` - RFC4175 4:2:2 10 bit big endian pixel groups, `width * height * 5 / 2` bytes.
/// * `y210` - Cells ordered Y0 Cb Y1 Cr, `width * height * 2` values.
/// * `level` - Highest vector tier the call may use.
///
/// Each cell holds a sample in its 10 high bits, cells run Y0, Cb, Y1, Cr.
pub fn rfc4175_422be10_to_y210(
    pg_be: &[u8],
    y210: &mut [u16],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    packed_to_packed(
        Conversion::Rfc422Be10ToY210,
        pg_be,
        crate::layouts::u16_bytes_mut(y210),
        width,
        height,
        level,
    )
}

/// Packs Y210 cells into RFC4175 4:2:2 10 bit big endian pixel groups, the 6 low bits are ignored.
///
/// # Arguments
///
/// * `y210` - Cells ordered Y0 Cb Y1 Cr, `width * height * 2` values.
/// * `pg_be` - RFC4175 4:2:2 10 bit big endian pixel groups, `width * height * 5 / 2` bytes.
/// * `level` - Highest vector tier the call may use.
pub fn y210_to_rfc4175_422be10(
    y210: &[u16],
    pg_be: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    packed_to_packed(
        Conversion::Y210ToRfc422Be10,
        crate::layouts::u16_bytes(y210),
        pg_be,
        width,
        height,
        level,
    )
}

/// Unpacks RFC4175 4:2:2 12 bit big endian pixel groups into 16 bit planes.
///
/// # Arguments
///
/// * `pg` - RFC4175 4:2:2 12 bit big endian pixel groups, `width * height * 3` bytes.
/// * `y` - Luma plane, `width * height` cells.
/// * `cb`, `cr` - Chroma planes, `width * height / 2` cells each.
/// * `level` - Highest vector tier the call may use.
pub fn rfc4175_422be12_to_yuv422p12le(
    pg: &[u8],
    y: &mut [u16],
    cb: &mut [u16],
    cr: &mut [u16],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    packed_to_planar(
        Conversion::Rfc422Be12ToYuv422p12,
        pg,
        y,
        cb,
        cr,
        width,
        height,
        level,
    )
}

/// Converts 12 bit 4:2:2 Y, Cb and Cr planes into RFC4175 4:2:2 12 bit big endian pixel groups.
///
/// # Arguments
///
/// * `y` - Luma plane, `width * height` cells.
/// * `cb`, `cr` - Chroma planes, `width * height / 2` cells each.
/// * `pg` - RFC4175 4:2:2 12 bit big endian pixel groups, `width * height * 3` bytes.
/// * `level` - Highest vector tier the call may use.
pub fn yuv422p12le_to_rfc4175_422be12(
    y: &[u16],
    cb: &[u16],
    cr: &[u16],
    pg: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    planar_to_packed(
        Conversion::Yuv422p12ToRfc422Be12,
        y,
        cb,
        cr,
        pg,
        width,
        height,
        level,
    )
}

/// Converts RFC4175 4:2:2 12 bit little endian pixel groups into 12 bit 4:2:2 Y, Cb and Cr planes.
///
/// # Arguments
///
/// * `pg` - RFC4175 4:2:2 12 bit little endian pixel groups, `width * height * 3` bytes.
/// * `y` - Luma plane, `width * height` cells.
/// * `cb`, `cr` - Chroma planes, `width * height / 2` cells each.
/// * `level` - Highest vector tier the call may use.
pub fn rfc4175_422le12_to_yuv422p12le(
    pg: &[u8],
    y: &mut [u16],
    cb: &mut [u16],
    cr: &mut [u16],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    packed_to_planar(
        Conversion::Rfc422Le12ToYuv422p12,
        pg,
        y,
        cb,
        cr,
        width,
        height,
        level,
    )
}

/// Converts 12 bit 4:2:2 Y, Cb and Cr planes into RFC4175 4:2:2 12 bit little endian pixel groups.
///
/// # Arguments
///
/// * `y` - Luma plane, `width * height` cells.
/// * `cb`, `cr` - Chroma planes, `width * height / 2` cells each.
/// * `pg` - RFC4175 4:2:2 12 bit little endian pixel groups, `width * height * 3` bytes.
/// * `level` - Highest vector tier the call may use.
pub fn yuv422p12le_to_rfc4175_422le12(
    y: &[u16],
    cb: &[u16],
    cr: &[u16],
    pg: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    planar_to_packed(
        Conversion::Yuv422p12ToRfc422Le12,
        y,
        cb,
        cr,
        pg,
        width,
        height,
        level,
    )
}

/// Reverses the bit order of RFC4175 4:2:2 12 bit pixel groups, big endian to little endian.
///
/// # Arguments
///
/// * `pg_be` - RFC4175 4:2:2 12 bit big endian pixel groups, `width * height * 3` bytes.
/// * `pg_le` - RFC4175 4:2:2 12 bit little endian pixel groups, `width * height * 3` bytes.
/// * `level` - Highest vector tier the call may use.
pub fn rfc4175_422be12_to_422le12(
    pg_be: &[u8],
    pg_le: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    packed_to_packed(
        Conversion::Rfc422Be12ToRfc422Le12,
        pg_be,
        pg_le,
        width,
        height,
        level,
    )
}

/// Reverses the bit order of RFC4175 4:2:2 12 bit pixel groups, little endian to big endian.
///
/// # Arguments
///
/// * `pg_le` - RFC4175 4:2:2 12 bit little endian pixel groups, `width * height * 3` bytes.
/// * `pg_be` - RFC4175 4:2:2 12 bit big endian pixel groups, `width * height * 3` bytes.
/// * `level` - Highest vector tier the call may use.
pub fn rfc4175_422le12_to_422be12(
    pg_le: &[u8],
    pg_be: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    packed_to_packed(
        Conversion::Rfc422Le12ToRfc422Be12,
        pg_le,
        pg_be,
        width,
        height,
        level,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::{frame_size, PixelFormat};
    use rand::Rng;

    #[test]
    fn test_planar_round_trip_10bit() {
        let (width, height) = (1920u32, 4u32);
        let pixels = (width * height) as usize;
        let mut rng = rand::rng();
        let y: Vec<u16> = (0..pixels).map(|_| rng.random_range(0..1024u16)).collect();
        let cb: Vec<u16> = (0..pixels / 2).map(|_| rng.random_range(0..1024u16)).collect();
        let cr: Vec<u16> = (0..pixels / 2).map(|_| rng.random_range(0..1024u16)).collect();
        let mut pg = vec![0u8; frame_size(PixelFormat::Yuv422Rfc4175Pg2Be10, width, height)];
        yuv422p10le_to_rfc4175_422be10(&y, &cb, &cr, &mut pg, width, height, CapabilityLevel::Auto)
            .unwrap();
        let mut y_back = vec![0u16; pixels];
        let mut cb_back = vec![0u16; pixels / 2];
        let mut cr_back = vec![0u16; pixels / 2];
        rfc4175_422be10_to_yuv422p10le(
            &pg,
            &mut y_back,
            &mut cb_back,
            &mut cr_back,
            width,
            height,
            CapabilityLevel::None,
        )
        .unwrap();
        assert_eq!(y_back, y);
        assert_eq!(cb_back, cb);
        assert_eq!(cr_back, cr);
    }

    #[test]
    fn test_known_group_unpacks() {
        // Cb = 0x3ff, Y0 = 0, Cr = 0x155, Y1 = 0x2aa
        let pg = [0xFFu8, 0xC0, 0x05, 0x56, 0xAA];
        let mut y = [0u16; 2];
        let mut cb = [0u16; 1];
        let mut cr = [0u16; 1];
        rfc4175_422be10_to_yuv422p10le(&pg, &mut y, &mut cb, &mut cr, 2, 1, CapabilityLevel::Auto)
            .unwrap();
        assert_eq!(y, [0, 0x2aa]);
        assert_eq!(cb, [0x3ff]);
        assert_eq!(cr, [0x155]);

        let mut y210 = [0u16; 4];
        rfc4175_422be10_to_y210(&pg, &mut y210, 2, 1, CapabilityLevel::Auto).unwrap();
        assert_eq!(y210, [0, 0x3ff << 6, 0x2aa << 6, 0x155 << 6]);

        let mut uyvy = [0u8; 4];
        rfc4175_422be10_to_422le8(&pg, &mut uyvy, 2, 1, CapabilityLevel::Auto).unwrap();
        assert_eq!(uyvy, [0xff, 0x00, 0x55, 0xaa]);
    }

    #[test]
    fn test_odd_pixel_count_is_rejected() {
        let pg = [0u8; 10];
        let mut le = [0u8; 10];
        let result = rfc4175_422be10_to_422le10(&pg, &mut le, 3, 1, CapabilityLevel::Auto);
        assert!(result.unwrap_err().is_invalid_geometry());
        let result = rfc4175_422be10_to_422le10(&pg, &mut le, 0, 2, CapabilityLevel::Auto);
        assert_eq!(result, Err(ConvertError::ZeroBaseSize));
    }

    #[test]
    fn test_v210_both_bit_orders_agree() {
        let (width, height) = (722u32, 111u32);
        let mut rng = rand::rng();
        let be: Vec<u8> = (0..frame_size(PixelFormat::Yuv422Rfc4175Pg2Be10, width, height))
            .map(|_| rng.random())
            .collect();
        let mut le = vec![0u8; be.len()];
        rfc4175_422be10_to_422le10(&be, &mut le, width, height, CapabilityLevel::Auto).unwrap();
        let size = frame_size(PixelFormat::V210, width, height);
        let mut from_be = vec![0u8; size];
        let mut from_le = vec![0u8; size];
        rfc4175_422be10_to_v210(&be, &mut from_be, width, height, CapabilityLevel::Auto).unwrap();
        rfc4175_422le10_to_v210(&le, &mut from_le, width, height, CapabilityLevel::None).unwrap();
        assert_eq!(from_be, from_le);
        let mut back = vec![0u8; be.len()];
        v210_to_rfc4175_422le10(&from_le, &mut back, width, height, CapabilityLevel::Auto).unwrap();
        assert_eq!(back, le);
    }

    #[test]
    fn test_12bit_bit_orders_round_trip() {
        let (width, height) = (1280u32, 3u32);
        let mut rng = rand::rng();
        let be: Vec<u8> = (0..frame_size(PixelFormat::Yuv422Rfc4175Pg2Be12, width, height))
            .map(|_| rng.random())
            .collect();
        let mut le = vec![0u8; be.len()];
        let mut back = vec![0u8; be.len()];
        rfc4175_422be12_to_422le12(&be, &mut le, width, height, CapabilityLevel::Auto).unwrap();
        rfc4175_422le12_to_422be12(&le, &mut back, width, height, CapabilityLevel::Avx2).unwrap();
        assert_eq!(back, be);
    }
}
