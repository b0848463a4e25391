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
use crate::dispatch::Conversion;
use crate::dma::{convert_staged, DeviceSlice, DmaChannel};
use crate::layouts::{u16_bytes_mut, DstPlanes};

#[inline]
fn packed_source(pg: DeviceSlice<'_, u8>) -> [DeviceSlice<'_, u8>; 3] {
    [pg, DeviceSlice::empty(), DeviceSlice::empty()]
}

/// Unpacks RFC4175 4:2:2 10 bit big endian pixel groups into 16 bit planes.
///
/// # Arguments
///
/// * `channel` - Copy engine the source is staged through.
/// * `pg` - RFC4175 4:2:2 10 bit big endian pixel groups, `width * height * 5 / 2` bytes,
///   read through its device address.
/// * `y` - Luma plane, `width * height` cells.
/// * `cb`, `cr` - Chroma planes, `width * height / 2` cells each.
/// * `level` - Highest vector tier the call may use.
///
/// `pg` is read through `channel` in staged chunks. Output equals
/// [rfc4175_422be10_to_yuv422p10le](crate::rfc4175_422be10_to_yuv422p10le) for the same input.
///
/// # Errors
///
/// Geometry failures are reported before anything is written. [ConvertError::ChannelSubmitFailure]
/// leaves chunks converted before the failing one in place.
pub fn rfc4175_422be10_to_yuv422p10le_dma<C: DmaChannel + ?Sized>(
    channel: &mut C,
    pg: DeviceSlice<'_, u8>,
    y: &mut [u16],
    cb: &mut [u16],
    cr: &mut [u16],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    convert_staged(
        channel,
        Conversion::Rfc422Be10ToYuv422p10,
        level,
        packed_source(pg),
        &mut DstPlanes::planar(y, cb, cr),
        width,
        height,
    )
}

/// Packs 16 bit planes read through `channel` into RFC4175 4:2:2 10 bit big endian pixel groups.
///
/// # Arguments
///
/// * `channel` - Copy engine the source is staged through.
/// * `y` - Luma plane, `width * height` cells.
/// * `cb`, `cr` - Chroma planes, `width * height / 2` cells each. All three are read through
///   their device addresses.
/// * `pg` - RFC4175 4:2:2 10 bit big endian pixel groups, `width * height * 5 / 2` bytes.
/// * `level` - Highest vector tier the call may use.
pub fn yuv422p10le_to_rfc4175_422be10_dma<C: DmaChannel + ?Sized>(
    channel: &mut C,
    y: DeviceSlice<'_, u16>,
    cb: DeviceSlice<'_, u16>,
    cr: DeviceSlice<'_, u16>,
    pg: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    convert_staged(
        channel,
        Conversion::Yuv422p10ToRfc422Be10,
        level,
        [y.as_bytes(), cb.as_bytes(), cr.as_bytes()],
        &mut DstPlanes::packed(pg),
        width,
        height,
    )
}

/// Staged variant of [rfc4175_422be10_to_422le10](crate::rfc4175_422be10_to_422le10).
///
/// # Arguments
///
/// * `channel` - Copy engine the source is staged through.
/// * `pg_be` - RFC4175 4:2:2 10 bit big endian pixel groups, `width * height * 5 / 2` bytes,
///   read through its device address.
/// * `pg_le` - RFC4175 4:2:2 10 bit little endian pixel groups, `width * height * 5 / 2` bytes.
/// * `level` - Highest vector tier the call may use.
pub fn rfc4175_422be10_to_422le10_dma<C: DmaChannel + ?Sized>(
    channel: &mut C,
    pg_be: DeviceSlice<'_, u8>,
    pg_le: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    convert_staged(
        channel,
        Conversion::Rfc422Be10ToRfc422Le10,
        level,
        packed_source(pg_be),
        &mut DstPlanes::packed(pg_le),
        width,
        height,
    )
}

/// Staged variant of [rfc4175_422le10_to_422be10](crate::rfc4175_422le10_to_422be10).
///
/// # Arguments
///
/// * `channel` - Copy engine the source is staged through.
/// * `pg_le` - RFC4175 4:2:2 10 bit little endian pixel groups, `width * height * 5 / 2` bytes,
///   read through its device address.
/// * `pg_be` - RFC4175 4:2:2 10 bit big endian pixel groups, `width * height * 5 / 2` bytes.
/// * `level` - Highest vector tier the call may use.
pub fn rfc4175_422le10_to_422be10_dma<C: DmaChannel + ?Sized>(
    channel: &mut C,
    pg_le: DeviceSlice<'_, u8>,
    pg_be: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    convert_staged(
        channel,
        Conversion::Rfc422Le10ToRfc422Be10,
        level,
        packed_source(pg_le),
        &mut DstPlanes::packed(pg_be),
        width,
        height,
    )
}

/// Staged variant of [rfc4175_422be10_to_422le8](crate::rfc4175_422be10_to_422le8).
///
/// # Arguments
///
/// * `channel` - Copy engine the source is staged through.
/// * `pg_be` - RFC4175 4:2:2 10 bit big endian pixel groups, `width * height * 5 / 2` bytes,
///   read through its device address.
/// * `uyvy` - 8 bit samples ordered Cb Y0 Cr Y1, `width * height * 2` bytes.
/// * `level` - Highest vector tier the call may use.
pub fn rfc4175_422be10_to_422le8_dma<C: DmaChannel + ?Sized>(
    channel: &mut C,
    pg_be: DeviceSlice<'_, u8>,
    uyvy: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    convert_staged(
        channel,
        Conversion::Rfc422Be10ToUyvy,
        level,
        packed_source(pg_be),
        &mut DstPlanes::packed(uyvy),
        width,
        height,
    )
}

/// Staged variant of [rfc4175_422be10_to_v210](crate::rfc4175_422be10_to_v210), same 6 pixel rule.
///
/// # Arguments
///
/// * `channel` - Copy engine the source is staged through.
/// * `pg_be` - RFC4175 4:2:2 10 bit big endian pixel groups, `width * height * 5 / 2` bytes,
///   read through its device address.
/// * `v210` - V210 words, `width * height * 8 / 3` bytes.
/// * `level` - Highest vector tier the call may use.
pub fn rfc4175_422be10_to_v210_dma<C: DmaChannel + ?Sized>(
    channel: &mut C,
    pg_be: DeviceSlice<'_, u8>,
    v210: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    convert_staged(
        channel,
        Conversion::Rfc422Be10ToV210,
        level,
        packed_source(pg_be),
        &mut DstPlanes::packed(v210),
        width,
        height,
    )
}

/// Staged variant of [v210_to_rfc4175_422be10](crate::v210_to_rfc4175_422be10).
///
/// # Arguments
///
/// * `channel` - Copy engine the source is staged through.
/// * `v210` - V210 words, `width * height * 8 / 3` bytes,
///   read through its device address.
/// * `pg_be` - RFC4175 4:2:2 10 bit big endian pixel groups, `width * height * 5 / 2` bytes.
/// * `level` - Highest vector tier the call may use.
pub fn v210_to_rfc4175_422be10_dma<C: DmaChannel + ?Sized>(
    channel: &mut C,
    v210: DeviceSlice<'_, u8>,
    pg_be: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    convert_staged(
        channel,
        Conversion::V210ToRfc422Be10,
        level,
        packed_source(v210),
        &mut DstPlanes::packed(pg_be),
        width,
        height,
    )
}

/// Staged variant of [rfc4175_422be10_to_y210](crate::rfc4175_422be10_to_y210).
///
/// # Arguments
///
/// * `channel` - Copy engine the source is staged through.
/// * `pg_be` - RFC4175 4:2:2 10 bit big endian pixel groups, `width * height * 5 / 2` bytes,
///   read through its device address.
/// * `y210` - Cells ordered Y0 Cb Y1 Cr, `width * height * 2` values.
/// * `level` - Highest vector tier the call may use.
pub fn rfc4175_422be10_to_y210_dma<C: DmaChannel + ?Sized>(
    channel: &mut C,
    pg_be: DeviceSlice<'_, u8>,
    y210: &mut [u16],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    convert_staged(
        channel,
        Conversion::Rfc422Be10ToY210,
        level,
        packed_source(pg_be),
        &mut DstPlanes::packed(u16_bytes_mut(y210)),
        width,
        height,
    )
}

/// Staged variant of [y210_to_rfc4175_422be10](crate::y210_to_rfc4175_422be10).
///
/// # Arguments
///
/// * `channel` - Copy engine the source is staged through.
/// * `y210` - Cells ordered Y0 Cb Y1 Cr, `width * height * 2` values,
///   read through its device address.
/// * `pg_be` - RFC4175 4:2:2 10 bit big endian pixel groups, `width * height * 5 / 2` bytes.
/// * `level` - Highest vector tier the call may use.
pub fn y210_to_rfc4175_422be10_dma<C: DmaChannel + ?Sized>(
    channel: &mut C,
    y210: DeviceSlice<'_, u16>,
    pg_be: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    convert_staged(
        channel,
        Conversion::Y210ToRfc422Be10,
        level,
        packed_source(y210.as_bytes()),
        &mut DstPlanes::packed(pg_be),
        width,
        height,
    )
}

/// Staged variant of [rfc4175_422be12_to_yuv422p12le](crate::rfc4175_422be12_to_yuv422p12le).
///
/// # Arguments
///
/// * `channel` - Copy engine the source is staged through.
/// * `pg` - RFC4175 4:2:2 12 bit big endian pixel groups, `width * height * 3` bytes,
///   read through its device address.
/// * `y` - Luma plane, `width * height` cells.
/// * `cb`, `cr` - Chroma planes, `width * height / 2` cells each.
/// * `level` - Highest vector tier the call may use.
pub fn rfc4175_422be12_to_yuv422p12le_dma<C: DmaChannel + ?Sized>(
    channel: &mut C,
    pg: DeviceSlice<'_, u8>,
    y: &mut [u16],
    cb: &mut [u16],
    cr: &mut [u16],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    convert_staged(
        channel,
        Conversion::Rfc422Be12ToYuv422p12,
        level,
        packed_source(pg),
        &mut DstPlanes::planar(y, cb, cr),
        width,
        height,
    )
}

/// Staged variant of [rfc4175_422be12_to_422le12](crate::rfc4175_422be12_to_422le12).
///
/// # Arguments
///
/// * `channel` - Copy engine the source is staged through.
/// * `pg_be` - RFC4175 4:2:2 12 bit big endian pixel groups, `width * height * 3` bytes,
///   read through its device address.
/// * `pg_le` - RFC4175 4:2:2 12 bit little endian pixel groups, `width * height * 3` bytes.
/// * `level` - Highest vector tier the call may use.
pub fn rfc4175_422be12_to_422le12_dma<C: DmaChannel + ?Sized>(
    channel: &mut C,
    pg_be: DeviceSlice<'_, u8>,
    pg_le: &mut [u8],
    width: u32,
    height: u32,
    level: CapabilityLevel,
) -> Result<(), ConvertError> {
    convert_staged(
        channel,
        Conversion::Rfc422Be12ToRfc422Le12,
        level,
        packed_source(pg_be),
        &mut DstPlanes::packed(pg_le),
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::tests::random_frame;
    use crate::dma::tests::LoopbackChannel;
    use crate::dma::Iova;
    use crate::formats::frame_size;
    use crate::*;

    fn device(data: &[u8]) -> DeviceSlice<'_, u8> {
        DeviceSlice::new(data, Iova(data.as_ptr() as u64))
    }

    fn device16(data: &[u16]) -> DeviceSlice<'_, u16> {
        DeviceSlice::new(data, Iova(data.as_ptr() as u64))
    }

    type PackedDma = fn(
        &mut LoopbackChannel,
        DeviceSlice<'_, u8>,
        &mut [u8],
        u32,
        u32,
        CapabilityLevel,
    ) -> Result<(), ConvertError>;
    type PackedCpu = fn(&[u8], &mut [u8], u32, u32, CapabilityLevel) -> Result<(), ConvertError>;

    fn check_packed(
        format: PixelFormat,
        target: PixelFormat,
        dma: PackedDma,
        cpu: PackedCpu,
        width: u32,
        height: u32,
        chunk_bytes: usize,
    ) {
        let src = random_frame(format, width, height).remove(0);
        let size = frame_size(target, width, height);
        let mut expected = vec![0u8; size];
        let mut out = vec![0u8; size];
        let cpu_result = cpu(&src, &mut expected, width, height, CapabilityLevel::Auto);
        let mut channel = LoopbackChannel::new(chunk_bytes);
        let dma_result = dma(
            &mut channel,
            device(&src),
            &mut out,
            width,
            height,
            CapabilityLevel::Auto,
        );
        assert_eq!(dma_result, cpu_result, "{format:?} {width}x{height}");
        if dma_result.is_ok() && src.len() >= chunk_bytes {
            assert!(channel.submitted > 0, "{format:?} {width}x{height} was not staged");
        }
        assert_eq!(out, expected, "{format:?} to {target:?} {width}x{height}");
    }

    fn check_all_packed(width: u32, height: u32, chunk_bytes: usize) {
        let be10 = PixelFormat::Yuv422Rfc4175Pg2Be10;
        let cases: [(PixelFormat, PixelFormat, PackedDma, PackedCpu); 6] = [
            (
                be10,
                PixelFormat::Yuv422Rfc4175Pg2Le10,
                rfc4175_422be10_to_422le10_dma,
                rfc4175_422be10_to_422le10,
            ),
            (
                PixelFormat::Yuv422Rfc4175Pg2Le10,
                be10,
                rfc4175_422le10_to_422be10_dma,
                rfc4175_422le10_to_422be10,
            ),
            (
                be10,
                PixelFormat::Uyvy,
                rfc4175_422be10_to_422le8_dma,
                rfc4175_422be10_to_422le8,
            ),
            (
                be10,
                PixelFormat::V210,
                rfc4175_422be10_to_v210_dma,
                rfc4175_422be10_to_v210,
            ),
            (
                PixelFormat::V210,
                be10,
                v210_to_rfc4175_422be10_dma,
                v210_to_rfc4175_422be10,
            ),
            (
                PixelFormat::Yuv422Rfc4175Pg2Be12,
                PixelFormat::Yuv422Rfc4175Pg2Le12,
                rfc4175_422be12_to_422le12_dma,
                rfc4175_422be12_to_422le12,
            ),
        ];
        for (format, target, dma, cpu) in cases {
            if format == PixelFormat::V210 && (width * height) % 6 != 0 {
                continue;
            }
            check_packed(format, target, dma, cpu, width, height, chunk_bytes);
        }
    }

    fn check_planar(width: u32, height: u32, chunk_bytes: usize) {
        let pixels = (width * height) as usize;
        for (format, dma, cpu) in [
            (
                PixelFormat::Yuv422Rfc4175Pg2Be10,
                rfc4175_422be10_to_yuv422p10le_dma::<LoopbackChannel>
                    as fn(
                        &mut LoopbackChannel,
                        DeviceSlice<'_, u8>,
                        &mut [u16],
                        &mut [u16],
                        &mut [u16],
                        u32,
                        u32,
                        CapabilityLevel,
                    ) -> Result<(), ConvertError>,
                rfc4175_422be10_to_yuv422p10le
                    as fn(
                        &[u8],
                        &mut [u16],
                        &mut [u16],
                        &mut [u16],
                        u32,
                        u32,
                        CapabilityLevel,
                    ) -> Result<(), ConvertError>,
            ),
            (
                PixelFormat::Yuv422Rfc4175Pg2Be12,
                rfc4175_422be12_to_yuv422p12le_dma::<LoopbackChannel>,
                rfc4175_422be12_to_yuv422p12le,
            ),
        ] {
            let src = random_frame(format, width, height).remove(0);
            let mut expected = [vec![0u16; pixels], vec![0u16; pixels / 2], vec![0u16; pixels / 2]];
            let mut out = expected.clone();
            let [y, cb, cr] = &mut expected;
            cpu(&src, y, cb, cr, width, height, CapabilityLevel::None).unwrap();
            let mut channel = LoopbackChannel::new(chunk_bytes);
            let [y, cb, cr] = &mut out;
            dma(
                &mut channel,
                device(&src),
                y,
                cb,
                cr,
                width,
                height,
                CapabilityLevel::Auto,
            )
            .unwrap();
            assert_eq!(out, expected, "{format:?} {width}x{height}");
            if src.len() >= chunk_bytes {
                assert!(channel.submitted > 0, "{format:?} {width}x{height} was not staged");
            }

            let mut packed = vec![0u8; src.len()];
            let [y, cb, cr] = &out;
            if format == PixelFormat::Yuv422Rfc4175Pg2Be10 {
                yuv422p10le_to_rfc4175_422be10_dma(
                    &mut channel,
                    device16(y),
                    device16(cb),
                    device16(cr),
                    &mut packed,
                    width,
                    height,
                    CapabilityLevel::Auto,
                )
                .unwrap();
                assert_eq!(packed, src);
            }
        }
    }

    fn check_y210(width: u32, height: u32, chunk_bytes: usize) {
        let src = random_frame(PixelFormat::Yuv422Rfc4175Pg2Be10, width, height).remove(0);
        let pixels = (width * height) as usize;
        let mut expected = vec![0u16; pixels * 2];
        rfc4175_422be10_to_y210(&src, &mut expected, width, height, CapabilityLevel::None)
            .unwrap();
        let mut channel = LoopbackChannel::new(chunk_bytes);
        let mut y210 = vec![0u16; pixels * 2];
        rfc4175_422be10_to_y210_dma(
            &mut channel,
            device(&src),
            &mut y210,
            width,
            height,
            CapabilityLevel::Auto,
        )
        .unwrap();
        assert_eq!(y210, expected);
        let mut back = vec![0u8; src.len()];
        y210_to_rfc4175_422be10_dma(
            &mut channel,
            device16(&y210),
            &mut back,
            width,
            height,
            CapabilityLevel::Auto,
        )
        .unwrap();
        assert_eq!(back, src);
    }

    #[test]
    fn test_full_hd_parity() {
        check_all_packed(1920, 1080, 256 * 1024);
        check_planar(1920, 1080, 256 * 1024);
        check_y210(1920, 1080, 256 * 1024);
    }

    #[test]
    fn test_odd_size_parity() {
        check_all_packed(722, 111, 7000);
        check_planar(722, 111, 4096);
        check_y210(722, 111, 4096);
    }

    #[test]
    fn test_narrow_height_sweep() {
        for height in 640..704u32 {
            check_all_packed(2, height, 1024);
            check_planar(2, height, 1024);
            check_y210(2, height, 1024);
        }
    }
}
