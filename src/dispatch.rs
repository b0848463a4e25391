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
    check_destination_plane, check_pixel_count, check_source_plane, ConvertError,
};
use crate::formats::{ChromaSampling, PixelFormat};
use crate::layouts::{
    lcm, scalar_repack, BlockLoad, BlockStore, DstPlanes, Planar422, Planar444, Rfc4175,
    SampleLayout, SampleStage, SrcPlanes, UnitGeometry, Uyvy8, Y210, V210,
};

type Be10 = Rfc4175<10, true>;
type Le10 = Rfc4175<10, false>;
type Be12 = Rfc4175<12, true>;
type Le12 = Rfc4175<12, false>;

macro_rules! conversions {
    ($($name:ident => ($src:ident, $dst:ident, $s:ty, $d:ty),)+) => {
        /// Every supported ordered pair of layouts.
        ///
        /// 4:4:4 pairs are named after YUV but serve the RGB wire formats with GBR planes as well,
        /// see [Conversion::from_formats].
        #[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
        pub enum Conversion {
            $($name,)+
        }

        impl Conversion {
            pub const ALL: &'static [Conversion] = &[$(Conversion::$name,)+];

            /// Canonical source format.
            pub const fn source(self) -> PixelFormat {
                match self {
                    $(Conversion::$name => PixelFormat::$src,)+
                }
            }

            /// Canonical destination format.
            pub const fn destination(self) -> PixelFormat {
                match self {
                    $(Conversion::$name => PixelFormat::$dst,)+
                }
            }

            fn kernel(self, ceiling: CapabilityLevel) -> KernelHandle {
                match self {
                    $(Conversion::$name => resolve::<$s, $d>(self, ceiling),)+
                }
            }
        }
    };
}

conversions! {
    Rfc422Be10ToYuv422p10 => (Yuv422Rfc4175Pg2Be10, Yuv422Planar10Le, Be10, Planar422<10>),
    Yuv422p10ToRfc422Be10 => (Yuv422Planar10Le, Yuv422Rfc4175Pg2Be10, Planar422<10>, Be10),
    Rfc422Le10ToYuv422p10 => (Yuv422Rfc4175Pg2Le10, Yuv422Planar10Le, Le10, Planar422<10>),
    Yuv422p10ToRfc422Le10 => (Yuv422Planar10Le, Yuv422Rfc4175Pg2Le10, Planar422<10>, Le10),
    Rfc422Be10ToRfc422Le10 => (Yuv422Rfc4175Pg2Be10, Yuv422Rfc4175Pg2Le10, Be10, Le10),
    Rfc422Le10ToRfc422Be10 => (Yuv422Rfc4175Pg2Le10, Yuv422Rfc4175Pg2Be10, Le10, Be10),
    Rfc422Be10ToUyvy => (Yuv422Rfc4175Pg2Be10, Uyvy, Be10, Uyvy8),
    UyvyToRfc422Be10 => (Uyvy, Yuv422Rfc4175Pg2Be10, Uyvy8, Be10),
    Rfc422Le10ToV210 => (Yuv422Rfc4175Pg2Le10, V210, Le10, V210),
    V210ToRfc422Le10 => (V210, Yuv422Rfc4175Pg2Le10, V210, Le10),
    Rfc422Be10ToV210 => (Yuv422Rfc4175Pg2Be10, V210, Be10, V210),
    V210ToRfc422Be10 => (V210, Yuv422Rfc4175Pg2Be10, V210, Be10),
    Rfc422Be10ToY210 => (Yuv422Rfc4175Pg2Be10, Y210, Be10, Y210),
    Y210ToRfc422Be10 => (Y210, Yuv422Rfc4175Pg2Be10, Y210, Be10),
    Rfc422Be12ToYuv422p12 => (Yuv422Rfc4175Pg2Be12, Yuv422Planar12Le, Be12, Planar422<12>),
    Yuv422p12ToRfc422Be12 => (Yuv422Planar12Le, Yuv422Rfc4175Pg2Be12, Planar422<12>, Be12),
    Rfc422Le12ToYuv422p12 => (Yuv422Rfc4175Pg2Le12, Yuv422Planar12Le, Le12, Planar422<12>),
    Yuv422p12ToRfc422Le12 => (Yuv422Planar12Le, Yuv422Rfc4175Pg2Le12, Planar422<12>, Le12),
    Rfc422Be12ToRfc422Le12 => (Yuv422Rfc4175Pg2Be12, Yuv422Rfc4175Pg2Le12, Be12, Le12),
    Rfc422Le12ToRfc422Be12 => (Yuv422Rfc4175Pg2Le12, Yuv422Rfc4175Pg2Be12, Le12, Be12),
    Rfc444Be10ToYuv444p10 => (Yuv444Rfc4175Pg4Be10, Yuv444Planar10Le, Be10, Planar444<10>),
    Yuv444p10ToRfc444Be10 => (Yuv444Planar10Le, Yuv444Rfc4175Pg4Be10, Planar444<10>, Be10),
    Rfc444Le10ToYuv444p10 => (Yuv444Rfc4175Pg4Le10, Yuv444Planar10Le, Le10, Planar444<10>),
    Yuv444p10ToRfc444Le10 => (Yuv444Planar10Le, Yuv444Rfc4175Pg4Le10, Planar444<10>, Le10),
    Rfc444Be10ToRfc444Le10 => (Yuv444Rfc4175Pg4Be10, Yuv444Rfc4175Pg4Le10, Be10, Le10),
    Rfc444Le10ToRfc444Be10 => (Yuv444Rfc4175Pg4Le10, Yuv444Rfc4175Pg4Be10, Le10, Be10),
    Rfc444Be12ToYuv444p12 => (Yuv444Rfc4175Pg2Be12, Yuv444Planar12Le, Be12, Planar444<12>),
    Yuv444p12ToRfc444Be12 => (Yuv444Planar12Le, Yuv444Rfc4175Pg2Be12, Planar444<12>, Be12),
    Rfc444Le12ToYuv444p12 => (Yuv444Rfc4175Pg2Le12, Yuv444Planar12Le, Le12, Planar444<12>),
    Yuv444p12ToRfc444Le12 => (Yuv444Planar12Le, Yuv444Rfc4175Pg2Le12, Planar444<12>, Le12),
    Rfc444Be12ToRfc444Le12 => (Yuv444Rfc4175Pg2Be12, Yuv444Rfc4175Pg2Le12, Be12, Le12),
    Rfc444Le12ToRfc444Be12 => (Yuv444Rfc4175Pg2Le12, Yuv444Rfc4175Pg2Be12, Le12, Be12),
}

impl Conversion {
    /// Conversion serving a pair of frame formats.
    ///
    /// Both formats must share chroma sampling and color family, RGB wire formats pair with GBR planes.
    pub fn from_formats(src: PixelFormat, dst: PixelFormat) -> Option<Conversion> {
        if src.sampling() != dst.sampling() || src.is_rgb() != dst.is_rgb() {
            return None;
        }
        Conversion::ALL.iter().copied().find(|c| {
            c.source().sampling() == src.sampling()
                && c.source().layout() == src.layout()
                && c.destination().layout() == dst.layout()
        })
    }

    /// Pixel count granularity both sides accept.
    pub const fn pixel_granularity(self) -> usize {
        lcm(
            self.source().pixel_granularity(),
            self.destination().pixel_granularity(),
        )
    }

    pub(crate) const fn samples_per_pixel(self) -> usize {
        match self.source().sampling() {
            ChromaSampling::Yuv422 => 2,
            ChromaSampling::Yuv444 => 3,
        }
    }
}

pub(crate) type ScalarHandle = fn(&SrcPlanes<'_>, &mut DstPlanes<'_>, usize, usize);

/// Resolved implementation of one conversion.
/// Implementation of one [`Conversion`] picked by [`select_kernel`].
///
/// Selecting once and calling [`KernelHandle::convert`] per frame skips the per call
/// dispatch of the named conversion functions.
#[derive(Debug, Copy, Clone)]
pub struct KernelHandle {
    conversion: Conversion,
    level: CapabilityLevel,
    scalar: ScalarHandle,
    vector: Option<(BlockLoad, BlockStore)>,
    block: usize,
    pub(crate) src_geometry: UnitGeometry,
    pub(crate) dst_geometry: UnitGeometry,
}

/// Samples one vector block of a tier covers.
const fn block_samples(level: CapabilityLevel) -> usize {
    match level {
        CapabilityLevel::Avx2 => 48,
        _ => 96,
    }
}

/// Largest block of any tier, multiple of every unit.
pub(crate) const MAX_BLOCK_SAMPLES: usize = 96;

fn resolve<S: SampleLayout, D: SampleLayout>(
    conversion: Conversion,
    ceiling: CapabilityLevel,
) -> KernelHandle {
    let effective = ceiling.resolve();
    let mut handle = KernelHandle {
        conversion,
        level: CapabilityLevel::None,
        scalar: scalar_repack::<S, D>,
        vector: None,
        block: 0,
        src_geometry: S::GEOMETRY,
        dst_geometry: D::GEOMETRY,
    };
    for level in [
        CapabilityLevel::Avx512Vbmi2,
        CapabilityLevel::Avx512,
        CapabilityLevel::Avx2,
    ] {
        if level > effective {
            continue;
        }
        if let (Some(load), Some(store)) = (S::block_ops(level), D::block_ops(level)) {
            handle.level = level;
            handle.vector = Some((load.load, store.store));
            handle.block = block_samples(level);
            break;
        }
    }
    handle
}

/// Picks the best implementation of `conversion` not above `ceiling` nor above the host.
///
/// Falls back to the scalar reference when no vector tier qualifies.
pub fn select_kernel(ceiling: CapabilityLevel, conversion: Conversion) -> KernelHandle {
    let handle = conversion.kernel(ceiling);
    log::trace!(
        "{conversion:?} with ceiling {ceiling} runs on {}",
        handle.level
    );
    handle
}

impl KernelHandle {
    /// Tier the handle runs on, `None` for the scalar reference.
    pub fn level(&self) -> CapabilityLevel {
        self.level
    }

    pub fn conversion(&self) -> Conversion {
        self.conversion
    }

    /// Converts `width` x `height` pixels with the selected implementation.
    ///
    /// Packed sides use plane 0 only and leave the other planes empty. Planar sides take the
    /// Y, Cb and Cr planes as little endian 16 bit cells. Nothing is written when validation fails.
    pub fn convert(
        &self,
        src: [&[u8]; 3],
        dst: [&mut [u8]; 3],
        width: u32,
        height: u32,
    ) -> Result<(), ConvertError> {
        self.run_frame(
            &SrcPlanes::from_bytes(src),
            &mut DstPlanes::from_bytes(dst),
            width,
            height,
        )
    }

    fn run_frame(
        &self,
        src: &SrcPlanes<'_>,
        dst: &mut DstPlanes<'_>,
        width: u32,
        height: u32,
    ) -> Result<(), ConvertError> {
        let conversion = self.conversion;
        let pixels = check_pixel_count(width, height, conversion.pixel_granularity())
            .inspect_err(|e| log::error!("{conversion:?} rejected {width}x{height}: {e}"))?;
        let samples = pixels * conversion.samples_per_pixel();
        self.run(src, dst, samples)
            .inspect_err(|e| log::error!("{conversion:?} rejected buffers: {e}"))
    }

    pub(crate) fn check_planes(
        &self,
        src: &SrcPlanes<'_>,
        dst: &DstPlanes<'_>,
        samples: usize,
    ) -> Result<(), ConvertError> {
        for plane in 0..3 {
            check_source_plane(
                plane,
                src.plane(plane),
                self.src_geometry.plane_bytes(plane, samples),
            )?;
        }
        for plane in 0..3 {
            check_destination_plane(
                plane,
                dst.plane(plane),
                self.dst_geometry.plane_bytes(plane, samples),
            )?;
        }
        Ok(())
    }

    /// Converts the first `samples` stream samples, vector blocks first and the tail on scalar.
    pub(crate) fn run(
        &self,
        src: &SrcPlanes<'_>,
        dst: &mut DstPlanes<'_>,
        samples: usize,
    ) -> Result<(), ConvertError> {
        self.check_planes(src, dst, samples)?;
        let mut processed = 0usize;
        if let Some((load, store)) = self.vector {
            let blocks = samples / self.block;
            let mut stage = SampleStage::new();
            for n in 0..blocks {
                // Planes cover `samples` and the handle only carries tiers the host supports.
                unsafe {
                    load(src, n, &mut stage);
                    store(&stage, dst, n);
                }
            }
            processed = blocks * self.block;
        }
        (self.scalar)(src, dst, processed, samples);
        Ok(())
    }
}

/// Validates geometry and runs `conversion` over whole planes.
pub(crate) fn convert_planes(
    conversion: Conversion,
    ceiling: CapabilityLevel,
    src: &SrcPlanes<'_>,
    dst: &mut DstPlanes<'_>,
    width: u32,
    height: u32,
) -> Result<(), ConvertError> {
    select_kernel(ceiling, conversion).run_frame(src, dst, width, height)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::formats::frame_size;
    use crate::layouts::u16_bytes;
    use rand::Rng;

    pub(crate) const LEVELS: [CapabilityLevel; 4] = [
        CapabilityLevel::None,
        CapabilityLevel::Avx2,
        CapabilityLevel::Avx512,
        CapabilityLevel::Avx512Vbmi2,
    ];

    /// Random but valid contents for `format`.
    pub(crate) fn random_frame(format: PixelFormat, width: u32, height: u32) -> Vec<Vec<u8>> {
        let mut rng = rand::rng();
        let pixels = width as usize * height as usize;
        if format.is_planar() {
            let bits = match format.layout() {
                crate::layouts::LayoutKind::Planar422P10
                | crate::layouts::LayoutKind::Planar444P10 => 10,
                _ => 12,
            };
            let chroma = match format.sampling() {
                ChromaSampling::Yuv422 => pixels / 2,
                ChromaSampling::Yuv444 => pixels,
            };
            return [pixels, chroma, chroma]
                .iter()
                .map(|&len| {
                    let cells: Vec<u16> =
                        (0..len).map(|_| rng.random_range(0..(1u16 << bits))).collect();
                    u16_bytes(&cells).to_vec()
                })
                .collect();
        }
        let size = frame_size(format, width, height);
        let mut bytes: Vec<u8> = (0..size).map(|_| rng.random::<u8>()).collect();
        match format {
            PixelFormat::V210 => {
                for word in bytes.chunks_exact_mut(4) {
                    word[3] &= 0x3f;
                }
            }
            PixelFormat::Y210 => {
                for cell in bytes.chunks_exact_mut(2) {
                    cell[0] &= 0xc0;
                }
            }
            _ => {}
        }
        vec![bytes]
    }

    pub(crate) fn empty_frame(format: PixelFormat, width: u32, height: u32) -> Vec<Vec<u8>> {
        let pixels = width as usize * height as usize;
        if !format.is_planar() {
            return vec![vec![0u8; frame_size(format, width, height)]];
        }
        let chroma = match format.sampling() {
            ChromaSampling::Yuv422 => pixels,
            ChromaSampling::Yuv444 => pixels * 2,
        };
        vec![vec![0u8; pixels * 2], vec![0u8; chroma], vec![0u8; chroma]]
    }

    pub(crate) fn src_view(planes: &[Vec<u8>]) -> SrcPlanes<'_> {
        SrcPlanes::from_bytes(std::array::from_fn(|p| {
            planes.get(p).map(|v| v.as_slice()).unwrap_or(&[])
        }))
    }

    pub(crate) fn dst_view(planes: &mut [Vec<u8>]) -> DstPlanes<'_> {
        let mut iter = planes.iter_mut();
        DstPlanes::from_bytes(std::array::from_fn(|_| {
            iter.next().map(|v| v.as_mut_slice()).unwrap_or_default()
        }))
    }

    pub(crate) fn run_conversion(
        conversion: Conversion,
        level: CapabilityLevel,
        src: &[Vec<u8>],
        width: u32,
        height: u32,
    ) -> Result<Vec<Vec<u8>>, ConvertError> {
        let mut dst = empty_frame(conversion.destination(), width, height);
        convert_planes(
            conversion,
            level,
            &src_view(src),
            &mut dst_view(&mut dst),
            width,
            height,
        )?;
        Ok(dst)
    }

    fn inverse(conversion: Conversion) -> Conversion {
        Conversion::from_formats(conversion.destination(), conversion.source())
            .expect("every conversion has an inverse")
    }

    #[test]
    fn test_every_conversion_has_an_inverse() {
        for &conversion in Conversion::ALL {
            let back = inverse(conversion);
            assert_eq!(back.source(), conversion.destination());
            assert_eq!(back.destination(), conversion.source());
        }
    }

    #[test]
    fn test_tiers_are_equivalent() {
        // 5796 pixels leave tails for every block size.
        let (width, height) = (1932u32, 3u32);
        for &conversion in Conversion::ALL {
            let src = random_frame(conversion.source(), width, height);
            let reference = run_conversion(conversion, CapabilityLevel::None, &src, width, height)
                .unwrap();
            for level in LEVELS {
                let out = run_conversion(conversion, level, &src, width, height).unwrap();
                assert_eq!(out, reference, "{conversion:?} differs on {level}");
            }
        }
    }

    #[test]
    fn test_round_trips_across_tiers() {
        let mut rng = rand::rng();
        for &conversion in Conversion::ALL {
            if conversion.destination() == PixelFormat::Uyvy {
                // 10 to 8 bit is lossy, covered by the widening test.
                continue;
            }
            let granularity = conversion.pixel_granularity() as u32;
            let width = granularity * rng.random_range(1..40u32);
            let height = rng.random_range(1..9u32);
            let src = random_frame(conversion.source(), width, height);
            for encode in LEVELS {
                let encoded = run_conversion(conversion, encode, &src, width, height).unwrap();
                for decode in LEVELS {
                    let decoded =
                        run_conversion(inverse(conversion), decode, &encoded, width, height)
                            .unwrap();
                    assert_eq!(
                        decoded, src,
                        "{conversion:?} {width}x{height} encode {encode} decode {decode}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_widening_round_trip() {
        let (width, height) = (722u32, 111u32);
        let src = random_frame(PixelFormat::Uyvy, width, height);
        for level in LEVELS {
            let wide =
                run_conversion(Conversion::UyvyToRfc422Be10, level, &src, width, height).unwrap();
            let narrow =
                run_conversion(Conversion::Rfc422Be10ToUyvy, level, &wide, width, height).unwrap();
            assert_eq!(narrow, src);
        }
    }

    #[test]
    fn test_v210_alignment_gate() {
        let (width, height) = (2u32, 641u32);
        let pixels = (width * height) as usize;
        let pg = random_frame(PixelFormat::Yuv422Rfc4175Pg2Be10, width, height);
        for level in LEVELS {
            let mut v210 = vec![vec![0u8; pixels * 8 / 3 + 16]];
            let result = convert_planes(
                Conversion::Rfc422Be10ToV210,
                level,
                &src_view(&pg),
                &mut dst_view(&mut v210),
                width,
                height,
            );
            assert!(matches!(result, Err(ConvertError::Misaligned(_))));
            assert!(result.unwrap_err().is_invalid_geometry());
            assert!(v210[0].iter().all(|&b| b == 0));

            let v210_src = vec![vec![0x55u8; pixels * 8 / 3 + 16]];
            let mut back = empty_frame(PixelFormat::Yuv422Rfc4175Pg2Be10, width, height);
            let result = convert_planes(
                Conversion::V210ToRfc422Be10,
                level,
                &src_view(&v210_src),
                &mut dst_view(&mut back),
                width,
                height,
            );
            assert!(result.is_err());
            assert!(back[0].iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn test_short_destination_is_untouched() {
        let (width, height) = (64u32, 2u32);
        let src = random_frame(PixelFormat::Yuv422Rfc4175Pg2Be10, width, height);
        let mut dst = empty_frame(PixelFormat::Yuv422Planar10Le, width, height);
        dst[2].truncate(10);
        let result = convert_planes(
            Conversion::Rfc422Be10ToYuv422p10,
            CapabilityLevel::Auto,
            &src_view(&src),
            &mut dst_view(&mut dst),
            width,
            height,
        );
        assert!(matches!(
            result,
            Err(ConvertError::DestinationSizeMismatch(p)) if p.plane == 2
        ));
        assert!(dst.iter().flatten().all(|&b| b == 0));
    }

    #[test]
    fn test_mixed_tier_scenario() {
        let (width, height) = (1920u32, 1080u32);
        let src = random_frame(PixelFormat::Yuv422Rfc4175Pg2Be10, width, height);
        let v210 = run_conversion(
            Conversion::Rfc422Be10ToV210,
            CapabilityLevel::Avx512Vbmi2,
            &src,
            width,
            height,
        )
        .unwrap();
        let le10 = run_conversion(
            Conversion::V210ToRfc422Le10,
            CapabilityLevel::None,
            &v210,
            width,
            height,
        )
        .unwrap();
        let be10 = run_conversion(
            Conversion::Rfc422Le10ToRfc422Be10,
            CapabilityLevel::Avx2,
            &le10,
            width,
            height,
        )
        .unwrap();
        assert_eq!(be10, src);
    }

    #[test]
    fn test_padding_bits_never_leak() {
        let (width, height) = (960u32, 4u32);
        let mut rng = rand::rng();
        for (conversion, bits) in [
            (Conversion::Yuv422p10ToRfc422Be10, 10u32),
            (Conversion::Yuv422p12ToRfc422Le12, 12),
            (Conversion::Yuv444p10ToRfc444Be10, 10),
        ] {
            let clean = random_frame(conversion.source(), width, height);
            let mut dirty = clean.clone();
            for plane in dirty.iter_mut() {
                for cell in plane.chunks_exact_mut(2) {
                    cell[1] |= (rng.random::<u8>()) << (bits - 8);
                }
            }
            for level in LEVELS {
                let packed = run_conversion(conversion, level, &dirty, width, height).unwrap();
                let expected = run_conversion(conversion, level, &clean, width, height).unwrap();
                assert_eq!(packed, expected);
                let unpacked =
                    run_conversion(inverse(conversion), level, &packed, width, height).unwrap();
                assert_eq!(unpacked, clean);
            }
        }
    }

    #[test]
    fn test_selection_respects_ceiling() {
        for &conversion in Conversion::ALL {
            assert_eq!(
                select_kernel(CapabilityLevel::None, conversion).level(),
                CapabilityLevel::None
            );
            for level in LEVELS {
                let chosen = select_kernel(level, conversion).level();
                assert!(chosen <= level.resolve());
            }
        }
        assert_eq!(
            Conversion::from_formats(PixelFormat::RgbRfc4175Pg4Be10, PixelFormat::GbrPlanar10Le),
            Some(Conversion::Rfc444Be10ToYuv444p10)
        );
        assert_eq!(
            Conversion::from_formats(PixelFormat::RgbRfc4175Pg4Be10, PixelFormat::Yuv444Planar10Le),
            None
        );
        assert_eq!(
            Conversion::from_formats(PixelFormat::Yuv422Rfc4175Pg2Be10, PixelFormat::Y210),
            Some(Conversion::Rfc422Be10ToY210)
        );
        assert_eq!(
            Conversion::from_formats(PixelFormat::V210, PixelFormat::Y210),
            None
        );
        assert_eq!(
            Conversion::from_formats(
                PixelFormat::Yuv444Rfc4175Pg4Be10,
                PixelFormat::Yuv444Rfc4175Pg4Le10
            ),
            Some(Conversion::Rfc444Be10ToRfc444Le10)
        );
    }

    #[test]
    fn test_handle_converts_like_named_path() {
        let (width, height) = (1932u32, 3u32);
        for &conversion in Conversion::ALL {
            let src = random_frame(conversion.source(), width, height);
            let expected =
                run_conversion(conversion, CapabilityLevel::None, &src, width, height).unwrap();
            let handle = select_kernel(CapabilityLevel::Auto, conversion);
            assert_eq!(handle.conversion(), conversion);
            let mut dst = empty_frame(conversion.destination(), width, height);
            let mut planes = dst.iter_mut();
            let dst_planes: [&mut [u8]; 3] = std::array::from_fn(|_| {
                planes.next().map(|v| v.as_mut_slice()).unwrap_or_default()
            });
            let src_planes: [&[u8]; 3] =
                std::array::from_fn(|p| src.get(p).map(|v| v.as_slice()).unwrap_or(&[]));
            handle
                .convert(src_planes, dst_planes, width, height)
                .unwrap();
            assert_eq!(dst, expected, "{conversion:?}");
        }

        let handle = select_kernel(CapabilityLevel::Auto, Conversion::Rfc422Be10ToV210);
        let src = vec![0u8; 5 * 641];
        let mut dst = vec![0u8; 4096];
        assert!(matches!(
            handle.convert([&src, &[], &[]], [&mut dst, &mut [], &mut []], 2, 641),
            Err(ConvertError::Misaligned(_))
        ));
        assert!(dst.iter().all(|&b| b == 0));
    }
}
