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
//! Sample layouts and the scalar reference path.
//!
//! Every format is treated as a stream of samples in wire order: 4:2:2 streams run
//! Cb, Y0, Cr, Y1 and 4:4:4 streams run (Cb or R), (Y or G), (Cr or B) per pixel.
//! A layout reads and writes whole units of that stream, a unit being the smallest
//! byte aligned run of samples. Any two layouts are connected by unpacking units of
//! the source into samples and packing them into units of the destination.
use crate::capability::CapabilityLevel;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub(crate) enum LayoutKind {
    Be10,
    Le10,
    Be12,
    Le12,
    Uyvy8,
    V210,
    Y210,
    Planar422P10,
    Planar422P12,
    Planar444P10,
    Planar444P12,
}

/// Samples per unit and bytes per unit on each plane.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct UnitGeometry {
    pub(crate) samples: usize,
    pub(crate) bytes: [usize; 3],
}

impl UnitGeometry {
    /// Bytes `samples` samples occupy on `plane`, `samples` must be a multiple of the unit.
    #[inline]
    pub(crate) const fn plane_bytes(&self, plane: usize, samples: usize) -> usize {
        samples / self.samples * self.bytes[plane]
    }
}

#[inline]
pub(crate) fn u16_bytes(data: &[u16]) -> &[u8] {
    unsafe { std::slice::from_raw_parts(data.as_ptr() as *const u8, data.len() * 2) }
}

#[inline]
pub(crate) fn u16_bytes_mut(data: &mut [u16]) -> &mut [u8] {
    unsafe { std::slice::from_raw_parts_mut(data.as_mut_ptr() as *mut u8, data.len() * 2) }
}

/// Read only view over up to three planes, unused planes are empty.
#[derive(Debug, Copy, Clone)]
pub(crate) struct SrcPlanes<'a> {
    planes: [&'a [u8]; 3],
}

impl<'a> SrcPlanes<'a> {
    pub(crate) fn packed(data: &'a [u8]) -> Self {
        SrcPlanes {
            planes: [data, &[], &[]],
        }
    }

    pub(crate) fn planar(p0: &'a [u16], p1: &'a [u16], p2: &'a [u16]) -> Self {
        SrcPlanes {
            planes: [u16_bytes(p0), u16_bytes(p1), u16_bytes(p2)],
        }
    }

    pub(crate) fn from_bytes(planes: [&'a [u8]; 3]) -> Self {
        SrcPlanes { planes }
    }

    #[inline(always)]
    pub(crate) fn plane(&self, plane: usize) -> &'a [u8] {
        self.planes[plane]
    }

    /// Planes restricted to `samples` samples starting at sample `start`.
    pub(crate) fn window(&self, geometry: UnitGeometry, start: usize, samples: usize) -> Self {
        let planes = std::array::from_fn(|p| {
            let from = geometry.plane_bytes(p, start);
            let to = from + geometry.plane_bytes(p, samples);
            self.planes[p].get(from..to).unwrap_or_default()
        });
        SrcPlanes { planes }
    }
}

#[derive(Debug)]
pub(crate) struct DstPlanes<'a> {
    planes: [&'a mut [u8]; 3],
}

impl<'a> DstPlanes<'a> {
    pub(crate) fn packed(data: &'a mut [u8]) -> Self {
        DstPlanes {
            planes: [data, &mut [], &mut []],
        }
    }

    pub(crate) fn planar(p0: &'a mut [u16], p1: &'a mut [u16], p2: &'a mut [u16]) -> Self {
        DstPlanes {
            planes: [u16_bytes_mut(p0), u16_bytes_mut(p1), u16_bytes_mut(p2)],
        }
    }

    pub(crate) fn from_bytes(planes: [&'a mut [u8]; 3]) -> Self {
        DstPlanes { planes }
    }

    #[inline(always)]
    pub(crate) fn plane(&self, plane: usize) -> &[u8] {
        &*self.planes[plane]
    }

    #[inline(always)]
    pub(crate) fn plane_mut(&mut self, plane: usize) -> &mut [u8] {
        &mut *self.planes[plane]
    }

    pub(crate) fn window_mut(
        &mut self,
        geometry: UnitGeometry,
        start: usize,
        samples: usize,
    ) -> DstPlanes<'_> {
        let [p0, p1, p2] = &mut self.planes;
        DstPlanes {
            planes: [
                cut_plane(p0, geometry, 0, start, samples),
                cut_plane(p1, geometry, 1, start, samples),
                cut_plane(p2, geometry, 2, start, samples),
            ],
        }
    }
}

#[inline]
fn cut_plane(
    data: &mut [u8],
    geometry: UnitGeometry,
    plane: usize,
    start: usize,
    samples: usize,
) -> &mut [u8] {
    let from = geometry.plane_bytes(plane, start);
    let to = from + geometry.plane_bytes(plane, samples);
    data.get_mut(from..to).unwrap_or_default()
}

pub(crate) const STAGE_SAMPLES: usize = 128;

/// Scratch of samples in stream order shared by the vector loads and stores of one block.
#[repr(C, align(64))]
pub(crate) struct SampleStage {
    pub(crate) samples: [u16; STAGE_SAMPLES],
}

impl SampleStage {
    pub(crate) const fn new() -> Self {
        SampleStage {
            samples: [0; STAGE_SAMPLES],
        }
    }
}

/// Unpacks block `n` of the source into the stage.
pub(crate) type BlockLoad = unsafe fn(&SrcPlanes<'_>, usize, &mut SampleStage);
/// Packs the stage into block `n` of the destination.
pub(crate) type BlockStore = unsafe fn(&SampleStage, &mut DstPlanes<'_>, usize);

#[derive(Copy, Clone)]
pub(crate) struct BlockOps {
    pub(crate) load: BlockLoad,
    pub(crate) store: BlockStore,
}

pub(crate) trait SampleLayout {
    const GEOMETRY: UnitGeometry;

    fn load_unit(src: &SrcPlanes<'_>, unit: usize, samples: &mut [u16]);

    fn store_unit(samples: &[u16], dst: &mut DstPlanes<'_>, unit: usize);

    /// Vector block loaders and storers compiled for `level`.
    fn block_ops(_level: CapabilityLevel) -> Option<BlockOps> {
        None
    }
}

/// RFC4175 bit stream of `BITS` bit samples, MSB first when `MSB` is set.
pub(crate) struct Rfc4175<const BITS: u32, const MSB: bool>;
/// 8 bit 4:2:2, one byte per sample.
pub(crate) struct Uyvy8;
pub(crate) struct V210;
pub(crate) struct Y210;
pub(crate) struct Planar422<const BITS: u32>;
pub(crate) struct Planar444<const BITS: u32>;

#[inline(always)]
fn unpack_bits<const BITS: u32, const MSB: bool>(bytes: &[u8], samples: &mut [u16]) {
    let total = bytes.len() as u32 * 8;
    let word = if MSB {
        bytes.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64)
    } else {
        bytes.iter().rev().fold(0u64, |acc, &b| (acc << 8) | b as u64)
    };
    let mask = (1u64 << BITS) - 1;
    for (k, sample) in samples.iter_mut().enumerate() {
        let at = if MSB {
            total - BITS * (k as u32 + 1)
        } else {
            BITS * k as u32
        };
        *sample = ((word >> at) & mask) as u16;
    }
}

#[inline(always)]
fn pack_bits<const BITS: u32, const MSB: bool>(samples: &[u16], bytes: &mut [u8]) {
    let total = bytes.len() as u32 * 8;
    let mask = (1u64 << BITS) - 1;
    let mut word = 0u64;
    for (k, &sample) in samples.iter().enumerate() {
        let at = if MSB {
            total - BITS * (k as u32 + 1)
        } else {
            BITS * k as u32
        };
        word |= (sample as u64 & mask) << at;
    }
    for (i, dst) in bytes.iter_mut().enumerate() {
        let at = if MSB { total - 8 * (i as u32 + 1) } else { 8 * i as u32 };
        *dst = (word >> at) as u8;
    }
}

#[inline(always)]
fn read_cell(bytes: &[u8], cell: usize) -> u16 {
    u16::from_le_bytes([bytes[cell * 2], bytes[cell * 2 + 1]])
}

#[inline(always)]
fn write_cell(bytes: &mut [u8], cell: usize, value: u16) {
    bytes[cell * 2..cell * 2 + 2].copy_from_slice(&value.to_le_bytes());
}

impl<const BITS: u32, const MSB: bool> SampleLayout for Rfc4175<BITS, MSB> {
    const GEOMETRY: UnitGeometry = UnitGeometry {
        samples: if BITS == 10 { 4 } else { 2 },
        bytes: [if BITS == 10 { 5 } else { 3 }, 0, 0],
    };

    #[inline]
    fn load_unit(src: &SrcPlanes<'_>, unit: usize, samples: &mut [u16]) {
        let size = Self::GEOMETRY.bytes[0];
        unpack_bits::<BITS, MSB>(&src.plane(0)[unit * size..(unit + 1) * size], samples);
    }

    #[inline]
    fn store_unit(samples: &[u16], dst: &mut DstPlanes<'_>, unit: usize) {
        let size = Self::GEOMETRY.bytes[0];
        pack_bits::<BITS, MSB>(
            samples,
            &mut dst.plane_mut(0)[unit * size..(unit + 1) * size],
        );
    }

    fn block_ops(level: CapabilityLevel) -> Option<BlockOps> {
        match level {
            #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
            CapabilityLevel::Avx2 => Some(BlockOps {
                load: crate::avx2::avx2_load_rfc4175::<BITS, MSB>,
                store: crate::avx2::avx2_store_rfc4175::<BITS, MSB>,
            }),
            #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx512"))]
            CapabilityLevel::Avx512 => Some(BlockOps {
                load: crate::avx512bw::avx512_load_rfc4175::<BITS, MSB>,
                store: crate::avx512bw::avx512_store_rfc4175::<BITS, MSB>,
            }),
            #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx512"))]
            CapabilityLevel::Avx512Vbmi2 => Some(BlockOps {
                load: crate::avx512bw::avx512vbmi2_load_rfc4175::<BITS, MSB>,
                store: crate::avx512bw::avx512vbmi2_store_rfc4175::<BITS, MSB>,
            }),
            _ => None,
        }
    }
}

impl SampleLayout for Uyvy8 {
    const GEOMETRY: UnitGeometry = UnitGeometry {
        samples: 4,
        bytes: [4, 0, 0],
    };

    #[inline]
    fn load_unit(src: &SrcPlanes<'_>, unit: usize, samples: &mut [u16]) {
        let bytes = &src.plane(0)[unit * 4..unit * 4 + 4];
        for (sample, &byte) in samples.iter_mut().zip(bytes.iter()) {
            *sample = (byte as u16) << 2;
        }
    }

    #[inline]
    fn store_unit(samples: &[u16], dst: &mut DstPlanes<'_>, unit: usize) {
        let bytes = &mut dst.plane_mut(0)[unit * 4..unit * 4 + 4];
        for (byte, &sample) in bytes.iter_mut().zip(samples.iter()) {
            *byte = ((sample & 0x3ff) >> 2) as u8;
        }
    }

    fn block_ops(level: CapabilityLevel) -> Option<BlockOps> {
        match level {
            #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
            CapabilityLevel::Avx2 => Some(BlockOps {
                load: crate::avx2::avx2_load_uyvy,
                store: crate::avx2::avx2_store_uyvy,
            }),
            #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx512"))]
            CapabilityLevel::Avx512 | CapabilityLevel::Avx512Vbmi2 => Some(BlockOps {
                load: crate::avx512bw::avx512_load_uyvy,
                store: crate::avx512bw::avx512_store_uyvy,
            }),
            _ => None,
        }
    }
}

impl SampleLayout for V210 {
    const GEOMETRY: UnitGeometry = UnitGeometry {
        samples: 12,
        bytes: [16, 0, 0],
    };

    #[inline]
    fn load_unit(src: &SrcPlanes<'_>, unit: usize, samples: &mut [u16]) {
        let bytes = &src.plane(0)[unit * 16..unit * 16 + 16];
        for (word, chunk) in bytes.chunks_exact(4).zip(samples.chunks_exact_mut(3)) {
            let word = u32::from_le_bytes([word[0], word[1], word[2], word[3]]);
            chunk[0] = (word & 0x3ff) as u16;
            chunk[1] = ((word >> 10) & 0x3ff) as u16;
            chunk[2] = ((word >> 20) & 0x3ff) as u16;
        }
    }

    #[inline]
    fn store_unit(samples: &[u16], dst: &mut DstPlanes<'_>, unit: usize) {
        let bytes = &mut dst.plane_mut(0)[unit * 16..unit * 16 + 16];
        for (word, chunk) in bytes.chunks_exact_mut(4).zip(samples.chunks_exact(3)) {
            let value = (chunk[0] as u32 & 0x3ff)
                | ((chunk[1] as u32 & 0x3ff) << 10)
                | ((chunk[2] as u32 & 0x3ff) << 20);
            word.copy_from_slice(&value.to_le_bytes());
        }
    }

    fn block_ops(level: CapabilityLevel) -> Option<BlockOps> {
        match level {
            #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
            CapabilityLevel::Avx2 => Some(BlockOps {
                load: crate::avx2::avx2_load_v210,
                store: crate::avx2::avx2_store_v210,
            }),
            #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx512"))]
            CapabilityLevel::Avx512 => Some(BlockOps {
                load: crate::avx512bw::avx512_load_v210,
                store: crate::avx512bw::avx512_store_v210,
            }),
            #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx512"))]
            CapabilityLevel::Avx512Vbmi2 => Some(BlockOps {
                load: crate::avx512bw::avx512vbmi2_load_v210,
                store: crate::avx512bw::avx512_store_v210,
            }),
            _ => None,
        }
    }
}

impl SampleLayout for Y210 {
    const GEOMETRY: UnitGeometry = UnitGeometry {
        samples: 4,
        bytes: [8, 0, 0],
    };

    #[inline]
    fn load_unit(src: &SrcPlanes<'_>, unit: usize, samples: &mut [u16]) {
        let cells = &src.plane(0)[unit * 8..unit * 8 + 8];
        // Cells are ordered Y0, Cb, Y1, Cr.
        samples[0] = read_cell(cells, 1) >> 6;
        samples[1] = read_cell(cells, 0) >> 6;
        samples[2] = read_cell(cells, 3) >> 6;
        samples[3] = read_cell(cells, 2) >> 6;
    }

    #[inline]
    fn store_unit(samples: &[u16], dst: &mut DstPlanes<'_>, unit: usize) {
        let cells = &mut dst.plane_mut(0)[unit * 8..unit * 8 + 8];
        write_cell(cells, 0, (samples[1] & 0x3ff) << 6);
        write_cell(cells, 1, (samples[0] & 0x3ff) << 6);
        write_cell(cells, 2, (samples[3] & 0x3ff) << 6);
        write_cell(cells, 3, (samples[2] & 0x3ff) << 6);
    }

    fn block_ops(level: CapabilityLevel) -> Option<BlockOps> {
        match level {
            #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
            CapabilityLevel::Avx2 => Some(BlockOps {
                load: crate::avx2::avx2_load_y210,
                store: crate::avx2::avx2_store_y210,
            }),
            #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx512"))]
            CapabilityLevel::Avx512 | CapabilityLevel::Avx512Vbmi2 => Some(BlockOps {
                load: crate::avx512bw::avx512_load_y210,
                store: crate::avx512bw::avx512_store_y210,
            }),
            _ => None,
        }
    }
}

impl<const BITS: u32> SampleLayout for Planar422<BITS> {
    const GEOMETRY: UnitGeometry = UnitGeometry {
        samples: 4,
        bytes: [4, 2, 2],
    };

    #[inline]
    fn load_unit(src: &SrcPlanes<'_>, unit: usize, samples: &mut [u16]) {
        let mask = ((1u32 << BITS) - 1) as u16;
        let y = &src.plane(0)[unit * 4..unit * 4 + 4];
        samples[0] = read_cell(src.plane(1), unit) & mask;
        samples[1] = read_cell(y, 0) & mask;
        samples[2] = read_cell(src.plane(2), unit) & mask;
        samples[3] = read_cell(y, 1) & mask;
    }

    #[inline]
    fn store_unit(samples: &[u16], dst: &mut DstPlanes<'_>, unit: usize) {
        let mask = ((1u32 << BITS) - 1) as u16;
        write_cell(dst.plane_mut(1), unit, samples[0] & mask);
        write_cell(dst.plane_mut(2), unit, samples[2] & mask);
        let y = dst.plane_mut(0);
        write_cell(y, unit * 2, samples[1] & mask);
        write_cell(y, unit * 2 + 1, samples[3] & mask);
    }

    fn block_ops(level: CapabilityLevel) -> Option<BlockOps> {
        match level {
            #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
            CapabilityLevel::Avx2 => Some(BlockOps {
                load: crate::avx2::avx2_load_planar422::<BITS>,
                store: crate::avx2::avx2_store_planar422,
            }),
            #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx512"))]
            CapabilityLevel::Avx512 | CapabilityLevel::Avx512Vbmi2 => Some(BlockOps {
                load: crate::avx512bw::avx512_load_planar422::<BITS>,
                store: crate::avx512bw::avx512_store_planar422,
            }),
            _ => None,
        }
    }
}

impl<const BITS: u32> SampleLayout for Planar444<BITS> {
    const GEOMETRY: UnitGeometry = UnitGeometry {
        samples: 3,
        bytes: [2, 2, 2],
    };

    #[inline]
    fn load_unit(src: &SrcPlanes<'_>, unit: usize, samples: &mut [u16]) {
        let mask = ((1u32 << BITS) - 1) as u16;
        samples[0] = read_cell(src.plane(1), unit) & mask;
        samples[1] = read_cell(src.plane(0), unit) & mask;
        samples[2] = read_cell(src.plane(2), unit) & mask;
    }

    #[inline]
    fn store_unit(samples: &[u16], dst: &mut DstPlanes<'_>, unit: usize) {
        let mask = ((1u32 << BITS) - 1) as u16;
        write_cell(dst.plane_mut(1), unit, samples[0] & mask);
        write_cell(dst.plane_mut(0), unit, samples[1] & mask);
        write_cell(dst.plane_mut(2), unit, samples[2] & mask);
    }

    fn block_ops(level: CapabilityLevel) -> Option<BlockOps> {
        match level {
            #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx512"))]
            CapabilityLevel::Avx512 | CapabilityLevel::Avx512Vbmi2 => Some(BlockOps {
                load: crate::avx512bw::avx512_load_planar444::<BITS>,
                store: crate::avx512bw::avx512_store_planar444,
            }),
            _ => None,
        }
    }
}

const fn gcd(a: usize, b: usize) -> usize {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

pub(crate) const fn lcm(a: usize, b: usize) -> usize {
    a / gcd(a, b) * b
}

const MAX_BATCH: usize = 12;

/// Converts samples `start..end` unit by unit, both bounds must be multiples of the unit pair.
pub(crate) fn scalar_repack<S: SampleLayout, D: SampleLayout>(
    src: &SrcPlanes<'_>,
    dst: &mut DstPlanes<'_>,
    start: usize,
    end: usize,
) {
    let batch = lcm(S::GEOMETRY.samples, D::GEOMETRY.samples);
    let mut store = [0u16; MAX_BATCH];
    let samples = &mut store[..batch];
    let mut at = start;
    while at + batch <= end {
        let src_unit = at / S::GEOMETRY.samples;
        for (i, chunk) in samples.chunks_exact_mut(S::GEOMETRY.samples).enumerate() {
            S::load_unit(src, src_unit + i, chunk);
        }
        let dst_unit = at / D::GEOMETRY.samples;
        for (i, chunk) in samples.chunks_exact(D::GEOMETRY.samples).enumerate() {
            D::store_unit(chunk, dst, dst_unit + i);
        }
        at += batch;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack_planar422<D: SampleLayout>(y: &[u16], cb: &[u16], cr: &[u16], size: usize) -> Vec<u8> {
        let mut out = vec![0u8; size];
        let src = SrcPlanes::planar(y, cb, cr);
        let mut dst = DstPlanes::packed(&mut out);
        scalar_repack::<Planar422<12>, D>(&src, &mut dst, 0, y.len() * 2);
        out
    }

    #[test]
    fn test_rfc4175_10bit_bit_order() {
        let (y, cb, cr) = ([0u16, 0x2AA], [0x3FFu16], [0x155u16]);
        assert_eq!(
            pack_planar422::<Rfc4175<10, true>>(&y, &cb, &cr, 5),
            [0xFF, 0xC0, 0x05, 0x56, 0xAA]
        );
        assert_eq!(
            pack_planar422::<Rfc4175<10, false>>(&y, &cb, &cr, 5),
            [0xFF, 0x03, 0x50, 0x95, 0xAA]
        );
    }

    #[test]
    fn test_rfc4175_12bit_bit_order() {
        let (y, cb, cr) = ([0x123u16, 0], [0xABCu16], [0xFFFu16]);
        assert_eq!(
            pack_planar422::<Rfc4175<12, true>>(&y, &cb, &cr, 6),
            [0xAB, 0xC1, 0x23, 0xFF, 0xF0, 0x00]
        );
        assert_eq!(
            pack_planar422::<Rfc4175<12, false>>(&y, &cb, &cr, 6),
            [0xBC, 0x3A, 0x12, 0xFF, 0x0F, 0x00]
        );
    }

    #[test]
    fn test_containers_layout() {
        let (y, cb, cr) = ([1u16, 0x3], [0x3FFu16], [0x2u16]);
        assert_eq!(
            pack_planar422::<Y210>(&y, &cb, &cr, 8),
            [0x40, 0x00, 0xC0, 0xFF, 0xC0, 0x00, 0x80, 0x00]
        );
        let (y, cb, cr) = ([0x200u16, 0x155], [0x3FFu16], [0x3u16]);
        assert_eq!(
            pack_planar422::<Uyvy8>(&y, &cb, &cr, 4),
            [0xFF, 0x80, 0x00, 0x55]
        );

        let stream: Vec<u16> = (1..=12).collect();
        let cb: Vec<u16> = stream.iter().step_by(4).copied().collect();
        let y: Vec<u16> = stream
            .chunks_exact(4)
            .flat_map(|g| [g[1], g[3]])
            .collect();
        let cr: Vec<u16> = stream.iter().skip(2).step_by(4).copied().collect();
        let v210 = pack_planar422::<V210>(&y, &cb, &cr, 16);
        assert_eq!(&v210[..4], &[0x01, 0x08, 0x30, 0x00]);
        let mut back = [0u16; 12];
        V210::load_unit(&SrcPlanes::packed(&v210), 0, &mut back);
        assert_eq!(back.to_vec(), stream);
    }

    #[test]
    fn test_planar444_stream_order() {
        let (y_g, b_r, r_b) = ([10u16], [20u16], [30u16]);
        let src = SrcPlanes::planar(&y_g, &b_r, &r_b);
        let mut samples = [0u16; 3];
        Planar444::<10>::load_unit(&src, 0, &mut samples);
        assert_eq!(samples, [20, 10, 30]);
    }

    #[test]
    fn test_padding_bits_are_dropped() {
        let (y, cb, cr) = ([0xFC00u16 | 0x155, 0x8000], [0xF3FFu16], [0x0400u16]);
        let packed = pack_planar422::<Rfc4175<10, true>>(&y, &cb, &cr, 5);
        let mut samples = [0u16; 4];
        Rfc4175::<10, true>::load_unit(&SrcPlanes::packed(&packed), 0, &mut samples);
        assert_eq!(samples, [0x3FF, 0x155, 0, 0]);
    }

    #[test]
    fn test_windows_split_planes() {
        let mut y = [0u16; 8];
        let mut cb = [0u16; 4];
        let mut cr = [0u16; 4];
        let mut dst = DstPlanes::planar(&mut y, &mut cb, &mut cr);
        {
            let mut window = dst.window_mut(Planar422::<10>::GEOMETRY, 4, 8);
            assert_eq!(window.plane(0).len(), 8);
            assert_eq!(window.plane(1).len(), 4);
            window.plane_mut(2)[0] = 7;
        }
        assert_eq!(dst.plane(2)[2], 7);
        assert_eq!(lcm(4, 3), 12);
        assert_eq!(lcm(12, 4), 12);
        assert_eq!(lcm(2, 3), 6);
    }
}
