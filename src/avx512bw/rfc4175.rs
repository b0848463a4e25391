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
use crate::layouts::{DstPlanes, SampleStage, SrcPlanes};
use crate::shuffle_tables::{gather_groups, scatter_groups};
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

#[inline(always)]
unsafe fn _mm512_spread_samples<const BITS: u32, const MSB: bool>(groups: __m512i) -> __m512i {
    let mask = _mm512_set1_epi64((1i64 << BITS) - 1);
    let mut samples = _mm512_setzero_si512();
    for k in 0..4u32 {
        let at = if MSB { BITS * (3 - k) } else { BITS * k };
        let sample = _mm512_and_si512(_mm512_srlv_epi64(groups, _mm512_set1_epi64(at as i64)), mask);
        samples = _mm512_or_si512(
            samples,
            _mm512_sllv_epi64(sample, _mm512_set1_epi64(16 * k as i64)),
        );
    }
    samples
}

#[inline(always)]
unsafe fn _mm512_gather_samples<const BITS: u32, const MSB: bool>(samples: __m512i) -> __m512i {
    let mask = _mm512_set1_epi64((1i64 << BITS) - 1);
    let mut groups = _mm512_setzero_si512();
    for k in 0..4u32 {
        let at = if MSB { BITS * (3 - k) } else { BITS * k };
        let sample = _mm512_and_si512(
            _mm512_srlv_epi64(samples, _mm512_set1_epi64(16 * k as i64)),
            mask,
        );
        groups = _mm512_or_si512(groups, _mm512_sllv_epi64(sample, _mm512_set1_epi64(at as i64)));
    }
    groups
}

#[inline(always)]
unsafe fn _mm512_broadcast_table(table: &[u8; 16]) -> __m512i {
    _mm512_broadcast_i32x4(_mm_loadu_si128(table.as_ptr() as *const __m128i))
}

/// Byte masks of one register worth of groups, 8 groups of `group` bytes.
#[inline(always)]
const fn stream_masks(group: usize) -> (__mmask64, __mmask64) {
    let bytes = (1u64 << (8 * group)) - 1;
    let lanes = 0x0101_0101_0101_0101u64 * ((1u64 << group) - 1);
    (bytes, lanes)
}

#[inline(always)]
unsafe fn avx512_load_rfc4175_impl<const BITS: u32, const MSB: bool, const HAS_VBMI2: bool>(
    src: &SrcPlanes<'_>,
    block: usize,
    stage: &mut SampleStage,
) {
    let group = BITS as usize / 2;
    let (bytes_mask, lanes_mask) = stream_masks(group);
    let lane_mask: __mmask16 = ((1u32 << (2 * group)) - 1) as __mmask16;
    let gather = _mm512_broadcast_table(&gather_groups(group, 0, group, MSB));
    let reverse = _mm512_broadcast_table(&gather_groups(group, 0, 8, true));

    let src_ptr = src.plane(0).as_ptr().add(block * 24 * group);
    let dst_ptr = stage.samples.as_mut_ptr() as *mut i16;

    for r in 0..3 {
        let base = src_ptr.add(r * 8 * group);
        let groups = if HAS_VBMI2 {
            let bytes = _mm512_maskz_loadu_epi8(bytes_mask, base as *const i8);
            let groups = _mm512_maskz_expand_epi8(lanes_mask, bytes);
            if MSB {
                _mm512_shuffle_epi8(groups, reverse)
            } else {
                groups
            }
        } else {
            let mut v =
                _mm512_castsi128_si512(_mm_maskz_loadu_epi8(lane_mask, base as *const i8));
            v = _mm512_inserti32x4::<1>(
                v,
                _mm_maskz_loadu_epi8(lane_mask, base.add(2 * group) as *const i8),
            );
            v = _mm512_inserti32x4::<2>(
                v,
                _mm_maskz_loadu_epi8(lane_mask, base.add(4 * group) as *const i8),
            );
            v = _mm512_inserti32x4::<3>(
                v,
                _mm_maskz_loadu_epi8(lane_mask, base.add(6 * group) as *const i8),
            );
            _mm512_shuffle_epi8(v, gather)
        };
        _mm512_storeu_epi16(
            dst_ptr.add(r * 32),
            _mm512_spread_samples::<BITS, MSB>(groups),
        );
    }
}

#[inline(always)]
unsafe fn avx512_store_rfc4175_impl<const BITS: u32, const MSB: bool, const HAS_VBMI2: bool>(
    stage: &SampleStage,
    dst: &mut DstPlanes<'_>,
    block: usize,
) {
    let group = BITS as usize / 2;
    let (bytes_mask, lanes_mask) = stream_masks(group);
    let lane_mask: __mmask16 = ((1u32 << (2 * group)) - 1) as __mmask16;
    let scatter = _mm512_broadcast_table(&scatter_groups(group, MSB));
    let reverse = _mm512_broadcast_table(&gather_groups(group, 0, 8, true));

    let src_ptr = stage.samples.as_ptr() as *const i16;
    let dst_ptr = dst.plane_mut(0).as_mut_ptr().add(block * 24 * group);

    for r in 0..3 {
        let groups =
            _mm512_gather_samples::<BITS, MSB>(_mm512_loadu_epi16(src_ptr.add(r * 32)));
        let out = dst_ptr.add(r * 8 * group);
        if HAS_VBMI2 {
            let groups = if MSB {
                _mm512_shuffle_epi8(groups, reverse)
            } else {
                groups
            };
            _mm512_mask_storeu_epi8(
                out as *mut i8,
                bytes_mask,
                _mm512_maskz_compress_epi8(lanes_mask, groups),
            );
        } else {
            let groups = _mm512_shuffle_epi8(groups, scatter);
            _mm_mask_storeu_epi8(out as *mut i8, lane_mask, _mm512_castsi512_si128(groups));
            _mm_mask_storeu_epi8(
                out.add(2 * group) as *mut i8,
                lane_mask,
                _mm512_extracti32x4_epi32::<1>(groups),
            );
            _mm_mask_storeu_epi8(
                out.add(4 * group) as *mut i8,
                lane_mask,
                _mm512_extracti32x4_epi32::<2>(groups),
            );
            _mm_mask_storeu_epi8(
                out.add(6 * group) as *mut i8,
                lane_mask,
                _mm512_extracti32x4_epi32::<3>(groups),
            );
        }
    }
}

#[target_feature(enable = "avx512f", enable = "avx512bw", enable = "avx512vl")]
pub(crate) unsafe fn avx512_load_rfc4175<const BITS: u32, const MSB: bool>(
    src: &SrcPlanes<'_>,
    block: usize,
    stage: &mut SampleStage,
) {
    avx512_load_rfc4175_impl::<BITS, MSB, false>(src, block, stage);
}

#[target_feature(
    enable = "avx512f",
    enable = "avx512bw",
    enable = "avx512vl",
    enable = "avx512vbmi",
    enable = "avx512vbmi2"
)]
pub(crate) unsafe fn avx512vbmi2_load_rfc4175<const BITS: u32, const MSB: bool>(
    src: &SrcPlanes<'_>,
    block: usize,
    stage: &mut SampleStage,
) {
    avx512_load_rfc4175_impl::<BITS, MSB, true>(src, block, stage);
}

#[target_feature(enable = "avx512f", enable = "avx512bw", enable = "avx512vl")]
pub(crate) unsafe fn avx512_store_rfc4175<const BITS: u32, const MSB: bool>(
    stage: &SampleStage,
    dst: &mut DstPlanes<'_>,
    block: usize,
) {
    avx512_store_rfc4175_impl::<BITS, MSB, false>(stage, dst, block);
}

#[target_feature(
    enable = "avx512f",
    enable = "avx512bw",
    enable = "avx512vl",
    enable = "avx512vbmi",
    enable = "avx512vbmi2"
)]
pub(crate) unsafe fn avx512vbmi2_store_rfc4175<const BITS: u32, const MSB: bool>(
    stage: &SampleStage,
    dst: &mut DstPlanes<'_>,
    block: usize,
) {
    avx512_store_rfc4175_impl::<BITS, MSB, true>(stage, dst, block);
}
