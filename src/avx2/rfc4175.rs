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
unsafe fn _mm256_spread_samples<const BITS: u32, const MSB: bool>(groups: __m256i) -> __m256i {
    let mask = _mm256_set1_epi64x((1i64 << BITS) - 1);
    let mut samples = _mm256_setzero_si256();
    for k in 0..4u32 {
        let at = if MSB { BITS * (3 - k) } else { BITS * k };
        let sample = _mm256_and_si256(
            _mm256_srlv_epi64(groups, _mm256_set1_epi64x(at as i64)),
            mask,
        );
        samples = _mm256_or_si256(
            samples,
            _mm256_sllv_epi64(sample, _mm256_set1_epi64x(16 * k as i64)),
        );
    }
    samples
}

#[inline(always)]
unsafe fn _mm256_gather_samples<const BITS: u32, const MSB: bool>(samples: __m256i) -> __m256i {
    let mask = _mm256_set1_epi64x((1i64 << BITS) - 1);
    let mut groups = _mm256_setzero_si256();
    for k in 0..4u32 {
        let at = if MSB { BITS * (3 - k) } else { BITS * k };
        let sample = _mm256_and_si256(
            _mm256_srlv_epi64(samples, _mm256_set1_epi64x(16 * k as i64)),
            mask,
        );
        groups = _mm256_or_si256(
            groups,
            _mm256_sllv_epi64(sample, _mm256_set1_epi64x(at as i64)),
        );
    }
    groups
}

/// Unpacks 48 samples, 12 groups of 4, from an RFC4175 stream.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn avx2_load_rfc4175<const BITS: u32, const MSB: bool>(
    src: &SrcPlanes<'_>,
    block: usize,
    stage: &mut SampleStage,
) {
    let group = BITS as usize / 2;
    let lo_mask = gather_groups(group, 0, group, MSB);
    let hi_mask = gather_groups(group, 16 - 2 * group, 16 - group, MSB);
    let shuffle = _mm256_set_m128i(
        _mm_loadu_si128(hi_mask.as_ptr() as *const __m128i),
        _mm_loadu_si128(lo_mask.as_ptr() as *const __m128i),
    );

    let src_ptr = src.plane(0).as_ptr().add(block * 12 * group);
    let dst_ptr = stage.samples.as_mut_ptr();

    for r in 0..3 {
        let base = src_ptr.add(r * 4 * group);
        // Second load ends exactly at the fourth group, nothing past the block is read.
        let lo = _mm_loadu_si128(base as *const __m128i);
        let hi = _mm_loadu_si128(base.add(4 * group - 16) as *const __m128i);
        let groups = _mm256_shuffle_epi8(_mm256_set_m128i(hi, lo), shuffle);
        let samples = _mm256_spread_samples::<BITS, MSB>(groups);
        _mm256_storeu_si256(dst_ptr.add(r * 16) as *mut __m256i, samples);
    }
}

/// Packs 48 staged samples into 12 RFC4175 groups of 4.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn avx2_store_rfc4175<const BITS: u32, const MSB: bool>(
    stage: &SampleStage,
    dst: &mut DstPlanes<'_>,
    block: usize,
) {
    let group = BITS as usize / 2;
    let scatter = scatter_groups(group, MSB);
    let shuffle =
        _mm256_broadcastsi128_si256(_mm_loadu_si128(scatter.as_ptr() as *const __m128i));

    let mut packed = [0u8; 96];
    let src_ptr = stage.samples.as_ptr();

    for r in 0..3 {
        let samples = _mm256_loadu_si256(src_ptr.add(r * 16) as *const __m256i);
        let groups = _mm256_shuffle_epi8(_mm256_gather_samples::<BITS, MSB>(samples), shuffle);
        let out = packed.as_mut_ptr().add(r * 4 * group);
        _mm_storeu_si128(out as *mut __m128i, _mm256_castsi256_si128(groups));
        _mm_storeu_si128(
            out.add(2 * group) as *mut __m128i,
            _mm256_extracti128_si256::<1>(groups),
        );
    }

    std::ptr::copy_nonoverlapping(
        packed.as_ptr(),
        dst.plane_mut(0).as_mut_ptr().add(block * 12 * group),
        12 * group,
    );
}
