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
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

#[target_feature(enable = "avx2")]
pub(crate) unsafe fn avx2_load_uyvy(src: &SrcPlanes<'_>, block: usize, stage: &mut SampleStage) {
    let src_ptr = src.plane(0).as_ptr().add(block * 48);
    let dst_ptr = stage.samples.as_mut_ptr();
    for r in 0..3 {
        let bytes = _mm_loadu_si128(src_ptr.add(r * 16) as *const __m128i);
        let samples = _mm256_slli_epi16::<2>(_mm256_cvtepu8_epi16(bytes));
        _mm256_storeu_si256(dst_ptr.add(r * 16) as *mut __m256i, samples);
    }
}

#[target_feature(enable = "avx2")]
pub(crate) unsafe fn avx2_store_uyvy(stage: &SampleStage, dst: &mut DstPlanes<'_>, block: usize) {
    let src_ptr = stage.samples.as_ptr();
    let dst_ptr = dst.plane_mut(0).as_mut_ptr().add(block * 48);
    for r in 0..3 {
        let samples =
            _mm256_srli_epi16::<2>(_mm256_loadu_si256(src_ptr.add(r * 16) as *const __m256i));
        let packed = _mm256_packus_epi16(samples, samples);
        let bytes = _mm256_permute4x64_epi64::<0b1000>(packed);
        _mm_storeu_si128(
            dst_ptr.add(r * 16) as *mut __m128i,
            _mm256_castsi256_si128(bytes),
        );
    }
}

#[inline(always)]
unsafe fn _mm256_swap_cell_pairs(v: __m256i) -> __m256i {
    let swap = _mm256_setr_epi8(
        2, 3, 0, 1, 6, 7, 4, 5, 10, 11, 8, 9, 14, 15, 12, 13, 2, 3, 0, 1, 6, 7, 4, 5, 10, 11, 8,
        9, 14, 15, 12, 13,
    );
    _mm256_shuffle_epi8(v, swap)
}

#[target_feature(enable = "avx2")]
pub(crate) unsafe fn avx2_load_y210(src: &SrcPlanes<'_>, block: usize, stage: &mut SampleStage) {
    let src_ptr = src.plane(0).as_ptr().add(block * 96);
    let dst_ptr = stage.samples.as_mut_ptr();
    for r in 0..3 {
        let cells = _mm256_loadu_si256(src_ptr.add(r * 32) as *const __m256i);
        let samples = _mm256_swap_cell_pairs(_mm256_srli_epi16::<6>(cells));
        _mm256_storeu_si256(dst_ptr.add(r * 16) as *mut __m256i, samples);
    }
}

#[target_feature(enable = "avx2")]
pub(crate) unsafe fn avx2_store_y210(stage: &SampleStage, dst: &mut DstPlanes<'_>, block: usize) {
    let src_ptr = stage.samples.as_ptr();
    let dst_ptr = dst.plane_mut(0).as_mut_ptr().add(block * 96);
    for r in 0..3 {
        let samples = _mm256_loadu_si256(src_ptr.add(r * 16) as *const __m256i);
        let cells = _mm256_slli_epi16::<6>(_mm256_swap_cell_pairs(samples));
        _mm256_storeu_si256(dst_ptr.add(r * 32) as *mut __m256i, cells);
    }
}

/// Unpacks four v210 blocks, 16 words holding 48 samples.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn avx2_load_v210(src: &SrcPlanes<'_>, block: usize, stage: &mut SampleStage) {
    let src_ptr = src.plane(0).as_ptr().add(block * 64);
    let dst_ptr = stage.samples.as_mut_ptr();
    let mask = _mm256_set1_epi64x(0x3ff);
    let compact = _mm256_setr_epi8(
        0, 1, 2, 3, 4, 5, 8, 9, 10, 11, 12, 13, -1, -1, -1, -1, 0, 1, 2, 3, 4, 5, 8, 9, 10, 11,
        12, 13, -1, -1, -1, -1,
    );

    for j in 0..4 {
        let words = _mm_loadu_si128(src_ptr.add(j * 16) as *const __m128i);
        let lanes = _mm256_cvtepu32_epi64(words);
        let s0 = _mm256_and_si256(lanes, mask);
        let s1 = _mm256_slli_epi64::<16>(_mm256_and_si256(_mm256_srli_epi64::<10>(lanes), mask));
        let s2 = _mm256_slli_epi64::<32>(_mm256_and_si256(_mm256_srli_epi64::<20>(lanes), mask));
        let samples = _mm256_shuffle_epi8(_mm256_or_si256(s0, _mm256_or_si256(s1, s2)), compact);
        let out = dst_ptr.add(12 * j);
        // Each store carries 6 valid samples, the trailing zeros are overwritten next.
        _mm_storeu_si128(out as *mut __m128i, _mm256_castsi256_si128(samples));
        _mm_storeu_si128(
            out.add(6) as *mut __m128i,
            _mm256_extracti128_si256::<1>(samples),
        );
    }
}

#[target_feature(enable = "avx2")]
pub(crate) unsafe fn avx2_store_v210(stage: &SampleStage, dst: &mut DstPlanes<'_>, block: usize) {
    let src_ptr = stage.samples.as_ptr();
    let dst_ptr = dst.plane_mut(0).as_mut_ptr().add(block * 64);
    let mask = _mm256_set1_epi64x(0x3ff);
    let spread = _mm256_setr_epi8(
        0, 1, 2, 3, 4, 5, -1, -1, 6, 7, 8, 9, 10, 11, -1, -1, 0, 1, 2, 3, 4, 5, -1, -1, 6, 7, 8,
        9, 10, 11, -1, -1,
    );
    let low_words = _mm256_setr_epi32(0, 2, 4, 6, 0, 0, 0, 0);

    for j in 0..4 {
        let at = src_ptr.add(12 * j);
        let lo = _mm_loadu_si128(at as *const __m128i);
        let hi = _mm_loadu_si128(at.add(6) as *const __m128i);
        let lanes = _mm256_shuffle_epi8(_mm256_set_m128i(hi, lo), spread);
        let w0 = _mm256_and_si256(lanes, mask);
        let w1 = _mm256_slli_epi64::<10>(_mm256_and_si256(_mm256_srli_epi64::<16>(lanes), mask));
        let w2 = _mm256_slli_epi64::<20>(_mm256_and_si256(_mm256_srli_epi64::<32>(lanes), mask));
        let words = _mm256_permutevar8x32_epi32(
            _mm256_or_si256(w0, _mm256_or_si256(w1, w2)),
            low_words,
        );
        _mm_storeu_si128(
            dst_ptr.add(16 * j) as *mut __m128i,
            _mm256_castsi256_si128(words),
        );
    }
}
