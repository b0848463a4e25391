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
use crate::shuffle_tables::{V210_COMPACT_WORDS, V210_SPREAD_WORDS};
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

#[target_feature(enable = "avx512f", enable = "avx512bw", enable = "avx512vl")]
pub(crate) unsafe fn avx512_load_uyvy(src: &SrcPlanes<'_>, block: usize, stage: &mut SampleStage) {
    let src_ptr = src.plane(0).as_ptr().add(block * 96);
    let dst_ptr = stage.samples.as_mut_ptr() as *mut i16;
    for r in 0..3 {
        let bytes = _mm256_loadu_si256(src_ptr.add(r * 32) as *const __m256i);
        let samples = _mm512_slli_epi16::<2>(_mm512_cvtepu8_epi16(bytes));
        _mm512_storeu_epi16(dst_ptr.add(r * 32), samples);
    }
}

#[target_feature(enable = "avx512f", enable = "avx512bw", enable = "avx512vl")]
pub(crate) unsafe fn avx512_store_uyvy(stage: &SampleStage, dst: &mut DstPlanes<'_>, block: usize) {
    let src_ptr = stage.samples.as_ptr() as *const i16;
    let dst_ptr = dst.plane_mut(0).as_mut_ptr().add(block * 96);
    for r in 0..3 {
        let samples = _mm512_srli_epi16::<2>(_mm512_loadu_epi16(src_ptr.add(r * 32)));
        _mm256_storeu_si256(
            dst_ptr.add(r * 32) as *mut __m256i,
            _mm512_cvtepi16_epi8(samples),
        );
    }
}

#[target_feature(enable = "avx512f", enable = "avx512bw", enable = "avx512vl")]
pub(crate) unsafe fn avx512_load_y210(src: &SrcPlanes<'_>, block: usize, stage: &mut SampleStage) {
    let src_ptr = src.plane(0).as_ptr().add(block * 192) as *const i16;
    let dst_ptr = stage.samples.as_mut_ptr() as *mut i16;
    for r in 0..3 {
        let cells = _mm512_srli_epi16::<6>(_mm512_loadu_epi16(src_ptr.add(r * 32)));
        // Rotating each 32 bit lane by 16 swaps Y0 Cb into Cb Y0.
        _mm512_storeu_epi16(dst_ptr.add(r * 32), _mm512_rol_epi32::<16>(cells));
    }
}

#[target_feature(enable = "avx512f", enable = "avx512bw", enable = "avx512vl")]
pub(crate) unsafe fn avx512_store_y210(stage: &SampleStage, dst: &mut DstPlanes<'_>, block: usize) {
    let src_ptr = stage.samples.as_ptr() as *const i16;
    let dst_ptr = dst.plane_mut(0).as_mut_ptr().add(block * 192) as *mut i16;
    for r in 0..3 {
        let samples = _mm512_rol_epi32::<16>(_mm512_loadu_epi16(src_ptr.add(r * 32)));
        _mm512_storeu_epi16(dst_ptr.add(r * 32), _mm512_slli_epi16::<6>(samples));
    }
}

#[inline(always)]
unsafe fn avx512_load_v210_impl<const HAS_VBMI2: bool>(
    src: &SrcPlanes<'_>,
    block: usize,
    stage: &mut SampleStage,
) {
    let src_ptr = src.plane(0).as_ptr().add(block * 128);
    let dst_ptr = stage.samples.as_mut_ptr() as *mut i16;
    let mask = _mm512_set1_epi64(0x3ff);
    let compact = _mm512_loadu_epi16(V210_COMPACT_WORDS.as_ptr() as *const i16);

    for j in 0..4 {
        let lanes = _mm512_cvtepu32_epi64(_mm256_loadu_si256(src_ptr.add(j * 32) as *const __m256i));
        let s0 = _mm512_and_si512(lanes, mask);
        let s1 = _mm512_slli_epi64::<16>(_mm512_and_si512(_mm512_srli_epi64::<10>(lanes), mask));
        let s2 = _mm512_slli_epi64::<32>(_mm512_and_si512(_mm512_srli_epi64::<20>(lanes), mask));
        let samples = _mm512_or_si512(s0, _mm512_or_si512(s1, s2));
        let packed = if HAS_VBMI2 {
            _mm512_maskz_compress_epi16(0x7777_7777, samples)
        } else {
            _mm512_permutexvar_epi16(compact, samples)
        };
        _mm512_mask_storeu_epi16(dst_ptr.add(j * 24), 0x00FF_FFFF, packed);
    }
}

/// Unpacks eight v210 blocks, 32 words holding 96 samples.
#[target_feature(enable = "avx512f", enable = "avx512bw", enable = "avx512vl")]
pub(crate) unsafe fn avx512_load_v210(src: &SrcPlanes<'_>, block: usize, stage: &mut SampleStage) {
    avx512_load_v210_impl::<false>(src, block, stage);
}

#[target_feature(
    enable = "avx512f",
    enable = "avx512bw",
    enable = "avx512vl",
    enable = "avx512vbmi",
    enable = "avx512vbmi2"
)]
pub(crate) unsafe fn avx512vbmi2_load_v210(
    src: &SrcPlanes<'_>,
    block: usize,
    stage: &mut SampleStage,
) {
    avx512_load_v210_impl::<true>(src, block, stage);
}

#[target_feature(enable = "avx512f", enable = "avx512bw", enable = "avx512vl")]
pub(crate) unsafe fn avx512_store_v210(stage: &SampleStage, dst: &mut DstPlanes<'_>, block: usize) {
    let src_ptr = stage.samples.as_ptr() as *const i16;
    let dst_ptr = dst.plane_mut(0).as_mut_ptr().add(block * 128);
    let mask = _mm512_set1_epi64(0x3ff);
    let spread = _mm512_loadu_epi16(V210_SPREAD_WORDS.as_ptr() as *const i16);

    for j in 0..4 {
        let samples = _mm512_maskz_loadu_epi16(0x00FF_FFFF, src_ptr.add(j * 24));
        let lanes = _mm512_maskz_permutexvar_epi16(0x7777_7777, spread, samples);
        let w0 = _mm512_and_si512(lanes, mask);
        let w1 = _mm512_slli_epi64::<10>(_mm512_and_si512(_mm512_srli_epi64::<16>(lanes), mask));
        let w2 = _mm512_slli_epi64::<20>(_mm512_and_si512(_mm512_srli_epi64::<32>(lanes), mask));
        let words = _mm512_cvtepi64_epi32(_mm512_or_si512(w0, _mm512_or_si512(w1, w2)));
        _mm256_storeu_si256(dst_ptr.add(j * 32) as *mut __m256i, words);
    }
}
