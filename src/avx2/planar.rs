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

/// Interleaves 24 luma and 12+12 chroma cells into 48 stream samples.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn avx2_load_planar422<const BITS: u32>(
    src: &SrcPlanes<'_>,
    block: usize,
    stage: &mut SampleStage,
) {
    let y_ptr = src.plane(0).as_ptr().add(block * 48);
    let cb_ptr = src.plane(1).as_ptr().add(block * 24);
    let cr_ptr = src.plane(2).as_ptr().add(block * 24);
    let dst_ptr = stage.samples.as_mut_ptr();
    let mask = _mm256_set1_epi16(((1u32 << BITS) - 1) as i16);

    for r in 0..3 {
        let y = _mm_loadu_si128(y_ptr.add(r * 16) as *const __m128i);
        let cb = _mm_loadl_epi64(cb_ptr.add(r * 8) as *const __m128i);
        let cr = _mm_loadl_epi64(cr_ptr.add(r * 8) as *const __m128i);
        let chroma = _mm_unpacklo_epi16(cb, cr);
        let first = _mm_unpacklo_epi16(chroma, y);
        let second = _mm_unpackhi_epi16(chroma, y);
        let samples = _mm256_and_si256(_mm256_set_m128i(second, first), mask);
        _mm256_storeu_si256(dst_ptr.add(r * 16) as *mut __m256i, samples);
    }
}

#[target_feature(enable = "avx2")]
pub(crate) unsafe fn avx2_store_planar422(
    stage: &SampleStage,
    dst: &mut DstPlanes<'_>,
    block: usize,
) {
    let src_ptr = stage.samples.as_ptr();
    let y_ptr = dst.plane_mut(0).as_mut_ptr().add(block * 48);
    let cb_ptr = dst.plane_mut(1).as_mut_ptr().add(block * 24);
    let cr_ptr = dst.plane_mut(2).as_mut_ptr().add(block * 24);
    // Odd cells are luma, even cells alternate Cb and Cr.
    let split = _mm_setr_epi8(2, 3, 6, 7, 10, 11, 14, 15, 0, 1, 4, 5, 8, 9, 12, 13);
    let chroma_split = _mm_setr_epi8(0, 1, 4, 5, 8, 9, 12, 13, 2, 3, 6, 7, 10, 11, 14, 15);

    for r in 0..3 {
        let first = _mm_shuffle_epi8(_mm_loadu_si128(src_ptr.add(r * 16) as *const __m128i), split);
        let second = _mm_shuffle_epi8(
            _mm_loadu_si128(src_ptr.add(r * 16 + 8) as *const __m128i),
            split,
        );
        let y = _mm_unpacklo_epi64(first, second);
        let chroma = _mm_shuffle_epi8(_mm_unpackhi_epi64(first, second), chroma_split);
        _mm_storeu_si128(y_ptr.add(r * 16) as *mut __m128i, y);
        _mm_storel_epi64(cb_ptr.add(r * 8) as *mut __m128i, chroma);
        _mm_storel_epi64(
            cr_ptr.add(r * 8) as *mut __m128i,
            _mm_unpackhi_epi64(chroma, chroma),
        );
    }
}
