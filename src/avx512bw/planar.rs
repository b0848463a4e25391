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
use crate::shuffle_tables::{
    PLANAR422_MERGE_WORDS, PLANAR422_SPLIT_WORDS, PLANAR444_MERGE_WORDS, PLANAR444_SPLIT_WORDS,
};
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

#[inline(always)]
unsafe fn _mm512_load_table(table: &[u16; 32]) -> __m512i {
    _mm512_loadu_epi16(table.as_ptr() as *const i16)
}

#[target_feature(enable = "avx512f", enable = "avx512bw", enable = "avx512vl")]
pub(crate) unsafe fn avx512_load_planar422<const BITS: u32>(
    src: &SrcPlanes<'_>,
    block: usize,
    stage: &mut SampleStage,
) {
    let y_ptr = src.plane(0).as_ptr().add(block * 96);
    let cb_ptr = src.plane(1).as_ptr().add(block * 48);
    let cr_ptr = src.plane(2).as_ptr().add(block * 48);
    let dst_ptr = stage.samples.as_mut_ptr() as *mut i16;
    let mask = _mm512_set1_epi16(((1u32 << BITS) - 1) as i16);
    let merge = _mm512_load_table(&PLANAR422_MERGE_WORDS);

    for r in 0..3 {
        let y = _mm256_loadu_si256(y_ptr.add(r * 32) as *const __m256i);
        let cb = _mm_loadu_si128(cb_ptr.add(r * 16) as *const __m128i);
        let cr = _mm_loadu_si128(cr_ptr.add(r * 16) as *const __m128i);
        let planes =
            _mm512_inserti32x4::<3>(_mm512_inserti32x4::<2>(_mm512_castsi256_si512(y), cb), cr);
        let samples = _mm512_and_si512(_mm512_permutexvar_epi16(merge, planes), mask);
        _mm512_storeu_epi16(dst_ptr.add(r * 32), samples);
    }
}

#[target_feature(enable = "avx512f", enable = "avx512bw", enable = "avx512vl")]
pub(crate) unsafe fn avx512_store_planar422(
    stage: &SampleStage,
    dst: &mut DstPlanes<'_>,
    block: usize,
) {
    let src_ptr = stage.samples.as_ptr() as *const i16;
    let y_ptr = dst.plane_mut(0).as_mut_ptr().add(block * 96);
    let cb_ptr = dst.plane_mut(1).as_mut_ptr().add(block * 48);
    let cr_ptr = dst.plane_mut(2).as_mut_ptr().add(block * 48);
    let split = _mm512_load_table(&PLANAR422_SPLIT_WORDS);

    for r in 0..3 {
        let v = _mm512_permutexvar_epi16(split, _mm512_loadu_epi16(src_ptr.add(r * 32)));
        _mm256_storeu_si256(
            y_ptr.add(r * 32) as *mut __m256i,
            _mm512_castsi512_si256(v),
        );
        _mm_storeu_si128(
            cb_ptr.add(r * 16) as *mut __m128i,
            _mm512_extracti32x4_epi32::<2>(v),
        );
        _mm_storeu_si128(
            cr_ptr.add(r * 16) as *mut __m128i,
            _mm512_extracti32x4_epi32::<3>(v),
        );
    }
}

/// Plane holding stream component `t` of a 4:4:4 pixel.
const COMPONENT_PLANE: [usize; 3] = [1, 0, 2];

/// Interleaves 32 pixels of three planes into 96 stream samples.
#[target_feature(enable = "avx512f", enable = "avx512bw", enable = "avx512vl")]
pub(crate) unsafe fn avx512_load_planar444<const BITS: u32>(
    src: &SrcPlanes<'_>,
    block: usize,
    stage: &mut SampleStage,
) {
    let mask = _mm512_set1_epi16(((1u32 << BITS) - 1) as i16);
    let offset = block * 64;
    let c0 = _mm512_and_si512(
        _mm512_loadu_epi16(src.plane(COMPONENT_PLANE[0]).as_ptr().add(offset) as *const i16),
        mask,
    );
    let c1 = _mm512_and_si512(
        _mm512_loadu_epi16(src.plane(COMPONENT_PLANE[1]).as_ptr().add(offset) as *const i16),
        mask,
    );
    let c2 = _mm512_and_si512(
        _mm512_loadu_epi16(src.plane(COMPONENT_PLANE[2]).as_ptr().add(offset) as *const i16),
        mask,
    );
    let dst_ptr = stage.samples.as_mut_ptr() as *mut i16;

    for (r, tables) in PLANAR444_MERGE_WORDS.iter().enumerate() {
        let first = _mm512_permutex2var_epi16(c0, _mm512_load_table(&tables[0]), c1);
        let samples = _mm512_permutex2var_epi16(first, _mm512_load_table(&tables[1]), c2);
        _mm512_storeu_epi16(dst_ptr.add(r * 32), samples);
    }
}

#[target_feature(enable = "avx512f", enable = "avx512bw", enable = "avx512vl")]
pub(crate) unsafe fn avx512_store_planar444(
    stage: &SampleStage,
    dst: &mut DstPlanes<'_>,
    block: usize,
) {
    let src_ptr = stage.samples.as_ptr() as *const i16;
    let s0 = _mm512_loadu_epi16(src_ptr);
    let s1 = _mm512_loadu_epi16(src_ptr.add(32));
    let s2 = _mm512_loadu_epi16(src_ptr.add(64));

    for (t, tables) in PLANAR444_SPLIT_WORDS.iter().enumerate() {
        let first = _mm512_permutex2var_epi16(s0, _mm512_load_table(&tables[0]), s1);
        let component = _mm512_permutex2var_epi16(first, _mm512_load_table(&tables[1]), s2);
        let plane = dst.plane_mut(COMPONENT_PLANE[t]).as_mut_ptr().add(block * 64);
        _mm512_storeu_epi16(plane as *mut i16, component);
    }
}
