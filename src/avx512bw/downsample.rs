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
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

#[inline(always)]
const fn byte_mask(bytes: usize) -> __mmask64 {
    if bytes >= 64 {
        u64::MAX
    } else {
        (1u64 << bytes) - 1
    }
}

/// Copies every other pixel group of `src` into `dst`, `groups` groups of `group_size` bytes.
///
/// # Safety
///
/// `group_size` is at most 32, `src` holds at least `(2 * groups - 1) * group_size` bytes
/// and `dst` at least `groups * group_size`.
#[target_feature(enable = "avx512f", enable = "avx512bw", enable = "avx512vbmi")]
pub(crate) unsafe fn avx512vbmi_downsample_line(
    src: &[u8],
    dst: &mut [u8],
    group_size: usize,
    groups: usize,
) {
    let per_step = 32 / group_size;
    let mut table = [0u8; 64];
    for (byte, slot) in table.iter_mut().enumerate().take(per_step * group_size) {
        *slot = ((byte / group_size) * 2 * group_size + byte % group_size) as u8;
    }
    let index = _mm512_loadu_si512(table.as_ptr().cast());

    let src_ptr = src.as_ptr() as *const i8;
    let dst_ptr = dst.as_mut_ptr() as *mut i8;
    let mut group = 0usize;
    while group < groups {
        let n = per_step.min(groups - group);
        let load_mask = byte_mask((2 * n - 1) * group_size);
        let store_mask = byte_mask(n * group_size);
        let line = _mm512_maskz_loadu_epi8(load_mask, src_ptr.add(group * 2 * group_size));
        let picked = _mm512_permutexvar_epi8(index, line);
        _mm512_mask_storeu_epi8(dst_ptr.add(group * group_size), store_mask, picked);
        group += n;
    }
}
