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
//! Index tables shared by the vector tiers.

/// Byte shuffle moving two `group` byte pixel groups, found at `first` and `second`,
/// into the low bytes of two 64 bit lanes so each lane reads as one integer.
pub(crate) const fn gather_groups(
    group: usize,
    first: usize,
    second: usize,
    msb: bool,
) -> [u8; 16] {
    let mut mask = [0x80u8; 16];
    let mut i = 0;
    while i < group {
        let k = if msb { group - 1 - i } else { i };
        mask[i] = (first + k) as u8;
        mask[8 + i] = (second + k) as u8;
        i += 1;
    }
    mask
}

/// Inverse of [gather_groups] writing both groups back to back from the start of the lane.
pub(crate) const fn scatter_groups(group: usize, msb: bool) -> [u8; 16] {
    let mut mask = [0x80u8; 16];
    let mut q = 0;
    while q < 2 {
        let mut j = 0;
        while j < group {
            let k = if msb { group - 1 - j } else { j };
            mask[q * group + j] = (q * 8 + k) as u8;
            j += 1;
        }
        q += 1;
    }
    mask
}

/// Spreads 24 samples into 8 lanes of 64 bits, three cells per lane.
pub(crate) const V210_SPREAD_WORDS: [u16; 32] = {
    let mut table = [0u16; 32];
    let mut n = 0;
    while n < 24 {
        table[(n / 3) * 4 + n % 3] = n as u16;
        n += 1;
    }
    table
};

/// Inverse of [V210_SPREAD_WORDS].
pub(crate) const V210_COMPACT_WORDS: [u16; 32] = {
    let mut table = [0u16; 32];
    let mut n = 0;
    while n < 24 {
        table[n] = ((n / 3) * 4 + n % 3) as u16;
        n += 1;
    }
    table
};

/// 4:2:2 stream to [16 luma | 8 Cb | 8 Cr].
pub(crate) const PLANAR422_SPLIT_WORDS: [u16; 32] = {
    let mut table = [0u16; 32];
    let mut i = 0;
    while i < 16 {
        table[i] = (2 * i + 1) as u16;
        i += 1;
    }
    let mut i = 0;
    while i < 8 {
        table[16 + i] = (4 * i) as u16;
        table[24 + i] = (4 * i + 2) as u16;
        i += 1;
    }
    table
};

/// Inverse of [PLANAR422_SPLIT_WORDS].
pub(crate) const PLANAR422_MERGE_WORDS: [u16; 32] = {
    let mut table = [0u16; 32];
    let mut n = 0;
    while n < 32 {
        table[n] = match n % 4 {
            0 => 16 + n / 4,
            1 => 2 * (n / 4),
            2 => 24 + n / 4,
            _ => 2 * (n / 4) + 1,
        } as u16;
        n += 1;
    }
    table
};

/// Two step two-source permutes pulling component `t` out of 96 stream samples.
///
/// The first permute selects from stage registers 0 and 1, the second from its
/// result and stage register 2.
pub(crate) const PLANAR444_SPLIT_WORDS: [[[u16; 32]; 2]; 3] = {
    let mut table = [[[0u16; 32]; 2]; 3];
    let mut t = 0;
    while t < 3 {
        let mut i = 0;
        while i < 32 {
            let n = 3 * i + t;
            if n < 64 {
                table[t][0][i] = n as u16;
                table[t][1][i] = i as u16;
            } else {
                table[t][1][i] = (32 + n - 64) as u16;
            }
            i += 1;
        }
        t += 1;
    }
    table
};

/// Two step permutes building stage register `r` from the three component registers.
pub(crate) const PLANAR444_MERGE_WORDS: [[[u16; 32]; 2]; 3] = {
    let mut table = [[[0u16; 32]; 2]; 3];
    let mut r = 0;
    while r < 3 {
        let mut j = 0;
        while j < 32 {
            let n = 32 * r + j;
            let (i, t) = (n / 3, n % 3);
            table[r][0][j] = match t {
                0 => i as u16,
                1 => (32 + i) as u16,
                _ => 0,
            };
            table[r][1][j] = if t < 2 { j as u16 } else { (32 + i) as u16 };
            j += 1;
        }
        r += 1;
    }
    table
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_v210_tables_are_inverse() {
        for n in 0..24 {
            let lane = V210_COMPACT_WORDS[n] as usize;
            assert_eq!(V210_SPREAD_WORDS[lane] as usize, n);
        }
    }

    #[test]
    fn test_planar422_tables_are_inverse() {
        let stream: Vec<u16> = (0..32).collect();
        let split: Vec<u16> = PLANAR422_SPLIT_WORDS
            .iter()
            .map(|&i| stream[i as usize])
            .collect();
        let merged: Vec<u16> = PLANAR422_MERGE_WORDS
            .iter()
            .map(|&i| split[i as usize])
            .collect();
        assert_eq!(merged, stream);
    }

    #[test]
    fn test_planar444_tables_are_inverse() {
        let stream: Vec<u16> = (0..96).collect();
        let permute = |a: &[u16], idx: &[u16; 32], b: &[u16]| -> Vec<u16> {
            idx.iter()
                .map(|&i| {
                    let i = i as usize & 63;
                    if i < 32 {
                        a[i]
                    } else {
                        b[i - 32]
                    }
                })
                .collect()
        };
        let components: Vec<Vec<u16>> = (0..3)
            .map(|t| {
                let first = permute(&stream[0..32], &PLANAR444_SPLIT_WORDS[t][0], &stream[32..64]);
                permute(&first, &PLANAR444_SPLIT_WORDS[t][1], &stream[64..96])
            })
            .collect();
        for t in 0..3 {
            for i in 0..32 {
                assert_eq!(components[t][i] as usize, 3 * i + t);
            }
        }
        for r in 0..3 {
            let first = permute(
                &components[0],
                &PLANAR444_MERGE_WORDS[r][0],
                &components[1],
            );
            let back = permute(&first, &PLANAR444_MERGE_WORDS[r][1], &components[2]);
            assert_eq!(back, stream[32 * r..32 * r + 32].to_vec());
        }
    }
}
