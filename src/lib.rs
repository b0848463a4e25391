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
//! Bit exact repacking between ST 2110-20 RFC4175 pixel groups, 16 bit planes and the
//! V210, Y210 and UYVY containers.
//!
//! Every conversion is a synchronous call on the caller's thread taking a [CapabilityLevel]
//! ceiling. The scalar path is the reference, AVX2, AVX-512 and AVX-512 VBMI2 paths produce
//! identical bytes. The `_dma` variants read their source through a caller owned
//! [DmaChannel].
#![cfg_attr(docsrs, feature(doc_cfg))]
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
mod avx2;
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx512"))]
mod avx512bw;
mod capability;
mod convert_error;
mod dispatch;
mod dma;
mod dma_convert;
mod formats;
mod frame;
mod layouts;
mod rfc4175_422;
mod rfc4175_444;
#[cfg(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    any(feature = "avx", feature = "avx512")
))]
mod shuffle_tables;

pub use capability::{detected_level, CapabilityLevel, UnknownCapability};
pub use convert_error::{ConvertError, MismatchedPlane, MismatchedSize, Misalignment};
pub use dispatch::{select_kernel, Conversion, KernelHandle};
pub use dma::{DeviceSlice, DmaChannel, Iova};
pub use formats::{
    frame_size, least_linesize, plane_offset, ChromaSampling, PixelFormat, PixelGroup,
};
pub use frame::{convert_frame, downsample_frame, BufferStoreMut, VideoFrame, VideoFrameMut};

pub use rfc4175_422::rfc4175_422be10_to_yuv422p10le;
pub use rfc4175_422::yuv422p10le_to_rfc4175_422be10;
pub use rfc4175_422::rfc4175_422le10_to_yuv422p10le;
pub use rfc4175_422::yuv422p10le_to_rfc4175_422le10;
pub use rfc4175_422::rfc4175_422be10_to_422le10;
pub use rfc4175_422::rfc4175_422le10_to_422be10;
pub use rfc4175_422::rfc4175_422be10_to_422le8;
pub use rfc4175_422::rfc4175_422le8_to_422be10;
pub use rfc4175_422::rfc4175_422le10_to_v210;
pub use rfc4175_422::v210_to_rfc4175_422le10;
pub use rfc4175_422::rfc4175_422be10_to_v210;
pub use rfc4175_422::v210_to_rfc4175_422be10;
pub use rfc4175_422::rfc4175_422be10_to_y210;
pub use rfc4175_422::y210_to_rfc4175_422be10;
pub use rfc4175_422::rfc4175_422be12_to_yuv422p12le;
pub use rfc4175_422::yuv422p12le_to_rfc4175_422be12;
pub use rfc4175_422::rfc4175_422le12_to_yuv422p12le;
pub use rfc4175_422::yuv422p12le_to_rfc4175_422le12;
pub use rfc4175_422::rfc4175_422be12_to_422le12;
pub use rfc4175_422::rfc4175_422le12_to_422be12;

pub use rfc4175_444::rfc4175_444be10_to_yuv444p10le;
pub use rfc4175_444::yuv444p10le_to_rfc4175_444be10;
pub use rfc4175_444::rfc4175_444be10_to_gbrp10le;
pub use rfc4175_444::gbrp10le_to_rfc4175_444be10;
pub use rfc4175_444::rfc4175_444le10_to_yuv444p10le;
pub use rfc4175_444::yuv444p10le_to_rfc4175_444le10;
pub use rfc4175_444::rfc4175_444le10_to_gbrp10le;
pub use rfc4175_444::gbrp10le_to_rfc4175_444le10;
pub use rfc4175_444::rfc4175_444be12_to_yuv444p12le;
pub use rfc4175_444::yuv444p12le_to_rfc4175_444be12;
pub use rfc4175_444::rfc4175_444be12_to_gbrp12le;
pub use rfc4175_444::gbrp12le_to_rfc4175_444be12;
pub use rfc4175_444::rfc4175_444le12_to_yuv444p12le;
pub use rfc4175_444::yuv444p12le_to_rfc4175_444le12;
pub use rfc4175_444::rfc4175_444le12_to_gbrp12le;
pub use rfc4175_444::gbrp12le_to_rfc4175_444le12;
pub use rfc4175_444::rfc4175_444be10_to_444le10;
pub use rfc4175_444::rfc4175_444le10_to_444be10;
pub use rfc4175_444::rfc4175_444be12_to_444le12;
pub use rfc4175_444::rfc4175_444le12_to_444be12;

pub use dma_convert::rfc4175_422be10_to_yuv422p10le_dma;
pub use dma_convert::yuv422p10le_to_rfc4175_422be10_dma;
pub use dma_convert::rfc4175_422be10_to_422le10_dma;
pub use dma_convert::rfc4175_422le10_to_422be10_dma;
pub use dma_convert::rfc4175_422be10_to_422le8_dma;
pub use dma_convert::rfc4175_422be10_to_v210_dma;
pub use dma_convert::v210_to_rfc4175_422be10_dma;
pub use dma_convert::rfc4175_422be10_to_y210_dma;
pub use dma_convert::y210_to_rfc4175_422be10_dma;
pub use dma_convert::rfc4175_422be12_to_yuv422p12le_dma;
pub use dma_convert::rfc4175_422be12_to_422le12_dma;
