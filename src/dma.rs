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
//! Copy engine offload.
//!
//! Source bytes are moved by a caller owned copy channel into a small ring of staging slots
//! while the CPU converts slots whose copies already landed. Output is identical to the plain
//! CPU path, the channel only hides memory latency.
use crate::capability::CapabilityLevel;
use crate::convert_error::{check_pixel_count, ConvertError};
use crate::dispatch::{select_kernel, Conversion, KernelHandle, MAX_BLOCK_SAMPLES};
use crate::layouts::{DstPlanes, SrcPlanes, UnitGeometry};

/// Address of memory as seen by the copy engine.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub struct Iova(pub u64);

impl Iova {
    #[inline]
    pub const fn offset(self, bytes: usize) -> Iova {
        Iova(self.0.wrapping_add(bytes as u64))
    }
}

/// Host slice paired with the device address of the same memory.
#[derive(Debug, Copy, Clone)]
pub struct DeviceSlice<'a, T> {
    pub data: &'a [T],
    pub iova: Iova,
}

impl<'a, T> DeviceSlice<'a, T> {
    pub const fn new(data: &'a [T], iova: Iova) -> Self {
        DeviceSlice { data, iova }
    }

    pub const fn len(&self) -> usize {
        self.data.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<'a> DeviceSlice<'a, u8> {
    pub(crate) const fn empty() -> Self {
        DeviceSlice {
            data: &[],
            iova: Iova(0),
        }
    }
}

impl<'a> DeviceSlice<'a, u16> {
    pub(crate) fn as_bytes(&self) -> DeviceSlice<'a, u8> {
        DeviceSlice {
            data: crate::layouts::u16_bytes(self.data),
            iova: self.iova,
        }
    }
}

/// Copy engine channel consumed by the `_dma` conversions.
///
/// A channel is used by one caller at a time, the `&mut` receiver enforces it.
///
/// # Safety
///
/// `iova_of` must return an address mapping exactly `len` bytes of the given host memory.
/// `submit_copy` may only write the `len` bytes at `dst`, and a copy counted by
/// `poll_completions` must be fully visible to the CPU. Completions are reported in
/// submission order.
pub unsafe trait DmaChannel {
    /// Device address of host memory, `None` when it is not mapped for the engine.
    fn iova_of(&self, ptr: *const u8, len: usize) -> Option<Iova>;

    /// Enqueues a copy of `len` bytes, false when the channel has no room or is broken.
    fn submit_copy(&mut self, dst: Iova, src: Iova, len: usize) -> bool;

    /// Retires at most `max` finished copies and returns how many were retired.
    fn poll_completions(&mut self, max: usize) -> usize;

    /// Bytes of source data staged per chunk.
    fn staging_chunk_bytes(&self) -> usize {
        256 * 1024
    }

    /// Chunks allowed in flight.
    fn staging_slots(&self) -> usize {
        4
    }
}

struct StagingSlot {
    planes: [Vec<u8>; 3],
    iova: [Iova; 3],
}

/// Ring of host buffers the channel copies source chunks into.
struct Staging {
    slots: Vec<StagingSlot>,
    geometry: UnitGeometry,
    chunk_samples: usize,
    copies_per_chunk: usize,
}

impl Staging {
    fn new<C: DmaChannel + ?Sized>(
        channel: &C,
        geometry: UnitGeometry,
        chunk_samples: usize,
        slots: usize,
    ) -> Option<Staging> {
        let mut ring = Vec::with_capacity(slots);
        for _ in 0..slots {
            let planes: [Vec<u8>; 3] =
                std::array::from_fn(|p| vec![0u8; geometry.plane_bytes(p, chunk_samples)]);
            let mut iova = [Iova::default(); 3];
            for (plane, address) in planes.iter().zip(iova.iter_mut()) {
                if !plane.is_empty() {
                    *address = channel.iova_of(plane.as_ptr(), plane.len())?;
                }
            }
            ring.push(StagingSlot { planes, iova });
        }
        Some(Staging {
            slots: ring,
            geometry,
            chunk_samples,
            copies_per_chunk: geometry.bytes.iter().filter(|&&b| b > 0).count(),
        })
    }

    /// Queues the copies of chunk `chunk`, returns how many the channel accepted.
    fn submit<C: DmaChannel + ?Sized>(
        &self,
        channel: &mut C,
        src: &[DeviceSlice<'_, u8>; 3],
        chunk: usize,
    ) -> Result<usize, usize> {
        let slot = &self.slots[chunk % self.slots.len()];
        let mut accepted = 0usize;
        for plane in 0..3 {
            let len = slot.planes[plane].len();
            if len == 0 {
                continue;
            }
            let from = src[plane]
                .iova
                .offset(self.geometry.plane_bytes(plane, chunk * self.chunk_samples));
            if !channel.submit_copy(slot.iova[plane], from, len) {
                return Err(accepted);
            }
            accepted += 1;
        }
        Ok(accepted)
    }

    fn view(&self, chunk: usize) -> SrcPlanes<'_> {
        let slot = &self.slots[chunk % self.slots.len()];
        SrcPlanes::from_bytes([&slot.planes[0], &slot.planes[1], &slot.planes[2]])
    }
}

/// Samples per staged chunk, a whole number of vector blocks.
fn plan_chunk_samples(geometry: UnitGeometry, chunk_bytes: usize) -> usize {
    let unit_bytes: usize = geometry.bytes.iter().sum();
    let samples = chunk_bytes / unit_bytes * geometry.samples;
    samples / MAX_BLOCK_SAMPLES * MAX_BLOCK_SAMPLES
}

/// Busy polls until `target` copies are retired.
fn wait_for<C: DmaChannel + ?Sized>(channel: &mut C, retired: &mut usize, target: usize) {
    while *retired < target {
        *retired += channel.poll_completions(target - *retired);
    }
}

fn run_on_cpu(
    kernel: &KernelHandle,
    src: &SrcPlanes<'_>,
    dst: &mut DstPlanes<'_>,
    start: usize,
    samples: usize,
) -> Result<(), ConvertError> {
    let src = src.window(kernel.src_geometry, start, samples);
    let mut dst = dst.window_mut(kernel.dst_geometry, start, samples);
    kernel.run(&src, &mut dst, samples)
}

/// Runs `conversion` reading the source through the channel's staging ring.
///
/// Validation happens up front, so a geometry failure never writes. A submit failure drains
/// the copies already queued and fails, chunks converted before it stay converted.
pub(crate) fn convert_staged<C: DmaChannel + ?Sized>(
    channel: &mut C,
    conversion: Conversion,
    ceiling: CapabilityLevel,
    src: [DeviceSlice<'_, u8>; 3],
    dst: &mut DstPlanes<'_>,
    width: u32,
    height: u32,
) -> Result<(), ConvertError> {
    let pixels = check_pixel_count(width, height, conversion.pixel_granularity())
        .inspect_err(|e| log::error!("{conversion:?} rejected {width}x{height}: {e}"))?;
    let samples = pixels * conversion.samples_per_pixel();
    let kernel = select_kernel(ceiling, conversion);
    let host = SrcPlanes::from_bytes([src[0].data, src[1].data, src[2].data]);
    kernel
        .check_planes(&host, dst, samples)
        .inspect_err(|e| log::error!("{conversion:?} rejected buffers: {e}"))?;
    for (plane, slice) in src.iter().enumerate() {
        if slice.iova.0.checked_add(slice.data.len() as u64).is_none() {
            log::error!("{conversion:?}: source plane {plane} wraps the device address space");
            return Err(ConvertError::PointerOverflow);
        }
    }

    let chunk_samples = plan_chunk_samples(kernel.src_geometry, channel.staging_chunk_bytes());
    let chunks = samples.checked_div(chunk_samples).unwrap_or(0);
    if chunks == 0 {
        return kernel.run(&host, dst, samples);
    }
    let slots = channel.staging_slots().clamp(1, chunks);
    let Some(staging) = Staging::new(channel, kernel.src_geometry, chunk_samples, slots) else {
        log::warn!("{conversion:?}: staging memory is not mapped for the channel, converting on CPU");
        return kernel.run(&host, dst, samples);
    };
    log::debug!(
        "{conversion:?}: {chunks} chunks of {chunk_samples} samples over {slots} slots on {}",
        kernel.level()
    );

    let mut queued = 0usize;
    let mut issued = 0usize;
    let mut retired = 0usize;
    for chunk in 0..chunks {
        let ahead = (chunk + slots).min(chunks);
        while queued < ahead {
            match staging.submit(channel, &src, queued) {
                Ok(accepted) => issued += accepted,
                Err(accepted) => {
                    issued += accepted;
                    wait_for(channel, &mut retired, issued);
                    log::error!("{conversion:?}: copy channel rejected chunk {queued}");
                    return Err(ConvertError::ChannelSubmitFailure { chunk: queued });
                }
            }
            queued += 1;
        }
        wait_for(
            channel,
            &mut retired,
            (chunk + 1) * staging.copies_per_chunk,
        );
        let mut window = dst.window_mut(kernel.dst_geometry, chunk * chunk_samples, chunk_samples);
        if let Err(e) = kernel.run(&staging.view(chunk), &mut window, chunk_samples) {
            wait_for(channel, &mut retired, issued);
            return Err(e);
        }
    }

    let done = chunks * chunk_samples;
    if done < samples {
        run_on_cpu(&kernel, &host, dst, done, samples - done)?;
    }
    Ok(())
}
