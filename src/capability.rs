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
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::OnceLock;

/// Vector ISA tier a conversion may use.
///
/// Levels are ordered, a ceiling permits every tier below it.
/// `Auto` is the highest value so it resolves to whatever the host provides.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub enum CapabilityLevel {
    None,
    Avx2,
    Avx512,
    Avx512Vbmi2,
    #[default]
    Auto,
}

impl CapabilityLevel {
    pub const fn name(self) -> &'static str {
        match self {
            CapabilityLevel::None => "none",
            CapabilityLevel::Avx2 => "avx2",
            CapabilityLevel::Avx512 => "avx512",
            CapabilityLevel::Avx512Vbmi2 => "avx512_vbmi2",
            CapabilityLevel::Auto => "auto",
        }
    }

    /// Effective tier for this ceiling on the current host.
    pub fn resolve(self) -> CapabilityLevel {
        self.min(detected_level())
    }
}

impl Display for CapabilityLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCapability(pub String);

impl Display for UnknownCapability {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("Unknown capability level \"{}\"", self.0))
    }
}

impl std::error::Error for UnknownCapability {}

impl FromStr for CapabilityLevel {
    type Err = UnknownCapability;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "scalar" => Ok(CapabilityLevel::None),
            "avx2" => Ok(CapabilityLevel::Avx2),
            "avx512" => Ok(CapabilityLevel::Avx512),
            "avx512_vbmi2" | "avx512vbmi2" => Ok(CapabilityLevel::Avx512Vbmi2),
            "auto" | "max" => Ok(CapabilityLevel::Auto),
            _ => Err(UnknownCapability(s.to_string())),
        }
    }
}

static DETECTED: OnceLock<CapabilityLevel> = OnceLock::new();

/// Highest tier the host supports, probed once per process.
pub fn detected_level() -> CapabilityLevel {
    *DETECTED.get_or_init(|| {
        let level = probe_host();
        log::debug!("detected capability level {level}");
        level
    })
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn probe_host() -> CapabilityLevel {
    let avx512 = std::arch::is_x86_feature_detected!("avx512f")
        && std::arch::is_x86_feature_detected!("avx512bw")
        && std::arch::is_x86_feature_detected!("avx512vl");
    if avx512 {
        if std::arch::is_x86_feature_detected!("avx512vbmi")
            && std::arch::is_x86_feature_detected!("avx512vbmi2")
        {
            return CapabilityLevel::Avx512Vbmi2;
        }
        return CapabilityLevel::Avx512;
    }
    if std::arch::is_x86_feature_detected!("avx2") {
        return CapabilityLevel::Avx2;
    }
    CapabilityLevel::None
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
fn probe_host() -> CapabilityLevel {
    CapabilityLevel::None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered() {
        assert!(CapabilityLevel::None < CapabilityLevel::Avx2);
        assert!(CapabilityLevel::Avx2 < CapabilityLevel::Avx512);
        assert!(CapabilityLevel::Avx512 < CapabilityLevel::Avx512Vbmi2);
        assert!(CapabilityLevel::Avx512Vbmi2 < CapabilityLevel::Auto);
    }

    #[test]
    fn test_resolve_never_exceeds_host() {
        let host = detected_level();
        assert_ne!(host, CapabilityLevel::Auto);
        assert_eq!(CapabilityLevel::Auto.resolve(), host);
        assert_eq!(CapabilityLevel::None.resolve(), CapabilityLevel::None);
        for level in [
            CapabilityLevel::Avx2,
            CapabilityLevel::Avx512,
            CapabilityLevel::Avx512Vbmi2,
        ] {
            let resolved = level.resolve();
            assert!(resolved <= level);
            assert!(resolved <= host);
        }
        assert_eq!(detected_level(), host);
    }

    #[test]
    fn test_names_round_trip() {
        for level in [
            CapabilityLevel::None,
            CapabilityLevel::Avx2,
            CapabilityLevel::Avx512,
            CapabilityLevel::Avx512Vbmi2,
            CapabilityLevel::Auto,
        ] {
            assert_eq!(level.name().parse::<CapabilityLevel>(), Ok(level));
        }
        assert_eq!("MAX".parse::<CapabilityLevel>(), Ok(CapabilityLevel::Auto));
        assert!("sse4".parse::<CapabilityLevel>().is_err());
    }
}
