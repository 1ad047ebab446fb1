//! Random sources for password generation.
//!
//! `Os` reads the operating system CSPRNG. `Hardware` mixes the CPU cycle
//! counter into a small state machine; it is fast but carries no
//! cryptographic guarantee.

mod hw;

use rand::RngCore;
use rand::rngs::OsRng;
use rand_core::impls;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Which random source feeds the generator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    #[default]
    Os,
    Hardware,
}

impl Source {
    pub fn name(self) -> &'static str {
        match self {
            Source::Os => "os",
            Source::Hardware => hw::source_name(),
        }
    }
}

/// Boxed generator for `source`.
pub fn rng(source: Source) -> Box<dyn RngCore> {
    match source {
        Source::Os => Box::new(OsRng),
        Source::Hardware => Box::new(HwRng::new()),
    }
}

// =============================================================================
// Hardware mixer
// =============================================================================

/// Odd 64-bit multipliers, one picked per step from the mixed state.
const MULTIPLIERS: [u64; 12] = [
    0x9e37_79b9_7f4a_7c15,
    0xbf58_476d_1ce4_e5b9,
    0x94d0_49bb_1331_11eb,
    0xd6e8_feb8_6659_fd93,
    0xff51_afd7_ed55_8ccd,
    0xc4ce_b9fe_1a85_ec53,
    0x2545_f491_4f6c_dd1d,
    0x5851_f42d_4c95_7f2d,
    0xda94_2042_e4dd_58b5,
    0x27bb_2ee6_87b0_b0fd,
    0x6c8e_9cf5_7093_2bd5,
    0xa076_1d64_78bd_642f,
];

/// Cycle-counter seeded generator. State is wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct HwRng {
    state: u64,
}

impl HwRng {
    pub fn new() -> Self {
        Self {
            state: hw::entropy(),
        }
    }

    #[inline(always)]
    fn step(&mut self) -> u64 {
        let ent = hw::entropy();

        // Mix entropy into multiplier selection
        let mixed = self.state ^ ent;
        let idx = (mixed ^ (mixed >> 32)) as usize % MULTIPLIERS.len();

        // State transition: rotate, multiply, XOR entropy
        self.state = self.state.rotate_left(17).wrapping_mul(MULTIPLIERS[idx]) ^ ent;

        // SplitMix64 output finalizer
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

impl Default for HwRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for HwRng {
    fn next_u32(&mut self) -> u32 {
        (self.step() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::generate;

    #[test]
    fn hw_output_varies() {
        let mut rng = HwRng::new();
        let draws: Vec<u64> = (0..64).map(|_| rng.next_u64()).collect();
        let first = draws[0];
        assert!(draws.iter().any(|&d| d != first));
    }

    #[test]
    fn hw_fills_bytes() {
        let mut rng = HwRng::new();
        let mut buf = [0u8; 64];
        rng.fill_bytes(&mut buf);
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn boxed_sources_drive_generator() {
        for source in [Source::Os, Source::Hardware] {
            let mut rng = rng(source);
            let p = generate(&mut rng, 20, true, true, true).unwrap();
            assert_eq!(p.len(), 20);
        }
    }

    #[test]
    fn source_round_trips_through_toml_names() {
        #[derive(Serialize, Deserialize)]
        struct Wrap {
            source: Source,
        }
        let text = toml::to_string(&Wrap {
            source: Source::Hardware,
        })
        .unwrap();
        assert_eq!(text.trim(), "source = \"hardware\"");
    }
}
