//! Password generation with guaranteed class coverage, and a strength
//! score read on two scales: a Weak/Medium/Strong rating and a segmented
//! bar meter.
//!
//! ```
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let password = passgauge::generate(&mut rng, 12, true, true, true).unwrap();
//! assert_eq!(password.len(), 12);
//!
//! let assessment = passgauge::assess(password.as_str());
//! assert!(assessment.bars.lit >= 1);
//! ```

pub mod entropy;
mod error;
pub mod meter;
pub mod pass;
pub mod settings;
pub mod strength;

pub use error::Error;
pub use meter::{BarState, Meter, Tier, bar_state};
pub use pass::{CharClass, CharsetSpec, Password, generate, generate_with};
pub use settings::Settings;
pub use strength::{Assessment, Strength, assess, assess_with, score};

pub type Result<T> = std::result::Result<T, Error>;
