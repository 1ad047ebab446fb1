//! One-shot command line mode.

mod args;
mod context;
pub mod prompts;

pub use args::Args;
pub use context::Context;

use passgauge::Result;

pub fn run(args: Args) -> Result<()> {
    prompts::set_quiet(args.quiet);
    Context::new(args).run()
}
