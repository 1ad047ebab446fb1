use clap::Parser;

use passgauge::entropy::Source;

/// Password generator with a strength meter.
#[derive(Debug, Default, Parser)]
#[command(name = "passgauge", version, about, long_about = None)]
pub struct Args {
    /// Characters per password.
    #[arg(short, long, value_name = "N")]
    pub length: Option<usize>,

    /// Include digits (0-9).
    #[arg(short, long, overrides_with = "no_digits")]
    pub digits: bool,

    /// Leave digits out.
    #[arg(long, overrides_with = "digits")]
    pub no_digits: bool,

    /// Include symbols (!?@#$%^&*()_-+=<>[]{}).
    #[arg(short, long, overrides_with = "no_symbols")]
    pub symbols: bool,

    /// Leave symbols out.
    #[arg(long, overrides_with = "symbols")]
    pub no_symbols: bool,

    /// Include uppercase letters.
    #[arg(short, long, overrides_with = "no_uppercase")]
    pub uppercase: bool,

    /// Leave uppercase letters out.
    #[arg(long, overrides_with = "uppercase")]
    pub no_uppercase: bool,

    /// Copy the password to the clipboard instead of printing it.
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Rate an existing password instead of generating one. Use `-` to
    /// read it from stdin.
    #[arg(long, value_name = "PASSWORD")]
    pub check: Option<String>,

    /// Number of bars in the strength meter.
    #[arg(long, value_name = "N")]
    pub bars: Option<usize>,

    /// Random source.
    #[arg(long, value_enum)]
    pub source: Option<Source>,

    /// Save the effective settings as defaults.
    #[arg(long)]
    pub save: bool,

    /// Print only the password.
    #[arg(short, long)]
    pub quiet: bool,

    /// Open the interactive generator.
    #[arg(short, long)]
    pub interactive: bool,
}

impl Args {
    pub fn digits(&self) -> Option<bool> {
        toggle(self.digits, self.no_digits)
    }

    pub fn symbols(&self) -> Option<bool> {
        toggle(self.symbols, self.no_symbols)
    }

    pub fn uppercase(&self) -> Option<bool> {
        toggle(self.uppercase, self.no_uppercase)
    }
}

fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
