//! CLI context - bundles settings and arguments.

use std::io::BufRead;

use tracing::debug;
use zeroize::Zeroize;

use super::{Args, prompts};
use crate::clipboard;
use crate::exits::stdout_is_tty;
use crate::terminal::{
    box_bottom, box_line, box_rule, box_top, print_assessment, print_generation_info,
};
use crate::tui;
use passgauge::{Meter, Result, Settings, assess_with, entropy, generate_with};

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    args: Args,
}

impl Context {
    /// Build the context: saved settings overridden by explicit flags.
    pub fn new(args: Args) -> Self {
        let mut settings = Settings::load_from_file().unwrap_or_else(|e| {
            prompts::warn(&format!("Failed to load settings: {}", e));
            Settings::default()
        });
        apply_args(&mut settings, &args);
        debug!(?settings, "effective settings");
        Self { settings, args }
    }

    pub fn run(mut self) -> Result<()> {
        self.settings.validate()?;

        if self.args.save {
            match self.settings.save_to_file() {
                Ok(()) => debug!("settings saved"),
                Err(e) => prompts::warn(&format!("Failed to save settings: {}", e)),
            }
        }

        if self.args.interactive {
            return tui::run(self.settings);
        }

        let meter = self.settings.meter()?;
        match self.args.check.take() {
            Some(password) => self.check(password, &meter),
            None => self.generate(&meter),
        }
    }

    /// Plain output: password or score only, no boxes.
    fn plain(&self) -> bool {
        prompts::quiet() || !stdout_is_tty()
    }

    fn check(&self, password: String, meter: &Meter) -> Result<()> {
        let mut password = if password == "-" {
            read_stdin_line()?
        } else {
            password
        };

        let assessment = assess_with(&password, meter);
        password.zeroize();

        if self.plain() {
            println!("{} {}", assessment.score, assessment.strength);
        } else {
            box_top("Strength");
            print_assessment(&assessment);
            box_bottom();
        }
        Ok(())
    }

    fn generate(&self, meter: &Meter) -> Result<()> {
        let spec = self.settings.charset();
        let mut rng = entropy::rng(self.settings.source);
        let password = generate_with(&mut rng, self.settings.length, &spec)?;
        let assessment = assess_with(password.as_str(), meter);
        debug!(
            score = assessment.score,
            strength = %assessment.strength,
            "assessed generated password"
        );

        let mut show = true;
        if self.args.clipboard {
            match clipboard::copy(password.as_str()) {
                Ok(()) => {
                    prompts::clipboard_copied();
                    show = false;
                }
                Err(e) => {
                    prompts::warn(&e.to_string());
                    if !prompts::clipboard_fallback_prompt() {
                        return Ok(());
                    }
                }
            }
        }

        if self.plain() {
            if show {
                println!("{}", password.as_str());
            }
            return Ok(());
        }

        box_top("Password");
        if show {
            box_line(password.as_str());
            box_rule();
        }
        print_assessment(&assessment);
        print_generation_info(password.len(), spec.size(), self.settings.source);
        box_bottom();
        Ok(())
    }
}

/// Apply explicit flags on top of loaded settings.
pub fn apply_args(settings: &mut Settings, args: &Args) {
    if let Some(length) = args.length {
        settings.length = length;
    }
    if let Some(digits) = args.digits() {
        settings.digits = digits;
    }
    if let Some(symbols) = args.symbols() {
        settings.symbols = symbols;
    }
    if let Some(uppercase) = args.uppercase() {
        settings.uppercase = uppercase;
    }
    if let Some(bars) = args.bars {
        settings.bars = bars;
    }
    if let Some(source) = args.source {
        settings.source = source;
    }
}

fn read_stdin_line() -> Result<String> {
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\r', '\n']).to_owned();
    line.zeroize();
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use passgauge::entropy::Source;

    #[test]
    fn flags_override_settings() {
        let mut settings = Settings::default();
        let args = Args {
            length: Some(32),
            no_symbols: true,
            bars: Some(6),
            source: Some(Source::Hardware),
            ..Default::default()
        };
        apply_args(&mut settings, &args);
        assert_eq!(settings.length, 32);
        assert!(!settings.symbols);
        assert!(settings.digits);
        assert_eq!(settings.bars, 6);
        assert_eq!(settings.source, Source::Hardware);
    }

    #[test]
    fn huge_length_flag_is_rejected() {
        use clap::Parser;
        use passgauge::Error;

        let args = Args::try_parse_from(["passgauge", "-l", "18446744073709551615"]).unwrap();
        let mut settings = Settings::default();
        apply_args(&mut settings, &args);
        assert!(matches!(
            settings.validate(),
            Err(Error::InvalidLength(usize::MAX))
        ));
    }

    #[test]
    fn no_flags_keep_settings() {
        let saved = Settings {
            length: 9,
            uppercase: false,
            ..Default::default()
        };
        let mut settings = saved.clone();
        apply_args(&mut settings, &Args::default());
        assert_eq!(settings, saved);
    }
}
