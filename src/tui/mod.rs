//! Interactive generator.
//!
//! Shows the current password with its strength meter. Options change on
//! keypress; a new password is drawn only on Enter.

mod keys;

use std::time::{Duration, Instant};

use tracing::debug;

use crate::clipboard;
use crate::terminal::{
    box_bottom, box_line, box_rule, box_top, clear, print_assessment, print_generation_info,
    reset_terminal,
};
use passgauge::{Password, Result, Settings, assess_with, entropy, generate_with};

use keys::Action;

const MAX_LENGTH: usize = 128;
const ALERT_FOR: Duration = Duration::from_secs(3);

/// Status line under the options, cleared after [`ALERT_FOR`].
struct Alert {
    text: String,
    shown_at: Instant,
}

/// Run TUI interactive mode until the user quits.
pub fn run(mut settings: Settings) -> Result<()> {
    let meter = settings.meter()?;
    let mut rng = entropy::rng(settings.source);
    let mut password = generate_with(&mut rng, settings.length, &settings.charset())?;
    let mut alert: Option<Alert> = None;

    loop {
        if alert.as_ref().is_some_and(|a| a.shown_at.elapsed() >= ALERT_FOR) {
            alert = None;
        }
        draw(&settings, &password, &meter, alert.as_ref());

        let action = match keys::next_action(wait_for(alert.as_ref()))? {
            Some(action) => action,
            None => continue,
        };
        debug!(?action, "key");

        match action {
            Action::Generate => {
                password = generate_with(&mut rng, settings.length, &settings.charset())?;
            }
            Action::Longer => settings.length = (settings.length + 1).min(MAX_LENGTH),
            Action::Shorter => settings.length = settings.length.saturating_sub(1).max(1),
            Action::ToggleDigits => settings.digits = !settings.digits,
            Action::ToggleSymbols => settings.symbols = !settings.symbols,
            Action::ToggleUppercase => settings.uppercase = !settings.uppercase,
            Action::Copy => {
                let text = match clipboard::copy(password.as_str()) {
                    Ok(()) => "Copied to clipboard".to_string(),
                    Err(e) => e.to_string(),
                };
                alert = Some(Alert {
                    text,
                    shown_at: Instant::now(),
                });
            }
            Action::Quit => break,
        }
    }

    reset_terminal();
    clear();
    Ok(())
}

/// How long to wait for a key before redrawing. Blocks while no alert is up.
fn wait_for(alert: Option<&Alert>) -> Option<Duration> {
    alert.map(|a| ALERT_FOR.saturating_sub(a.shown_at.elapsed()))
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

fn draw(settings: &Settings, password: &Password, meter: &passgauge::Meter, alert: Option<&Alert>) {
    let assessment = assess_with(password.as_str(), meter);
    let charset = settings.charset();

    clear();
    box_top("passgauge");
    box_line(password.as_str());
    box_rule();
    print_assessment(&assessment);
    print_generation_info(password.len(), charset.size(), settings.source);
    box_rule();
    box_line(&format!(
        "[-/+] Length: {:<4} [d] Digits: {:<4} [s] Symbols: {:<4} [u] Upper: {}",
        settings.length,
        on_off(settings.digits),
        on_off(settings.symbols),
        on_off(settings.uppercase)
    ));
    box_line("[Enter] Generate   [c] Copy   [q/Esc] Quit");
    if let Some(alert) = alert {
        box_rule();
        box_line(&alert.text);
    }
    box_bottom();
}
