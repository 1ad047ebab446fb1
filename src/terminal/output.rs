//! Terminal output utilities.
//!
//! Box drawing, strength meter rendering, ANSI helpers.

use crossterm::style::{Color, Stylize};
use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

use passgauge::entropy::Source;
use passgauge::{Assessment, BarState, Strength, Tier};

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("\x1b[0m\x1b[?25h");
    flush();
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let padding = inner_width - display_len;
        println!("│ {}{} │", content, " ".repeat(padding));
    } else {
        println!("│ {} │", content);
    }
}

/// Print a horizontal rule (box style).
pub fn box_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Calculate display width accounting for ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Strength Meter
// ============================================================================

const BAR_LIT: &str = "████";
const BAR_DARK: &str = "░░░░";

fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::Danger => Color::Red,
        Tier::Warning => Color::Yellow,
        Tier::Safe => Color::Green,
    }
}

fn strength_color(strength: Strength) -> Color {
    match strength {
        Strength::Weak => Color::Red,
        Strength::Medium => Color::Yellow,
        Strength::Strong => Color::Green,
    }
}

/// Render the bar meter, one block per bar, lit bars colored by tier.
pub fn meter(state: &BarState) -> String {
    state
        .segments()
        .map(|seg| match seg {
            Some(tier) => BAR_LIT.with(tier_color(tier)).to_string(),
            None => BAR_DARK.with(Color::DarkGrey).to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Colored strength label, e.g. "Medium".
pub fn strength_label(strength: Strength) -> String {
    strength
        .label()
        .with(strength_color(strength))
        .bold()
        .to_string()
}

// ============================================================================
// Entropy Calculation
// ============================================================================

/// Calculate password entropy in bits for a uniform draw.
pub fn calculate_entropy(password_length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    password_length as f64 * (charset_size as f64).log2()
}

// ============================================================================
// Reports
// ============================================================================

/// Print strength label, score and the bar meter as box lines.
pub fn print_assessment(assessment: &Assessment) {
    box_line(&format!(
        "Strength: {} (score {})",
        strength_label(assessment.strength),
        assessment.score
    ));
    box_line(&format!(
        "{}  {}",
        meter(&assessment.bars),
        assessment.bars.tier
    ));
}

/// Print charset size, entropy and random source of a generated password.
pub fn print_generation_info(length: usize, charset_size: usize, source: Source) {
    box_line(&format!(
        "Charset: {} chars • {:.1} bits • Source: {}",
        charset_size,
        calculate_entropy(length, charset_size),
        source.name()
    ));
}
