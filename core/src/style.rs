use colored::{Color, ColoredString, Colorize};
use crossterm::terminal;
use tresor_webclient::Secret;

use crate::render::{self, Field, Rendered};
use crate::strength::{Criterion, Evaluation, StrengthCategory};

#[macro_export]
macro_rules! print_success {
    ($fmt:literal, $($e:tt)*) => {{
        use ::colored::Colorize as _;
        println!("{}", format!($fmt, $($e)*).green())
    }}
}

#[macro_export]
macro_rules! print_failure {
    ($fmt:literal, $($e:tt)*) => {{
        use ::colored::Colorize as _;
        eprintln!("{}", format!($fmt, $($e)*).bright_red())
    }}
}

const BAR_MAX_WIDTH: usize = 40;

pub fn is_truecolor_supported() -> bool {
    let Ok(v) = std::env::var("COLORTERM") else {
        return false
    };
    matches!(v.as_str(), "truecolor" | "24bit")
}

fn terminal_cols() -> usize {
    terminal::size().map(|(cols, _)| cols as usize).unwrap_or(40)
}

pub trait ColorTheme {
    fn color(&self) -> Color;
}

impl ColorTheme for log::Level {
    fn color(&self) -> Color {
        use log::Level::*;
        match self {
            Error => Color::BrightRed,
            Warn => Color::BrightYellow,
            Info => Color::Cyan,
            Debug => Color::Magenta,
            Trace => Color::Blue,
        }
    }
}

impl ColorTheme for StrengthCategory {
    fn color(&self) -> Color {
        use StrengthCategory::*;
        if !self::is_truecolor_supported() {
            return match self {
                Weak => Color::Red,
                Medium => Color::Yellow,
                Strong => Color::Green,
            };
        }

        match self {
            Weak => Color::TrueColor {
                r: 220,
                g: 42,
                b: 42,
            },
            Medium => Color::TrueColor {
                r: 210,
                g: 138,
                b: 4,
            },
            Strong => Color::TrueColor {
                r: 30,
                g: 180,
                b: 40,
            },
        }
    }
}

/// `[█████░░░░░]  83% medium`, scaled to the terminal width.
pub fn strength_bar(evaluation: &Evaluation, width: usize) -> String {
    let filled = width * usize::from(evaluation.percentage) / 100;
    let color = evaluation.category.color();
    format!(
        "[{}{}] {:>3}% {}",
        "█".repeat(filled).color(color),
        "░".repeat(width - filled).bright_black(),
        evaluation.percentage,
        evaluation.category.to_string().color(color).bold(),
    )
}

pub fn print_strength(evaluation: &Evaluation, unmet: &[Criterion]) {
    let width = terminal_cols().saturating_sub(16).clamp(10, BAR_MAX_WIDTH);
    println!("{}", self::strength_bar(evaluation, width));
    for c in unmet {
        println!("  {} {}", "✗".bright_red(), c.rule().dimmed());
    }
}

fn secret_header(secret: &Secret) -> ColoredString {
    let kind = secret.content.kind().unwrap_or("?");
    format!("#{} {}", secret.id, kind).bright_yellow().bold()
}

pub fn print_secret(secret: &Secret) {
    println!("{}", self::secret_header(secret));
    match render::render(&secret.content) {
        Rendered::Fields(fields) => {
            let width = fields.iter().map(|f| f.label.len()).max().unwrap_or(0);
            for Field { label, value } in fields {
                let label = format!("{:>width$}", label, width = width);
                println!("  {}: {}", label.cyan(), value);
            }
        }
        Rendered::Raw(dump) => {
            for line in dump.lines() {
                println!("  {}", line.dimmed());
            }
        }
    }
}

pub fn print_secrets(secrets: &[Secret]) {
    if secrets.is_empty() {
        println!("{}", "<NO SECRETS>".magenta().dimmed());
        return;
    }
    let rule = "─".repeat(terminal_cols().min(BAR_MAX_WIDTH * 2));
    for secret in secrets {
        self::print_secret(secret);
        println!("{}", rule.bright_black());
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::strength;

    #[test]
    fn strength_bar_fill_matches_percentage() {
        colored::control::set_override(false);
        assert_eq!(
            strength_bar(&strength::evaluate("Abc123!?"), 10),
            "[██████████] 100% strong"
        );
        assert_eq!(
            strength_bar(&strength::evaluate("abcdefg1"), 10),
            "[██████░░░░]  67% weak"
        );
        assert_eq!(
            strength_bar(&strength::evaluate(""), 6),
            "[█░░░░░]  17% weak"
        );
    }
}
