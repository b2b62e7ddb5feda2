//! Formatting utilities used for CLI and export outputs.

use ansi_term::Style;
use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    Style::new().bold().paint(s).to_string()
}

/// Pad to `width` display columns (accents and symbols count as one).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - w), s)
    }
}

/// `"1 jeu"`, `"2 jeux"`.
pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count > 1 {
        format!("{count} {plural}")
    } else {
        format!("{count} {singular}")
    }
}

/// `45` → `"45€"`, `0.5` → `"0.5€"`, `-3` → `"-3€"`.
pub fn format_money(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}€", value as i64)
    } else {
        let s = format!("{:.2}", value);
        let s = s.trim_end_matches('0').trim_end_matches('.');
        format!("{s}€")
    }
}

/// Money of a single ledger line: `"Gratuit"` when nothing was paid.
pub fn entry_money(value: f64) -> String {
    if value == 0.0 {
        "Gratuit".to_string()
    } else {
        format_money(value)
    }
}
