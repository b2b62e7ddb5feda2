//! Color helpers for terminal output.

use crate::core::late::LatenessTier;
use ansi_term::Colour;

/// Header color of a late-loan bucket, warmer as lateness grows.
pub fn color_for_tier(tier: LatenessTier) -> Colour {
    match tier {
        LatenessTier::OverAYear | LatenessTier::SixMonths => Colour::Red,
        LatenessTier::TwoMonths | LatenessTier::OneMonth => Colour::RGB(255, 153, 51),
        LatenessTier::ThreeWeeks | LatenessTier::TwoWeeks => Colour::Yellow,
        LatenessTier::OneWeek | LatenessTier::Due => Colour::White,
    }
}

/// Money color:
/// \>0 → green
/// \<0 → red
pub fn colorize_money(value: f64, text: &str) -> String {
    if value > 0.0 {
        Colour::Green.paint(text).to_string()
    } else if value < 0.0 {
        Colour::Red.paint(text).to_string()
    } else {
        text.to_string()
    }
}
