//! Colour constants and styled output for the console.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Stylize},
    terminal::{Clear, ClearType},
};

use crate::console::enums::Tone;

/// Used for the selected task line.
pub const SOFT_ORANGE: Color = Color::Rgb { r: 255, g: 175, b: 95 };
/// Used for completed-count stats.
pub const LEAF_GREEN: Color = Color::Rgb { r: 95, g: 215, b: 95 };

/// Foreground colour and boldness for a tone, `None` for unstyled text.
pub fn tone_style(tone: Tone) -> Option<(Color, bool)> {
    match tone {
        Tone::Plain | Tone::Task => None,
        Tone::Border => Some((Color::Cyan, true)),
        Tone::Title => Some((Color::Yellow, true)),
        Tone::Stats => Some((LEAF_GREEN, true)),
        Tone::ViewName => Some((Color::Magenta, false)),
        Tone::Empty => Some((Color::Yellow, true)),
        Tone::Selected => Some((SOFT_ORANGE, true)),
        Tone::Menu => Some((Color::Green, true)),
        Tone::Prompt => Some((Color::Cyan, true)),
        Tone::Success => Some((Color::Green, true)),
        Tone::Info => Some((Color::Blue, true)),
        Tone::Notice => Some((Color::Yellow, true)),
        Tone::Error => Some((Color::Red, true)),
    }
}

/// Write `text` in the given tone without a trailing newline.
pub fn write_toned<W: Write>(out: &mut W, tone: Tone, text: &str, plain: bool) -> io::Result<()> {
    match tone_style(tone).filter(|_| !plain) {
        None => write!(out, "{text}"),
        Some((color, bold)) => {
            let styled = text.with(color);
            if bold {
                write!(out, "{}", styled.attribute(Attribute::Bold))
            } else {
                write!(out, "{styled}")
            }
        }
    }
}

/// Clear the terminal and home the cursor. No-op in plain mode.
pub fn clear_screen<W: Write>(out: &mut W, plain: bool) -> io::Result<()> {
    if plain {
        return Ok(());
    }
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))
}
