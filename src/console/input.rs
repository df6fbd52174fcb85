//! Line-based prompting over any reader/writer pair.

use std::io::{self, BufRead, Write};

use crate::console::colors::{clear_screen, write_toned};
use crate::console::enums::Tone;
use crate::console::view::Screen;

/// Console front end: writes toned text and reads one line per prompt.
pub struct Prompter<R, W> {
    input: R,
    out: W,
    plain: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, out: W, plain: bool) -> Self {
        Prompter { input, out, plain }
    }

    /// Print `label` and read a line. Returns `None` at end of input.
    pub fn prompt(&mut self, tone: Tone, label: &str) -> io::Result<Option<String>> {
        write_toned(&mut self.out, tone, label, self.plain)?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Ask a yes/no question. Only `y` or `yes` (any case) confirm.
    pub fn confirm(&mut self, label: &str) -> io::Result<bool> {
        let answer = self.prompt(Tone::Error, label)?;
        Ok(answer.as_deref().is_some_and(is_affirmative))
    }

    /// Wait for Enter. End of input is not an error.
    pub fn pause(&mut self, label: &str) -> io::Result<()> {
        self.prompt(Tone::Notice, label).map(|_| ())
    }

    /// Print a single toned line.
    pub fn say(&mut self, tone: Tone, text: &str) -> io::Result<()> {
        write_toned(&mut self.out, tone, text, self.plain)?;
        writeln!(self.out)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Print a rendered screen, clearing the terminal first.
    pub fn show(&mut self, screen: &Screen) -> io::Result<()> {
        clear_screen(&mut self.out, self.plain)?;
        for line in &screen.lines {
            self.say(line.tone, &line.text)?;
        }
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.out)
    }
}

/// Whether a confirmation answer means yes.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
