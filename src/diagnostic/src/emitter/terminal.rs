//! Pretty printing of diagnostic messages.
//!
//! This module handles all the external libraries we need to do this (mostly)
//! right, and wraps them up in a single configurable printer.
//!
//! ```text
//! error: identifier expected
//!   --> Foo.java:1:5
//!   |
//! 1 | foo.
//!   |     ^ -nothing-
//!   = after: foo .
//! ```

use std::io;

use term_size::dimensions_stderr;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use unicode_width::UnicodeWidthStr;

use crate::level::Level;
use crate::{Diagnostic, InputCoordinator};

use super::code_window::CodeWindow;
use super::line_art::LineArt;
use super::Emitter;

/// A printer.
pub struct FancyEmitter<W = StandardStream> {
    /// Output stream.
    out: W,
    /// The set of line art characters to use.
    line_art: LineArt,
    /// The max width of the output
    width: usize,
}

impl FancyEmitter {
    /// Prints to stderr, using all the fancy features the terminal allows.
    pub fn stderr(choice: ColorChoice) -> Self {
        let width = match dimensions_stderr() {
            Some((w, _)) => Self::MIN_WIDTH.max(w),
            None => Self::DEFAULT_WIDTH,
        };

        let line_art = match choice {
            ColorChoice::Never => LineArt::ASCII,
            _ => LineArt::UNICODE,
        };

        FancyEmitter {
            out: StandardStream::stderr(choice),
            line_art,
            width,
        }
    }
}

impl<W: WriteColor> FancyEmitter<W> {
    /// The default terminal width used if the actual terminal is below
    /// `MIN_WIDTH`, or unknown.
    pub const DEFAULT_WIDTH: usize = 80;

    /// The narrowest allowed terminal size that things will be wrapped to, any
    /// smaller and we use `DEFAULT_WIDTH` instead to maintain readability.
    pub const MIN_WIDTH: usize = 40;

    /// An ASCII-only emitter over any output stream.
    pub fn new(out: W) -> Self {
        FancyEmitter {
            out,
            line_art: LineArt::ASCII,
            width: Self::DEFAULT_WIDTH,
        }
    }

    /// Give back the output stream.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// How wide is a string when printed?
    ///
    /// This isn't the same as the string's `s.len()` which counts bytes, or the
    /// `s.chars().count()` as some rendered characters are multiple code points
    /// (and some single code points may be double wide in a terminal).
    fn presentation_width(s: &str) -> usize {
        UnicodeWidthStr::width(s)
    }

    /// Prints `len` number of the `padding` character.
    fn pad(&mut self, padding: char, len: usize) -> io::Result<()> {
        for _ in 0..len {
            write!(self.out, "{}", padding)?;
        }
        Ok(())
    }

    fn dim_spec(&mut self) -> io::Result<()> {
        let mut spec = ColorSpec::new();
        spec.set_dimmed(true);
        self.out.set_color(&spec)
    }

    fn highlight_spec(&mut self) -> io::Result<()> {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec.set_fg(Some(Color::Yellow));
        self.out.set_color(&spec)
    }

    fn note_spec(&mut self) -> io::Result<()> {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Blue));
        self.out.set_color(&spec)
    }

    fn reset_spec(&mut self) -> io::Result<()> {
        self.out.reset()
    }

    fn set_level_spec(&mut self, level: Level) -> io::Result<()> {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec.set_fg(Some(match level {
            Level::Error => Color::Red,
            Level::Help => Color::Cyan,
        }));
        self.out.set_color(&spec)
    }

    /// The level and message, wrapped to the output width with continuation
    /// lines indented to align after the `: `.
    fn emit_message(&mut self, level: Level, text: &str) -> io::Result<()> {
        self.set_level_spec(level)?;
        write!(self.out, "{}: ", level.name())?;
        self.reset_spec()?;

        let prefix = level.name().len() + ": ".len();
        let wrap_width = self.width.saturating_sub(prefix).max(1);
        let lines = textwrap::wrap(text, wrap_width);

        match lines.split_first() {
            None => writeln!(self.out)?,
            Some((first, rest)) => {
                writeln!(self.out, "{}", first)?;
                for line in rest {
                    self.pad(' ', prefix)?;
                    writeln!(self.out, "{}", line)?;
                }
            }
        }

        Ok(())
    }

    /// The gutter on the left of a code window, with `content` right aligned.
    fn gutter(
        &mut self,
        content: impl std::fmt::Display,
        width: usize,
    ) -> io::Result<()> {
        let vertical = self.line_art.vertical;
        self.dim_spec()?;
        write!(self.out, "{: >width$} {} ", content, vertical, width = width)?;
        self.reset_spec()
    }

    fn emit_window(
        &mut self,
        window: &CodeWindow,
        label: &str,
    ) -> io::Result<()> {
        let gutter = window.gutter_width();

        self.pad(' ', gutter)?;
        self.dim_spec()?;
        write!(self.out, "{} ", self.line_art.arrow)?;
        self.reset_spec()?;
        writeln!(self.out, "{}", label)?;

        self.gutter("", gutter)?;
        writeln!(self.out)?;

        self.gutter(window.line_number(), gutter)?;
        let code_width = self.width.saturating_sub(gutter + 3).max(1);
        let line = window.line();
        if Self::presentation_width(line) > code_width {
            let shown: String = line.chars().take(code_width).collect();
            writeln!(self.out, "{}{}", shown, self.line_art.more)?;
        } else {
            writeln!(self.out, "{}", line)?;
        }

        self.gutter("", gutter)?;
        write!(self.out, "{}", window.padding())?;
        self.highlight_spec()?;
        self.pad(self.line_art.up, window.underline_width())?;
        self.reset_spec()?;

        if !window.note().is_empty() {
            self.note_spec()?;
            write!(self.out, " {}", window.note())?;
            self.reset_spec()?;
        }
        writeln!(self.out)
    }
}

impl<W: WriteColor> Emitter for FancyEmitter<W> {
    fn emit(&mut self, d: &Diagnostic, i: &InputCoordinator) -> io::Result<()> {
        self.emit_message(d.get_level(), d.get_text())?;

        let mut gutter = 1;

        if let Some(id) = d.get_input() {
            let name = i.get_input_name(id);
            let input = i.get_input_buffer(id);

            for highlight in d.get_highlights() {
                let window = CodeWindow::new(highlight, input);
                let label = format!("{}:{}", name, highlight.span().start());
                gutter = window.gutter_width();
                self.emit_window(&window, &label)?;
            }

            if d.get_highlights().is_empty() {
                match d.get_location() {
                    Some(location) => writeln!(self.out, "  in {name}:{location}")?,
                    None => writeln!(self.out, "  in {name}")?,
                }
            }
        }

        for note in d.get_notes() {
            self.pad(' ', gutter + 1)?;
            self.dim_spec()?;
            write!(self.out, "= ")?;
            self.reset_spec()?;
            writeln!(self.out, "{}", note)?;
        }

        self.out.flush()
    }

    fn summary(&mut self, text: &str) -> io::Result<()> {
        self.set_level_spec(Level::Error)?;
        writeln!(self.out, "{}", text)?;
        self.reset_spec()?;
        self.out.flush()
    }
}
