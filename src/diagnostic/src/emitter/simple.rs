//! A simple, safe, ascii-focused plain-text emitter.
//!
//! This should be a safe fall-back when we don't know what the output device
//! looks like. The layout is the classic one for parse failures:
//!
//! ```text
//! Foo.java: identifier expected
//! after: foo .
//! -nothing-
//! ^
//! 1 error
//! ```

use std::io::{self, Write};

use super::Emitter;
use crate::input_coordinator::InputCoordinator;
use crate::Diagnostic;

pub struct ASCIIEmitter<W = io::Stderr> {
    out: W,
}

impl ASCIIEmitter {
    /// An emitter that writes to standard error.
    pub fn stderr() -> Self {
        ASCIIEmitter { out: io::stderr() }
    }
}

impl<W: Write> ASCIIEmitter<W> {
    pub fn new(out: W) -> Self {
        ASCIIEmitter { out }
    }

    /// Give back the output stream, which is handy when it's a buffer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Emitter for ASCIIEmitter<W> {
    fn emit(
        &mut self,
        d: &Diagnostic,
        inputs: &InputCoordinator,
    ) -> io::Result<()> {
        match d.get_input().map(|id| inputs.get_input_name(id)) {
            Some(name) => writeln!(self.out, "{}: {}", name, d.get_text())?,
            None => writeln!(self.out, "{}: {}", d.get_level(), d.get_text())?,
        }

        for note in d.get_notes() {
            writeln!(self.out, "{}", note)?;
        }

        for highlight in d.get_highlights() {
            writeln!(self.out, "{}", highlight.note())?;
            writeln!(self.out, "^")?;
        }

        Ok(())
    }

    fn summary(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }
}
