//! Code windows are previews into the source code presented when displaying
//! diagnostic messages to help the user locate problems.

use unicode_width::UnicodeWidthChar;

use crate::highlight::Highlight;

/// A one-line preview of the source code with a pointer under a highlight.
///
/// The window doesn't know the name of the source file or anything else about
/// the owning diagnostic.
#[derive(Debug)]
pub(crate) struct CodeWindow<'i, 'd> {
    highlight: &'d Highlight,
    /// The line the highlight starts on.
    line: &'i str,
}

impl<'i, 'd> CodeWindow<'i, 'd> {
    /// A window over the line where `highlight` starts. A highlight past the
    /// last line (the end of input after a trailing newline) gets an empty
    /// line.
    pub fn new(highlight: &'d Highlight, input: &'i str) -> Self {
        let line = input
            .lines()
            .nth(highlight.span().start().line() as usize)
            .unwrap_or("");

        CodeWindow { highlight, line }
    }

    /// The 1-indexed line number shown in the gutter.
    pub fn line_number(&self) -> u32 {
        self.highlight.span().start().line() + 1
    }

    pub fn line(&self) -> &'i str {
        self.line
    }

    pub fn note(&self) -> &'d str {
        self.highlight.note()
    }

    /// The width of the left column in the gutter, not including the vertical
    /// line or space after it.
    pub fn gutter_width(&self) -> usize {
        self.line_number().to_string().len()
    }

    /// Whitespace which lines up with the start of the highlight when printed
    /// under the line. Tabs are kept so they expand the same way the line
    /// above them does.
    pub fn padding(&self) -> String {
        let column = self.highlight.span().start().column() as usize;

        self.line
            .chars()
            .take(column)
            .map(|c| match c {
                '\t' => "\t".to_string(),
                c => " ".repeat(c.width().unwrap_or(0)),
            })
            .collect()
    }

    /// How many columns the pointer under the highlight should cover. Empty
    /// spans, and spans running past the end of the line, still get one.
    pub fn underline_width(&self) -> usize {
        let span = self.highlight.span();
        let start = span.start().column() as usize;

        let end = if span.end().line() == span.start().line() {
            span.end().column() as usize
        } else {
            self.line.chars().count()
        };

        let width: usize = self
            .line
            .chars()
            .skip(start)
            .take(end.saturating_sub(start))
            .map(|c| c.width().unwrap_or(0))
            .sum();

        width.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Caret, Span};

    #[test]
    fn window_over_second_line() {
        let span = Span::new(Caret::new(1, 5), Caret::new(1, 8));
        let highlight = Highlight::new(span, "bar");
        let window = CodeWindow::new(&highlight, "class A {\n\tint bar;\n}");

        assert_eq!(window.line_number(), 2);
        assert_eq!(window.line(), "\tint bar;");
        assert_eq!(window.padding(), "\t    ");
        assert_eq!(window.underline_width(), 3);
    }

    #[test]
    fn window_past_the_end() {
        let highlight = Highlight::new(Span::point(Caret::new(3, 0)), "");
        let window = CodeWindow::new(&highlight, "a\nb\n");

        assert_eq!(window.line(), "");
        assert_eq!(window.underline_width(), 1);
        assert_eq!(window.gutter_width(), 1);
    }
}
