use crate::caret::Caret;
use crate::highlight::Highlight;
use crate::input_coordinator::InputId;
use crate::level::Level;
use crate::message::Message;
use crate::Span;

/// Diagnostic messages, with a lot of trimmings.
///
/// The ultimate purpose of these is to be shown to the programmer at some
/// point, by an [`Emitter`][crate::Emitter].
///
/// The interface is a little odd. Methods either use (possibly `mut`)
/// references and start with `get` or `set`, or consume `self` and return it.
/// The builder-style methods only allow setting, so they don't take an
/// [`Option`].
///
/// This is done for convenience because some information is typically added
/// when the [`Diagnostic`] is first created, and other times added later. A
/// parse failure knows its location, but only the driver knows which file was
/// being read.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// The name of the place where the source code comes from.
    input_id: Option<InputId>,

    /// Where in the source file the error begins.
    ///
    /// Not all errors have a location, for instance "file not found" can't.
    location: Option<Caret>,

    /// The highlighted regions relevant to this diagnostic.
    highlights: Vec<Highlight>,

    /// This is the primary message of the diagnostic.
    message: Message,

    /// Extra lines of context shown after the message, like what was
    /// already consumed before a parse failure.
    notes: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic message with only a simple description.
    ///
    /// The [`Level`]'s [`Default`] is used.
    pub fn new(text: impl Into<String>) -> Self {
        Diagnostic {
            input_id: None,
            location: None,
            message: Message::new(Level::default(), text),
            highlights: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// Add the id of the input that caused this issue.
    ///
    /// This is just an [`InputId`] that corresponds to an
    /// [`InputCoordinator`][ic], instead of say a reference, since we don't
    /// necessarily know the lifetime of the input when the Diagnostic is made.
    ///
    /// [ic]: crate::InputCoordinator
    pub fn input(mut self, id: InputId) -> Self {
        self.input_id = Some(id);
        self
    }

    /// The id of the input that produced this issue.
    pub fn get_input(&self) -> Option<InputId> {
        self.input_id
    }

    /// Set the id of the input that caused this issue.
    pub fn set_input(&mut self, id: Option<InputId>) {
        self.input_id = id;
    }

    /// The location where the issue started.
    pub fn location(mut self, location: Caret) -> Self {
        self.location = Some(location);
        self
    }

    /// Get the location where the issue arose. This may be `None` if it's not
    /// known, or wouldn't be meaningful, such as if a file cannot be read.
    pub fn get_location(&self) -> Option<Caret> {
        self.location
    }

    /// Set the location where the issue arose.
    pub fn set_location(&mut self, location: Option<Caret>) {
        self.location = location;
    }

    /// Add a highlight to this diagnostic message.
    pub fn highlight(mut self, span: Span, note: impl Into<String>) -> Self {
        self.highlights.push(Highlight::new(span, note));
        self
    }

    /// View the list of highlights.
    pub fn get_highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    /// Add a line of extra context.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// The extra lines of context, in the order they were added.
    pub fn get_notes(&self) -> &[String] {
        &self.notes
    }

    /// Get the main diagnostic message.
    pub fn get_text(&self) -> &str {
        self.message.text()
    }

    /// Use a level other than the default.
    pub fn level(mut self, level: Level) -> Self {
        self.message.set_level(level);
        self
    }

    pub fn get_level(&self) -> Level {
        self.message.level()
    }
}
