//! Input Manager

use std::path::PathBuf;

/// A unique ID that corresponds to a piece of input tracked by an
/// [`InputCoordinator`].
///
/// This is used to find the source text and name of an input when a
/// diagnostic is shown.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct InputId(usize);

#[derive(Default)]
pub struct InputCoordinator {
    /// Inputs, where [`InputId`] are the corresponding indexes.
    inputs: Vec<Input>,
}

impl InputCoordinator {
    pub fn repl_input(&mut self, buffer: String) -> InputId {
        self.add(buffer, Name::Repl)
    }

    pub fn eval_input(&mut self, buffer: String) -> InputId {
        self.add(buffer, Name::Eval)
    }

    pub fn file_input(&mut self, buffer: String, path: PathBuf) -> InputId {
        self.add(buffer, Name::File(path))
    }

    fn add(&mut self, buffer: String, name: Name) -> InputId {
        let id = self.inputs.len();
        self.inputs.push(Input { buffer, name });
        InputId(id)
    }

    pub fn get_input_buffer(&self, id: InputId) -> &str {
        self.inputs[id.0].buffer.as_str()
    }

    /// The `line`th line of an input (zero-indexed), without its line ending.
    pub fn get_line(&self, id: InputId, line: u32) -> Option<&str> {
        self.get_input_buffer(id).lines().nth(line as usize)
    }

    pub fn get_input_name(&self, id: InputId) -> String {
        match &self.inputs[id.0].name {
            Name::File(path) => format!("{}", path.display()),
            Name::Repl => format!("<repl {}>", id.0),
            Name::Eval if id.0 == 0 => "<eval>".into(),
            Name::Eval => format!("<eval-{}>", id.0),
        }
    }
}

/// A piece of input has a name, and a buffer which contains it's code.
struct Input {
    name: Name,
    buffer: String,
}

/// A piece of input is named based on where it came from.
///
/// Usually this is a path to the file we loaded, but it could also be the repl
/// or a snippet given at the command line.
enum Name {
    Repl,
    Eval,
    File(PathBuf),
}
