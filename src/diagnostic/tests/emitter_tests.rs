//! Rendering tests, emitting into buffers instead of the terminal.

use diagnostic::{
    ASCIIEmitter, Caret, Diagnostic, DiagnosticCoordinator, FancyEmitter,
    InputCoordinator, Level, Span,
};
use termcolor::NoColor;

fn parse_failure(inputs: &mut InputCoordinator) -> Diagnostic {
    let id = inputs.file_input("foo.;\n".into(), "Foo.java".into());
    let span = Span::new(Caret::new(0, 4), Caret::new(0, 5));

    Diagnostic::new("identifier expected")
        .input(id)
        .location(span.start())
        .note("after: foo .")
        .highlight(span, ";")
}

#[test]
fn ascii_layout() {
    let mut inputs = InputCoordinator::default();
    let d = parse_failure(&mut inputs);

    let mut diagnostics = DiagnosticCoordinator::default();
    diagnostics.register(d);

    let mut emitter = ASCIIEmitter::new(Vec::new());
    diagnostics.emit(&inputs, &mut emitter).unwrap();

    let out = String::from_utf8(emitter.into_inner()).unwrap();
    assert_eq!(
        out,
        "Foo.java: identifier expected\nafter: foo .\n;\n^\n1 error\n"
    );
}

#[test]
fn ascii_without_input() {
    let inputs = InputCoordinator::default();
    let mut emitter = ASCIIEmitter::new(Vec::new());

    let mut diagnostics = DiagnosticCoordinator::default();
    diagnostics.register(Diagnostic::new("cannot read 'x'"));
    diagnostics.register(Diagnostic::new("cannot read 'y'"));
    diagnostics.emit(&inputs, &mut emitter).unwrap();

    let out = String::from_utf8(emitter.into_inner()).unwrap();
    assert_eq!(
        out,
        "error: cannot read 'x'\nerror: cannot read 'y'\n2 errors\n"
    );
}

#[test]
fn fancy_points_at_the_token() {
    let mut inputs = InputCoordinator::default();
    let d = parse_failure(&mut inputs);

    let mut emitter = FancyEmitter::new(NoColor::new(Vec::new()));
    diagnostic::Emitter::emit(&mut emitter, &d, &inputs).unwrap();

    let out = String::from_utf8(emitter.into_inner().into_inner()).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0], "error: identifier expected");
    assert_eq!(lines[1], " --> Foo.java:1:5");
    assert_eq!(lines[3], "1 | foo.;");
    assert_eq!(lines[4], "  |     ^ ;");
    assert_eq!(lines[5], "  = after: foo .");
}

#[test]
fn help_is_labelled_and_not_counted() {
    let inputs = InputCoordinator::default();
    let mut emitter = FancyEmitter::new(NoColor::new(Vec::new()));

    let mut diagnostics = DiagnosticCoordinator::default();
    diagnostics.register(Diagnostic::new("there's no rule named x"));
    diagnostics.register(Diagnostic::new("try `:rules`").level(Level::Help));
    diagnostics.emit(&inputs, &mut emitter).unwrap();

    let out = String::from_utf8(emitter.into_inner().into_inner()).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        ["error: there's no rule named x", "help: try `:rules`", "1 error"]
    );
}
