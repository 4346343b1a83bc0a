//! Diagnostics - user-readable messages about problems in some input.
//!
//! A [`Diagnostic`] says what went wrong and where. Diagnostics are collected
//! by a [`DiagnosticCoordinator`] and handed to an [`Emitter`] once the run is
//! over, which looks up the source text through an [`InputCoordinator`].

mod caret;
mod diagnostic;
mod diagnostic_coordinator;
mod emitter;
mod highlight;
mod input_coordinator;
mod level;
mod message;
mod span;

pub use self::{
    caret::Caret,
    diagnostic::Diagnostic,
    diagnostic_coordinator::DiagnosticCoordinator,
    emitter::{ASCIIEmitter, Emitter, FancyEmitter},
    highlight::Highlight,
    input_coordinator::{InputCoordinator, InputId},
    level::Level,
    span::Span,
};
