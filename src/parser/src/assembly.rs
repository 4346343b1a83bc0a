//! Assemblies - where a match attempt is up to.
//!
//! An [`Assembly`] is a cursor over a token sequence plus a stack of the values
//! matched so far. Matching never changes an assembly, it derives new ones.
//! The tokens are shared between every assembly derived from the same input,
//! and the stack is persistent, so deriving is cheap: a push allocates one
//! frame and shares everything below it.

use std::fmt;
use std::rc::Rc;

use diagnostic::Span;

use crate::lexer::Token;

/// What gets printed in place of input when there's none to show.
pub const NOTHING: &str = "-nothing-";

/// A value on an assembly's stack.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// A token pushed by a terminal.
    Token(Token<'a>),
    /// The values pushed while matching a captured parser, folded together.
    Node(Node<'a>),
}

impl<'a> Value<'a> {
    pub fn as_token(&self) -> Option<&Token<'a>> {
        match self {
            Value::Token(t) => Some(t),
            Value::Node(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node<'a>> {
        match self {
            Value::Token(_) => None,
            Value::Node(n) => Some(n),
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Token(t) => write!(f, "{}", t),
            Value::Node(n) => write!(f, "{}", n),
        }
    }
}

/// A named group of values, like a class declaration and everything in it.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<'a> {
    name: Rc<str>,
    children: Vec<Value<'a>>,
}

impl<'a> Node<'a> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[Value<'a>] {
        &self.children
    }

    /// Render the node as an indented outline, one node or token per line.
    pub fn outline(&self) -> String {
        let mut buf = String::new();
        self.outline_into(&mut buf, 0);
        buf
    }

    fn outline_into(&self, buf: &mut String, depth: usize) {
        buf.push_str(&"  ".repeat(depth));
        buf.push_str(&self.name);
        buf.push('\n');

        for child in &self.children {
            match child {
                Value::Node(n) => n.outline_into(buf, depth + 1),
                Value::Token(t) => {
                    buf.push_str(&"  ".repeat(depth + 1));
                    buf.push_str(t.body());
                    buf.push('\n');
                }
            }
        }
    }
}

/// Nodes print as s-expressions, `(name child child)`.
impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}", self.name)?;
        for child in &self.children {
            write!(f, " {}", child)?;
        }
        write!(f, ")")
    }
}

/// A persistent stack. Cloning is cheap, and pushing onto a clone never
/// changes the original.
#[derive(Clone, Default)]
struct Stack<'a> {
    top: Option<Rc<Frame<'a>>>,
}

struct Frame<'a> {
    entry: Entry<'a>,
    below: Stack<'a>,
    /// How many entries, including this one.
    depth: usize,
}

#[derive(Debug, Clone, PartialEq)]
enum Entry<'a> {
    Value(Value<'a>),
    /// Where a capture started. Never visible outside the crate.
    Mark,
}

impl<'a> Stack<'a> {
    fn depth(&self) -> usize {
        self.top.as_ref().map_or(0, |f| f.depth)
    }

    fn push(&self, entry: Entry<'a>) -> Stack<'a> {
        Stack {
            top: Some(Rc::new(Frame {
                entry,
                below: self.clone(),
                depth: self.depth() + 1,
            })),
        }
    }

    fn pop(&self) -> Option<(Entry<'a>, Stack<'a>)> {
        let frame = self.top.as_ref()?;
        Some((frame.entry.clone(), frame.below.clone()))
    }

    /// Entries from the top of the stack down.
    fn entries(&self) -> impl Iterator<Item = &Entry<'a>> {
        let mut next = self.top.as_deref();
        std::iter::from_fn(move || {
            let frame = next?;
            next = frame.below.top.as_deref();
            Some(&frame.entry)
        })
    }

    /// Values from the bottom of the stack up.
    fn values(&self) -> Vec<Value<'a>> {
        let mut values: Vec<Value<'a>> = self
            .entries()
            .filter_map(|e| match e {
                Entry::Value(v) => Some(v.clone()),
                Entry::Mark => None,
            })
            .collect();
        values.reverse();
        values
    }
}

impl PartialEq for Stack<'_> {
    fn eq(&self, other: &Self) -> bool {
        let mut l = self.top.as_ref();
        let mut r = other.top.as_ref();

        loop {
            match (l, r) {
                (None, None) => return true,
                (Some(a), Some(b)) => {
                    if Rc::ptr_eq(a, b) {
                        return true;
                    }
                    if a.depth != b.depth || a.entry != b.entry {
                        return false;
                    }
                    l = a.below.top.as_ref();
                    r = b.below.top.as_ref();
                }
                _ => return false,
            }
        }
    }
}

// Dropping a long stack recursively can overflow, so frames are unlinked in a
// loop instead.
impl Drop for Stack<'_> {
    fn drop(&mut self) {
        let mut next = self.top.take();
        while let Some(frame) = next {
            match Rc::try_unwrap(frame) {
                Ok(mut frame) => next = frame.below.top.take(),
                Err(_) => break,
            }
        }
    }
}

impl fmt::Debug for Stack<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

/// A cursor over a sequence of tokens, and the stack of values matched so far.
///
/// # Example
///
/// ```
/// # use parser::{Assembly, lexer::{tokenize, SymbolTable}};
/// let symbols = SymbolTable::default();
/// let assembly = Assembly::new(tokenize("foo . bar", &symbols).unwrap());
/// assert_eq!(assembly.consumed(" "), "-nothing-");
/// assert_eq!(assembly.remainder(" "), "foo . bar");
/// assert_eq!(assembly.peek().map(|t| t.body()), Some("foo"));
/// ```
#[derive(Clone)]
pub struct Assembly<'a> {
    tokens: Rc<[Token<'a>]>,
    index: usize,
    stack: Stack<'a>,
}

impl<'a> Assembly<'a> {
    /// A fresh assembly at the start of `tokens`, with an empty stack.
    pub fn new(tokens: Vec<Token<'a>>) -> Self {
        Assembly {
            tokens: tokens.into(),
            index: 0,
            stack: Stack::default(),
        }
    }

    /// The next unconsumed token, if there is one.
    pub fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.index).copied()
    }

    /// The last consumed token, if there is one.
    pub fn previous(&self) -> Option<Token<'a>> {
        self.index
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .copied()
    }

    /// The tokens consumed so far, joined by `separator`, or [`NOTHING`].
    pub fn consumed(&self, separator: &str) -> String {
        join(&self.tokens[..self.index], separator)
    }

    /// The tokens not consumed yet, joined by `separator`, or [`NOTHING`].
    pub fn remainder(&self, separator: &str) -> String {
        join(&self.tokens[self.index..], separator)
    }

    /// How many tokens have been consumed.
    pub fn consumed_count(&self) -> usize {
        self.index
    }

    /// How many tokens are left.
    pub fn remaining_count(&self) -> usize {
        self.tokens.len() - self.index
    }

    /// The number of tokens in the whole input.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Was the input empty to begin with?
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Has every token been consumed?
    pub fn is_done(&self) -> bool {
        self.index == self.tokens.len()
    }

    /// The span of the next token, or an empty span just after the last one.
    pub fn next_span(&self) -> Span {
        match self.peek() {
            Some(token) => token.span(),
            None => self
                .tokens
                .last()
                .map(|t| Span::point(t.span().end()))
                .unwrap_or_default(),
        }
    }

    /// A copy of this assembly with `value` on top of the stack.
    pub fn push(&self, value: Value<'a>) -> Assembly<'a> {
        Assembly {
            tokens: self.tokens.clone(),
            index: self.index,
            stack: self.stack.push(Entry::Value(value)),
        }
    }

    /// The value on top of the stack, and the assembly without it.
    pub fn pop(&self) -> Option<(Value<'a>, Assembly<'a>)> {
        match self.stack.pop()? {
            (Entry::Value(value), stack) => Some((
                value,
                Assembly {
                    tokens: self.tokens.clone(),
                    index: self.index,
                    stack,
                },
            )),
            (Entry::Mark, _) => None,
        }
    }

    /// The stack's values, bottom first.
    pub fn stack(&self) -> Vec<Value<'a>> {
        self.stack.values()
    }

    /// The next token and the assembly after it.
    pub(crate) fn next(&self) -> Option<(Token<'a>, Assembly<'a>)> {
        let token = self.peek()?;
        Some((
            token,
            Assembly {
                tokens: self.tokens.clone(),
                index: self.index + 1,
                stack: self.stack.clone(),
            },
        ))
    }

    /// Mark the stack where a capture starts.
    pub(crate) fn mark(&self) -> Assembly<'a> {
        Assembly {
            tokens: self.tokens.clone(),
            index: self.index,
            stack: self.stack.push(Entry::Mark),
        }
    }

    /// Replace everything above the nearest mark with a single node.
    pub(crate) fn fold(&self, name: &Rc<str>) -> Assembly<'a> {
        let mut children = Vec::new();
        let mut stack = self.stack.clone();

        while let Some((entry, below)) = stack.pop() {
            stack = below;
            match entry {
                Entry::Value(value) => children.push(value),
                Entry::Mark => break,
            }
        }
        children.reverse();

        let node = Node {
            name: name.clone(),
            children,
        };

        Assembly {
            tokens: self.tokens.clone(),
            index: self.index,
            stack: stack.push(Entry::Value(Value::Node(node))),
        }
    }
}

/// Two assemblies are the same when they're over the same input, at the same
/// place, with the same stack.
impl PartialEq for Assembly<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
            && Rc::ptr_eq(&self.tokens, &other.tokens)
            && self.stack == other.stack
    }
}

impl fmt::Debug for Assembly<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Assembly")
            .field("consumed", &self.consumed(" "))
            .field("remainder", &self.remainder(" "))
            .field("stack", &self.stack)
            .finish()
    }
}

/// Shows where the cursor is, like `a/b^c/d`.
impl fmt::Display for Assembly<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}^{}", self.consumed("/"), self.remainder("/"))
    }
}

fn join(tokens: &[Token], separator: &str) -> String {
    if tokens.is_empty() {
        return NOTHING.to_string();
    }

    tokens
        .iter()
        .map(|t| t.body())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{tokenize, SymbolTable};

    fn assembly(input: &str) -> Assembly<'_> {
        let symbols = SymbolTable::default();
        Assembly::new(tokenize(input, &symbols).unwrap())
    }

    #[test]
    fn counts_add_up() {
        let a = assembly("a b c");
        let (_, b) = a.next().unwrap();
        assert_eq!(b.consumed_count() + b.remaining_count(), b.len());
        assert_eq!(b.consumed(" "), "a");
        assert_eq!(b.remainder(" "), "b c");
        assert!(!b.is_done());
    }

    #[test]
    fn push_leaves_parent_alone() {
        let a = assembly("x");
        let (token, b) = a.next().unwrap();
        let c = b.push(Value::Token(token));

        assert!(b.stack().is_empty());
        assert_eq!(c.stack(), vec![Value::Token(token)]);
        assert_ne!(b, c);

        let (popped, d) = c.pop().unwrap();
        assert_eq!(popped, Value::Token(token));
        assert_eq!(d, b);
    }

    #[test]
    fn equality_needs_same_input() {
        let a = assembly("x");
        let b = assembly("x");
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn fold_groups_values_above_mark() {
        let a = assembly("p q r");
        let (p, a) = a.next().unwrap();
        let a = a.push(Value::Token(p)).mark();
        let (q, a) = a.next().unwrap();
        let (r, a) = a.next().unwrap();
        let a = a.push(Value::Token(q)).push(Value::Token(r));

        let folded = a.fold(&Rc::from("pair"));
        let stack = folded.stack();

        assert_eq!(stack.len(), 2);
        assert_eq!(stack[1].to_string(), "(pair q r)");
        assert_eq!(stack[1].as_node().unwrap().outline(), "pair\n  q\n  r\n");
    }

    #[test]
    fn empty_input_span() {
        let a = assembly("");
        assert_eq!(a.next_span(), Span::default());
        assert_eq!(a.consumed(" "), NOTHING);
        assert!(a.is_done());
    }

    #[test]
    fn long_stacks_drop() {
        let mut a = assembly("x");
        let token = a.peek().unwrap();
        for _ in 0..200_000 {
            a = a.push(Value::Token(token));
        }
        assert_eq!(a.stack().len(), 200_000);
    }
}
