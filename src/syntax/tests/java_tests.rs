//! Java recognizer tests
//!
//! Small snippets against single rules, to pin down where errors are
//! reported, and then whole compilation units using most of the language.

use parser::{Limits, MatchOptions, Node, TrackError, Value};
use syntax::{Error, Java, DEFAULT_RULE};

fn bodies(java: &Java, rule: &str, source: &str) -> Vec<String> {
    let result = java.recognize(rule, source).unwrap();
    result.stack().iter().map(Value::to_string).collect()
}

fn track_error(java: &Java, rule: &str, source: &str) -> TrackError {
    match java.recognize(rule, source) {
        Err(e) => match e.as_track() {
            Some(track) => track.clone(),
            None => panic!("expected a track error, got {e:?}"),
        },
        Ok(result) => panic!("expected an error, matched {result}"),
    }
}

fn recognizes(java: &Java, source: &str) {
    if let Err(e) = java.recognize(DEFAULT_RULE, source) {
        panic!("failed to recognize:\n{source}\n{e}");
    }
}

#[test]
fn grammar_is_complete() {
    let java = Java::new();
    assert_eq!(java.grammar().verify(), Ok(()));
}

#[test]
fn rule_names_are_sorted() {
    let java = Java::new();
    let names = java.rule_names();
    assert!(names.contains(&"compilationUnit"));
    assert!(names.contains(&"variableInitializer"));
    assert!(names.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn unknown_rule() {
    let java = Java::new();
    assert_eq!(
        java.recognize("sentence", "x").unwrap_err(),
        Error::UnknownRule("sentence".into())
    );
}

#[test]
fn lexical_errors_are_reported() {
    let java = Java::new();
    let error = java.recognize(DEFAULT_RULE, "\"unclosed").unwrap_err();
    assert!(matches!(error, Error::Parse(parser::Error::Lexer(_))));
}

#[test]
fn qualified_identifier() {
    let java = Java::new();
    assert_eq!(
        bodies(&java, "qualifiedIdentifier", "foo.bar.mooky"),
        ["foo", ".", "bar", ".", "mooky"]
    );
}

#[test]
fn qualified_identifier_missing_part() {
    let java = Java::new();
    let error = track_error(&java, "qualifiedIdentifier", "foo.");
    assert_eq!(error.after(), "foo .");
    assert_eq!(error.expected(), "identifier");
    assert_eq!(error.found(), "-nothing-");
}

#[test]
fn assignment() {
    let java = Java::new();
    assert_eq!(bodies(&java, "expression", "foo=bar"), ["foo", "=", "bar"]);
}

#[test]
fn empty_statement() {
    let java = Java::new();
    assert_eq!(bodies(&java, "statement", ";"), [";"]);
}

#[test]
fn dangling_else() {
    let java = Java::new();
    let error = track_error(&java, "statement", "if (x) y; else");
    assert_eq!(error.after(), "if ( x ) y ; else");
    assert_eq!(error.expected(), "statement");
    assert_eq!(error.found(), "-nothing-");
}

#[test]
fn missing_initializer() {
    let java = Java::new();
    let error = track_error(&java, "block", "{ int x = ; }");
    assert_eq!(error.after(), "{ int x =");
    assert_eq!(error.expected(), "variableInitializer");
    assert_eq!(error.found(), ";");
}

#[test]
fn missing_semicolon_in_class_body() {
    let java = Java::new();
    let error = track_error(&java, DEFAULT_RULE, "class A { int x = 1 }");
    assert_eq!(error.after(), "class A { int x = 1");
    assert_eq!(error.expected(), ";");
    assert_eq!(error.found(), "}");

    let error =
        track_error(&java, DEFAULT_RULE, "interface I { int X = 1, Y = 2 }");
    assert_eq!(error.after(), "interface I { int X = 1 , Y = 2");
    assert_eq!(error.expected(), ";");
}

#[test]
fn missing_semicolon_after_local_variable() {
    let java = Java::new();
    let error = track_error(&java, "block", "{ int x = 1 }");
    assert_eq!(error.after(), "{ int x = 1");
    assert_eq!(error.expected(), ";");
    assert_eq!(error.found(), "}");

    let error = track_error(&java, "block", "{ String[] a = {}, b int c; }");
    assert_eq!(error.after(), "{ String [ ] a = { } , b");
    assert_eq!(error.expected(), ";");
    assert_eq!(error.found(), "int");

    // Without an initializer nothing is committed yet.
    let error = track_error(&java, "block", "{ int x }");
    assert_eq!(error.after(), "{");
    assert_eq!(error.expected(), "}");
}

#[test]
fn error_spans_point_at_found_token() {
    let java = Java::new();
    let error = track_error(&java, "block", "{\n  int x = ;\n}");
    assert_eq!(error.span().start().line(), 1);
    assert_eq!(error.span().start().column(), 10);
}

#[test]
fn incomplete_expression_is_no_match() {
    let java = Java::new();
    let error = java.recognize("expression", "a + ").unwrap_err();
    match error {
        Error::Parse(parser::Error::NoMatch { rule, found, .. }) => {
            assert_eq!(rule, "expression");
            assert_eq!(found, "+");
        }
        other => panic!("expected no match, got {other:?}"),
    }
}

#[test]
fn shifts_are_runs_of_greater_than() {
    let java = Java::new();
    assert_eq!(bodies(&java, "expression", "a >> 2"), ["a", ">", ">", "2"]);
    assert_eq!(
        bodies(&java, "expression", "a >>>= b"),
        ["a", ">", ">", ">=", "b"]
    );
}

#[test]
fn spaced_out_shifts_are_rejected() {
    let java = Java::new();
    for source in ["a > > b", "a >> > b", "x = a > >= b", "x = a >> >= b"] {
        assert!(
            java.recognize("expression", source).is_err(),
            "{source} should not be an expression"
        );
    }
    assert!(java.recognize("statement", "x = a > >= b;").is_err());
    assert!(java.recognize("statement", "x = a >>= b;").is_ok());
}

#[test]
fn nested_type_arguments() {
    let java = Java::new();
    let stack = bodies(&java, "type", "Map<String, List<Integer>>");
    assert_eq!(stack.len(), 9);
    assert_eq!(stack[7..], [">", ">"]);
}

#[test]
fn expressions() {
    let java = Java::new();
    for source in [
        "1 + 2 * 3",
        "a.b(c, d[0]).e",
        "x > 0 ? x : -x",
        "(int) y",
        "((Foo) x).bar()",
        "(a + b) * c",
        "(x).y++",
        "(String[]) (Object) names",
        "i++",
        "new int[] { 1, 2, 3 }",
        "new String[10][]",
        "o instanceof Foo",
        "String.class",
        "this.value",
        "a = b = c",
        "x <<= 2",
        "!done && count != 0",
    ] {
        if let Err(e) = java.recognize("expression", source) {
            panic!("{source}: {e}");
        }
    }
}

#[test]
fn empty_compilation_unit() {
    let java = Java::new();
    let result = java.recognize(DEFAULT_RULE, "").unwrap();
    assert!(result.is_done());
    assert!(result.stack().is_empty());
}

#[test]
fn comments_are_skipped() {
    let java = Java::new();
    recognizes(
        &java,
        "// a comment\n/* and another */\nclass A { /** docs */ }\n",
    );
}

#[test]
fn declarations_are_captured() {
    let java = Java::new();
    let source = "package a.b;\nimport java.util.*;\nimport static c.D.e;\n\
                  class X {}\ninterface Y {}";
    let result = java.recognize(DEFAULT_RULE, source).unwrap();
    let stack = result.stack();
    let names: Vec<&str> = stack
        .iter()
        .filter_map(Value::as_node)
        .map(Node::name)
        .collect();

    assert_eq!(stack.len(), 5);
    assert_eq!(
        names,
        [
            "packageDeclaration",
            "importDeclaration",
            "importDeclaration",
            "classOrInterfaceDeclaration",
            "classOrInterfaceDeclaration",
        ]
    );

    let import = stack[1].as_node().unwrap();
    assert_eq!(
        import.to_string(),
        "(importDeclaration import java . util .* ;)"
    );
}

#[test]
fn classes() {
    let java = Java::new();
    recognizes(
        &java,
        r#"
package com.example;

import java.io.IOException;

public final class Counter extends Base implements Comparable<Counter> {
    private static final int LIMIT = 10;
    private int count, total = 0;
    private final String[] names = { "a", "b", };

    static {
        System.out.println("loaded");
    }

    public Counter() {
        this(0);
    }

    public Counter(int start) {
        super();
        this.count = start;
    }

    public int next() throws IOException {
        if (count >= LIMIT) {
            throw new IOException("too many");
        } else if (count < 0) {
            return -1;
        }
        return count++;
    }

    public void loop(int n) {
        int i;
        for (i = 0; i < n; i++) {
            total += i;
        }
        while (total > 100) total -= 100;
        do {
            total--;
        } while (total % 2 != 0);
        outer:
        for (;;) {
            break outer;
        }
    }

    public int compareTo(Counter other) {
        return count - other.count;
    }
}
"#,
    );
}

#[test]
fn generics() {
    let java = Java::new();
    recognizes(
        &java,
        r#"
import java.util.*;

class Registry<K extends Comparable<K>, V> {
    private Map<String, List<Integer>> index =
        new HashMap<String, List<Integer>>();

    public <T extends Number & Comparable<T>> T largest(List<? extends T> xs) {
        T best = null;
        for (T x : xs) {
            if (best == null || x.compareTo(best) > 0) {
                best = x;
            }
        }
        return best;
    }

    public List<? super Integer> sink() {
        return Collections.<Integer>emptyList();
    }

    int shift(int a) {
        a >>= 1;
        a >>>= 2;
        return a >> 1 + a >>> 2;
    }
}
"#,
    );
}

#[test]
fn annotations_and_enums() {
    let java = Java::new();
    recognizes(
        &java,
        r#"
@Retention(RetentionPolicy.RUNTIME)
@interface Marker {
    String value() default "";
    int[] codes() default { 1, 2 };
}

@SuppressWarnings({ "unchecked", "rawtypes" })
public enum Op implements Applicable {
    PLUS("+") {
        int apply(int a, int b) { return a + b; }
    },
    MINUS("-") {
        int apply(int a, int b) { return a - b; }
    };

    private final String symbol;

    Op(String symbol) {
        this.symbol = symbol;
    }

    @Override
    public String toString() {
        return symbol;
    }

    abstract int apply(int a, int b);
}

enum Color { RED, GREEN, BLUE, }
"#,
    );
}

#[test]
fn switch_and_exceptions() {
    let java = Java::new();
    recognizes(
        &java,
        r#"
class Handler {
    String describe(int code) {
        switch (code) {
            case 1:
            case 2:
                return "low";
            case LIMIT:
                log("limit");
                break;
            default:
                return "other";
        }
        return null;
    }

    void run(final String path) {
        try {
            open(path);
        } catch (IOException e) {
            e.printStackTrace();
        } catch (final RuntimeException e) {
            throw e;
        } finally {
            close();
        }

        try {
            open(path);
        } finally {
            close();
        }

        synchronized (this) {
            assert path != null : "no path";
        }
    }
}
"#,
    );
}

#[test]
fn interfaces_and_anonymous_classes() {
    let java = Java::new();
    recognizes(
        &java,
        r#"
public interface Shape extends Comparable<Shape>, Cloneable {
    int SIDES = 4;
    double area();
    void draw(int x, int... ys) throws Exception;
    <T> T accept(Visitor<T> visitor);
}

class Main {
    public static void main(String[] args) {
        Runnable r = new Runnable() {
            public void run() {
                System.out.println("hi");
            }
        };
        r.run();

        class Local {
            int x;
        }

        Object o = new Object() {
            @Override
            public int hashCode() { return 1; }
        }.hashCode();

        for (String arg : args) {
            System.out.println(arg.length() > 0 ? arg : "(empty)");
        }
    }
}
"#,
    );
}

#[test]
fn nested_parentheses_are_matched_once_each() {
    let java = Java::new();
    let depth = 32;
    let source = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
    let limits = Limits::default().with_max_steps(1_000_000);
    let options = MatchOptions::new().with_limits(limits);
    assert!(java.recognize_with("expression", &source, options).is_ok());
}

#[test]
fn limits_are_honoured() {
    let java = Java::new();
    let limits = Limits::default().with_max_steps(10);
    let options = MatchOptions::new().with_limits(limits);
    let error = java
        .recognize_with(DEFAULT_RULE, "class A {}", options)
        .unwrap_err();
    assert_eq!(
        error,
        Error::Parse(parser::Error::BudgetExhausted { limit: 10 })
    );
}
