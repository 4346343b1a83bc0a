//! Parser tests
//!
//! These use small grammars built right here rather than a real language, to
//! pin down how each kind of parser behaves on its own and together.

use parser::lexer::{tokenize, SymbolTable};
use parser::{
    alt, empty, ident, lit, many, many1, num, opt, seq, sym, track, word,
    Assembly, AssemblySet, Error, Grammar, Limits, LogTracer, MatchOptions,
    Parser, TreeTracer, Value,
};

fn assembly<'a>(source: &'a str, symbols: &SymbolTable) -> Assembly<'a> {
    Assembly::new(tokenize(source, symbols).unwrap())
}

fn set<'a>(source: &'a str, symbols: &SymbolTable) -> AssemblySet<'a> {
    AssemblySet::singleton(assembly(source, symbols))
}

fn remainders(set: &AssemblySet) -> Vec<String> {
    set.iter().map(|a| a.remainder(" ")).collect()
}

fn bodies(assembly: &Assembly) -> Vec<String> {
    assembly.stack().iter().map(Value::to_string).collect()
}

/// sum := sum '+' Num | Num
fn left_recursive() -> (Grammar, parser::RuleId) {
    let mut grammar = Grammar::new();
    let sum = grammar.rule("sum");
    grammar.define(sum, alt![seq![sum, sym("+"), num()], num()]);
    (grammar, sum)
}

#[test]
fn complete_match_is_deterministic() {
    let symbols = SymbolTable::default();
    let mut grammar = Grammar::new();
    let list = grammar.rule("list");
    grammar.define(list, seq![word(), many(seq![sym(","), word()])]);

    let first = grammar
        .complete_match(list, assembly("a, b, c", &symbols))
        .unwrap();
    let second = grammar
        .complete_match(list, assembly("a, b, c", &symbols))
        .unwrap();

    assert_eq!(first.stack(), second.stack());
    assert_eq!(bodies(&first), ["a", ",", "b", ",", "c"]);
}

#[test]
fn repeating_empty_returns_input() {
    let symbols = SymbolTable::default();
    let input = set("a b", &symbols);

    let out = many(empty()).apply(&input).unwrap();
    assert_eq!(out, input);

    let out = many1(empty()).apply(&input).unwrap();
    assert_eq!(out, input);
}

#[test]
fn repetition_keeps_every_count() {
    let symbols = SymbolTable::default();
    let out = many(lit("a")).apply(&set("a a b", &symbols)).unwrap();
    assert_eq!(remainders(&out), ["a a b", "a b", "b"]);
}

#[test]
fn repetition_at_least_once() {
    let symbols = SymbolTable::default();

    let out = many1(lit("a")).apply(&set("a a b", &symbols)).unwrap();
    assert_eq!(remainders(&out), ["a b", "b"]);

    let out = many1(lit("a")).apply(&set("b", &symbols)).unwrap();
    assert!(out.is_empty());
}

#[test]
fn sequence_stops_at_first_failure() {
    let symbols = SymbolTable::default();
    let out = seq![lit("a"), lit("b"), lit("c")]
        .apply(&set("a x c", &symbols))
        .unwrap();
    assert!(out.is_empty());
}

#[test]
fn track_commits_after_first_match() {
    let symbols = SymbolTable::default();
    let abc = track![lit("a"), lit("b"), lit("c")];

    match abc.apply(&set("a b d", &symbols)) {
        Err(Error::Track(e)) => {
            assert_eq!(e.after(), "a b");
            assert_eq!(e.expected(), "c");
            assert_eq!(e.found(), "d");
        }
        other => panic!("expected a track error, got {other:?}"),
    }
}

#[test]
fn track_without_a_start_is_just_no_match() {
    let symbols = SymbolTable::default();
    let abc = track![lit("a"), lit("b"), lit("c")];
    assert!(abc.apply(&set("x b c", &symbols)).unwrap().is_empty());
}

#[test]
fn track_error_at_end_of_input() {
    let symbols = SymbolTable::default();
    let dotted = track![sym("."), ident()];

    let error = seq![ident(), dotted]
        .apply(&set("foo .", &symbols))
        .unwrap_err();

    match error {
        Error::Track(e) => {
            assert_eq!(e.after(), "foo .");
            assert_eq!(e.expected(), "identifier");
            assert_eq!(e.found(), "-nothing-");
            assert!(e.span().is_empty());
        }
        other => panic!("expected a track error, got {other:?}"),
    }
}

#[test]
fn track_error_describes_composite_parsers() {
    let symbols = SymbolTable::default();
    let p = track![lit("x"), alt![sym(";"), seq![sym(":"), num()]]];

    let Err(Error::Track(e)) = p.apply(&set("x ?", &symbols)) else {
        panic!("expected a track error");
    };
    assert_eq!(e.expected(), "[;, <:, Num>]");
}

#[test]
fn alternation_unions_results() {
    let symbols = SymbolTable::default();
    let input = set("a b", &symbols);

    let out = alt![seq![word(), word()], word()].apply(&input).unwrap();
    assert_eq!(remainders(&out), ["-nothing-", "b"]);

    let out = alt![word(), word()].apply(&input).unwrap();
    assert_eq!(out.len(), 1);
}

#[test]
fn alternation_first_error_wins() {
    let symbols = SymbolTable::default();
    let p = alt![track![lit("a"), lit("x")], track![lit("a"), lit("y")]];

    match p.apply(&set("a z", &symbols)) {
        Err(Error::Track(e)) => assert_eq!(e.expected(), "x"),
        other => panic!("expected a track error, got {other:?}"),
    }
}

#[test]
fn alternation_error_stops_later_successes() {
    let symbols = SymbolTable::default();
    let p = alt![track![lit("a"), lit("x")], seq![lit("a"), lit("z")]];
    assert!(p.apply(&set("a z", &symbols)).is_err());

    let p = alt![seq![lit("a"), lit("z")], track![lit("a"), lit("x")]];
    assert!(p.apply(&set("a z", &symbols)).is_err());
}

#[test]
fn optional_is_empty_or_once() {
    let symbols = SymbolTable::default();
    let out = opt(lit("a")).apply(&set("a", &symbols)).unwrap();
    assert_eq!(remainders(&out), ["a", "-nothing-"]);
}

#[test]
fn longest_symbol_is_one_token() {
    let symbols = SymbolTable::from_iter([">", ">>", ">>=", ">>>", ">>>="]);
    let tokens = tokenize(">>>=", &symbols).unwrap();
    assert_eq!(tokens.len(), 1);

    let out = sym(">>>=").apply(&set(">>>=", &symbols)).unwrap();
    assert!(out.best().unwrap().is_done());

    let out = sym(">").apply(&set(">>>=", &symbols)).unwrap();
    assert!(out.is_empty());
}

#[test]
fn best_prefers_first_on_ties() {
    let symbols = SymbolTable::default();
    let out = alt![lit("a"), seq![lit("a").discard()]]
        .apply(&set("a b", &symbols))
        .unwrap();

    assert_eq!(out.len(), 2);
    let best = out.best().unwrap();
    assert_eq!(bodies(best), ["a"]);
}

#[test]
fn complete_match_reports_best_partial() {
    let symbols = SymbolTable::default();
    let mut grammar = Grammar::new();
    let words = grammar.rule("words");
    grammar.define(words, many1(word()));

    let error = grammar
        .complete_match(words, assembly("a b ; c", &symbols))
        .unwrap_err();

    match error {
        Error::NoMatch {
            rule, after, found, ..
        } => {
            assert_eq!(rule, "words");
            assert_eq!(after, "a b");
            assert_eq!(found, ";");
        }
        other => panic!("expected no match, got {other:?}"),
    }
}

#[test]
fn complete_match_nothing_matched() {
    let symbols = SymbolTable::default();
    let mut grammar = Grammar::new();
    let words = grammar.rule("words");
    grammar.define(words, many1(word()));

    let error = grammar
        .complete_match(words, assembly("; a", &symbols))
        .unwrap_err();

    assert!(matches!(
        error,
        Error::NoMatch { ref after, ref found, .. }
            if after == "-nothing-" && found == ";"
    ));
}

#[test]
fn left_recursion_hits_depth_limit() {
    let symbols = SymbolTable::default();
    let (grammar, sum) = left_recursive();

    let options = MatchOptions::default()
        .with_limits(Limits::default().with_max_depth(64));
    let error = grammar
        .complete_match_with(sum, assembly("1 + 2", &symbols), options)
        .unwrap_err();

    assert_eq!(
        error,
        Error::DepthExceeded {
            rule: "sum".into(),
            limit: 64
        }
    );
}

#[test]
fn left_recursion_with_default_limits() {
    let symbols = SymbolTable::default();
    let (grammar, sum) = left_recursive();

    let error = grammar
        .complete_match(sum, assembly("1 + 2", &symbols))
        .unwrap_err();

    assert!(matches!(
        error,
        Error::DepthExceeded { limit, .. } if limit == Limits::DEFAULT_MAX_DEPTH
    ));
}

#[test]
fn step_budget() {
    let symbols = SymbolTable::default();
    let mut grammar = Grammar::new();
    let words = grammar.rule("words");
    grammar.define(words, many(word()));

    let options = MatchOptions::default()
        .with_limits(Limits::default().with_max_steps(10));
    let error = grammar
        .complete_match_with(
            words,
            assembly("a b c d e f g h i j k", &symbols),
            options,
        )
        .unwrap_err();

    assert_eq!(error, Error::BudgetExhausted { limit: 10 });
}

#[test]
fn undefined_rule_at_match_time() {
    let symbols = SymbolTable::default();
    let mut grammar = Grammar::new();
    let a = grammar.rule("a");
    let b = grammar.rule("b");
    grammar.define(a, seq![lit("x"), b]);

    assert_eq!(grammar.verify(), Err(Error::UndefinedRule("b".into())));
    assert_eq!(
        grammar.complete_match(a, assembly("x y", &symbols)),
        Err(Error::UndefinedRule("b".into()))
    );
}

#[test]
fn mutual_recursion() {
    let symbols = SymbolTable::default();
    let mut grammar = Grammar::new();
    let list = grammar.rule("list");
    let item = grammar.rule("item");
    grammar.define(list, seq![sym("("), many(item), sym(")")]);
    grammar.define(item, alt![word(), list]);
    grammar.verify().unwrap();

    let result = grammar
        .complete_match(list, assembly("(a (b (c)) () d)", &symbols))
        .unwrap();
    assert_eq!(result.stack().len(), 12);
}

#[test]
fn captures_build_nodes() {
    let symbols = SymbolTable::default();
    let mut grammar = Grammar::new();
    let pair = grammar.rule("pair");
    let pairs = grammar.rule("pairs");
    grammar.define_node(pair, seq![word(), sym(":").discard(), num()]);
    grammar.define(pairs, many(pair));

    let result = grammar
        .complete_match(pairs, assembly("a: 1 b: 2", &symbols))
        .unwrap();

    assert_eq!(bodies(&result), ["(pair a 1)", "(pair b 2)"]);

    let node = result.stack()[0].as_node().cloned().unwrap();
    assert_eq!(node.name(), "pair");
    assert_eq!(node.children().len(), 2);
}

#[test]
fn tree_tracer_outline() {
    let symbols = SymbolTable::default();
    let mut grammar = Grammar::new();
    let pair = grammar.rule("pair");
    let item = grammar.rule("item");
    grammar.define(pair, seq![item, item]);
    grammar.define(item, word());

    let mut tracer = TreeTracer::new();
    let options = MatchOptions::default().with_tracer(&mut tracer);
    grammar
        .complete_match_with(pair, assembly("a b", &symbols), options)
        .unwrap();

    assert_eq!(
        tracer.lines(),
        ["pair @0 a -> 1", "  item @0 a -> 1", "  item @1 b -> 1"]
    );
    assert!(!tracer.is_truncated());
}

#[test]
fn tree_tracer_truncates() {
    let symbols = SymbolTable::default();
    let mut grammar = Grammar::new();
    let pair = grammar.rule("pair");
    let item = grammar.rule("item");
    grammar.define(pair, seq![item, item]);
    grammar.define(item, word());

    let mut tracer = TreeTracer::with_max_lines(1);
    let options = MatchOptions::default().with_tracer(&mut tracer);
    grammar
        .complete_match_with(pair, assembly("a b", &symbols), options)
        .unwrap();

    assert_eq!(tracer.lines(), ["pair @0 a -> 1"]);
    assert!(tracer.to_string().ends_with("...\n"));
}

#[test]
fn log_tracer_does_not_change_results() {
    let symbols = SymbolTable::default();
    let (grammar, sum) = left_recursive();

    let mut tracer = LogTracer;
    let options = MatchOptions::default()
        .with_limits(Limits::default().with_max_depth(8))
        .with_tracer(&mut tracer);

    let error = grammar
        .complete_match_with(sum, assembly("1", &symbols), options)
        .unwrap_err();
    assert!(matches!(error, Error::DepthExceeded { limit: 8, .. }));
}

#[test]
fn rules_describe_by_name() {
    let mut grammar = Grammar::new();
    let statement = grammar.rule("statement");
    let p: Parser = many1(statement);
    assert_eq!(p.describe(&grammar), "statement+");
    assert_eq!(Parser::from(statement).describe(&grammar), "statement");
}
