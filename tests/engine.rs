use reckon::{
    calculate,
    error::ParseError,
    interpreter::{evaluator::evaluate, lexer::tokenize, parser::core::parse},
};

fn assert_result(formula: &str, expected: f64) {
    match calculate(formula) {
        Ok(result) => assert_eq!(result, expected, "wrong result for '{formula}'"),
        Err(e) => panic!("Formula '{formula}' failed to parse: {e}"),
    }
}

fn assert_error_at(formula: &str, expected_position: usize) {
    match calculate(formula) {
        Ok(result) => panic!("Formula '{formula}' parsed to {result} but was expected to fail"),
        Err(e) => assert_eq!(e.position(),
                             expected_position,
                             "wrong error position for '{formula}' ({e})"),
    }
}

#[test]
fn single_numbers() {
    assert_result("5", 5.0);
    assert_result("-5", -5.0);
    assert_result("3.14", 3.14);
    assert_result(".5", 0.5);
}

#[test]
fn zero_is_a_valid_literal() {
    assert_result("0", 0.0);
    assert_result("0.0", 0.0);
    assert_result("0 + 5", 5.0);
    assert_result("2 - 2", 0.0);
}

#[test]
fn basic_operators() {
    assert_result("2 + 3", 5.0);
    assert_result("2 - 3", -1.0);
    assert_result("2 * 3", 6.0);
    assert_result("5 / 2", 2.5);
}

#[test]
fn operator_precedence() {
    assert_result("2 * 3 + 4", 10.0);
    assert_result("2 + 3 * 4", 14.0);
    assert_result("1.5 + 2.25 * 2", 6.0);
}

#[test]
fn left_associativity() {
    assert_result("10 - 3 - 2", 5.0);
    assert_result("16 / 4 / 2", 2.0);
    assert_result("7 + (((5 * 2) + 5) / (2 + 3) + 1) / 2 - 1", 8.0);
}

#[test]
fn parentheses() {
    assert_result("(7)", 7.0);
    assert_result("(-2)", -2.0);
    assert_result("(3 * 2)", 6.0);
    assert_result("(3 + 2) * 2", 10.0);
    assert_result("2 * (3 + 2)", 10.0);
}

#[test]
fn nested_parentheses() {
    assert_result("(((5)))", 5.0);
    assert_result("((3 + 2) * (1 + 1))", 10.0);
    assert_result("2 * (3 * ((3 + 1) + 1) + 2)", 34.0);
    assert_result("2 * (3 + ((3 + 1) + 1) * 2)", 26.0);
}

#[test]
fn unary_minus_chains() {
    assert_result("--5", 5.0);
    assert_result("---5", -5.0);
    assert_result("-(3 + 2)", -5.0);
    assert_result("2 * -3", -6.0);
}

#[test]
fn division_follows_ieee_semantics() {
    assert_result("1 / 0", f64::INFINITY);
    assert_result("-1 / 0", f64::NEG_INFINITY);
    assert!(calculate("0 / 0").unwrap().is_nan());
}

#[test]
fn error_positions_match_the_offending_character() {
    assert_error_at("", 0);
    assert_error_at("-", 0);
    assert_error_at("*", 0);
    assert_error_at("a", 0);
    assert_error_at("3a", 1);
    assert_error_at("3 + + 2", 4);
    assert_error_at("3 2", 2);
    assert_error_at("(-5)(4)", 4);
    assert_error_at("(5", 0);
    assert_error_at("5)", 1);
    assert_error_at(") * 5)", 0);
    assert_error_at("(5))", 3);
    assert_error_at("((5) - 1", 0);
    assert_error_at("(-)", 1);
    assert_error_at("(*)", 1);
    assert_error_at("()", 0);
    assert_error_at("3.3.3", 0);
}

#[test]
fn error_variants_are_specific() {
    assert_eq!(calculate(""), Err(ParseError::EmptyInput));
    assert_eq!(calculate("()"), Err(ParseError::EmptyParentheses { position: 0 }));
    assert_eq!(calculate("(-)"), Err(ParseError::OrphanMinus { position: 1 }));
    assert_eq!(calculate("(5"), Err(ParseError::UnclosedParenthesis { position: 0 }));
    assert_eq!(calculate("3 2"), Err(ParseError::OperatorNeeded { position: 2 }));
    assert_eq!(calculate("3.3.3"), Err(ParseError::InvalidNumber { position: 0 }));
}

#[test]
fn only_the_space_character_is_whitespace() {
    assert_error_at("\t5", 0);
    assert_error_at("5\t", 1);
    assert_error_at("2 +\n2", 3);
}

#[test]
fn overlong_literal_is_rejected_at_its_start() {
    let formula = "3".repeat(500);
    assert_eq!(calculate(&formula), Err(ParseError::InvalidNumber { position: 0 }));
}

#[test]
fn parsing_is_idempotent() {
    let formula = "7 + (((5 * 2) + 5) / (2 + 3) + 1) / 2 - 1";
    let tokens = tokenize(formula).unwrap();

    let first = parse(&tokens).unwrap();
    let second = parse(&tokens).unwrap();

    assert_eq!(first, second);
    assert_eq!(evaluate(&first), evaluate(&second));
}

#[test]
fn root_expression_consumes_every_token() {
    for formula in ["5", "-5", "2 + 3 * 4", "2 * (3 * ((3 + 1) + 1) + 2)"] {
        let tokens = tokenize(formula).unwrap();
        let tree = parse(&tokens).unwrap();
        assert_eq!(tree.token_span(), tokens.len(), "span mismatch for '{formula}'");
    }
}

#[test]
fn reasonable_nesting_is_accepted() {
    let formula = format!("{}5{}", "(".repeat(200), ")".repeat(200));
    assert_result(&formula, 5.0);
}

#[test]
fn pathological_nesting_is_rejected() {
    let parens = format!("{}5{}", "(".repeat(300), ")".repeat(300));
    assert_error_at(&parens, 257);

    let minuses = format!("{}5", "-".repeat(300));
    assert_error_at(&minuses, 257);

    // A long run of unmatched openers fails on the closer search, before any
    // deep recursion can happen.
    assert_error_at(&"(".repeat(5000), 0);
}
