use crate::{NormalizeError, Normalizer, normalize, normalize_with};

fn ok(input: &str) -> String {
    match normalize(input) {
        Ok(canonical) => canonical,
        Err(err) => panic!("{:?} rejected: {}", input, err.detailed()),
    }
}

fn message(input: &str) -> String {
    match normalize(input) {
        Ok(canonical) => panic!("{:?} accepted as {}", input, canonical),
        Err(err) => err.to_string(),
    }
}

#[test]
fn test_basic_operators() {
    assert_eq!(ok("2x+3"), "add(mul(2,x),3)");
    assert_eq!(ok("x^2-1"), "sub(pow(x,2),1)");
    assert_eq!(ok("2×3÷x"), "mul(2,div(3,x))");
    assert_eq!(ok("x·x"), "mul(x,x)");
    assert_eq!(ok("x^2^3"), "pow(x,pow(2,3))");
}

#[test]
fn test_operator_priority() {
    // Rewritten in the order ^ / * - +, each level left to right
    assert_eq!(ok("x+1-2"), "add(x,sub(1,2))");
    assert_eq!(ok("x-1+2"), "add(sub(x,1),2)");
    assert_eq!(ok("2*x/3"), "mul(2,div(x,3))");
    assert_eq!(ok("x/2*3"), "mul(div(x,2),3)");
    assert_eq!(ok("x-1-2"), "sub(sub(x,1),2)");
    assert_eq!(ok("x/2/3"), "div(div(x,2),3)");
    assert_eq!(ok("1+2x^2/3-x"), "add(1,sub(mul(2,div(pow(x,2),3)),x))");
}

#[test]
fn test_unary_minus() {
    assert_eq!(ok("-x^2"), "sub(0,pow(x,2))");
    assert_eq!(ok("-2x"), "sub(0,mul(2,x))");
    assert_eq!(ok("2^-1"), "pow(2,sub(0,1))");
    assert_eq!(ok("x*-3"), "mul(x,sub(0,3))");
}

#[test]
fn test_sign_runs_collapse() {
    assert_eq!(ok("x--1"), "add(x,1)");
    assert_eq!(ok("x+-1"), "sub(x,1)");
    assert_eq!(ok("x-+-+1"), "add(x,1)");
    assert_eq!(ok("+x"), "x");
}

#[test]
fn test_implicit_multiplication() {
    assert_eq!(ok("2(x+1)"), "mul(2,add(x,1))");
    assert_eq!(ok("(x+1)(x-1)"), "mul(add(x,1),sub(x,1))");
    assert_eq!(ok("sin(x)cos(x)"), "mul(sin(x),cos(x))");
    assert_eq!(ok("3sin(x)"), "mul(3,sin(x))");
    assert_eq!(ok("2√x"), "mul(2,sqrt(x))");
}

#[test]
fn test_letter_runs_split_into_names() {
    assert_eq!(ok("xsin(x)"), "mul(x,sin(x))");
    assert_eq!(ok("2xsin(x)"), "mul(mul(2,x),sin(x))");
    assert_eq!(ok("xe^x"), "mul(x,pow(2.71828182845904523536,x))");
    assert_eq!(ok("ex"), "mul(2.71828182845904523536,x)");
    assert_eq!(ok("xx"), "mul(x,x)");
    assert_eq!(ok("xexp(x)"), "mul(x,exp(x))");
}

#[test]
fn test_superscripts() {
    assert_eq!(ok("2x²"), "mul(2,pow(x,2))");
    assert_eq!(ok("x²³"), "pow(x,23)");
    assert_eq!(ok("(x+1)²"), "pow(add(x,1),2)");
    assert_eq!(ok("sin²(x)"), "pow(sin(x),2)");
    assert_eq!(ok("x²3"), "mul(pow(x,2),3)");
}

#[test]
fn test_radical() {
    assert_eq!(ok("√(x+1)"), "sqrt(add(x,1))");
    assert_eq!(ok("√x+1"), "add(sqrt(x),1)");
    assert_eq!(ok("√x^2"), "sqrt(pow(x,2))");
}

#[test]
fn test_aliases() {
    assert_eq!(ok("arcsin(x)"), "asin(x)");
    assert_eq!(ok("arctan(3x)"), "atan(mul(3,x))");
    assert_eq!(ok("cosec(x)"), "csc(x)");
    assert_eq!(ok("cosecant(x)"), "csc(x)");
    assert_eq!(ok("cotangent(x)"), "cot(x)");
    assert_eq!(ok("ctg(x)"), "cot(x)");
    assert_eq!(ok("tg(x)"), "tan(x)");
    assert_eq!(ok("tangent(x)"), "tan(x)");
    assert_eq!(ok("secant(x)"), "sec(x)");
    assert_eq!(ok("sine(x)"), "sin(x)");
    assert_eq!(ok("cosine(x)"), "cos(x)");
    assert_eq!(ok("log(x)"), "ln(x)");
}

#[test]
fn test_constants() {
    assert_eq!(ok("π"), "3.14159265358979323846");
    assert_eq!(ok("2pi"), "mul(2,3.14159265358979323846)");
    assert_eq!(ok("e^x"), "pow(2.71828182845904523536,x)");
}

#[test]
fn test_case_and_whitespace() {
    assert_eq!(ok("SIN( X )"), "sin(x)");
    assert_eq!(ok(" 2 x + 3 "), "add(mul(2,x),3)");
}

#[test]
fn test_decimal_repair() {
    assert_eq!(ok(".5x"), "mul(0.5,x)");
    assert_eq!(ok("x+.25"), "add(x,0.25)");
    assert_eq!(ok("5.+x"), "add(5.0,x)");
}

#[test]
fn test_parenthesis_repair() {
    assert_eq!(ok("(x+1"), "add(x,1)");
    assert_eq!(ok("sin(x"), "sin(x)");
    assert_eq!(ok("x+1)"), "add(x,1)");
}

#[test]
fn test_canonical_text_is_accepted() {
    for text in [
        "add(mul(2,x),3)",
        "pow(sin(x),2)",
        "sub(0,div(1,x))",
        "asin(mul(0.5,x))",
        "coth(x)",
    ] {
        assert_eq!(ok(text), text);
    }
}

#[test]
fn test_diagnostics() {
    let cases = [
        ("", "EMPTY STRING."),
        ("   ", "EMPTY STRING."),
        ("()", "EMPTY PARENTHESIS."),
        ("x².5", "AMBIGUOUS EXPONENT."),
        ("x$2", "INVALID CHARACTERS."),
        ("x+", "TRAILING OPERATOR."),
        ("*x", "HANGING OPERATOR."),
        ("x*/2", "CONSECUTIVE OPERATORS."),
        ("(*x)", "OPERATOR AFTER OPENING PARENTHESIS."),
        ("(x*)", "OPERATOR BEFORE CLOSING PARENTHESIS."),
        ("²x", "MISPLACED EXPONENT."),
        ("foo(x)", "UNKNOWN FUNCTION OR VARIABLE."),
        ("xy", "UNKNOWN FUNCTION OR VARIABLE."),
        ("2xsinq(x)", "UNKNOWN FUNCTION OR VARIABLE."),
        ("sin x", "FUNCTION WITHOUT ARGUMENT."),
        ("sin", "FUNCTION WITHOUT ARGUMENT."),
        ("x.5", "INCORRECT DECIMAL POINT."),
        ("1.2.3", "MULTIPLE DECIMAL POINTS."),
        ("x+*1.2.3", "CONSECUTIVE OPERATORS."),
        ("foo+*1", "CONSECUTIVE OPERATORS."),
        ("xy+1.2.3", "UNKNOWN FUNCTION OR VARIABLE."),
        ("(x,1)", "MISPLACED COMMA."),
        ("sin(x,1)", "WRONG NUMBER OF ARGUMENTS."),
        ("pow(x)", "WRONG NUMBER OF ARGUMENTS."),
        ("add(x,)", "MISSING OPERAND."),
    ];
    for (input, expected) in cases {
        assert_eq!(message(input), expected, "input {:?}", input);
    }
}

#[test]
fn test_variable_not_allowed() {
    assert_eq!(
        normalize_with("2x", false).unwrap_err().to_string(),
        "VARIABLE NOT ALLOWED."
    );
    assert_eq!(
        normalize_with("2x*/1", false).unwrap_err().to_string(),
        "CONSECUTIVE OPERATORS."
    );
    assert_eq!(
        normalize_with("2e+sin(1)", false).unwrap(),
        "add(mul(2,2.71828182845904523536),sin(1))"
    );
}

#[test]
fn test_error_spans_are_debug_only() {
    let err = normalize("x+").unwrap_err();
    assert!(err.span().is_some());
    assert_eq!(err.to_string(), "TRAILING OPERATOR.");
    assert!(err.detailed().starts_with("TRAILING OPERATOR."));

    assert_eq!(
        Normalizer::new().normalize(""),
        Err(NormalizeError::EmptyString)
    );
}

#[test]
fn test_deep_nesting_is_a_diagnostic() {
    let deep = format!("{}x", "(".repeat(100_000));
    assert_eq!(message(&deep), "EXPRESSION TOO DEEPLY NESTED.");

    let deep = format!("{}x{}", "sin(".repeat(5_000), ")".repeat(5_000));
    assert_eq!(message(&deep), "EXPRESSION TOO DEEPLY NESTED.");

    let long = vec!["1"; 100_000].join("+");
    assert_eq!(message(&long), "EXPRESSION TOO DEEPLY NESTED.");

    let shallow = format!("{}x{}", "(".repeat(100), ")".repeat(100));
    assert_eq!(ok(&shallow), "x");
}
