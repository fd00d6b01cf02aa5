use thiserror::Error;

/// Source location span for error reporting
/// Represents a range of bytes in the prepared (lowercased, whitespace-free) input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start position (0-indexed byte offset)
    pub start: usize,
    /// End position (exclusive, 0-indexed byte offset)
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Create a span for a single position
    pub fn at(pos: usize) -> Self {
        Span {
            start: pos,
            end: pos + 1,
        }
    }

    /// Check if this span has valid location info
    pub fn is_valid(&self) -> bool {
        self.end > self.start
    }

    /// Format the span for display (1-indexed for users)
    pub fn display(&self) -> String {
        if !self.is_valid() {
            String::new()
        } else if self.end - self.start == 1 {
            format!(" at position {}", self.start + 1)
        } else {
            format!(" at positions {}-{}", self.start + 1, self.end)
        }
    }
}

/// Diagnostics produced by the expression normalizer.
///
/// The `Display` output of every variant is one fixed, upper-case message, so
/// callers can show it verbatim and ask for corrected input. The optional
/// span is diagnostic detail for logs and `Debug` output only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("EMPTY STRING.")]
    EmptyString,
    #[error("EMPTY PARENTHESIS.")]
    EmptyParenthesis,
    #[error("AMBIGUOUS EXPONENT.")]
    AmbiguousExponent { span: Option<Span> },
    #[error("INVALID CHARACTERS.")]
    InvalidCharacters { found: char, span: Option<Span> },
    #[error("INCORRECT PARENTHESIS.")]
    IncorrectParenthesis { span: Option<Span> },
    #[error("TRAILING OPERATOR.")]
    TrailingOperator { span: Option<Span> },
    #[error("HANGING OPERATOR.")]
    HangingOperator { span: Option<Span> },
    #[error("CONSECUTIVE OPERATORS.")]
    ConsecutiveOperators { span: Option<Span> },
    #[error("OPERATOR AFTER OPENING PARENTHESIS.")]
    OperatorAfterParenthesis { span: Option<Span> },
    #[error("OPERATOR BEFORE CLOSING PARENTHESIS.")]
    OperatorBeforeParenthesis { span: Option<Span> },
    #[error("MISPLACED EXPONENT.")]
    MisplacedExponent { span: Option<Span> },
    #[error("UNKNOWN FUNCTION OR VARIABLE.")]
    UnknownName { name: String, span: Option<Span> },
    #[error("VARIABLE NOT ALLOWED.")]
    VariableNotAllowed { span: Option<Span> },
    #[error("FUNCTION WITHOUT ARGUMENT.")]
    MissingArgument { name: String, span: Option<Span> },
    #[error("INCORRECT DECIMAL POINT.")]
    IncorrectDecimal { span: Option<Span> },
    #[error("MULTIPLE DECIMAL POINTS.")]
    MultipleDecimals { span: Option<Span> },
    #[error("MISPLACED COMMA.")]
    MisplacedComma { span: Option<Span> },
    #[error("WRONG NUMBER OF ARGUMENTS.")]
    WrongArgumentCount {
        name: String,
        expected: usize,
        got: usize,
    },
    #[error("MISSING OPERAND.")]
    MissingOperand { span: Option<Span> },
    #[error("EXPRESSION TOO DEEPLY NESTED.")]
    TooDeeplyNested { span: Option<Span> },
}

impl NormalizeError {
    /// Location of the offending input, when known
    pub fn span(&self) -> Option<Span> {
        match self {
            NormalizeError::EmptyString
            | NormalizeError::EmptyParenthesis
            | NormalizeError::WrongArgumentCount { .. } => None,
            NormalizeError::AmbiguousExponent { span }
            | NormalizeError::InvalidCharacters { span, .. }
            | NormalizeError::IncorrectParenthesis { span }
            | NormalizeError::TrailingOperator { span }
            | NormalizeError::HangingOperator { span }
            | NormalizeError::ConsecutiveOperators { span }
            | NormalizeError::OperatorAfterParenthesis { span }
            | NormalizeError::OperatorBeforeParenthesis { span }
            | NormalizeError::MisplacedExponent { span }
            | NormalizeError::UnknownName { span, .. }
            | NormalizeError::VariableNotAllowed { span }
            | NormalizeError::MissingArgument { span, .. }
            | NormalizeError::IncorrectDecimal { span }
            | NormalizeError::MultipleDecimals { span }
            | NormalizeError::MisplacedComma { span }
            | NormalizeError::MissingOperand { span }
            | NormalizeError::TooDeeplyNested { span } => *span,
        }
    }

    /// The message plus location, for logs
    pub fn detailed(&self) -> String {
        format!("{}{}", self, self.span().map_or(String::new(), |s| s.display()))
    }
}

/// Errors raised while computing a derivative vector.
///
/// Domain errors abort the whole computation; no partial vector is returned.
/// Guard errors are raised before any recursion starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiffError {
    // Domain errors
    #[error("division by zero")]
    DivisionByZero,
    #[error("logarithm of a non-positive value")]
    LogOfNonPositive,
    #[error("square root of a negative value")]
    SqrtOfNegative,
    #[error("square root is not differentiable at zero")]
    SqrtBranchPoint,
    #[error("power is undefined here: {0}")]
    PowDomain(&'static str),
    #[error("{function} has a pole at this point")]
    Singularity { function: &'static str },
    #[error("{function} argument is outside its domain")]
    InverseTrigDomain { function: &'static str },
    #[error("invalid number literal '{0}'")]
    InvalidNumber(String),

    // Safety limits
    #[error("order {order} exceeds the maximum of {max}")]
    OrderTooLarge { order: usize, max: usize },
    #[error("order {order} times {calls} calls exceeds the complexity limit {limit}")]
    ComplexityLimit {
        order: usize,
        calls: usize,
        limit: usize,
    },
    #[error("expression nesting depth exceeds maximum limit")]
    MaxDepthExceeded,

    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

impl DiffError {
    /// True for errors caused by the function's domain at the given point
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            DiffError::DivisionByZero
                | DiffError::LogOfNonPositive
                | DiffError::SqrtOfNegative
                | DiffError::SqrtBranchPoint
                | DiffError::PowDomain(_)
                | DiffError::Singularity { .. }
                | DiffError::InverseTrigDomain { .. }
        )
    }
}
