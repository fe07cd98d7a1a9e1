/// The lexer module tokenizes source text for the converter.
///
/// The lexer reads the raw expression and produces a stream of tokens, each
/// paired with its byte offset: numbers, identifiers, operator symbols and
/// parentheses. This is the first stage of compilation.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Skips whitespace.
/// - Reports the first character that starts no token.
pub mod lexer;
/// The converter module turns infix tokens into a postfix sequence.
///
/// A preprocessing pass settles what each identifier and `-` means, then the
/// shunting-yard pass reorders tokens by precedence, associativity and
/// parentheses.
///
/// # Responsibilities
/// - Resolves constants, the free variable, function names and unary minus.
/// - Produces an [`Rpn`](crate::rpn::Rpn) in which every operator follows its
///   operands.
/// - Reports unbalanced parentheses and unknown names.
pub mod converter;
/// The evaluator module runs postfix sequences on a stack machine.
///
/// # Responsibilities
/// - Substitutes the free variable.
/// - Applies operators and functions with arity and domain checks.
/// - Reports leftover or missing operands.
pub mod evaluator;
/// The tabulator module samples a compiled expression over a range.
///
/// # Responsibilities
/// - Validates the range and sample count.
/// - Generates evenly spaced sample points.
/// - Evaluates one compiled sequence at every point, stopping at the first
///   failure.
pub mod tabulator;
