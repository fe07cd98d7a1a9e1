use crate::{
    error::ParseError,
    interpreter::lexer::Token,
    rpn::{Associativity, BinaryOperator, Function, Rpn, RpnToken, VARIABLE, constant},
};

/// Result type used by the converter.
pub type ParseResult<T> = Result<T, ParseError>;

/// A token whose role has been settled by [`resolve`].
///
/// Constants are already numbers, the variable is symbolic, names are known
/// functions, and a `-` in prefix position is negation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved {
    Number(f64),
    Variable,
    Function(Function),
    Operator(BinaryOperator),
    LParen,
    RParen,
}

/// Settles the role of every token, producing a new sequence.
///
/// - `PI` becomes its numeric value.
/// - `x` becomes the symbolic variable.
/// - Any other identifier must name a builtin function.
/// - `-` becomes [`Function::Negate`] when it is the first token or follows
///   an operator or `(`, since it cannot be binary there.
///
/// # Errors
/// Returns [`ParseError::UnknownFunction`] for an identifier that is neither a
/// function, a constant nor the variable.
///
/// # Example
/// ```
/// use rpntab::{
///     interpreter::{
///         converter::{Resolved, resolve},
///         lexer::tokenize,
///     },
///     rpn::{BinaryOperator, Function},
/// };
///
/// let tokens = tokenize("-x*-2").unwrap();
/// let kinds: Vec<Resolved> = resolve(&tokens).unwrap().into_iter().map(|(r, _)| r).collect();
/// assert_eq!(kinds,
///            vec![Resolved::Function(Function::Negate),
///                 Resolved::Variable,
///                 Resolved::Operator(BinaryOperator::Mul),
///                 Resolved::Function(Function::Negate),
///                 Resolved::Number(2.0)]);
/// ```
pub fn resolve(tokens: &[(Token, usize)]) -> ParseResult<Vec<(Resolved, usize)>> {
    let mut resolved: Vec<(Resolved, usize)> = Vec::with_capacity(tokens.len());

    for (token, position) in tokens {
        let position = *position;
        let item = match token {
            Token::Number(value) => Resolved::Number(*value),
            Token::Identifier(name) => resolve_identifier(name, position)?,
            Token::Operator(BinaryOperator::Sub) if is_prefix_position(resolved.last()) => {
                Resolved::Function(Function::Negate)
            },
            Token::Operator(op) => Resolved::Operator(*op),
            Token::LParen => Resolved::LParen,
            Token::RParen => Resolved::RParen,
            Token::Ignored => continue,
        };
        resolved.push((item, position));
    }

    Ok(resolved)
}

/// Converts resolved tokens from infix to postfix order.
///
/// Operands go straight to the output. Functions, operators and `(` wait on
/// a stack. An incoming operator first releases every function on top of the
/// stack, and every operator that binds tighter, or equally tight when
/// left-associative. `)` releases everything back to its `(`.
///
/// # Errors
/// - [`ParseError::ParenMismatch`] when a `)` has no open `(` or a `(` is
///   never closed.
/// - [`ParseError::InvalidOperation`] if a parenthesis would be written to the
///   output.
///
/// # Example
/// ```
/// use rpntab::interpreter::{
///     converter::{resolve, to_rpn},
///     lexer::tokenize,
/// };
///
/// let resolved = resolve(&tokenize("2^3^2").unwrap()).unwrap();
/// assert_eq!(to_rpn(&resolved).unwrap().to_string(), "2 3 2 ^ ^");
///
/// let resolved = resolve(&tokenize("8/4/2").unwrap()).unwrap();
/// assert_eq!(to_rpn(&resolved).unwrap().to_string(), "8 4 / 2 /");
/// ```
pub fn to_rpn(tokens: &[(Resolved, usize)]) -> ParseResult<Rpn> {
    let mut output: Vec<RpnToken> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<(Resolved, usize)> = Vec::new();

    for &(token, position) in tokens {
        match token {
            Resolved::Number(_) | Resolved::Variable => output.push(emit(token, position)?),

            Resolved::Function(_) | Resolved::LParen => stack.push((token, position)),

            Resolved::Operator(op) => {
                while let Some(&(top, top_position)) = stack.last()
                      && yields_to(top, op)
                {
                    stack.pop();
                    output.push(emit(top, top_position)?);
                }
                stack.push((token, position));
            },

            Resolved::RParen => loop {
                match stack.pop() {
                    None => return Err(ParseError::ParenMismatch { position }),
                    Some((Resolved::LParen, _)) => break,
                    Some((entry, entry_position)) => output.push(emit(entry, entry_position)?),
                }
            },
        }
    }

    while let Some((entry, position)) = stack.pop() {
        if matches!(entry, Resolved::LParen | Resolved::RParen) {
            return Err(ParseError::ParenMismatch { position });
        }
        output.push(emit(entry, position)?);
    }

    Ok(Rpn::from(output))
}

fn resolve_identifier(name: &str, position: usize) -> ParseResult<Resolved> {
    if let Some(value) = constant(name) {
        return Ok(Resolved::Number(value));
    }
    if name == VARIABLE {
        return Ok(Resolved::Variable);
    }
    Function::from_name(name).map(Resolved::Function)
                             .ok_or_else(|| ParseError::UnknownFunction { name: name.to_string(),
                                                                          position })
}

/// A `-` here cannot have a left operand.
const fn is_prefix_position(previous: Option<&(Resolved, usize)>) -> bool {
    matches!(previous, None | Some((Resolved::Operator(_) | Resolved::LParen, _)))
}

/// Whether `top` must leave the stack before `incoming` is pushed.
const fn yields_to(top: Resolved, incoming: BinaryOperator) -> bool {
    match top {
        Resolved::Function(_) => true,
        Resolved::Operator(top) => {
            top.precedence() > incoming.precedence()
            || (top.precedence() == incoming.precedence()
                && matches!(top.associativity(), Associativity::Left))
        },
        _ => false,
    }
}

/// Converts a stack or input entry into its postfix form.
fn emit(token: Resolved, position: usize) -> ParseResult<RpnToken> {
    match token {
        Resolved::Number(value) => Ok(RpnToken::number(value)),
        Resolved::Variable => Ok(RpnToken::Variable),
        Resolved::Function(function) => Ok(RpnToken::Function(function)),
        Resolved::Operator(op) => Ok(RpnToken::Operator(op)),
        Resolved::LParen => Err(ParseError::InvalidOperation { token: "(".to_string(),
                                                               position }),
        Resolved::RParen => Err(ParseError::InvalidOperation { token: ")".to_string(),
                                                               position }),
    }
}
