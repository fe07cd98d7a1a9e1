use crate::{
    error::RuntimeError,
    interpreter::evaluator::{binary, function},
    rpn::{Rpn, RpnToken},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a postfix sequence with the free variable bound to `x`.
///
/// The sequence is scanned once, left to right. Numbers are pushed, the
/// variable pushes `x`, a function replaces the top value with its result and
/// an operator replaces the top two values with its result. For operators the
/// value popped second is the left operand. Exactly one value must remain at
/// the end.
///
/// The stack is local to the call, so evaluation has no side effects and
/// repeated calls with the same arguments give the same result.
///
/// # Errors
/// - [`RuntimeError::InsufficientOperands`] when an operator or function finds
///   too few values, and [`RuntimeError::EmptyExpression`] when nothing is
///   left at the end.
/// - [`RuntimeError::ExcessOperands`] when more than one value is left.
/// - [`RuntimeError::DivisionByZero`] and [`RuntimeError::DomainError`] from
///   the operators and functions themselves.
///
/// # Example
/// ```
/// use rpntab::{interpreter::evaluator::core::evaluate, rpn::Rpn};
///
/// let rpn: Rpn = "x 2 ^ 1 +".parse().unwrap();
/// assert_eq!(evaluate(&rpn, 3.0).unwrap(), 10.0);
///
/// let rpn: Rpn = "2 3".parse().unwrap();
/// assert!(evaluate(&rpn, 0.0).is_err());
/// ```
pub fn evaluate(rpn: &Rpn, x: f64) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(rpn.len());

    for (index, token) in rpn.tokens().iter().enumerate() {
        match *token {
            RpnToken::Number(value) => stack.push(value.into_inner()),
            RpnToken::Variable => stack.push(x),
            RpnToken::Function(f) => {
                let operand = pop_operand(&mut stack, token, index)?;
                stack.push(function::apply(f, operand, index)?);
            },
            RpnToken::Operator(op) => {
                let right = pop_operand(&mut stack, token, index)?;
                let left = pop_operand(&mut stack, token, index)?;
                stack.push(binary::apply(op, left, right, index)?);
            },
        }
    }

    let result = stack.pop().ok_or(RuntimeError::EmptyExpression)?;
    if !stack.is_empty() {
        return Err(RuntimeError::ExcessOperands { remaining: stack.len() + 1 });
    }
    Ok(result)
}

/// Pops one operand for `token`, failing if the stack is exhausted.
fn pop_operand(stack: &mut Vec<f64>, token: &RpnToken, index: usize) -> EvalResult<f64> {
    stack.pop()
         .ok_or_else(|| RuntimeError::InsufficientOperands { token: token.to_string(),
                                                             index })
}
