use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult, rpn::BinaryOperator};

/// Applies a binary operator to two values.
///
/// Division and modulo by exactly zero fail, as does raising zero to a
/// negative power. Modulo is floored, so the result takes the sign of the
/// divisor. A power that has no real value, such as a negative base with a
/// fractional exponent, is a domain error. Everything else follows IEEE
/// arithmetic.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `index`: Position of the operator in the postfix sequence.
///
/// # Example
/// ```
/// use rpntab::{interpreter::evaluator::binary::apply, rpn::BinaryOperator};
///
/// assert_eq!(apply(BinaryOperator::Pow, 2.0, 10.0, 0).unwrap(), 1024.0);
/// assert_eq!(apply(BinaryOperator::Mod, -7.0, 3.0, 0).unwrap(), 2.0);
/// assert!(apply(BinaryOperator::Div, 1.0, 0.0, 0).is_err());
/// ```
pub fn apply(op: BinaryOperator, left: f64, right: f64, index: usize) -> EvalResult<f64> {
    use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};

    match op {
        Add => Ok(left + right),
        Sub => Ok(left - right),
        Mul => Ok(left * right),
        Div => {
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero { index });
            }
            Ok(left / right)
        },
        Mod => {
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero { index });
            }
            Ok(floored_rem(left, right))
        },
        Pow => eval_pow(left, right, index),
    }
}

fn eval_pow(base: f64, exponent: f64, index: usize) -> EvalResult<f64> {
    if base == 0.0 && exponent < 0.0 {
        return Err(RuntimeError::DivisionByZero { index });
    }

    let result = base.powf(exponent);
    if result.is_nan() && !base.is_nan() && !exponent.is_nan() {
        return Err(RuntimeError::DomainError { operation: BinaryOperator::Pow.symbol()
                                                                             .to_string(),
                                               argument: base,
                                               index });
    }
    Ok(result)
}

/// Remainder whose sign follows the divisor.
fn floored_rem(left: f64, right: f64) -> f64 {
    let rem = left % right;
    if rem != 0.0 && (rem < 0.0) != (right < 0.0) {
        rem + right
    } else {
        rem
    }
}
