use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult, rpn::Function};

/// Applies a unary function to a value.
///
/// `log` requires a positive argument and `sqrt` a non-negative one. Any
/// other function producing NaN from a non-NaN argument, such as `sin` of
/// infinity, is also outside its domain. Overflow is not an error: `exp` of a
/// large value is infinite.
///
/// # Parameters
/// - `function`: Function to apply.
/// - `operand`: Its argument.
/// - `index`: Position of the function in the postfix sequence.
///
/// # Returns
/// The function value, or [`RuntimeError::DomainError`].
///
/// # Example
/// ```
/// use rpntab::{interpreter::evaluator::function::apply, rpn::Function};
///
/// assert_eq!(apply(Function::Sqrt, 9.0, 0).unwrap(), 3.0);
/// assert_eq!(apply(Function::Negate, 2.5, 0).unwrap(), -2.5);
/// assert!(apply(Function::Log, -1.0, 0).is_err());
/// ```
pub fn apply(function: Function, operand: f64, index: usize) -> EvalResult<f64> {
    let result = match function {
        Function::Sin => operand.sin(),
        Function::Cos => operand.cos(),
        Function::Tan => operand.tan(),
        Function::Log => {
            if operand <= 0.0 {
                return Err(domain_error(function, operand, index));
            }
            operand.ln()
        },
        Function::Sqrt => {
            if operand < 0.0 {
                return Err(domain_error(function, operand, index));
            }
            operand.sqrt()
        },
        Function::Exp => operand.exp(),
        Function::Negate => -operand,
    };

    if result.is_nan() && !operand.is_nan() {
        return Err(domain_error(function, operand, index));
    }
    Ok(result)
}

fn domain_error(function: Function, argument: f64, index: usize) -> RuntimeError {
    RuntimeError::DomainError { operation: function.name().to_string(),
                                argument,
                                index }
}
