use shared::domain::Operation;
use thiserror::Error;

/// Results are rounded to 9 decimal places to suppress floating-point noise
/// (`0.1 + 0.2` renders as `0.3`).
const ROUND_SCALE: f64 = 1e9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("División por cero no permitida")]
    DivisionByZero,
    #[error("Operador no válido")]
    InvalidOperator,
    #[error("Resultado matemático inválido")]
    InvalidResult,
}

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Fails on a zero divisor. `-0.0 == 0.0` in IEEE 754, so a negative zero
/// divisor is rejected as well.
pub fn divide(a: f64, b: f64) -> Result<f64, CalcError> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

/// Applies `op` to the operands, validates the result is finite, and rounds
/// to 9 decimal places.
pub fn evaluate(a: f64, op: Operation, b: f64) -> Result<f64, CalcError> {
    let raw = match op {
        Operation::Add => add(a, b),
        Operation::Subtract => subtract(a, b),
        Operation::Multiply => multiply(a, b),
        Operation::Divide => divide(a, b)?,
    };

    if !raw.is_finite() {
        return Err(CalcError::InvalidResult);
    }

    Ok((raw * ROUND_SCALE).round() / ROUND_SCALE)
}

/// Same as [`evaluate`] but takes a keypad symbol, failing on anything that
/// is not one of `+ - * /`.
pub fn evaluate_symbol(a: f64, symbol: char, b: f64) -> Result<f64, CalcError> {
    let op = Operation::from_symbol(symbol).ok_or(CalcError::InvalidOperator)?;
    evaluate(a, op, b)
}
