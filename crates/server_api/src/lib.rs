use chrono::Utc;
use engine::CalcError;
use serde_json::Value;
use shared::{
    domain::Operation,
    error::{ApiError, ErrorCode},
    protocol::{CalculateResponse, HealthResponse, Operands, OperationsResponse},
};
use tracing::{debug, warn};

/// Validates a raw `/api/calculate` body and resolves it to typed inputs.
///
/// Works on the raw JSON value rather than a typed extractor so that a
/// missing field, a null, and a mistyped field each produce their own
/// error payload, matching the published contract.
pub fn parse_request(body: &Value) -> Result<(Operation, f64, f64), ApiError> {
    let operation = match body.get("operation") {
        None | Some(Value::Null) => {
            return Err(missing_parameter("El parámetro operation es requerido"))
        }
        Some(value) => value,
    };

    let num1 = require_number(body, "num1")?;
    let num2 = require_number(body, "num2")?;

    if !num1.is_finite() || !num2.is_finite() {
        return Err(ApiError::new(
            ErrorCode::WrongType,
            "Números inválidos",
            "num1 y num2 deben ser números finitos",
        ));
    }

    let operation = match operation {
        Value::String(name) => Operation::from_name(name).ok_or_else(|| invalid_operation(name))?,
        other => {
            return Err(ApiError::new(
                ErrorCode::WrongType,
                "Tipos de datos incorrectos",
                format!("operation debe ser un string, no {}", json_type_name(other)),
            ))
        }
    };

    Ok((operation, num1, num2))
}

/// Controller for `POST /api/calculate`.
pub fn calculate(body: &Value) -> Result<CalculateResponse, ApiError> {
    let (operation, num1, num2) = parse_request(body).map_err(|err| {
        warn!(error = %err.error, "rejected calculation request");
        err
    })?;

    let result = engine::evaluate(num1, operation, num2).map_err(|err| {
        let api_err = calc_error_to_api(err);
        warn!(%operation, num1, num2, error = %api_err.error, "calculation failed");
        api_err
    })?;

    debug!(%operation, num1, num2, result, "calculation succeeded");
    Ok(CalculateResponse {
        success: true,
        result,
        operation,
        operands: Operands { num1, num2 },
    })
}

/// Controller for `GET /api/health`.
pub fn health() -> HealthResponse {
    HealthResponse {
        status: "OK".to_string(),
        message: "API de Calculadora funcionando correctamente".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Controller for `GET /api/operations`.
pub fn operations() -> OperationsResponse {
    OperationsResponse::listing()
}

fn require_number(body: &Value, field: &str) -> Result<f64, ApiError> {
    match body.get(field) {
        None | Some(Value::Null) => Err(missing_parameter(format!(
            "El parámetro {field} es requerido"
        ))),
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| {
            ApiError::new(
                ErrorCode::WrongType,
                "Números inválidos",
                "num1 y num2 deben ser números finitos",
            )
        }),
        Some(_) => Err(ApiError::new(
            ErrorCode::WrongType,
            "Tipos de datos incorrectos",
            "num1 y num2 deben ser números",
        )),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn missing_parameter(message: impl Into<String>) -> ApiError {
    ApiError::new(ErrorCode::MissingParameter, "Parámetros faltantes", message)
}

fn invalid_operation(name: &str) -> ApiError {
    ApiError::new(
        ErrorCode::InvalidOperationName,
        "Operación inválida",
        format!(
            "La operación \"{name}\" no es válida. Operaciones disponibles: add, subtract, multiply, divide"
        ),
    )
}

fn calc_error_to_api(err: CalcError) -> ApiError {
    match err {
        CalcError::DivisionByZero => ApiError::new(
            ErrorCode::DivisionByZero,
            "División por cero",
            "No se puede dividir por cero",
        ),
        CalcError::InvalidOperator => ApiError::new(
            ErrorCode::InvalidOperator,
            "Operación inválida",
            err.to_string(),
        ),
        CalcError::InvalidResult => ApiError::new(
            ErrorCode::InvalidResult,
            "Resultado matemático inválido",
            "El resultado de la operación no es un número finito",
        ),
    }
}
