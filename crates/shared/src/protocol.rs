use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Operation;

/// Body accepted by `POST /api/calculate` once validated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CalculateRequest {
    pub operation: Operation,
    pub num1: f64,
    pub num2: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Operands {
    pub num1: f64,
    pub num2: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub success: bool,
    pub result: f64,
    pub operation: Operation,
    pub operands: Operands,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationsResponse {
    pub operations: Vec<String>,
    pub descriptions: BTreeMap<String, String>,
}

impl OperationsResponse {
    pub fn listing() -> Self {
        Self {
            operations: Operation::ALL.iter().map(|op| op.name().to_string()).collect(),
            descriptions: Operation::ALL
                .iter()
                .map(|op| (op.name().to_string(), op.describe().to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_covers_all_operations_in_order() {
        let listing = OperationsResponse::listing();
        assert_eq!(listing.operations, ["add", "subtract", "multiply", "divide"]);
        assert_eq!(
            listing.descriptions.get("divide").map(String::as_str),
            Some("Divide dos números")
        );
    }

    #[test]
    fn calculate_response_wire_shape() {
        let response = CalculateResponse {
            success: true,
            result: 8.0,
            operation: Operation::Add,
            operands: Operands { num1: 5.0, num2: 3.0 },
        };
        let value = serde_json::to_value(&response).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({
                "success": true,
                "result": 8.0,
                "operation": "add",
                "operands": {"num1": 5.0, "num2": 3.0}
            })
        );
    }
}
