use super::*;
use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use shared::error::ErrorCode;

fn press(calculator: &mut Calculator, keys: &str) {
    for c in keys.chars() {
        if let Some(key) = Key::from_char(c) {
            calculator.apply(key);
        }
    }
}

#[test]
fn starts_at_zero() {
    let calculator = Calculator::new();
    assert_eq!(calculator.display(), "0");
    assert!(!calculator.has_error());
    assert!(!calculator.operation_pending());
}

#[test]
fn digits_append_and_leading_zero_is_replaced() {
    let mut calculator = Calculator::new();
    press(&mut calculator, "007");
    assert_eq!(calculator.display(), "7");
    press(&mut calculator, "25");
    assert_eq!(calculator.display(), "725");
}

#[test]
fn second_decimal_point_is_ignored() {
    let mut calculator = Calculator::new();
    press(&mut calculator, "2..5");
    assert_eq!(calculator.display(), "2.5");
}

#[test]
fn decimal_after_operator_starts_zero_point() {
    let mut calculator = Calculator::new();
    press(&mut calculator, "5+.");
    assert_eq!(calculator.display(), "0.");
    press(&mut calculator, "5=");
    assert_eq!(calculator.display(), "5.5");
}

#[test]
fn chained_operators_evaluate_eagerly() {
    let mut calculator = Calculator::new();
    press(&mut calculator, "5+3*");
    assert_eq!(calculator.display(), "8");
    press(&mut calculator, "2=");
    assert_eq!(calculator.display(), "16");
}

#[test]
fn equals_finalizes_and_next_digit_starts_fresh() {
    let mut calculator = Calculator::new();
    press(&mut calculator, "5+3=");
    assert_eq!(calculator.display(), "8");
    assert!(!calculator.operation_pending());
    press(&mut calculator, "4");
    assert_eq!(calculator.display(), "4");
}

#[test]
fn equals_without_pending_operator_is_a_noop() {
    let mut calculator = Calculator::new();
    press(&mut calculator, "5=");
    assert_eq!(calculator.display(), "5");
}

#[test]
fn equals_before_entering_second_operand_is_a_noop() {
    let mut calculator = Calculator::new();
    press(&mut calculator, "5+=");
    assert_eq!(calculator.display(), "5");
    assert!(calculator.operation_pending());
}

#[test]
fn division_by_zero_enters_error_state() {
    let mut calculator = Calculator::new();
    press(&mut calculator, "5/0=");
    assert_eq!(calculator.display(), "Error");
    assert!(calculator.has_error());
    assert!(!calculator.operation_pending());
}

#[test]
fn digit_after_error_starts_fresh() {
    let mut calculator = Calculator::new();
    press(&mut calculator, "5/0=7");
    assert_eq!(calculator.display(), "7");
    assert!(!calculator.has_error());
}

#[test]
fn operator_while_in_error_state_is_ignored() {
    let mut calculator = Calculator::new();
    press(&mut calculator, "5/0=+");
    assert_eq!(calculator.display(), "Error");
    assert!(calculator.has_error());
}

#[test]
fn chained_division_by_zero_also_errors() {
    let mut calculator = Calculator::new();
    press(&mut calculator, "5/0+");
    assert_eq!(calculator.display(), "Error");
    assert!(calculator.has_error());
}

#[test]
fn backspace_trims_and_bottoms_out_at_zero() {
    let mut calculator = Calculator::new();
    press(&mut calculator, "123");
    calculator.apply(Key::Backspace);
    assert_eq!(calculator.display(), "12");
    calculator.apply(Key::Backspace);
    calculator.apply(Key::Backspace);
    assert_eq!(calculator.display(), "0");
    calculator.apply(Key::Backspace);
    assert_eq!(calculator.display(), "0");
}

#[test]
fn backspace_clears_error_state() {
    let mut calculator = Calculator::new();
    press(&mut calculator, "5/0=");
    calculator.apply(Key::Backspace);
    assert_eq!(calculator.display(), "0");
    assert!(!calculator.has_error());
    assert!(!calculator.operation_pending());
}

#[test]
fn clear_entry_keeps_the_pending_operation() {
    let mut calculator = Calculator::new();
    press(&mut calculator, "5+3");
    calculator.apply(Key::ClearEntry);
    assert_eq!(calculator.display(), "0");
    assert!(calculator.operation_pending());
    press(&mut calculator, "4=");
    assert_eq!(calculator.display(), "9");
}

#[test]
fn negative_results_render_with_sign() {
    let mut calculator = Calculator::new();
    press(&mut calculator, "3-5=");
    assert_eq!(calculator.display(), "-2");
}

#[test]
fn rounds_floating_point_noise_on_equals() {
    let mut calculator = Calculator::new();
    press(&mut calculator, "0.1+0.2=");
    assert_eq!(calculator.display(), "0.3");
}

mod api_client_tests {
    use super::*;

    async fn spawn_server() -> String {
        let app = Router::new()
            .route(
                "/api/calculate",
                post(|Json(value): Json<serde_json::Value>| async move {
                    match server_api::calculate(&value) {
                        Ok(resp) => (StatusCode::OK, Json(serde_json::json!(resp))),
                        Err(err) => (StatusCode::BAD_REQUEST, Json(serde_json::json!(err))),
                    }
                }),
            )
            .route("/api/health", get(|| async { Json(server_api::health()) }))
            .route(
                "/api/operations",
                get(|| async { Json(server_api::operations()) }),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve");
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn calculates_against_a_live_server() {
        let base_url = spawn_server().await;
        let client = ApiClient::new(&base_url).expect("client");
        let result = client
            .calculate(Operation::Add, 5.0, 3.0)
            .await
            .expect("calculate");
        assert_eq!(result, 8.0);
    }

    #[tokio::test]
    async fn remote_division_by_zero_surfaces_the_api_error() {
        let base_url = spawn_server().await;
        let client = ApiClient::new(&base_url).expect("client");
        let err = client
            .calculate(Operation::Divide, 5.0, 0.0)
            .await
            .expect_err("should fail");
        match err {
            ClientError::Api(api_err) => {
                assert_eq!(api_err.code, ErrorCode::DivisionByZero);
                assert_eq!(api_err.error, "División por cero");
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn health_and_operations_round_trip() {
        let base_url = spawn_server().await;
        let client = ApiClient::new(&base_url).expect("client");

        let health = client.health().await.expect("health");
        assert_eq!(health.status, "OK");

        let listing = client.operations().await.expect("operations");
        assert_eq!(listing.operations.len(), 4);
    }

    #[test]
    fn rejects_an_invalid_base_url() {
        let err = ApiClient::new("not a url").expect_err("should fail");
        assert!(matches!(err, ClientError::InvalidBaseUrl(_)));
    }
}
