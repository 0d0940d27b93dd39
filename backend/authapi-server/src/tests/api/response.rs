use crate::ApiResponse;

use serde_json::json;

#[test]
fn test_success_envelope_has_null_message() {
    let value = serde_json::to_value(ApiResponse::success(json!({"id": 1}))).unwrap();

    assert_eq!(
        value,
        json!({"success": true, "message": null, "data": {"id": 1}})
    );
}

#[test]
fn test_error_envelope_has_null_data() {
    let value = serde_json::to_value(ApiResponse::<()>::error("Failed")).unwrap();

    assert_eq!(
        value,
        json!({"success": false, "message": "Failed", "data": null})
    );
}
