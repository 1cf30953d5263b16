//! Request and response bodies for the gateway endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub phone_number: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct SigninRequest {
    pub username: String,
    pub password: String,
}

/// Body for `/verify`. A present `session` selects the MFA challenge path,
/// an absent one selects registration confirmation.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct VerifyRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
    pub username: String,
    pub code: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub message: String,
    pub user_sub: String,
    pub user_confirmed: bool,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub message: String,
    pub access_token: String,
    pub id_token: String,
    pub refresh_token: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct VerifiedResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

/// Error body shared by the 400 responses.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_verify_request_session_is_optional() {
        let request: VerifyRequest =
            serde_json::from_value(json!({"username": "a@b.com", "code": "123456"})).unwrap();

        assert!(request.session.is_none());

        let request: VerifyRequest = serde_json::from_value(json!({
            "session": "AYABeC1.session",
            "username": "a@b.com",
            "code": "123456",
        }))
        .unwrap();

        assert_eq!(request.session.as_deref(), Some("AYABeC1.session"));
    }

    #[test]
    fn test_signup_response_uses_camel_case() {
        let response = SignupResponse {
            message: "User signed up and confirmed successfully.".to_string(),
            user_sub: "abc-123".to_string(),
            user_confirmed: true,
        };

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "message": "User signed up and confirmed successfully.",
                "userSub": "abc-123",
                "userConfirmed": true,
            })
        );
    }

    #[test]
    fn test_verified_response_skips_absent_action() {
        let response = VerifiedResponse {
            message: "User verified successfully".to_string(),
            action: None,
        };

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"message": "User verified successfully"})
        );
    }
}
