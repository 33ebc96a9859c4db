use serde::Deserialize;

/// 액세스 토큰 재발급 요청 DTO
///
/// `{"refreshToken": "..."}`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccessTokenRequest {
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_camel_case() {
        let req: CreateAccessTokenRequest =
            serde_json::from_str(r#"{"refreshToken":"abc"}"#).unwrap();

        assert_eq!(req.refresh_token, "abc");
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let result = serde_json::from_str::<CreateAccessTokenRequest>(r#"{"refresh_token":"abc"}"#);

        assert!(result.is_err());
    }
}
