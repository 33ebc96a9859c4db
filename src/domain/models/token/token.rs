//! JWT 클레임 구조체
//!
//! RFC 7519 등록 클레임(`sub`, `iss`, `iat`, `exp`)과
//! 애플리케이션이 추가하는 임의의 클레임을 함께 담습니다.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 예약된 등록 클레임 이름. 추가 클레임으로 덮어쓸 수 없습니다.
pub const REGISTERED_CLAIMS: [&str; 4] = ["sub", "iss", "iat", "exp"];

/// JWT 토큰의 클레임(Payload)
///
/// - `sub`: 토큰의 주체 (사용자 이메일)
/// - `iss`: 발급자
/// - `iat`: 발급 시간 (Unix timestamp, 초)
/// - `exp`: 만료 시간 (Unix timestamp, 초)
/// - 그 외: `extra`에 평탄화되어 저장 (예: `id`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    pub fn claim(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }

    /// 정수형 추가 클레임을 읽습니다. 없거나 정수가 아니면 `None`.
    pub fn claim_i64(&self, name: &str) -> Option<i64> {
        self.extra.get(name).and_then(Value::as_i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extra_claims_are_flattened() {
        let mut extra = Map::new();
        extra.insert("id".to_string(), json!(7));

        let claims = Claims {
            sub: "user@example.com".to_string(),
            iss: "issuer".to_string(),
            iat: 100,
            exp: 200,
            extra,
        };

        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(value["id"], json!(7));
        assert_eq!(value["sub"], json!("user@example.com"));
        assert!(value.get("extra").is_none());
    }

    #[test]
    fn test_claim_i64_rejects_non_integer() {
        let claims: Claims = serde_json::from_value(json!({
            "sub": "a@b.c", "iss": "i", "iat": 1, "exp": 2,
            "id": "seven", "count": 3
        }))
        .unwrap();

        assert_eq!(claims.claim_i64("id"), None);
        assert_eq!(claims.claim_i64("count"), Some(3));
        assert_eq!(claims.claim_i64("missing"), None);
    }
}
