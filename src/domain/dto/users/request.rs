use serde::Deserialize;
use validator::Validate;

/// 회원 가입 요청 DTO
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddUserRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "비밀번호는 8-72자 사이여야 합니다"))]
    pub password: String,
}

/// 로그인 요청 DTO
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_add_user_request() {
        let req = AddUserRequest {
            email: "user@example.com".to_string(),
            password: "password123".to_string(),
        };

        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_rejects_invalid_email_and_short_password() {
        let req = AddUserRequest {
            email: "not-an-email".to_string(),
            password: "short".to_string(),
        };

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_login_requires_password() {
        let req = LoginRequest {
            email: "user@example.com".to_string(),
            password: String::new(),
        };

        assert!(req.validate().is_err());
    }
}
