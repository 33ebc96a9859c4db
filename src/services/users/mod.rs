//! 사용자 관리 서비스 모듈
//!
//! 가입(bcrypt 해싱, 중복 이메일 방지, 입력값 검증)과 비밀번호 인증을 담당합니다.

pub mod user_service;

pub use user_service::UserService;
