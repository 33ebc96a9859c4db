//! # Core Module
//!
//! 애플리케이션 조립을 담당합니다.
//!
//! - [`app_state`] - 저장소/서비스를 생성자 주입으로 묶는 컨테이너

pub mod app_state;

pub use app_state::AppState;
