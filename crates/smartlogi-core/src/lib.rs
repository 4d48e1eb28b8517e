//! # SmartLogi Core
//!
//! SmartLogi 물류 추적 클라이언트의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 클라이언트 전반에서 사용되는 기본 타입을 제공합니다:
//! - 사용자 및 역할(RBAC) 정의
//! - 콜리(배송물), 존, 상품, 수취인 도메인 모델
//! - 통계 DTO
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod logging;

pub use config::*;
pub use domain::*;
pub use logging::*;
