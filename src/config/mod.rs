//! # Configuration Module
//!
//! 사용자 레지스트리 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 초기 데이터(시드) 설정
//! - [`server_config`] - 바인딩 주소, 워커 수, Rate Limiting, CORS 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 프로필 (.env.dev / .env.prod 선택)
//! export PROFILE="dev"
//!
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export WORKERS="4"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//!
//! # CORS
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000,https://app.example.com"
//!
//! # 데모 사용자 시드
//! export SEED_DEMO_USERS="true"
//! ```
//!
//! 잘못된 숫자 값은 에러 로그를 남기고 기본값으로 대체됩니다.

pub mod data_config;
pub mod server_config;

pub use data_config::*;
pub use server_config::*;
