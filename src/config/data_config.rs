//! 데이터 및 실행 환경 설정 관리 모듈
//!
//! 실행 환경과 초기 데이터(시드) 관련 설정을 관리합니다.

use std::env;
use crate::domain::entities::users::user::User;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 개발 계열 환경인지 확인 (개발/테스트)
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development | Environment::Test)
    }
}

/// 초기 데이터 설정
pub struct SeedConfig;

impl SeedConfig {
    /// 시작 시 데모 사용자를 넣을지 여부
    ///
    /// # Environment Variables
    ///
    /// - `SEED_DEMO_USERS`: `true`/`1`/`yes`이면 활성화 (기본값: 비활성)
    pub fn seed_demo_users() -> bool {
        Self::parse_flag(env::var("SEED_DEMO_USERS").ok().as_deref())
    }

    /// 플래그 문자열 해석
    pub fn parse_flag(value: Option<&str>) -> bool {
        matches!(
            value.map(|v| v.trim().to_lowercase()).as_deref(),
            Some("true" | "1" | "yes")
        )
    }

    /// 데모 사용자 목록
    pub fn demo_users() -> Vec<User> {
        vec![
            User::new("Anshul".to_string(), 21, None, false),
            User::new("Aniket".to_string(), 22, None, false),
        ]
    }

    /// 설정에 따른 초기 사용자 목록
    pub fn initial_users() -> Vec<User> {
        if Self::seed_demo_users() {
            Self::demo_users()
        } else {
            Vec::new()
        }
    }
}
