//! taskgate 시스템의 에러 타입.
//!
//! 게이트웨이 파이프라인의 실패 분류를 정의합니다. 각 에러는 고정된 HTTP
//! 상태 코드와 클라이언트용 일반 메시지에 매핑됩니다. 내부 상세 정보
//! (업스트림 주소, 원본 네트워크 에러)는 로그로만 남기고 응답에는 절대
//! 포함하지 않습니다.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 클라이언트용 에러 바디.
///
/// 모든 서비스가 공유하는 고정 형태 `{"message": "..."}` 입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// 일반화된 에러 메시지
    pub message: String,
}

impl ErrorBody {
    /// 새 에러 바디 생성.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 게이트웨이 파이프라인 에러.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// 매칭되는 라우트 규칙 없음
    #[error("라우트 없음: {0}")]
    NoRouteMatch(String),

    /// Authorization 헤더에 Bearer 토큰 없음
    #[error("인증 토큰 없음")]
    TokenMissing,

    /// 토큰 서명/형식 검증 실패
    #[error("유효하지 않은 토큰")]
    TokenInvalid,

    /// 토큰 만료
    #[error("만료된 토큰")]
    TokenExpired,

    /// 역할 불일치 (또는 Identity 미부착)
    #[error("역할 불일치")]
    RoleMismatch,

    /// 잘못된 로그인 자격증명
    #[error("잘못된 자격증명")]
    InvalidCredentials,

    /// 업스트림 연결 실패
    #[error("업스트림 연결 실패: {0}")]
    UpstreamUnavailable(String),

    /// 업스트림 응답 타임아웃
    #[error("업스트림 타임아웃: {0}")]
    UpstreamTimeout(String),

    /// 신뢰 헤더(x-user-data) 파싱 실패
    #[error("잘못된 사용자 데이터 형식")]
    MalformedUserHeader,

    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),
}

/// 게이트웨이 작업을 위한 Result 타입.
pub type GatewayResult<T> = Result<T, GatewayError>;

impl GatewayError {
    /// 에러에 대응하는 HTTP 상태 코드.
    pub fn status_code(&self) -> u16 {
        match self {
            GatewayError::NoRouteMatch(_) => 404,
            GatewayError::TokenMissing => 401,
            GatewayError::TokenInvalid | GatewayError::TokenExpired => 403,
            GatewayError::RoleMismatch => 403,
            GatewayError::InvalidCredentials => 401,
            GatewayError::UpstreamUnavailable(_) => 502,
            GatewayError::UpstreamTimeout(_) => 504,
            GatewayError::MalformedUserHeader => 400,
            GatewayError::Config(_) => 500,
        }
    }

    /// 클라이언트에 노출되는 고정 메시지.
    ///
    /// 내부 상세(업스트림 주소, 원본 에러)는 여기에 포함되지 않습니다.
    pub fn client_message(&self) -> &'static str {
        match self {
            GatewayError::NoRouteMatch(_) => "Not found",
            GatewayError::TokenMissing => "Access denied. No token provided.",
            GatewayError::TokenInvalid | GatewayError::TokenExpired => {
                "Invalid or expired token."
            }
            GatewayError::RoleMismatch => "Forbidden: You do not have permission",
            GatewayError::InvalidCredentials => "Invalid username or password",
            GatewayError::UpstreamUnavailable(_) => "Upstream service unavailable",
            GatewayError::UpstreamTimeout(_) => "Upstream service timed out",
            GatewayError::MalformedUserHeader => "Invalid user data format",
            GatewayError::Config(_) => "Internal server error",
        }
    }

    /// 인증/인가 단계 에러인지 확인합니다.
    ///
    /// 이 에러들은 파이프라인을 즉시 종료시키며 업스트림 호출이 발생하지
    /// 않습니다.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            GatewayError::TokenMissing
                | GatewayError::TokenInvalid
                | GatewayError::TokenExpired
                | GatewayError::RoleMismatch
        )
    }
}
