//! JWT 세션 토큰 처리.
//!
//! 세션 토큰은 자기완결적(stateless)입니다. 서버 측 세션 저장소 없이
//! 토큰 자체에 신원과 만료 시각이 들어 있으며, 공유 시크릿에 대한
//! 서명 검증만으로 유효성이 판정됩니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use taskgate_core::{GatewayError, Identity, Role};

/// JWT 세션 토큰 페이로드.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - 사용자 식별자
    pub sub: String,
    /// 사용자 역할
    pub role: Role,
    /// Issued At - 발급 시각 (Unix timestamp)
    pub iat: i64,
    /// Expiration - 만료 시각 (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// 새로운 Claims 생성.
    ///
    /// # Arguments
    ///
    /// * `subject` - 사용자 식별자
    /// * `role` - 사용자 역할
    /// * `expiry_days` - 만료 기간 (일)
    pub fn new(subject: impl Into<String>, role: Role, expiry_days: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: subject.into(),
            role,
            iat: now.timestamp(),
            exp: (now + Duration::days(expiry_days)).timestamp(),
        }
    }

    /// 토큰이 만료되었는지 확인.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Claims에서 호출자 신원 추출.
    pub fn identity(&self) -> Identity {
        Identity::new(self.sub.clone(), self.role)
    }
}

/// JWT 토큰 처리 에러.
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    #[error("토큰 인코딩 실패: {0}")]
    EncodingError(#[from] jsonwebtoken::errors::Error),
    #[error("토큰이 만료되었습니다")]
    TokenExpired,
    #[error("유효하지 않은 토큰")]
    InvalidToken,
}

impl From<JwtError> for GatewayError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::TokenExpired => GatewayError::TokenExpired,
            _ => GatewayError::TokenInvalid,
        }
    }
}

/// 세션 토큰 발급.
///
/// # Arguments
///
/// * `claims` - JWT 페이로드
/// * `secret` - 공유 서명 시크릿
///
/// # Returns
///
/// 인코딩된 JWT 문자열
pub fn issue_token(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(JwtError::from)
}

/// 세션 토큰 디코딩 및 검증.
///
/// 서명과 만료를 검증하고, 내장된 Claims를 반환합니다.
///
/// # Errors
///
/// 만료된 토큰은 `TokenExpired`, 서명/형식 오류는 `InvalidToken`.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, JwtError> {
    let mut validation = Validation::default();
    validation.validate_exp = true;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::TokenExpired,
        _ => JwtError::InvalidToken,
    })
}
