//! 사용자 서비스 공유 상태.

use std::sync::Arc;

use taskgate_auth::CredentialStore;
use taskgate_core::{GatewayResult, JwtSettings};

/// 모든 핸들러에서 공유되는 상태.
///
/// 자격증명 저장소와 JWT 설정 모두 시작 시 구성 후 불변입니다.
#[derive(Clone)]
pub struct UserState {
    /// 불변 자격증명 저장소
    pub store: Arc<CredentialStore>,
    /// 토큰 서명 설정
    pub jwt: JwtSettings,
}

impl UserState {
    /// 새 상태 생성.
    pub fn new(store: CredentialStore, jwt: JwtSettings) -> Self {
        Self {
            store: Arc::new(store),
            jwt,
        }
    }

    /// 모의 사용자가 채워진 상태 생성.
    pub fn with_mock_users(jwt: JwtSettings) -> GatewayResult<Self> {
        Ok(Self::new(CredentialStore::with_mock_users()?, jwt))
    }
}
