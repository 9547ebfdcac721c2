//! 자격증명 저장소.
//!
//! 원래 시스템의 모의 사용자 데이터베이스에 해당합니다. 프로세스 시작
//! 시 한 번 구성되는 불변 저장소로, 모듈 레벨 싱글톤 대신 참조로
//! 전달되어 테스트에서 격리 구성이 가능합니다.

use std::collections::HashMap;

use tracing::debug;

use taskgate_core::{GatewayError, GatewayResult, Identity, Role};

use crate::password::{hash_password, verify_password};

/// 저장된 자격증명 레코드.
#[derive(Debug, Clone)]
struct StoredCredential {
    /// Argon2 PHC 형식 비밀번호 해시
    password_hash: String,
    /// 사용자 역할
    role: Role,
}

/// 불변 자격증명 저장소.
///
/// 구성 이후 수정되지 않으며 요청 간에 공유됩니다.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    users: HashMap<String, StoredCredential>,
}

impl CredentialStore {
    /// 빈 저장소 생성.
    pub fn new() -> Self {
        Self::default()
    }

    /// 사용자 추가 (빌더 스타일, 구성 단계 전용).
    ///
    /// 비밀번호는 즉시 해싱되어 평문은 보관되지 않습니다.
    ///
    /// # Errors
    /// 해싱에 실패하면 `Config` 에러.
    pub fn with_user(
        mut self,
        subject: impl Into<String>,
        password: &str,
        role: Role,
    ) -> GatewayResult<Self> {
        let password_hash = hash_password(password)
            .map_err(|e| GatewayError::Config(format!("비밀번호 해싱 실패: {}", e)))?;

        self.users.insert(
            subject.into(),
            StoredCredential {
                password_hash,
                role,
            },
        );
        Ok(self)
    }

    /// 모의 사용자가 채워진 저장소 생성.
    ///
    /// 원래 시스템의 고정 사용자 두 명을 재현합니다:
    /// `admin/admin` (admin 역할), `user/user` (user 역할).
    pub fn with_mock_users() -> GatewayResult<Self> {
        Self::new()
            .with_user("admin", "admin", Role::Admin)?
            .with_user("user", "user", Role::User)
    }

    /// 자격증명 검사.
    ///
    /// 성공 시 해당 사용자의 신원을 반환합니다.
    ///
    /// # Errors
    /// 알 수 없는 사용자거나 비밀번호 불일치면 `InvalidCredentials`.
    /// 어느 쪽인지 구분되는 정보는 노출하지 않습니다.
    pub fn authenticate(&self, subject: &str, password: &str) -> GatewayResult<Identity> {
        let stored = self.users.get(subject).ok_or_else(|| {
            debug!(subject = %subject, "Login attempt for unknown subject");
            GatewayError::InvalidCredentials
        })?;

        verify_password(password, &stored.password_hash).map_err(|_| {
            debug!(subject = %subject, "Password verification failed");
            GatewayError::InvalidCredentials
        })?;

        Ok(Identity::new(subject, stored.role))
    }

    /// 등록된 사용자 수.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// 저장소가 비어 있는지 확인.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_users_authenticate() {
        let store = CredentialStore::with_mock_users().unwrap();
        assert_eq!(store.len(), 2);

        let identity = store.authenticate("admin", "admin").unwrap();
        assert_eq!(identity.subject, "admin");
        assert_eq!(identity.role, Role::Admin);

        let identity = store.authenticate("user", "user").unwrap();
        assert_eq!(identity.role, Role::User);
    }

    #[test]
    fn test_wrong_password_rejected() {
        let store = CredentialStore::with_mock_users().unwrap();
        let result = store.authenticate("admin", "wrong");
        assert!(matches!(result, Err(GatewayError::InvalidCredentials)));
    }

    #[test]
    fn test_unknown_user_rejected() {
        let store = CredentialStore::with_mock_users().unwrap();
        let result = store.authenticate("nobody", "password");
        assert!(matches!(result, Err(GatewayError::InvalidCredentials)));
    }

    #[test]
    fn test_isolated_store_construction() {
        // 테스트별로 독립적인 저장소 구성 가능 (싱글톤 없음)
        let store = CredentialStore::new()
            .with_user("alice", "wonderland", Role::User)
            .unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.authenticate("alice", "wonderland").is_ok());
        assert!(store.authenticate("admin", "admin").is_err());
    }
}
