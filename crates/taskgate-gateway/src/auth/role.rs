//! 역할 게이트.
//!
//! 라우트 등록 시점에 지정된 요구 역할과 요청에 부착된 신원의 역할을
//! 비교합니다. 비교는 정확한 일치만 사용합니다 (계층 없음).

use taskgate_core::{AuthContext, GatewayError, Role};

use crate::error::ApiError;

/// 부착된 신원의 역할이 요구 역할과 정확히 일치하는지 확인합니다.
///
/// 신원이 부착되지 않은 경우(인증 단계가 선행되지 않은 구성)는
/// 에러가 아니라 불일치로 취급합니다. 인증 선행은 라우트 구성이
/// 보장해야 할 전제조건이지 게이트가 검사할 사항이 아닙니다.
///
/// # Errors
///
/// 불일치 또는 신원 부재 시 `RoleMismatch`(403).
pub fn check_role(ctx: &AuthContext, required: Role) -> Result<(), ApiError> {
    match ctx.identity() {
        Some(identity) if identity.role == required => Ok(()),
        _ => Err(ApiError(GatewayError::RoleMismatch)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskgate_core::Identity;

    #[test]
    fn test_exact_match_passes() {
        let ctx = AuthContext::Authenticated(Identity::new("admin", Role::Admin));
        assert!(check_role(&ctx, Role::Admin).is_ok());
    }

    #[test]
    fn test_mismatch_rejected() {
        let ctx = AuthContext::Authenticated(Identity::new("user", Role::User));
        assert!(matches!(
            check_role(&ctx, Role::Admin),
            Err(ApiError(GatewayError::RoleMismatch))
        ));

        // 역할 계층 없음: admin도 user 전용 게이트를 통과하지 못함
        let ctx = AuthContext::Authenticated(Identity::new("admin", Role::Admin));
        assert!(check_role(&ctx, Role::User).is_err());
    }

    #[test]
    fn test_missing_identity_treated_as_mismatch() {
        // 인증 단계 없이 게이트가 실행된 잘못된 구성도 패닉 없이 403
        let result = check_role(&AuthContext::Anonymous, Role::Admin);
        assert!(matches!(
            result,
            Err(ApiError(GatewayError::RoleMismatch))
        ));
    }
}
