//! 인증된 호출자 신원 모델.
//!
//! 이 모듈은 요청 파이프라인에 부착되는 신원 관련 타입을 정의합니다:
//! - `Role` - 사용자 역할 (admin / user)
//! - `Identity` - 토큰 검증이 생산하는 호출자 신원
//! - `AuthContext` - 요청별 인증 상태 (익명 또는 인증됨)

use serde::{Deserialize, Serialize};

/// 게이트웨이가 검증된 신원을 백엔드에 전달할 때 사용하는 헤더 이름.
///
/// 백엔드는 게이트웨이가 유일한 진입점이라는 배포 가정 하에서만 이
/// 헤더를 신뢰해야 합니다.
pub const IDENTITY_HEADER: &str = "x-user-data";

/// 사용자 역할.
///
/// 역할 비교는 정확한 일치만 사용합니다. 계층이나 레벨 개념은 없으며,
/// admin이라고 해서 user 전용 규칙을 통과하지 않습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// 관리자
    Admin,
    /// 일반 사용자
    User,
}

impl Role {
    /// 문자열에서 역할 파싱 (대소문자 구분).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Role::Admin),
            "user" => Some(Role::User),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Role::Admin => "admin",
            Role::User => "user",
        };
        write!(f, "{}", s)
    }
}

/// 인증된 호출자 신원.
///
/// 토큰 서비스의 성공적인 검증만이 이 값을 생산합니다. 생성 이후
/// 불변이며, 단일 요청의 수명 동안만 유효합니다 (게이트웨이는 이를
/// 어디에도 저장하지 않습니다).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// 사용자 식별자
    pub subject: String,
    /// 사용자 역할
    pub role: Role,
}

impl Identity {
    /// 새 신원 생성.
    pub fn new(subject: impl Into<String>, role: Role) -> Self {
        Self {
            subject: subject.into(),
            role,
        }
    }
}

/// 요청별 인증 상태.
///
/// 미들웨어가 요청 확장(extension)에 부착하는 태그드 유니언입니다.
/// 전역 상태나 untyped 캐스트 없이 파이프라인 단계 간에 신원을
/// 전달합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthContext {
    /// 인증되지 않은 요청 (공개 라우트)
    Anonymous,
    /// 토큰 검증을 통과한 요청
    Authenticated(Identity),
}

impl AuthContext {
    /// 부착된 신원 반환 (익명이면 None).
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            AuthContext::Anonymous => None,
            AuthContext::Authenticated(identity) => Some(identity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_is_case_sensitive() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("user"), Some(Role::User));
        // 정확한 일치만 허용
        assert_eq!(Role::parse("Admin"), None);
        assert_eq!(Role::parse("ADMIN"), None);
        assert_eq!(Role::parse("superuser"), None);
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");

        let parsed: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(parsed, Role::Admin);

        // 알 수 없는 역할은 역직렬화 실패
        assert!(serde_json::from_str::<Role>("\"root\"").is_err());
    }

    #[test]
    fn test_identity_round_trip() {
        let identity = Identity::new("admin", Role::Admin);
        let json = serde_json::to_string(&identity).unwrap();
        assert!(json.contains(r#""subject":"admin""#));
        assert!(json.contains(r#""role":"admin""#));

        let parsed: Identity = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, identity);
    }

    #[test]
    fn test_auth_context_identity() {
        assert!(AuthContext::Anonymous.identity().is_none());

        let ctx = AuthContext::Authenticated(Identity::new("user", Role::User));
        assert_eq!(ctx.identity().unwrap().subject, "user");
    }
}
