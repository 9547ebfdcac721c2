//! 라우트 규칙과 라우트 테이블.
//!
//! 라우트 규칙은 프로세스 시작 시 설정에서 한 번 구성되어 이후
//! 불변입니다. 매칭은 최장 접두사 우선이며, 첫 매칭이 승리합니다
//! (이후 규칙으로의 fallthrough 없음).

use taskgate_core::{Role, UpstreamConfig};

/// 정적 라우트 규칙.
#[derive(Debug, Clone)]
pub struct RouteRule {
    /// 소유하는 경로 접두사 (예: "/api/tasks")
    pub path_prefix: String,
    /// 백엔드 오리진 URL (경로 없이 스킴+호스트+포트)
    pub target_origin: String,
    /// 전달 전에 접두사를 제거할지 여부
    pub strip_prefix: bool,
    /// 인증 필요 여부
    pub requires_auth: bool,
    /// 요구 역할 (정확한 일치, None이면 역할 게이트 없음)
    pub required_role: Option<Role>,
    /// 검증된 신원을 x-user-data 헤더로 전달할지 여부
    pub forward_identity: bool,
}

impl RouteRule {
    /// 경로가 이 규칙에 매칭되는지 확인합니다.
    ///
    /// 접두사는 경로 세그먼트 경계에서만 매칭됩니다:
    /// `/api/users`는 `/api/users`와 `/api/users/login`에 매칭되지만
    /// `/api/username`에는 매칭되지 않습니다.
    pub fn matches(&self, path: &str) -> bool {
        match path.strip_prefix(&self.path_prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    /// 규칙에 따라 요청 경로를 재작성합니다.
    ///
    /// `strip_prefix`가 설정되면 접두사를 제거하고, 결과가 비면
    /// 루트 경로 `/`로 정규화합니다.
    pub fn rewrite_path(&self, path: &str) -> String {
        if !self.strip_prefix {
            return path.to_string();
        }

        match path.strip_prefix(&self.path_prefix) {
            Some("") | None => "/".to_string(),
            Some(rest) => rest.to_string(),
        }
    }
}

/// 고정 순서의 불변 라우트 테이블.
#[derive(Debug, Clone)]
pub struct RouteTable {
    /// 접두사 길이 내림차순으로 정렬된 규칙들
    rules: Vec<RouteRule>,
}

impl RouteTable {
    /// 규칙 목록에서 테이블 구성.
    ///
    /// 최장 접두사 우선 매칭을 위해 접두사 길이 내림차순으로
    /// 정렬합니다. 정렬은 구성 시 한 번만 수행됩니다.
    pub fn new(mut rules: Vec<RouteRule>) -> Self {
        rules.sort_by(|a, b| b.path_prefix.len().cmp(&a.path_prefix.len()));
        Self { rules }
    }

    /// 표준 게이트웨이 라우트 테이블.
    ///
    /// 원래 시스템의 세 가지 라우트 클래스를 구성합니다:
    /// - `/api/users` - 공개 (로그인 경로이므로 인증 불필요)
    /// - `/api/tasks` - 인증 필요, 신원 헤더 전달
    /// - `/api/admin` - 인증 + admin 역할 필요
    pub fn standard(upstreams: &UpstreamConfig) -> Self {
        Self::new(vec![
            RouteRule {
                path_prefix: "/api/users".to_string(),
                target_origin: upstreams.user_service_url.clone(),
                strip_prefix: true,
                requires_auth: false,
                required_role: None,
                forward_identity: false,
            },
            RouteRule {
                path_prefix: "/api/tasks".to_string(),
                target_origin: upstreams.task_service_url.clone(),
                strip_prefix: true,
                requires_auth: true,
                required_role: None,
                forward_identity: true,
            },
            RouteRule {
                path_prefix: "/api/admin".to_string(),
                target_origin: upstreams.admin_service_url.clone(),
                strip_prefix: true,
                requires_auth: true,
                required_role: Some(Role::Admin),
                forward_identity: true,
            },
        ])
    }

    /// 경로에 매칭되는 규칙을 찾습니다 (최장 접두사, 첫 매칭).
    pub fn matching(&self, path: &str) -> Option<&RouteRule> {
        self.rules.iter().find(|rule| rule.matches(path))
    }

    /// 등록된 규칙 수.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// 테이블이 비어 있는지 확인.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
