//! 설정 관리.
//!
//! 모든 설정은 프로세스 시작 시 환경 변수에서 한 번 로드되어 불변
//! 구조체로 고정됩니다. 모듈 레벨 싱글톤은 사용하지 않으며, 구성된
//! 설정을 참조로 파이프라인과 토큰 서비스에 전달합니다. 덕분에
//! 테스트에서는 환경 변수 없이 격리된 설정을 직접 구성할 수 있습니다.

use std::net::{SocketAddr, ToSocketAddrs};

use serde::{Deserialize, Serialize};

use crate::error::{GatewayError, GatewayResult};

/// HTTP 리스너 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenConfig {
    /// 바인딩할 호스트
    pub host: String,
    /// 리스닝할 포트
    pub port: u16,
}

impl ListenConfig {
    /// 새 리스너 설정 생성.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// 환경 변수에서 로드.
    ///
    /// `<PREFIX>_HOST`와 `<PREFIX>_PORT`를 읽고, 없으면 기본값을
    /// 사용합니다 (예: `GATEWAY_HOST`, `GATEWAY_PORT`).
    pub fn from_env(prefix: &str, default_port: u16) -> Self {
        let host = std::env::var(format!("{}_HOST", prefix))
            .unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var(format!("{}_PORT", prefix))
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(default_port);

        Self { host, port }
    }

    /// 소켓 주소 반환.
    ///
    /// IP 리터럴 외에 `localhost` 같은 호스트 이름도 허용합니다.
    /// 해석 결과가 여러 개면 첫 번째 주소를 사용합니다.
    ///
    /// # Errors
    /// `host:port`를 해석할 수 없으면 `Config` 에러를 반환합니다.
    pub fn socket_addr(&self) -> GatewayResult<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.to_socket_addrs()
            .map_err(|e| GatewayError::Config(format!("잘못된 바인드 주소 {}: {}", addr, e)))?
            .next()
            .ok_or_else(|| {
                GatewayError::Config(format!("바인드 주소를 해석할 수 없습니다: {}", addr))
            })
    }
}

/// JWT 서명 설정.
///
/// 게이트웨이와 사용자 서비스가 동일한 시크릿을 공유합니다.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtSettings {
    /// 공유 서명 시크릿 (HMAC-SHA256)
    pub secret: String,
    /// 토큰 만료 기간 (일)
    pub expiry_days: i64,
}

impl JwtSettings {
    /// 새 JWT 설정 생성.
    pub fn new(secret: impl Into<String>, expiry_days: i64) -> Self {
        Self {
            secret: secret.into(),
            expiry_days,
        }
    }

    /// 환경 변수 `JWT_SECRET`에서 로드.
    ///
    /// # Errors
    /// 시크릿이 없거나 비어 있으면 `Config` 에러를 반환합니다.
    pub fn from_env() -> GatewayResult<Self> {
        let secret = std::env::var("JWT_SECRET")
            .map_err(|_| GatewayError::Config("JWT_SECRET 환경 변수가 필요합니다".into()))?;

        if secret.is_empty() {
            return Err(GatewayError::Config("JWT_SECRET이 비어 있습니다".into()));
        }

        let expiry_days = std::env::var("JWT_EXPIRY_DAYS")
            .ok()
            .and_then(|d| d.parse().ok())
            .unwrap_or(7);

        Ok(Self {
            secret,
            expiry_days,
        })
    }
}

/// 백엔드 서비스 오리진 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// user-service 오리진 URL
    pub user_service_url: String,
    /// task-service 오리진 URL
    pub task_service_url: String,
    /// admin 라우트의 오리진 URL
    pub admin_service_url: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            user_service_url: "http://127.0.0.1:3200".to_string(),
            task_service_url: "http://127.0.0.1:3300".to_string(),
            // admin 라우트는 원래 task-service 오리진을 향함
            admin_service_url: "http://127.0.0.1:3300".to_string(),
        }
    }
}

impl UpstreamConfig {
    /// 환경 변수에서 로드.
    ///
    /// `USER_SERVICE_URL`, `TASK_SERVICE_URL`, `ADMIN_SERVICE_URL`을
    /// 읽으며, `ADMIN_SERVICE_URL`이 없으면 task-service 오리진을
    /// 사용합니다.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let user_service_url =
            std::env::var("USER_SERVICE_URL").unwrap_or(defaults.user_service_url);
        let task_service_url =
            std::env::var("TASK_SERVICE_URL").unwrap_or(defaults.task_service_url);
        let admin_service_url =
            std::env::var("ADMIN_SERVICE_URL").unwrap_or_else(|_| task_service_url.clone());

        Self {
            user_service_url,
            task_service_url,
            admin_service_url,
        }
    }

    /// 오리진 URL이 모두 올바른 형식인지 검증합니다.
    ///
    /// # Errors
    /// 비어 있거나 http(s) 스킴이 아닌 URL이 있으면 `Config` 에러.
    pub fn validate(&self) -> GatewayResult<()> {
        for (name, url) in [
            ("USER_SERVICE_URL", &self.user_service_url),
            ("TASK_SERVICE_URL", &self.task_service_url),
            ("ADMIN_SERVICE_URL", &self.admin_service_url),
        ] {
            if url.is_empty() {
                return Err(GatewayError::Config(format!("{}이 비어 있습니다", name)));
            }
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(GatewayError::Config(format!(
                    "{}은 http(s) URL이어야 합니다",
                    name
                )));
            }
        }
        Ok(())
    }
}

/// 게이트웨이 전체 설정.
///
/// 프로세스 시작 시 한 번 구성되며 이후 불변입니다.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// 리스너 설정
    pub listen: ListenConfig,
    /// 백엔드 오리진
    pub upstreams: UpstreamConfig,
    /// JWT 서명 설정
    pub jwt: JwtSettings,
    /// 프록시 요청 타임아웃 (초)
    pub proxy_timeout_secs: u64,
}

impl GatewayConfig {
    /// 환경 변수에서 전체 설정 로드.
    ///
    /// # Errors
    /// 시크릿 누락 또는 잘못된 오리진 URL이면 `Config` 에러.
    pub fn from_env() -> GatewayResult<Self> {
        let upstreams = UpstreamConfig::from_env();
        upstreams.validate()?;

        let proxy_timeout_secs = std::env::var("PROXY_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            listen: ListenConfig::from_env("GATEWAY", 3100),
            upstreams,
            jwt: JwtSettings::from_env()?,
            proxy_timeout_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listen_config_socket_addr() {
        let config = ListenConfig::new("127.0.0.1", 3100);
        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.port(), 3100);

        let bad = ListenConfig::new("host name with spaces", 3100);
        assert!(bad.socket_addr().is_err());
    }

    #[test]
    fn test_listen_config_resolves_hostname() {
        // IP 리터럴이 아닌 호스트 이름도 바인드 주소로 허용
        let config = ListenConfig::new("localhost", 3100);
        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.port(), 3100);
        assert!(addr.ip().is_loopback());
    }

    #[test]
    fn test_upstream_defaults() {
        let config = UpstreamConfig::default();
        assert_eq!(config.user_service_url, "http://127.0.0.1:3200");
        assert_eq!(config.task_service_url, "http://127.0.0.1:3300");
        // admin은 기본적으로 task-service 오리진
        assert_eq!(config.admin_service_url, config.task_service_url);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_upstream_validation_rejects_bad_urls() {
        let mut config = UpstreamConfig::default();
        config.task_service_url = String::new();
        assert!(config.validate().is_err());

        let mut config = UpstreamConfig::default();
        config.admin_service_url = "ftp://files".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_jwt_settings_new() {
        let jwt = JwtSettings::new("secret-key", 7);
        assert_eq!(jwt.secret, "secret-key");
        assert_eq!(jwt.expiry_days, 7);
    }
}
