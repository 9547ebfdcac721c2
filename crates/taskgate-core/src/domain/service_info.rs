//! 서비스 엔트리 응답.

use serde::{Deserialize, Serialize};

/// `GET /` 엔트리 엔드포인트 응답.
///
/// 모든 서비스(게이트웨이 포함)가 자기 이름과 버전을 노출합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfo {
    /// 서비스 이름 (예: "api-gateway")
    pub service_name: String,
    /// 서비스 버전
    pub version: String,
}

impl ServiceInfo {
    /// 새 서비스 정보 생성.
    pub fn new(service_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            version: version.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let info = ServiceInfo::new("api-gateway", "0.1.0");
        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains(r#""serviceName":"api-gateway""#));
        assert!(json.contains(r#""version":"0.1.0""#));
    }
}
