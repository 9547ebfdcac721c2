//! 토큰 발급 및 검증.
//!
//! JWT 기반 세션 토큰의 발급/검증과 모의 자격증명 저장소를 제공합니다.
//! 게이트웨이(검증)와 user-service(발급) 양쪽에서 사용됩니다.
//!
//! # 구성 요소
//!
//! - [`Claims`]: JWT 페이로드 구조체
//! - [`issue_token`] / [`decode_token`]: 토큰 생성/검증 함수
//! - [`CredentialStore`]: 시작 시 한 번 구성되는 불변 자격증명 저장소
//! - [`hash_password`] / [`verify_password`]: Argon2 비밀번호 해싱

mod jwt;
mod password;
mod store;

pub use jwt::{decode_token, issue_token, Claims, JwtError};
pub use password::{hash_password, verify_password, PasswordError};
pub use store::CredentialStore;
