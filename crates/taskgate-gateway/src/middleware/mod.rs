//! 게이트웨이 HTTP middleware.

mod observe;

pub use observe::observe_response;
