// ==========================================
// 导师结对分配系统 - API层
// ==========================================
// 职责: 业务接口与面向使用者的错误转换
// ==========================================

pub mod error;
pub mod pairing_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use pairing_api::PairingApi;
