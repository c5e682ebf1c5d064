// ==========================================
// 导师结对分配系统 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("名册校验失败: {0}")]
    ValidationError(String),

    #[error("历史记录为空, 无法推算下一期标签")]
    EmptyHistory,

    #[error("月份标签无法解析: {0}")]
    LabelParseError(String),
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
