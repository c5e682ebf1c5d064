// ==========================================
// 导师结对分配系统 - API层错误类型
// ==========================================
// 职责: 把仓储/引擎错误转换为面向使用者的错误消息
// ==========================================

use crate::engine::EngineError;
use crate::repository::RepositoryError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== 输入错误 =====
    #[error("输入不可用: {0}")]
    InputError(String),

    #[error("输入格式错误: {0}")]
    MalformedInput(String),

    // ===== 业务错误 =====
    #[error("名册校验失败: {0}")]
    ValidationError(String),

    #[error("历史记录为空: 需要至少一个月份以推算下一期标签")]
    EmptyHistory,

    #[error("月份标签无法解析: {0}")]
    LabelParseError(String),

    // ===== 输出错误 =====
    #[error("结果写出失败: {0}")]
    OutputError(String),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 RepositoryError 转换
// 目的: 将仓储层的技术错误转换为使用者可读的业务错误
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::FileNotFound(path) => {
                ApiError::InputError(format!("文件不存在: {}", path))
            }
            RepositoryError::FileReadError(message) => ApiError::InputError(message),
            RepositoryError::JsonParseError(message) => ApiError::MalformedInput(message),
            RepositoryError::WriteError(message) => ApiError::OutputError(message),
            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

// ==========================================
// 从 EngineError 转换
// ==========================================
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::ValidationError(message) => ApiError::ValidationError(message),
            EngineError::EmptyHistory => ApiError::EmptyHistory,
            EngineError::LabelParseError(label) => ApiError::LabelParseError(label),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
