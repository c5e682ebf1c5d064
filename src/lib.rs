// ==========================================
// 导师结对分配系统 - 核心库
// ==========================================
// 系统定位: 为固定名册按月生成导师/学员结对的决策支持工具
// 规则: 避开禁配对,最小化近期与高频重复,连续重复时轮换角色
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 仓储层 - 名册文件读写
pub mod repository;

// 引擎层 - 结对规则
pub mod engine;

// 配置层 - 引擎参数
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{Assignment, PairKey, PairingBook, Period, PeriodLabel, RosterCheck};

// 引擎
pub use engine::{
    CandidateGenerator, CandidateOutcome, EngineError, HistoryIndex, HistoryIndexer,
    OrientationAdjuster, PairScorer, PairingOrchestrator,
};

// 配置
pub use config::PairingParameters;

// 仓储
pub use repository::{BookRepository, RepositoryError, RepositoryResult};

// API
pub use api::{ApiError, ApiResult, PairingApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "导师结对分配系统";
