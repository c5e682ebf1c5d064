// ==========================================
// 导师结对分配系统 - 引擎层
// ==========================================
// 职责: 实现结对规则引擎,输入输出全部显式传参
// 红线: 引擎不做 I/O;随机源必须由调用方注入
// ==========================================

pub mod candidate;
pub mod error;
pub mod history;
pub mod orchestrator;
pub mod orientation;
pub mod scoring;

// 重导出核心引擎
pub use candidate::{CandidateGenerator, CandidateOutcome};
pub use error::{EngineError, EngineResult};
pub use history::{HistoryIndex, HistoryIndexer};
pub use orchestrator::PairingOrchestrator;
pub use orientation::OrientationAdjuster;
pub use scoring::PairScorer;
