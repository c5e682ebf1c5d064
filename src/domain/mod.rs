// ==========================================
// 导师结对分配系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体与值类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod book;
pub mod period;
pub mod types;

// 重导出核心类型
pub use book::{PairingBook, RosterCheck};
pub use period::{Assignment, Period, PeriodLabel};
pub use types::PairKey;
