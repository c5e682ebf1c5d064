// ==========================================
// 导师结对分配系统 - 结对API
// ==========================================
// 职责: 面向使用者的单一操作: 读入名册 → 生成新一期 → 追加 → 写出
// 红线: 致命错误前不产生任何输出
// ==========================================

use std::io::Write;
use std::path::Path;

use crate::api::error::ApiResult;
use crate::config::PairingParameters;
use crate::domain::PairingBook;
use crate::engine::PairingOrchestrator;
use crate::repository::BookRepository;

// ==========================================
// PairingApi - 结对业务接口
// ==========================================
pub struct PairingApi {
    repository: BookRepository,
    orchestrator: PairingOrchestrator,
}

impl PairingApi {
    /// 构造结对API
    ///
    /// # 参数
    /// - `params`: 引擎参数 (权重/尝试上限/种子)
    pub fn new(params: PairingParameters) -> Self {
        Self {
            repository: BookRepository::new(),
            orchestrator: PairingOrchestrator::new(params),
        }
    }

    /// 读取输入文件,生成并追加新一期,返回更新后的名册
    ///
    /// 历史月份保持原样,新月份追加在末尾。
    pub fn generate_and_append(&self, path: &Path) -> ApiResult<PairingBook> {
        let mut book = self.repository.load(path)?;
        let period = self.orchestrator.generate_next_period(&book)?;
        book.months.push(period);
        Ok(book)
    }

    /// 将更新后的名册以 pretty JSON 写出
    pub fn write_book<W: Write>(&self, book: &PairingBook, writer: W) -> ApiResult<()> {
        self.repository.write(book, writer)?;
        Ok(())
    }
}

impl Default for PairingApi {
    fn default() -> Self {
        Self::new(PairingParameters::default())
    }
}
