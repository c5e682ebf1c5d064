// ==========================================
// 导师结对分配系统 - 名册仓储
// ==========================================
// 职责: 结对名册的 JSON 文件读取与写出
// 红线: 只做数据访问,不含结对规则
// ==========================================

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::domain::PairingBook;
use crate::repository::error::{RepositoryError, RepositoryResult};

// ==========================================
// BookRepository - 名册仓储
// ==========================================
pub struct BookRepository;

impl BookRepository {
    pub fn new() -> Self {
        Self
    }

    /// 从 JSON 文件加载结对名册
    ///
    /// # 参数
    /// - `path`: 输入文件路径
    ///
    /// # 返回
    /// 解析后的名册;文件缺失/不可读/格式非法时返回对应错误
    pub fn load(&self, path: &Path) -> RepositoryResult<PairingBook> {
        let content = fs::read_to_string(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => RepositoryError::FileNotFound(path.display().to_string()),
            _ => RepositoryError::FileReadError(format!("{}: {}", path.display(), err)),
        })?;

        let book: PairingBook = serde_json::from_str(&content)?;
        tracing::debug!(
            members = book.members.len(),
            months = book.months.len(),
            "名册加载完成"
        );
        Ok(book)
    }

    /// 将名册以 pretty JSON 写出
    pub fn write<W: Write>(&self, book: &PairingBook, writer: W) -> RepositoryResult<()> {
        serde_json::to_writer_pretty(writer, book)
            .map_err(|err| RepositoryError::WriteError(err.to_string()))
    }
}

impl Default for BookRepository {
    fn default() -> Self {
        Self::new()
    }
}
