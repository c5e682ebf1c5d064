// ==========================================
// 导师结对分配系统 - 领域基础类型
// ==========================================
// 职责: 定义配对键等值类型
// 红线: 值类型只做归一化与判等,不含业务规则
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// PairKey - 无序配对键
// ==========================================
// {甲,乙} 与 {乙,甲} 视为同一配对,构造时按字典序归一化
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairKey {
    first: String,
    second: String,
}

impl PairKey {
    /// 构造归一化配对键
    ///
    /// # 参数
    /// - `a`: 成员A
    /// - `b`: 成员B
    ///
    /// # 返回
    /// 两名成员按字典序排列后的配对键
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            Self {
                first: a.to_string(),
                second: b.to_string(),
            }
        } else {
            Self {
                first: b.to_string(),
                second: a.to_string(),
            }
        }
    }

    /// 字典序较小的一侧
    pub fn first(&self) -> &str {
        &self.first
    }

    /// 字典序较大的一侧
    pub fn second(&self) -> &str {
        &self.second
    }

    /// 判断配对是否包含指定成员
    pub fn contains(&self, name: &str) -> bool {
        self.first == name || self.second == name
    }
}
