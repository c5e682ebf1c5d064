// ==========================================
// 导师结对分配系统 - 结对名册聚合
// ==========================================
// 职责: 名册主数据 (成员/禁配规则/预跳过) 与历史月份的聚合
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::period::{deserialize_name_list, Period};
use crate::domain::types::PairKey;

// ==========================================
// PairingBook - 结对名册 (顶层文档)
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairingBook {
    /// 成员名册,顺序即名册顺序,名字区分大小写且不得重复
    pub members: Vec<String>,

    /// 禁配规则: 无序成员对,任一朝向均不得出现
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded: Vec<(String, String)>,

    /// 常设预跳过名单: 这些成员不参与新一期结对
    /// 输入兼容单名或序列,输出恒为序列,为空时省略
    #[serde(
        default,
        deserialize_with = "deserialize_name_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub skip: Vec<String>,

    /// 历史月份,严格按时间顺序,只在末尾追加
    #[serde(default)]
    pub months: Vec<Period>,
}

// ==========================================
// RosterCheck - 名册校验结果
// ==========================================
#[derive(Debug, Default)]
pub struct RosterCheck {
    /// 致命问题,非空则不得继续
    pub fatal: Vec<String>,
    /// 可继续的警告
    pub warnings: Vec<String>,
}

impl RosterCheck {
    pub fn is_ok(&self) -> bool {
        self.fatal.is_empty()
    }
}

impl PairingBook {
    /// 校验名册完整性
    ///
    /// # 返回
    /// - fatal: 成员重名等致命问题
    /// - warnings: 引用未知成员的禁配规则/预跳过等可忽略问题
    pub fn validate(&self) -> RosterCheck {
        let mut check = RosterCheck::default();

        let mut seen: HashSet<&str> = HashSet::new();
        for name in &self.members {
            if !seen.insert(name.as_str()) {
                check.fatal.push(format!("成员重名: {}", name));
            }
        }

        for (a, b) in &self.excluded {
            if a == b {
                check
                    .warnings
                    .push(format!("禁配规则指向同一成员, 已忽略: {}", a));
                continue;
            }
            for name in [a, b] {
                if !seen.contains(name.as_str()) {
                    check
                        .warnings
                        .push(format!("禁配规则引用未知成员: {}", name));
                }
            }
        }

        for name in &self.skip {
            if !seen.contains(name.as_str()) {
                check
                    .warnings
                    .push(format!("预跳过名单引用未知成员, 已忽略: {}", name));
            }
        }

        check
    }

    /// 拆分本期参与成员与预跳过成员
    ///
    /// # 返回
    /// (参与成员, 预跳过成员),均按名册顺序;未知的预跳过名字不计入
    pub fn eligible_members(&self) -> (Vec<String>, Vec<String>) {
        let skip: HashSet<&str> = self.skip.iter().map(String::as_str).collect();

        let mut eligible = Vec::new();
        let mut preskipped = Vec::new();
        for name in &self.members {
            if skip.contains(name.as_str()) {
                preskipped.push(name.clone());
            } else {
                eligible.push(name.clone());
            }
        }
        (eligible, preskipped)
    }

    /// 禁配规则的归一化键集合 (自指规则忽略)
    pub fn exclusion_keys(&self) -> HashSet<PairKey> {
        self.excluded
            .iter()
            .filter(|(a, b)| a != b)
            .map(|(a, b)| PairKey::new(a, b))
            .collect()
    }
}
