// ==========================================
// 导师结对分配系统 - 历史索引引擎
// ==========================================
// 职责: 把历史月份折叠为查询结构 (频次/最近朝向/最近一期配对)
// 红线: 只读派生视图,不改历史
// ==========================================

use std::collections::{HashMap, HashSet};

use crate::domain::{Assignment, PairKey, Period};

// ==========================================
// HistoryIndex - 历史查询结构
// ==========================================
#[derive(Debug, Default)]
pub struct HistoryIndex {
    /// 每个无序配对在全部历史中的出现次数
    pair_frequency: HashMap<PairKey, u32>,

    /// 每个无序配对最近一次出现时的朝向
    last_orientation: HashMap<PairKey, Assignment>,

    /// 最近一个含配对的月份中出现的配对键
    latest_pairs: HashSet<PairKey>,

    /// 每名成员最近一次被配对的月份序号 (0 起)
    last_paired_index: HashMap<String, usize>,
}

impl HistoryIndex {
    /// 配对的历史出现次数
    pub fn frequency(&self, key: &PairKey) -> u32 {
        self.pair_frequency.get(key).copied().unwrap_or(0)
    }

    /// 配对最近一次的朝向,从未出现时返回 None
    pub fn last_assignment(&self, key: &PairKey) -> Option<&Assignment> {
        self.last_orientation.get(key)
    }

    /// 配对是否出现在最近一个含配对的月份中
    pub fn in_latest_period(&self, key: &PairKey) -> bool {
        self.latest_pairs.contains(key)
    }

    /// 成员最近一次被配对的月份序号,从未被配对时返回 None
    pub fn last_paired_index(&self, name: &str) -> Option<usize> {
        self.last_paired_index.get(name).copied()
    }
}

// ==========================================
// HistoryIndexer - 历史索引引擎
// ==========================================
pub struct HistoryIndexer;

impl HistoryIndexer {
    pub fn new() -> Self {
        Self
    }

    /// 构建历史索引
    ///
    /// # 参数
    /// - `months`: 按时间顺序的历史月份
    ///
    /// # 返回
    /// 折叠后的查询结构;配对列表为空的月份不贡献任何信息
    pub fn build(&self, months: &[Period]) -> HistoryIndex {
        let mut index = HistoryIndex::default();

        for (month_idx, period) in months.iter().enumerate() {
            if period.pairs.is_empty() {
                continue;
            }

            let mut pairs_of_month = HashSet::new();
            for assignment in &period.pairs {
                let key = assignment.key();
                *index.pair_frequency.entry(key.clone()).or_insert(0) += 1;
                index.last_orientation.insert(key.clone(), assignment.clone());
                index
                    .last_paired_index
                    .insert(assignment.mentor.clone(), month_idx);
                index
                    .last_paired_index
                    .insert(assignment.mentee.clone(), month_idx);
                pairs_of_month.insert(key);
            }
            // 循环结束时保留的即最后一个非空月份
            index.latest_pairs = pairs_of_month;
        }

        index
    }
}

impl Default for HistoryIndexer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(month: &str, pairs: &[(&str, &str)]) -> Period {
        Period {
            month: month.to_string(),
            skip: Vec::new(),
            pairs: pairs
                .iter()
                .map(|(mentor, mentee)| Assignment::new(mentor, mentee))
                .collect(),
        }
    }

    #[test]
    fn test_empty_history() {
        let index = HistoryIndexer::new().build(&[]);
        assert_eq!(index.frequency(&PairKey::new("甲", "乙")), 0);
        assert!(index.last_assignment(&PairKey::new("甲", "乙")).is_none());
        assert!(!index.in_latest_period(&PairKey::new("甲", "乙")));
    }

    #[test]
    fn test_frequency_is_orientation_agnostic() {
        let months = vec![
            period("2021年9月", &[("甲", "乙")]),
            period("2021年10月", &[("乙", "甲")]),
        ];
        let index = HistoryIndexer::new().build(&months);
        assert_eq!(index.frequency(&PairKey::new("甲", "乙")), 2);
    }

    #[test]
    fn test_last_orientation_tracks_latest_month() {
        let months = vec![
            period("2021年9月", &[("甲", "乙")]),
            period("2021年10月", &[("乙", "甲")]),
        ];
        let index = HistoryIndexer::new().build(&months);
        let last = index.last_assignment(&PairKey::new("甲", "乙")).unwrap();
        assert_eq!(last.mentor, "乙");
        assert_eq!(last.mentee, "甲");
    }

    #[test]
    fn test_latest_pairs_skip_trailing_empty_month() {
        let months = vec![
            period("2021年9月", &[("甲", "乙"), ("丙", "丁")]),
            // 最近一个月没有任何配对,不应覆盖"最近一期"判断
            period("2021年10月", &[]),
        ];
        let index = HistoryIndexer::new().build(&months);
        assert!(index.in_latest_period(&PairKey::new("甲", "乙")));
        assert!(index.in_latest_period(&PairKey::new("丁", "丙")));
        assert!(!index.in_latest_period(&PairKey::new("甲", "丙")));
    }

    #[test]
    fn test_latest_pairs_replaced_by_newer_month() {
        let months = vec![
            period("2021年9月", &[("甲", "乙")]),
            period("2021年10月", &[("甲", "丙")]),
        ];
        let index = HistoryIndexer::new().build(&months);
        assert!(!index.in_latest_period(&PairKey::new("甲", "乙")));
        assert!(index.in_latest_period(&PairKey::new("甲", "丙")));
    }

    #[test]
    fn test_last_paired_index_per_member() {
        let months = vec![
            period("2021年9月", &[("甲", "乙")]),
            period("2021年10月", &[("甲", "丙")]),
        ];
        let index = HistoryIndexer::new().build(&months);
        assert_eq!(index.last_paired_index("甲"), Some(1));
        assert_eq!(index.last_paired_index("乙"), Some(0));
        assert_eq!(index.last_paired_index("丙"), Some(1));
        assert_eq!(index.last_paired_index("丁"), None);
    }
}
