// ==========================================
// 导师结对分配系统 - 重复度评分引擎
// ==========================================
// 职责: 给候选配对计算重复惩罚分
// 规则: 最近一期重复为支配项,历史频次为累加项
// ==========================================

use crate::config::PairingParameters;
use crate::domain::{Assignment, PairKey};
use crate::engine::history::HistoryIndex;

// ==========================================
// PairScorer - 重复度评分器
// ==========================================
pub struct PairScorer<'a> {
    index: &'a HistoryIndex,
    params: &'a PairingParameters,
}

impl<'a> PairScorer<'a> {
    pub fn new(index: &'a HistoryIndex, params: &'a PairingParameters) -> Self {
        Self { index, params }
    }

    /// 单个配对的惩罚分
    ///
    /// penalty = recency_penalty * [配对出现在最近一期]
    ///         + repeat_penalty * 历史出现次数
    pub fn pair_penalty(&self, key: &PairKey) -> f64 {
        let mut penalty = self.params.repeat_penalty * f64::from(self.index.frequency(key));
        if self.index.in_latest_period(key) {
            penalty += self.params.recency_penalty;
        }
        penalty
    }

    /// 候选整组的总惩罚分
    pub fn candidate_penalty(&self, assignments: &[Assignment]) -> f64 {
        assignments
            .iter()
            .map(|assignment| self.pair_penalty(&assignment.key()))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Period;
    use crate::engine::history::HistoryIndexer;

    fn index_from(pairs_by_month: &[&[(&str, &str)]]) -> HistoryIndex {
        let months: Vec<Period> = pairs_by_month
            .iter()
            .enumerate()
            .map(|(i, pairs)| Period {
                month: format!("2021年{}月", i + 1),
                skip: Vec::new(),
                pairs: pairs
                    .iter()
                    .map(|(mentor, mentee)| Assignment::new(mentor, mentee))
                    .collect(),
            })
            .collect();
        HistoryIndexer::new().build(&months)
    }

    #[test]
    fn test_unseen_pair_has_zero_penalty() {
        let index = index_from(&[&[("甲", "乙")]]);
        let params = PairingParameters::default();
        let scorer = PairScorer::new(&index, &params);
        assert_eq!(scorer.pair_penalty(&PairKey::new("丙", "丁")), 0.0);
    }

    #[test]
    fn test_recency_dominates_frequency() {
        // {甲,乙} 出现在最近一期且历史出现2次; {甲,丙} 仅有1次较早记录
        let index = index_from(&[&[("甲", "丙")], &[("甲", "乙")], &[("乙", "甲")]]);
        let params = PairingParameters::default();
        let scorer = PairScorer::new(&index, &params);

        let recent = scorer.pair_penalty(&PairKey::new("甲", "乙"));
        let old = scorer.pair_penalty(&PairKey::new("甲", "丙"));
        assert_eq!(recent, 1000.0 + 2.0);
        assert_eq!(old, 1.0);
        assert!(recent > old * 100.0);
    }

    #[test]
    fn test_candidate_penalty_is_sum() {
        let index = index_from(&[&[("甲", "乙"), ("丙", "丁")]]);
        let params = PairingParameters::default();
        let scorer = PairScorer::new(&index, &params);

        let candidate = vec![Assignment::new("乙", "甲"), Assignment::new("丙", "丁")];
        // 两对均在最近一期: (1000+1) * 2
        assert_eq!(scorer.candidate_penalty(&candidate), 2002.0);
    }
}
