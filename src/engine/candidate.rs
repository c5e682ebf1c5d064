// ==========================================
// 导师结对分配系统 - 候选生成引擎
// ==========================================
// 职责: 随机有界搜索一组合法配对
// 规则: 禁配对绝不出现;每名成员至多出现一次
// 终止: 每轮失败后严格缩小参与集,循环必然收敛
// ==========================================

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::{HashMap, HashSet};

use crate::domain::{Assignment, PairKey};
use crate::engine::history::HistoryIndex;
use crate::engine::scoring::PairScorer;

// ==========================================
// CandidateOutcome - 候选生成结果
// ==========================================
#[derive(Debug)]
pub struct CandidateOutcome {
    /// 选中的配对 (朝向调整前)
    pub assignments: Vec<Assignment>,
    /// 因奇数人数或无解被移除的成员,按移除顺序
    pub skipped: Vec<String>,
    /// 选中候选的总惩罚分
    pub penalty: f64,
    /// 实际消耗的随机尝试次数
    pub attempts: u32,
    /// 经过的缩减轮数
    pub rounds: u32,
}

// ==========================================
// CandidateGenerator - 候选生成引擎
// ==========================================
pub struct CandidateGenerator;

impl CandidateGenerator {
    pub fn new() -> Self {
        Self
    }

    /// 为参与成员生成一组完整配对
    ///
    /// 每轮做法: 洗牌后前半当导师、后半当学员,含禁配对的候选整组作废,
    /// 在 `max_attempts` 次尝试内保留总惩罚分严格最小的候选 (并列取先到者)。
    /// 一轮无合法候选时移除一名成员再试;参与集缩至不足两人时全部记入跳过。
    ///
    /// # 参数
    /// - `eligible`: 参与成员,顺序即名册顺序 (用作移除策略的平局裁决)
    /// - `exclusions`: 禁配键集合
    /// - `index`: 历史索引 (用于移除策略)
    /// - `scorer`: 重复度评分器
    /// - `max_attempts`: 每轮尝试上限
    /// - `rng`: 随机源,种子固定时结果可复现
    pub fn generate(
        &self,
        eligible: &[String],
        exclusions: &HashSet<PairKey>,
        index: &HistoryIndex,
        scorer: &PairScorer<'_>,
        max_attempts: u32,
        rng: &mut StdRng,
    ) -> CandidateOutcome {
        // 名册顺序查找表,平局裁决用
        let roster_order: HashMap<&str, usize> = eligible
            .iter()
            .enumerate()
            .map(|(pos, name)| (name.as_str(), pos))
            .collect();

        let mut pool: Vec<String> = eligible.to_vec();
        let mut skipped: Vec<String> = Vec::new();
        let mut attempts_total: u32 = 0;
        let mut rounds: u32 = 0;

        loop {
            rounds += 1;

            if pool.len() < 2 {
                // 不足两人,无法配对
                skipped.append(&mut pool);
                return CandidateOutcome {
                    assignments: Vec::new(),
                    skipped,
                    penalty: 0.0,
                    attempts: attempts_total,
                    rounds,
                };
            }

            if pool.len() % 2 == 1 {
                let victim = self.pick_removal(&pool, &roster_order, index);
                skipped.push(pool.remove(victim));
            }

            let mut best: Option<(Vec<Assignment>, f64)> = None;
            for _ in 0..max_attempts {
                attempts_total += 1;
                pool.shuffle(rng);

                let half = pool.len() / 2;
                let mut penalty = 0.0;
                let mut valid = true;
                for i in 0..half {
                    let key = PairKey::new(&pool[i], &pool[i + half]);
                    if exclusions.contains(&key) {
                        valid = false;
                        break;
                    }
                    penalty += scorer.pair_penalty(&key);
                }
                if !valid {
                    continue;
                }

                let improved = best
                    .as_ref()
                    .map_or(true, |(_, best_penalty)| penalty < *best_penalty);
                if improved {
                    let assignments = (0..half)
                        .map(|i| Assignment::new(&pool[i], &pool[i + half]))
                        .collect();
                    best = Some((assignments, penalty));
                    if penalty == 0.0 {
                        // 已无可改进空间
                        break;
                    }
                }
            }

            match best {
                Some((assignments, penalty)) => {
                    return CandidateOutcome {
                        assignments,
                        skipped,
                        penalty,
                        attempts: attempts_total,
                        rounds,
                    };
                }
                None => {
                    // 本轮全部候选含禁配对,移除一名成员后重试
                    let victim = self.pick_removal(&pool, &roster_order, index);
                    skipped.push(pool.remove(victim));
                }
            }
        }
    }

    /// 移除策略: 最久未被配对者优先
    ///
    /// 从未被配对的成员视为最久;并列时按名册顺序取最靠前者。
    /// 不依赖随机源,保证同一输入下移除结果一致。
    fn pick_removal(
        &self,
        pool: &[String],
        roster_order: &HashMap<&str, usize>,
        index: &HistoryIndex,
    ) -> usize {
        let mut best_pos = 0;
        let mut best_key = (i64::MAX, usize::MAX);

        for (pos, name) in pool.iter().enumerate() {
            let last_paired = index
                .last_paired_index(name)
                .map(|i| i as i64)
                .unwrap_or(-1);
            let order = roster_order.get(name.as_str()).copied().unwrap_or(usize::MAX);
            let key = (last_paired, order);
            if key < best_key {
                best_key = key;
                best_pos = pos;
            }
        }

        best_pos
    }
}

impl Default for CandidateGenerator {
    fn default() -> Self {
        Self::new()
    }
}
