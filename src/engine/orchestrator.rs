// ==========================================
// 导师结对分配系统 - 结对编排引擎
// ==========================================
// 职责: 校验 → 索引 → 推算标签 → 随机搜索 → 朝向调整 → 组装新月份
// 红线: 不改历史月份,只产出待追加的新月份
// ==========================================

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, instrument, warn};

use crate::config::PairingParameters;
use crate::domain::{PairingBook, Period, PeriodLabel};
use crate::engine::candidate::CandidateGenerator;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::history::HistoryIndexer;
use crate::engine::orientation::OrientationAdjuster;
use crate::engine::scoring::PairScorer;

// ==========================================
// PairingOrchestrator - 结对编排引擎
// ==========================================
pub struct PairingOrchestrator {
    indexer: HistoryIndexer,
    generator: CandidateGenerator,
    adjuster: OrientationAdjuster,
    params: PairingParameters,
}

impl PairingOrchestrator {
    /// 构造编排引擎
    ///
    /// # 参数
    /// - `params`: 权重/尝试上限/种子
    pub fn new(params: PairingParameters) -> Self {
        Self {
            indexer: HistoryIndexer::new(),
            generator: CandidateGenerator::new(),
            adjuster: OrientationAdjuster::new(),
            params,
        }
    }

    /// 为名册生成下一个月份的结对方案
    ///
    /// # 返回
    /// 待追加到名册末尾的新月份;跳过名单为预跳过成员 (名册顺序)
    /// 加上搜索过程中轮空的成员 (移除顺序)
    #[instrument(skip(self, book))]
    pub fn generate_next_period(&self, book: &PairingBook) -> EngineResult<Period> {
        // === 步骤 1: 名册校验 ===
        let check = book.validate();
        for warning in &check.warnings {
            warn!("{}", warning);
        }
        if !check.is_ok() {
            return Err(EngineError::ValidationError(check.fatal.join("; ")));
        }

        // === 步骤 2: 推算下一期标签 ===
        let last = book.months.last().ok_or(EngineError::EmptyHistory)?;
        let next_label = last
            .label()
            .ok_or_else(|| EngineError::LabelParseError(last.month.clone()))?
            .successor();

        // === 步骤 3: 历史索引 ===
        let index = self.indexer.build(&book.months);

        // === 步骤 4: 参与者筛选 ===
        let (eligible, preskipped) = book.eligible_members();
        debug!(
            eligible = eligible.len(),
            preskipped = preskipped.len(),
            "参与者筛选完成"
        );

        // === 步骤 5: 随机有界搜索 ===
        let mut rng = match self.params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let exclusions = book.exclusion_keys();
        let scorer = PairScorer::new(&index, &self.params);
        let outcome = self.generator.generate(
            &eligible,
            &exclusions,
            &index,
            &scorer,
            self.params.max_attempts,
            &mut rng,
        );
        debug!(
            attempts = outcome.attempts,
            rounds = outcome.rounds,
            penalty = outcome.penalty,
            "候选搜索完成"
        );

        // === 步骤 6: 朝向调整 ===
        let pairs = self.adjuster.adjust(outcome.assignments, &index);

        // === 步骤 7: 组装新月份 ===
        let mut skip = preskipped;
        skip.extend(outcome.skipped);
        info!(
            month = %next_label,
            pairs = pairs.len(),
            skipped = skip.len(),
            "生成新一期结对"
        );

        Ok(Period {
            month: next_label.to_string(),
            skip,
            pairs,
        })
    }

    /// 推算名册的下一期标签 (不生成配对)
    pub fn next_label(&self, book: &PairingBook) -> EngineResult<PeriodLabel> {
        let last = book.months.last().ok_or(EngineError::EmptyHistory)?;
        Ok(last
            .label()
            .ok_or_else(|| EngineError::LabelParseError(last.month.clone()))?
            .successor())
    }
}
