// ==========================================
// 导师结对分配系统 - 朝向调整引擎
// ==========================================
// 职责: 同一配对连续出现时轮换导师/学员角色
// 规则: 与上次朝向完全相同才互换;已相反或无历史保持不变
// ==========================================

use crate::domain::Assignment;
use crate::engine::history::HistoryIndex;

// ==========================================
// OrientationAdjuster - 朝向调整引擎
// ==========================================
pub struct OrientationAdjuster;

impl OrientationAdjuster {
    pub fn new() -> Self {
        Self
    }

    /// 对整组候选应用朝向调整
    ///
    /// 对已调整过的结果再次应用不产生变化 (幂等)。
    pub fn adjust(&self, assignments: Vec<Assignment>, index: &HistoryIndex) -> Vec<Assignment> {
        assignments
            .into_iter()
            .map(|assignment| self.adjust_one(assignment, index))
            .collect()
    }

    /// 调整单个候选的朝向
    ///
    /// 两个方向都显式判等: 只有与历史记录完全同向才互换,
    /// 已是反向的候选保持原样,不会被二次翻转。
    fn adjust_one(&self, candidate: Assignment, index: &HistoryIndex) -> Assignment {
        if let Some(previous) = index.last_assignment(&candidate.key()) {
            let same_orientation =
                previous.mentor == candidate.mentor && previous.mentee == candidate.mentee;
            let reversed_orientation =
                previous.mentor == candidate.mentee && previous.mentee == candidate.mentor;

            if same_orientation && !reversed_orientation {
                return candidate.flipped();
            }
        }
        candidate
    }
}

impl Default for OrientationAdjuster {
    fn default() -> Self {
        Self::new()
    }
}
