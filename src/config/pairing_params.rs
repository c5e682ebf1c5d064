// ==========================================
// 导师结对分配系统 - 引擎参数
// ==========================================
// 职责: 结对搜索的权重与上限配置
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// PairingParameters - 结对引擎参数
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairingParameters {
    /// 最近一期重复惩罚 (支配项)
    ///
    /// 候选配对若在最近一个有配对的月份出现过,记此惩罚。
    /// 必须显著大于频次惩罚在实际历史长度下可能的累计值。
    #[serde(default = "default_recency_penalty")]
    pub recency_penalty: f64,

    /// 历史频次惩罚系数
    ///
    /// 候选配对在全部历史中每出现一次,累加此惩罚。
    #[serde(default = "default_repeat_penalty")]
    pub repeat_penalty: f64,

    /// 每轮随机尝试上限
    ///
    /// 一轮内尝试耗尽仍无合法候选时,移除一名成员后重试。
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// 随机种子
    ///
    /// 缺省从熵源取种;固定后同一输入产生完全一致的输出。
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_recency_penalty() -> f64 {
    1000.0
}

fn default_repeat_penalty() -> f64 {
    1.0
}

fn default_max_attempts() -> u32 {
    1000
}

impl Default for PairingParameters {
    fn default() -> Self {
        Self {
            recency_penalty: default_recency_penalty(),
            repeat_penalty: default_repeat_penalty(),
            max_attempts: default_max_attempts(),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters() {
        let params = PairingParameters::default();
        assert_eq!(params.recency_penalty, 1000.0);
        assert_eq!(params.repeat_penalty, 1.0);
        assert_eq!(params.max_attempts, 1000);
        assert!(params.seed.is_none());
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let params: PairingParameters = serde_json::from_str(r#"{"seed": 42}"#).unwrap();
        assert_eq!(params.seed, Some(42));
        assert_eq!(params.max_attempts, 1000);
        assert_eq!(params.recency_penalty, 1000.0);
    }
}
