// ==========================================
// 导师结对分配系统 - 月份与配对领域模型
// ==========================================
// 职责: 定义结对 (导师→学员)、月份记录与月份标签
// 红线: 历史月份只读,新月份只在末尾追加
// ==========================================

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::domain::types::PairKey;

// ==========================================
// Assignment - 有向结对 (导师, 学员)
// ==========================================
// 线上格式为双元素字符串数组 ["导师", "学员"]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Assignment {
    pub mentor: String,
    pub mentee: String,
}

impl Assignment {
    pub fn new(mentor: &str, mentee: &str) -> Self {
        Self {
            mentor: mentor.to_string(),
            mentee: mentee.to_string(),
        }
    }

    /// 对应的无序配对键
    pub fn key(&self) -> PairKey {
        PairKey::new(&self.mentor, &self.mentee)
    }

    /// 互换导师/学员角色
    pub fn flipped(&self) -> Self {
        Self {
            mentor: self.mentee.clone(),
            mentee: self.mentor.clone(),
        }
    }
}

impl From<(String, String)> for Assignment {
    fn from((mentor, mentee): (String, String)) -> Self {
        Self { mentor, mentee }
    }
}

impl From<Assignment> for (String, String) {
    fn from(assignment: Assignment) -> Self {
        (assignment.mentor, assignment.mentee)
    }
}

// ==========================================
// Period - 一期结对记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// 月份标签, 形如 "2021年10月"
    pub month: String,

    /// 本期未参与结对的成员
    /// 输入兼容单名或序列,输出恒为序列,为空时省略
    #[serde(
        default,
        deserialize_with = "deserialize_name_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub skip: Vec<String>,

    /// 本期结对列表,缺失按空处理
    #[serde(default)]
    pub pairs: Vec<Assignment>,
}

impl Period {
    /// 解析本期的月份标签
    pub fn label(&self) -> Option<PeriodLabel> {
        PeriodLabel::parse(&self.month)
    }
}

// ==========================================
// PeriodLabel - 月份标签
// ==========================================
// 内部以当月1日表示,标签文本为 "YYYY年M月" (输出不补零,输入补零亦可)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PeriodLabel(NaiveDate);

impl PeriodLabel {
    /// 解析 "YYYY年M月" 形式的标签
    ///
    /// # 返回
    /// 年月非法 (如13月) 或格式不符时返回 None
    pub fn parse(label: &str) -> Option<Self> {
        let (year_part, rest) = label.split_once('年')?;
        let month_part = rest.strip_suffix('月')?;
        let year: i32 = year_part.trim().parse().ok()?;
        let month: u32 = month_part.trim().parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, 1).map(Self)
    }

    /// 下一个月份 (12月翻入次年1月)
    pub fn successor(self) -> Self {
        // 构造时已保证为合法月份首日,加一个月在 NaiveDate 范围内不会失败
        Self(self.0 + Months::new(1))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }
}

impl fmt::Display for PeriodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}年{}月", self.0.year(), self.0.month())
    }
}

// ==========================================
// 宽松名单反序列化 (单名或序列)
// ==========================================

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

pub(crate) fn deserialize_name_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<OneOrMany>::deserialize(deserializer)?;
    Ok(match value {
        None => Vec::new(),
        Some(OneOrMany::One(name)) => vec![name],
        Some(OneOrMany::Many(names)) => names,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_wire_format() {
        let json = r#"["甲", "乙"]"#;
        let assignment: Assignment = serde_json::from_str(json).unwrap();
        assert_eq!(assignment.mentor, "甲");
        assert_eq!(assignment.mentee, "乙");

        let back = serde_json::to_string(&assignment).unwrap();
        assert_eq!(back, r#"["甲","乙"]"#);
    }

    #[test]
    fn test_assignment_flipped() {
        let assignment = Assignment::new("A", "B");
        let flipped = assignment.flipped();
        assert_eq!(flipped.mentor, "B");
        assert_eq!(flipped.mentee, "A");
        // 无序键不随朝向变化
        assert_eq!(assignment.key(), flipped.key());
    }

    #[test]
    fn test_label_parse() {
        let label = PeriodLabel::parse("2021年10月").unwrap();
        assert_eq!(label.year(), 2021);
        assert_eq!(label.month(), 10);

        // 补零输入同样接受
        let padded = PeriodLabel::parse("2021年07月").unwrap();
        assert_eq!(padded.month(), 7);

        assert!(PeriodLabel::parse("2021年13月").is_none());
        assert!(PeriodLabel::parse("2021年0月").is_none());
        assert!(PeriodLabel::parse("2021-10").is_none());
        assert!(PeriodLabel::parse("年月").is_none());
        assert!(PeriodLabel::parse("").is_none());
    }

    #[test]
    fn test_label_successor() {
        let oct = PeriodLabel::parse("2021年10月").unwrap();
        assert_eq!(oct.successor().to_string(), "2021年11月");

        // 12月翻年
        let dec = PeriodLabel::parse("2021年12月").unwrap();
        assert_eq!(dec.successor().to_string(), "2022年1月");
    }

    #[test]
    fn test_label_display_unpadded() {
        let label = PeriodLabel::parse("2022年03月").unwrap();
        assert_eq!(label.to_string(), "2022年3月");
    }

    #[test]
    fn test_period_skip_scalar_input() {
        let json = r#"{"month": "2021年10月", "skip": "丙", "pairs": [["甲", "乙"]]}"#;
        let period: Period = serde_json::from_str(json).unwrap();
        assert_eq!(period.skip, vec!["丙"]);
        assert_eq!(period.pairs.len(), 1);
    }

    #[test]
    fn test_period_skip_sequence_input() {
        let json = r#"{"month": "2021年10月", "skip": ["丙", "丁"], "pairs": []}"#;
        let period: Period = serde_json::from_str(json).unwrap();
        assert_eq!(period.skip, vec!["丙", "丁"]);
    }

    #[test]
    fn test_period_missing_optional_fields() {
        // skip 与 pairs 均可缺失
        let json = r#"{"month": "2021年10月"}"#;
        let period: Period = serde_json::from_str(json).unwrap();
        assert!(period.skip.is_empty());
        assert!(period.pairs.is_empty());
    }

    #[test]
    fn test_period_empty_skip_omitted_on_output() {
        let period = Period {
            month: "2021年10月".to_string(),
            skip: Vec::new(),
            pairs: vec![Assignment::new("甲", "乙")],
        };
        let json = serde_json::to_string(&period).unwrap();
        assert!(!json.contains("skip"));

        let with_skip = Period {
            skip: vec!["丙".to_string()],
            ..period
        };
        let json = serde_json::to_string(&with_skip).unwrap();
        assert!(json.contains(r#""skip":["丙"]"#));
    }
}
