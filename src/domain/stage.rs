// ==========================================
// 天然气供应链 - 环节接口
// ==========================================
// 职责: 定义链中每个环节的统一能力
// 红线: 环节配置构造后不可变, process 不得修改输入
// ==========================================

use crate::domain::gas_day::DailyGasRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 环节类型 (Stage Kind)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StageKind {
    Producer,    // 生产商(产能上限)
    Transporter, // 管输(损耗 + 运费)
    Receiver,    // 接收方(需求上限)
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageKind::Producer => write!(f, "PRODUCER"),
            StageKind::Transporter => write!(f, "TRANSPORTER"),
            StageKind::Receiver => write!(f, "RECEIVER"),
        }
    }
}

// ==========================================
// Trait: Stage
// ==========================================
// 用途: TransactionChain 按插入顺序依次调用
// 外部 crate 可以实现新的环节类型
pub trait Stage: Send + Sync {
    /// 处理一天的气量，返回新的记录
    fn process(&self, input: &DailyGasRecord) -> DailyGasRecord;

    /// 人类可读的环节描述（仅用于报表）
    fn description(&self) -> String;

    /// 环节类型
    fn kind(&self) -> StageKind;

    /// 环节显示名称
    fn name(&self) -> &str;
}
