// ==========================================
// 天然气供应链 - 领域模型层
// ==========================================
// 职责: 定义日气量记录与环节接口
// 红线: 不含编排逻辑
// ==========================================

pub mod gas_day;
pub mod stage;

// 重导出核心类型
pub use gas_day::DailyGasRecord;
pub use stage::{Stage, StageKind};
