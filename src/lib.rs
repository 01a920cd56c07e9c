// ==========================================
// 天然气供应链 - 核心库
// ==========================================
// 模型: 美国生产商 → 管输 → 墨西哥交付点
// 每个环节对日气量/单价做固定规则变换,链按顺序组合各环节
// ==========================================

// 领域层 - 日气量记录与环节接口
pub mod domain;

// 引擎层 - 环节实现与链式编排
pub mod engine;

// 配置层 - 标准链参数
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{DailyGasRecord, Stage, StageKind};

pub use engine::{
    process_period, ChainError, ChainFactory, ChainResult, DailyOutcome, EfficiencyReport,
    PeriodSummary, Producer, Receiver, TransactionChain, Transporter,
};

pub use config::{ConfigError, StandardChainProfile};

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
