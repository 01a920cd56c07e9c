// ==========================================
// 天然气供应链 - 引擎层
// ==========================================
// 职责: 环节实现、链式编排、效率计算、标准链构建
// 红线: 所有计算都是纯函数,链构建完成后只读
// ==========================================

pub mod chain;
pub mod efficiency;
pub mod error;
pub mod factory;
pub mod period;
pub mod producer;
pub mod receiver;
pub mod transporter;

// 重导出核心引擎
pub use chain::TransactionChain;
pub use efficiency::{metric_keys, EfficiencyReport};
pub use error::{ChainError, ChainResult};
pub use factory::ChainFactory;
pub use period::{process_period, DailyOutcome, PeriodSummary};
pub use producer::Producer;
pub use receiver::Receiver;
pub use transporter::Transporter;
