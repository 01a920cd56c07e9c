// ==========================================
// 天然气供应链 - 配置层
// ==========================================
// 职责: 标准链参数,支持 JSON 文件覆写
// 环境变量: GAS_CHAIN_PROFILE (JSON 配置文件路径)
// ==========================================

pub mod chain_profile;
pub mod error;

// 重导出核心配置类型
pub use chain_profile::{
    ProducerProfile, ReceiverProfile, StandardChainProfile, TransporterProfile,
    PROFILE_PATH_ENV,
};
pub use error::{ConfigError, ConfigResult};
