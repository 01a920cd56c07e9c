// ==========================================
// 天然气供应链 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 原则: 失败直接返回给调用方,引擎内部不重试、不返回部分结果
// ==========================================

use crate::config::error::ConfigError;
use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum ChainError {
    /// 百分比指标的分母（初始气量/初始单价/总需求量）为 0
    #[error("除数为零: metric={metric}")]
    DivisionByZero { metric: &'static str },

    #[error("数值溢出: metric={metric}")]
    ArithmeticOverflow { metric: &'static str },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result 类型别名
pub type ChainResult<T> = Result<T, ChainError>;
