// ==========================================
// 天然气供应链 - 标准链配置
// ==========================================
// 职责: 标准链四个环节的参数,默认值 + JSON 覆写
// 来源: 内置默认 / JSON 字符串 / JSON 文件 / GAS_CHAIN_PROFILE
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 标准链配置文件路径的环境变量
pub const PROFILE_PATH_ENV: &str = "GAS_CHAIN_PROFILE";

/// 标准链参数（生产商 → 主干管 → 配送管 → 接收方）
///
/// 所有段都可省略，省略时使用内置默认值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandardChainProfile {
    pub producer: ProducerProfile,

    /// 跨境主干管
    pub main_pipeline: TransporterProfile,

    /// 境内配送管
    pub distribution: TransporterProfile,

    pub receiver: ReceiverProfile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProducerProfile {
    pub name: String,
    pub location: String,
    pub daily_capacity_mcf: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransporterProfile {
    pub name: String,
    pub route: String,
    /// 损耗系数（0~1）
    pub loss_factor: Decimal,
    pub cost_per_mcf: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceiverProfile {
    pub name: String,
    pub location: String,
    pub daily_demand_mcf: Decimal,
}

impl Default for StandardChainProfile {
    fn default() -> Self {
        Self {
            producer: ProducerProfile::default(),
            main_pipeline: TransporterProfile::default(),
            distribution: TransporterProfile {
                name: "Distribuidora Mexico".to_string(),
                route: "Border-Plant".to_string(),
                loss_factor: dec!(0.01),
                cost_per_mcf: dec!(0.30),
            },
            receiver: ReceiverProfile::default(),
        }
    }
}

impl Default for ProducerProfile {
    fn default() -> Self {
        Self {
            name: "ExxonMobil".to_string(),
            location: "Texas".to_string(),
            daily_capacity_mcf: dec!(1000000),
        }
    }
}

// 单独反序列化 TransporterProfile 时落到主干管参数
impl Default for TransporterProfile {
    fn default() -> Self {
        Self {
            name: "Pipeline Internacional".to_string(),
            route: "Texas-Mexico Border".to_string(),
            loss_factor: dec!(0.02),
            cost_per_mcf: dec!(0.50),
        }
    }
}

impl Default for ReceiverProfile {
    fn default() -> Self {
        Self {
            name: "CFE Tuxpan".to_string(),
            location: "Veracruz".to_string(),
            daily_demand_mcf: dec!(800000),
        }
    }
}

impl StandardChainProfile {
    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// 从 JSON 文件加载
    pub fn from_json_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// 读取 GAS_CHAIN_PROFILE 指向的文件；未设置时返回默认值
    pub fn from_env() -> ConfigResult<Self> {
        match std::env::var(PROFILE_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_json_file(path.trim()),
            _ => Ok(Self::default()),
        }
    }
}
