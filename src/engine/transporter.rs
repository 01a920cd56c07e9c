// ==========================================
// 天然气供应链 - 管输环节
// ==========================================
// 规则: 气量 × (1 - 损耗系数), 单价 + 运费 (加法,不是乘法)
// 损耗系数预期在 [0, 1) 区间,不做校验
// ==========================================

use crate::domain::gas_day::DailyGasRecord;
use crate::domain::stage::{Stage, StageKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ==========================================
// Transporter - 管输商
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transporter {
    name: String,
    route: String,
    loss_factor: Decimal,  // 损耗系数 (0.01 = 1%)
    cost_per_mcf: Decimal, // 单位运费
}

impl Transporter {
    /// 创建管输环节
    ///
    /// 注意: loss_factor >= 1 会得到非正气量, loss_factor < 0 会放大气量
    pub fn new(
        name: impl Into<String>,
        route: impl Into<String>,
        loss_factor: Decimal,
        cost_per_mcf: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            route: route.into(),
            loss_factor,
            cost_per_mcf,
        }
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn loss_factor(&self) -> Decimal {
        self.loss_factor
    }

    pub fn cost_per_mcf(&self) -> Decimal {
        self.cost_per_mcf
    }
}

impl Stage for Transporter {
    fn process(&self, input: &DailyGasRecord) -> DailyGasRecord {
        DailyGasRecord::new(
            input.date,
            input.quantity_mcf * (Decimal::ONE - self.loss_factor),
            input.price_per_mcf + self.cost_per_mcf,
        )
    }

    fn description(&self) -> String {
        format!("Transport {} - route: {}", self.name, self.route)
    }

    fn kind(&self) -> StageKind {
        StageKind::Transporter
    }

    fn name(&self) -> &str {
        &self.name
    }
}
