// ==========================================
// 天然气供应链 - 链效率指标
// ==========================================
// 比较对象: 初始记录 vs 链最后一个环节的输出
// 分母为零是硬错误 (DivisionByZero), 不返回哨兵值
// ==========================================

use crate::domain::gas_day::DailyGasRecord;
use crate::engine::error::{ChainError, ChainResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 效率报告中各指标的键名
pub mod metric_keys {
    pub const INITIAL_QUANTITY_MCF: &str = "initial_quantity_mcf";
    pub const FINAL_QUANTITY_MCF: &str = "final_quantity_mcf";
    pub const QUANTITY_EFFICIENCY_PCT: &str = "quantity_efficiency_pct";
    pub const INITIAL_PRICE_PER_MCF: &str = "initial_price_per_mcf";
    pub const FINAL_PRICE_PER_MCF: &str = "final_price_per_mcf";
    pub const PRICE_INCREASE_PCT: &str = "price_increase_pct";
    pub const INITIAL_TOTAL_VALUE: &str = "initial_total_value";
    pub const FINAL_TOTAL_VALUE: &str = "final_total_value";
}

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

// ==========================================
// EfficiencyReport - 效率报告
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EfficiencyReport {
    pub initial_quantity_mcf: Decimal,
    pub final_quantity_mcf: Decimal,
    pub quantity_efficiency_pct: Decimal, // final / initial × 100
    pub initial_price_per_mcf: Decimal,
    pub final_price_per_mcf: Decimal,
    pub price_increase_pct: Decimal,      // (final - initial) / initial × 100
    pub initial_total_value: Decimal,
    pub final_total_value: Decimal,
}

impl EfficiencyReport {
    /// 由初始记录与最终记录计算效率报告
    ///
    /// # 错误
    /// - `DivisionByZero`: 初始气量或初始单价为 0
    /// - `ArithmeticOverflow`: 百分比或总价值超出 Decimal 表示范围
    pub fn between(initial: &DailyGasRecord, last: &DailyGasRecord) -> ChainResult<Self> {
        let quantity_efficiency_pct = percent_of(
            last.quantity_mcf,
            initial.quantity_mcf,
            metric_keys::QUANTITY_EFFICIENCY_PCT,
        )?;
        let price_delta = last
            .price_per_mcf
            .checked_sub(initial.price_per_mcf)
            .ok_or(ChainError::ArithmeticOverflow {
                metric: metric_keys::PRICE_INCREASE_PCT,
            })?;
        let price_increase_pct = percent_of(
            price_delta,
            initial.price_per_mcf,
            metric_keys::PRICE_INCREASE_PCT,
        )?;

        Ok(Self {
            initial_quantity_mcf: initial.quantity_mcf,
            final_quantity_mcf: last.quantity_mcf,
            quantity_efficiency_pct,
            initial_price_per_mcf: initial.price_per_mcf,
            final_price_per_mcf: last.price_per_mcf,
            price_increase_pct,
            initial_total_value: checked_total_value(initial, metric_keys::INITIAL_TOTAL_VALUE)?,
            final_total_value: checked_total_value(last, metric_keys::FINAL_TOTAL_VALUE)?,
        })
    }

    /// 映射形式（用于报表输出）
    pub fn to_metric_map(&self) -> BTreeMap<&'static str, Decimal> {
        use metric_keys::*;

        BTreeMap::from([
            (INITIAL_QUANTITY_MCF, self.initial_quantity_mcf),
            (FINAL_QUANTITY_MCF, self.final_quantity_mcf),
            (QUANTITY_EFFICIENCY_PCT, self.quantity_efficiency_pct),
            (INITIAL_PRICE_PER_MCF, self.initial_price_per_mcf),
            (FINAL_PRICE_PER_MCF, self.final_price_per_mcf),
            (PRICE_INCREASE_PCT, self.price_increase_pct),
            (INITIAL_TOTAL_VALUE, self.initial_total_value),
            (FINAL_TOTAL_VALUE, self.final_total_value),
        ])
    }
}

fn checked_total_value(record: &DailyGasRecord, metric: &'static str) -> ChainResult<Decimal> {
    record
        .checked_total_value()
        .ok_or(ChainError::ArithmeticOverflow { metric })
}

/// numerator / denominator × 100
pub(crate) fn percent_of(
    numerator: Decimal,
    denominator: Decimal,
    metric: &'static str,
) -> ChainResult<Decimal> {
    if denominator.is_zero() {
        return Err(ChainError::DivisionByZero { metric });
    }
    numerator
        .checked_div(denominator)
        .and_then(|ratio| ratio.checked_mul(HUNDRED))
        .ok_or(ChainError::ArithmeticOverflow { metric })
}
