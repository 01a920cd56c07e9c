// ==========================================
// 天然气供应链 - 多日批量处理
// ==========================================
// 职责: 同一条链逐日处理一段时期的需求,汇总交付量
// 输入: 链 + 按日排列的需求记录
// 输出: 逐日结果 + 期间合计
// ==========================================

use crate::domain::gas_day::DailyGasRecord;
use crate::engine::chain::TransactionChain;
use crate::engine::efficiency::percent_of;
use crate::engine::error::{ChainError, ChainResult};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 单日处理结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyOutcome {
    pub date: NaiveDate,
    pub requested_mcf: Decimal,
    pub delivered_mcf: Decimal,
    pub final_price_per_mcf: Decimal,
    pub efficiency_pct: Decimal,
}

/// 期间汇总
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub days: Vec<DailyOutcome>,
    pub total_requested_mcf: Decimal,
    pub total_delivered_mcf: Decimal,
    /// 无任何日结果时为 None
    pub overall_efficiency_pct: Option<Decimal>,
}

/// 逐日处理一段时期
///
/// 每天独立执行 `chain.process`，日与日之间不结转（没有库存模型）
///
/// # 返回
/// - 空链或空日期列表: 空汇总
///
/// # 错误
/// - `DivisionByZero`: 某日需求气量为 0
/// - `ArithmeticOverflow`: 期间合计超出 Decimal 表示范围
#[instrument(skip(chain, requests), fields(stage_count = chain.len(), day_count = requests.len()))]
pub fn process_period(
    chain: &TransactionChain,
    requests: &[DailyGasRecord],
) -> ChainResult<PeriodSummary> {
    if chain.is_empty() {
        tracing::warn!("空链不产生交付，返回空汇总");
        return Ok(PeriodSummary::default());
    }

    let mut summary = PeriodSummary::default();

    for request in requests {
        let trace = chain.process(request);
        let Some(delivered) = trace.last() else {
            continue;
        };

        let efficiency_pct = percent_of(
            delivered.quantity_mcf,
            request.quantity_mcf,
            "daily_efficiency_pct",
        )?;

        summary.total_requested_mcf = summary
            .total_requested_mcf
            .checked_add(request.quantity_mcf)
            .ok_or(ChainError::ArithmeticOverflow { metric: "total_requested_mcf" })?;
        summary.total_delivered_mcf = summary
            .total_delivered_mcf
            .checked_add(delivered.quantity_mcf)
            .ok_or(ChainError::ArithmeticOverflow { metric: "total_delivered_mcf" })?;
        summary.days.push(DailyOutcome {
            date: request.date,
            requested_mcf: request.quantity_mcf,
            delivered_mcf: delivered.quantity_mcf,
            final_price_per_mcf: delivered.price_per_mcf,
            efficiency_pct,
        });
    }

    if !summary.days.is_empty() {
        summary.overall_efficiency_pct = Some(percent_of(
            summary.total_delivered_mcf,
            summary.total_requested_mcf,
            "overall_efficiency_pct",
        )?);
    }

    tracing::info!(
        days = summary.days.len(),
        total_requested_mcf = %summary.total_requested_mcf,
        total_delivered_mcf = %summary.total_delivered_mcf,
        "期间处理完成"
    );

    Ok(summary)
}
