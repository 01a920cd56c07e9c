// ==========================================
// 天然气供应链 - 生产商环节
// ==========================================
// 规则: 产出 = min(需求气量, 日产能), 井口价格不变
// 输入: 日气量记录
// 输出: 新的日气量记录
// ==========================================

use crate::domain::gas_day::DailyGasRecord;
use crate::domain::stage::{Stage, StageKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ==========================================
// Producer - 生产商
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Producer {
    name: String,
    location: String,
    daily_capacity_mcf: Decimal, // 日产能上限 (MCF)
}

impl Producer {
    /// 创建生产商
    ///
    /// 产能不做范围校验；产能为 0 时产出为 0
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        daily_capacity_mcf: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            daily_capacity_mcf,
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn daily_capacity_mcf(&self) -> Decimal {
        self.daily_capacity_mcf
    }
}

impl Stage for Producer {
    fn process(&self, input: &DailyGasRecord) -> DailyGasRecord {
        let produced = input.quantity_mcf.min(self.daily_capacity_mcf);
        input.with_quantity(produced)
    }

    fn description(&self) -> String {
        format!("Producer {} at {}, USA", self.name, self.location)
    }

    fn kind(&self) -> StageKind {
        StageKind::Producer
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn record(quantity: Decimal) -> DailyGasRecord {
        DailyGasRecord::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            quantity,
            dec!(3.00),
        )
    }

    #[test]
    fn test_under_capacity_passes_through() {
        let producer = Producer::new("Test Producer", "Texas", dec!(100000));
        let out = producer.process(&record(dec!(50000)));

        assert_eq!(out.quantity_mcf, dec!(50000));
        assert_eq!(out.price_per_mcf, dec!(3.00));
    }

    #[test]
    fn test_over_capacity_is_capped() {
        let producer = Producer::new("Test Producer", "Texas", dec!(100000));
        let input = record(dec!(150000));
        let out = producer.process(&input);

        assert_eq!(out.quantity_mcf, dec!(100000));
        assert_eq!(out.price_per_mcf, dec!(3.00));
        assert_eq!(out.date, input.date);
    }

    #[test]
    fn test_zero_capacity_yields_zero() {
        let producer = Producer::new("Idle", "Texas", dec!(0));
        let out = producer.process(&record(dec!(5000)));
        assert_eq!(out.quantity_mcf, dec!(0));
    }

    #[test]
    fn test_description_and_kind() {
        let producer = Producer::new("Chevron", "Louisiana", dec!(750000));
        assert_eq!(producer.description(), "Producer Chevron at Louisiana, USA");
        assert_eq!(producer.kind(), StageKind::Producer);
        assert_eq!(producer.name(), "Chevron");
        assert_eq!(producer.location(), "Louisiana");
        assert_eq!(producer.daily_capacity_mcf(), dec!(750000));
    }
}
