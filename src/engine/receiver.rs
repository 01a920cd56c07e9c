// ==========================================
// 天然气供应链 - 接收方环节
// ==========================================
// 规则: 接收量 = min(到达气量, 日需求), 单价不变
// 超出需求的部分直接丢弃,没有库存模型
// ==========================================

use crate::domain::gas_day::DailyGasRecord;
use crate::domain::stage::{Stage, StageKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ==========================================
// Receiver - 交付点(电厂)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receiver {
    name: String,
    location: String,
    daily_demand_mcf: Decimal, // 日需求上限 (MCF)
}

impl Receiver {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        daily_demand_mcf: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            daily_demand_mcf,
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn daily_demand_mcf(&self) -> Decimal {
        self.daily_demand_mcf
    }
}

impl Stage for Receiver {
    fn process(&self, input: &DailyGasRecord) -> DailyGasRecord {
        input.with_quantity(input.quantity_mcf.min(self.daily_demand_mcf))
    }

    fn description(&self) -> String {
        format!("Receiver {} at {}, Mexico", self.name, self.location)
    }

    fn kind(&self) -> StageKind {
        StageKind::Receiver
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
            dec!(4.00),
        )
    }

    #[test]
    fn test_within_demand() {
        let receiver = Receiver::new("Test Central", "Mexico", dec!(80000));
        let out = receiver.process(&record(dec!(50000)));

        assert_eq!(out.quantity_mcf, dec!(50000));
        assert_eq!(out.price_per_mcf, dec!(4.00));
    }

    #[test]
    fn test_exceeding_demand_is_capped() {
        let receiver = Receiver::new("Test Central", "Mexico", dec!(80000));
        let input = record(dec!(100000));
        let out = receiver.process(&input);

        assert_eq!(out.quantity_mcf, dec!(80000));
        assert_eq!(out.price_per_mcf, dec!(4.00));
        assert_eq!(out.date, input.date);
    }

    #[test]
    fn test_description_and_kind() {
        let receiver = Receiver::new("CFE Salamanca", "Guanajuato", dec!(600000));
        assert_eq!(receiver.description(), "Receiver CFE Salamanca at Guanajuato, Mexico");
        assert_eq!(receiver.kind(), StageKind::Receiver);
        assert_eq!(receiver.location(), "Guanajuato");
        assert_eq!(receiver.daily_demand_mcf(), dec!(600000));
    }
}
