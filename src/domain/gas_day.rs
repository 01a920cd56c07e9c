// ==========================================
// 天然气供应链 - 日气量记录
// ==========================================
// 单位: 数量 MCF (千立方英尺), 价格 货币/MCF
// 红线: 记录不可变,每个环节都产出新记录
// ==========================================

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ==========================================
// DailyGasRecord - 日气量记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyGasRecord {
    pub date: NaiveDate,          // 交易日期
    pub quantity_mcf: Decimal,    // 气量 (MCF)
    pub price_per_mcf: Decimal,   // 单价 (每 MCF)
}

impl DailyGasRecord {
    /// 创建日气量记录
    ///
    /// 不做任何校验（负数、零值原样接受），校验属于调用方或具体环节
    pub fn new(date: NaiveDate, quantity_mcf: Decimal, price_per_mcf: Decimal) -> Self {
        Self {
            date,
            quantity_mcf,
            price_per_mcf,
        }
    }

    /// 当日总价值 = 气量 × 单价
    pub fn total_value(&self) -> Decimal {
        self.quantity_mcf * self.price_per_mcf
    }

    /// 当日总价值，超出 Decimal 表示范围时返回 None
    pub fn checked_total_value(&self) -> Option<Decimal> {
        self.quantity_mcf.checked_mul(self.price_per_mcf)
    }

    /// 以新的气量派生记录（日期、单价不变）
    pub fn with_quantity(&self, quantity_mcf: Decimal) -> Self {
        Self {
            quantity_mcf,
            ..self.clone()
        }
    }

    /// 以新的单价派生记录（日期、气量不变）
    pub fn with_price(&self, price_per_mcf: Decimal) -> Self {
        Self {
            price_per_mcf,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_total_value() {
        let record = DailyGasRecord::new(day(), dec!(1000), dec!(3.50));
        assert_eq!(record.total_value(), dec!(3500));
    }

    #[test]
    fn test_total_value_zero_and_fractional() {
        let zero = DailyGasRecord::new(day(), dec!(0), dec!(3.50));
        assert_eq!(zero.total_value(), dec!(0));

        let fractional = DailyGasRecord::new(day(), dec!(1234.5), dec!(2.25));
        assert_eq!(fractional.total_value(), dec!(2777.625));
    }

    #[test]
    fn test_checked_total_value_overflow() {
        let normal = DailyGasRecord::new(day(), dec!(1000), dec!(3.50));
        assert_eq!(normal.checked_total_value(), Some(dec!(3500)));

        let huge = DailyGasRecord::new(day(), Decimal::MAX, dec!(2));
        assert_eq!(huge.checked_total_value(), None);
    }

    #[test]
    fn test_derived_records_leave_source_untouched() {
        let source = DailyGasRecord::new(day(), dec!(100), dec!(3));

        let less = source.with_quantity(dec!(80));
        let pricier = source.with_price(dec!(3.4));

        assert_eq!(source.quantity_mcf, dec!(100));
        assert_eq!(source.price_per_mcf, dec!(3));
        assert_eq!(less.quantity_mcf, dec!(80));
        assert_eq!(less.price_per_mcf, dec!(3));
        assert_eq!(pricier.quantity_mcf, dec!(100));
        assert_eq!(pricier.price_per_mcf, dec!(3.4));
        assert_eq!(pricier.date, source.date);
    }

    #[test]
    fn test_serde_round_trip_keeps_exact_decimals() {
        let record = DailyGasRecord::new(day(), dec!(94050.00), dec!(3.25));
        let json = serde_json::to_string(&record).unwrap();
        let back: DailyGasRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
