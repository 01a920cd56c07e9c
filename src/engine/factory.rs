// ==========================================
// 天然气供应链 - 标准链工厂
// ==========================================
// 固定形态: Producer → Transporter → Transporter → Receiver
// 生产商/接收方显示名称可覆写,其余参数来自配置
// ==========================================

use crate::config::StandardChainProfile;
use crate::engine::chain::TransactionChain;
use crate::engine::{Producer, Receiver, Transporter};

/// 标准链工厂（无状态）
pub struct ChainFactory;

impl ChainFactory {
    /// 使用内置默认参数构建标准链
    ///
    /// # 参数
    /// - `producer_name`: 生产商显示名称，None 时为 "ExxonMobil"
    /// - `receiver_name`: 接收方显示名称，None 时为 "CFE Tuxpan"
    pub fn build_standard_chain(
        producer_name: Option<&str>,
        receiver_name: Option<&str>,
    ) -> TransactionChain {
        Self::build_from_profile(&StandardChainProfile::default(), producer_name, receiver_name)
    }

    /// 按给定配置构建标准链，名称覆写优先于配置中的名称
    pub fn build_from_profile(
        profile: &StandardChainProfile,
        producer_name: Option<&str>,
        receiver_name: Option<&str>,
    ) -> TransactionChain {
        let producer = &profile.producer;
        let main = &profile.main_pipeline;
        let distribution = &profile.distribution;
        let receiver = &profile.receiver;

        let mut chain = TransactionChain::new();
        chain
            .append(Producer::new(
                producer_name.unwrap_or(producer.name.as_str()),
                producer.location.as_str(),
                producer.daily_capacity_mcf,
            ))
            .append(Transporter::new(
                main.name.as_str(),
                main.route.as_str(),
                main.loss_factor,
                main.cost_per_mcf,
            ))
            .append(Transporter::new(
                distribution.name.as_str(),
                distribution.route.as_str(),
                distribution.loss_factor,
                distribution.cost_per_mcf,
            ))
            .append(Receiver::new(
                receiver_name.unwrap_or(receiver.name.as_str()),
                receiver.location.as_str(),
                receiver.daily_demand_mcf,
            ));

        tracing::debug!(stages = ?chain.describe_stages(), "标准链构建完成");
        chain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stage::StageKind;

    #[test]
    fn test_default_names() {
        let chain = ChainFactory::build_standard_chain(None, None);
        assert_eq!(chain.stages()[0].name(), "ExxonMobil");
        assert_eq!(chain.stages()[3].name(), "CFE Tuxpan");
    }

    #[test]
    fn test_profile_names_and_overrides() {
        let mut profile = StandardChainProfile::default();
        profile.producer.name = "Pioneer".to_string();

        let from_profile = ChainFactory::build_from_profile(&profile, None, Some("CFE Test"));
        assert_eq!(from_profile.stages()[0].name(), "Pioneer");
        assert_eq!(from_profile.stages()[3].name(), "CFE Test");
        assert_eq!(from_profile.stages()[3].kind(), StageKind::Receiver);
    }
}
