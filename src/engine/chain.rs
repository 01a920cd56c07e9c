// ==========================================
// 天然气供应链 - 链式交易编排器
// ==========================================
// 职责: 按插入顺序依次执行各环节,收集完整轨迹
// 输入: 初始日气量记录
// 输出: 每个环节一条记录的有序轨迹 + 效率指标
// 红线: process 不修改链,也不修改输入记录
// ==========================================

use crate::domain::gas_day::DailyGasRecord;
use crate::domain::stage::Stage;
use crate::engine::efficiency::EfficiencyReport;
use crate::engine::error::ChainResult;
use std::fmt;
use tracing::instrument;

// ==========================================
// TransactionChain - 链式交易
// ==========================================
#[derive(Default)]
pub struct TransactionChain {
    stages: Vec<Box<dyn Stage>>,
}

impl TransactionChain {
    /// 创建空链
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    // ==========================================
    // 构建
    // ==========================================

    /// 在链尾追加一个环节，返回同一条链以便连续追加
    pub fn append<S>(&mut self, stage: S) -> &mut Self
    where
        S: Stage + 'static,
    {
        self.stages.push(Box::new(stage));
        self
    }

    /// 追加已装箱的环节（用于运行期决定类型的场景）
    pub fn append_boxed(&mut self, stage: Box<dyn Stage>) -> &mut Self {
        self.stages.push(stage);
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// 只读访问环节序列
    pub fn stages(&self) -> &[Box<dyn Stage>] {
        &self.stages
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 执行整条链
    ///
    /// 第 1 个环节以 `initial` 为输入，第 k+1 个环节以第 k 个环节的输出为输入
    ///
    /// # 返回
    /// 轨迹，长度等于环节数；空链返回空轨迹
    #[instrument(skip(self, initial), fields(
        stage_count = self.stages.len(),
        date = %initial.date,
        quantity_mcf = %initial.quantity_mcf
    ))]
    pub fn process(&self, initial: &DailyGasRecord) -> Vec<DailyGasRecord> {
        let mut trace: Vec<DailyGasRecord> = Vec::with_capacity(self.stages.len());

        for (index, stage) in self.stages.iter().enumerate() {
            let input = trace.last().unwrap_or(initial);
            let output = stage.process(input);

            tracing::debug!(
                step = index + 1,
                kind = %stage.kind(),
                stage = stage.name(),
                quantity_in = %input.quantity_mcf,
                quantity_out = %output.quantity_mcf,
                quantity_lost = %(input.quantity_mcf - output.quantity_mcf),
                price_out = %output.price_per_mcf,
                "环节处理完成"
            );

            trace.push(output);
        }

        trace
    }

    /// 各环节描述（按链顺序）
    pub fn describe_stages(&self) -> Vec<String> {
        self.stages.iter().map(|stage| stage.description()).collect()
    }

    /// 计算链效率（重新执行一次 process）
    ///
    /// # 返回
    /// - `Ok(None)`: 空链，没有最后一个环节可比较
    /// - `Ok(Some(report))`: 初始记录 vs 最后一条轨迹
    ///
    /// # 错误
    /// - `DivisionByZero`: 初始气量或初始单价为 0
    /// - `ArithmeticOverflow`: 指标超出 Decimal 表示范围
    #[instrument(skip(self, initial), fields(stage_count = self.stages.len(), date = %initial.date))]
    pub fn compute_efficiency(
        &self,
        initial: &DailyGasRecord,
    ) -> ChainResult<Option<EfficiencyReport>> {
        let trace = self.process(initial);

        let Some(last) = trace.last() else {
            tracing::warn!("空链无法计算效率，返回空结果");
            return Ok(None);
        };

        EfficiencyReport::between(initial, last).map(Some)
    }
}

impl fmt::Debug for TransactionChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactionChain")
            .field("stages", &self.describe_stages())
            .finish()
    }
}
