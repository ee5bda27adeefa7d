// ==========================================
// 现场焊口追踪系统 - 编号提案编排器
// ==========================================
// 用途: 协调三个核心引擎生成下一个焊口编号
// 流程: 规则票选 → 批量解析 → 缺口分析 → 渲染编号
// 红线: 对外永不报错, 任何输入都降级为合法提案
// ==========================================

use crate::domain::types::NamingConvention;
use crate::domain::weld::FieldWeld;
use crate::engine::codec::NumberCodec;
use crate::engine::pattern::PatternDetector;
use crate::engine::sequence::{NextValueKind, SequenceAnalyzer};
use serde::Serialize;
use tracing::{debug, info, instrument};

// ==========================================
// WeldNumberProposal - 编号提案结果
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct WeldNumberProposal {
    /// 提案编号 (按主导规则渲染)
    pub weld_number: String,
    /// 提案序号整数
    pub value: u64,
    /// 推断出的主导命名规则
    pub convention: NamingConvention,
    /// 决策类别 (起编 / 补缺口 / 顺延)
    pub kind: NextValueKind,
    /// 决策原因 (JSON, 供审计与界面展示)
    pub reason: String,
}

// ==========================================
// NumberingOrchestrator - 编号提案编排器
// ==========================================
pub struct NumberingOrchestrator {
    detector: PatternDetector,
    codec: NumberCodec,
    analyzer: SequenceAnalyzer,
}

impl NumberingOrchestrator {
    /// 创建新的编排器实例
    pub fn new() -> Self {
        Self {
            detector: PatternDetector::new(),
            codec: NumberCodec::new(),
            analyzer: SequenceAnalyzer::new(),
        }
    }

    /// 生成下一个焊口编号提案 (完整结果)
    ///
    /// # 参数
    /// - existing: 同一项目内既有焊口编号快照, 顺序任意, 允许重复与脏数据
    ///
    /// # 返回
    /// 提案结果。不符合主导规则的编号被静默排除, 不阻断计算;
    /// 最坏情况 (空输入 / 全部脏数据) 回退缺省规则, 提案 "W-001"。
    #[instrument(skip(self, existing), fields(count = existing.len()))]
    pub fn propose(&self, existing: &[String]) -> WeldNumberProposal {
        // 1. 规则票选
        let convention = self.detector.detect_dominant(existing);

        // 2. 按主导规则批量解析, 失败者不参与序号分析
        let mut numbers = Vec::with_capacity(existing.len());
        for identifier in existing {
            match self.codec.parse(identifier, &convention) {
                Ok(value) => numbers.push(value),
                Err(reason) => {
                    debug!(identifier = %identifier, reason = %reason, "编号不符合主导规则, 不参与序号分析");
                }
            }
        }

        // 3. 缺口分析
        let next = self.analyzer.next_value(&numbers);

        // 4. 渲染提案编号
        let weld_number = self.codec.format(next.value, &convention);

        let reason = serde_json::json!({
            "strategy": next.kind,
            "convention": convention.to_string(),
            "next_value": next.value,
            "parsed_count": numbers.len(),
            "excluded_count": existing.len() - numbers.len(),
        })
        .to_string();

        info!(
            weld_number = %weld_number,
            strategy = %next.kind,
            convention = %convention,
            "生成焊口编号提案"
        );

        WeldNumberProposal {
            weld_number,
            value: next.value,
            convention,
            kind: next.kind,
            reason,
        }
    }

    /// 生成下一个焊口编号 (仅编号字符串)
    ///
    /// 对外唯一入口的简化形式, 永不失败。
    pub fn propose_next_identifier(&self, existing: &[String]) -> String {
        self.propose(existing).weld_number
    }

    /// 从焊口记录列表生成下一个编号 (投影 weld_number 后委托)
    pub fn propose_for_welds(&self, welds: &[FieldWeld]) -> String {
        let numbers: Vec<String> = welds.iter().map(|w| w.weld_number.clone()).collect();
        self.propose_next_identifier(&numbers)
    }
}

impl Default for NumberingOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}
