// ==========================================
// 现场焊口追踪系统 - 序号缺口分析引擎
// ==========================================
// 职责: 在既有序号集合中决定下一个可用序号
// 策略: 优先补最小缺口, 其次顺延最大值
// 红线: 高位连续段不回填 1 (项目有意从高位起编)
// ==========================================

use serde::Serialize;
use std::fmt;

// ==========================================
// NextValueKind - 序号决策类别
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NextValueKind {
    SequenceStart, // 空集合起编
    GapFill,       // 补缺口
    Increment,     // 顺延最大值
}

impl fmt::Display for NextValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NextValueKind::SequenceStart => write!(f, "SEQUENCE_START"),
            NextValueKind::GapFill => write!(f, "GAP_FILL"),
            NextValueKind::Increment => write!(f, "INCREMENT"),
        }
    }
}

// ==========================================
// NextValue - 序号决策结果
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextValue {
    pub value: u64,
    pub kind: NextValueKind,
}

// ==========================================
// SequenceAnalyzer - 序号缺口分析引擎
// ==========================================
pub struct SequenceAnalyzer;

impl SequenceAnalyzer {
    /// 创建新的序号分析引擎
    pub fn new() -> Self {
        Self
    }

    /// 决定下一个可用序号
    ///
    /// 规则（顺序执行）:
    /// 1) 集合为空 → 1 (起编)
    /// 2) 升序排序
    /// 3) 最小值 > 1 时:
    ///    - 整段无内部缺口 (含单元素集合, 如 [98,99,100] / [50]) →
    ///      视为项目有意从高位起编, 顺延最大值, 不回填 1
    ///    - 存在内部缺口 → 提案 1 (连同低位缺口一起, 从最低处补起)
    /// 4) 最小值 ≤ 1 时: 从左到右找第一个缺口 (相邻差 > 1), 补 current+1
    /// 5) 无缺口 → 最大值 + 1
    ///
    /// 缺口补位始终取升序扫描遇到的第一个缺口, 与缺口大小无关。
    /// 重复序号无害 (相邻差 0 不构成缺口)。
    pub fn next_value(&self, existing: &[u64]) -> NextValue {
        if existing.is_empty() {
            return NextValue {
                value: 1,
                kind: NextValueKind::SequenceStart,
            };
        }

        let mut sorted = existing.to_vec();
        sorted.sort_unstable();

        let lowest = sorted[0];
        let highest = sorted[sorted.len() - 1];

        if lowest > 1 {
            return match Self::first_internal_gap(&sorted) {
                // 存在内部缺口 → 低位缺口优先, 从 1 补起
                Some(_) => NextValue {
                    value: 1,
                    kind: NextValueKind::GapFill,
                },
                // 高位连续段 → 顺延
                None => NextValue {
                    value: highest + 1,
                    kind: NextValueKind::Increment,
                },
            };
        }

        match Self::first_internal_gap(&sorted) {
            Some(value) => NextValue {
                value,
                kind: NextValueKind::GapFill,
            },
            None => NextValue {
                value: highest + 1,
                kind: NextValueKind::Increment,
            },
        }
    }

    /// 升序扫描第一个内部缺口, 返回缺口中最小的未用序号
    fn first_internal_gap(sorted: &[u64]) -> Option<u64> {
        sorted
            .windows(2)
            .find(|pair| pair[1] - pair[0] > 1)
            .map(|pair| pair[0] + 1)
    }
}

impl Default for SequenceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
