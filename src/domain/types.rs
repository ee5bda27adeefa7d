// ==========================================
// 现场焊口追踪系统 - 领域类型定义
// ==========================================
// 职责: 定义编号规则值对象与焊口状态枚举
// 红线: 值类型不可变, 结构相等, 不持久化
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 命名规则 (Naming Convention)
// ==========================================
// 由一组既有焊口编号推断得到的 (前缀, 补零位数, 是否有前缀) 三元组。
// 仅相对于推断来源的编号集合有意义, 不携带独立标识。
//
// has_prefix 与 prefix 在本系统中始终等价 (prefix 非空 ⇔ has_prefix),
// 保留双字段以显式区分"纯数字规则"与"前缀恰好为空"两种形态,
// 与既有调用契约及其测试保持一致。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamingConvention {
    /// 数字部分之前的字面前缀 (可为空, 如 "FW-")
    pub prefix: String,
    /// 数字部分的最小位数; 0 表示不强制补零
    pub padding_width: usize,
    /// 是否带前缀 (prefix.len() > 0)
    pub has_prefix: bool,
}

impl NamingConvention {
    /// 构造命名规则, has_prefix 由 prefix 推导
    pub fn new(prefix: impl Into<String>, padding_width: usize) -> Self {
        let prefix = prefix.into();
        let has_prefix = !prefix.is_empty();
        Self {
            prefix,
            padding_width,
            has_prefix,
        }
    }

    /// 纯数字规则 (无前缀)
    pub fn numeric(padding_width: usize) -> Self {
        Self::new("", padding_width)
    }
}

// 缺省规则: 输入为空或全部无法解析时的回退 ("W-" + 3 位补零 → "W-001")
impl Default for NamingConvention {
    fn default() -> Self {
        Self::new("W-", 3)
    }
}

// 模板形式展示, 如 "FW-###" / "###" / "W-#"
impl fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.padding_width.max(1);
        write!(f, "{}{}", self.prefix, "#".repeat(digits))
    }
}

// ==========================================
// 焊口状态 (Weld Status)
// ==========================================
// 现场焊口的生命周期状态
// 序列化格式: SCREAMING_SNAKE_CASE (与外部存储一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeldStatus {
    Pending,   // 待焊接
    Welded,    // 已焊接
    Inspected, // 已检验
    Rejected,  // 检验不合格(返修)
}

impl fmt::Display for WeldStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeldStatus::Pending => write!(f, "PENDING"),
            WeldStatus::Welded => write!(f, "WELDED"),
            WeldStatus::Inspected => write!(f, "INSPECTED"),
            WeldStatus::Rejected => write!(f, "REJECTED"),
        }
    }
}
