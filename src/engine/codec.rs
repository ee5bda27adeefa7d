// ==========================================
// 现场焊口追踪系统 - 编号编解码引擎
// ==========================================
// 职责: 序号整数与编号字符串在给定命名规则下的双向映射
// 不变式: parse(format(v, c), c) == Ok(v) 对所有非负 v 与合法 c 成立
// 红线: 解析失败必须输出 reason (ParseError 携带原因)
// ==========================================

use crate::domain::types::NamingConvention;
use thiserror::Error;

// ==========================================
// ParseError - 编号解析错误
// ==========================================
// 所有错误信息必须包含显式原因
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// 编号未以规则前缀开头 (前缀匹配区分大小写)
    #[error("编号缺少规则前缀: expected={expected}, identifier={identifier}")]
    MissingPrefix {
        expected: String,
        identifier: String,
    },

    /// 去除前缀后数字部分为空
    #[error("编号数字部分为空: identifier={identifier}")]
    EmptyNumeric { identifier: String },

    /// 数字部分不是合法的非负十进制整数 (或超出 u64 范围)
    #[error("编号数字部分无效: remainder={remainder}")]
    InvalidNumeric { remainder: String },
}

// ==========================================
// NumberCodec - 编号编解码引擎
// ==========================================
pub struct NumberCodec;

impl NumberCodec {
    /// 创建新的编解码引擎
    pub fn new() -> Self {
        Self
    }

    /// 按命名规则把编号解析为序号整数
    ///
    /// 规则:
    /// - has_prefix → 编号必须以 prefix 精确开头 (区分大小写), 去除后解析剩余部分
    /// - 无前缀 → 整条编号必须是非负十进制整数
    /// - 前导零按整数值解析 ("001" → 1)
    pub fn parse(
        &self,
        identifier: &str,
        convention: &NamingConvention,
    ) -> Result<u64, ParseError> {
        let remainder = if convention.has_prefix {
            identifier
                .strip_prefix(convention.prefix.as_str())
                .ok_or_else(|| ParseError::MissingPrefix {
                    expected: convention.prefix.clone(),
                    identifier: identifier.to_string(),
                })?
        } else {
            identifier
        };

        if remainder.is_empty() {
            return Err(ParseError::EmptyNumeric {
                identifier: identifier.to_string(),
            });
        }

        // 仅接受纯数字串, 排除 "+5" / "-5" / 空白等 parse::<u64> 会放过的形态
        if !remainder.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidNumeric {
                remainder: remainder.to_string(),
            });
        }

        // 超长数字串溢出 u64 → 同样视为无效, 上游降级为不参与序号分析
        remainder
            .parse::<u64>()
            .map_err(|_| ParseError::InvalidNumeric {
                remainder: remainder.to_string(),
            })
    }

    /// 按命名规则把序号整数渲染为编号
    ///
    /// 规则:
    /// - padding_width > 0 → 左侧补 '0' 至少到 padding_width 位
    /// - 自然位数超过 padding_width 时不截断, 按完整位数渲染
    /// - has_prefix → 前置 prefix
    pub fn format(&self, value: u64, convention: &NamingConvention) -> String {
        let digits = if convention.padding_width > 0 {
            format!("{:0width$}", value, width = convention.padding_width)
        } else {
            value.to_string()
        };

        if convention.has_prefix {
            format!("{}{}", convention.prefix, digits)
        } else {
            digits
        }
    }
}

impl Default for NumberCodec {
    fn default() -> Self {
        Self::new()
    }
}
