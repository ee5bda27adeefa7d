// ==========================================
// 现场焊口追踪系统 - 编号规则探测引擎
// ==========================================
// 职责: 从既有焊口编号推断命名规则 (前缀 + 补零位数)
// 输入: 自由格式的编号字符串 (人工录入, 格式不一)
// 输出: NamingConvention (单条推断 / 多数票选)
// 红线: 探测失败不报错, 降级为不参与投票
// ==========================================

use crate::domain::types::NamingConvention;
use tracing::{debug, instrument};

// ==========================================
// PatternDetector - 编号规则探测引擎
// ==========================================
pub struct PatternDetector;

impl PatternDetector {
    /// 创建新的规则探测引擎
    pub fn new() -> Self {
        Self
    }

    /// 从单条编号推断命名规则
    ///
    /// 规则: 末尾最长的 ASCII 数字串为数字部分, 其余为前缀。
    /// 数字串必须是编号的后缀; 前缀内部的数字不算数字部分
    /// (如 "A1B-7" → 前缀 "A1B-", 数字 "7")。
    ///
    /// 补零位数: 数字串以 '0' 开头时取数字串长度, 否则为 0 (不强制补零)。
    ///
    /// 返回 None 当且仅当编号不含末尾数字 (如 "ABC"、"")。
    pub fn detect_single(&self, identifier: &str) -> Option<NamingConvention> {
        let prefix_len = identifier
            .trim_end_matches(|c: char| c.is_ascii_digit())
            .len();
        let (prefix, digits) = identifier.split_at(prefix_len);

        if digits.is_empty() {
            return None;
        }

        let padding_width = if digits.starts_with('0') {
            digits.len()
        } else {
            0
        };

        Some(NamingConvention::new(prefix, padding_width))
    }

    /// 选取一组编号中的主导命名规则 (多数票)
    ///
    /// 规则:
    /// 1) 对每条编号执行 detect_single, 失败者不参与投票
    /// 2) 按 (前缀, 补零位数, 是否有前缀) 分组计票
    /// 3) 票数最高的规则胜出; 平票时首次出现者优先
    /// 4) 输入为空或全部探测失败 → 回退缺省规则 "W-" + 3 位补零
    #[instrument(skip(self, identifiers), fields(count = identifiers.len()))]
    pub fn detect_dominant(&self, identifiers: &[String]) -> NamingConvention {
        // 按首次出现顺序累计票数 (平票规则依赖此顺序)
        let mut tally: Vec<(NamingConvention, usize)> = Vec::new();

        for identifier in identifiers {
            let Some(convention) = self.detect_single(identifier) else {
                debug!(identifier = %identifier, "编号不含末尾数字, 不参与规则投票");
                continue;
            };

            match tally.iter_mut().find(|(c, _)| *c == convention) {
                Some((_, votes)) => *votes += 1,
                None => tally.push((convention, 1)),
            }
        }

        // 严格大于才换人, 保证平票时首次出现者胜出
        let mut dominant: Option<&(NamingConvention, usize)> = None;
        for entry in &tally {
            if dominant.map_or(true, |(_, best)| entry.1 > *best) {
                dominant = Some(entry);
            }
        }

        match dominant {
            Some((convention, votes)) => {
                debug!(convention = %convention, votes = votes, "主导规则票选完成");
                convention.clone()
            }
            None => {
                debug!("无可用编号样本, 回退缺省规则");
                NamingConvention::default()
            }
        }
    }
}

impl Default for PatternDetector {
    fn default() -> Self {
        Self::new()
    }
}
