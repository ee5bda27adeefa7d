// ==========================================
// 现场焊口追踪系统 - 引擎层
// ==========================================
// 职责: 实现焊口编号推断规则, 不触碰存储
// 红线: 引擎纯函数无状态, 所有规则必须输出 reason
// ==========================================

pub mod codec;
pub mod pattern;
pub mod proposal;
pub mod sequence;

// 重导出核心引擎
pub use codec::{NumberCodec, ParseError};
pub use pattern::PatternDetector;
pub use proposal::{NumberingOrchestrator, WeldNumberProposal};
pub use sequence::{NextValue, NextValueKind, SequenceAnalyzer};
