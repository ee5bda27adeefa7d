// ==========================================
// 现场焊口追踪系统 - 核心库
// ==========================================
// 系统定位: 现场焊口登记与编号决策支持
// 红线: 引擎纯函数无状态, 所有推断必须输出 reason
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 编号推断规则
pub mod engine;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{NamingConvention, WeldStatus};

// 领域实体
pub use domain::FieldWeld;

// 引擎
pub use engine::{
    NextValue, NextValueKind, NumberCodec, NumberingOrchestrator, ParseError, PatternDetector,
    SequenceAnalyzer, WeldNumberProposal,
};
