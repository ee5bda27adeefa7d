// ==========================================
// 现场焊口追踪系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、值类型
// 红线: 不含数据访问逻辑, 不含引擎逻辑
// ==========================================

pub mod types;
pub mod weld;

// 重导出核心类型
pub use types::{NamingConvention, WeldStatus};
pub use weld::FieldWeld;
