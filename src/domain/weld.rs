// ==========================================
// 现场焊口追踪系统 - 焊口实体
// ==========================================
// 职责: 定义现场焊口登记记录
// 红线: 不含数据访问逻辑, 不含引擎逻辑
// ==========================================

use crate::domain::types::WeldStatus;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// FieldWeld - 现场焊口记录
// ==========================================
// 编号引擎消费的实体: weld_number 为自由格式的人工编号,
// 同一项目内的编号集合是规则推断的输入。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldWeld {
    /// 焊口编号 (自由格式, 如 "FW-01" / "W-001" / "42")
    pub weld_number: String,

    /// 所属项目 ID (编号推断的作用域)
    pub project_id: String,

    /// 图纸/单线图号
    pub drawing_number: Option<String>,

    /// 管线号
    pub line_number: Option<String>,

    /// 管径 (mm)
    pub pipe_diameter_mm: Option<f64>,

    /// 壁厚 (mm)
    pub wall_thickness_mm: Option<f64>,

    /// 材质等级
    pub pipe_spec: Option<String>,

    /// 焊工代号
    pub welder_id: Option<String>,

    /// 焊接日期
    pub date_welded: Option<NaiveDate>,

    /// 检验日期
    pub date_inspected: Option<NaiveDate>,

    /// 焊口状态
    pub status: WeldStatus,

    /// 备注
    pub comments: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FieldWeld {
    /// 创建新登记的焊口 (仅编号与项目必填, 其余待现场补录)
    pub fn new(weld_number: impl Into<String>, project_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            weld_number: weld_number.into(),
            project_id: project_id.into(),
            drawing_number: None,
            line_number: None,
            pipe_diameter_mm: None,
            wall_thickness_mm: None,
            pipe_spec: None,
            welder_id: None,
            date_welded: None,
            date_inspected: None,
            status: WeldStatus::Pending,
            comments: None,
            created_at: now,
            updated_at: now,
        }
    }
}
