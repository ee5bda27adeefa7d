// ==========================================
// 编号推断引擎集成测试
// ==========================================
// 测试目标: 验证规则票选、编解码、缺口分析与提案编排的端到端行为
// 覆盖范围: 缺省回退 / 顺延 / 补缺口 / 高位起编 / 混合格式 / 输入乱序
// ==========================================

use field_weld_tracker::domain::types::NamingConvention;
use field_weld_tracker::engine::{NumberCodec, NumberingOrchestrator};
use field_weld_tracker::{FieldWeld, WeldStatus};

// ==========================================
// 测试辅助函数
// ==========================================

/// 把字面量列表转为编号快照
fn snapshot(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

/// 提案下一个编号
fn propose(raw: &[&str]) -> String {
    NumberingOrchestrator::new().propose_next_identifier(&snapshot(raw))
}

// ==========================================
// 测试用例 1: 空输入回退缺省规则
// ==========================================

#[test]
fn test_empty_snapshot_proposes_default() {
    assert_eq!(propose(&[]), "W-001");
}

#[test]
fn test_all_garbage_snapshot_proposes_default() {
    // 全部无法解析 → 回退缺省规则, 仍然给出合法提案
    assert_eq!(propose(&["ABC", "DEF", ""]), "W-001");
}

// ==========================================
// 测试用例 2: 连续序列顺延
// ==========================================

#[test]
fn test_contiguous_sequence_increments() {
    assert_eq!(propose(&["FW-01", "FW-02", "FW-03"]), "FW-04");
}

#[test]
fn test_numeric_only_without_padding() {
    assert_eq!(propose(&["1", "2", "3"]), "4");
}

// ==========================================
// 测试用例 3: 缺口补位
// ==========================================

#[test]
fn test_lowest_gap_filled_first() {
    assert_eq!(propose(&["FW-01", "FW-03", "FW-05"]), "FW-02");
}

#[test]
fn test_gap_fill_preserves_leading_zeros() {
    assert_eq!(propose(&["W-001", "W-003", "W-010"]), "W-002");
}

#[test]
fn test_numeric_only_with_padding_fills_gap() {
    assert_eq!(propose(&["001", "002", "004"]), "003");
}

// ==========================================
// 测试用例 4: 高位起编特例
// ==========================================

#[test]
fn test_high_contiguous_run_is_not_backfilled() {
    // 98-100 连续无缺口 → 有意从高位起编, 顺延而非回填 1
    assert_eq!(propose(&["FW-098", "FW-099", "FW-100"]), "FW-101");
}

#[test]
fn test_single_high_weld_is_not_backfilled() {
    // 单元素集合无内部缺口 → 同样顺延
    assert_eq!(propose(&["FW-050"]), "FW-051");
}

#[test]
fn test_high_run_with_gap_backfills_from_one() {
    // 高位起编但内部有缺口 → 从最低处补起
    assert_eq!(propose(&["FW-05", "FW-07", "FW-08"]), "FW-01");
}

// ==========================================
// 测试用例 5: 混合格式多数票
// ==========================================

#[test]
fn test_majority_convention_wins() {
    // FW-## 3 票 against W-### 2 票
    assert_eq!(
        propose(&["FW-01", "FW-02", "FW-03", "W-001", "W-002"]),
        "FW-04"
    );
}

#[test]
fn test_minority_entries_do_not_block_gap_detection() {
    // 少数派编号被排除, 不占用序号也不阻断缺口分析
    assert_eq!(propose(&["FW-01", "FW-03", "W-999"]), "FW-02");
}

#[test]
fn test_duplicates_tolerated() {
    assert_eq!(propose(&["FW-01", "FW-01", "FW-02"]), "FW-03");
}

// ==========================================
// 测试用例 6: 输入乱序不影响结果
// ==========================================

#[test]
fn test_result_independent_of_input_order() {
    let base = ["W-001", "W-003", "W-010"];
    let expected = propose(&base);

    let permutations = [
        ["W-003", "W-001", "W-010"],
        ["W-010", "W-003", "W-001"],
        ["W-001", "W-010", "W-003"],
    ];
    for perm in &permutations {
        assert_eq!(propose(perm), expected, "order changed result: {perm:?}");
    }
}

// ==========================================
// 测试用例 7: 编解码往返不变式
// ==========================================

#[test]
fn test_format_parse_round_trip() {
    let codec = NumberCodec::new();
    let conventions = [
        NamingConvention::default(),
        NamingConvention::new("FW-", 2),
        NamingConvention::new("SW-", 4),
        NamingConvention::numeric(0),
        NamingConvention::numeric(3),
    ];
    for conv in &conventions {
        for value in [0u64, 1, 9, 10, 99, 100, 101, 4096] {
            let rendered = codec.format(value, conv);
            assert_eq!(codec.parse(&rendered, conv), Ok(value));
        }
    }
}

#[test]
fn test_format_never_truncates() {
    let codec = NumberCodec::new();
    let conv = NamingConvention::new("FW-", 2);
    assert_eq!(codec.format(100, &conv), "FW-100");
}

// ==========================================
// 测试用例 8: 从焊口记录提案
// ==========================================

#[test]
fn test_propose_from_weld_records() {
    let orchestrator = NumberingOrchestrator::new();

    let mut welds = vec![
        FieldWeld::new("W-001", "P-2001"),
        FieldWeld::new("W-002", "P-2001"),
        FieldWeld::new("W-004", "P-2001"),
    ];
    welds[1].status = WeldStatus::Welded;

    // 状态不影响编号推断, 只消费 weld_number
    assert_eq!(orchestrator.propose_for_welds(&welds), "W-003");
}
