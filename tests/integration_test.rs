use exam_convert::models::load_text_file;
use exam_convert::services::{CsvExporter, ReshapeService};
use exam_convert::ConvertProcessor;
use std::io::Write;

fn processor() -> ConvertProcessor {
    ConvertProcessor::new(false)
}

#[test]
fn test_full_exam_with_answer_key() {
    let exam_text = "\
1. 年金的现值是什么？
A. 所有付款的终值
B. 所有付款之和
C. 全部未来付款的当前价值
D. 所有付款的平均值
2. 哪个因素影响年金计算？
A. 利率
B. 付款频率
C. 期限
D. 以上都是";
    let key_text = "1. 答案\n1:C\n2:D";

    let out = processor().process(exam_text, Some(key_text));

    assert_eq!(out.questions.len(), 2);
    assert_eq!(out.questions[0].question, "年金的现值是什么？");
    assert_eq!(
        out.questions[0].correct_answer,
        "全部未来付款的当前价值"
    );
    assert_eq!(out.questions[1].correct_answer, "以上都是");
    assert_eq!(out.stats.parsed, 2);
    assert_eq!(out.stats.missing_correct, 0);
}

#[test]
fn test_inline_marker_beats_answer_key() {
    let out = processor().process("1. Q?\nA. x\nB. y*\nC. z\nD. w", Some("1:C"));

    assert_eq!(out.questions[0].correct_answer, "y");
    // 星号已从选项文本中去掉
    assert_eq!(out.questions[0].choice_b, "y");
}

#[test]
fn test_answer_key_fallback_without_marker() {
    let out = processor().process("1. Q?\nA. x\nB. y\nC. z\nD. w", Some("1:C"));

    assert_eq!(out.questions[0].correct_answer, "z");
}

#[test]
fn test_numeric_only_block_dropped() {
    let out = processor().process("5. 1999", None);

    assert!(out.questions.is_empty());
    assert_eq!(out.stats.skipped, 1);
}

#[test]
fn test_physical_order_preserved() {
    let text = "3. 丙\nA. x\n1. 甲\nA. x\n2. 乙\nA. x";

    let out = processor().process(text, None);

    let order: Vec<&str> = out.questions.iter().map(|q| q.question.as_str()).collect();
    assert_eq!(order, vec!["丙", "甲", "乙"]);
}

#[test]
fn test_duplicate_letter_last_match_wins() {
    let out = processor().process("1. Q?\nB. 第一次\nB. \"第二次\"", None);

    assert_eq!(out.questions[0].choice_b, "第二次");
}

#[test]
fn test_process_is_idempotent() {
    let text = "1. Q?\nA. x\nB. y*\n2. R?\nC. z";
    let key = Some("2:C");

    let first = processor().process(text, key);
    let second = processor().process(text, key);

    assert_eq!(first.questions, second.questions);
    assert_eq!(first.stats, second.stats);
}

#[test]
fn test_empty_and_garbage_inputs() {
    assert!(processor().process("", None).questions.is_empty());

    let garbage = processor().process("没有题号模式的纯文本", None);
    assert!(garbage.questions.is_empty());
    assert_eq!(garbage.stats.parsed, 0);
}

#[test]
fn test_crlf_input_parses_like_lf() {
    let lf = processor().process("1. Q?\nA. x\nB. y", None);
    let crlf = processor().process("1. Q?\r\nA. x\r\nB. y", None);

    assert_eq!(lf.questions, crlf.questions);
}

#[test]
fn test_pipeline_to_import_csv() {
    // 完整管道：解析 → 校验 → 重整 → 导入表 CSV
    let exam_text = "1. Q?\nA. x\nB. y*\nC. z\nD. w";
    let out = processor().process(exam_text, None);

    let reshape = ReshapeService::new("finance", true);
    reshape.validate(&out.questions).expect("完整记录应通过校验");
    let records = reshape.transform(&out.questions);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].options, "x|y|z|w");
    assert_eq!(records[0].answer, "y");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("import.csv");
    CsvExporter.write_import_table(&path, &records).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "ID,Title,Category,Type,Post Content,Status,Menu Order,Options,Answer"
    );
    assert_eq!(
        lines.next().unwrap(),
        ",Q?,finance,single-choice,Q?,publish,1,x|y|z|w,y"
    );
}

#[test]
fn test_incomplete_record_fails_import_validation() {
    // 缺正确答案的记录保留在原始表里，但过不了导入校验
    let out = processor().process("1. Q?\nA. x\nB. y\nC. z\nD. w", None);

    assert_eq!(out.questions.len(), 1);
    let reshape = ReshapeService::new("finance", true);
    assert!(reshape.validate(&out.questions).is_err());
}

#[tokio::test]
async fn test_load_text_file_roundtrip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "1. Q?\nA. x").unwrap();

    let text = load_text_file(file.path()).await.unwrap();
    let out = processor().process(&text, None);

    assert_eq!(out.questions.len(), 1);
}
