use super::*;

#[test]
fn parses_strokes() {
    let script = StrokeScript::from_json(r#"{"strokes": [[[1, 2], [3.5, 4]], [[10, 10]]]}"#).expect("parse");
    assert_eq!(script.strokes.len(), 2);
    assert_eq!(script.strokes[0], vec![[1.0, 2.0], [3.5, 4.0]]);
    assert_eq!(script.point_count(), 3);
}

#[test]
fn empty_strokes_list_is_valid() {
    let script = StrokeScript::from_json(r#"{"strokes": []}"#).expect("parse");
    assert_eq!(script, StrokeScript::default());
    assert_eq!(script.point_count(), 0);
}

#[test]
fn rejects_missing_strokes_field() {
    let err = StrokeScript::from_json("{}").expect_err("missing field");
    assert!(matches!(err, ScriptError::Json(_)));
}

#[test]
fn rejects_malformed_point() {
    assert!(StrokeScript::from_json(r#"{"strokes": [[[1, 2, 3]]]}"#).is_err());
    assert!(StrokeScript::from_json(r#"{"strokes": [[["a", 2]]]}"#).is_err());
}

#[test]
fn error_message_mentions_script() {
    let err = StrokeScript::from_json("not json").expect_err("bad json");
    assert!(err.to_string().starts_with("invalid stroke script"));
}
