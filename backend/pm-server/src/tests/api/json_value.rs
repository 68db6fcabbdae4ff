use crate::api::json_value;

use serde_json::json;

#[test]
fn test_number_keeps_numbers_only() {
    assert_eq!(json_value::number(Some(&json!(42.6))), Some(42.6));
    assert_eq!(json_value::number(Some(&json!(7))), Some(7.0));
    assert_eq!(json_value::number(Some(&json!("50"))), None);
    assert_eq!(json_value::number(Some(&json!(null))), None);
    assert_eq!(json_value::number(None), None);
}

#[test]
fn test_string_list_ignores_non_strings() {
    let values = vec![json!("a"), json!(3), json!(null), json!("b")];

    assert_eq!(
        json_value::string_list(Some(values.as_slice())),
        Some(vec!["a".to_string(), "b".to_string()])
    );
    assert_eq!(json_value::string_list(None), None);
}

#[test]
fn test_integer_truncates_floats() {
    assert_eq!(json_value::integer(Some(&json!(3))), Some(3));
    assert_eq!(json_value::integer(Some(&json!(2.9))), Some(2));
    assert_eq!(json_value::integer(Some(&json!("3"))), None);
}
