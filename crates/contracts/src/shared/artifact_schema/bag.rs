//! Free-form JSON bags (`details`, `measurements`)

use serde_json::{Map, Value};

pub type Bag = Map<String, Value>;

/// Copy of `bag` with only `key` replaced. Sibling keys are kept as they are.
pub fn apply_change(bag: &Bag, key: &str, value: Value) -> Bag {
    let mut next = bag.clone();
    next.insert(key.to_string(), value);
    next
}

/// Text shown in an input control for a stored value. Missing and `null`
/// values show as the empty string.
pub fn value_as_input(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bag(v: Value) -> Bag {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn change_keeps_siblings() {
        let before = bag(json!({"height": "12", "height_unit": "cm", "legacy": {"a": 1}}));
        let after = apply_change(&before, "height", json!("13"));
        assert_eq!(after.get("height"), Some(&json!("13")));
        assert_eq!(after.get("height_unit"), Some(&json!("cm")));
        assert_eq!(after.get("legacy"), Some(&json!({"a": 1})));
        // source untouched
        assert_eq!(before.get("height"), Some(&json!("12")));
    }

    #[test]
    fn change_adds_missing_key() {
        let after = apply_change(&Bag::new(), "pore", json!(2));
        assert_eq!(after.len(), 1);
        assert_eq!(after.get("pore"), Some(&json!(2)));
    }

    #[test]
    fn input_text_of_values() {
        assert_eq!(value_as_input(None), "");
        assert_eq!(value_as_input(Some(&Value::Null)), "");
        assert_eq!(value_as_input(Some(&json!("Roma"))), "Roma");
        assert_eq!(value_as_input(Some(&json!(3))), "3");
        assert_eq!(value_as_input(Some(&json!(2.5))), "2.5");
    }
}
