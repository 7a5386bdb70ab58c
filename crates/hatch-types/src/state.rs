use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A state record: a value plus its acknowledgement flag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub val: Value,
    #[serde(default)]
    pub ack: bool,
}

impl State {
    pub fn new(val: impl Into<Value>, ack: bool) -> Self {
        Self {
            val: val.into(),
            ack,
        }
    }

    /// Whether this state already holds `val`.
    ///
    /// Numbers compare by numeric value, so `1` and `1.0` are the same.
    pub fn holds(&self, val: &Value) -> bool {
        match (&self.val, val) {
            (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
            (a, b) => a == b,
        }
    }
}

/// The payload handed to a state setter.
///
/// Setters accept either a bare value, acknowledged by a separate flag, or
/// a structured `{ val, ack }` whose own flag wins.
#[derive(Clone, Debug, PartialEq)]
pub enum StateInput {
    Bare(Value),
    Structured { val: Value, ack: bool },
}

impl StateInput {
    /// Resolve into a [`State`].
    ///
    /// A structured input keeps its own `ack`; a bare input takes `ack`,
    /// defaulting to `false`.
    pub fn into_state(self, ack: Option<bool>) -> State {
        match self {
            Self::Bare(val) => State {
                val,
                ack: ack.unwrap_or(false),
            },
            Self::Structured { val, ack } => State { val, ack },
        }
    }
}

impl From<Value> for StateInput {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(mut map) => {
                let ack = is_truthy(map.get("ack"));
                let val = map.remove("val").unwrap_or(Value::Null);
                Self::Structured { val, ack }
            }
            other => Self::Bare(other),
        }
    }
}

impl From<State> for StateInput {
    fn from(state: State) -> Self {
        Self::Structured {
            val: state.val,
            ack: state.ack,
        }
    }
}

impl From<bool> for StateInput {
    fn from(v: bool) -> Self {
        Self::Bare(Value::Bool(v))
    }
}

macro_rules! bare_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for StateInput {
                fn from(v: $ty) -> Self {
                    Self::Bare(Value::from(v))
                }
            }
        )*
    };
}

bare_from!(i32, i64, u32, u64, f64);

impl From<&str> for StateInput {
    fn from(v: &str) -> Self {
        Self::Bare(Value::from(v))
    }
}

impl From<String> for StateInput {
    fn from(v: String) -> Self {
        Self::Bare(Value::String(v))
    }
}

/// Loose truthiness of an optional JSON value.
///
/// Missing, `null`, `false`, `0`, `NaN` and `""` are falsy; everything
/// else, including empty arrays and objects, is truthy.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_value_uses_argument_ack() {
        let state = StateInput::from(42i64).into_state(Some(true));
        assert_eq!(state, State::new(42, true));
    }

    #[test]
    fn bare_value_defaults_ack_to_false() {
        let state = StateInput::from("on").into_state(None);
        assert_eq!(state, State::new("on", false));
    }

    #[test]
    fn structured_ack_overrides_argument() {
        let input = StateInput::from(json!({ "val": 7, "ack": false }));
        assert_eq!(input.into_state(Some(true)), State::new(7, false));

        let input = StateInput::from(json!({ "val": 7, "ack": 1 }));
        assert_eq!(input.into_state(Some(false)), State::new(7, true));
    }

    #[test]
    fn structured_without_fields() {
        let state = StateInput::from(json!({})).into_state(Some(true));
        assert_eq!(state, State::new(Value::Null, false));
    }

    #[test]
    fn arrays_stay_bare() {
        let state = StateInput::from(json!([1, 2])).into_state(Some(true));
        assert_eq!(state.val, json!([1, 2]));
        assert!(state.ack);
    }

    #[test]
    fn state_roundtrips_through_input() {
        let state = State::new(true, true);
        assert_eq!(StateInput::from(state.clone()).into_state(None), state);
    }

    #[test]
    fn holds_compares_numbers_numerically() {
        let state = State::new(1, false);
        assert!(state.holds(&json!(1.0)));
        assert!(!state.holds(&json!(2)));
        assert!(!state.holds(&json!("1")));
    }

    #[test]
    fn truthiness() {
        assert!(!is_truthy(None));
        assert!(!is_truthy(Some(&json!(null))));
        assert!(!is_truthy(Some(&json!(0))));
        assert!(!is_truthy(Some(&json!(""))));
        assert!(is_truthy(Some(&json!("x"))));
        assert!(is_truthy(Some(&json!(-1))));
        assert!(is_truthy(Some(&json!([]))));
        assert!(is_truthy(Some(&json!({}))));
    }

    #[test]
    fn ack_defaults_when_deserializing() {
        let state: State = serde_json::from_value(json!({ "val": 3 })).unwrap();
        assert_eq!(state, State::new(3, false));
    }
}
