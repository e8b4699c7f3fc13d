use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value;

use crate::I18nError;

/// A template argument value.
#[derive(Clone, Debug, PartialEq)]
pub enum ArgValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl ArgValue {
    pub(crate) fn render(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => format_float(*f),
            Self::Bool(b) => b.to_string(),
        }
    }

    fn into_json(self) -> Value {
        match self {
            Self::Str(s) => Value::String(s),
            Self::Int(i) => Value::from(i),
            Self::Float(f) => Value::from(f),
            Self::Bool(b) => Value::Bool(b),
        }
    }
}

impl From<String> for ArgValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for ArgValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<i64> for ArgValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for ArgValue {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<usize> for ArgValue {
    fn from(v: usize) -> Self {
        Self::Int(v as i64)
    }
}

impl From<f64> for ArgValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<f32> for ArgValue {
    fn from(v: f32) -> Self {
        Self::Float(v as f64)
    }
}

impl From<bool> for ArgValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

/// Data a message template is rendered against.
///
/// Two shapes are accepted: an explicit named-argument list (built with
/// [`TemplateData::arg`] or the [`args!`](crate::args!) macro), or an
/// arbitrary JSON object, typically derived from a `Serialize` struct via
/// [`TemplateData::from_serialize`]. Both answer placeholder lookups by
/// name.
#[derive(Clone, Debug, PartialEq)]
pub enum TemplateData {
    Args(Vec<(Cow<'static, str>, ArgValue)>),
    Json(Value),
}

impl TemplateData {
    pub fn new() -> Self {
        Self::Args(Vec::new())
    }

    /// Append a named argument.
    pub fn arg(self, name: impl Into<Cow<'static, str>>, value: impl Into<ArgValue>) -> Self {
        match self {
            Self::Args(mut args) => {
                args.push((name.into(), value.into()));
                Self::Args(args)
            }
            Self::Json(json) => {
                let mut map = match json {
                    Value::Object(map) => map,
                    _ => serde_json::Map::new(),
                };
                map.insert(name.into().into_owned(), value.into().into_json());
                Self::Json(Value::Object(map))
            }
        }
    }

    /// Build template data from any serializable value; struct fields become
    /// placeholder names.
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self, I18nError> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Args(args) => args.is_empty(),
            Self::Json(Value::Object(map)) => map.is_empty(),
            Self::Json(_) => true,
        }
    }

    /// Look up a placeholder by name, stringified for substitution.
    pub fn value_of(&self, name: &str) -> Option<String> {
        match self {
            Self::Args(args) => args
                .iter()
                .find(|(k, _)| k.as_ref() == name)
                .map(|(_, v)| v.render()),
            Self::Json(value) => value.get(name).map(render_json),
        }
    }
}

impl Default for TemplateData {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Value> for TemplateData {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

fn render_json(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                format_float(n.as_f64().unwrap_or(0.0))
            }
        }
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

// Keep it simple; formatting control is a future concern.
fn format_float(f: f64) -> String {
    let mut s = f.to_string();
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}

/// Build named template arguments.
///
/// Examples:
/// - `args! {}`
/// - `args! { name: user_name, count: 3 }`
#[macro_export]
macro_rules! args {
    () => {
        $crate::TemplateData::new()
    };
    ($($name:ident : $value:expr),* $(,)?) => {{
        let mut data = $crate::TemplateData::new();
        $(
            data = data.arg(stringify!($name), $value);
        )*
        data
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn named_args_lookup() {
        let data = TemplateData::new().arg("name", "Ada").arg("count", 3);
        assert_eq!(data.value_of("name").as_deref(), Some("Ada"));
        assert_eq!(data.value_of("count").as_deref(), Some("3"));
        assert_eq!(data.value_of("missing"), None);
        assert!(!data.is_empty());
    }

    #[test]
    fn args_macro_builds_named_args() {
        let user = "Ada";
        let data = args! { name: user, ratio: 0.5, on: true };
        assert_eq!(data.value_of("name").as_deref(), Some("Ada"));
        assert_eq!(data.value_of("ratio").as_deref(), Some("0.5"));
        assert_eq!(data.value_of("on").as_deref(), Some("true"));
        assert!(args! {}.is_empty());
    }

    #[test]
    fn serialized_struct_fields_become_placeholders() {
        #[derive(Serialize)]
        struct Greeting {
            name: &'static str,
            visits: u32,
        }

        let data = TemplateData::from_serialize(&Greeting {
            name: "Grace",
            visits: 2,
        })
        .unwrap();
        assert_eq!(data.value_of("name").as_deref(), Some("Grace"));
        assert_eq!(data.value_of("visits").as_deref(), Some("2"));
    }

    #[test]
    fn json_scalars_stringify_without_quotes() {
        let data = TemplateData::from(serde_json::json!({
            "s": "text",
            "i": 7,
            "f": 1.250,
            "b": false,
        }));
        assert_eq!(data.value_of("s").as_deref(), Some("text"));
        assert_eq!(data.value_of("i").as_deref(), Some("7"));
        assert_eq!(data.value_of("f").as_deref(), Some("1.25"));
        assert_eq!(data.value_of("b").as_deref(), Some("false"));
    }

    #[test]
    fn non_object_json_counts_as_empty() {
        assert!(TemplateData::from(Value::Null).is_empty());
        assert!(TemplateData::from(serde_json::json!([1, 2])).is_empty());
        assert!(!TemplateData::from(serde_json::json!({"k": 1})).is_empty());
    }

    #[test]
    fn arg_extends_json_backed_data() {
        let data = TemplateData::from(serde_json::json!({"a": 1})).arg("b", "two");
        assert_eq!(data.value_of("a").as_deref(), Some("1"));
        assert_eq!(data.value_of("b").as_deref(), Some("two"));
    }

    #[test]
    fn float_rendering_trims_trailing_zeroes() {
        let half: ArgValue = 0.5f64.into();
        assert_eq!(half.render(), "0.5");
        let whole: ArgValue = 4.0f64.into();
        assert_eq!(whole.render(), "4");
    }
}
