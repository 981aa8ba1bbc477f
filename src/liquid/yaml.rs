use liquid::model::Value as LiquidValue;
use serde_yaml::Value as YamlValue;

use crate::front_matter::Metadata;

/// Convert YAML value to Liquid value
pub fn yaml_to_liquid(yaml: &YamlValue) -> LiquidValue {
    match yaml {
        YamlValue::Null => LiquidValue::Nil,
        YamlValue::Bool(b) => LiquidValue::scalar(*b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                LiquidValue::scalar(i)
            } else if let Some(f) = n.as_f64() {
                LiquidValue::scalar(f)
            } else {
                LiquidValue::scalar(n.to_string())
            }
        }
        YamlValue::String(s) => LiquidValue::scalar(s.clone()),
        YamlValue::Sequence(seq) => LiquidValue::Array(seq.iter().map(yaml_to_liquid).collect()),
        YamlValue::Mapping(map) => LiquidValue::Object(mapping_to_object(map)),
        YamlValue::Tagged(tagged) => yaml_to_liquid(&tagged.value),
    }
}

/// Convert a YAML mapping into a Liquid object, stringifying scalar keys
pub fn mapping_to_object(map: &Metadata) -> liquid::Object {
    let mut obj = liquid::Object::new();
    for (k, v) in map {
        if let Some(key) = key_string(k) {
            obj.insert(key.into(), yaml_to_liquid(v));
        }
    }
    obj
}

/// Key name for a YAML mapping key; `None` for keys no template could name
pub fn key_string(key: &YamlValue) -> Option<String> {
    match key {
        YamlValue::String(s) => Some(s.clone()),
        YamlValue::Number(n) => Some(n.to_string()),
        YamlValue::Bool(b) => Some(b.to_string()),
        YamlValue::Tagged(tagged) => key_string(&tagged.value),
        _ => None,
    }
}
