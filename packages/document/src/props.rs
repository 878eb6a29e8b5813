//! # Props access
//!
//! Reading and editing a block's property bag.
//!
//! [`PropsReader`] gives renderers typed access with per-call defaults; a
//! missing key, a wrong JSON type and an empty string all read as "absent".
//!
//! The editing helpers never touch a document. They return a *partial* props
//! map holding only the rewritten top-level key, ready to be shallow-merged
//! with `PageDocument::update_block_props`.

use crate::{PathError, Props};
use serde_json::{Map, Value};

/// Smallest and largest grid column count the layouts support
pub const MIN_COLUMNS: u8 = 1;
pub const MAX_COLUMNS: u8 = 4;

#[derive(Debug, Clone, Copy)]
pub struct PropsReader<'a> {
    props: &'a Props,
}

impl<'a> PropsReader<'a> {
    pub fn new(props: &'a Props) -> Self {
        Self { props }
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.props.get(key)
    }

    pub fn str(&self, key: &str) -> Option<&'a str> {
        self.props
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn str_or<'b>(&self, key: &str, default: &'b str) -> &'b str
    where
        'a: 'b,
    {
        self.str(key).unwrap_or(default)
    }

    pub fn f64(&self, key: &str) -> Option<f64> {
        match self.props.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn f64_or(&self, key: &str, default: f64) -> f64 {
        self.f64(key).unwrap_or(default)
    }

    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.props.get(key).and_then(Value::as_bool).unwrap_or(default)
    }

    /// Array items, or an empty slice when absent or not an array
    pub fn array(&self, key: &str) -> &'a [Value] {
        self.props
            .get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn object(&self, key: &str) -> Option<&'a Map<String, Value>> {
        self.props.get(key).and_then(Value::as_object)
    }

    /// Grid column count clamped to the supported range.
    ///
    /// Numbers outside `1..=4` snap to the nearest bound; anything that is
    /// not a number uses `default`.
    pub fn column_count(&self, key: &str, default: u8) -> u8 {
        match self.f64(key) {
            Some(n) if n.is_finite() => clamp_columns(n),
            _ => default.clamp(MIN_COLUMNS, MAX_COLUMNS),
        }
    }
}

pub fn clamp_columns(value: f64) -> u8 {
    let rounded = value.round();
    if rounded <= MIN_COLUMNS as f64 {
        MIN_COLUMNS
    } else if rounded >= MAX_COLUMNS as f64 {
        MAX_COLUMNS
    } else {
        rounded as u8
    }
}

/// One step of a path into a props bag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// Set a nested value, e.g. `["testimonials", 1, "rating"]`.
///
/// Missing object levels are created; array indices must exist (or equal
/// the length, which appends). The first segment must be a key.
pub fn set_path(props: &Props, path: &[PathSegment], value: Value) -> Result<Props, PathError> {
    let (first, rest) = path.split_first().ok_or(PathError::EmptyPath)?;
    let PathSegment::Key(top) = first else {
        return Err(PathError::NotAContainer("<props>".to_string()));
    };

    let current = props.get(top).cloned().unwrap_or(Value::Null);
    let updated = set_in(current, rest, value, top)?;

    let mut partial = Props::new();
    partial.insert(top.clone(), updated);
    Ok(partial)
}

fn set_in(current: Value, path: &[PathSegment], value: Value, at: &str) -> Result<Value, PathError> {
    let Some((segment, rest)) = path.split_first() else {
        return Ok(value);
    };

    match segment {
        PathSegment::Key(key) => {
            let mut map = match current {
                Value::Object(map) => map,
                Value::Null => Map::new(),
                _ => return Err(PathError::NotAContainer(at.to_string())),
            };
            // Take in place so the key keeps its position
            let child = map.get_mut(key).map(std::mem::take).unwrap_or(Value::Null);
            let updated = set_in(child, rest, value, key)?;
            map.insert(key.clone(), updated);
            Ok(Value::Object(map))
        }
        PathSegment::Index(index) => {
            let mut items = match current {
                Value::Array(items) => items,
                _ => return Err(PathError::NotAnArray(at.to_string())),
            };
            let len = items.len();
            if *index > len {
                return Err(PathError::IndexOutOfBounds {
                    key: at.to_string(),
                    index: *index,
                    len,
                });
            }
            if *index == len {
                items.push(set_in(Value::Null, rest, value, at)?);
            } else {
                let child = std::mem::take(&mut items[*index]);
                items[*index] = set_in(child, rest, value, at)?;
            }
            Ok(Value::Array(items))
        }
    }
}

/// Append an item to an array prop (created when absent)
pub fn push_item(props: &Props, key: &str, item: Value) -> Result<Props, PathError> {
    let mut items = array_for_edit(props, key)?;
    items.push(item);
    Ok(single(key, Value::Array(items)))
}

pub fn remove_item(props: &Props, key: &str, index: usize) -> Result<Props, PathError> {
    let mut items = array_for_edit(props, key)?;
    if index >= items.len() {
        return Err(PathError::IndexOutOfBounds {
            key: key.to_string(),
            index,
            len: items.len(),
        });
    }
    items.remove(index);
    Ok(single(key, Value::Array(items)))
}

pub fn update_item(props: &Props, key: &str, index: usize, item: Value) -> Result<Props, PathError> {
    let mut items = array_for_edit(props, key)?;
    if index >= items.len() {
        return Err(PathError::IndexOutOfBounds {
            key: key.to_string(),
            index,
            len: items.len(),
        });
    }
    items[index] = item;
    Ok(single(key, Value::Array(items)))
}

fn array_for_edit(props: &Props, key: &str) -> Result<Vec<Value>, PathError> {
    match props.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items.clone()),
        Some(_) => Err(PathError::NotAnArray(key.to_string())),
    }
}

fn single(key: &str, value: Value) -> Props {
    let mut partial = Props::new();
    partial.insert(key.to_string(), value);
    partial
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: Value) -> Props {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_reader_treats_empty_string_as_absent() {
        let p = props(json!({ "title": "", "subtitle": "Hi", "count": "3" }));
        let r = PropsReader::new(&p);

        assert_eq!(r.str_or("title", "Default"), "Default");
        assert_eq!(r.str_or("subtitle", "Default"), "Hi");
        assert_eq!(r.f64("count"), Some(3.0));
        assert!(r.array("images").is_empty());
    }

    #[test]
    fn test_column_count_clamps() {
        let p = props(json!({ "a": 0, "b": 9, "c": 2, "d": "wide", "e": -3, "f": 2.6 }));
        let r = PropsReader::new(&p);

        assert_eq!(r.column_count("a", 3), 1);
        assert_eq!(r.column_count("b", 3), 4);
        assert_eq!(r.column_count("c", 3), 2);
        assert_eq!(r.column_count("d", 3), 3);
        assert_eq!(r.column_count("e", 3), 1);
        assert_eq!(r.column_count("f", 3), 3);
        assert_eq!(r.column_count("missing", 2), 2);
    }

    #[test]
    fn test_set_path_into_array_item() {
        let p = props(json!({
            "testimonials": [ { "name": "A", "rating": 5 }, { "name": "B", "rating": 5 } ]
        }));

        let path: Vec<PathSegment> = vec!["testimonials".into(), PathSegment::Index(1), "rating".into()];
        let partial = set_path(&p, &path, json!(3)).unwrap();

        assert_eq!(partial.len(), 1);
        assert_eq!(partial["testimonials"][1]["rating"], json!(3));
        assert_eq!(partial["testimonials"][0]["rating"], json!(5));
    }

    #[test]
    fn test_set_path_creates_missing_objects() {
        let p = Props::new();
        let path: Vec<PathSegment> = vec!["hours".into(), "monday".into()];
        let partial = set_path(&p, &path, json!("Closed")).unwrap();
        assert_eq!(partial["hours"], json!({ "monday": "Closed" }));
    }

    #[test]
    fn test_set_path_errors() {
        let p = props(json!({ "title": "x", "items": [] }));

        assert_eq!(set_path(&p, &[], json!(1)), Err(PathError::EmptyPath));
        assert!(matches!(
            set_path(&p, &["title".into(), "deep".into()], json!(1)),
            Err(PathError::NotAContainer(_))
        ));
        assert!(matches!(
            set_path(&p, &["items".into(), PathSegment::Index(3)], json!(1)),
            Err(PathError::IndexOutOfBounds { index: 3, len: 0, .. })
        ));
    }

    #[test]
    fn test_array_item_helpers() {
        let p = props(json!({ "images": [ { "src": "a" }, { "src": "b" } ] }));

        let pushed = push_item(&p, "images", json!({ "src": "c" })).unwrap();
        assert_eq!(pushed["images"].as_array().unwrap().len(), 3);

        let removed = remove_item(&p, "images", 0).unwrap();
        assert_eq!(removed["images"], json!([ { "src": "b" } ]));

        let updated = update_item(&p, "images", 1, json!({ "src": "z" })).unwrap();
        assert_eq!(updated["images"][1]["src"], json!("z"));

        assert!(remove_item(&p, "images", 5).is_err());
        assert!(push_item(&props(json!({ "images": 3 })), "images", json!(1)).is_err());
        assert_eq!(push_item(&Props::new(), "fields", json!(1)).unwrap()["fields"], json!([1]));
    }
}
