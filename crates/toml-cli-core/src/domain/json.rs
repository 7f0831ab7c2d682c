//! JSON views over TOML items.
//!
//! Tables map to objects, arrays and arrays of tables map to arrays.
//! Datetimes have no JSON counterpart and are written as their TOML text.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use toml_edit::{Item, Table, Value};

/// Serializes a borrowed [`Item`] as JSON-compatible data.
pub struct JsonItem<'a>(pub &'a Item);

impl Serialize for JsonItem<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Item::Value(v) => JsonValue(v).serialize(serializer),
            Item::Table(t) => JsonTable(t).serialize(serializer),
            Item::ArrayOfTables(a) => {
                let mut seq = serializer.serialize_seq(Some(a.len()))?;
                for t in a.iter() {
                    seq.serialize_element(&JsonTable(t))?;
                }
                seq.end()
            }
            Item::None => serializer.serialize_none(),
        }
    }
}

struct JsonTable<'a>(&'a Table);

impl Serialize for JsonTable<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in self.0.iter() {
            map.serialize_entry(k, &JsonItem(v))?;
        }
        map.end()
    }
}

struct JsonValue<'a>(&'a Value);

impl Serialize for JsonValue<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let v = self.0;
        if let Some(i) = v.as_integer() {
            i.serialize(serializer)
        } else if let Some(f) = v.as_float() {
            f.serialize(serializer)
        } else if let Some(b) = v.as_bool() {
            b.serialize(serializer)
        } else if let Some(s) = v.as_str() {
            s.serialize(serializer)
        } else if let Some(dt) = v.as_datetime() {
            serializer.serialize_str(&dt.to_string())
        } else if let Some(arr) = v.as_array() {
            let mut seq = serializer.serialize_seq(Some(arr.len()))?;
            for e in arr.iter() {
                seq.serialize_element(&JsonValue(e))?;
            }
            seq.end()
        } else if let Some(t) = v.as_inline_table() {
            let mut map = serializer.serialize_map(Some(t.len()))?;
            for (k, e) in t.iter() {
                map.serialize_entry(k, &JsonValue(e))?;
            }
            map.end()
        } else {
            serializer.serialize_none()
        }
    }
}
