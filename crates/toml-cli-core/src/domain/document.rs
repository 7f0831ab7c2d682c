//! Format-preserving TOML documents addressed by [`Query`].
//!
//! Reads never panic on a missing key. Writes keep the formatting of
//! everything they do not touch.

use std::fmt;
use std::str::FromStr;

use toml_edit::{ArrayOfTables, DocumentMut, InlineTable, Item, Table, Value, value};

use crate::domain::{
    error::DomainError,
    query::{PathSegment, Query},
};

/// How `set` turns its string argument into a TOML value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValueKind {
    /// Integer if it parses as one, then boolean, otherwise string.
    #[default]
    Auto,
    String,
    Integer,
    Float,
    Bool,
}

impl ValueKind {
    /// Convert `raw` into a TOML item of this kind.
    pub fn to_item(self, raw: &str) -> Result<Item, DomainError> {
        let invalid = |kind: &'static str| DomainError::InvalidValue {
            value: raw.to_string(),
            kind,
        };
        match self {
            Self::Auto => Ok(detect_value(raw)),
            Self::String => Ok(value(raw)),
            Self::Integer => raw.parse::<i64>().map(value).map_err(|_| invalid("integer")),
            Self::Float => raw.parse::<f64>().map(value).map_err(|_| invalid("float")),
            Self::Bool => raw.parse::<bool>().map(value).map_err(|_| invalid("boolean")),
        }
    }
}

fn detect_value(raw: &str) -> Item {
    if let Ok(i) = raw.parse::<i64>() {
        value(i)
    } else if let Ok(b) = raw.parse::<bool>() {
        value(b)
    } else {
        value(raw)
    }
}

/// A parsed TOML document.
#[derive(Debug, Clone)]
pub struct TomlDocument {
    doc: DocumentMut,
}

impl TomlDocument {
    /// Parse TOML text.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        text.parse::<DocumentMut>()
            .map(|doc| Self { doc })
            .map_err(|e| DomainError::InvalidDocument {
                reason: e.to_string().trim_end().to_string(),
            })
    }

    /// `true` when every segment of `query` resolves.
    pub fn contains(&self, query: &Query) -> bool {
        self.lookup(query).is_ok()
    }

    /// The item at `query`.
    ///
    /// # Errors
    ///
    /// [`DomainError::KeyNotFound`] for a missing key or an out-of-range
    /// index, [`DomainError::NotArray`] for an index into anything else.
    pub fn lookup(&self, query: &Query) -> Result<&Item, DomainError> {
        let mut item = self.doc.as_item();
        for segment in query.segments() {
            item = step(item, segment, query)?;
        }
        Ok(item)
    }

    /// Render the item at `query` as a standalone TOML document holding only
    /// the path down to it.
    pub fn fragment(&self, query: &Query) -> Result<String, DomainError> {
        let unsupported = || DomainError::UnsupportedFragment {
            query: query.to_string(),
        };

        let mut item = self.doc.as_item();
        let mut breadcrumbs = Vec::with_capacity(query.segments().len());
        for segment in query.segments() {
            breadcrumbs.push((item, segment));
            item = step(item, segment, query)?;
        }

        let mut item = item.clone();
        while let Some((parent, segment)) = breadcrumbs.pop() {
            item = match (segment, parent) {
                (PathSegment::Key(key), Item::Table(table)) => {
                    let mut next = table.clone();
                    next.clear();
                    next.insert(key, item);
                    Item::Table(next)
                }
                (PathSegment::Index(_), Item::ArrayOfTables(array)) => {
                    let Item::Table(table) = item else {
                        return Err(unsupported());
                    };
                    let mut next: ArrayOfTables = array.clone();
                    next.clear();
                    next.push(table);
                    Item::ArrayOfTables(next)
                }
                _ => return Err(unsupported()),
            };
        }

        let table: Table = item.into_table().map_err(|_| unsupported())?;
        Ok(DocumentMut::from(table).to_string())
    }

    /// Store `new_value` at `query`, creating intermediate tables.
    ///
    /// Inside inline data the intermediates are inline tables. A non-table
    /// met on the way is replaced. Index segments never extend an array.
    pub fn set(&mut self, query: &Query, new_value: Item) -> Result<(), DomainError> {
        if query.is_root() {
            return Err(DomainError::RootAssignment);
        }

        let mut item = self.doc.as_item_mut();
        let mut inline = false;

        let mut segments = query.segments().iter().peekable();
        while let Some(segment) = segments.next() {
            match segment {
                PathSegment::Index(index) => {
                    let len = match &*item {
                        Item::ArrayOfTables(array) => array.len(),
                        Item::Value(Value::Array(array)) => {
                            inline = true;
                            array.len()
                        }
                        _ => {
                            return Err(DomainError::NotArray {
                                query: query.to_string(),
                            });
                        }
                    };
                    if *index >= len {
                        return Err(DomainError::ArrayIndexOutOfBounds {
                            query: query.to_string(),
                            index: *index,
                            len,
                        });
                    }
                    item = &mut item[*index];
                }
                PathSegment::Key(key) => {
                    let descends = matches!(segments.peek(), Some(PathSegment::Key(_)));
                    match &mut *item {
                        Item::Table(table) => {
                            if descends && !is_table_like(table.get(key)) {
                                // The value's `key = ` spacing must not end up in `[key]`.
                                if let Some(mut k) = table.key_mut(key) {
                                    k.leaf_decor_mut().clear();
                                }
                            }
                        }
                        Item::Value(Value::InlineTable(_)) => inline = true,
                        _ => {
                            *item = if inline {
                                Item::Value(Value::InlineTable(InlineTable::default()))
                            } else {
                                Item::Table(Table::new())
                            };
                        }
                    }
                    item = &mut item[key.as_str()];
                }
            }
        }

        *item = new_value;
        Ok(())
    }
}

impl FromStr for TomlDocument {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TomlDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.doc)
    }
}

fn step<'a>(
    item: &'a Item,
    segment: &PathSegment,
    query: &Query,
) -> Result<&'a Item, DomainError> {
    match segment {
        PathSegment::Key(key) => item.get(key.as_str()).ok_or_else(|| not_found(query)),
        PathSegment::Index(index) => {
            if !item.is_array() && !item.is_array_of_tables() {
                return Err(DomainError::NotArray {
                    query: query.to_string(),
                });
            }
            item.get(*index).ok_or_else(|| not_found(query))
        }
    }
}

/// Absent keys count as table-like: nothing gets replaced.
fn is_table_like(item: Option<&Item>) -> bool {
    matches!(
        item,
        None | Some(Item::Table(_)) | Some(Item::Value(Value::InlineTable(_)))
    )
}

fn not_found(query: &Query) -> DomainError {
    DomainError::KeyNotFound {
        query: query.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"[a]
b = "c"
[x]
y = "z""#;

    fn q(s: &str) -> Query {
        Query::parse(s).unwrap()
    }

    fn set(doc: &str, query: &str, raw: &str) -> Result<String, DomainError> {
        let mut doc = TomlDocument::parse(doc)?;
        doc.set(&q(query), ValueKind::Auto.to_item(raw)?)?;
        Ok(doc.to_string())
    }

    #[test]
    fn detect_value_prefers_integer_then_bool() {
        let i = detect_value("abc");
        assert_eq!("string", i.type_name());
        assert_eq!(Some("abc"), i.as_str());

        let i = detect_value("123");
        assert_eq!("integer", i.type_name());
        assert_eq!(Some(123), i.as_integer());

        let i = detect_value("true");
        assert_eq!("boolean", i.type_name());
        assert_eq!(Some(true), i.as_bool());
    }

    #[test]
    fn explicit_kinds_parse_or_fail() {
        assert_eq!(ValueKind::String.to_item("123").unwrap().as_str(), Some("123"));
        assert_eq!(ValueKind::Float.to_item("1.5").unwrap().as_float(), Some(1.5));
        assert!(matches!(
            ValueKind::Integer.to_item("x"),
            Err(DomainError::InvalidValue { kind: "integer", .. })
        ));
        assert!(ValueKind::Bool.to_item("yes").is_err());
    }

    #[test]
    fn contains_reports_missing_keys_and_indexes() {
        let doc = TomlDocument::parse("a = [1, 2]\n[x]\ny = \"z\"\n").unwrap();
        assert!(doc.contains(&q("x.y")));
        assert!(doc.contains(&q("a[1]")));
        assert!(!doc.contains(&q("x.z")));
        assert!(!doc.contains(&q("a[2]")));
        assert!(!doc.contains(&q("x[0]")));
    }

    #[test]
    fn lookup_index_into_table_is_not_array() {
        let doc = TomlDocument::parse("[a]\nb = 1\n").unwrap();
        assert_eq!(
            doc.lookup(&q("a[0]")).unwrap_err(),
            DomainError::NotArray { query: "a[0]".into() }
        );
        assert_eq!(
            doc.lookup(&q("a.b[0]")).unwrap_err(),
            DomainError::NotArray { query: "a.b[0]".into() }
        );
    }

    #[test]
    fn lookup_past_the_end_is_not_found() {
        let doc = TomlDocument::parse("a = [1]\n").unwrap();
        assert_eq!(
            doc.lookup(&q("a[1]")).unwrap_err(),
            DomainError::KeyNotFound { query: "a[1]".into() }
        );
    }

    #[test]
    fn lookup_missing_key_is_an_error_not_a_panic() {
        let doc = TomlDocument::parse(BODY).unwrap();
        assert_eq!(
            doc.lookup(&q("x.z")).unwrap_err(),
            DomainError::KeyNotFound { query: "x.z".into() }
        );
    }

    #[test]
    fn invalid_toml_is_reported() {
        assert!(matches!(
            TomlDocument::parse("a = "),
            Err(DomainError::InvalidDocument { .. })
        ));
    }

    #[test]
    fn set_replaces_existing_value() {
        assert_eq!(
            set(BODY, "x.y", "new").unwrap(),
            "[a]\nb = \"c\"\n[x]\ny = \"new\"\n"
        );
    }

    #[test]
    fn set_adds_typed_values() {
        assert_eq!(
            set(BODY, "x.z", "123").unwrap(),
            "[a]\nb = \"c\"\n[x]\ny = \"z\"\nz = 123\n"
        );
        assert_eq!(
            set(BODY, "x.z", "false").unwrap(),
            "[a]\nb = \"c\"\n[x]\ny = \"z\"\nz = false\n"
        );
    }

    #[test]
    fn set_creates_missing_tables() {
        let out = set("", "package.metadata.name", "demo").unwrap();
        let doc = TomlDocument::parse(&out).unwrap();
        assert_eq!(
            doc.lookup(&q("package.metadata.name")).unwrap().as_str(),
            Some("demo")
        );
    }

    #[test]
    fn set_inside_inline_table_stays_inline() {
        let out = set("dep = { version = \"1\" }\n", "dep.features", "x").unwrap();
        assert!(out.starts_with("dep = {"), "{out}");
        let doc = TomlDocument::parse(&out).unwrap();
        assert_eq!(doc.lookup(&q("dep.features")).unwrap().as_str(), Some("x"));
    }

    #[test]
    fn set_indexes_existing_array_elements_only() {
        let out = set("a = [1, 2]\n", "a[1]", "5").unwrap();
        let doc = TomlDocument::parse(&out).unwrap();
        assert_eq!(doc.lookup(&q("a[1]")).unwrap().as_integer(), Some(5));

        assert!(matches!(
            set("a = [1, 2]\n", "a[2]", "5"),
            Err(DomainError::ArrayIndexOutOfBounds { index: 2, len: 2, .. })
        ));
        assert!(matches!(
            set(BODY, "x[0]", "5"),
            Err(DomainError::NotArray { .. })
        ));
    }

    #[test]
    fn set_through_a_value_replaces_it_with_a_table() {
        assert_eq!(
            set("x = 1\n[a]\nb = 2\n", "x.y", "3").unwrap(),
            "[x]\ny = 3\n[a]\nb = 2\n"
        );

        let out = set("[a]\nb = 2\n", "a.b.c", "3").unwrap();
        assert!(out.contains("[a.b]\nc = 3\n"), "{out}");
        assert!(!out.contains("b = 2"), "{out}");
        let doc = TomlDocument::parse(&out).unwrap();
        assert_eq!(doc.lookup(&q("a.b.c")).unwrap().as_integer(), Some(3));
    }

    #[test]
    fn set_rejects_root() {
        assert_eq!(set(BODY, ".", "1"), Err(DomainError::RootAssignment));
    }

    #[test]
    fn fragment_keeps_only_the_path() {
        let doc = TomlDocument::parse(BODY).unwrap();
        let fragment = doc.fragment(&q("x.y")).unwrap();
        let reparsed = TomlDocument::parse(&fragment).unwrap();
        assert_eq!(reparsed.lookup(&q("x.y")).unwrap().as_str(), Some("z"));
        assert!(!reparsed.contains(&q("a")));
    }

    #[test]
    fn fragment_through_array_of_tables() {
        let doc = TomlDocument::parse("[[bin]]\nname = \"a\"\n[[bin]]\nname = \"b\"\n").unwrap();
        let fragment = doc.fragment(&q("bin[1].name")).unwrap();
        assert_eq!(fragment, "[[bin]]\nname = \"b\"\n");
    }

    #[test]
    fn fragment_inside_inline_data_is_unsupported() {
        let doc = TomlDocument::parse("a = { b = 1 }\n").unwrap();
        assert!(matches!(
            doc.fragment(&q("a.b")),
            Err(DomainError::UnsupportedFragment { .. })
        ));
    }
}
