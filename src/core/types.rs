// shared aliases for the database shape
use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde_json::Value;

/// One category: word identifier -> opaque entry record.
pub type Category = IndexMap<String, Value>;

/// Tags gathered across the entries of a database.
pub type TagSet = BTreeSet<String>;

/// Entry key under which a word lists its tags.
pub const TAGS_FIELD: &str = "tags";
