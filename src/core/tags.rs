// tag scanning + post-sort audit
use std::ops::Sub;

use serde_json::Value;

use crate::core::database::WordDatabase;
use crate::core::types::{TAGS_FIELD, TagSet};

/// Add every string in `entry`'s `tags` array to `tags`. Entries without a
/// `tags` list contribute nothing, as do non-string elements inside one.
pub(crate) fn collect_entry_tags(entry: &Value, tags: &mut TagSet) {
    let Some(Value::Array(list)) = entry.as_object().and_then(|obj| obj.get(TAGS_FIELD)) else {
        return;
    };
    for tag in list {
        if let Some(tag) = tag.as_str() {
            tags.insert(tag.to_string());
        }
    }
}

impl WordDatabase {
    /// Scan every entry and return the set of tags actually present.
    pub fn tag_set(&self) -> TagSet {
        let mut tags = TagSet::new();
        for category in self.categories.values() {
            for entry in category.values() {
                collect_entry_tags(entry, &mut tags);
            }
        }
        tags
    }

    /// Tags seen during the sort pass that no longer appear in `self`.
    //sorting never drops entries, so a non-empty result means a logic defect
    //upstream; callers surface it, they do not repair it.
    pub fn missing_tags(&self, collected: &TagSet) -> TagSet {
        collected.sub(&self.tag_set())
    }
}
