// alphabetical reordering within each category
use crate::core::database::WordDatabase;
use crate::core::tags::collect_entry_tags;
use crate::core::types::{Category, TagSet};

impl WordDatabase {
    //1. word identifiers emit in ascending code-point order.
    //2. the receiver is never mutated; entries are cloned into the new map.
    //3. every string inside an entry's `tags` array joins the collected set.
    //4. duplicate identifiers cannot reach this point (parsing already
    //   collapsed them, last value wins).

    /// Build the normalized copy: same categories in encounter order, word
    /// identifiers re-emitted in ascending order. Returns the copy together
    /// with every tag seen while walking the entries.
    pub fn normalized(&self) -> (WordDatabase, TagSet) {
        let mut collected = TagSet::new();
        let categories = self
            .categories
            .iter()
            .map(|(name, category)| (name.clone(), sorted_category(category, &mut collected)))
            .collect();
        (WordDatabase { categories }, collected)
    }
}

fn sorted_category(category: &Category, collected: &mut TagSet) -> Category {
    let mut entries: Vec<_> = category.iter().collect();
    entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

    let mut sorted = Category::with_capacity(entries.len());
    for (identifier, entry) in entries {
        collect_entry_tags(entry, collected);
        sorted.insert(identifier.clone(), entry.clone());
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn db(value: serde_json::Value) -> WordDatabase {
        serde_json::from_value(value).expect("valid database shape")
    }

    fn identifiers(database: &WordDatabase, category: &str) -> Vec<String> {
        database
            .category(category)
            .expect("category present")
            .keys()
            .cloned()
            .collect()
    }

    #[test]
    fn identifiers_are_reordered_ascending_and_values_kept() {
        let input = db(json!({
            "animals": {
                "zebra": { "tags": ["wild"] },
                "ant": { "tags": ["insect"] }
            }
        }));

        let (sorted, collected) = input.normalized();

        assert_eq!(identifiers(&sorted, "animals"), ["ant", "zebra"]);
        let animals = sorted.category("animals").unwrap();
        assert_eq!(animals["ant"], json!({ "tags": ["insect"] }));
        assert_eq!(animals["zebra"], json!({ "tags": ["wild"] }));
        assert_eq!(
            collected,
            TagSet::from(["insect".to_string(), "wild".to_string()])
        );
        assert!(sorted.missing_tags(&collected).is_empty());
    }

    #[test]
    fn categories_keep_encounter_order_with_sorted_members() {
        let input = db(json!({
            "a": { "z": {}, "a": {} },
            "b": { "y": {}, "x": {} }
        }));

        let (sorted, _) = input.normalized();

        let names: Vec<&String> = sorted.categories().map(|(name, _)| name).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(identifiers(&sorted, "a"), ["a", "z"]);
        assert_eq!(identifiers(&sorted, "b"), ["x", "y"]);
    }

    #[test]
    fn receiver_is_not_mutated() {
        let input = db(json!({ "letters": { "b": {}, "a": {} } }));
        let before = input.clone();

        let _ = input.normalized();

        assert_eq!(input, before);
        //emission order of the receiver stays as encountered
        assert_eq!(identifiers(&input, "letters"), ["b", "a"]);
    }

    #[test]
    fn normalizing_twice_changes_nothing() {
        let input = db(json!({
            "animals": { "zebra": { "tags": ["wild"] }, "ant": {} },
            "plants": { "oak": {}, "fern": {} }
        }));

        let (once, first_tags) = input.normalized();
        let (twice, second_tags) = once.normalized();

        assert_eq!(once, twice);
        assert_eq!(first_tags, second_tags);
    }

    #[test]
    fn ordering_is_by_code_point_not_case_folded() {
        let input = db(json!({
            "mixed": { "apple": {}, "Banana": {}, "cherry": {} }
        }));

        let (sorted, _) = input.normalized();

        assert_eq!(identifiers(&sorted, "mixed"), ["Banana", "apple", "cherry"]);
    }

    #[test]
    fn entries_without_tags_are_preserved_verbatim() {
        let input = db(json!({
            "animals": { "ant": { "legs": 6, "note": "no tags here" } }
        }));

        let (sorted, collected) = input.normalized();

        assert_eq!(
            sorted.category("animals").unwrap()["ant"],
            json!({ "legs": 6, "note": "no tags here" })
        );
        assert!(collected.is_empty());
        assert!(sorted.missing_tags(&collected).is_empty());
    }
}
