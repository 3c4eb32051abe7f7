use serde::{Deserialize, Serialize};

/// Lookup record populating the admin form's category selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl Category {
    /// Display name for a category id, looked up in a fetched category list.
    pub fn name_of<'a>(categories: &'a [Category], id: &str) -> Option<&'a str> {
        categories
            .iter()
            .find(|category| category.id == id)
            .map(|category| category.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn known_id_resolves_to_its_name() {
        let categories = vec![category("cheap", "Cheap Firms"), category("top", "Top Firms")];
        assert_eq!(Category::name_of(&categories, "top"), Some("Top Firms"));
    }

    #[test]
    fn unknown_id_resolves_to_none() {
        let categories = vec![category("cheap", "Cheap Firms")];
        assert_eq!(Category::name_of(&categories, "explore"), None);
    }
}
