use contracts::domain::a001_category::tree::{load_tree, CategoryNode};
use once_cell::sync::Lazy;

/// Дерево категорий маркетплейса. Статическая конфигурация, одна на всё
/// приложение; навигатору передаётся копией при открытии окна выбора.
static CATEGORY_TREE: Lazy<Vec<CategoryNode>> = Lazy::new(|| {
    load_tree(include_str!("categories.json")).unwrap_or_else(|e| {
        log::error!("category tree is invalid: {}", e);
        Vec::new()
    })
});

pub fn category_tree() -> &'static [CategoryNode] {
    &CATEGORY_TREE
}

/// Имена недавно использованных категорий продавца.
/// TODO: брать из истории подтверждённых выборов, когда появится хранение.
pub fn recently_used() -> Vec<&'static str> {
    vec!["Digital Utilities", "Gaming Devices & Software"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_tree_is_valid() {
        let roots = category_tree();
        assert_eq!(roots.len(), 20);
        assert!(roots.iter().any(|c| c.name == "Computers & Components"));
        // Единственный ограниченный корень — цифровые товары.
        let restricted: Vec<&str> = roots
            .iter()
            .filter(|c| c.restricted)
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(restricted, vec!["Digital Utilities"]);
    }

    #[test]
    fn test_recently_used_names_exist_in_tree() {
        use contracts::domain::a001_category::tree::find_root_by_name;
        for name in recently_used() {
            assert!(
                find_root_by_name(category_tree(), name).is_some(),
                "recently used name {:?} is not a root category",
                name
            );
        }
    }
}
