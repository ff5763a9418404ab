use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ============================================================================
// Category tree node
// ============================================================================

/// Узел статического дерева категорий маркетплейса.
///
/// Дерево конечное и ациклическое: это конфигурационные данные,
/// пользователь их не редактирует.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryNode {
    /// Глобально уникальный идентификатор (не только среди соседей).
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CategoryNode>,
    /// Информационный флаг: категория требует отдельной авторизации
    /// продавца. На выбор не влияет, только на отображение.
    #[serde(default)]
    pub restricted: bool,
}

impl CategoryNode {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Разбирает дерево категорий из JSON и проверяет глобальную
/// уникальность идентификаторов.
pub fn load_tree(json: &str) -> Result<Vec<CategoryNode>, String> {
    let roots: Vec<CategoryNode> =
        serde_json::from_str(json).map_err(|e| format!("invalid category tree: {}", e))?;
    validate_unique_ids(&roots)?;
    Ok(roots)
}

/// Проверяет, что все id в дереве глобально уникальны.
/// Поиск по id предполагает уникальность во всём дереве.
pub fn validate_unique_ids(roots: &[CategoryNode]) -> Result<(), String> {
    fn walk<'a>(nodes: &'a [CategoryNode], seen: &mut HashSet<&'a str>) -> Result<(), String> {
        for node in nodes {
            if !seen.insert(node.id.as_str()) {
                return Err(format!("duplicate category id: {}", node.id));
            }
            walk(&node.children, seen)?;
        }
        Ok(())
    }

    let mut seen = HashSet::new();
    walk(roots, &mut seen)
}

/// Ищет корневую категорию по точному имени.
///
/// Используется ярлыком «недавние категории»: он умеет прыгать только на
/// верхний уровень, вложенные имена молча игнорируются.
pub fn find_root_by_name<'a>(roots: &'a [CategoryNode], name: &str) -> Option<&'a CategoryNode> {
    roots.iter().find(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: &str, name: &str) -> CategoryNode {
        CategoryNode {
            id: id.to_string(),
            name: name.to_string(),
            children: vec![],
            restricted: false,
        }
    }

    #[test]
    fn test_load_tree_parses_nested_json() {
        let json = r#"[
            {"id": "sports", "name": "Sports", "children": [
                {"id": "swimming", "name": "Swimming"}
            ]},
            {"id": "services", "name": "Services", "restricted": true}
        ]"#;

        let roots = load_tree(json).unwrap();
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0].children.len(), 1);
        assert!(roots[0].children[0].children.is_empty());
        assert!(roots[1].restricted);
    }

    #[test]
    fn test_load_tree_rejects_duplicate_ids() {
        let json = r#"[
            {"id": "a", "name": "A", "children": [{"id": "a", "name": "Nested A"}]}
        ]"#;

        let err = load_tree(json).unwrap_err();
        assert!(err.contains("duplicate category id: a"));
    }

    #[test]
    fn test_find_root_by_name_is_top_level_only() {
        let roots = vec![CategoryNode {
            id: "sports".to_string(),
            name: "Sports".to_string(),
            children: vec![leaf("swimming", "Swimming")],
            restricted: false,
        }];

        assert!(find_root_by_name(&roots, "Sports").is_some());
        // Вложенные категории ярлыку недоступны.
        assert!(find_root_by_name(&roots, "Swimming").is_none());
    }
}
