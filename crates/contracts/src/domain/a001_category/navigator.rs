use super::tree::{find_root_by_name, CategoryNode};

/// Разделитель хлебных крошек в итоговой строке выбора.
pub const BREADCRUMB_SEPARATOR: &str = " > ";

// ============================================================================
// Session outcome
// ============================================================================

/// Итог сессии выбора категории: либо подтверждённая цепочка имён от корня
/// до выбранного узла, либо отмена без результата.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    Confirmed(Vec<String>),
    Cancelled,
}

impl SelectionOutcome {
    /// Хлебные крошки подтверждённого выбора; пустая строка для отмены.
    pub fn breadcrumb(&self) -> String {
        match self {
            SelectionOutcome::Confirmed(names) => names.join(BREADCRUMB_SEPARATOR),
            SelectionOutcome::Cancelled => String::new(),
        }
    }
}

// ============================================================================
// Navigator session state
// ============================================================================

/// Сессия навигации по дереву категорий в несколько параллельных колонок
/// (Miller columns). Всё состояние сессии — пара (путь выбора, фильтры
/// колонок); колонки каждый раз выводятся из пути заново, инкрементальных
/// мутаций нет.
///
/// Дерево передаётся при создании и внутри сессии не меняется.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryNavigator {
    roots: Vec<CategoryNode>,
    path: Vec<CategoryNode>,
    filters: Vec<String>,
}

impl CategoryNavigator {
    pub fn new(roots: Vec<CategoryNode>) -> Self {
        Self {
            roots,
            path: Vec::new(),
            // Одна корневая колонка видна всегда.
            filters: vec![String::new()],
        }
    }

    // ------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------

    /// Колонки для отображения: колонка 0 — корни, дальше — дети каждого
    /// выбранного узла, у которого дети есть. Выбор листа колонку не
    /// добавляет.
    pub fn columns(&self) -> Vec<&[CategoryNode]> {
        let mut cols: Vec<&[CategoryNode]> = vec![&self.roots];
        for selected in &self.path {
            if selected.has_children() {
                cols.push(&selected.children);
            }
        }
        cols
    }

    pub fn column_count(&self) -> usize {
        self.columns().len()
    }

    /// Видимое содержимое колонки с учётом её фильтра. Фильтр — это
    /// регистронезависимое вхождение подстроки в имя; пустой фильтр
    /// пропускает всё. Фильтрация влияет только на видимость, путь выбора
    /// она не трогает.
    pub fn filtered_column(&self, column: usize) -> Vec<&CategoryNode> {
        let cols = self.columns();
        let Some(nodes) = cols.get(column) else {
            return Vec::new();
        };
        let filter = self.filter(column).to_lowercase();
        nodes
            .iter()
            .filter(|n| filter.is_empty() || n.name.to_lowercase().contains(&filter))
            .collect()
    }

    pub fn filter(&self, column: usize) -> &str {
        self.filters.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn selection_path(&self) -> &[CategoryNode] {
        &self.path
    }

    /// Id узла, выбранного в данной колонке (для подсветки).
    pub fn selected_id_at(&self, column: usize) -> Option<&str> {
        self.path.get(column).map(|n| n.id.as_str())
    }

    pub fn has_selection(&self) -> bool {
        !self.path.is_empty()
    }

    /// Проекция пути выбора в строку хлебных крошек.
    pub fn breadcrumb(&self) -> String {
        self.path
            .iter()
            .map(|n| n.name.as_str())
            .collect::<Vec<_>>()
            .join(BREADCRUMB_SEPARATOR)
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Выбор узла в колонке: путь усекается до этой колонки и дополняется
    /// узлом, фильтры более глубоких колонок очищаются. Смена решения на
    /// глубине i обесценивает всё, что было выбрано глубже.
    pub fn select(&mut self, column: usize, node: &CategoryNode) {
        self.path.truncate(column);
        self.path.push(node.clone());
        for f in self.filters.iter_mut().skip(column + 1) {
            f.clear();
        }
        self.sync_filters();
    }

    /// Меняет фильтр одной колонки; никакое другое состояние не трогается.
    pub fn set_filter(&mut self, column: usize, value: impl Into<String>) {
        if let Some(f) = self.filters.get_mut(column) {
            *f = value.into();
        }
    }

    /// Ярлык «недавние категории»: ставит путь сразу на корневую категорию
    /// с данным именем, минуя обычное правило усечения. Ищет только среди
    /// корней; если имя не нашлось (например, это вложенная категория) —
    /// ничего не делает и возвращает false.
    pub fn jump_to_recent(&mut self, name: &str) -> bool {
        match find_root_by_name(&self.roots, name) {
            Some(node) => {
                let node = node.clone();
                self.path = vec![node];
                self.sync_filters();
                true
            }
            None => false,
        }
    }

    /// Возврат к исходному состоянию: пустой путь, пустые фильтры.
    pub fn reset(&mut self) {
        self.path.clear();
        self.filters.clear();
        self.filters.push(String::new());
    }

    /// Подтверждение выбора. Защищено предусловием: при пустом пути выбора
    /// подтверждать нечего и возвращается None (кнопка в UI выключена).
    pub fn confirm(&self) -> Option<SelectionOutcome> {
        if self.path.is_empty() {
            return None;
        }
        Some(SelectionOutcome::Confirmed(
            self.path.iter().map(|n| n.name.clone()).collect(),
        ))
    }

    /// Отмена сессии; допустима при любом состоянии пути.
    pub fn cancel(&self) -> SelectionOutcome {
        SelectionOutcome::Cancelled
    }

    /// Держит вектор фильтров той же длины, что и список колонок: по
    /// фильтру на видимую колонку, включая одну пустую колонку глубже
    /// текущего выбора.
    fn sync_filters(&mut self) {
        self.filters.resize(self.column_count(), String::new());
    }
}

#[cfg(test)]
mod tests {
    use super::super::tree::load_tree;
    use super::*;

    fn sample_tree() -> Vec<CategoryNode> {
        load_tree(
            r#"[
            {"id": "sports", "name": "Sports & Outdoors Activities", "children": [
                {"id": "water-sports", "name": "Water Sports Equipment", "children": [
                    {"id": "swimming", "name": "Swimming", "children": [
                        {"id": "swimwear", "name": "Swimwear"},
                        {"id": "goggles", "name": "Goggles"}
                    ]},
                    {"id": "diving", "name": "Diving & Snorkeling"}
                ]},
                {"id": "yoga", "name": "Yoga & Wellness Equipment"}
            ]},
            {"id": "computers", "name": "Computers & Components", "children": [
                {"id": "laptops", "name": "Laptops"}
            ]},
            {"id": "electronics", "name": "Consumer Electronics", "children": [
                {"id": "audio", "name": "Audio"}
            ]},
            {"id": "services", "name": "Services", "restricted": true}
        ]"#,
        )
        .unwrap()
    }

    fn node<'a>(nav: &'a CategoryNavigator, column: usize, name: &str) -> &'a CategoryNode {
        let cols = nav.columns();
        cols[column]
            .iter()
            .find(|n| n.name == name)
            .unwrap_or_else(|| panic!("no node {:?} in column {}", name, column))
    }

    #[test]
    fn test_selecting_root_with_children_adds_second_column() {
        let mut nav = CategoryNavigator::new(sample_tree());
        assert_eq!(nav.column_count(), 1);

        let root = node(&nav, 0, "Sports & Outdoors Activities").clone();
        nav.select(0, &root);

        assert_eq!(nav.column_count(), 2);
        let names: Vec<&str> = nav.columns()[1].iter().map(|n| n.name.as_str()).collect();
        // Дети показываются в исходном порядке.
        assert_eq!(names, vec!["Water Sports Equipment", "Yoga & Wellness Equipment"]);
    }

    #[test]
    fn test_selecting_leaf_does_not_add_column() {
        let mut nav = CategoryNavigator::new(sample_tree());
        let services = node(&nav, 0, "Services").clone();
        let before = nav.column_count();
        nav.select(0, &services);
        assert_eq!(nav.column_count(), before);
    }

    #[test]
    fn test_truncation_law() {
        let mut nav = CategoryNavigator::new(sample_tree());
        let sports = node(&nav, 0, "Sports & Outdoors Activities").clone();
        nav.select(0, &sports);
        let water = node(&nav, 1, "Water Sports Equipment").clone();
        nav.select(1, &water);
        let swimming = node(&nav, 2, "Swimming").clone();
        nav.select(2, &swimming);
        assert_eq!(nav.selection_path().len(), 3);

        nav.set_filter(2, "swim");
        nav.set_filter(3, "wear");

        // Повторный выбор в колонке 1 усекает путь и чистит глубокие фильтры.
        let yoga = node(&nav, 1, "Yoga & Wellness Equipment").clone();
        nav.select(1, &yoga);

        assert_eq!(nav.selection_path().len(), 2);
        assert_eq!(nav.selection_path()[1].name, "Yoga & Wellness Equipment");
        // Фильтры глубже колонки выбора сброшены (лист не добавил колонку,
        // поэтому и бывшие колонки 2-3 больше не видны).
        assert_eq!(nav.column_count(), 2);
        for column in 2..4 {
            assert_eq!(nav.filter(column), "");
        }
    }

    #[test]
    fn test_filtering_is_case_insensitive_and_local() {
        let mut nav = CategoryNavigator::new(sample_tree());
        nav.set_filter(0, "computer");

        let visible: Vec<&str> = nav
            .filtered_column(0)
            .iter()
            .map(|n| n.name.as_str())
            .collect();
        assert_eq!(visible, vec!["Computers & Components"]);
    }

    #[test]
    fn test_clearing_filter_restores_column() {
        let mut nav = CategoryNavigator::new(sample_tree());
        let original: Vec<String> = nav
            .filtered_column(0)
            .iter()
            .map(|n| n.name.clone())
            .collect();

        nav.set_filter(0, "water");
        nav.set_filter(0, "");

        let restored: Vec<String> = nav
            .filtered_column(0)
            .iter()
            .map(|n| n.name.clone())
            .collect();
        assert_eq!(original, restored);
    }

    #[test]
    fn test_filtering_does_not_clear_deeper_selection() {
        let mut nav = CategoryNavigator::new(sample_tree());
        let sports = node(&nav, 0, "Sports & Outdoors Activities").clone();
        nav.select(0, &sports);
        let water = node(&nav, 1, "Water Sports Equipment").clone();
        nav.select(1, &water);

        // Фильтр, прячущий выбранный корень, выбор не сбрасывает.
        nav.set_filter(0, "computer");
        assert_eq!(nav.selection_path().len(), 2);
        assert_eq!(nav.selected_id_at(0), Some("sports"));
    }

    #[test]
    fn test_full_drill_down_breadcrumb_and_confirm() {
        let mut nav = CategoryNavigator::new(sample_tree());
        for (column, name) in [
            (0, "Sports & Outdoors Activities"),
            (1, "Water Sports Equipment"),
            (2, "Swimming"),
            (3, "Swimwear"),
        ] {
            let n = node(&nav, column, name).clone();
            nav.select(column, &n);
        }

        assert_eq!(nav.selection_path().len(), 4);
        let expected = "Sports & Outdoors Activities > Water Sports Equipment > Swimming > Swimwear";
        assert_eq!(nav.breadcrumb(), expected);
        // Проекция детерминирована.
        assert_eq!(nav.breadcrumb(), nav.breadcrumb());

        let outcome = nav.confirm().unwrap();
        assert_eq!(outcome.breadcrumb(), expected);
        match outcome {
            SelectionOutcome::Confirmed(names) => {
                assert_eq!(names.join(BREADCRUMB_SEPARATOR), expected)
            }
            SelectionOutcome::Cancelled => panic!("expected confirmed outcome"),
        }
    }

    #[test]
    fn test_confirm_requires_selection() {
        let nav = CategoryNavigator::new(sample_tree());
        assert!(nav.confirm().is_none());
        assert_eq!(nav.cancel(), SelectionOutcome::Cancelled);
    }

    #[test]
    fn test_reset_returns_to_initial_state() {
        let mut nav = CategoryNavigator::new(sample_tree());
        let sports = node(&nav, 0, "Sports & Outdoors Activities").clone();
        nav.select(0, &sports);
        nav.set_filter(1, "water");

        nav.reset();

        assert!(nav.selection_path().is_empty());
        assert_eq!(nav.column_count(), 1);
        assert_eq!(nav.filter(0), "");
        assert_eq!(nav.breadcrumb(), "");
    }

    #[test]
    fn test_jump_to_recent_is_root_only() {
        let mut nav = CategoryNavigator::new(sample_tree());
        assert!(nav.jump_to_recent("Consumer Electronics"));
        assert_eq!(nav.selection_path().len(), 1);
        assert_eq!(nav.selected_id_at(0), Some("electronics"));

        // Вложенное имя — no-op, путь не меняется.
        assert!(!nav.jump_to_recent("Swimming"));
        assert_eq!(nav.selected_id_at(0), Some("electronics"));
    }
}
