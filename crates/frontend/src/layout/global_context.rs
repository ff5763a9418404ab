use leptos::prelude::*;
use std::collections::HashMap;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
    pub form_states: RwSignal<HashMap<String, serde_json::Value>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
            form_states: RwSignal::new(HashMap::new()),
        }
    }

    /// Состояния форм переживают переключение вкладок; живут только в
    /// памяти текущей сессии.
    pub fn get_form_state(&self, form_key: &str) -> Option<serde_json::Value> {
        self.form_states
            .with_untracked(|states| states.get(form_key).cloned())
    }

    pub fn set_form_state(&self, form_key: String, state: serde_json::Value) {
        self.form_states.update(|states| {
            states.insert(form_key, state);
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            let tab = Tab {
                key: key.to_string(),
                title: title.to_string(),
                dirty: false,
            };
            self.opened.update(|tabs| tabs.push(tab));
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        self.opened.update(|tabs| {
            tabs.retain(|tab| tab.key != key);
        });
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
    pub dirty: bool,
}
