use chrono::NaiveDate;
use contracts::domain::a003_order::filter::{DateWindow, OrderFilter, SortOrder};
use contracts::domain::a003_order::order::{OrderStatus, OrderType};
use leptos::prelude::*;
use uuid::Uuid;

/// Пресеты окна дат в панели фильтров.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePreset {
    Today,
    Yesterday,
    Last7Days,
    Last30Days,
    Custom,
}

impl DatePreset {
    pub const ALL: [DatePreset; 5] = [
        DatePreset::Today,
        DatePreset::Yesterday,
        DatePreset::Last7Days,
        DatePreset::Last30Days,
        DatePreset::Custom,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DatePreset::Today => "Today",
            DatePreset::Yesterday => "Yesterday",
            DatePreset::Last7Days => "Last 7 Days",
            DatePreset::Last30Days => "Last 30 Days",
            DatePreset::Custom => "Custom",
        }
    }
}

#[derive(Clone, Debug)]
pub struct OrderListState {
    // filters
    pub active_status: Option<OrderStatus>,
    pub order_type: Option<OrderType>,
    pub date_preset: DatePreset,
    pub custom_from: String,
    pub custom_to: String,
    pub order_number: String,
    pub tracking_number: String,

    // sorting
    pub sort: SortOrder,

    // selection
    pub selected_ids: Vec<Uuid>,

    // pagination
    pub page: usize,
    pub page_size: usize,
}

impl Default for OrderListState {
    fn default() -> Self {
        Self {
            active_status: None,
            order_type: None,
            date_preset: DatePreset::Last30Days,
            custom_from: String::new(),
            custom_to: String::new(),
            order_number: String::new(),
            tracking_number: String::new(),
            sort: SortOrder::Newest,
            selected_ids: Vec::new(),
            page: 0,
            page_size: 20,
        }
    }
}

impl OrderListState {
    /// Собирает параметры фильтра для contracts из состояния страницы.
    /// Нераспарсившиеся пользовательские даты остаются None.
    pub fn to_filter(&self) -> OrderFilter {
        let date = match self.date_preset {
            DatePreset::Today => DateWindow::Today,
            DatePreset::Yesterday => DateWindow::Yesterday,
            DatePreset::Last7Days => DateWindow::Last7Days,
            DatePreset::Last30Days => DateWindow::Last30Days,
            DatePreset::Custom => DateWindow::Custom {
                from: NaiveDate::parse_from_str(&self.custom_from, "%Y-%m-%d").ok(),
                to: NaiveDate::parse_from_str(&self.custom_to, "%Y-%m-%d").ok(),
            },
        };
        OrderFilter {
            status: self.active_status,
            order_type: self.order_type,
            date,
            order_number: self.order_number.clone(),
            tracking_number: self.tracking_number.clone(),
            sort: self.sort,
        }
    }
}

pub fn create_state() -> RwSignal<OrderListState> {
    RwSignal::new(OrderListState::default())
}
