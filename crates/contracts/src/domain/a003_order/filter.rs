use super::order::{Order, OrderStatus, OrderType};
use chrono::{DateTime, Days, NaiveDate, Utc};

// ============================================================================
// In-memory order list filtering
// ============================================================================

/// Окно дат для фильтра списка заказов. Все сравнения идут по календарной
/// дате относительно переданного `now`, чтобы логика была проверяемой.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateWindow {
    #[default]
    Today,
    Yesterday,
    Last7Days,
    Last30Days,
    Custom {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

impl DateWindow {
    fn matches(&self, order_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        let date = order_date.date_naive();
        let today = now.date_naive();
        match self {
            DateWindow::Today => date == today,
            DateWindow::Yesterday => Some(date) == today.checked_sub_days(Days::new(1)),
            DateWindow::Last7Days => today
                .checked_sub_days(Days::new(7))
                .map(|from| date >= from)
                .unwrap_or(true),
            DateWindow::Last30Days => today
                .checked_sub_days(Days::new(30))
                .map(|from| date >= from)
                .unwrap_or(true),
            // Неполный пользовательский диапазон пропускает всё.
            DateWindow::Custom { from: Some(from), to: Some(to) } => date >= *from && date <= *to,
            DateWindow::Custom { .. } => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    AmountHigh,
    AmountLow,
}

/// Параметры фильтрации списка заказов. `status == None` соответствует
/// вкладке "All".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub order_type: Option<OrderType>,
    pub date: DateWindow,
    pub order_number: String,
    pub tracking_number: String,
    pub sort: SortOrder,
}

impl OrderFilter {
    fn matches(&self, order: &Order, now: DateTime<Utc>) -> bool {
        if let Some(status) = self.status {
            if order.status != status {
                return false;
            }
        }
        if let Some(order_type) = self.order_type {
            if order.order_type != order_type {
                return false;
            }
        }
        if !self.date.matches(order.order_date, now) {
            return false;
        }
        if !self.order_number.is_empty()
            && !order
                .order_number
                .to_lowercase()
                .contains(&self.order_number.to_lowercase())
        {
            return false;
        }
        if !self.tracking_number.is_empty()
            && !order
                .tracking_number
                .to_lowercase()
                .contains(&self.tracking_number.to_lowercase())
        {
            return false;
        }
        true
    }

    /// Применяет фильтр и сортировку; исходный список не меняется.
    pub fn apply<'a>(&self, orders: &'a [Order], now: DateTime<Utc>) -> Vec<&'a Order> {
        let mut filtered: Vec<&Order> =
            orders.iter().filter(|o| self.matches(o, now)).collect();
        match self.sort {
            SortOrder::Newest => filtered.sort_by(|a, b| b.order_date.cmp(&a.order_date)),
            SortOrder::Oldest => filtered.sort_by(|a, b| a.order_date.cmp(&b.order_date)),
            SortOrder::AmountHigh => {
                filtered.sort_by(|a, b| b.total_amount.total_cmp(&a.total_amount))
            }
            SortOrder::AmountLow => {
                filtered.sort_by(|a, b| a.total_amount.total_cmp(&b.total_amount))
            }
        }
        filtered
    }
}

/// Количество заказов в данном статусе (для счётчиков на вкладках);
/// `None` — все заказы.
pub fn count_by_status(orders: &[Order], status: Option<OrderStatus>) -> usize {
    match status {
        None => orders.len(),
        Some(s) => orders.iter().filter(|o| o.status == s).count(),
    }
}

/// Срез страницы и общее число страниц. Страницы нумеруются с нуля.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> (&[T], usize) {
    if page_size == 0 {
        return (&[], 0);
    }
    let total_pages = items.len().div_ceil(page_size);
    let start = page.saturating_mul(page_size).min(items.len());
    let end = (start + page_size).min(items.len());
    (&items[start..end], total_pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn order(number: &str, status: OrderStatus, days_ago: u64, amount: f64) -> Order {
        let now = fixed_now();
        Order {
            id: Uuid::from_u128(number.len() as u128),
            order_number: number.to_string(),
            tracking_number: format!("TRK{}", number),
            product_name: "Sample".to_string(),
            variant: String::new(),
            quantity: 1,
            total_amount: amount,
            customer_name: "Customer".to_string(),
            shipping_address: "Manila".to_string(),
            delivery_option: "Standard Delivery".to_string(),
            status,
            order_type: OrderType::Normal,
            order_date: now - chrono::Duration::days(days_ago as i64),
            payment_method: "Credit Card".to_string(),
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap()
    }

    fn sample_orders() -> Vec<Order> {
        vec![
            order("1001", OrderStatus::ToShip, 0, 2499.0),
            order("1002", OrderStatus::Unpaid, 1, 3999.0),
            order("100299", OrderStatus::Shipping, 2, 899.0),
            order("1004", OrderStatus::Delivered, 10, 1599.0),
        ]
    }

    #[test]
    fn test_status_tab_filtering_and_counts() {
        let orders = sample_orders();
        let filter = OrderFilter {
            status: Some(OrderStatus::Unpaid),
            date: DateWindow::Last30Days,
            ..Default::default()
        };
        let result = filter.apply(&orders, fixed_now());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].order_number, "1002");

        assert_eq!(count_by_status(&orders, None), 4);
        assert_eq!(count_by_status(&orders, Some(OrderStatus::Delivered)), 1);
        assert_eq!(count_by_status(&orders, Some(OrderStatus::Cancellation)), 0);
    }

    #[test]
    fn test_date_windows() {
        let orders = sample_orders();
        let now = fixed_now();

        let today = OrderFilter::default().apply(&orders, now);
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].order_number, "1001");

        let yesterday = OrderFilter {
            date: DateWindow::Yesterday,
            ..Default::default()
        }
        .apply(&orders, now);
        assert_eq!(yesterday.len(), 1);
        assert_eq!(yesterday[0].order_number, "1002");

        let week = OrderFilter {
            date: DateWindow::Last7Days,
            ..Default::default()
        }
        .apply(&orders, now);
        assert_eq!(week.len(), 3);

        let custom = OrderFilter {
            date: DateWindow::Custom {
                from: NaiveDate::from_ymd_opt(2025, 3, 4),
                to: NaiveDate::from_ymd_opt(2025, 3, 13),
            },
            ..Default::default()
        }
        .apply(&orders, now);
        assert_eq!(custom.len(), 1);
        assert_eq!(custom[0].order_number, "100299");
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let orders = sample_orders();
        let filter = OrderFilter {
            date: DateWindow::Last30Days,
            tracking_number: "trk1002".to_string(),
            ..Default::default()
        };
        let result = filter.apply(&orders, fixed_now());
        let numbers: Vec<&str> = result.iter().map(|o| o.order_number.as_str()).collect();
        assert_eq!(numbers, vec!["1002", "100299"]);
    }

    #[test]
    fn test_sorting() {
        let orders = sample_orders();
        let now = fixed_now();
        let base = OrderFilter {
            date: DateWindow::Last30Days,
            ..Default::default()
        };

        let newest = base.apply(&orders, now);
        assert_eq!(newest[0].order_number, "1001");

        let by_amount = OrderFilter {
            sort: SortOrder::AmountHigh,
            ..base.clone()
        }
        .apply(&orders, now);
        assert_eq!(by_amount[0].order_number, "1002");
        assert_eq!(by_amount.last().unwrap().order_number, "100299");
    }

    #[test]
    fn test_paginate() {
        let items: Vec<u32> = (0..45).collect();
        let (page, total) = paginate(&items, 0, 20);
        assert_eq!(page.len(), 20);
        assert_eq!(total, 3);

        let (page, _) = paginate(&items, 2, 20);
        assert_eq!(page.len(), 5);

        let (page, total) = paginate(&items, 9, 20);
        assert!(page.is_empty());
        assert_eq!(total, 3);
    }
}
