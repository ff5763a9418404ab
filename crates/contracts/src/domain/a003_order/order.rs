use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Order aggregate
// ============================================================================

/// Статус заказа. Вкладка "All" в списке заказов — это отсутствие фильтра
/// по статусу, собственного значения у неё нет.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Unpaid,
    ToShip,
    Shipping,
    Delivered,
    FailedDelivery,
    Cancellation,
    ReturnRefund,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 7] = [
        OrderStatus::Unpaid,
        OrderStatus::ToShip,
        OrderStatus::Shipping,
        OrderStatus::Delivered,
        OrderStatus::FailedDelivery,
        OrderStatus::Cancellation,
        OrderStatus::ReturnRefund,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Unpaid => "Unpaid",
            OrderStatus::ToShip => "To Ship",
            OrderStatus::Shipping => "Shipping",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::FailedDelivery => "Failed Delivery",
            OrderStatus::Cancellation => "Cancellation",
            OrderStatus::ReturnRefund => "Return or Refund",
        }
    }
}

/// Тип заказа (канал/механика продажи).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderType {
    Normal,
    PreSale,
    Coupon,
    Cod,
    StorePickup,
    PreOrderByDays,
    PreOrderByDate,
    Superlink,
    Installation,
}

impl OrderType {
    pub const ALL: [OrderType; 9] = [
        OrderType::Normal,
        OrderType::PreSale,
        OrderType::Coupon,
        OrderType::Cod,
        OrderType::StorePickup,
        OrderType::PreOrderByDays,
        OrderType::PreOrderByDate,
        OrderType::Superlink,
        OrderType::Installation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OrderType::Normal => "Normal",
            OrderType::PreSale => "Pre-sale",
            OrderType::Coupon => "Coupon",
            OrderType::Cod => "Cash on Delivery",
            OrderType::StorePickup => "Store Pickup",
            OrderType::PreOrderByDays => "Pre-order by Days",
            OrderType::PreOrderByDate => "Pre-order by Date",
            OrderType::Superlink => "Superlink",
            OrderType::Installation => "Installation",
        }
    }
}

/// Заказ покупателя в списке управления заказами.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub order_number: String,
    pub tracking_number: String,
    pub product_name: String,
    pub variant: String,
    pub quantity: u32,
    pub total_amount: f64,
    pub customer_name: String,
    pub shipping_address: String,
    pub delivery_option: String,
    pub status: OrderStatus,
    pub order_type: OrderType,
    pub order_date: DateTime<Utc>,
    pub payment_method: String,
}
