use chrono::{DateTime, Duration, Utc};
use contracts::domain::a003_order::order::{Order, OrderStatus, OrderType};
use uuid::Uuid;

/// Демонстрационный список заказов. Сервера у приложения нет, поэтому
/// данные генерируются в памяти относительно текущего момента, чтобы
/// фильтры по датам всегда находили что показать.
pub fn sample_orders(now: DateTime<Utc>) -> Vec<Order> {
    let order = |n: u128,
                 order_number: &str,
                 tracking: &str,
                 product: &str,
                 variant: &str,
                 quantity: u32,
                 amount: f64,
                 customer: &str,
                 address: &str,
                 delivery: &str,
                 status: OrderStatus,
                 order_type: OrderType,
                 days_ago: i64,
                 payment: &str| Order {
        id: Uuid::from_u128(n),
        order_number: order_number.to_string(),
        tracking_number: tracking.to_string(),
        product_name: product.to_string(),
        variant: variant.to_string(),
        quantity,
        total_amount: amount,
        customer_name: customer.to_string(),
        shipping_address: address.to_string(),
        delivery_option: delivery.to_string(),
        status,
        order_type,
        order_date: now - Duration::days(days_ago),
        payment_method: payment.to_string(),
    };

    vec![
        order(
            1,
            "123456789012",
            "TRK123456789",
            "Wireless Bluetooth Headphones - Premium Sound Quality",
            "Black, Standard",
            2,
            2499.00,
            "Juan Dela Cruz",
            "Manila, Metro Manila",
            "Standard Delivery",
            OrderStatus::ToShip,
            OrderType::Normal,
            0,
            "Credit Card",
        ),
        order(
            2,
            "123456789013",
            "TRK123456790",
            "Smart Watch Fitness Tracker with Heart Rate Monitor",
            "Silver, 42mm",
            1,
            3999.00,
            "Maria Santos",
            "Quezon City, Metro Manila",
            "Express Delivery",
            OrderStatus::Unpaid,
            OrderType::Cod,
            1,
            "Cash on Delivery",
        ),
        order(
            3,
            "123456789014",
            "TRK123456791",
            "USB-C Fast Charging Cable 2M - Durable Braided Design",
            "White, 2 Meters",
            3,
            899.00,
            "Pedro Reyes",
            "Makati City, Metro Manila",
            "Standard Delivery",
            OrderStatus::Shipping,
            OrderType::Normal,
            2,
            "GCash",
        ),
        order(
            4,
            "123456789015",
            "TRK123456792",
            "Laptop Stand Adjustable Aluminum - Ergonomic Design",
            "Space Gray",
            1,
            1599.00,
            "Ana Garcia",
            "Pasig City, Metro Manila",
            "Standard Delivery",
            OrderStatus::Delivered,
            OrderType::PreSale,
            7,
            "PayMaya",
        ),
        order(
            5,
            "123456789016",
            "TRK123456793",
            "Mechanical Gaming Keyboard - RGB Backlit",
            "Blue Switches",
            1,
            3299.00,
            "Carlo Mendoza",
            "Taguig City, Metro Manila",
            "Express Delivery",
            OrderStatus::FailedDelivery,
            OrderType::Normal,
            4,
            "Credit Card",
        ),
        order(
            6,
            "123456789017",
            "TRK123456794",
            "Stainless Steel Water Bottle 1L",
            "Matte Black",
            5,
            1495.00,
            "Liza Ramos",
            "Cebu City, Cebu",
            "Standard Delivery",
            OrderStatus::Cancellation,
            OrderType::Coupon,
            12,
            "GCash",
        ),
        order(
            7,
            "123456789018",
            "TRK123456795",
            "Yoga Mat Non-Slip 6mm",
            "Purple",
            1,
            799.00,
            "Ramon Aquino",
            "Davao City, Davao del Sur",
            "Standard Delivery",
            OrderStatus::ReturnRefund,
            OrderType::Normal,
            20,
            "PayMaya",
        ),
        order(
            8,
            "123456789019",
            "TRK123456796",
            "Portable Blender USB Rechargeable",
            "Mint Green",
            2,
            1998.00,
            "Grace Lim",
            "Iloilo City, Iloilo",
            "Store Pickup",
            OrderStatus::Delivered,
            OrderType::StorePickup,
            28,
            "Credit Card",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_orders_have_unique_identities() {
        let now = Utc::now();
        let orders = sample_orders(now);
        let mut ids: Vec<Uuid> = orders.iter().map(|o| o.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), orders.len());

        // Самый свежий заказ — сегодняшний, чтобы фильтр "Today" не был пуст.
        assert!(orders.iter().any(|o| o.order_date.date_naive() == now.date_naive()));
    }
}
