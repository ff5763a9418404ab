//! Tab labels - единственный источник правды для заголовков табов.

/// Возвращает читаемый заголовок таба для данного ключа. Fallback: пустая
/// строка.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Dashboards (d4xx) ─────────────────────────────────────────────
        "d400_seller_home" => "Seller Home",

        // ── Aggregates (a0xx) ─────────────────────────────────────────────
        "a002_product_add" => "Add Product",
        "a003_orders" => "Order Management",

        // ── Coming-soon placeholders (cs_*) ───────────────────────────────
        "cs_manage_products" => "Manage Products",
        "cs_decorate_products" => "Decorate Products",
        "cs_fulfilment" => "Fulfilment Service",
        "cs_opportunity_center" => "Opportunity Center",
        "cs_assortment_growth" => "Assortment Growth Center",
        "cs_promotions" => "Promotions",
        "cs_logistics" => "Logistics",
        "cs_return_orders" => "Return Orders",
        "cs_reviews" => "Reviews",
        "cs_data_insight" => "Data Insight",
        "cs_shop_privilege" => "Shop Privilege",
        "cs_learn" => "Learn and Grow",
        "cs_engagement" => "Engagement Center",
        "cs_store" => "Store",
        "cs_finance" => "Finance",
        "cs_support" => "Support",

        // ── Fallback ──────────────────────────────────────────────────────
        _ => "",
    }
}
