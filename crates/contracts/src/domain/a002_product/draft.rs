use super::spec_template::SpecTemplate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Минимальная длина основного описания товара в словах.
pub const MIN_DESCRIPTION_WORDS: usize = 30;

// ============================================================================
// Draft payload
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DangerousGoods {
    #[default]
    None,
    Battery,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PackageDimensions {
    pub length: String,
    pub width: String,
    pub height: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Warranty {
    #[serde(rename = "type")]
    pub warranty_type: String,
    pub period: String,
    pub policy: String,
    #[serde(rename = "returnPolicy")]
    pub return_policy: String,
}

/// Черновик карточки товара. Все числовые поля хранятся строками, как их
/// ввёл продавец; разбор происходит только при валидации. Черновик целиком
/// сериализуется в JSON при сохранении в хранилище состояний форм.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub product_name: String,
    /// Хлебные крошки выбранной категории ("A > B > C").
    pub category: String,
    pub specifications: HashMap<String, String>,
    pub price: String,
    pub special_price: String,
    pub stock: String,
    pub seller_sku: String,
    pub availability: bool,
    pub description: String,
    pub package_weight: String,
    pub weight_unit: String,
    pub package_dimensions: PackageDimensions,
    pub dangerous_goods: DangerousGoods,
    pub warranty: Warranty,
}

impl ProductDraft {
    pub fn new() -> Self {
        Self {
            availability: true,
            weight_unit: "kg".to_string(),
            ..Default::default()
        }
    }

    pub fn spec_value(&self, name: &str) -> &str {
        self.specifications.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set_spec_value(&mut self, name: &str, value: String) {
        self.specifications.insert(name.to_string(), value);
    }

    /// Число слов в основном описании.
    pub fn description_word_count(&self) -> usize {
        self.description.split_whitespace().count()
    }

    /// Полная проверка черновика перед отправкой. Возвращает список всех
    /// найденных проблем в том порядке, в котором секции идут в форме;
    /// пустой список означает, что товар можно публиковать.
    pub fn validation_errors(&self, template: &SpecTemplate) -> Vec<String> {
        let mut errors = Vec::new();

        if self.product_name.trim().is_empty() {
            errors.push("Product name is required".to_string());
        }
        if self.category.is_empty() {
            errors.push("Category must be selected".to_string());
        }

        for field in template.required_fields() {
            if self.spec_value(field.name).trim().is_empty() {
                errors.push(format!("{} is required in specifications", field.label));
            }
        }

        if parse_positive(&self.price).is_none() {
            errors.push("Valid price is required".to_string());
        }
        if parse_quantity(&self.stock).is_none() {
            errors.push("Valid stock quantity is required".to_string());
        }

        if self.description_word_count() < MIN_DESCRIPTION_WORDS {
            errors.push(format!(
                "Product description must be at least {} words",
                MIN_DESCRIPTION_WORDS
            ));
        }

        if parse_positive(&self.package_weight).is_none() {
            errors.push("Package weight is required".to_string());
        }
        if parse_positive(&self.package_dimensions.length).is_none() {
            errors.push("Package length is required".to_string());
        }
        if parse_positive(&self.package_dimensions.width).is_none() {
            errors.push("Package width is required".to_string());
        }
        if parse_positive(&self.package_dimensions.height).is_none() {
            errors.push("Package height is required".to_string());
        }
        if self.warranty.warranty_type.is_empty() {
            errors.push("Warranty type is required".to_string());
        }

        errors
    }
}

/// Строго положительное число из пользовательского ввода.
fn parse_positive(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| *v > 0.0)
}

/// Неотрицательное целое из пользовательского ввода.
fn parse_quantity(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::super::spec_template::template_for_category;
    use super::*;

    fn filled_draft() -> ProductDraft {
        let mut draft = ProductDraft::new();
        draft.product_name = "Pro Racer One Piece".to_string();
        draft.category =
            "Sports & Outdoors Activities > Water Sports Equipment > Swimming > Swimwear"
                .to_string();
        draft.set_spec_value("brand", "AquaPro".to_string());
        draft.set_spec_value("clothingMaterial", "Nylon".to_string());
        draft.set_spec_value("swimwearType", "One Piece".to_string());
        draft.price = "1299.00".to_string();
        draft.stock = "25".to_string();
        draft.description = std::iter::repeat("durable chlorine resistant racing suit")
            .take(6)
            .collect::<Vec<_>>()
            .join(" ");
        draft.package_weight = "0.3".to_string();
        draft.package_dimensions = PackageDimensions {
            length: "30".to_string(),
            width: "20".to_string(),
            height: "5".to_string(),
        };
        draft.warranty.warranty_type = "No Warranty".to_string();
        draft
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        let draft = filled_draft();
        let template = template_for_category(&draft.category);
        assert!(draft.validation_errors(&template).is_empty());
    }

    #[test]
    fn test_missing_required_spec_field_is_reported_by_label() {
        let mut draft = filled_draft();
        draft.specifications.remove("clothingMaterial");
        let template = template_for_category(&draft.category);
        let errors = draft.validation_errors(&template);
        assert!(errors.contains(&"Clothing Material is required in specifications".to_string()));
    }

    #[test]
    fn test_price_and_stock_must_parse() {
        let mut draft = filled_draft();
        draft.price = "0".to_string();
        draft.stock = "-3".to_string();
        let template = template_for_category(&draft.category);
        let errors = draft.validation_errors(&template);
        assert!(errors.contains(&"Valid price is required".to_string()));
        assert!(errors.contains(&"Valid stock quantity is required".to_string()));
    }

    #[test]
    fn test_short_description_is_rejected() {
        let mut draft = filled_draft();
        draft.description = "too short".to_string();
        let template = template_for_category(&draft.category);
        let errors = draft.validation_errors(&template);
        assert!(errors
            .iter()
            .any(|e| e.starts_with("Product description must be at least")));
    }

    #[test]
    fn test_draft_round_trips_through_json() {
        let draft = filled_draft();
        let json = serde_json::to_value(&draft).unwrap();
        let restored: ProductDraft = serde_json::from_value(json).unwrap();
        assert_eq!(draft, restored);
    }
}
