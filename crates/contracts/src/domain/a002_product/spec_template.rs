// ============================================================================
// Category-dependent specification templates
// ============================================================================

/// Тип поля спецификации: свободный текст или выбор из списка.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecInput {
    Text,
    Select(Vec<&'static str>),
}

/// Один атрибут спецификации товара.
///
/// `key_attribute` — «ключевые» атрибуты, повышающие находимость товара;
/// они не обязательны, но учитываются в деталях заполненности.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecField {
    pub name: &'static str,
    pub label: &'static str,
    pub input: SpecInput,
    pub required: bool,
    pub key_attribute: bool,
}

impl SpecField {
    fn text(name: &'static str, label: &'static str, required: bool, key: bool) -> Self {
        Self {
            name,
            label,
            input: SpecInput::Text,
            required,
            key_attribute: key,
        }
    }

    fn select(
        name: &'static str,
        label: &'static str,
        required: bool,
        key: bool,
        options: Vec<&'static str>,
    ) -> Self {
        Self {
            name,
            label,
            input: SpecInput::Select(options),
            required,
            key_attribute: key,
        }
    }
}

/// Набор атрибутов спецификации для группы категорий.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecTemplate {
    /// Отображаемое имя группы (например, "Swimwear").
    pub category_label: &'static str,
    pub fields: Vec<SpecField>,
}

impl SpecTemplate {
    pub fn required_fields(&self) -> impl Iterator<Item = &SpecField> {
        self.fields.iter().filter(|f| f.required)
    }

    pub fn key_fields(&self) -> impl Iterator<Item = &SpecField> {
        self.fields.iter().filter(|f| f.key_attribute)
    }
}

/// Подбирает шаблон спецификации по хлебным крошкам выбранной категории.
/// Сопоставление — по вхождению подстроки, порядок веток значим.
pub fn template_for_category(category_path: &str) -> SpecTemplate {
    let category = category_path.to_lowercase();

    if category.contains("swimwear") || category.contains("swimming") {
        return SpecTemplate {
            category_label: "Swimwear",
            fields: vec![
                SpecField::text("brand", "Brand", true, false),
                SpecField::select(
                    "clothingMaterial",
                    "Clothing Material",
                    true,
                    false,
                    vec!["Cotton", "Polyester", "Nylon", "Spandex", "Lycra"],
                ),
                SpecField::select(
                    "swimwearType",
                    "Swimwear Type",
                    true,
                    false,
                    vec!["One Piece", "Bikini", "Tankini", "Swim Shorts", "Rash Guard"],
                ),
                SpecField::select(
                    "activityType",
                    "Activity Type",
                    false,
                    true,
                    vec!["Swimming", "Surfing", "Diving", "Beach", "Water Sports"],
                ),
                SpecField::text("pattern", "Pattern", false, true),
                SpecField::select(
                    "sizeClass",
                    "Size Class",
                    false,
                    true,
                    vec!["XS", "S", "M", "L", "XL", "XXL"],
                ),
            ],
        };
    }

    if category.contains("computer") || category.contains("laptop") || category.contains("electronics")
    {
        return SpecTemplate {
            category_label: "Electronics",
            fields: vec![
                SpecField::text("brand", "Brand", true, false),
                SpecField::text("processor", "Processor", true, false),
                SpecField::select(
                    "ram",
                    "RAM",
                    true,
                    false,
                    vec!["4GB", "8GB", "16GB", "32GB", "64GB"],
                ),
                SpecField::select(
                    "storage",
                    "Storage",
                    false,
                    true,
                    vec!["128GB", "256GB", "512GB", "1TB", "2TB"],
                ),
                SpecField::text("screenSize", "Screen Size", false, true),
                SpecField::select(
                    "operatingSystem",
                    "Operating System",
                    false,
                    true,
                    vec!["Windows 11", "Windows 10", "macOS", "Linux", "Chrome OS"],
                ),
            ],
        };
    }

    if category.contains("appliance") || category.contains("kitchen") || category.contains("home") {
        return SpecTemplate {
            category_label: "Home Appliances",
            fields: vec![
                SpecField::text("brand", "Brand", true, false),
                SpecField::select(
                    "applianceType",
                    "Appliance Type",
                    true,
                    false,
                    vec![
                        "Refrigerator",
                        "Washing Machine",
                        "Microwave",
                        "Air Conditioner",
                        "Vacuum Cleaner",
                    ],
                ),
                SpecField::text("powerConsumption", "Power Consumption (Watts)", true, false),
                SpecField::text("capacity", "Capacity", false, true),
                SpecField::select(
                    "energyRating",
                    "Energy Rating",
                    false,
                    true,
                    vec!["1 Star", "2 Star", "3 Star", "4 Star", "5 Star"],
                ),
                SpecField::text("color", "Color", false, true),
            ],
        };
    }

    SpecTemplate {
        category_label: "General",
        fields: vec![
            SpecField::text("brand", "Brand", true, false),
            SpecField::text("material", "Material", true, false),
            SpecField::text("color", "Color", false, true),
            SpecField::text("size", "Size", false, true),
            SpecField::text("weight", "Weight", false, true),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_matches_by_substring() {
        let path = "Sports & Outdoors Activities > Water Sports Equipment > Swimming > Swimwear";
        assert_eq!(template_for_category(path).category_label, "Swimwear");
        assert_eq!(
            template_for_category("Computers & Components > Laptops").category_label,
            "Electronics"
        );
        assert_eq!(
            template_for_category("Home Appliances > Kitchen Appliances").category_label,
            "Home Appliances"
        );
        assert_eq!(template_for_category("Pet Supplies").category_label, "General");
    }

    #[test]
    fn test_swimwear_required_and_key_fields() {
        let template = template_for_category("Swimwear");
        let required: Vec<&str> = template.required_fields().map(|f| f.name).collect();
        assert_eq!(required, vec!["brand", "clothingMaterial", "swimwearType"]);
        let keys: Vec<&str> = template.key_fields().map(|f| f.name).collect();
        assert_eq!(keys, vec!["activityType", "pattern", "sizeClass"]);
    }
}
