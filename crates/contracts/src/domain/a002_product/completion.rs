use super::draft::{ProductDraft, MIN_DESCRIPTION_WORDS};
use super::spec_template::SpecTemplate;

// ============================================================================
// Derived form completion & content score
// ============================================================================

/// Заполненность секций формы товара. Чистая производная от черновика и
/// шаблона спецификации, пересчитывается при каждом изменении.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionCompletion {
    pub basic_info: bool,
    /// Квалификация продавца пока не считается; секция всегда не заполнена.
    pub qualification: bool,
    pub specification: bool,
    pub price_stock: bool,
    pub description: bool,
    pub shipping: bool,
}

impl SectionCompletion {
    pub fn evaluate(draft: &ProductDraft, template: &SpecTemplate) -> Self {
        let basic_info = !draft.product_name.is_empty() && !draft.category.is_empty();

        let specification = template
            .required_fields()
            .all(|f| !draft.spec_value(f.name).is_empty());

        let price_stock = !draft.price.is_empty() && !draft.stock.is_empty();

        let description = draft.description_word_count() >= MIN_DESCRIPTION_WORDS;

        let shipping = !draft.package_weight.is_empty()
            && !draft.package_dimensions.length.is_empty()
            && !draft.package_dimensions.width.is_empty()
            && !draft.package_dimensions.height.is_empty()
            && !draft.warranty.warranty_type.is_empty();

        Self {
            basic_info,
            qualification: false,
            specification,
            price_stock,
            description,
            shipping,
        }
    }

    /// Хотя бы один ключевой атрибут заполнен.
    pub fn has_key_attributes(draft: &ProductDraft, template: &SpecTemplate) -> bool {
        template
            .key_fields()
            .any(|f| !draft.spec_value(f.name).is_empty())
    }
}

/// Веса секций в итоговом балле контента (в сумме 100).
const WEIGHTS: [(fn(&SectionCompletion) -> bool, u8); 6] = [
    (|c| c.basic_info, 25),
    (|c| c.qualification, 10),
    (|c| c.specification, 20),
    (|c| c.price_stock, 20),
    (|c| c.description, 15),
    (|c| c.shipping, 10),
];

/// Балл контента 0–100: сумма весов заполненных секций.
pub fn content_score(completion: &SectionCompletion) -> u8 {
    WEIGHTS
        .iter()
        .filter(|(done, _)| done(completion))
        .map(|(_, weight)| weight)
        .sum()
}

/// Качественная оценка балла контента.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreQuality {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreQuality {
    pub fn for_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => ScoreQuality::Excellent,
            60..=79 => ScoreQuality::Good,
            40..=59 => ScoreQuality::Fair,
            _ => ScoreQuality::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreQuality::Excellent => "Excellent",
            ScoreQuality::Good => "Good",
            ScoreQuality::Fair => "Fair",
            ScoreQuality::Poor => "Poor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::spec_template::template_for_category;
    use super::*;

    #[test]
    fn test_empty_draft_scores_zero() {
        let draft = ProductDraft::new();
        let template = template_for_category("");
        let completion = SectionCompletion::evaluate(&draft, &template);
        assert_eq!(content_score(&completion), 0);
        assert_eq!(ScoreQuality::for_score(0), ScoreQuality::Poor);
    }

    #[test]
    fn test_score_accumulates_section_weights() {
        let mut draft = ProductDraft::new();
        draft.product_name = "Gaming Laptop".to_string();
        draft.category = "Computers & Components > Laptops".to_string();
        let template = template_for_category(&draft.category);

        let completion = SectionCompletion::evaluate(&draft, &template);
        assert!(completion.basic_info);
        assert_eq!(content_score(&completion), 25);

        draft.price = "45999".to_string();
        draft.stock = "5".to_string();
        let completion = SectionCompletion::evaluate(&draft, &template);
        assert_eq!(content_score(&completion), 45);
    }

    #[test]
    fn test_qualification_placeholder_caps_score_at_ninety() {
        let mut draft = ProductDraft::new();
        draft.product_name = "Pro Racer One Piece".to_string();
        draft.category = "Swimwear".to_string();
        let template = template_for_category(&draft.category);
        for field in template.required_fields() {
            draft.set_spec_value(field.name, "x".to_string());
        }
        draft.price = "1".to_string();
        draft.stock = "1".to_string();
        draft.description = "word ".repeat(MIN_DESCRIPTION_WORDS);
        draft.package_weight = "1".to_string();
        draft.package_dimensions.length = "1".to_string();
        draft.package_dimensions.width = "1".to_string();
        draft.package_dimensions.height = "1".to_string();
        draft.warranty.warranty_type = "No Warranty".to_string();

        let completion = SectionCompletion::evaluate(&draft, &template);
        assert_eq!(content_score(&completion), 90);
        assert_eq!(ScoreQuality::for_score(90), ScoreQuality::Excellent);
    }

    #[test]
    fn test_quality_bands() {
        assert_eq!(ScoreQuality::for_score(100).label(), "Excellent");
        assert_eq!(ScoreQuality::for_score(79).label(), "Good");
        assert_eq!(ScoreQuality::for_score(40).label(), "Fair");
        assert_eq!(ScoreQuality::for_score(39).label(), "Poor");
    }
}
