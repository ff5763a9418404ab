pub mod completion;
pub mod draft;
pub mod spec_template;

pub use completion::{content_score, ScoreQuality, SectionCompletion};
pub use draft::{DangerousGoods, PackageDimensions, ProductDraft, Warranty};
pub use spec_template::{template_for_category, SpecField, SpecInput, SpecTemplate};
