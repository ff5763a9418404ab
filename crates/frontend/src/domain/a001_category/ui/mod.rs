pub mod picker;

pub use picker::CategoryPicker;
