pub mod field_errors;
pub mod text_rule;
