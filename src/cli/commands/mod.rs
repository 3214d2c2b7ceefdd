pub mod align;
pub mod matrix;
pub mod validate;
