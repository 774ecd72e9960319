pub mod advice;
pub mod debt;
