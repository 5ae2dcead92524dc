pub mod form;
pub mod mode_select;
pub mod result;
