pub mod rule;
pub mod selector;
pub mod sheet;
