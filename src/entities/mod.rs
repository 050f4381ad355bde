pub mod item;
pub mod supplier;
pub mod supplier_item;
