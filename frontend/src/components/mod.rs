pub mod catalog;
pub mod contact;
pub mod order;
