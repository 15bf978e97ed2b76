pub mod deserialize_disallow_empty_string;
pub mod product;
pub mod registration;
pub mod utils;
