pub mod delete_product_command;
pub mod upsert_product_command;

pub use delete_product_command::DeleteProductCommand;
pub use upsert_product_command::UpsertProductCommand;
