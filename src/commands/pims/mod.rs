pub mod create_pim_command;
pub mod delete_pim_command;

pub use create_pim_command::CreatePimCommand;
pub use delete_pim_command::DeletePimCommand;
