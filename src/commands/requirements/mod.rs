pub mod add_requirement_command;
pub mod delete_requirement_command;

pub use add_requirement_command::AddRequirementCommand;
pub use delete_requirement_command::DeleteRequirementCommand;
