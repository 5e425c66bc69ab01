pub mod record_contract_command;

pub use record_contract_command::RecordContractCommand;
