pub mod desk;

pub use desk::TradeDeskService;
