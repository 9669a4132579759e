pub mod achievements;
pub mod add;
pub mod calendar;
pub mod del;
pub mod earnings;
pub mod event_log;
pub mod gear;
pub mod hooks;
pub mod ledger;
pub mod log;
pub mod store;
pub mod timer;
pub mod training;
