pub mod event;
pub mod gear;
pub mod settings;
pub mod shift;
pub mod training;
