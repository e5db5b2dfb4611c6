pub mod layout;
pub mod navigation;
pub mod screens;
