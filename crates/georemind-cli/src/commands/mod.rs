pub mod add;
pub mod clear;
pub mod common;
pub mod enter;
pub mod list;
pub mod show;
