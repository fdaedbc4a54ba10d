pub mod list;
pub mod menu;
pub mod selftest;
