//! Console interaction: prompts, menus, tables and the main loop.

pub mod console;
pub mod menu;
pub mod render;
pub mod shell;

pub use console::Console;
pub use shell::ZooShell;
