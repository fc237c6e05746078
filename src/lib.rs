pub mod config;
pub mod logging;
pub mod model;
pub mod remote;
pub mod session;
pub mod tui_shell;
pub mod worker;
