//! CLI command handlers, one file per command.

mod fetch;
mod forget;
mod key;
mod render;
mod resolve;
mod show;

pub use fetch::run_fetch;
pub use forget::run_forget;
pub use key::run_key;
pub use render::run_render;
pub use resolve::run_resolve;
pub use show::run_show;
