pub mod create;
pub mod get;
pub mod health;
pub mod list;

pub use create::create_handler;
pub use get::get_handler;
pub use health::self_check_handler;
pub use list::list_handler;
