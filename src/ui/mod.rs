pub mod api;
pub mod browser;
pub mod common;
pub mod header;
pub mod icon;
pub mod layout;
pub mod pages;
pub mod session;
pub mod sidebar;

pub use header::Header;
pub use icon::{Icon, icons};
pub use layout::DashboardLayout;
pub use session::{SessionContext, provide_session_context, use_session_context};
pub use sidebar::Sidebar;
