pub mod content_area;
pub mod role_shell;
pub mod sidebar;

pub use content_area::ContentArea;
pub use role_shell::RoleShell;
pub use sidebar::Sidebar;
