pub mod menu_row;
pub mod side_menu;

pub use menu_row::MenuRowItem;
pub use side_menu::SideMenu;
