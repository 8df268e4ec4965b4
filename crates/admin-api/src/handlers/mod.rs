pub mod health;
pub mod menu_roles;
pub mod menus;
pub mod roles;
pub mod users;
