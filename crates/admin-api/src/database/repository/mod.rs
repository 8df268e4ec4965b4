pub mod menu_roles;
pub mod menus;
pub mod roles;
pub mod users;

pub use menu_roles::MenuRoleRepository;
pub use menus::{MenuFields, MenuRepository};
pub use roles::RoleRepository;
pub use users::UserRepository;
