pub mod delete_account;
pub mod fetch_user;
pub mod list_users;
pub mod login_user;
pub mod logout_user;
pub mod register_user;
pub mod update_profile;

pub use delete_account::delete_account_handler;
pub use fetch_user::get_user_profile_handler;
pub use list_users::list_users_handler;
pub use login_user::{login_user_handler, LoginRequestDto, LoginResponse};
pub use logout_user::logout_user_handler;
pub use register_user::{register_user_handler, RegisterUserRequestDto};
pub use update_profile::{update_user_profile_handler, UpdateUserRequest};
