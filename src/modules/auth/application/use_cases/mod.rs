pub mod delete_account;
pub mod fetch_profile;
pub mod list_users;
pub mod login_user;
pub mod logout_user;
pub mod register_user;
pub mod update_profile;
