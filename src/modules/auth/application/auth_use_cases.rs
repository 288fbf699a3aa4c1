use std::sync::Arc;

use crate::auth::application::use_cases::{
    delete_account::IDeleteAccountUseCase, fetch_profile::FetchUserProfileUseCase,
    list_users::ListUsersUseCase, login_user::ILoginUserUseCase, logout_user::ILogoutUseCase,
    register_user::IRegisterUserUseCase, update_profile::UpdateUserProfileUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub logout: Arc<dyn ILogoutUseCase + Send + Sync>,
    pub fetch_profile: Arc<dyn FetchUserProfileUseCase + Send + Sync>,
    pub update_profile: Arc<dyn UpdateUserProfileUseCase + Send + Sync>,
    pub delete_account: Arc<dyn IDeleteAccountUseCase + Send + Sync>,
    pub list_users: Arc<dyn ListUsersUseCase + Send + Sync>,
}
