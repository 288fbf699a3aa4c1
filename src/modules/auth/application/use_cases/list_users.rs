use async_trait::async_trait;

use crate::auth::application::domain::entities::UserProfile;
use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError};
use crate::shared::pagination::{PageRequest, PageResult};

#[async_trait]
pub trait ListUsersUseCase: Send + Sync {
    async fn execute(&self, page: PageRequest) -> Result<PageResult<UserProfile>, UserQueryError>;
}

#[derive(Clone)]
pub struct ListUsersService<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> ListUsersService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListUsersUseCase for ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, page: PageRequest) -> Result<PageResult<UserProfile>, UserQueryError> {
        let result = self.query.list_users(&page).await?;

        Ok(PageResult {
            items: result.items.into_iter().map(UserProfile::from).collect(),
            page: result.page,
            per_page: result.per_page,
            total: result.total,
        })
    }
}
