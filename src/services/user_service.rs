use crate::{
    models::{User, UserEnvelope, UserPage},
    services::upstream_client::UpstreamClient,
    utils::{UpstreamError, UserFetchError},
};
use async_trait::async_trait;

/// Read-only access to the user directory.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn get_user_by_id(&self, id: i64) -> Result<User, UserFetchError>;

    async fn get_all_users(&self) -> Result<Vec<User>, UserFetchError>;
}

/// User directory backed by the paginated upstream REST API.
#[derive(Clone)]
pub struct ExternalUserService {
    client: UpstreamClient,
}

impl ExternalUserService {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserDirectory for ExternalUserService {
    /// Busca um usuário pelo ID (`GET users/{id}`), desembrulhando o envelope `data`
    async fn get_user_by_id(&self, id: i64) -> Result<User, UserFetchError> {
        log::info!("👤 Fetching user {} from upstream", id);

        let envelope: UserEnvelope = self
            .client
            .get_json(&format!("users/{}", id))
            .await
            .map_err(|source| UserFetchError::User { id, source })?;

        Ok(envelope.data)
    }

    /// Walks `users?page=N` until `page > total_pages` or a page comes back without data.
    ///
    /// `total_pages` is re-read from every page (last one wins). A transport or
    /// status failure on any page aborts the walk and drops what was collected;
    /// an absent or undecodable body ends it normally.
    async fn get_all_users(&self) -> Result<Vec<User>, UserFetchError> {
        let mut users = Vec::new();
        let mut page: i64 = 1;
        let mut total_pages: i64 = 1;

        while page <= total_pages {
            let listing = match self
                .client
                .get_json::<Option<UserPage>>(&format!("users?page={}", page))
                .await
            {
                Ok(listing) => listing,
                Err(UpstreamError::Decode(e)) => {
                    log::warn!("⚠️  Page {} could not be decoded, stopping: {}", page, e);
                    None
                }
                Err(source) => return Err(UserFetchError::AllUsers { page, source }),
            };

            let Some(UserPage {
                page: reported_page,
                total_pages: reported,
                data: Some(batch),
            }) = listing
            else {
                log::info!("📭 Page {} has no data, stopping", page);
                break;
            };

            log::debug!(
                "📄 Page {} (upstream says {}/{}): {} users",
                page,
                reported_page,
                reported,
                batch.len()
            );

            users.extend(batch);
            total_pages = reported;
            page += 1;
        }

        log::info!("✅ Collected {} users from upstream", users.len());

        Ok(users)
    }
}
