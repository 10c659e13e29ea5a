use tracing::{error, info, warn};
use usergate_core::{AppError, AppResult};
use usergate_domain::UserId;

use crate::{UserProfile, UserSummary};

use super::{UserRecordService, user_not_found};

impl UserRecordService {
    /// Lists all users without email or credential fields.
    pub async fn list_users(&self) -> AppResult<Vec<UserSummary>> {
        self.user_repository
            .find_all()
            .await
            .inspect(|users| info!(count = users.len(), "listed users"))
            .inspect_err(|error| error!(error = %error, "failed to list users"))
    }

    /// Returns one user with email, or `NotFound`.
    pub async fn get_user(&self, user_id: UserId) -> AppResult<UserProfile> {
        let result = self
            .user_repository
            .find_by_id(user_id)
            .await
            .and_then(|user| user.ok_or_else(|| user_not_found(user_id)));

        match result {
            Ok(user) => {
                info!(user_id = %user_id, "retrieved user");
                Ok(UserProfile::from(user))
            }
            Err(error @ AppError::NotFound(_)) => {
                warn!(error = %error, user_id = %user_id, "user lookup missed");
                Err(error)
            }
            Err(error) => {
                error!(error = %error, user_id = %user_id, "failed to get user");
                Err(error)
            }
        }
    }
}
