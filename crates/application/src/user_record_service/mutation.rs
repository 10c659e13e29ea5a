use chrono::Utc;
use tracing::info;
use usergate_core::AppResult;
use usergate_domain::{Actor, UserId, UserUpdate};

use crate::{DeletedUser, Operation, StoredUser, UserChanges, UserProfile};

use super::{UserRecordService, log_mutation_failure, user_not_found};

impl UserRecordService {
    /// Applies a partial update on behalf of `actor`.
    ///
    /// Existence is checked before authorization. A denied update fails with
    /// `Forbidden` before the password is hashed or anything is written.
    pub async fn update_user(
        &self,
        actor: &Actor,
        user_id: UserId,
        update: UserUpdate,
    ) -> AppResult<UserProfile> {
        self.apply_update(actor, user_id, update)
            .await
            .inspect(|_| info!(actor_id = %actor, target_id = %user_id, "user updated"))
            .inspect_err(|error| log_mutation_failure(error, actor, user_id, Operation::Update))
    }

    /// Deletes a user on behalf of `actor`. A repeated call fails `NotFound`.
    pub async fn delete_user(&self, actor: &Actor, user_id: UserId) -> AppResult<DeletedUser> {
        self.apply_delete(actor, user_id)
            .await
            .inspect(|_| info!(actor_id = %actor, target_id = %user_id, "user deleted"))
            .inspect_err(|error| log_mutation_failure(error, actor, user_id, Operation::Delete))
    }

    async fn apply_update(
        &self,
        actor: &Actor,
        user_id: UserId,
        update: UserUpdate,
    ) -> AppResult<UserProfile> {
        self.require_existing(user_id).await?;

        self.policy
            .can_modify(
                actor,
                user_id,
                Operation::Update,
                update.attempts_role_change(),
            )
            .into_result(Operation::Update)?;

        let changes = UserChanges::prepare(update, self.password_hasher.as_ref(), Utc::now())?;

        // The row may vanish between the existence check and the write.
        let updated = self
            .user_repository
            .update(user_id, &changes)
            .await?
            .ok_or_else(|| user_not_found(user_id))?;

        Ok(UserProfile::from(updated))
    }

    async fn apply_delete(&self, actor: &Actor, user_id: UserId) -> AppResult<DeletedUser> {
        self.require_existing(user_id).await?;

        self.policy
            .can_modify(actor, user_id, Operation::Delete, false)
            .into_result(Operation::Delete)?;

        if !self.user_repository.delete(user_id).await? {
            return Err(user_not_found(user_id));
        }

        Ok(DeletedUser { id: user_id })
    }

    async fn require_existing(&self, user_id: UserId) -> AppResult<StoredUser> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| user_not_found(user_id))
    }
}
