use super::*;

impl PostgresUserRepository {
    pub(super) async fn update_impl(
        &self,
        user_id: UserId,
        changes: &UserChanges,
    ) -> AppResult<Option<StoredUser>> {
        // Absent fields keep their stored value.
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                password_hash = COALESCE($4, password_hash),
                role = COALESCE($5, role),
                updated_at = $6
            WHERE id = $1
            RETURNING id, name, email, password_hash, role, created_at, updated_at
            "#,
        )
        .bind(user_id.as_i64())
        .bind(changes.name.as_deref())
        .bind(changes.email.as_deref())
        .bind(changes.password_hash.as_deref())
        .bind(changes.role.map(|role| role.as_str()))
        .bind(changes.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| storage_error(error, "update user"))?;

        row.map(StoredUser::try_from).transpose()
    }

    pub(super) async fn delete_impl(&self, user_id: UserId) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(|error| storage_error(error, "delete user"))?;

        Ok(result.rows_affected() > 0)
    }
}
