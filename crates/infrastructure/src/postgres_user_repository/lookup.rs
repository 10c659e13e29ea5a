use super::*;

impl PostgresUserRepository {
    pub(super) async fn find_by_id_impl(&self, user_id: UserId) -> AppResult<Option<StoredUser>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, password_hash, role, created_at, updated_at
            FROM users
            WHERE id = $1
            LIMIT 1
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| storage_error(error, "find user by id"))?;

        row.map(StoredUser::try_from).transpose()
    }

    pub(super) async fn find_all_impl(&self) -> AppResult<Vec<UserSummary>> {
        let rows = sqlx::query_as::<_, UserSummaryRow>(
            r#"
            SELECT id, name, role, created_at, updated_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| storage_error(error, "list users"))?;

        rows.into_iter().map(UserSummary::try_from).collect()
    }
}
