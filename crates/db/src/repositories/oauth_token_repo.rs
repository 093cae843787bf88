//! Repository for the `google_oauth_tokens` table.

use sqlx::PgPool;

use crate::models::oauth_token::{GoogleOauthToken, UpsertGoogleOauthToken};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, coach_id, coach_email, access_token, refresh_token, \
                       expires_in, expires_at, scope, created_at, updated_at";

/// Provides upsert / read / delete operations for stored credentials.
///
/// All writes go through the uniqueness constraint on `coach_id`, so
/// concurrent saves for the same coach are last-writer-wins; the trigger
/// on the table recomputes `updated_at` and `expires_at` on every write.
pub struct OauthTokenRepo;

impl OauthTokenRepo {
    /// Insert or replace the credential set for a coach, returning the row.
    pub async fn upsert(
        pool: &PgPool,
        coach_id: &str,
        input: &UpsertGoogleOauthToken,
    ) -> Result<GoogleOauthToken, sqlx::Error> {
        let query = format!(
            "INSERT INTO google_oauth_tokens
                 (coach_id, coach_email, access_token, refresh_token, expires_in, scope)
             VALUES ($1, $2, $3, $4, COALESCE($5, 3600), $6)
             ON CONFLICT (coach_id) DO UPDATE SET
                 coach_email = EXCLUDED.coach_email,
                 access_token = EXCLUDED.access_token,
                 refresh_token = EXCLUDED.refresh_token,
                 expires_in = EXCLUDED.expires_in,
                 scope = EXCLUDED.scope
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GoogleOauthToken>(&query)
            .bind(coach_id)
            .bind(&input.coach_email)
            .bind(&input.access_token)
            .bind(&input.refresh_token)
            .bind(input.expires_in)
            .bind(&input.scope)
            .fetch_one(pool)
            .await
    }

    /// Find the credential row for a coach.
    pub async fn find_by_coach_id(
        pool: &PgPool,
        coach_id: &str,
    ) -> Result<Option<GoogleOauthToken>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM google_oauth_tokens WHERE coach_id = $1");
        sqlx::query_as::<_, GoogleOauthToken>(&query)
            .bind(coach_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete the credential row for a coach. Returns `true` if a row was removed.
    pub async fn delete_by_coach_id(pool: &PgPool, coach_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM google_oauth_tokens WHERE coach_id = $1")
            .bind(coach_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all stored credential rows.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM google_oauth_tokens")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
