use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

use crate::models::{AnswerSet, Catalog, ParticipantAnswers, ParticipantSummary, Question};

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),
}

/// PostgreSQL store for the question catalog and participant answer sets
///
/// All writes that must be observed atomically (replacing a participant's
/// answer set, replacing the catalog) run inside a single transaction, so
/// readers see either the old state or the new one, never a mixture.
pub struct AnswerStore {
    pool: PgPool,
}

impl AnswerStore {
    /// Create a new store from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout_secs: u64,
        idle_timeout_secs: u64,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(idle_timeout_secs))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new store from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            acquire_timeout_secs.unwrap_or(5),
            idle_timeout_secs.unwrap_or(600),
        )
        .await
    }

    /// Replace the whole question catalog
    ///
    /// Deletes every existing question and inserts the given ones with their
    /// fixed ids. Stored answers reference questions with ON DELETE CASCADE,
    /// so replacing the catalog also clears all answer sets.
    ///
    /// # Returns
    /// The number of questions inserted.
    pub async fn replace_questions(&self, questions: &[Question]) -> Result<u64, StoreError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM questions").execute(&mut *tx).await?;

        for question in questions {
            sqlx::query(
                r#"
                INSERT INTO questions (id, text, options)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(question.id)
            .bind(&question.text)
            .bind(sqlx::types::Json(&question.options))
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::info!("Replaced question catalog ({} questions)", questions.len());

        Ok(questions.len() as u64)
    }

    /// Load the full question catalog, ordered by id
    pub async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        let rows = sqlx::query("SELECT id, text, options FROM questions ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        let questions = rows
            .iter()
            .map(|row| {
                let options: sqlx::types::Json<Vec<String>> = row.get("options");
                Question {
                    id: row.get("id"),
                    text: row.get("text"),
                    options: options.0,
                }
            })
            .collect();

        Ok(questions)
    }

    /// Load just the catalog's question ids, ordered by id
    pub async fn catalog(&self) -> Result<Catalog, StoreError> {
        let rows = sqlx::query("SELECT id FROM questions ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(Catalog::new(rows.iter().map(|row| row.get("id")).collect()))
    }

    /// Store a participant's answer set, replacing any previous submission
    ///
    /// Creates the participant row on first submission. The delete of the old
    /// answers and the insert of the new ones commit together, so a resubmit
    /// is observed as a single switch from the old set to the new one.
    ///
    /// # Returns
    /// The participant's id.
    pub async fn submit_answer_set(
        &self,
        name: &str,
        answers: &AnswerSet,
    ) -> Result<i64, StoreError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            r#"
            INSERT INTO participants (name)
            VALUES ($1)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING id
            "#,
        )
        .bind(name)
        .fetch_one(&mut *tx)
        .await?;
        let participant_id: i64 = row.get("id");

        sqlx::query("DELETE FROM answers WHERE participant_id = $1")
            .bind(participant_id)
            .execute(&mut *tx)
            .await?;

        for (question_id, option_index) in answers {
            sqlx::query(
                r#"
                INSERT INTO answers (participant_id, question_id, option_index)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(participant_id)
            .bind(*question_id)
            .bind(*option_index)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::debug!(
            "Stored {} answers for participant {} (id {})",
            answers.len(),
            name,
            participant_id
        );

        Ok(participant_id)
    }

    /// Look up a participant id by name
    pub async fn find_participant(&self, name: &str) -> Result<Option<i64>, StoreError> {
        let row = sqlx::query("SELECT id FROM participants WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.get("id")))
    }

    /// List every participant with their stored answer count, ordered by name
    pub async fn list_participants(&self) -> Result<Vec<ParticipantSummary>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT p.id, p.name, COUNT(a.question_id) AS answer_count
            FROM participants p
            LEFT JOIN answers a ON a.participant_id = p.id
            GROUP BY p.id, p.name
            ORDER BY p.name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let participants = rows
            .iter()
            .map(|row| ParticipantSummary {
                id: row.get("id"),
                name: row.get("name"),
                answer_count: row.get("answer_count"),
            })
            .collect();

        Ok(participants)
    }

    /// Load every participant's answer set for matching
    pub async fn load_answer_sets(&self) -> Result<Vec<ParticipantAnswers>, StoreError> {
        let participant_rows = sqlx::query("SELECT id, name FROM participants ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await?;

        let answer_rows =
            sqlx::query("SELECT participant_id, question_id, option_index FROM answers")
                .fetch_all(&self.pool)
                .await?;

        let mut by_id: HashMap<i64, usize> = HashMap::with_capacity(participant_rows.len());
        let mut sets: Vec<ParticipantAnswers> = Vec::with_capacity(participant_rows.len());

        for row in &participant_rows {
            let id: i64 = row.get("id");
            by_id.insert(id, sets.len());
            sets.push(ParticipantAnswers {
                name: row.get("name"),
                answers: AnswerSet::new(),
            });
        }

        for row in &answer_rows {
            let participant_id: i64 = row.get("participant_id");
            if let Some(&idx) = by_id.get(&participant_id) {
                sets[idx]
                    .answers
                    .insert(row.get("question_id"), row.get("option_index"));
            }
        }

        tracing::debug!("Loaded answer sets for {} participants", sets.len());

        Ok(sets)
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
