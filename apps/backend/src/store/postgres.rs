//! PostgreSQL card store

use async_trait::async_trait;
use chrono::NaiveDate;
use leitner_core::{Card, CardId, Category, CoreError, NewCard, Result};
use sqlx::{postgres::PgPoolOptions, FromRow, PgPool};

use super::{CardStore, Mutation};
use crate::error::ApiError;

/// Card row as stored in PostgreSQL.
/// `seq` and the audit timestamps stay in the table and are not loaded.
#[derive(Debug, Clone, FromRow)]
pub struct DbCard {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub tag: Option<String>,
    pub category: String,
    pub last_reviewed_at: Option<NaiveDate>,
}

impl DbCard {
    /// Convert to the core card type
    pub fn to_core_card(&self) -> Result<Card> {
        let category = Category::from_str(&self.category).ok_or_else(|| {
            CoreError::store(format!(
                "card {} has unknown category {}",
                self.id, self.category
            ))
        })?;

        Ok(Card {
            id: CardId::from(self.id.clone()),
            question: self.question.clone(),
            answer: self.answer.clone(),
            tag: self.tag.clone(),
            category,
            last_reviewed_at: self.last_reviewed_at,
        })
    }
}

const CARD_COLUMNS: &str = "id, question, answer, tag, category, last_reviewed_at";

/// Card store with a connection pool
#[derive(Clone)]
pub struct PgCardStore {
    pool: PgPool,
}

impl PgCardStore {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str) -> std::result::Result<Self, ApiError> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> std::result::Result<(), ApiError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CardStore for PgCardStore {
    async fn create(&self, new_card: NewCard) -> Result<Card> {
        let card = Card::create(CardId::generate(), new_card)?;

        sqlx::query(
            r#"
            INSERT INTO cards (id, question, answer, tag, category)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(card.id.as_str())
        .bind(&card.question)
        .bind(&card.answer)
        .bind(&card.tag)
        .bind(card.category.as_str())
        .execute(&self.pool)
        .await
        .map_err(CoreError::store)?;

        tracing::debug!("Inserted card {}", card.id);
        Ok(card)
    }

    async fn list(&self, tags: &[String]) -> Result<Vec<Card>> {
        let rows = if tags.is_empty() {
            sqlx::query_as::<_, DbCard>(&format!(
                "SELECT {CARD_COLUMNS} FROM cards ORDER BY seq"
            ))
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, DbCard>(&format!(
                "SELECT {CARD_COLUMNS} FROM cards WHERE tag = ANY($1) ORDER BY seq"
            ))
            .bind(tags)
            .fetch_all(&self.pool)
            .await
        }
        .map_err(CoreError::store)?;

        rows.iter().map(DbCard::to_core_card).collect()
    }

    async fn get(&self, id: &CardId) -> Result<Card> {
        let row = sqlx::query_as::<_, DbCard>(&format!(
            "SELECT {CARD_COLUMNS} FROM cards WHERE id = $1"
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(CoreError::store)?
        .ok_or_else(|| CoreError::NotFound(id.clone()))?;

        row.to_core_card()
    }

    async fn update(&self, id: &CardId, mutation: Mutation<'_>) -> Result<Card> {
        let mut tx = self.pool.begin().await.map_err(CoreError::store)?;

        // Row lock held until commit serializes writers on this id.
        let row = sqlx::query_as::<_, DbCard>(&format!(
            "SELECT {CARD_COLUMNS} FROM cards WHERE id = $1 FOR UPDATE"
        ))
        .bind(id.as_str())
        .fetch_optional(&mut *tx)
        .await
        .map_err(CoreError::store)?
        .ok_or_else(|| CoreError::NotFound(id.clone()))?;

        let mut card = row.to_core_card()?;
        let update = mutation(&card);
        card.apply(update);

        sqlx::query(
            r#"
            UPDATE cards
            SET category = $2, last_reviewed_at = $3, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .bind(card.category.as_str())
        .bind(card.last_reviewed_at)
        .execute(&mut *tx)
        .await
        .map_err(CoreError::store)?;

        tx.commit().await.map_err(CoreError::store)?;
        Ok(card)
    }
}
