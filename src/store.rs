//! Database bootstrap: create the database and the news tables if missing.

use crate::error::ApiError;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

/// Table DDL in foreign key dependency order.
const TABLE_DDL: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS topics (
        slug TEXT PRIMARY KEY,
        description TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS users (
        username TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        avatar_url TEXT
    )",
    "CREATE TABLE IF NOT EXISTS articles (
        article_id SERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        topic TEXT NOT NULL REFERENCES topics(slug),
        author TEXT NOT NULL REFERENCES users(username),
        body TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        votes INT NOT NULL DEFAULT 0
    )",
    "CREATE TABLE IF NOT EXISTS comments (
        comment_id SERIAL PRIMARY KEY,
        author TEXT NOT NULL REFERENCES users(username),
        article_id INT NOT NULL REFERENCES articles(article_id),
        votes INT NOT NULL DEFAULT 0,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        body TEXT NOT NULL
    )",
];

/// Create the news tables if they do not exist. Idempotent.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), ApiError> {
    for ddl in TABLE_DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

/// Ensure the database named in `database_url` exists; create it if not.
/// Connects to the default `postgres` database to run CREATE DATABASE. Call
/// before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), ApiError> {
    let opts = PgConnectOptions::from_str(database_url)
        .map_err(|e| ApiError::BadRequest(format!("invalid DATABASE_URL: {e}")))?;
    let Some(db_name) = opts.get_database().map(str::to_owned) else {
        return Ok(());
    };
    if db_name == "postgres" {
        return Ok(());
    }
    let mut conn = opts.database("postgres").connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
