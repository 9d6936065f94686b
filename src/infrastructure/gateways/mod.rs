// src/infrastructure/gateways/mod.rs
mod error;
mod postgres_balance_api;
mod sql_script;

pub use error::map_sqlx;
pub use postgres_balance_api::PostgresBalanceArticleGateway;
pub use sql_script::{SqlScript, SqlScriptGateway, render_edit};
