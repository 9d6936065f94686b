// tests/support/mocks/gateway.rs
use async_trait::async_trait;
use balance_catalog::domain::article::{
    ArticleId, ArticleLevel, ArticleName, ArticleOrdinal, BalanceArticleGateway, PROC_LEVEL_SET,
    PROC_ORD_SET, PROC_RENAME, ValidityDate, ValidityWindow,
};
use balance_catalog::domain::errors::{DomainError, DomainResult};
use chrono::NaiveDate;
use std::sync::Mutex;

/// Flattened view of a gateway call with plain values, easy to assert on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    Rename {
        article_id: i64,
        name: String,
        from: NaiveDate,
        until: NaiveDate,
    },
    LevelSet {
        article_id: i64,
        from: NaiveDate,
        until: NaiveDate,
        parent_id: Option<i64>,
        level: Option<i32>,
    },
    OrdSet {
        article_id: i64,
        ordinal: i32,
        valid_date: NaiveDate,
    },
}

/// Records every call; optionally fails when a given procedure is called.
/// Failed calls are recorded too, since the remote side did receive them.
#[derive(Default)]
pub struct RecordingGateway {
    calls: Mutex<Vec<RecordedCall>>,
    fail_on: Option<&'static str>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(procedure: &'static str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_on: Some(procedure),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, procedure: &'static str, call: RecordedCall) -> DomainResult<()> {
        self.calls.lock().unwrap().push(call);
        if self.fail_on == Some(procedure) {
            return Err(DomainError::remote_call(procedure, "simulated failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl BalanceArticleGateway for RecordingGateway {
    async fn rename(
        &self,
        article_id: ArticleId,
        name: &ArticleName,
        window: ValidityWindow,
    ) -> DomainResult<()> {
        self.record(
            PROC_RENAME,
            RecordedCall::Rename {
                article_id: article_id.into(),
                name: name.as_str().to_string(),
                from: window.valid_from().date(),
                until: window.valid_until().date(),
            },
        )
    }

    async fn set_level(
        &self,
        article_id: ArticleId,
        window: ValidityWindow,
        parent_id: Option<ArticleId>,
        level: Option<ArticleLevel>,
    ) -> DomainResult<()> {
        self.record(
            PROC_LEVEL_SET,
            RecordedCall::LevelSet {
                article_id: article_id.into(),
                from: window.valid_from().date(),
                until: window.valid_until().date(),
                parent_id: parent_id.map(i64::from),
                level: level.map(i32::from),
            },
        )
    }

    async fn set_ord(
        &self,
        article_id: ArticleId,
        ordinal: ArticleOrdinal,
        valid_from: ValidityDate,
    ) -> DomainResult<()> {
        self.record(
            PROC_ORD_SET,
            RecordedCall::OrdSet {
                article_id: article_id.into(),
                ordinal: ordinal.into(),
                valid_date: valid_from.date(),
            },
        )
    }
}
