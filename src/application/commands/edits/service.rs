// src/application/commands/edits/service.rs
use std::sync::Arc;

use crate::domain::article::BalanceArticleGateway;

pub struct ArticleEditService {
    pub(super) gateway: Arc<dyn BalanceArticleGateway>,
}

impl ArticleEditService {
    pub fn new(gateway: Arc<dyn BalanceArticleGateway>) -> Self {
        Self { gateway }
    }
}
