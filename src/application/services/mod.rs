// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{commands::edits::ArticleEditService, ports::time::Clock},
    domain::article::BalanceArticleGateway,
};

pub struct ApplicationServices {
    pub edit_commands: Arc<ArticleEditService>,
    clock: Arc<dyn Clock>,
}

impl ApplicationServices {
    pub fn new(gateway: Arc<dyn BalanceArticleGateway>, clock: Arc<dyn Clock>) -> Self {
        Self {
            edit_commands: Arc::new(ArticleEditService::new(gateway)),
            clock,
        }
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }
}
