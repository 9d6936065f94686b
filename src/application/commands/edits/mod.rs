// src/application/commands/edits/mod.rs
mod apply;
mod plan;
mod service;

pub use apply::ApplyArticleEditCommand;
pub use plan::ApplyEditPlanCommand;
pub use service::ArticleEditService;
