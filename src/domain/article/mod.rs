pub mod entity;
pub mod gateway;
pub mod value_objects;

pub use entity::{
    ArticleEdit, ArticleEditRequest, ArticleEditRequestBuilder, PROC_LEVEL_SET, PROC_ORD_SET,
    PROC_RENAME,
};
pub use gateway::BalanceArticleGateway;
pub use value_objects::{
    ArticleId, ArticleLevel, ArticleName, ArticleOrdinal, LEVEL_UNCHANGED, OPEN_ENDED,
    ValidityDate, ValidityWindow,
};
