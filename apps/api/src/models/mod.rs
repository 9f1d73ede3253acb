pub mod article;
pub mod fact_check;
pub mod user;
