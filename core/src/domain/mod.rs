pub mod authentication;
pub mod category;
pub mod common;
pub mod crypto;
pub mod health;
pub mod jwt;
pub mod product;
pub mod user;
