pub mod entities;
pub mod infra;
pub mod repository;
