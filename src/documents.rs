pub mod dto;
pub mod factory;
pub mod repository;
