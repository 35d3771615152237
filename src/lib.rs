pub mod cart;
pub mod catalog;
pub mod documents;

pub mod core {
    pub mod command;
    pub mod controller;
    pub mod domain;
    pub mod library;
    pub mod repository;
}

pub mod session {
    pub mod model;
    pub mod store;
    pub mod view;
}

pub mod utils {
    pub mod date;
    pub mod http;
}
