#[allow(non_snake_case)]
pub mod Aqueous;
pub mod cli;
pub mod formula_store;
pub mod store_config;
