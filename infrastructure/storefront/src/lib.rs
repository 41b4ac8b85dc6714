pub mod client;
pub mod product_catalog;
pub mod stock_service;

#[cfg(test)]
mod test_server;
