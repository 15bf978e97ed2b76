pub mod config;
pub mod logger;
pub mod pages;
pub mod routes;
pub mod server;
mod service_layers;

#[cfg(test)]
mod test_support;
