pub mod db;
pub mod errors;
pub mod probe;
pub mod service;
pub mod work;

#[cfg(test)]
mod tests;
