pub mod cors;
pub mod jwt;
