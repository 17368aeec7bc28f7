pub mod configure;
pub mod convert;
pub mod generate;
