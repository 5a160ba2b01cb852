pub mod aggregate;
pub mod endpoint;
pub mod source;
pub mod timezone;

pub use aggregate::Country;
pub use endpoint::Endpoint;
pub use source::CountrySource;
