pub(crate) mod rest_provider;

pub use rest_provider::RestProvider;
