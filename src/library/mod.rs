pub(crate) mod named;
pub(crate) mod store;
