pub(crate) mod applier;
pub(crate) mod bridge;
pub(crate) mod memory;
