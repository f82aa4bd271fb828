pub(crate) mod fallback;
pub(crate) mod generator;
pub(crate) mod prompt;
pub(crate) mod service;
