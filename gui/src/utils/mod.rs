pub(crate) mod command;
pub(crate) mod defines;
pub(crate) mod logger;
pub(crate) mod runtime;
