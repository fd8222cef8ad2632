pub(crate) mod builtin;
pub(crate) mod font;
pub(crate) mod layout;
pub(crate) mod rich;
pub(crate) mod zone;
