pub(crate) mod email;
pub(crate) mod model;
pub(crate) mod resolve;
