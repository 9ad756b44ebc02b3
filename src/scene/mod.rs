pub(crate) mod face;
pub(crate) mod identicon;
pub(crate) mod initials;
pub(crate) mod primitive;
pub(crate) mod shapes;
