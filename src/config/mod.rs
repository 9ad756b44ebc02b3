pub(crate) mod tables;
