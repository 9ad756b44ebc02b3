pub(crate) mod avatar_generator;
