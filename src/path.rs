pub(crate) mod geometry;
pub(crate) mod log;
pub(crate) mod translate;
