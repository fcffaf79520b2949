pub(crate) mod bitmap;
pub(crate) mod context;
pub(crate) mod cpu;
pub(crate) mod replay;
pub(crate) mod svg_doc;
