pub mod force_graph;
pub mod icons;
pub mod reveal;
pub mod seo;
