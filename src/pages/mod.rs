pub mod knowledge_graph;
pub mod not_found;
