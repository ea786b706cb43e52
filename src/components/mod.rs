pub mod force_graph;
pub mod graph_stats;
pub mod node_details;
pub mod sample_queries;
