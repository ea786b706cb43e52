//! Build-time settings for the explorer.

/// Static path the graph document is served from.
pub const GRAPH_DATA_URL: &str = "/data/knowledge_graph.json";

pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 600.0;

/// Topics listed in the details panel before collapsing into "+N more".
pub const TOPIC_DISPLAY_LIMIT: usize = 8;

/// Pointer travel, in screen pixels, below which a press/release is a click.
pub const CLICK_TOLERANCE: f64 = 4.0;

pub const FOCUS_ZOOM: f64 = 2.0;
/// Seconds taken to centre on a node.
pub const FOCUS_DURATION: f64 = 1.0;
