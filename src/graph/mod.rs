pub mod edge_body;
pub mod edge_geometry;
pub mod edge_label;
pub mod edge_view;
pub mod events;
pub mod visibility;
