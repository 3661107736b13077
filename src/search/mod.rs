pub mod dijkstra;
pub mod path;
pub mod path_table;
