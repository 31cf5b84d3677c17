pub mod graph_serializer;
pub mod include;
pub mod projection;

pub use graph_serializer::*;
pub use include::*;
pub use projection::*;
