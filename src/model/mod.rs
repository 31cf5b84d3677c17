pub mod company;
pub mod graph;
pub mod relation;
pub mod response;

pub use company::*;
pub use graph::*;
pub use relation::*;
pub use response::*;
