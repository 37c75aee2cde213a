pub mod graph;
pub mod ntriples;
pub mod vocabulary;

pub use graph::{Graph, Literal, Resource, Term, Value};
