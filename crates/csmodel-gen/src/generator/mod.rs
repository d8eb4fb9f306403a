pub mod ast;
pub mod binding;
pub mod catalog;
pub mod codegen;
pub mod converter;
pub mod errors;
pub mod metrics;
pub mod orchestrator;
pub mod output;
pub mod overrides;
pub mod registry;
pub(crate) mod type_graph;
