mod fields;
mod store;
mod type_mapper;
mod walker;
mod well_known;

#[cfg(test)]
mod tests;

pub use store::ResolvedModels;
pub(crate) use type_mapper::TypeMapper;
pub use walker::Resolution;
pub(crate) use walker::TypeWalker;
pub use well_known::WellKnownTypes;
