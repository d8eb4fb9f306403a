mod attributes;
mod types;
