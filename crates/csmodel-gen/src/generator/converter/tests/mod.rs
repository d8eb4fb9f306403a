mod support;
mod type_mapping;
