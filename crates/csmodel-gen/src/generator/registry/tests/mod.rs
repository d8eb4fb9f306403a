mod builder;
mod struct_tags;
