mod properties;
mod tracing;
