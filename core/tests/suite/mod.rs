// Aggregates the core integration tests as modules.
mod grid_properties;
mod navigation_properties;
