// Application layer: the use cases the binary exposes, built on core and config.

pub mod commands;
