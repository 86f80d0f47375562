//! Data module - CSV loading, cleaning and output

mod loader;
mod processor;
mod writer;

pub use loader::DataLoader;
pub use processor::DataProcessor;
pub use writer::DataWriter;
