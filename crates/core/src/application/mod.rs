// Application Layer - Use Cases

pub mod trim_galore_pe;

// Re-exports
pub use trim_galore_pe::TrimGalorePe;
