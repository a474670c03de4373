pub mod lattice;

pub use lattice::generate_lattice;
