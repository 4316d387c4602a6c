//! Value objects representing immutable domain concepts.

pub mod secret_material;

pub use secret_material::SecretMaterial;
