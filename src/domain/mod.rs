// Domain layer: value objects only. No dependencies beyond serde.

pub mod model;
