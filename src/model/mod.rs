//! Translated records
//!
//! These types hold one CTML document after translation, in a Rust-native form.
//! Each record knows how to build its part of the YAML output tree through
//! [`ToYaml`]; none of them is mutated after the translator constructs it.

mod phase;
mod reaction;
mod species;

pub use phase::{KineticsModel, Phase, ThermoModel, TransportModel};
pub use reaction::{
    Arrhenius, ChebyshevRate, Efficiencies, Falloff, PlogRate, RateExpression, Reaction,
    TroeParams,
};
pub use species::{
    Composition, Nasa7Thermo, Species, SpeciesTransport, SpeciesTransportModel,
    TransportProperty,
};

use crate::yaml::{Hash, HashExt, ToYaml, Yaml};

/// A complete translated document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mechanism {
    /// Phases in document order
    pub phases: Vec<Phase>,

    /// Species in document order
    pub species: Vec<Species>,

    /// Reactions in document order
    pub reactions: Vec<Reaction>,
}

impl ToYaml for Mechanism {
    fn to_yaml(&self) -> Yaml {
        Yaml::Hash(
            Hash::new()
                .with("phases", &self.phases)
                .with("species", &self.species)
                .with("reactions", &self.reactions),
        )
    }
}
