//! CTML to YAML converter
//!
//! This module provides the translation pipeline: parse the CTML tree, translate
//! phases, species and reactions in document order, then render the YAML document.
//! Any unknown model or type tag aborts the whole conversion; no output file is
//! created unless every record translated.

use std::io::BufRead;
use std::path::Path;

use log::{debug, info};

use crate::ctml::{parse_document, CtmlError, Element};
use crate::model::Mechanism;
use crate::yaml::{EmitError, EmitterConfig, ToYaml, YamlEmitter};

mod phase;
mod reaction;
mod species;

pub use phase::translate_phase;
pub use reaction::{translate_rate, translate_reaction};
pub use species::{translate_nasa7, translate_species, translate_transport};

/// Errors that can occur during conversion
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// Error reading the input CTML document
    #[error("CTML error: {0}")]
    CtmlError(#[from] CtmlError),

    /// I/O error writing the output
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML serialization failure
    #[error("YAML emit error: {0}")]
    EmitError(#[from] EmitError),

    /// Phase thermo model not in the known set
    #[error("Unknown thermo model '{model}' for phase '{phase}'")]
    UnknownThermoModel {
        /// Phase id
        phase: String,
        /// Offending tag
        model: String,
    },

    /// Phase kinetics model not in the known set
    #[error("Unknown kinetics model '{model}' for phase '{phase}'")]
    UnknownKineticsModel {
        /// Phase id
        phase: String,
        /// Offending tag
        model: String,
    },

    /// Phase transport model not in the known set
    #[error("Unknown transport model '{model}' for phase '{phase}'")]
    UnknownTransportModel {
        /// Phase id
        phase: String,
        /// Offending tag
        model: String,
    },

    /// Species thermo block of an unsupported kind
    #[error("Unknown thermo model type: '{tag}' for species '{species}'")]
    UnknownSpeciesThermo {
        /// Species name
        species: String,
        /// Tag of the first child of `thermo`
        tag: String,
    },

    /// Species transport model not in the known set
    #[error("Unknown transport model type: '{model}' for species '{species}'")]
    UnknownSpeciesTransport {
        /// Species name
        species: String,
        /// Offending tag
        model: String,
    },

    /// Reaction `type` attribute not in the known set
    #[error("Unknown reaction type '{kind}' for reaction id {id}")]
    UnknownReactionType {
        /// Reaction id
        id: String,
        /// Offending type
        kind: String,
    },

    /// Falloff `type` other than Lindemann or Troe
    #[error("Unknown falloff type '{kind}' for reaction id {id}")]
    UnknownFalloffType {
        /// Reaction id
        id: String,
        /// Offending type
        kind: String,
    },

    /// Falloff reaction with more than one Arrhenius node per limit, or a node
    /// that is neither limit
    #[error("Too many Arrhenius nodes for falloff reaction id {id}")]
    TooManyArrhenius {
        /// Reaction id
        id: String,
    },

    /// Falloff reaction lacking one of its two limits
    #[error("Missing {limit} Arrhenius node for falloff reaction id {id}")]
    MissingFalloffLimit {
        /// Reaction id
        id: String,
        /// `low-pressure` or `high-pressure`
        limit: &'static str,
    },

    /// NASA7 segments that do not share a single midpoint temperature
    #[error("The midpoint temperature is not consistent between NASA7 entries for species '{species}' ({distinct} distinct temperatures, expected 3)")]
    InconsistentMidpoint {
        /// Species name
        species: String,
        /// Number of distinct breakpoints found
        distinct: usize,
    },

    /// Chebyshev coefficient rows that do not match the declared temperature degree
    #[error("The number of rows of the data ({found}) do not match the specified temperature degree ({expected}) for reaction id {id}")]
    ChebyshevShape {
        /// Reaction id
        id: String,
        /// Declared `degreeT`
        expected: usize,
        /// Rows after reshaping
        found: usize,
    },

    /// Chebyshev `degreeP` of zero
    #[error("Invalid Chebyshev pressure degree for reaction id {id}")]
    InvalidChebyshevDegree {
        /// Reaction id
        id: String,
    },
}

/// Configuration for the conversion
#[derive(Debug, Clone, Default)]
pub struct ConversionConfig {
    /// Output layout
    pub emitter: EmitterConfig,
}

/// Statistics from a conversion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Phases translated
    pub phases: usize,
    /// Species translated
    pub species: usize,
    /// Reactions translated
    pub reactions: usize,
    /// Size of the YAML document
    pub bytes_written: usize,
}

impl ConversionStats {
    fn for_mechanism(mechanism: &Mechanism) -> Self {
        Self {
            phases: mechanism.phases.len(),
            species: mechanism.species.len(),
            reactions: mechanism.reactions.len(),
            bytes_written: 0,
        }
    }
}

/// Converter from CTML documents to YAML
#[derive(Debug, Clone, Default)]
pub struct CtmlConverter {
    config: ConversionConfig,
}

impl CtmlConverter {
    /// Create a converter with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with custom configuration
    pub fn with_config(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Convert a CTML file into a YAML file
    pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<ConversionStats, ConversionError> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!("Converting {} to {}", input_path.display(), output_path.display());

        let root = Element::open(input_path)?;
        let mechanism = translate_document(&root)?;
        let yaml = self.render(&mechanism)?;

        std::fs::write(output_path, &yaml)?;

        let stats = ConversionStats {
            bytes_written: yaml.len(),
            ..ConversionStats::for_mechanism(&mechanism)
        };
        info!(
            "Wrote {} phases, {} species, {} reactions ({} bytes)",
            stats.phases, stats.species, stats.reactions, stats.bytes_written
        );
        Ok(stats)
    }

    /// Convert CTML read from any buffered source into a YAML string
    pub fn convert_reader<R: BufRead>(&self, source: R) -> Result<String, ConversionError> {
        let root = parse_document(source)?;
        let mechanism = translate_document(&root)?;
        self.render(&mechanism)
    }

    /// Convert CTML text into a YAML string
    pub fn convert_str(&self, ctml: &str) -> Result<String, ConversionError> {
        self.convert_reader(ctml.as_bytes())
    }

    /// Render a translated mechanism with this converter's layout
    pub fn render(&self, mechanism: &Mechanism) -> Result<String, ConversionError> {
        let yaml = YamlEmitter::new(self.config.emitter.clone()).emit(&mechanism.to_yaml())?;
        Ok(yaml)
    }
}

/// Translate a parsed CTML root into phases, species and reactions
pub fn translate_document(root: &Element) -> Result<Mechanism, ConversionError> {
    let mut mechanism = Mechanism::default();

    for node in root.find_all("phase") {
        let phase = translate_phase(node)?;
        debug!("Translated phase '{}'", phase.name);
        mechanism.phases.push(phase);
    }

    for node in root.require("speciesData")?.find_all("species") {
        let species = translate_species(node)?;
        debug!("Translated species '{}'", species.name);
        mechanism.species.push(species);
    }

    for node in root.require("reactionData")?.find_all("reaction") {
        let reaction = translate_reaction(node)?;
        debug!("Translated reaction '{}'", reaction.equation);
        mechanism.reactions.push(reaction);
    }

    info!(
        "Translated {} phases, {} species, {} reactions",
        mechanism.phases.len(),
        mechanism.species.len(),
        mechanism.reactions.len()
    );
    Ok(mechanism)
}
