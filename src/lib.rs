//! # ctml2yaml - CTML to YAML Mechanism Converter
//!
//! `ctml2yaml` translates chemical kinetics mechanisms written in the legacy CTML
//! (XML) format into the YAML mechanism format.
//!
//! ## Key Features
//!
//! - **Ideal-gas phases**: thermo, kinetics and transport model names are mapped to
//!   their YAML spellings; any unknown tag aborts the conversion.
//!
//! - **NASA7 species thermo**: two-interval polynomial fits with a consistency check
//!   on the shared midpoint temperature.
//!
//! - **Reaction rate forms**: plain Arrhenius, three-body, Lindemann and Troe falloff,
//!   pressure-dependent Arrhenius (PLOG) and Chebyshev.
//!
//! - **Unit-carrying quantities**: CTML unit strings such as `cm3/mol/s` are rewritten
//!   to `cm^3/mol/s` and attached to the value.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ctml2yaml::convert::CtmlConverter;
//!
//! let converter = CtmlConverter::new();
//! let stats = converter.convert("h2o2.xml", "h2o2.yaml")?;
//! println!("Wrote {} reactions", stats.reactions);
//! # Ok::<(), ctml2yaml::convert::ConversionError>(())
//! ```
//!
//! Conversion from an in-memory document:
//!
//! ```rust
//! use ctml2yaml::convert::CtmlConverter;
//!
//! let ctml = r#"<ctml>
//!   <phase id="gas">
//!     <elementArray>O H</elementArray>
//!     <speciesArray>H2</speciesArray>
//!     <thermo model="IdealGas"/>
//!     <kinetics model="GasKinetics"/>
//!   </phase>
//!   <speciesData/>
//!   <reactionData/>
//! </ctml>"#;
//!
//! let yaml = CtmlConverter::new().convert_str(ctml)?;
//! assert!(yaml.contains("thermo: ideal-gas"));
//! # Ok::<(), ctml2yaml::convert::ConversionError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`ctml`]: element tree built from the XML pull parser, plus text helpers
//! - [`units`]: float formatting, unit normalisation and unit-carrying quantities
//! - [`model`]: typed mechanism records (phases, species, reactions)
//! - [`yaml`]: conversion of records into a `yaml-rust2` tree, and its emitter
//! - [`convert`]: CTML to model translation and the file-level converter

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod convert;
pub mod ctml;
pub mod model;
pub mod units;
pub mod yaml;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::convert::{
        translate_document, ConversionConfig, ConversionError, ConversionStats, CtmlConverter,
    };
    pub use crate::ctml::{parse_document, CtmlError, Element};
    pub use crate::model::{Mechanism, Phase, RateExpression, Reaction, Species};
    pub use crate::units::{float_to_string, normalize_units, Quantity};
    pub use crate::yaml::{EmitterConfig, Hash, HashExt, ToYaml, Yaml, YamlEmitter};
}
