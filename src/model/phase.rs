use crate::yaml::{Hash, HashExt, ToYaml, Yaml};

/// Phase thermodynamic model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThermoModel {
    /// CTML `IdealGas`
    IdealGas,
}

impl ThermoModel {
    /// Look up a CTML `thermo/@model` tag
    pub fn from_ctml(tag: &str) -> Option<Self> {
        match tag {
            "IdealGas" => Some(ThermoModel::IdealGas),
            _ => None,
        }
    }

    /// Output name
    pub fn as_str(&self) -> &'static str {
        match self {
            ThermoModel::IdealGas => "ideal-gas",
        }
    }
}

/// Phase kinetics model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KineticsModel {
    /// CTML `GasKinetics`
    Gas,
}

impl KineticsModel {
    /// Look up a CTML `kinetics/@model` tag
    pub fn from_ctml(tag: &str) -> Option<Self> {
        match tag {
            "GasKinetics" => Some(KineticsModel::Gas),
            _ => None,
        }
    }

    /// Output name
    pub fn as_str(&self) -> &'static str {
        match self {
            KineticsModel::Gas => "gas",
        }
    }
}

/// Phase transport model
///
/// The CTML tag `None` means "no transport model" and has no variant here; the
/// phase translator maps it to `Option::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportModel {
    /// CTML `Mix`
    MixtureAveraged,
    /// CTML `Multi`
    MultiComponent,
}

impl TransportModel {
    /// Look up a CTML `transport/@model` tag
    pub fn from_ctml(tag: &str) -> Option<Self> {
        match tag {
            "Mix" => Some(TransportModel::MixtureAveraged),
            "Multi" => Some(TransportModel::MultiComponent),
            _ => None,
        }
    }

    /// Output name
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportModel::MixtureAveraged => "mixture-averaged",
            TransportModel::MultiComponent => "multi-component",
        }
    }
}

/// A thermodynamic phase definition
#[derive(Debug, Clone, PartialEq)]
pub struct Phase {
    /// Phase id
    pub name: String,
    /// Thermo model
    pub thermo: ThermoModel,
    /// Element symbols in document order
    pub elements: Vec<String>,
    /// Species names in document order
    pub species: Vec<String>,
    /// Kinetics model
    pub kinetics: KineticsModel,
    /// Transport model, absent for CTML `None`
    pub transport: Option<TransportModel>,
}

impl ToYaml for Phase {
    fn to_yaml(&self) -> Yaml {
        let mut map = Hash::new()
            .with("name", &self.name)
            .with("thermo", self.thermo.as_str())
            .with("elements", &self.elements)
            .with("species", &self.species)
            .with("kinetics", self.kinetics.as_str());
        if let Some(transport) = self.transport {
            map.set("transport-model", transport.as_str());
        }
        Yaml::Hash(map)
    }
}
