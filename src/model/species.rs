use crate::yaml::{mapping, Hash, HashExt, ToYaml, Yaml};

/// Element counts of a species.
///
/// Counts stay as the text written in CTML (`"2"`, `"0.5"`); they are never
/// coerced to numbers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Composition {
    entries: Vec<(String, String)>,
}

impl Composition {
    /// Create an empty composition
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the count for an element; a repeated element keeps its first position
    pub fn insert(&mut self, element: impl Into<String>, count: impl Into<String>) {
        let element = element.into();
        let count = count.into();
        match self.entries.iter_mut().find(|(e, _)| *e == element) {
            Some(entry) => entry.1 = count,
            None => self.entries.push((element, count)),
        }
    }

    /// Count text for an element
    pub fn get(&self, element: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(e, _)| e == element)
            .map(|(_, count)| count.as_str())
    }

    /// Element/count pairs in document order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(e, c)| (e.as_str(), c.as_str()))
    }

    /// Number of distinct elements
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no elements are listed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ToYaml for Composition {
    fn to_yaml(&self) -> Yaml {
        mapping(self.iter())
    }
}

/// NASA 7-coefficient polynomial thermo over two temperature intervals
#[derive(Debug, Clone, PartialEq)]
pub struct Nasa7Thermo {
    /// Breakpoints `[low, mid, high]`, ascending
    pub temperature_ranges: Vec<f64>,
    /// Coefficient rows in document order
    pub data: Vec<Vec<f64>>,
}

impl ToYaml for Nasa7Thermo {
    fn to_yaml(&self) -> Yaml {
        Yaml::Hash(
            Hash::new()
                .with("model", "NASA7")
                .with("data", &self.data)
                .with("temperature-ranges", &self.temperature_ranges),
        )
    }
}

/// Species transport model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeciesTransportModel {
    /// CTML `gas_transport`
    Gas,
}

impl SpeciesTransportModel {
    /// Look up a CTML `transport/@model` tag on a species
    pub fn from_ctml(tag: &str) -> Option<Self> {
        match tag {
            "gas_transport" => Some(SpeciesTransportModel::Gas),
            _ => None,
        }
    }

    /// Output name
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeciesTransportModel::Gas => "gas",
        }
    }
}

/// Named numeric transport properties, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportProperty {
    /// Lennard-Jones well depth
    WellDepth,
    /// Lennard-Jones collision diameter
    Diameter,
    /// Polarizability
    Polarizability,
    /// Rotational relaxation collision number
    RotationalRelaxation,
    /// Dipole moment
    Dipole,
    /// Dispersion coefficient
    DispersionCoefficient,
    /// Quadrupole polarizability
    QuadrupolePolarizability,
}

impl TransportProperty {
    /// Every property, in the order they are read and emitted
    pub const ALL: [TransportProperty; 7] = [
        TransportProperty::WellDepth,
        TransportProperty::Diameter,
        TransportProperty::Polarizability,
        TransportProperty::RotationalRelaxation,
        TransportProperty::Dipole,
        TransportProperty::DispersionCoefficient,
        TransportProperty::QuadrupolePolarizability,
    ];

    /// CTML child element tag
    pub fn ctml_tag(&self) -> &'static str {
        match self {
            TransportProperty::WellDepth => "LJ_welldepth",
            TransportProperty::Diameter => "LJ_diameter",
            TransportProperty::Polarizability => "polarizability",
            TransportProperty::RotationalRelaxation => "rotRelax",
            TransportProperty::Dipole => "dipoleMoment",
            TransportProperty::DispersionCoefficient => "dispersion_coefficient",
            TransportProperty::QuadrupolePolarizability => "quadrupole_polarizability",
        }
    }

    /// Output key
    pub fn yaml_key(&self) -> &'static str {
        match self {
            TransportProperty::WellDepth => "well-depth",
            TransportProperty::Diameter => "diameter",
            TransportProperty::Polarizability => "polarizability",
            TransportProperty::RotationalRelaxation => "rotational-relaxation",
            TransportProperty::Dipole => "dipole",
            TransportProperty::DispersionCoefficient => "dispersion-coefficient",
            TransportProperty::QuadrupolePolarizability => "quadrupole-polarizability",
        }
    }
}

/// Species transport data
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesTransport {
    /// Transport model
    pub model: SpeciesTransportModel,
    /// Molecular geometry (`atom`, `linear`, `nonlinear`)
    pub geometry: Option<String>,
    /// Non-zero properties only
    pub properties: Vec<(TransportProperty, f64)>,
}

impl SpeciesTransport {
    /// Value of a property, if it was kept
    pub fn get(&self, property: TransportProperty) -> Option<f64> {
        self.properties
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, value)| *value)
    }
}

impl ToYaml for SpeciesTransport {
    fn to_yaml(&self) -> Yaml {
        let mut map = Hash::new()
            .with("model", self.model.as_str())
            .with("geometry", &self.geometry);
        for (property, value) in &self.properties {
            map.set(property.yaml_key(), *value);
        }
        Yaml::Hash(map)
    }
}

/// A species definition
#[derive(Debug, Clone, PartialEq)]
pub struct Species {
    /// Species name
    pub name: String,
    /// Element counts
    pub composition: Composition,
    /// Free-text note
    pub note: Option<String>,
    /// Thermodynamic data
    pub thermo: Nasa7Thermo,
    /// Transport data
    pub transport: Option<SpeciesTransport>,
}

impl ToYaml for Species {
    fn to_yaml(&self) -> Yaml {
        let mut map = Hash::new()
            .with("name", &self.name)
            .with("composition", &self.composition);
        if let Some(note) = &self.note {
            map.set("note", note);
        }
        map.set("thermo", &self.thermo);
        if let Some(transport) = &self.transport {
            map.set("transport", transport);
        }
        Yaml::Hash(map)
    }
}
