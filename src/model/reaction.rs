use crate::units::Quantity;
use crate::yaml::{mapping, Hash, HashExt, ToYaml, Yaml};

/// Arrhenius parameters `k = A T^b exp(-Ea / RT)`
#[derive(Debug, Clone, PartialEq)]
pub struct Arrhenius {
    /// Pre-exponential factor
    pub a: Quantity,
    /// Temperature exponent
    pub b: Quantity,
    /// Activation energy
    pub ea: Quantity,
}

impl Arrhenius {
    fn to_hash(&self) -> Hash {
        Hash::new()
            .with("A", &self.a)
            .with("b", &self.b)
            .with("Ea", &self.ea)
    }
}

impl ToYaml for Arrhenius {
    fn to_yaml(&self) -> Yaml {
        Yaml::Hash(self.to_hash())
    }
}

/// Third-body collision efficiencies, in document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Efficiencies {
    entries: Vec<(String, f64)>,
}

impl Efficiencies {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the efficiency of a species; a repeated species keeps its first position
    pub fn insert(&mut self, species: impl Into<String>, efficiency: f64) {
        let species = species.into();
        match self.entries.iter_mut().find(|(s, _)| *s == species) {
            Some(entry) => entry.1 = efficiency,
            None => self.entries.push((species, efficiency)),
        }
    }

    /// Efficiency of a species
    pub fn get(&self, species: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(s, _)| s == species)
            .map(|(_, e)| *e)
    }

    /// Number of species listed
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no species are listed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ToYaml for Efficiencies {
    fn to_yaml(&self) -> Yaml {
        mapping(self.entries.iter().map(|(s, e)| (s.as_str(), *e)))
    }
}

/// Low- and high-pressure limits shared by Lindemann and Troe falloff
#[derive(Debug, Clone, PartialEq)]
pub struct Falloff {
    /// Low-pressure limit (`name="k0"`)
    pub low: Arrhenius,
    /// High-pressure limit (unnamed)
    pub high: Arrhenius,
    /// Third-body efficiencies
    pub efficiencies: Efficiencies,
}

/// Troe blending parameters, paired by position with `A, T3, T1, T2`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TroeParams {
    values: Vec<f64>,
}

impl TroeParams {
    /// Parameter names in CTML order
    pub const NAMES: [&'static str; 4] = ["A", "T3", "T1", "T2"];

    /// Pair values with names; values past the fourth are ignored
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().take(Self::NAMES.len()).collect(),
        }
    }

    /// Named parameters that were supplied
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        Self::NAMES.iter().copied().zip(self.values.iter().copied())
    }

    /// Value of a named parameter
    pub fn get(&self, name: &str) -> Option<f64> {
        self.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    /// Number of supplied parameters
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no parameters were supplied
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ToYaml for TroeParams {
    fn to_yaml(&self) -> Yaml {
        mapping(self.iter())
    }
}

/// One pressure point of a PLOG reaction
#[derive(Debug, Clone, PartialEq)]
pub struct PlogRate {
    /// Pressure
    pub pressure: Quantity,
    /// Rate at that pressure
    pub rate: Arrhenius,
}

impl ToYaml for PlogRate {
    fn to_yaml(&self) -> Yaml {
        Yaml::Hash(self.rate.to_hash().with("P", &self.pressure))
    }
}

/// Chebyshev polynomial rate over a temperature/pressure rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct ChebyshevRate {
    /// `[Tmin, Tmax]`
    pub temperature_range: [Quantity; 2],
    /// `[Pmin, Pmax]`
    pub pressure_range: [Quantity; 2],
    /// Coefficients, one row per temperature degree
    pub data: Vec<Vec<f64>>,
}

/// Rate expression, tagged by CTML reaction type
#[derive(Debug, Clone, PartialEq)]
pub enum RateExpression {
    /// Plain Arrhenius
    Arrhenius(Arrhenius),
    /// Three-body reaction
    ThreeBody {
        /// Rate constant
        rate: Arrhenius,
        /// Collision efficiencies
        efficiencies: Efficiencies,
    },
    /// Lindemann falloff
    Lindemann(Falloff),
    /// Troe falloff
    Troe {
        /// Pressure limits and efficiencies
        falloff: Falloff,
        /// Blending parameters
        troe: TroeParams,
    },
    /// Pressure-dependent Arrhenius (PLOG)
    Plog(Vec<PlogRate>),
    /// Chebyshev polynomial
    Chebyshev(ChebyshevRate),
}

impl RateExpression {
    /// Output `type` value; plain Arrhenius has none
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            RateExpression::Arrhenius(_) => None,
            RateExpression::ThreeBody { .. } => Some("three-body"),
            RateExpression::Lindemann(_) | RateExpression::Troe { .. } => Some("falloff"),
            RateExpression::Plog(_) => Some("pressure-dependent-Arrhenius"),
            RateExpression::Chebyshev(_) => Some("Chebyshev"),
        }
    }

    fn write_fields(&self, map: &mut Hash) {
        if let Some(kind) = self.type_name() {
            map.set("type", kind);
        }
        match self {
            RateExpression::Arrhenius(rate) => map.set("rate-constant", rate),
            RateExpression::ThreeBody { rate, efficiencies } => {
                map.set("rate-constant", rate);
                map.set("efficiencies", efficiencies);
            }
            RateExpression::Lindemann(falloff) => write_falloff(falloff, map),
            RateExpression::Troe { falloff, troe } => {
                write_falloff(falloff, map);
                map.set("Troe", troe);
            }
            RateExpression::Plog(rates) => map.set("rate-constants", rates),
            RateExpression::Chebyshev(cheb) => {
                map.set("temperature-range", cheb.temperature_range.as_slice());
                map.set("pressure-range", cheb.pressure_range.as_slice());
                map.set("data", &cheb.data);
            }
        }
    }
}

fn write_falloff(falloff: &Falloff, map: &mut Hash) {
    map.set("low-P-rate-constant", &falloff.low);
    map.set("high-P-rate-constant", &falloff.high);
    map.set("efficiencies", &falloff.efficiencies);
}

/// A reaction definition
#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    /// CTML reaction id, used in diagnostics only
    pub id: Option<String>,
    /// Equation with `<` and `>` restored
    pub equation: String,
    /// Rate expression
    pub rate: RateExpression,
    /// Marked `duplicate="yes"`
    pub duplicate: bool,
}

impl ToYaml for Reaction {
    fn to_yaml(&self) -> Yaml {
        let mut map = Hash::new();
        self.rate.write_fields(&mut map);
        map.set("equation", &self.equation);
        if self.duplicate {
            map.set("duplicate", true);
        }
        Yaml::Hash(map)
    }
}
