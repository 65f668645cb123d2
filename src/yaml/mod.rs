//! # YAML Output Module
//!
//! Records build a [`Yaml`] tree through [`ToYaml`], and [`YamlEmitter`] hands it
//! to `yaml-rust2` for serialization.
//!
//! Floats enter the tree as [`Yaml::Real`] holding the text of
//! [`crate::units::float_to_string`], which the emitter writes verbatim. Mappings
//! are [`Hash`] values, so keys keep their insertion order.

mod emitter;

pub use emitter::{EmitterConfig, YamlEmitter};
pub use yaml_rust2::yaml::Hash;
pub use yaml_rust2::emitter::EmitError;
pub use yaml_rust2::Yaml;

use crate::units::float_to_string;

/// Conversion of a translated record into the output tree
pub trait ToYaml {
    /// Build the YAML value for this record
    fn to_yaml(&self) -> Yaml;
}

impl ToYaml for Yaml {
    fn to_yaml(&self) -> Yaml {
        self.clone()
    }
}

impl ToYaml for f64 {
    fn to_yaml(&self) -> Yaml {
        Yaml::Real(float_to_string(*self))
    }
}

impl ToYaml for bool {
    fn to_yaml(&self) -> Yaml {
        Yaml::Boolean(*self)
    }
}

impl ToYaml for str {
    fn to_yaml(&self) -> Yaml {
        Yaml::String(self.to_string())
    }
}

impl ToYaml for String {
    fn to_yaml(&self) -> Yaml {
        self.as_str().to_yaml()
    }
}

impl<T: ToYaml + ?Sized> ToYaml for &T {
    fn to_yaml(&self) -> Yaml {
        (**self).to_yaml()
    }
}

impl<T: ToYaml> ToYaml for Option<T> {
    fn to_yaml(&self) -> Yaml {
        self.as_ref().map_or(Yaml::Null, ToYaml::to_yaml)
    }
}

impl<T: ToYaml> ToYaml for [T] {
    fn to_yaml(&self) -> Yaml {
        Yaml::Array(self.iter().map(ToYaml::to_yaml).collect())
    }
}

impl<T: ToYaml> ToYaml for Vec<T> {
    fn to_yaml(&self) -> Yaml {
        self.as_slice().to_yaml()
    }
}

impl ToYaml for Hash {
    fn to_yaml(&self) -> Yaml {
        Yaml::Hash(self.clone())
    }
}

/// String-keyed insertion into a [`Hash`]
pub trait HashExt {
    /// Insert `key: value`; a repeated key keeps its first position
    fn set(&mut self, key: &str, value: impl ToYaml);

    /// Builder form of [`HashExt::set`]
    fn with(self, key: &str, value: impl ToYaml) -> Self;
}

impl HashExt for Hash {
    fn set(&mut self, key: &str, value: impl ToYaml) {
        let key = Yaml::String(key.to_string());
        let value = value.to_yaml();
        match self.get_mut(&key) {
            Some(slot) => *slot = value,
            None => {
                self.insert(key, value);
            }
        }
    }

    fn with(mut self, key: &str, value: impl ToYaml) -> Self {
        self.set(key, value);
        self
    }
}

/// Build a mapping from string keys, preserving order
pub fn mapping<'a, V: ToYaml + 'a>(entries: impl IntoIterator<Item = (&'a str, V)>) -> Yaml {
    let mut hash = Hash::new();
    for (key, value) in entries {
        hash.set(key, value);
    }
    Yaml::Hash(hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(hash: &Hash) -> Vec<&str> {
        hash.keys().filter_map(Yaml::as_str).collect()
    }

    #[test]
    fn test_set_keeps_insertion_order() {
        let hash = Hash::new()
            .with("phases", Vec::<Yaml>::new())
            .with("species", Vec::<Yaml>::new())
            .with("reactions", Vec::<Yaml>::new());
        assert_eq!(keys(&hash), vec!["phases", "species", "reactions"]);
    }

    #[test]
    fn test_reset_keeps_position() {
        let mut hash = Hash::new();
        hash.set("H", 1.0);
        hash.set("O", 2.0);
        hash.set("H", 3.0);
        assert_eq!(keys(&hash), vec!["H", "O"]);
        assert_eq!(Yaml::Hash(hash)["H"], Yaml::Real("3.0".to_string()));
    }

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(1.0e13_f64.to_yaml(), Yaml::Real("1.0e+13".to_string()));
        assert_eq!(f64::NAN.to_yaml(), Yaml::Real(".nan".to_string()));
        assert_eq!(None::<String>.to_yaml(), Yaml::Null);
        assert_eq!(Some("linear").to_yaml(), Yaml::String("linear".to_string()));
        assert_eq!(true.to_yaml(), Yaml::Boolean(true));
    }

    #[test]
    fn test_mapping_from_pairs() {
        let yaml = mapping([("A", 0.5), ("T3", 94.0)]);
        assert_eq!(keys(yaml.as_hash().unwrap()), vec!["A", "T3"]);
        assert_eq!(yaml["T3"].as_f64(), Some(94.0));
    }
}
