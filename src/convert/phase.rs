use crate::ctml::{split_list, Element};
use crate::model::{KineticsModel, Phase, ThermoModel, TransportModel};

use super::ConversionError;

/// CTML transport tag meaning "no transport model"
const NO_TRANSPORT: &str = "None";

/// Translate a `phase` element
pub fn translate_phase(node: &Element) -> Result<Phase, ConversionError> {
    let name = node.require_attr("id")?.to_string();

    let thermo_tag = node.require("thermo")?.require_attr("model")?;
    let thermo =
        ThermoModel::from_ctml(thermo_tag).ok_or_else(|| ConversionError::UnknownThermoModel {
            phase: name.clone(),
            model: thermo_tag.to_string(),
        })?;

    let kinetics_tag = node.require("kinetics")?.require_attr("model")?;
    let kinetics = KineticsModel::from_ctml(kinetics_tag).ok_or_else(|| {
        ConversionError::UnknownKineticsModel {
            phase: name.clone(),
            model: kinetics_tag.to_string(),
        }
    })?;

    let transport = match node.find("transport") {
        None => None,
        Some(transport) => {
            let tag = transport.require_attr("model")?;
            if tag == NO_TRANSPORT {
                None
            } else {
                Some(TransportModel::from_ctml(tag).ok_or_else(|| {
                    ConversionError::UnknownTransportModel {
                        phase: name.clone(),
                        model: tag.to_string(),
                    }
                })?)
            }
        }
    };

    Ok(Phase {
        elements: split_list(&node.require("elementArray")?.text),
        species: split_list(&node.require("speciesArray")?.text),
        name,
        thermo,
        kinetics,
        transport,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ctml::parse_document;

    fn phase_xml(thermo: &str, kinetics: &str, transport: &str) -> Element {
        let xml = format!(
            r##"<phase dim="3" id="ohmech">
  <elementArray datasrc="elements.xml">O  H  Ar</elementArray>
  <speciesArray datasrc="#species_data">
    H2  H  O  O2  OH
    H2O  HO2  H2O2  AR
  </speciesArray>
  <state><temperature units="K">300.0</temperature></state>
  <thermo model="{thermo}"/>
  <kinetics model="{kinetics}"/>
  {transport}
</phase>"##
        );
        parse_document(xml.as_bytes()).unwrap()
    }

    #[test]
    fn test_translate_phase() {
        let node = phase_xml("IdealGas", "GasKinetics", r#"<transport model="Mix"/>"#);
        let phase = translate_phase(&node).unwrap();

        assert_eq!(phase.name, "ohmech");
        assert_eq!(phase.thermo, ThermoModel::IdealGas);
        assert_eq!(phase.elements, vec!["O", "H", "Ar"]);
        assert_eq!(phase.species.len(), 9);
        assert_eq!(phase.species[5], "H2O");
        assert_eq!(phase.kinetics, KineticsModel::Gas);
        assert_eq!(phase.transport, Some(TransportModel::MixtureAveraged));
    }

    #[test]
    fn test_transport_none_and_absent() {
        let none = phase_xml("IdealGas", "GasKinetics", r#"<transport model="None"/>"#);
        assert_eq!(translate_phase(&none).unwrap().transport, None);

        let absent = phase_xml("IdealGas", "GasKinetics", "");
        assert_eq!(translate_phase(&absent).unwrap().transport, None);
    }

    #[test]
    fn test_unknown_tags_are_fatal() {
        let node = phase_xml("RedlichKwong", "GasKinetics", "");
        let err = translate_phase(&node).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown thermo model 'RedlichKwong' for phase 'ohmech'"
        );

        let node = phase_xml("IdealGas", "Interface", "");
        assert!(matches!(
            translate_phase(&node),
            Err(ConversionError::UnknownKineticsModel { .. })
        ));

        let node = phase_xml("IdealGas", "GasKinetics", r#"<transport model="Ion"/>"#);
        assert!(matches!(
            translate_phase(&node),
            Err(ConversionError::UnknownTransportModel { .. })
        ));
    }
}
