use log::debug;

use crate::ctml::{parse_float, parse_float_list, parse_pairs, CtmlError, Element};
use crate::model::{
    Composition, Nasa7Thermo, Species, SpeciesTransport, SpeciesTransportModel, TransportProperty,
};

use super::ConversionError;

/// Properties with `|value| <= ZERO_TOLERANCE` are left out of the output
const ZERO_TOLERANCE: f64 = 1e-8;

/// Number of distinct breakpoints in a two-interval NASA7 fit
const NASA7_BREAKPOINTS: usize = 3;

/// Translate a `species` element
pub fn translate_species(node: &Element) -> Result<Species, ConversionError> {
    let name = node.require_attr("name")?.to_string();

    let mut composition = Composition::new();
    for (element, count) in parse_pairs(&node.require("atomArray")?.text, "atomArray")? {
        composition.insert(element, count);
    }

    let note = node.find_text("note").map(str::to_string);

    let thermo_node = node.require("thermo")?;
    let model = thermo_node
        .first_child()
        .ok_or_else(|| CtmlError::MissingElement {
            parent: thermo_node.name.clone(),
            child: "NASA".to_string(),
        })?;
    let thermo = match model.name.as_str() {
        "NASA" => translate_nasa7(thermo_node, &name)?,
        other => {
            return Err(ConversionError::UnknownSpeciesThermo {
                species: name,
                tag: other.to_string(),
            })
        }
    };

    let transport = node
        .find("transport")
        .map(|transport| translate_transport(transport, &name))
        .transpose()?;

    Ok(Species {
        name,
        composition,
        note,
        thermo,
        transport,
    })
}

/// Translate the `NASA` segments of a species `thermo` element
pub fn translate_nasa7(thermo: &Element, species: &str) -> Result<Nasa7Thermo, ConversionError> {
    let mut breakpoints: Vec<f64> = Vec::with_capacity(NASA7_BREAKPOINTS);
    let mut data = Vec::new();

    for segment in thermo.find_all("NASA") {
        for bound in ["Tmin", "Tmax"] {
            let value = parse_float(segment.require_attr(bound)?, bound)?;
            if !breakpoints.contains(&value) {
                breakpoints.push(value);
            }
        }
        data.push(parse_float_list(
            &segment.require("floatArray")?.text,
            "floatArray",
        )?);
    }

    if breakpoints.len() != NASA7_BREAKPOINTS {
        return Err(ConversionError::InconsistentMidpoint {
            species: species.to_string(),
            distinct: breakpoints.len(),
        });
    }
    breakpoints.sort_by(f64::total_cmp);

    Ok(Nasa7Thermo {
        temperature_ranges: breakpoints,
        data,
    })
}

/// Translate a species `transport` element
pub fn translate_transport(
    transport: &Element,
    species: &str,
) -> Result<SpeciesTransport, ConversionError> {
    let tag = transport.attr("model").unwrap_or("None");
    let model = SpeciesTransportModel::from_ctml(tag).ok_or_else(|| {
        ConversionError::UnknownSpeciesTransport {
            species: species.to_string(),
            model: tag.to_string(),
        }
    })?;

    let geometry = transport
        .find_with_attr("string", "title", "geometry")
        .map(|node| node.text.clone());

    let mut properties = Vec::new();
    for property in TransportProperty::ALL {
        let value = match transport.find(property.ctml_tag()) {
            Some(node) => parse_float(&node.text, property.ctml_tag())?,
            None => 0.0,
        };
        if is_close_to_zero(value) {
            debug!("Dropping zero {} for species '{}'", property.yaml_key(), species);
        } else {
            properties.push((property, value));
        }
    }

    Ok(SpeciesTransport {
        model,
        geometry,
        properties,
    })
}

fn is_close_to_zero(value: f64) -> bool {
    value.abs() <= ZERO_TOLERANCE
}
