use log::{debug, warn};

use crate::ctml::{parse_float, parse_float_list, parse_pairs, split_list, Element};
use crate::model::{
    Arrhenius, ChebyshevRate, Efficiencies, Falloff, PlogRate, RateExpression, Reaction,
    TroeParams,
};
use crate::units::Quantity;

use super::ConversionError;

/// Translates a `rateCoeff` element for the reaction with the given id
type RateTranslator = fn(&Element, &str) -> Result<RateExpression, ConversionError>;

/// Rate translators keyed by CTML type; `None` is the untyped (plain Arrhenius) case.
/// Falloff sub-types are looked up here by their inner `falloff/@type`.
const RATE_TRANSLATORS: &[(Option<&str>, RateTranslator)] = &[
    (None, translate_arrhenius_rate),
    (Some("threeBody"), translate_three_body),
    (Some("Lindemann"), translate_lindemann),
    (Some("Troe"), translate_troe),
    (Some("plog"), translate_plog),
    (Some("chebyshev"), translate_chebyshev),
];

/// Reaction types dispatched directly on `reaction/@type`
const DIRECT_TYPES: &[Option<&str>] = &[None, Some("threeBody"), Some("plog"), Some("chebyshev")];

/// Reaction type whose rate form is chosen by the inner `falloff/@type`
const FALLOFF_TYPE: &str = "falloff";

/// Falloff kinds accepted in `falloff/@type`
const FALLOFF_TYPES: &[&str] = &["Lindemann", "Troe"];

/// Name marking the low-pressure Arrhenius node of a falloff reaction
const LOW_PRESSURE_NAME: &str = "k0";

fn lookup_translator(kind: Option<&str>) -> Option<RateTranslator> {
    RATE_TRANSLATORS
        .iter()
        .find(|(key, _)| *key == kind)
        .map(|(_, translator)| *translator)
}

/// Translate a `reaction` element
pub fn translate_reaction(node: &Element) -> Result<Reaction, ConversionError> {
    let id = node.attr("id").map(str::to_string);
    let label = id.as_deref().unwrap_or("None");

    let kind = node.attr("type");
    check_reaction_type(kind, label)?;
    let rate = translate_rate(kind, node.require("rateCoeff")?, label)?;

    let equation = node
        .require("equation")?
        .text
        .replace('[', "<")
        .replace(']', ">");

    Ok(Reaction {
        id,
        equation,
        rate,
        duplicate: node.attr("duplicate") == Some("yes"),
    })
}

fn check_reaction_type(kind: Option<&str>, id: &str) -> Result<(), ConversionError> {
    if kind == Some(FALLOFF_TYPE) || DIRECT_TYPES.iter().any(|direct| *direct == kind) {
        Ok(())
    } else {
        Err(ConversionError::UnknownReactionType {
            id: id.to_string(),
            kind: kind.unwrap_or("None").to_string(),
        })
    }
}

/// Dispatch a `rateCoeff` element on the reaction type
pub fn translate_rate(
    kind: Option<&str>,
    rate_coeff: &Element,
    id: &str,
) -> Result<RateExpression, ConversionError> {
    check_reaction_type(kind, id)?;
    let key = if kind == Some(FALLOFF_TYPE) {
        let sub_type = rate_coeff.require("falloff")?.attr("type");
        match sub_type {
            Some(sub) if FALLOFF_TYPES.iter().any(|known| *known == sub) => Some(sub),
            _ => {
                return Err(ConversionError::UnknownFalloffType {
                    id: id.to_string(),
                    kind: sub_type.unwrap_or("None").to_string(),
                })
            }
        }
    } else {
        kind
    };

    let translator = lookup_translator(key).ok_or_else(|| ConversionError::UnknownReactionType {
        id: id.to_string(),
        kind: key.unwrap_or("None").to_string(),
    })?;
    debug!("Reaction {}: rate type {}", id, key.unwrap_or("Arrhenius"));
    translator(rate_coeff, id)
}

fn arrhenius_parameters(node: &Element) -> Result<Arrhenius, ConversionError> {
    Ok(Arrhenius {
        a: Quantity::from_child(node, "A")?,
        b: Quantity::from_child(node, "b")?,
        ea: Quantity::from_child(node, "E")?,
    })
}

fn efficiencies(rate_coeff: &Element) -> Result<Efficiencies, ConversionError> {
    let mut efficiencies = Efficiencies::new();
    for (species, value) in parse_pairs(&rate_coeff.require("efficiencies")?.text, "efficiencies")? {
        efficiencies.insert(species, parse_float(&value, "efficiencies")?);
    }
    Ok(efficiencies)
}

fn translate_arrhenius_rate(rate_coeff: &Element, _id: &str) -> Result<RateExpression, ConversionError> {
    Ok(RateExpression::Arrhenius(arrhenius_parameters(
        rate_coeff.require("Arrhenius")?,
    )?))
}

fn translate_three_body(rate_coeff: &Element, _id: &str) -> Result<RateExpression, ConversionError> {
    Ok(RateExpression::ThreeBody {
        rate: arrhenius_parameters(rate_coeff.require("Arrhenius")?)?,
        efficiencies: efficiencies(rate_coeff)?,
    })
}

fn falloff_limits(rate_coeff: &Element, id: &str) -> Result<Falloff, ConversionError> {
    let mut low = None;
    let mut high = None;

    for node in rate_coeff.find_all("Arrhenius") {
        let slot = match node.attr("name") {
            Some(LOW_PRESSURE_NAME) => &mut low,
            None => &mut high,
            Some(other) => {
                warn!("Reaction {}: unexpected Arrhenius name '{}'", id, other);
                return Err(ConversionError::TooManyArrhenius { id: id.to_string() });
            }
        };
        if slot.is_some() {
            return Err(ConversionError::TooManyArrhenius { id: id.to_string() });
        }
        *slot = Some(arrhenius_parameters(node)?);
    }

    let low = low.ok_or_else(|| ConversionError::MissingFalloffLimit {
        id: id.to_string(),
        limit: "low-pressure",
    })?;
    let high = high.ok_or_else(|| ConversionError::MissingFalloffLimit {
        id: id.to_string(),
        limit: "high-pressure",
    })?;

    Ok(Falloff {
        low,
        high,
        efficiencies: efficiencies(rate_coeff)?,
    })
}

fn translate_lindemann(rate_coeff: &Element, id: &str) -> Result<RateExpression, ConversionError> {
    Ok(RateExpression::Lindemann(falloff_limits(rate_coeff, id)?))
}

fn translate_troe(rate_coeff: &Element, id: &str) -> Result<RateExpression, ConversionError> {
    let falloff = falloff_limits(rate_coeff, id)?;
    let values = split_list(&rate_coeff.require("falloff")?.text)
        .iter()
        .map(|value| parse_float(value, "falloff"))
        .collect::<Result<Vec<_>, _>>()?;
    if values.len() > TroeParams::NAMES.len() {
        warn!(
            "Reaction {}: ignoring {} extra Troe parameters",
            id,
            values.len() - TroeParams::NAMES.len()
        );
    }
    Ok(RateExpression::Troe {
        falloff,
        troe: TroeParams::new(values),
    })
}

fn translate_plog(rate_coeff: &Element, _id: &str) -> Result<RateExpression, ConversionError> {
    let rates = rate_coeff
        .find_all("Arrhenius")
        .map(|node| {
            Ok(PlogRate {
                rate: arrhenius_parameters(node)?,
                pressure: Quantity::from_child(node, "P")?,
            })
        })
        .collect::<Result<Vec<_>, ConversionError>>()?;
    Ok(RateExpression::Plog(rates))
}

fn translate_chebyshev(rate_coeff: &Element, id: &str) -> Result<RateExpression, ConversionError> {
    let temperature_range = [
        Quantity::from_child(rate_coeff, "Tmin")?,
        Quantity::from_child(rate_coeff, "Tmax")?,
    ];
    let pressure_range = [
        Quantity::from_child(rate_coeff, "Pmin")?,
        Quantity::from_child(rate_coeff, "Pmax")?,
    ];

    let data_node = rate_coeff.require("floatArray")?;
    let degree_p = parse_degree(data_node, "degreeP")?;
    let degree_t = parse_degree(data_node, "degreeT")?;
    if degree_p == 0 {
        return Err(ConversionError::InvalidChebyshevDegree { id: id.to_string() });
    }

    let values = parse_float_list(&data_node.text, "floatArray")?;
    let data: Vec<Vec<f64>> = values.chunks(degree_p).map(<[f64]>::to_vec).collect();
    if data.len() != degree_t {
        return Err(ConversionError::ChebyshevShape {
            id: id.to_string(),
            expected: degree_t,
            found: data.len(),
        });
    }

    Ok(RateExpression::Chebyshev(ChebyshevRate {
        temperature_range,
        pressure_range,
        data,
    }))
}

fn parse_degree(node: &Element, attribute: &str) -> Result<usize, ConversionError> {
    let text = node.require_attr(attribute)?.trim();
    text.parse::<usize>().map_err(|_| {
        crate::ctml::CtmlError::InvalidNumber {
            context: attribute.to_string(),
            value: text.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ctml::{parse_document, CtmlError};

    fn parse(xml: &str) -> Element {
        parse_document(xml.as_bytes()).unwrap()
    }

    const ARRHENIUS_HIGH: &str = r#"<Arrhenius>
      <A units="cm3/mol/s">7.400000E+13</A>
      <b>-0.37</b>
      <E units="cal/mol">0.000000</E>
    </Arrhenius>"#;

    const ARRHENIUS_LOW: &str = r#"<Arrhenius name="k0">
      <A units="cm6/mol2/s">2.300000E+18</A>
      <b>-0.9</b>
      <E units="cal/mol">-1700.000000</E>
    </Arrhenius>"#;

    fn falloff_reaction(kind: &str, arrhenius: &str, params: &str) -> Element {
        parse(&format!(
            r#"<reaction reversible="yes" type="falloff" id="0022">
  <equation>2 OH (+ M) [=] H2O2 (+ M)</equation>
  <rateCoeff>
    {arrhenius}
    <efficiencies default="1.0">AR:0.7  H2:2.0  H2O:6.0</efficiencies>
    <falloff type="{kind}">{params}</falloff>
  </rateCoeff>
</reaction>"#
        ))
    }

    #[test]
    fn test_plain_arrhenius() {
        let node = parse(
            r#"<reaction reversible="yes" id="0003">
  <equation>H2 + O [=] H + OH</equation>
  <rateCoeff>
    <Arrhenius>
      <A units="cm3/mol/s">3.870000E+04</A>
      <b>2.7</b>
      <E units="cal/mol">6260.000000</E>
    </Arrhenius>
  </rateCoeff>
</reaction>"#,
        );
        let reaction = translate_reaction(&node).unwrap();

        assert_eq!(reaction.id.as_deref(), Some("0003"));
        assert_eq!(reaction.equation, "H2 + O <=> H + OH");
        assert!(!reaction.duplicate);
        match reaction.rate {
            RateExpression::Arrhenius(rate) => {
                assert_eq!(rate.a.to_string(), "3.87e+04 cm^3/mol/s");
                assert_eq!(rate.b, Quantity::Value(2.7));
                assert_eq!(rate.ea.to_string(), "6260.0 cal/mol");
            }
            other => panic!("unexpected rate: {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_attribute() {
        let node = parse(
            r#"<reaction duplicate="yes" id="0010"><equation>A [=] B</equation>
  <rateCoeff><Arrhenius><A>1.0</A><b>0</b><E>0</E></Arrhenius></rateCoeff></reaction>"#,
        );
        assert!(translate_reaction(&node).unwrap().duplicate);

        let node = parse(
            r#"<reaction duplicate="no" id="0011"><equation>A [=] B</equation>
  <rateCoeff><Arrhenius><A>1.0</A><b>0</b><E>0</E></Arrhenius></rateCoeff></reaction>"#,
        );
        assert!(!translate_reaction(&node).unwrap().duplicate);
    }

    #[test]
    fn test_three_body() {
        let node = parse(
            r#"<reaction reversible="yes" type="threeBody" id="0001">
  <equation>2 O + M [=] O2 + M</equation>
  <rateCoeff>
    <Arrhenius>
      <A units="cm6/mol2/s">1.200000E+17</A>
      <b>-1.0</b>
      <E units="cal/mol">0.000000</E>
    </Arrhenius>
    <efficiencies default="1.0">AR:0.83  H2:2.4  H2O:15.4</efficiencies>
  </rateCoeff>
</reaction>"#,
        );
        match translate_reaction(&node).unwrap().rate {
            RateExpression::ThreeBody { rate, efficiencies } => {
                assert_eq!(rate.a.to_string(), "1.2e+17 cm^6/mol^2/s");
                assert_eq!(efficiencies.len(), 3);
                assert_eq!(efficiencies.get("H2O"), Some(15.4));
            }
            other => panic!("unexpected rate: {:?}", other),
        }
    }

    #[test]
    fn test_lindemann() {
        let node = falloff_reaction(
            "Lindemann",
            &format!("{}{}", ARRHENIUS_HIGH, ARRHENIUS_LOW),
            "",
        );
        match translate_reaction(&node).unwrap().rate {
            RateExpression::Lindemann(falloff) => {
                assert_eq!(falloff.high.a.value(), 7.4e13);
                assert_eq!(falloff.low.a.value(), 2.3e18);
                assert_eq!(falloff.efficiencies.get("AR"), Some(0.7));
            }
            other => panic!("unexpected rate: {:?}", other),
        }
    }

    #[test]
    fn test_troe_four_parameters() {
        let node = falloff_reaction(
            "Troe",
            &format!("{}{}", ARRHENIUS_LOW, ARRHENIUS_HIGH),
            "0.7346 94 1756 5182",
        );
        match translate_reaction(&node).unwrap().rate {
            RateExpression::Troe { falloff, troe } => {
                assert_eq!(falloff.low.b, Quantity::Value(-0.9));
                assert_eq!(troe.len(), 4);
                assert_eq!(troe.get("T2"), Some(5182.0));
            }
            other => panic!("unexpected rate: {:?}", other),
        }
    }

    #[test]
    fn test_troe_three_parameters_omit_t2() {
        let node = falloff_reaction(
            "Troe",
            &format!("{}{}", ARRHENIUS_HIGH, ARRHENIUS_LOW),
            "0.5 1e-30 1e+30",
        );
        match translate_reaction(&node).unwrap().rate {
            RateExpression::Troe { troe, .. } => {
                let names: Vec<_> = troe.iter().map(|(name, _)| name).collect();
                assert_eq!(names, vec!["A", "T3", "T1"]);
                assert_eq!(troe.get("T2"), None);
            }
            other => panic!("unexpected rate: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_falloff_type() {
        let node = falloff_reaction(
            "SRI",
            &format!("{}{}", ARRHENIUS_HIGH, ARRHENIUS_LOW),
            "1 2 3",
        );
        let err = translate_reaction(&node).unwrap_err();
        assert_eq!(err.to_string(), "Unknown falloff type 'SRI' for reaction id 0022");
    }

    #[test]
    fn test_third_arrhenius_node_is_fatal() {
        let node = falloff_reaction(
            "Lindemann",
            &format!("{}{}{}", ARRHENIUS_HIGH, ARRHENIUS_LOW, ARRHENIUS_HIGH),
            "",
        );
        assert!(matches!(
            translate_reaction(&node),
            Err(ConversionError::TooManyArrhenius { .. })
        ));
    }

    #[test]
    fn test_unrecognized_arrhenius_name_is_fatal() {
        let named = ARRHENIUS_LOW.replace("k0", "kinf");
        let node = falloff_reaction("Troe", &format!("{}{}", ARRHENIUS_LOW, named), "1 2 3");
        let err = translate_reaction(&node).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Too many Arrhenius nodes for falloff reaction id 0022"
        );
    }

    #[test]
    fn test_missing_falloff_limit() {
        let node = falloff_reaction("Lindemann", ARRHENIUS_HIGH, "");
        assert!(matches!(
            translate_reaction(&node),
            Err(ConversionError::MissingFalloffLimit {
                limit: "low-pressure",
                ..
            })
        ));
    }

    #[test]
    fn test_plog() {
        let node = parse(
            r#"<reaction type="plog" id="plog1">
  <equation>H2 + O2 [=] 2 OH</equation>
  <rateCoeff>
    <Arrhenius><P units="atm">0.01</P><A units="cm3/mol/s">1.2124E+16</A><b>-0.5779</b><E units="cal/mol">10872.7</E></Arrhenius>
    <Arrhenius><P units="atm">1.0</P><A units="cm3/mol/s">4.9108E+31</A><b>-4.8507</b><E units="cal/mol">24772.8</E></Arrhenius>
  </rateCoeff>
</reaction>"#,
        );
        match translate_reaction(&node).unwrap().rate {
            RateExpression::Plog(rates) => {
                assert_eq!(rates.len(), 2);
                assert_eq!(rates[0].pressure.to_string(), "0.01 atm");
                assert_eq!(rates[1].pressure.to_string(), "1.0 atm");
                assert_eq!(rates[1].rate.a.to_string(), "4.9108e+31 cm^3/mol/s");
            }
            other => panic!("unexpected rate: {:?}", other),
        }
    }

    fn chebyshev(degree_t: usize, degree_p: usize, values: &str) -> Element {
        parse(&format!(
            r#"<reaction type="chebyshev" id="cheb1">
  <equation>HO2 + O2 [=] O2 + HO2</equation>
  <rateCoeff>
    <Tmin units="K">290.0</Tmin>
    <Tmax units="K">3000.0</Tmax>
    <Pmin units="atm">0.0098692</Pmin>
    <Pmax units="atm">98.692</Pmax>
    <floatArray degreeP="{degree_p}" degreeT="{degree_t}" units="cm3/mol/s">{values}</floatArray>
  </rateCoeff>
</reaction>"#
        ))
    }

    #[test]
    fn test_chebyshev_reshape() {
        let node = chebyshev(3, 2, "8.2, 1.0,\n -0.5, 0.1,\n 0.01, -0.02");
        match translate_reaction(&node).unwrap().rate {
            RateExpression::Chebyshev(cheb) => {
                assert_eq!(
                    cheb.data,
                    vec![vec![8.2, 1.0], vec![-0.5, 0.1], vec![0.01, -0.02]]
                );
                assert_eq!(cheb.temperature_range[0].to_string(), "290.0 K");
                assert_eq!(cheb.pressure_range[0].to_string(), "9.8692e-03 atm");
            }
            other => panic!("unexpected rate: {:?}", other),
        }
    }

    #[test]
    fn test_chebyshev_shape_mismatch() {
        let node = chebyshev(2, 2, "1, 2, 3, 4, 5, 6");
        match translate_reaction(&node) {
            Err(ConversionError::ChebyshevShape { expected, found, .. }) => {
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_chebyshev_zero_pressure_degree() {
        let node = chebyshev(1, 0, "1");
        assert!(matches!(
            translate_reaction(&node),
            Err(ConversionError::InvalidChebyshevDegree { .. })
        ));
    }

    #[test]
    fn test_unknown_reaction_type() {
        let node = parse(
            r#"<reaction type="surface" id="s1"><equation>A [=] B</equation><rateCoeff/></reaction>"#,
        );
        let err = translate_reaction(&node).unwrap_err();
        assert_eq!(err.to_string(), "Unknown reaction type 'surface' for reaction id s1");
    }

    #[test]
    fn test_unknown_type_reported_without_rate_coeff() {
        let node = parse(r#"<reaction type="surface" id="s1"><equation>A [=] B</equation></reaction>"#);
        let err = translate_reaction(&node).unwrap_err();
        assert_eq!(err.to_string(), "Unknown reaction type 'surface' for reaction id s1");
    }

    #[test]
    fn test_known_type_still_requires_rate_coeff() {
        let node = parse(r#"<reaction type="plog" id="p1"><equation>A [=] B</equation></reaction>"#);
        assert!(matches!(
            translate_reaction(&node),
            Err(ConversionError::CtmlError(CtmlError::MissingElement { .. }))
        ));
    }

    #[test]
    fn test_falloff_kind_not_accepted_as_reaction_type() {
        let node = parse(
            r#"<reaction type="Troe" id="t1"><equation>A [=] B</equation><rateCoeff/></reaction>"#,
        );
        assert!(matches!(
            translate_reaction(&node),
            Err(ConversionError::UnknownReactionType { .. })
        ));
    }
}
