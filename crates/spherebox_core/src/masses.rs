use crate::error::ConfigError;

/// Parse a mass list written as a JSON numeric array, e.g. `[1, 2.5, 3]`.
/// Blank input means no particles. Every entry must be a positive, finite number.
pub fn parse_masses(input: &str) -> Result<Vec<f64>, ConfigError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    let masses: Vec<f64> = serde_json::from_str(input).map_err(ConfigError::MalformedMasses)?;
    validate_masses(&masses)?;
    Ok(masses)
}

/// Reject the first mass that cannot produce a real, positive radius
pub fn validate_masses(masses: &[f64]) -> Result<(), ConfigError> {
    match masses
        .iter()
        .enumerate()
        .find(|(_, m)| !(m.is_finite() && **m > 0.0))
    {
        Some((index, &value)) => Err(ConfigError::InvalidMass { index, value }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_array() {
        let masses = parse_masses("[1, 2.5, 3e1]").unwrap();
        assert_eq!(masses, vec![1.0, 2.5, 30.0]);
    }

    #[test]
    fn test_blank_and_empty_are_no_particles() {
        assert!(parse_masses("").unwrap().is_empty());
        assert!(parse_masses("  ").unwrap().is_empty());
        assert!(parse_masses("[]").unwrap().is_empty());
    }

    #[test]
    fn test_rejects_non_numeric_entries() {
        for input in ["[1, \"two\"]", "[1, null]", "[1,,2]", "{\"m\": 1}", "1, 2"] {
            let err = parse_masses(input).unwrap_err();
            assert!(
                matches!(err, ConfigError::MalformedMasses(_)),
                "input {:?} gave {:?}",
                input,
                err
            );
        }
    }

    #[test]
    fn test_rejects_non_positive_mass() {
        match parse_masses("[1, 0, 2]") {
            Err(ConfigError::InvalidMass { index, value }) => {
                assert_eq!(index, 1);
                assert_eq!(value, 0.0);
            }
            other => panic!("expected InvalidMass, got {:?}", other),
        }
        assert!(matches!(
            parse_masses("[-4]"),
            Err(ConfigError::InvalidMass { index: 0, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_nan() {
        assert!(validate_masses(&[1.0, f64::NAN]).is_err());
        assert!(validate_masses(&[1.0, f64::INFINITY]).is_err());
        assert!(validate_masses(&[0.001, 1e6]).is_ok());
    }
}
