use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use crate::grid::{DEFAULT_NX, DEFAULT_NY};
use crate::initialization::PiPrecision;

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct GridParamParser {
    #[serde(default = "default_nx")]
    pub nx: usize,
    #[serde(default = "default_ny")]
    pub ny: usize,
    #[serde(default)]
    pub pi_precision: PiPrecision,
    #[serde(default)]
    pub parallel: bool,
}
fn default_nx() -> usize {
    DEFAULT_NX
}
fn default_ny() -> usize {
    DEFAULT_NY
}
impl GridParamParser {
    pub fn parse<P: AsRef<Path>>(file_path: P) -> Result<Self> {
        let file_path = file_path.as_ref();
        let file_content = fs::read_to_string(file_path)
            .with_context(|| format!("failed to read {}", file_path.display()))?;
        Self::parse_str(&file_content)
            .with_context(|| format!("invalid grid parameters in {}", file_path.display()))
    }
    pub fn parse_str(content: &str) -> Result<Self> {
        let param: GridParamParser = serde_json::from_str(content)?;
        param.validate()?;
        Ok(param)
    }
    fn validate(&self) -> Result<()> {
        if self.nx == 0 || self.ny == 0 {
            return Err(anyhow!(
                "grid dimensions must be positive (nx={}, ny={})",
                self.nx,
                self.ny
            ));
        }
        // each field must fit in a single allocation
        let fits = self
            .nx
            .checked_mul(self.ny)
            .and_then(|n| n.checked_mul(std::mem::size_of::<f64>()))
            .is_some_and(|bytes| bytes <= isize::MAX as usize);
        if !fits {
            return Err(anyhow!(
                "grid dimensions too large (nx={}, ny={})",
                self.nx,
                self.ny
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let param = GridParamParser::parse_str("{}").unwrap();
        assert_eq!((param.nx, param.ny), (DEFAULT_NX, DEFAULT_NY));
        assert_eq!(param.pi_precision, PiPrecision::Full);
        assert!(!param.parallel);
    }

    #[test]
    fn test_explicit_values() {
        let param = GridParamParser::parse_str(
            r#"{ "nx": 4, "ny": 8, "pi_precision": "legacy", "parallel": true }"#,
        )
        .unwrap();
        assert_eq!((param.nx, param.ny), (4, 8));
        assert_eq!(param.pi_precision, PiPrecision::Legacy);
        assert!(param.parallel);
    }

    #[test]
    fn test_rejects_zero_dimension() {
        let err = GridParamParser::parse_str(r#"{ "nx": 0 }"#).unwrap_err();
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn test_rejects_overflowing_dimensions() {
        let err = GridParamParser::parse_str(r#"{ "nx": 18446744073709551615, "ny": 2 }"#)
            .unwrap_err();
        assert!(err.to_string().contains("too large"));
        assert!(err.to_string().contains("nx=18446744073709551615"));

        // element count fits in usize but the byte size does not fit in isize
        let err = GridParamParser::parse_str(r#"{ "nx": 4611686018427387904, "ny": 1 }"#)
            .unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_rejects_unknown_fields_and_modes() {
        assert!(GridParamParser::parse_str(r#"{ "nz": 10 }"#).is_err());
        assert!(GridParamParser::parse_str(r#"{ "pi_precision": "approx" }"#).is_err());
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = GridParamParser::parse("inputs/does_not_exist.json").unwrap_err();
        assert!(err.to_string().contains("does_not_exist.json"));
    }

    #[test]
    fn test_shipped_input_file_parses() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/gridparam.json");
        let param = GridParamParser::parse(path).unwrap();
        assert_eq!((param.nx, param.ny), (DEFAULT_NX, DEFAULT_NY));
    }
}
