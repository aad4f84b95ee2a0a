//! Decoding of SSF feature structures (`<fs key='value' ...>`)

use super::types::Features;
use crate::error::{ConvertError, Result};

const FS_OPEN: &str = "<fs";
const FS_CLOSE: &str = ">";

/// Strip the `<fs` ... `>` markup from a feature block
pub fn unwrap_feature_block(line: usize, block: &str) -> Result<&str> {
    block
        .trim()
        .strip_prefix(FS_OPEN)
        .and_then(|inner| inner.strip_suffix(FS_CLOSE))
        .ok_or_else(|| ConvertError::MalformedFeatureBlock {
            line,
            block: block.to_string(),
        })
}

/// Parse the inside of a feature block into a feature mapping
///
/// Runs of whitespace separate features. Each feature splits on its first
/// `=`; one pair of surrounding quotes is removed from the value.
pub fn parse_features(text: &str) -> Result<Features> {
    let mut features = Features::new();

    for feature in text.split_whitespace() {
        let (key, value) =
            feature
                .split_once('=')
                .ok_or_else(|| ConvertError::MalformedFeature {
                    feature: feature.to_string(),
                })?;
        features.insert(key, unquote(value));
    }

    Ok(features)
}

/// Decode a complete `<fs ...>` block
pub fn parse_feature_block(line: usize, block: &str) -> Result<Features> {
    parse_features(unwrap_feature_block(line, block)?)
}

fn unquote(value: &str) -> &str {
    for quote in ['\'', '"'] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_feature_block() {
        let features = parse_feature_block(
            1,
            "<fs af='rAma,n,m,sg,3,d,0,0' name='rAma' chunkType='head:NP1'>",
        )
        .unwrap();

        assert_eq!(features.len(), 3);
        assert_eq!(features.get("af"), Some("rAma,n,m,sg,3,d,0,0"));
        assert_eq!(features.get("name"), Some("rAma"));
        assert_eq!(features.get("chunkType"), Some("head:NP1"));
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        let features = parse_features("  af='a'   \t name='b'  ").unwrap();
        assert_eq!(features.get("af"), Some("a"));
        assert_eq!(features.get("name"), Some("b"));
    }

    #[test]
    fn test_double_quotes_and_bare_values() {
        let features = parse_features("af=\"x,y\" vpos=vib1").unwrap();
        assert_eq!(features.get("af"), Some("x,y"));
        assert_eq!(features.get("vpos"), Some("vib1"));
    }

    #[test]
    fn test_value_with_equals_keeps_remainder() {
        let features = parse_features("stype='a=b'").unwrap();
        assert_eq!(features.get("stype"), Some("a=b"));
    }

    #[test]
    fn test_missing_separator_is_malformed() {
        assert_eq!(
            parse_features("af='a' broken"),
            Err(ConvertError::MalformedFeature {
                feature: "broken".to_string()
            })
        );
    }

    #[test]
    fn test_block_without_markup() {
        assert!(matches!(
            parse_feature_block(4, "af='a'"),
            Err(ConvertError::MalformedFeatureBlock { line: 4, .. })
        ));
    }

    #[test]
    fn test_empty_block() {
        assert!(parse_feature_block(1, "<fs>").unwrap().is_empty());
    }
}
