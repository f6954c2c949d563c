// file: src/filter/size.rs
// description: file size normalization to kilobytes and threshold filtering
// reference: exiftool File:FileSize formatting ("<number> kB" / "<number> MB")

use crate::config::FilterConfig;
use crate::error::{PipelineError, Result};

const KILOBYTE_UNIT: &str = "kB";
const MEGABYTE_UNIT: &str = "MB";

/// Normalizes a raw size string such as `"1500 kB"` or `"1.5 MB"` to whole
/// kilobytes.
///
/// The number is the text before the first space. The unit is detected by
/// containment, `kB` before `MB`. Megabyte values are multiplied by 1000 and
/// truncated toward zero.
pub fn parse_size_kb(raw: &str) -> Result<u64> {
    let number = raw.split(' ').next().unwrap_or("");

    if raw.contains(KILOBYTE_UNIT) {
        return number
            .parse::<u64>()
            .map_err(|_| PipelineError::MalformedSize(raw.to_string()));
    }

    if raw.contains(MEGABYTE_UNIT) {
        let megabytes = number
            .parse::<f64>()
            .map_err(|_| PipelineError::MalformedSize(raw.to_string()))?;

        if !megabytes.is_finite() || megabytes < 0.0 {
            return Err(PipelineError::MalformedSize(raw.to_string()));
        }

        return Ok((megabytes * 1000.0).trunc() as u64);
    }

    Err(PipelineError::MalformedSize(raw.to_string()))
}

#[derive(Debug, Clone, Copy)]
pub struct SizeFilter {
    threshold_kb: u64,
}

impl SizeFilter {
    pub fn new(threshold_kb: u64) -> Self {
        Self { threshold_kb }
    }

    pub fn from_config(config: &FilterConfig) -> Self {
        Self::new(config.threshold_kb)
    }

    pub fn threshold_kb(&self) -> u64 {
        self.threshold_kb
    }

    /// Size in kB when strictly above the threshold, `None` otherwise.
    /// Malformed sizes are [`PipelineError::MalformedSize`]; callers decide
    /// whether that is fatal.
    pub fn classify(&self, raw: &str) -> Result<Option<u64>> {
        let kb = parse_size_kb(raw)?;
        Ok((kb > self.threshold_kb).then_some(kb))
    }
}

impl Default for SizeFilter {
    fn default() -> Self {
        Self::new(1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kept(filter: &SizeFilter, raw: &str) -> Option<u64> {
        filter.classify(raw).unwrap()
    }

    #[test]
    fn test_classify_kilobytes() {
        let filter = SizeFilter::default();
        assert_eq!(kept(&filter, "1500 kB"), Some(1500));
        assert_eq!(kept(&filter, "999 kB"), None);
        assert_eq!(kept(&filter, "1000 kB"), None);
        assert_eq!(kept(&filter, "1001 kB"), Some(1001));
    }

    #[test]
    fn test_classify_megabytes() {
        let filter = SizeFilter::default();
        assert_eq!(kept(&filter, "2 MB"), Some(2000));
        assert_eq!(kept(&filter, "1 MB"), None);
        assert_eq!(kept(&filter, "1.5 MB"), Some(1500));
        assert_eq!(kept(&filter, "0.8 MB"), None);
    }

    #[test]
    fn test_megabytes_truncate() {
        assert_eq!(parse_size_kb("1.2 MB").unwrap(), 1200);
        assert_eq!(parse_size_kb("1.0009 MB").unwrap(), 1000);
        assert_eq!(parse_size_kb("12.3456 MB").unwrap(), 12345);
    }

    #[test]
    fn test_malformed_sizes_are_errors() {
        let filter = SizeFilter::default();
        for raw in ["3 GB", "2048 bytes", "big kB", "1.5 kB", "", "-2 MB", "NaN MB"] {
            assert!(
                matches!(filter.classify(raw), Err(PipelineError::MalformedSize(_))),
                "{raw:?} should be malformed"
            );
        }

        assert!(matches!(
            filter.classify("3 GB"),
            Err(PipelineError::MalformedSize(ref raw)) if raw == "3 GB"
        ));
    }

    #[test]
    fn test_custom_threshold() {
        let filter = SizeFilter::new(2000);
        assert_eq!(kept(&filter, "1500 kB"), None);
        assert_eq!(kept(&filter, "2.5 MB"), Some(2500));
        assert_eq!(filter.threshold_kb(), 2000);
    }
}
