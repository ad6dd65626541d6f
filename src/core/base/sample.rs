//! Counter Sample
//!

use crate::{Error, Result};
use std::fmt;

pub const SAMPLE_PART_SEPARATOR: &str = "|";
pub const SAMPLE_EMPTY_STRING_ERROR: &str = "invalid sample line: empty string";
pub const SAMPLE_INVALID_FORMAT_ERROR: &str = "invalid sample line: invalid format";

/// CounterSample is one row of a registry enumeration: the counter name,
/// its cumulative total and its trailing-minute rate at the read instant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterSample {
    pub name: String,
    pub total: u64,
    pub rate: u32,
}

impl fmt::Display for CounterSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let final_name = self.name.replace(SAMPLE_PART_SEPARATOR, "_");
        write!(f, "{}|{}|{}", final_name, self.total, self.rate)
    }
}

impl CounterSample {
    /// cannot use String trait, since conversion may fail
    pub fn from_string(line: &str) -> Result<Self> {
        if line.is_empty() {
            return Err(Error::msg(SAMPLE_EMPTY_STRING_ERROR));
        }
        let arr: Vec<&str> = line.split(SAMPLE_PART_SEPARATOR).collect();
        if arr.len() < 3 {
            return Err(Error::msg(SAMPLE_INVALID_FORMAT_ERROR));
        }
        Ok(CounterSample {
            name: arr[0].into(),
            total: arr[1].parse::<u64>()?,
            rate: arr[2].parse::<u32>()?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn legal() {
        let sample = CounterSample::from_string("queries|1337|42").unwrap();
        assert_eq!("queries", sample.name);
        assert_eq!(1337u64, sample.total);
        assert_eq!(42u32, sample.rate);
    }

    #[test]
    fn round_trip() {
        let sample = CounterSample {
            name: "cache|hits".into(),
            total: 7,
            rate: 7,
        };
        let parsed = CounterSample::from_string(&sample.to_string()).unwrap();
        assert_eq!("cache_hits", parsed.name);
        assert_eq!(7, parsed.total);
    }

    #[test]
    #[should_panic(expected = "invalid sample line: empty string")] //SAMPLE_EMPTY_STRING_ERROR
    fn illegal1() {
        let sample = "";
        CounterSample::from_string(sample).unwrap();
    }

    #[test]
    #[should_panic(expected = "invalid sample line: invalid format")] //SAMPLE_INVALID_FORMAT_ERROR
    fn illegal2() {
        let sample = "queries|1337";
        CounterSample::from_string(sample).unwrap();
    }

    #[test]
    #[should_panic(expected = "invalid digit found in string")]
    fn illegal3() {
        let sample = "queries|-1337|42";
        CounterSample::from_string(sample).unwrap();
    }
}
