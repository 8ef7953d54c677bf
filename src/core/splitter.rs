use crate::domain::model::Cable;
use crate::utils::error::{Result, SplitError};
use crate::utils::validation::is_within;
use serde_json::Value;

/// Cuts a cable into evenly sized pieces and names them.
///
/// Leftover length after the even division is turned into as many extra
/// full-size pieces as it allows, followed by one shorter piece for whatever
/// is still left. Pieces are named `coconuts-<index>` with the index zero-padded
/// so the names sort in cut order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Splitter;

impl Splitter {
    pub const MIN_TIMES: i64 = 1;
    pub const MAX_TIMES: i64 = 64;
    pub const MIN_LENGTH: i64 = 2;
    pub const MAX_LENGTH: i64 = 1024;

    pub const TEN_CABLES: usize = 10;
    pub const HUNDRED_CABLES: usize = 100;

    /// Prefix for every generated piece name. The input cable's own name is
    /// not reused.
    pub const NAME_PREFIX: &'static str = "coconuts";

    pub fn new() -> Self {
        Self
    }

    /// Checks run in order: cable length, cut count, then cuts against length.
    fn validate(&self, cable: &Cable, times: i64) -> Result<()> {
        if !is_within(cable.length, Self::MIN_LENGTH, Self::MAX_LENGTH) {
            return Err(SplitError::CableLengthOutOfRange {
                length: cable.length,
                min: Self::MIN_LENGTH,
                max: Self::MAX_LENGTH,
            });
        }
        if !is_within(times, Self::MIN_TIMES, Self::MAX_TIMES) {
            return Err(SplitError::CutCountOutOfRange {
                times,
                min: Self::MIN_TIMES,
                max: Self::MAX_TIMES,
            });
        }
        if cable.length <= times {
            return Err(SplitError::TooManyCuts {
                length: cable.length,
                times,
            });
        }
        Ok(())
    }

    /// Splits `cable` with `times` cuts. The input is left untouched.
    pub fn split(&self, cable: &Cable, times: i64) -> Result<Vec<Cable>> {
        self.validate(cable, times)?;
        let lengths = self.get_new_cable_lengths(cable, times)?;
        Ok(self.create_cables(&lengths))
    }

    /// Piece lengths for `times` cuts: `times + 1` equal pieces, then the
    /// remainder as extra full pieces plus one partial piece.
    ///
    /// Arguments are validated here as well, so a zero base length can never
    /// reach the remainder division.
    pub fn get_new_cable_lengths(&self, cable: &Cable, times: i64) -> Result<Vec<i64>> {
        self.validate(cable, times)?;

        let main_count = times + 1;
        // length > times, so main_count <= length and base_length >= 1.
        let base_length = cable.length / main_count;
        let mut lengths = vec![base_length; main_count as usize];

        let remainder = cable.length % main_count;
        if remainder == 0 {
            return Ok(lengths);
        }

        let extra_full_count = remainder / base_length;
        let extra_partial_length = remainder % base_length;

        if extra_full_count > 0 {
            lengths.extend(std::iter::repeat(base_length).take(extra_full_count as usize));
        }
        if extra_partial_length > 0 {
            lengths.push(extra_partial_length);
        }
        Ok(lengths)
    }

    /// Digits needed to print indices `0..count` at equal width.
    /// Tops out at three.
    pub fn get_zfill(&self, count: usize) -> usize {
        if count < Self::TEN_CABLES {
            1
        } else if count < Self::HUNDRED_CABLES {
            2
        } else {
            3
        }
    }

    pub fn create_cables(&self, lengths: &[i64]) -> Vec<Cable> {
        let width = self.get_zfill(lengths.len());
        lengths
            .iter()
            .enumerate()
            .map(|(index, &length)| {
                Cable::new(length, format!("{}-{:0width$}", Self::NAME_PREFIX, index))
            })
            .collect()
    }

    /// Adds one to an integer value. Anything that is not an integer, or an
    /// integer that would overflow `i64`, is rejected.
    pub fn plus_one(value: &Value) -> Result<i64> {
        value
            .as_i64()
            .and_then(|n| n.checked_add(1))
            .ok_or_else(|| SplitError::NotAnInteger {
                value: value.to_string(),
            })
    }

    pub fn plus_one_i64(value: i64) -> Result<i64> {
        value.checked_add(1).ok_or_else(|| SplitError::NotAnInteger {
            value: value.to_string(),
        })
    }
}
