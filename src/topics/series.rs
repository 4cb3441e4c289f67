use std::ops::RangeInclusive;

pub const SERIES_RANGE: RangeInclusive<u32> = 1..=10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SeriesError {
    #[error("\"{0}\" is not a whole number")]
    NotANumber(String),
    #[error("n must be between {min} and {max}, got {0}", min = SERIES_RANGE.start(), max = SERIES_RANGE.end())]
    OutOfRange(u32),
}

/// General formulas of the four homologous series for a given carbon count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaSet {
    pub n: u32,
    pub alkane: String,
    pub alkene: String,
    /// `None` for n = 1: there is no one-carbon alkyne.
    pub alkyne: Option<String>,
    pub alcohol: String,
}

pub fn generate(n: u32) -> Result<FormulaSet, SeriesError> {
    if !SERIES_RANGE.contains(&n) {
        return Err(SeriesError::OutOfRange(n));
    }

    let alkyne = if n >= 2 {
        Some(format!("C{}H{}", n, 2 * n - 2))
    } else {
        None
    };

    Ok(FormulaSet {
        n,
        alkane: format!("C{}H{}", n, 2 * n + 2),
        alkene: format!("C{}H{}", n, 2 * n),
        alkyne,
        alcohol: format!("C{}H{}OH", n, 2 * n + 1),
    })
}

pub fn parse_length(input: &str) -> Result<u32, SeriesError> {
    let input = input.trim();
    let n = input
        .parse::<u32>()
        .map_err(|_| SeriesError::NotANumber(input.to_string()))?;
    if !SERIES_RANGE.contains(&n) {
        return Err(SeriesError::OutOfRange(n));
    }
    Ok(n)
}
