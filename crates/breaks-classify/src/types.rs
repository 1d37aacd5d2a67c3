//! Classification style names

use std::fmt;

/// The four standard classification styles a provider understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassStyle {
    /// Bands of one standard deviation centred on the mean
    Sd,
    /// Equal-width intervals between the sample extremes
    Equal,
    /// Intervals holding equal shares of the sample
    Quantile,
    /// Fisher's optimal (natural breaks) partition
    Fisher,
}

impl ClassStyle {
    /// All styles, in declaration order
    pub const ALL: [ClassStyle; 4] = [Self::Sd, Self::Equal, Self::Quantile, Self::Fisher];

    /// Style name as providers spell it
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sd => "sd",
            Self::Equal => "equal",
            Self::Quantile => "quantile",
            Self::Fisher => "fisher",
        }
    }
}

impl fmt::Display for ClassStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
