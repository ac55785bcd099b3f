//! Figure naming convention.
//!
//! Published tables are named `F` + `CC_FF_S` (chapter, figure, sub-figure)
//! + kind + argument:
//!
//! | Kind  | Meaning                               | Arguments       |
//! |-------|---------------------------------------|-----------------|
//! | `IID` | two independents, one dependent       | `i1`, `i2`, `d` |
//! | `ID`  | one independent, one dependent        | `i`, `d`        |
//!
//! For example `F01_02_1IIDi1` is the `i1` axis of surface figure 1.2(1) and
//! `F03_01_2IDd` is the series of curve figure 3.1(2).

use crate::error::LoadError;
use std::fmt;
use std::str::FromStr;

/// Chapter, figure and sub-figure numbers identifying a published figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FigureId {
    /// Chapter number
    pub chapter: u16,
    /// Figure number within the chapter
    pub figure: u16,
    /// Sub-figure number
    pub subfigure: u16,
}

impl FigureId {
    /// Create a figure id.
    pub fn new(chapter: u16, figure: u16, subfigure: u16) -> Self {
        Self {
            chapter,
            figure,
            subfigure,
        }
    }

    /// Parse the id prefix of `s`, returning the id and the unparsed tail.
    fn parse_prefix(s: &str) -> Option<(Self, &str)> {
        let rest = s.strip_prefix('F').or_else(|| s.strip_prefix('f'))?;
        let (chapter, rest) = take_number(rest)?;
        let rest = rest.strip_prefix('_')?;
        let (figure, rest) = take_number(rest)?;
        let rest = rest.strip_prefix('_')?;
        let (subfigure, rest) = take_number(rest)?;
        Some((Self::new(chapter, figure, subfigure), rest))
    }
}

/// Split a leading run of ASCII digits off `s`.
fn take_number(s: &str) -> Option<(u16, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    let value = s[..end].parse().ok()?;
    Some((value, &s[end..]))
}

impl fmt::Display for FigureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "F{:02}_{:02}_{}",
            self.chapter, self.figure, self.subfigure
        )
    }
}

impl FromStr for FigureId {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match Self::parse_prefix(trimmed) {
            Some((id, "")) => Ok(id),
            _ => Err(LoadError::InvalidName(trimmed.to_string())),
        }
    }
}

/// Figure kind encoded in the variable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FigureKind {
    /// `IID`: two independent axes and a dependent grid
    Surface,
    /// `ID`: one independent axis and a dependent series
    Curve,
}

impl FigureKind {
    /// Name-convention code for this kind.
    pub fn code(&self) -> &'static str {
        match self {
            FigureKind::Surface => "IID",
            FigureKind::Curve => "ID",
        }
    }

    /// Arguments a complete figure of this kind carries.
    pub fn arguments(&self) -> &'static [Argument] {
        match self {
            FigureKind::Surface => &[Argument::I1, Argument::I2, Argument::D],
            FigureKind::Curve => &[Argument::I, Argument::D],
        }
    }
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FigureKind::Surface => write!(f, "surface"),
            FigureKind::Curve => write!(f, "curve"),
        }
    }
}

/// Argument suffix of a variable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Argument {
    /// First independent axis of a surface (grid columns)
    I1,
    /// Second independent axis of a surface (grid rows)
    I2,
    /// Independent axis of a curve
    I,
    /// Dependent data
    D,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Argument::I1 => "i1",
            Argument::I2 => "i2",
            Argument::I => "i",
            Argument::D => "d",
        };
        write!(f, "{}", s)
    }
}

/// A parsed variable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariableName {
    /// Figure the variable belongs to
    pub figure: FigureId,
    /// Figure kind
    pub kind: FigureKind,
    /// Which component of the figure this variable holds
    pub argument: Argument,
}

impl VariableName {
    /// Parse a variable name such as `F01_02_1IIDi1`.
    ///
    /// # Example
    ///
    /// ```
    /// use adapter_tables::naming::{Argument, FigureId, FigureKind, VariableName};
    ///
    /// let name = VariableName::parse("F01_02_1IIDi1").unwrap();
    /// assert_eq!(name.figure, FigureId::new(1, 2, 1));
    /// assert_eq!(name.kind, FigureKind::Surface);
    /// assert_eq!(name.argument, Argument::I1);
    ///
    /// assert!(VariableName::parse("F01_02_1IDi1").is_err());
    /// ```
    pub fn parse(name: &str) -> Result<Self, LoadError> {
        let invalid = || LoadError::InvalidName(name.to_string());

        let (figure, rest) = FigureId::parse_prefix(name).ok_or_else(invalid)?;

        // IID must be tried before ID
        let (kind, rest) = if let Some(rest) = rest.strip_prefix("IID") {
            (FigureKind::Surface, rest)
        } else if let Some(rest) = rest.strip_prefix("ID") {
            (FigureKind::Curve, rest)
        } else {
            return Err(invalid());
        };

        let argument = match (kind, rest) {
            (FigureKind::Surface, "i1") => Argument::I1,
            (FigureKind::Surface, "i2") => Argument::I2,
            (FigureKind::Curve, "i") => Argument::I,
            (_, "d") => Argument::D,
            _ => return Err(invalid()),
        };

        Ok(Self {
            figure,
            kind,
            argument,
        })
    }
}

impl fmt::Display for VariableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.figure, self.kind.code(), self.argument)
    }
}
