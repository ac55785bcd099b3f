//! Assembled figures and figure sets.

use crate::error::LoadError;
use crate::format::{RawValue, Variables};
use crate::naming::{Argument, FigureId, FigureKind, VariableName};
use interp_core::math::interpolators::{
    Extrapolation, GridInterpolator, Interpolator, LinearInterpolator,
};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, warn};

/// A complete figure ready for evaluation.
#[derive(Debug, Clone)]
pub enum Figure {
    /// Dependent grid over two axes (`IID`)
    Surface(GridInterpolator<f64>),
    /// Dependent series over one axis (`ID`)
    Curve(LinearInterpolator<f64>),
}

impl Figure {
    /// Kind of this figure.
    pub fn kind(&self) -> FigureKind {
        match self {
            Figure::Surface(_) => FigureKind::Surface,
            Figure::Curve(_) => FigureKind::Curve,
        }
    }

    /// Human-readable axis ranges, e.g. `i1 [0, 2] x i2 [0, 10]`.
    pub fn describe_domain(&self) -> String {
        match self {
            Figure::Surface(g) => {
                let (x0, x1) = g.domain_x();
                let (y0, y1) = g.domain_y();
                format!("i1 [{}, {}] x i2 [{}, {}]", x0, x1, y0, y1)
            }
            Figure::Curve(c) => {
                let (x0, x1) = c.domain();
                format!("i [{}, {}]", x0, x1)
            }
        }
    }

    /// Evaluate the figure at `query`.
    pub fn evaluate(&self, id: FigureId, query: Query) -> Result<f64, LoadError> {
        match (self, query) {
            (Figure::Surface(g), Query::Point2(x, y)) => Ok(g.interpolate(x, y)?),
            (Figure::Curve(c), Query::Point1(x)) => Ok(c.interpolate(x)?),
            (Figure::Surface(_), Query::Point1(_)) => Err(LoadError::QueryMismatch {
                figure: id,
                expected: "2D",
            }),
            (Figure::Curve(_), Query::Point2(..)) => Err(LoadError::QueryMismatch {
                figure: id,
                expected: "1D",
            }),
        }
    }
}

/// Point at which to evaluate a figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Query {
    /// Curve query at `i`
    Point1(f64),
    /// Surface query at `(i1, i2)`
    Point2(f64, f64),
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Point1(x) => write!(f, "({})", x),
            Query::Point2(x, y) => write!(f, "({}, {})", x, y),
        }
    }
}

/// Variables collected for one figure before assembly.
#[derive(Default)]
struct Parts {
    kind: Option<FigureKind>,
    components: BTreeMap<Argument, RawValue>,
}

impl Parts {
    fn take(&mut self, figure: FigureId, argument: Argument) -> Result<RawValue, LoadError> {
        self.components
            .remove(&argument)
            .ok_or(LoadError::MissingComponent {
                figure,
                component: argument,
            })
    }

    fn take_vector(&mut self, figure: FigureId, argument: Argument) -> Result<Vec<f64>, LoadError> {
        match self.take(figure, argument)? {
            RawValue::Vector(v) => Ok(v),
            other => Err(LoadError::WrongShape {
                figure,
                component: argument,
                expected: "vector",
                found: other.shape(),
            }),
        }
    }

    fn take_grid(&mut self, figure: FigureId, argument: Argument) -> Result<Vec<Vec<f64>>, LoadError> {
        match self.take(figure, argument)? {
            RawValue::Grid(g) => Ok(g),
            // An empty array decodes as a vector; treat it as an empty grid
            RawValue::Vector(v) if v.is_empty() => Ok(Vec::new()),
            other => Err(LoadError::WrongShape {
                figure,
                component: argument,
                expected: "grid",
                found: other.shape(),
            }),
        }
    }

    fn assemble(
        mut self,
        figure: FigureId,
        extrapolation: Extrapolation,
    ) -> Result<Figure, LoadError> {
        let invalid = |source| LoadError::InvalidTable { figure, source };

        let kind = self.kind.ok_or_else(|| LoadError::InvalidName(figure.to_string()))?;
        if let Some(&component) = kind
            .arguments()
            .iter()
            .find(|argument| !self.components.contains_key(argument))
        {
            return Err(LoadError::MissingComponent { figure, component });
        }

        match kind {
            FigureKind::Surface => {
                let i1 = self.take_vector(figure, Argument::I1)?;
                let i2 = self.take_vector(figure, Argument::I2)?;
                let d = self.take_grid(figure, Argument::D)?;
                let grid = GridInterpolator::new(&i1, &i2, &d)
                    .map_err(invalid)?
                    .with_extrapolation(extrapolation);
                Ok(Figure::Surface(grid))
            }
            FigureKind::Curve => {
                let i = self.take_vector(figure, Argument::I)?;
                let d = self.take_vector(figure, Argument::D)?;
                let curve = LinearInterpolator::new(&i, &d)
                    .map_err(invalid)?
                    .with_extrapolation(extrapolation);
                Ok(Figure::Curve(curve))
            }
        }
    }
}

/// All figures loaded from one source, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct FigureSet {
    figures: BTreeMap<FigureId, Figure>,
}

impl FigureSet {
    /// Assemble figures from decoded variables.
    ///
    /// Variables whose names do not follow the naming convention are
    /// skipped with a warning. Every figure that is named must be complete
    /// and valid.
    ///
    /// # Example
    ///
    /// ```
    /// use adapter_tables::figure::{FigureSet, Query};
    /// use adapter_tables::format::{parse_source, SourceFormat};
    /// use adapter_tables::naming::FigureId;
    /// use interp_core::math::interpolators::Extrapolation;
    ///
    /// let text = r#"{"F03_01_2IDi": [0, 10], "F03_01_2IDd": [1, 3]}"#;
    /// let vars = parse_source(text, SourceFormat::Json, "inline").unwrap();
    /// let set = FigureSet::from_variables(vars, Extrapolation::Extend).unwrap();
    ///
    /// let y = set.evaluate(&FigureId::new(3, 1, 2), Query::Point1(5.0)).unwrap();
    /// assert!((y - 2.0).abs() < 1e-12);
    /// ```
    pub fn from_variables(vars: Variables, extrapolation: Extrapolation) -> Result<Self, LoadError> {
        let mut parts: BTreeMap<FigureId, Parts> = BTreeMap::new();

        for (name, value) in vars {
            let parsed = match VariableName::parse(&name) {
                Ok(parsed) => parsed,
                Err(_) => {
                    warn!(variable = %name, "skipping variable outside the figure naming convention");
                    continue;
                }
            };

            let entry = parts.entry(parsed.figure).or_default();
            match entry.kind {
                Some(kind) if kind != parsed.kind => {
                    return Err(LoadError::ConflictingKinds(parsed.figure));
                }
                _ => entry.kind = Some(parsed.kind),
            }
            if entry.components.insert(parsed.argument, value).is_some() {
                warn!(
                    figure = %parsed.figure,
                    component = %parsed.argument,
                    variable = %name,
                    "component bound more than once, keeping the last binding"
                );
            }
        }

        let mut figures = BTreeMap::new();
        for (id, part) in parts {
            let figure = part.assemble(id, extrapolation)?;
            debug!(figure = %id, kind = %figure.kind(), domain = %figure.describe_domain(), "assembled figure");
            figures.insert(id, figure);
        }

        Ok(Self { figures })
    }

    /// Look up a figure.
    pub fn get(&self, id: &FigureId) -> Option<&Figure> {
        self.figures.get(id)
    }

    /// Figure ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = &FigureId> {
        self.figures.keys()
    }

    /// Figures in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (&FigureId, &Figure)> {
        self.figures.iter()
    }

    /// Number of figures.
    pub fn len(&self) -> usize {
        self.figures.len()
    }

    /// True when no figures were loaded.
    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    /// Evaluate figure `id` at `query`.
    pub fn evaluate(&self, id: &FigureId, query: Query) -> Result<f64, LoadError> {
        self.get(id)
            .ok_or(LoadError::UnknownFigure(*id))?
            .evaluate(*id, query)
    }
}
