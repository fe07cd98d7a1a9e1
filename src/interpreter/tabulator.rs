use crate::{
    error::TabulationError,
    rpn::Rpn,
    util::num::{positive_i64_to_usize, usize_to_f64_checked},
};

/// A validated sampling grid: `samples` evenly spaced points over the
/// inclusive range `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    start:   f64,
    end:     f64,
    samples: usize,
    step:    f64,
}

impl Domain {
    /// Builds a grid of `samples` points from `start` to `end`.
    ///
    /// # Errors
    /// Returns [`TabulationError::InvalidRange`] if a bound is not finite, if
    /// `end < start`, or if `samples` is zero or too large to index exactly.
    ///
    /// # Example
    /// ```
    /// use rpntab::interpreter::tabulator::Domain;
    ///
    /// let domain = Domain::new(0.0, 1.0, 5).unwrap();
    /// assert_eq!(domain.points().collect::<Vec<_>>(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    ///
    /// assert!(Domain::new(5.0, 1.0, 10).is_err());
    /// assert!(Domain::new(0.0, 1.0, 0).is_err());
    /// ```
    pub fn new(start: f64, end: f64, samples: usize) -> Result<Self, TabulationError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(TabulationError::invalid_range(format!("bounds {start} and {end} must be finite")));
        }
        if end < start {
            return Err(TabulationError::invalid_range(format!("end {end} is less than start {start}")));
        }
        if samples == 0 {
            return Err(TabulationError::invalid_range("sample count must be positive"));
        }

        let intervals = usize_to_f64_checked(samples - 1,
                                             TabulationError::invalid_range("sample count is too large"))?;
        let step = match samples {
            1 => 0.0,
            // The span of two finite bounds can still overflow.
            _ if (end - start).is_finite() => (end - start) / intervals,
            _ => end / intervals - start / intervals,
        };

        Ok(Self { start,
                  end,
                  samples,
                  step })
    }

    /// Builds a grid from textual bounds and sample count.
    ///
    /// # Errors
    /// Any value that does not parse, including a sample count that is
    /// negative or not an integer, is reported as
    /// [`TabulationError::InvalidRange`], as are the conditions checked by
    /// [`Domain::new`].
    ///
    /// # Example
    /// ```
    /// use rpntab::interpreter::tabulator::Domain;
    ///
    /// assert!(Domain::parse("-1", "1.5", "3").is_ok());
    /// assert!(Domain::parse("zero", "1", "3").is_err());
    /// assert!(Domain::parse("0", "1", "-3").is_err());
    /// assert!(Domain::parse("0", "1", "2.5").is_err());
    /// ```
    pub fn parse(start: &str, end: &str, samples: &str) -> Result<Self, TabulationError> {
        let start = parse_bound(start)?;
        let end = parse_bound(end)?;
        let samples = samples.trim()
                             .parse::<i64>()
                             .map_err(|_| {
                                 TabulationError::invalid_range(format!("sample count '{samples}' is not an integer"))
                             })?;
        let samples =
            positive_i64_to_usize(samples,
                                  TabulationError::invalid_range("sample count must be positive"))?;

        Self::new(start, end, samples)
    }

    #[must_use]
    pub const fn start(&self) -> f64 {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> f64 {
        self.end
    }

    #[must_use]
    pub const fn samples(&self) -> usize {
        self.samples
    }

    /// Spacing between neighbouring points; zero for a single point.
    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// Returns the `i`-th point. The first point is exactly `start` and the
    /// last is exactly `end`.
    ///
    /// # Example
    /// ```
    /// use rpntab::interpreter::tabulator::Domain;
    ///
    /// let domain = Domain::new(-f64::MAX, f64::MAX, 5).unwrap();
    /// assert_eq!(domain.point(0), -f64::MAX);
    /// assert_eq!(domain.point(2), 0.0);
    /// assert_eq!(domain.point(4), f64::MAX);
    /// assert!(domain.points().all(f64::is_finite));
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn point(&self, i: usize) -> f64 {
        if i == 0 {
            return self.start;
        }
        if i == self.samples - 1 {
            return self.end;
        }
        // `samples` was checked against `MAX_SAFE_U64_INT` in `new`.
        let offset = self.step * i as f64;
        if offset.is_finite() {
            return self.start + offset;
        }
        let t = i as f64 / (self.samples - 1) as f64;
        self.start * (1.0 - t) + self.end * t
    }

    /// Iterates over the points in increasing order.
    pub fn points(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        (0..self.samples).map(|i| self.point(i))
    }
}

/// Sample inputs and the matching outputs of one tabulation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Table {
    #[must_use]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    #[must_use]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Iterates over `(x, y)` pairs in sample order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// Splits the table into its input and output columns.
    #[must_use]
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.xs, self.ys)
    }
}

/// Evaluates an already compiled expression at every point of `domain`.
///
/// Evaluation is fail-fast: the first point that fails aborts the remaining
/// samples, and the error records which `x` it was.
///
/// # Errors
/// Returns [`TabulationError::Evaluation`] wrapping the first evaluation
/// failure.
///
/// # Example
/// ```
/// use rpntab::{
///     compile,
///     interpreter::tabulator::{Domain, tabulate_rpn},
/// };
///
/// let rpn = compile("1 / x").unwrap();
/// let err = tabulate_rpn(&rpn, &Domain::new(-1.0, 1.0, 3).unwrap()).unwrap_err();
/// assert_eq!(err.to_string(), "Error at token 2: Division by zero. (at x = 0)");
/// ```
pub fn tabulate_rpn(rpn: &Rpn, domain: &Domain) -> Result<Table, TabulationError> {
    // Grown per sample so a failing first point returns before a large grid
    // is allocated.
    let mut xs = Vec::new();
    let mut ys = Vec::new();

    for x in domain.points() {
        let y = rpn.evaluate(x)
                   .map_err(|source| TabulationError::Evaluation { x, source })?;
        xs.push(x);
        ys.push(y);
    }

    Ok(Table { xs, ys })
}

fn parse_bound(text: &str) -> Result<f64, TabulationError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| TabulationError::invalid_range(format!("bound '{text}' is not a number")))
}
