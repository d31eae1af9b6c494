//! Regression check accumulator

/// Accumulates pass/fail state across the checks of one regression
/// test, reporting every failure at the end instead of stopping at the
/// first.
///
/// # Usage
///
/// ```
/// use rasterlab_test::CheckParams;
///
/// let mut rp = CheckParams::new("example");
/// rp.compare_values(4.0, 2.0 + 2.0, 0.0);
/// assert!(rp.cleanup());
/// ```
pub struct CheckParams {
    /// Name of the test (e.g. "catalogue")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl CheckParams {
    /// Create a new check accumulator for the named test.
    pub fn new(test_name: &str) -> Self {
        CheckParams {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Compare two values within an absolute tolerance.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) {
        self.index += 1;
        if (expected - actual).abs() > delta {
            self.success = false;
            self.failures.push(format!(
                "{} check {}: expected {expected}, got {actual} (delta {delta})",
                self.test_name, self.index
            ));
        }
    }

    /// Record an arbitrary boolean check.
    pub fn check(&mut self, label: &str, condition: bool) {
        self.index += 1;
        if !condition {
            self.success = false;
            self.failures
                .push(format!("{} check {}: {label}", self.test_name, self.index));
        }
    }

    /// Number of checks run so far.
    pub fn checks_run(&self) -> usize {
        self.index
    }

    /// Report failures and return the overall status.
    pub fn cleanup(&self) -> bool {
        for failure in &self.failures {
            eprintln!("FAIL {failure}");
        }
        self.success
    }
}
