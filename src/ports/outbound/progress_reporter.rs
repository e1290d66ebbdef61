/// ProgressReporter port for reporting progress and diagnostics
///
/// This port abstracts user feedback (e.g., to stderr) during a fetch and
/// carries the diagnostic context of failures (endpoint, body snippet).
pub trait ProgressReporter {
    /// Reports a progress message
    ///
    /// # Arguments
    /// * `message` - The progress message to report
    fn report(&self, message: &str);

    /// Signals that a query is in flight
    ///
    /// # Arguments
    /// * `message` - What is being waited for
    fn report_waiting(&self, message: &str);

    /// Reports an error or warning message
    ///
    /// # Arguments
    /// * `message` - The error/warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    ///
    /// # Arguments
    /// * `message` - Completion message
    fn report_completion(&self, message: &str);
}
