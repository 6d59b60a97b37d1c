/// Runtime values.
///
/// Defines the `Value` enum produced by evaluation together with its type
/// checks, numeric promotion and display form.
pub mod core;
