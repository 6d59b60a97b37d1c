use crate::interpreter::{
    evaluator::core::{Context, EvalResult},
    value::core::Value,
};

/// Writes the display form of its argument to the console.
///
/// The line is also echoed to standard output when
/// `EvalOptions::echo_console` is set. Returns `Void`.
///
/// # Example
/// ```
/// use minic::interpreter::{
///     evaluator::{core::Context, function::builtin::print},
///     value::core::Value,
/// };
///
/// let mut context = Context::new();
/// let r = print(&mut context, &[Value::Float(2.5)]).unwrap();
///
/// assert_eq!(r, Value::Void);
/// assert_eq!(context.console, vec!["2.5".to_string()]);
/// ```
pub fn print(context: &mut Context, args: &[Value]) -> EvalResult<Value> {
    let line = args.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");

    tracing::trace!(%line, "print");
    if context.options.echo_console {
        println!("{line}");
    }
    context.console.push(line);

    Ok(Value::Void)
}
