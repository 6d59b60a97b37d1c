/// Ensures sufficient stack space is available before executing `f`.
///
/// Grows the stack if less than 128KB remain, allocating 2MB at a time. Deep
/// call chains and long operator chains recurse through here, so their depth
/// is bounded by memory instead of by the caller's thread stack.
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Minimum stack space to keep available.
    const RED_ZONE: usize = 128 * 1024;

    /// Stack space to allocate when growing.
    const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}
