use std::io::Write;

use crate::error::ProcessResult;

/// Port for anything the collector can process
///
/// Implementations write their processing message to `out` and report
/// domain failures through [`ProcessError`](crate::ProcessError). The bound
/// on `Send` lets items travel from producer threads to the collector.
pub trait Process: Send {
    /// Process the item, writing any output to `out`
    fn process(&self, out: &mut dyn Write) -> ProcessResult<()>;
}

impl<T: Process + ?Sized> Process for Box<T> {
    fn process(&self, out: &mut dyn Write) -> ProcessResult<()> {
        (**self).process(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Ensure the trait is object-safe
    fn _assert_process_object_safe(_: &dyn Process) {}

    struct Echo(&'static str);

    impl Process for Echo {
        fn process(&self, out: &mut dyn Write) -> ProcessResult<()> {
            writeln!(out, "{}", self.0)?;
            Ok(())
        }
    }

    #[test]
    fn test_boxed_process_delegates() {
        let item: Box<dyn Process> = Box::new(Echo("hello"));
        let mut out = Vec::new();
        item.process(&mut out).unwrap();
        assert_eq!(out, b"hello\n");
    }
}
