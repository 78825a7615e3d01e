/// Developer-facing output for the library lifecycle. Nothing written here is
/// shown to the user.
pub trait DiagnosticSink {
    fn debug(&self, message: &str);
    fn error(&self, message: &str);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn debug(&self, message: &str) {
        (**self).debug(message);
    }

    fn error(&self, message: &str) {
        (**self).error(message);
    }
}

/// Writes to the browser console.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn debug(&self, message: &str) {
        gloo::console::log!(message);
    }

    fn error(&self, message: &str) {
        gloo::console::error!(message);
    }
}
