use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Shared handle to a caller-owned destination.
///
/// The logger only writes to and flushes a sink; it never opens or closes
/// one. The caller keeps its own clone and decides when the underlying
/// file goes away, after taking it back out with `set_file_sink(None)`.
pub type FileSink = Arc<Mutex<dyn Write + Send>>;

/// Wrap any writer as a [`FileSink`].
pub fn file_sink<W>(writer: W) -> FileSink
where
    W: Write + Send + 'static,
{
    Arc::new(Mutex::new(writer))
}

/// Where console lines go.
#[derive(Clone, Default)]
pub enum Console {
    #[default]
    Stderr,
    /// Any shared writer, mostly for capturing output in tests.
    Writer(FileSink),
}

impl Console {
    /// Run `f` against the console stream while holding it.
    pub(crate) fn with_writer<F>(&self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut dyn Write) -> io::Result<()>,
    {
        match self {
            Console::Stderr => f(&mut io::stderr().lock()),
            Console::Writer(sink) => f(&mut *sink.lock()),
        }
    }
}
