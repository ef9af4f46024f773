//! User notices (the confirmation alert after a link was sent).

use std::io::Write;

use tracing::warn;

#[cfg(test)]
use mockall::automock;

/// Shows a modal-style notice to the user.
#[cfg_attr(test, automock)]
pub trait Notifier {
    fn alert(&mut self, title: &str, message: &str);
}

/// Notifier that prints notices to a writer.
pub struct WriterNotifier<'a, W: Write> {
    out: &'a mut W,
}

impl<'a, W: Write> WriterNotifier<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self { out }
    }
}

impl<W: Write> Notifier for WriterNotifier<'_, W> {
    fn alert(&mut self, title: &str, message: &str) {
        if let Err(e) = writeln!(self.out, "\n[{title}] {message}\n") {
            warn!("Failed to show notice: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_notifier_prints_title_and_message() {
        let mut buf = Vec::new();
        WriterNotifier::new(&mut buf).alert("Verification Sent", "Check your inbox.");
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("[Verification Sent] Check your inbox."));
    }
}
