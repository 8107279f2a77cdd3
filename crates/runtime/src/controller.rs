//! Controller implementations: where entity event streams end up.

use std::cell::RefCell;
use std::io;
use std::io::Write;
use std::rc::Rc;

use crawl_core::{Controller, LogEvent};

/// Shared handle onto a [`BufferedController`]'s recorded stream.
pub type EventBuffer = Rc<RefCell<Vec<LogEvent>>>;

/// Collects events into a buffer the session owner can drain.
///
/// This is the controller local AI drivers and tests use; a networked client
/// would sit behind a transport-specific controller instead.
pub struct BufferedController {
    buffer: EventBuffer,
}

impl BufferedController {
    /// Creates the controller together with the shared handle used to read
    /// what it received.
    pub fn new() -> (Self, EventBuffer) {
        let buffer: EventBuffer = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                buffer: buffer.clone(),
            },
            buffer,
        )
    }
}

impl Controller for BufferedController {
    fn push_event(&mut self, event: LogEvent) {
        self.buffer.borrow_mut().push(event);
    }
}

/// Encodes each event as one JSON line into a writer.
///
/// Useful for replay files and for piping a session's view to another
/// process. Encoding or write failures are logged and dropped; a lossy replay
/// beats a poisoned turn.
pub struct ReplayController<W: io::Write> {
    writer: W,
}

impl<W: io::Write> ReplayController<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: io::Write> Controller for ReplayController<W> {
    fn push_event(&mut self, event: LogEvent) {
        match serde_json::to_string(&event) {
            Ok(line) => {
                if let Err(error) = writeln!(self.writer, "{line}") {
                    tracing::warn!(%error, "failed to write replay event");
                }
            }
            Err(error) => {
                tracing::warn!(%error, "failed to encode replay event");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crawl_core::{EntityId, EntityRef, Location};

    #[test]
    fn buffered_controller_records_in_order() {
        let (mut controller, buffer) = BufferedController::new();
        controller.push_event(LogEvent::Done);
        controller.push_event(LogEvent::Message {
            text: "hello".into(),
        });
        let events = buffer.borrow();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], LogEvent::Done);
    }

    #[test]
    fn replay_controller_writes_json_lines() {
        let mut controller = ReplayController::new(Vec::new());
        controller.push_event(LogEvent::Wait {
            entity: EntityRef {
                id: EntityId(3),
                name: "idler".into(),
            },
            location: Location::new(2, 5),
        });
        controller.push_event(LogEvent::Done);
        let output = String::from_utf8(controller.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"wait\""));
        assert!(lines[1].contains("\"done\""));
    }
}
