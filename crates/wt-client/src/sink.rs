//! Terminal sink trait and sink-originated events

/// The rendering side of the relay.
///
/// Implemented by whatever component draws the terminal (an emulator
/// widget, a PTY, a test recorder). The sink is a capability handed to
/// the session, not owned by it; escape-sequence interpretation, cursor
/// handling and key bindings all live behind this seam.
///
/// Event flow in the other direction is explicit: the embedder calls
/// [`crate::SessionController::handle_input`] and
/// [`crate::SessionController::handle_resize`] when the sink reports
/// keystrokes or geometry changes, or funnels [`TerminalEvent`]s into
/// [`crate::run_session`].
pub trait TerminalSink {
    /// Render raw output bytes verbatim
    fn print(&mut self, data: &[u8]);

    /// Render a status line, followed by a line break
    fn println(&mut self, line: &str);
}

/// An event originating from the terminal side.
///
/// Typed keys and programmatic injection both arrive as `Input`; the
/// relay does not distinguish them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// Raw bytes the user typed or pasted
    Input(Vec<u8>),
    /// The visible geometry changed
    Resize { cols: u16, rows: u16 },
}
