//! Application coordinator trait
//!
//! The `AppCoordinator` trait is what the binary's event loop drives:
//! dispatch messages, tick, and stop once `should_quit` turns true.

use crate::event::Message;
use crate::theme::Theme;

/// Trait for the main application coordinator
///
/// # Example
///
/// ```ignore
/// loop {
///     terminal.draw(|f| app.render(f))?;
///     if let Event::Key(key) = event::read()? {
///         app.dispatch(Message::Key(key));
///     }
///     if app.should_quit() {
///         break;
///     }
///     app.tick();
/// }
/// ```
pub trait AppCoordinator {
    /// Returns the current theme
    fn theme(&self) -> &Theme;

    /// Dispatch a message to be processed
    ///
    /// Global messages are consumed by the coordinator; everything else is
    /// forwarded to the root component.
    fn dispatch(&mut self, msg: Message);

    /// Called on each tick of the main loop
    fn tick(&mut self);

    /// Returns true if the application should quit
    fn should_quit(&self) -> bool;
}
