pub mod console;
pub mod errors;
pub mod headless;

pub use console::{Console, InputSource, OutputSink, Tone};
pub use errors::{ConfigError, VoyagerError};
pub use headless::ScriptedConsole;
