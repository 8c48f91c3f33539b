// State management module.
// Holds the tab controller, the request orchestrator, and the diagnostic sink.

pub mod diagnostics;
pub mod orchestrator;
pub mod tabs;

pub use diagnostics::{Diagnostic, DiagnosticLevel, DiagnosticLog, DiagnosticSink};
pub use orchestrator::{Orchestrator, SummaryState, UploadSlot};
pub use tabs::{Panel, TabController};
