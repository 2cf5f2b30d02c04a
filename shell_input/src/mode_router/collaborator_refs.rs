// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ExternalEngine, ProcessStream, RenderSurface, ShellLookups, SubmissionSink};

/// The collaborators one call to [`crate::ModeRouter::handle_bytes`] may touch.
/// Borrowed for the duration of the call only, the router never holds on to them.
#[allow(missing_debug_implementations)]
pub struct Collaborators<'a> {
    /// The running process, if any.
    pub process: Option<&'a mut dyn ProcessStream>,
    pub external_engine: Option<&'a mut dyn ExternalEngine>,
    pub lookups: &'a dyn ShellLookups,
    pub sink: &'a mut dyn SubmissionSink,
    pub surface: &'a dyn RenderSurface,
}

impl<'a> Collaborators<'a> {
    /// Collaborators with no process and no external engine attached.
    pub fn idle(
        lookups: &'a dyn ShellLookups,
        sink: &'a mut dyn SubmissionSink,
        surface: &'a dyn RenderSurface,
    ) -> Self {
        Self {
            process: None,
            external_engine: None,
            lookups,
            sink,
            surface,
        }
    }

    #[must_use]
    pub fn with_process(mut self, process: &'a mut dyn ProcessStream) -> Self {
        self.process = Some(process);
        self
    }

    #[must_use]
    pub fn with_external_engine(mut self, engine: &'a mut dyn ExternalEngine) -> Self {
        self.external_engine = Some(engine);
        self
    }
}
