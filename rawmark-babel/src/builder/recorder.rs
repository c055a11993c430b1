use crate::builder::DocumentBuilder;
use crate::error::ConvertError;
use crate::ir::events::Event;
use crate::ir::nodes::{Attrs, Mark, MarkKind, NodeKind};

/// Builder that records every operation instead of building a tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventRecorder {
    events: Vec<Event>,
    depth: usize,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

impl DocumentBuilder for EventRecorder {
    fn open_mark(&mut self, mark: Mark) {
        self.events.push(Event::OpenMark(mark));
    }

    fn close_mark(&mut self, kind: MarkKind) {
        self.events.push(Event::CloseMark(kind));
    }

    fn open_node(&mut self, kind: NodeKind, attrs: Attrs) {
        self.depth += 1;
        self.events.push(Event::OpenNode(kind, attrs));
    }

    fn close_node(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.events.push(Event::CloseNode);
    }

    fn depth(&self) -> usize {
        self.depth
    }

    fn add_node(&mut self, kind: NodeKind, attrs: Attrs) {
        self.events.push(Event::AddNode(kind, attrs));
    }

    fn add_text(&mut self, text: &str) {
        self.events.push(Event::AddText(text.to_string()));
    }

    fn ingest_fragment(&mut self, html: &str, block: bool) -> Result<(), ConvertError> {
        self.events.push(Event::IngestFragment {
            html: html.to_string(),
            block,
        });
        Ok(())
    }
}
