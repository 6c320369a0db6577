/// Pointer interaction forwarding for edge views.

use crate::core::types::MouseEvent;

/// Interaction kinds reported by the scene engine's hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    PointerMove,
    PointerOver,
    PointerOut,
    PointerDown,
    PointerUp,
    PointerUpOutside,
    PointerCancel,
}

/// Events an edge view publishes to its subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeEventKind {
    MouseMove,
    MouseOver,
    MouseOut,
    MouseDown,
    MouseUp,
}

impl EdgeEventKind {
    pub const ALL: [EdgeEventKind; 5] = [
        EdgeEventKind::MouseMove,
        EdgeEventKind::MouseOver,
        EdgeEventKind::MouseOut,
        EdgeEventKind::MouseDown,
        EdgeEventKind::MouseUp,
    ];

    /// The forwarded event for an interaction, if that interaction is forwarded at all.
    pub fn from_interaction(kind: InteractionKind) -> Option<Self> {
        match kind {
            InteractionKind::PointerMove => Some(EdgeEventKind::MouseMove),
            InteractionKind::PointerOver => Some(EdgeEventKind::MouseOver),
            InteractionKind::PointerOut => Some(EdgeEventKind::MouseOut),
            InteractionKind::PointerDown => Some(EdgeEventKind::MouseDown),
            InteractionKind::PointerUp => Some(EdgeEventKind::MouseUp),
            InteractionKind::PointerUpOutside | InteractionKind::PointerCancel => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeEventKind::MouseMove => "mousemove",
            EdgeEventKind::MouseOver => "mouseover",
            EdgeEventKind::MouseOut => "mouseout",
            EdgeEventKind::MouseDown => "mousedown",
            EdgeEventKind::MouseUp => "mouseup",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

type Handler = Box<dyn FnMut(&MouseEvent)>;

/// Typed subscriber list. Handlers run synchronously, in subscription order.
#[derive(Default)]
pub struct EdgeEvents {
    handlers: Vec<(HandlerId, EdgeEventKind, Handler)>,
    next_id: u64,
}

impl EdgeEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on<F>(&mut self, kind: EdgeEventKind, handler: F) -> HandlerId
    where
        F: FnMut(&MouseEvent) + 'static,
    {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, kind, Box::new(handler)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn off(&mut self, id: HandlerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(hid, _, _)| *hid != id);
        self.handlers.len() != before
    }

    /// Deliver `event` to every handler of `kind`; returns how many ran.
    pub fn emit(&mut self, kind: EdgeEventKind, event: &MouseEvent) -> usize {
        let mut delivered = 0;
        for (_, k, handler) in self.handlers.iter_mut() {
            if *k == kind {
                handler(event);
                delivered += 1;
            }
        }
        log::trace!("{} delivered to {} handler(s)", kind.as_str(), delivered);
        delivered
    }

    pub fn listener_count(&self, kind: EdgeEventKind) -> usize {
        self.handlers.iter().filter(|(_, k, _)| *k == kind).count()
    }
}

impl std::fmt::Debug for EdgeEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EdgeEvents")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
