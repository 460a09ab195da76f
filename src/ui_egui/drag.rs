//! Click-drag listener binding for month grid cells.
//!
//! Each grid slot is backed by a retained [`CellNode`] that behaves like a
//! small DOM element: listeners are registered per pointer event kind and the
//! node turns per-frame egui pointer input into down/up/enter events. The
//! [`ClickDragBinder`] keeps exactly one forwarding listener set attached to
//! every node of the current handle list.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Up,
    Enter,
}

impl PointerEventKind {
    pub const ALL: [PointerEventKind; 3] = [
        PointerEventKind::Down,
        PointerEventKind::Up,
        PointerEventKind::Enter,
    ];
}

#[derive(Debug)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    default_prevented: Cell<bool>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind) -> Self {
        Self {
            kind,
            default_prevented: Cell::new(false),
        }
    }

    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

pub type Listener = Rc<dyn Fn(&PointerEvent)>;

/// Callback receiving every forwarded event with the index of its cell
pub type DayEventHandler = Rc<dyn Fn(&PointerEvent, usize)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerId(u64);

/// Pointer state of one cell for a single frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellPointerInput {
    /// Pointer is over the cell
    pub inside: bool,
    /// Primary button went down over the cell this frame. The pointer may
    /// have left the cell again within the same frame.
    pub pressed: bool,
    /// Primary button went up this frame
    pub released: bool,
}

#[derive(Default)]
pub struct CellNode {
    listeners: RefCell<Vec<(ListenerId, PointerEventKind, Listener)>>,
    next_listener: Cell<u64>,
    pointer_inside: Cell<bool>,
}

pub type CellHandle = Rc<CellNode>;

impl CellNode {
    pub fn new_handle() -> CellHandle {
        Rc::new(Self::default())
    }

    pub fn add_listener(&self, kind: PointerEventKind, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_listener.get());
        self.next_listener.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, kind, listener));
        id
    }

    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _, _)| *existing != id);
        listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Invoke every listener registered for the event's kind, in registration order
    pub fn dispatch(&self, event: &PointerEvent) {
        // Listeners may touch this node, so release the borrow before calling out.
        let matching: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(_, kind, _)| *kind == event.kind)
            .map(|(_, _, listener)| Rc::clone(listener))
            .collect();

        for listener in matching {
            listener(event);
        }
    }

    /// Dispatch the events one frame of pointer input produces on this cell.
    /// Order is enter, down, up. Returns whether any of them had its default
    /// action prevented.
    pub fn track_pointer(&self, input: CellPointerInput) -> bool {
        let was_inside = self.pointer_inside.replace(input.inside);

        let mut kinds = Vec::with_capacity(3);
        if input.inside && !was_inside {
            kinds.push(PointerEventKind::Enter);
        }
        if input.pressed {
            kinds.push(PointerEventKind::Down);
        }
        if input.inside && input.released {
            kinds.push(PointerEventKind::Up);
        }

        let mut prevented = false;
        for kind in kinds {
            let event = PointerEvent::new(kind);
            self.dispatch(&event);
            prevented |= event.default_prevented();
        }
        prevented
    }
}

/// Listeners attached to a handle list; dropping it detaches them all
#[must_use]
#[derive(Default)]
pub struct Binding {
    attached: Vec<(CellHandle, Vec<ListenerId>)>,
}

impl Binding {
    /// Attach `forwarders[i]` to `handles[i]` for every pointer event kind.
    ///
    /// Nothing is attached while the two lists disagree in length, so no event
    /// can be tagged with an index the current handle list does not have.
    pub fn attach(handles: &[CellHandle], forwarders: &[Listener]) -> Self {
        if handles.len() != forwarders.len() {
            log::debug!(
                "Skipping listener attach: {} handles, {} forwarders",
                handles.len(),
                forwarders.len()
            );
            return Self::default();
        }

        let attached = handles
            .iter()
            .zip(forwarders)
            .map(|(handle, forwarder)| {
                let ids = PointerEventKind::ALL
                    .iter()
                    .map(|kind| handle.add_listener(*kind, Rc::clone(forwarder)))
                    .collect();
                (Rc::clone(handle), ids)
            })
            .collect();

        Self { attached }
    }

    pub fn len(&self) -> usize {
        self.attached.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }
}

impl Drop for Binding {
    fn drop(&mut self) {
        for (handle, ids) in self.attached.drain(..) {
            for id in ids {
                handle.remove_listener(id);
            }
        }
    }
}

/// Keeps one forwarding listener set attached to the current handle list
#[derive(Default)]
pub struct ClickDragBinder {
    handles: Option<Rc<[CellHandle]>>,
    handler: Option<DayEventHandler>,
    forwarders: Vec<Listener>,
    binding: Option<Binding>,
}

impl ClickDragBinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the attached listeners in line with `handles` and `handler`.
    ///
    /// Re-binds only when the identity of either input changed; the previous
    /// binding is detached before the new one is attached. Returns whether a
    /// re-bind happened.
    pub fn sync(&mut self, handles: &Rc<[CellHandle]>, handler: &DayEventHandler) -> bool {
        let same_handles = self
            .handles
            .as_ref()
            .is_some_and(|current| Rc::ptr_eq(current, handles));
        let same_handler = self
            .handler
            .as_ref()
            .is_some_and(|current| Rc::ptr_eq(current, handler));
        if same_handles && same_handler {
            return false;
        }

        drop(self.binding.take());

        self.forwarders = Self::derive_forwarders(handles.len(), handler);
        self.handles = Some(Rc::clone(handles));
        self.handler = Some(Rc::clone(handler));
        let binding = Binding::attach(handles, &self.forwarders);
        log::debug!("Bound click-drag listeners to {} day cells", binding.len());
        self.binding = Some(binding);

        true
    }

    /// Detach every listener this binder attached
    pub fn unbind(&mut self) {
        if let Some(binding) = self.binding.take() {
            log::debug!("Unbinding click-drag listeners from {} day cells", binding.len());
        }
        self.handles = None;
        self.handler = None;
        self.forwarders.clear();
    }

    pub fn bound_len(&self) -> usize {
        self.binding.as_ref().map_or(0, Binding::len)
    }

    fn derive_forwarders(count: usize, handler: &DayEventHandler) -> Vec<Listener> {
        (0..count)
            .map(|idx| {
                let handler = Rc::clone(handler);
                Rc::new(move |event: &PointerEvent| handler(event, idx)) as Listener
            })
            .collect()
    }
}
