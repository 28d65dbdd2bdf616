// src/domain/viewport.rs

//! Viewport-driven page sizes.
//!
//! Sections never read the viewport width themselves. A request owns one
//! [`ViewportBus`]; each carousel subscribes with its [`SizePolicy`] and is
//! told its resolved size whenever a width is published.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Widths below this show one item per page.
pub const SMALL_SCREEN_MAX: u32 = 640;
/// Widths below this show two items per page.
pub const MEDIUM_SCREEN_MAX: u32 = 1024;
/// Width assumed when the client sends no hint.
pub const DESKTOP_WIDTH: u32 = 1280;

/// How a section's page size follows the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizePolicy {
    desktop: usize,
    /// Size between the small and medium breakpoints; `None` skips straight to `desktop`.
    medium: Option<usize>,
}

impl SizePolicy {
    /// One, two, then `desktop` items.
    pub const fn standard(desktop: usize) -> Self {
        Self {
            desktop,
            medium: Some(2),
        }
    }

    /// One item on small screens, `desktop` everywhere else.
    pub const fn small_only(desktop: usize) -> Self {
        Self {
            desktop,
            medium: None,
        }
    }

    pub fn desktop(self) -> usize {
        self.desktop.max(1)
    }

    pub fn resolve(self, width: u32) -> usize {
        if width < SMALL_SCREEN_MAX {
            1
        } else if width < MEDIUM_SCREEN_MAX {
            self.medium.unwrap_or(self.desktop).max(1)
        } else {
            self.desktop()
        }
    }
}

/// Resolve how many items a section shows at `width`.
pub fn page_size_for_width(width: u32, desktop: usize) -> usize {
    SizePolicy::standard(desktop).resolve(width)
}

type Listener = Box<dyn FnMut(usize)>;

struct Slot {
    id: u64,
    policy: SizePolicy,
    listener: Listener,
}

#[derive(Default)]
struct BusInner {
    width: Option<u32>,
    next_id: u64,
    slots: Vec<Slot>,
    /// Subscriptions dropped while `publish` held the slot list.
    removed: Vec<u64>,
}

/// Shared viewport observable for a single request.
#[derive(Clone, Default)]
pub struct ViewportBus {
    inner: Rc<RefCell<BusInner>>,
}

impl ViewportBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(width: u32) -> Self {
        let bus = Self::new();
        bus.publish(width);
        bus
    }

    /// Register `listener` with the standard breakpoints.
    pub fn subscribe<F>(&self, desktop: usize, listener: F) -> Subscription
    where
        F: FnMut(usize) + 'static,
    {
        self.subscribe_with(SizePolicy::standard(desktop), listener)
    }

    /// Register `listener`. If a width is already known the listener is called
    /// straight away, so a fresh subscriber never renders with a stale size.
    pub fn subscribe_with<F>(&self, policy: SizePolicy, listener: F) -> Subscription
    where
        F: FnMut(usize) + 'static,
    {
        let mut listener: Listener = Box::new(listener);

        let (id, width) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            (id, inner.width)
        };

        if let Some(width) = width {
            listener(policy.resolve(width));
        }

        self.inner.borrow_mut().slots.push(Slot {
            id,
            policy,
            listener,
        });

        Subscription {
            bus: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Store `width` and notify every live subscriber with its own page size.
    ///
    /// Listeners run while the slot list is detached from the bus. A listener
    /// may subscribe further sections or drop other subscriptions; drops are
    /// applied once the list is put back.
    pub fn publish(&self, width: u32) {
        let mut slots = {
            let mut inner = self.inner.borrow_mut();
            inner.width = Some(width);
            std::mem::take(&mut inner.slots)
        };

        for slot in slots.iter_mut() {
            if self.inner.borrow().removed.contains(&slot.id) {
                continue;
            }
            (slot.listener)(slot.policy.resolve(width));
        }

        let mut inner = self.inner.borrow_mut();
        slots.append(&mut inner.slots);
        let removed = std::mem::take(&mut inner.removed);
        slots.retain(|slot| !removed.contains(&slot.id));
        inner.slots = slots;
    }
}

/// Keeps a listener registered; dropping it deregisters the listener.
pub struct Subscription {
    bus: Weak<RefCell<BusInner>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(inner) = self.bus.upgrade() else { return };
        let Ok(mut inner) = inner.try_borrow_mut() else { return };

        let before = inner.slots.len();
        inner.slots.retain(|slot| slot.id != self.id);
        if inner.slots.len() == before {
            // Detached by an in-flight publish.
            inner.removed.push(self.id);
        }
    }
}
