//! Comfort overlay.
//!
//! Each open shows a freshly rolled comfort message. While open, the page
//! body stops scrolling and is padded on the right by the width of the
//! vanished scrollbar so content does not jump. Closing runs an exit
//! animation before the body is restored.

use std::time::Duration;

use crate::page::TimerEvent;
use crate::scheduler::{Scheduler, TimerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Closed,
    Open,
    /// Exit animation playing.
    Closing,
}

/// What a pointer event on the modal landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The dimmed background overlay itself.
    Overlay,
    /// Anything inside the modal content.
    Content,
}

/// Viewport measurements taken when the modal opens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Window width including the scrollbar.
    pub inner_width: f64,
    /// Document width excluding the scrollbar.
    pub client_width: f64,
}

impl Viewport {
    pub fn scrollbar_width(&self) -> f64 {
        (self.inner_width - self.client_width).max(0.0)
    }
}

/// Body styling controlled by the modal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyLock {
    pub scroll_locked: bool,
    pub padding_right_px: f64,
}

impl Default for BodyLock {
    fn default() -> Self {
        Self {
            scroll_locked: false,
            padding_right_px: 0.0,
        }
    }
}

impl BodyLock {
    pub fn css(&self) -> String {
        let overflow = if self.scroll_locked { "hidden" } else { "auto" };
        format!(
            "overflow: {}; padding-right: {}px;",
            overflow, self.padding_right_px
        )
    }
}

#[derive(Debug)]
pub struct ComfortModal {
    phase: ModalPhase,
    message: String,
    body: BodyLock,
    closing: Option<TimerId>,
}

impl Default for ComfortModal {
    fn default() -> Self {
        Self::new()
    }
}

impl ComfortModal {
    pub fn new() -> Self {
        Self {
            phase: ModalPhase::Closed,
            message: String::new(),
            body: BodyLock::default(),
            closing: None,
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn body(&self) -> BodyLock {
        self.body
    }

    /// CSS classes for the modal root.
    pub fn class(&self) -> &'static str {
        match self.phase {
            ModalPhase::Closed => "comfort-modal",
            ModalPhase::Open => "comfort-modal active",
            ModalPhase::Closing => "comfort-modal active closing",
        }
    }

    /// Open with `message`. Reopening during the exit animation cancels it.
    pub fn open(
        &mut self,
        scheduler: &mut Scheduler<TimerEvent>,
        message: String,
        viewport: Viewport,
    ) {
        if let Some(pending) = self.closing.take() {
            scheduler.cancel(pending);
        }

        self.message = message;
        self.phase = ModalPhase::Open;
        self.body = BodyLock {
            scroll_locked: true,
            padding_right_px: viewport.scrollbar_width(),
        };
    }

    /// Start the exit animation. No-op unless open.
    pub fn close(&mut self, scheduler: &mut Scheduler<TimerEvent>, animation: Duration) -> bool {
        if self.phase != ModalPhase::Open {
            return false;
        }
        self.phase = ModalPhase::Closing;
        self.closing = Some(scheduler.schedule_after(animation, TimerEvent::ModalClosed));
        true
    }

    /// Exit animation finished; restore the body.
    pub fn finish_close(&mut self, fired: TimerId) -> bool {
        if self.closing != Some(fired) {
            return false;
        }
        self.closing = None;
        self.phase = ModalPhase::Closed;
        self.body = BodyLock::default();
        true
    }

    /// Whether a pointer event should close the modal.
    pub fn closes_on(&self, target: PointerTarget) -> bool {
        self.phase == ModalPhase::Open && target == PointerTarget::Overlay
    }
}
