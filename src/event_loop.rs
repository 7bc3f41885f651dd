//! Terminal event pump.
//!
//! One poll with a timeout, then drain whatever burst of input is already
//! queued before the next draw. Mouse drags arrive as long runs of events;
//! draining them per frame keeps panel moves smooth instead of one cell per
//! redraw.

use std::time::Duration;

use crossterm::event::{self, Event};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy)]
pub struct EventLoop {
    poll_interval: Duration,
}

impl EventLoop {
    pub fn new(poll_interval: Duration) -> Self {
        Self { poll_interval }
    }

    /// Wait up to the poll interval, then feed every queued event to the
    /// handler. Returns `Quit` as soon as the handler asks for it.
    pub fn pump(&self, mut handle: impl FnMut(Event) -> ControlFlow) -> Result<ControlFlow> {
        if !event::poll(self.poll_interval)? {
            return Ok(ControlFlow::Continue);
        }
        loop {
            let event = event::read()?;
            if handle(event) == ControlFlow::Quit {
                return Ok(ControlFlow::Quit);
            }
            if !event::poll(Duration::ZERO)? {
                return Ok(ControlFlow::Continue);
            }
        }
    }
}
