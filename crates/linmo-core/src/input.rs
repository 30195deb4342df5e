//! Input events and the queue that carries them from the host into the
//! session. Events are applied in arrival order on the next tick, so a
//! pointer-up never races the check it triggers.

/// One host-side occurrence. Pointer coordinates are surface pixels,
/// already scaled by the device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp,
    /// Explicit check request from the UI.
    Validate,
    /// Wipe the drawing layer and start the character over.
    Clear,
    /// Give up on the current character and move on.
    Skip,
    Resize { width: u32, height: u32 },
}

/// FIFO of pending events.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Removes and returns every queued event, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_arrival_order() {
        let mut queue = InputQueue::new();
        queue.push(InputEvent::PointerDown { x: 1.0, y: 2.0 });
        queue.push(InputEvent::PointerMove { x: 3.0, y: 4.0 });
        queue.push(InputEvent::PointerUp);
        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(
            drained,
            vec![
                InputEvent::PointerDown { x: 1.0, y: 2.0 },
                InputEvent::PointerMove { x: 3.0, y: 4.0 },
                InputEvent::PointerUp,
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn len_tracks_pushes() {
        let mut queue = InputQueue::new();
        assert_eq!(queue.len(), 0);
        queue.push(InputEvent::Validate);
        queue.push(InputEvent::Clear);
        assert_eq!(queue.len(), 2);
    }
}
