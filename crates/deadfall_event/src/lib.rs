//! Deadfall Event - Simulation Event Channel
//!
//! The simulation publishes discrete events (shots, hits, deaths, pickups)
//! that external collaborators consume: the audio subsystem maps them to
//! sounds, the HUD to notifications. The channel is unbounded and the
//! simulation never blocks on it; collaborators drain it once per frame
//! (or from another thread, the channel is Send).

use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};

/// Channel for single-type events.
pub struct EventChannel<E> {
    tx: Sender<E>,
    rx: Receiver<E>,
}

impl<E> EventChannel<E> {
    /// Create a new channel.
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }

    /// Send an event. Never blocks.
    pub fn send(&self, event: E) {
        // The only send failure is a fully disconnected channel, and we
        // always hold one receiver ourselves.
        let _ = self.tx.send(event);
    }

    /// Receive the next pending event, if any.
    pub fn receive(&self) -> Option<E> {
        match self.rx.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain all pending events.
    pub fn drain(&self) -> Vec<E> {
        let mut events = Vec::new();
        while let Some(event) = self.receive() {
            events.push(event);
        }
        events
    }

    /// A cloneable sending handle for producers.
    pub fn sender(&self) -> Sender<E> {
        self.tx.clone()
    }

    /// A cloneable receiving handle for an external consumer (e.g. the
    /// audio thread).
    pub fn receiver(&self) -> Receiver<E> {
        self.rx.clone()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }

    /// Get pending count.
    pub fn len(&self) -> usize {
        self.rx.len()
    }
}

impl<E> Default for EventChannel<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct TestEvent(i32);

    #[test]
    fn test_send_receive() {
        let channel = EventChannel::new();
        channel.send(TestEvent(1));
        channel.send(TestEvent(2));

        assert_eq!(channel.len(), 2);
        assert_eq!(channel.receive(), Some(TestEvent(1)));
        assert_eq!(channel.receive(), Some(TestEvent(2)));
        assert_eq!(channel.receive(), None);
    }

    #[test]
    fn test_drain_preserves_order() {
        let channel = EventChannel::new();
        for i in 0..5 {
            channel.send(TestEvent(i));
        }
        let events = channel.drain();
        assert_eq!(events.len(), 5);
        assert_eq!(events[0], TestEvent(0));
        assert_eq!(events[4], TestEvent(4));
        assert!(channel.is_empty());
    }

    #[test]
    fn test_external_receiver() {
        let channel = EventChannel::new();
        let rx = channel.receiver();
        channel.send(TestEvent(7));
        assert_eq!(rx.try_recv().ok(), Some(TestEvent(7)));
    }
}
