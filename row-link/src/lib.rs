use std::sync::mpsc::{self, Receiver, SyncSender};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Bounded,
    Unbounded,
}

#[derive(Debug, Clone)]
pub struct LinkConfig {
    pub kind: LinkKind,
    pub queue_capacity: usize,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            kind: LinkKind::Bounded,
            queue_capacity: 1024,
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum LinkError {
    #[error("queue is full")]
    QueueFull,
    #[error("consumer disconnected")]
    ConsumerGone,
    #[error("producer disconnected")]
    ProducerGone,
}

/// One completed row of samples, addressed by its logical row index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowUpdate {
    pub row: usize,
    pub samples: Vec<i32>,
}

enum Sender<T> {
    Bounded(SyncSender<T>),
    Unbounded(mpsc::Sender<T>),
}

/// Sending half, movable to the thread that acquires rows.
pub struct RowProducer<T> {
    sender: Sender<T>,
}

/// Receiving half, kept on the thread that owns the renderer.
pub struct RowConsumer<T> {
    receiver: Receiver<T>,
}

pub fn link<T: Send + 'static>(config: &LinkConfig) -> (RowProducer<T>, RowConsumer<T>) {
    match config.kind {
        LinkKind::Bounded => {
            let (sender, receiver) = mpsc::sync_channel(config.queue_capacity.max(1));
            (
                RowProducer {
                    sender: Sender::Bounded(sender),
                },
                RowConsumer { receiver },
            )
        }
        LinkKind::Unbounded => {
            let (sender, receiver) = mpsc::channel();
            (
                RowProducer {
                    sender: Sender::Unbounded(sender),
                },
                RowConsumer { receiver },
            )
        }
    }
}

impl<T> RowProducer<T> {
    /// Queues `value` without blocking. A full bounded queue rejects it.
    pub fn send(&self, value: T) -> Result<(), LinkError> {
        match &self.sender {
            Sender::Bounded(sender) => sender.try_send(value).map_err(|err| match err {
                mpsc::TrySendError::Full(_) => LinkError::QueueFull,
                mpsc::TrySendError::Disconnected(_) => LinkError::ConsumerGone,
            }),
            Sender::Unbounded(sender) => sender.send(value).map_err(|_| LinkError::ConsumerGone),
        }
    }

    /// Queues `value`, waiting for space on a bounded queue.
    pub fn send_blocking(&self, value: T) -> Result<(), LinkError> {
        match &self.sender {
            Sender::Bounded(sender) => sender.send(value).map_err(|_| LinkError::ConsumerGone),
            Sender::Unbounded(sender) => sender.send(value).map_err(|_| LinkError::ConsumerGone),
        }
    }
}

impl<T> RowConsumer<T> {
    pub fn try_recv(&self) -> Result<Option<T>, LinkError> {
        match self.receiver.try_recv() {
            Ok(value) => Ok(Some(value)),
            Err(mpsc::TryRecvError::Empty) => Ok(None),
            Err(mpsc::TryRecvError::Disconnected) => Err(LinkError::ProducerGone),
        }
    }

    /// Blocks until a value arrives. `None` once the producer is dropped and
    /// the queue is empty.
    pub fn recv(&self) -> Option<T> {
        self.receiver.recv().ok()
    }

    /// Takes everything currently queued without blocking.
    pub fn drain(&self) -> Vec<T> {
        let drained: Vec<T> = self.receiver.try_iter().collect();
        if !drained.is_empty() {
            log::trace!("drained {} queued values", drained.len());
        }
        drained
    }
}
