use crossterm::event::{KeyEvent, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Resize,
    Tick,
    /// Terminal input ended; nothing more will arrive
    Closed,
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            let mut reader = crossterm::event::EventStream::new();
            let mut tick_interval =
                tokio::time::interval(std::time::Duration::from_millis(tick_rate_ms.max(10)));

            loop {
                let event = tokio::select! {
                    maybe_event = reader.next() => match maybe_event {
                        // Filter for Press only (Windows compatibility)
                        Some(Ok(crossterm::event::Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            Event::Key(key)
                        }
                        Some(Ok(crossterm::event::Event::Resize(_, _))) => Event::Resize,
                        Some(_) => continue,
                        // Input stream closed
                        None => break,
                    },
                    _ = tick_interval.tick() => Event::Tick,
                };

                if tx.send(event).is_err() {
                    break;
                }
            }
        });

        EventHandler { rx }
    }

    pub async fn next(&mut self) -> Event {
        self.rx.recv().await.unwrap_or(Event::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_closed_channel_reports_closed() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut handler = EventHandler { rx };
        tx.send(Event::Tick).unwrap();
        drop(tx);

        assert!(matches!(handler.next().await, Event::Tick));
        assert!(matches!(handler.next().await, Event::Closed));
        assert!(matches!(handler.next().await, Event::Closed));
    }
}
