use std::time::Duration;

use futures::channel::mpsc;

use crate::app::Message;
use crate::ticker::TickerSpec;

/// Sleeper thread behind one armed ticker. Keyed on the full spec, so a
/// re-armed ticker gets a fresh thread and a fresh phase; the old thread
/// exits on its next send once the runtime drops the receiver.
pub(crate) fn ticker_stream(spec: &TickerSpec) -> mpsc::UnboundedReceiver<Message> {
    let spec = *spec;
    let (tx, rx) = mpsc::unbounded();
    std::thread::spawn(move || loop {
        std::thread::sleep(Duration::from_millis(spec.interval_ms));
        if tx
            .unbounded_send(Message::Tick(spec.kind, spec.generation))
            .is_err()
        {
            break;
        }
    });
    rx
}
