//! Change-notification channel over the realtime websocket.
//!
//! One `RealtimeChannel` is held per mounted list view: subscribe on first
//! render, `close()` on teardown or when the filter key changes. The socket
//! task exits on the closed flag, a read error, or the server hanging up,
//! and always closes the writer on its way out.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures_util::future::{self, Either};
use futures_util::stream::SplitSink;
use futures_util::{SinkExt, StreamExt};
use gloo_console::{debug, error};
use gloo_net::websocket::{Message, futures::WebSocket};
use gloo_timers::future::TimeoutFuture;
use yew::Callback;
use yew::platform::spawn_local;

use common::realtime::{self, ChangeEvent, SocketMessage};

use super::config;

const HEARTBEAT_MS: u32 = 30_000;

type Writer = Rc<RefCell<Option<SplitSink<WebSocket, Message>>>>;

/// Handle for one table subscription. `close()` releases the socket; `Drop`
/// is a backstop for handles that fall out of scope without an explicit
/// close.
pub struct RealtimeChannel {
    closed: Rc<Cell<bool>>,
    writer: Writer,
}

impl RealtimeChannel {
    /// Opens a subscription to every insert/update/delete on `table`,
    /// optionally narrowed by a `column=eq.value` filter, and emits each
    /// matching change on `on_change`.
    pub fn subscribe(
        table: &str,
        filter: Option<String>,
        on_change: Callback<ChangeEvent>,
    ) -> Option<Self> {
        let socket = match WebSocket::open(&config::realtime_url()) {
            Ok(socket) => socket,
            Err(err) => {
                error!("realtime connect failed:", err.to_string());
                return None;
            }
        };
        let (write, mut read) = socket.split();
        let closed = Rc::new(Cell::new(false));
        let writer: Writer = Rc::new(RefCell::new(Some(write)));

        let table = table.to_string();
        let task_closed = Rc::clone(&closed);
        let task_writer = Rc::clone(&writer);
        spawn_local(async move {
            let join = realtime::join_frame(&table, filter.as_deref(), &next_ref());
            if !send_frame(&task_writer, &join).await {
                return;
            }
            // the heartbeat runs on a fixed cadence; inbound frames must not
            // re-arm it, or a busy channel would starve the keep-alive
            let mut tick = Box::pin(TimeoutFuture::new(HEARTBEAT_MS));
            loop {
                if task_closed.get() {
                    break;
                }
                match future::select(read.next(), tick).await {
                    Either::Left((frame, pending_tick)) => {
                        tick = pending_tick;
                        match frame {
                            Some(Ok(Message::Text(text))) => {
                                if let Ok(frame) = serde_json::from_str::<SocketMessage>(&text) {
                                    if realtime::refetch_trigger(&frame, &table) {
                                        debug!("realtime change on", table.clone());
                                        if let Some(event) = realtime::change_event(&frame) {
                                            on_change.emit(event);
                                        }
                                    }
                                }
                            }
                            Some(Ok(Message::Bytes(_))) => {}
                            Some(Err(_)) | None => break,
                        }
                    }
                    Either::Right(_) => {
                        let heartbeat = realtime::heartbeat_frame(&next_ref());
                        if !send_frame(&task_writer, &heartbeat).await {
                            break;
                        }
                        tick = Box::pin(TimeoutFuture::new(HEARTBEAT_MS));
                    }
                }
            }
            close_writer(&task_writer).await;
        });

        Some(Self { closed, writer })
    }

    /// Releases the subscription. Safe to call more than once.
    pub fn close(&self) {
        self.closed.set(true);
        let writer = Rc::clone(&self.writer);
        spawn_local(async move {
            close_writer(&writer).await;
        });
    }
}

impl Drop for RealtimeChannel {
    fn drop(&mut self) {
        if !self.closed.get() {
            self.close();
        }
    }
}

fn next_ref() -> String {
    uuid::Uuid::new_v4().to_string()
}

// The sink is taken out of the cell while a send is in flight so no borrow
// is held across an await point.
async fn send_frame(writer: &Writer, frame: &SocketMessage) -> bool {
    let text = match serde_json::to_string(frame) {
        Ok(text) => text,
        Err(_) => return false,
    };
    let taken = writer.borrow_mut().take();
    let Some(mut sink) = taken else {
        return false;
    };
    let sent = sink.send(Message::Text(text)).await.is_ok();
    *writer.borrow_mut() = Some(sink);
    sent
}

async fn close_writer(writer: &Writer) {
    let taken = writer.borrow_mut().take();
    if let Some(mut sink) = taken {
        let _ = sink.close().await;
    }
}
