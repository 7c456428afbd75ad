//! Process wiring and the single-consumer event loop.

use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::runtime::Runtime;

use crate::config::Config;
use crate::demo;
use crate::host::message::RawMessage;
use crate::host::outbound::{HostNotifier, HttpNotifier, LogNotifier};
use crate::host::router;
use crate::host::server::{self, Inbox};
use crate::phone::controller::PhoneController;
use crate::phone::typewriter::TimerScheduler;
use crate::shutdown::ShutdownHandle;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::surface::TerminalSurface;
use crate::ui::terminal_guard::{setup_terminal, PhoneTerminal};

type Phone = PhoneController<TerminalSurface, Box<dyn HostNotifier>, TimerScheduler>;

const TICK_RATE: Duration = Duration::from_millis(250);

/// Run the device until the user quits or SIGTERM arrives.
pub fn run(config: &Config, demo_mode: bool) -> io::Result<()> {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("burner-phone")
        .build()?;
    let shutdown = ShutdownHandle::new();

    // Bind before taking over the terminal so a busy port is a plain error.
    let listener = rt.block_on(TcpListener::bind(&config.host.bind_addr))?;

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(TICK_RATE, shutdown.clone());

    spawn_server(&rt, listener, events.sender(), shutdown.clone());
    spawn_signal_listener(&rt, events.sender());

    let mut phone = build_phone(&rt, config, events.sender());
    if demo_mode {
        for raw in demo::opening(&config.phone.brand) {
            router::dispatch(&mut phone, raw);
        }
    }

    let result = event_loop(&mut terminal, &events, &mut phone, demo_mode);

    shutdown.signal();
    drop(guard);
    rt.shutdown_timeout(Duration::from_secs(1));
    result
}

fn event_loop(
    terminal: &mut PhoneTerminal,
    events: &EventHandler,
    phone: &mut Phone,
    demo_mode: bool,
) -> io::Result<()> {
    loop {
        if phone.surface_mut().take_dirty() {
            terminal.draw(|frame| phone.surface_mut().draw(frame))?;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => match handle_key(key, demo_mode) {
                InputAction::Quit => return Ok(()),
                InputAction::Phone(key) => phone.on_key(key),
                InputAction::Inject(raw) => {
                    router::dispatch(phone, raw);
                }
                InputAction::None => {}
            },
            Ok(AppEvent::Host(raw)) => {
                router::dispatch(phone, raw);
            }
            Ok(AppEvent::Reveal { generation }) => phone.on_reveal(generation),
            Ok(AppEvent::Resize(..)) => phone.surface_mut().mark_dirty(),
            Ok(AppEvent::Tick) | Err(RecvTimeoutError::Timeout) => {}
            Ok(AppEvent::Shutdown) | Err(RecvTimeoutError::Disconnected) => return Ok(()),
        }
    }
}

fn build_phone(rt: &Runtime, config: &Config, tx: Sender<AppEvent>) -> Phone {
    let notifier: Box<dyn HostNotifier> = match &config.host.callback_url {
        Some(url) => Box::new(HttpNotifier::new(url.clone(), rt.handle().clone())),
        None => {
            tracing::info!("no callback url, outbound events are only logged");
            Box::new(LogNotifier)
        }
    };
    let wake = Arc::new(move |generation: u64| {
        let _ = tx.send(AppEvent::Reveal { generation });
    });
    let scheduler = TimerScheduler::new(rt.handle().clone(), wake);
    PhoneController::new(
        TerminalSurface::new(),
        notifier,
        scheduler,
        config.phone.typewriter_interval(),
    )
}

fn spawn_server(
    rt: &Runtime,
    listener: TcpListener,
    tx: Sender<AppEvent>,
    shutdown: ShutdownHandle,
) {
    let inbox: Inbox = Arc::new(move |raw: RawMessage| tx.send(AppEvent::Host(raw)).is_ok());
    rt.spawn(async move {
        if let Err(err) = server::serve(listener, inbox, shutdown).await {
            tracing::error!(error = %err, "host endpoint stopped");
        }
    });
}

#[cfg(unix)]
fn spawn_signal_listener(rt: &Runtime, tx: Sender<AppEvent>) {
    use tokio::signal::unix::{signal, SignalKind};

    rt.spawn(async move {
        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(sigterm) => sigterm,
            Err(err) => {
                tracing::warn!(error = %err, "failed to install SIGTERM handler");
                return;
            }
        };
        if sigterm.recv().await.is_some() {
            let _ = tx.send(AppEvent::Shutdown);
        }
    });
}

#[cfg(not(unix))]
fn spawn_signal_listener(rt: &Runtime, tx: Sender<AppEvent>) {
    rt.spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = tx.send(AppEvent::Shutdown);
        }
    });
}
