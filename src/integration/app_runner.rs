use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{cmd::TuiCommand, raw_msg::RawMsg, state::AppState},
    infrastructure::{
        clock_service::{ClockTimers, TimerIntervals},
        config::Config,
        tui::{Event, TuiLike},
    },
    integration::{coalescer::FrameRequest, renderer::Renderer, runtime::Runtime},
};

/// Mounts the clock on a host terminal and drives it until quit.
///
/// Host events and timer fires are funnelled into the [`Runtime`] as raw
/// messages; commands flow back through the TUI and render-request channels
/// and are applied at the top of the next loop iteration.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike>>,
    renderer: Renderer,
    intervals: TimerIntervals,
    timers: Option<ClockTimers>,
    raw_tx: mpsc::UnboundedSender<RawMsg>,
    raw_rx: mpsc::UnboundedReceiver<RawMsg>,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    render_req_rx: mpsc::Receiver<()>,
    frame: FrameRequest,
    host_closed: bool,
}

enum Incoming {
    Host(Option<Event>),
    Raw(Option<RawMsg>),
}

impl AppRunner {
    pub fn new(
        initial_state: AppState,
        intervals: TimerIntervals,
        tui: Arc<Mutex<dyn TuiLike>>,
    ) -> Self {
        let mut runtime = Runtime::new(initial_state);

        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        runtime.set_tui_sender(tui_cmd_tx);
        let (render_req_tx, render_req_rx) = mpsc::channel(1);
        runtime.set_render_request_sender(render_req_tx);
        let (raw_tx, raw_rx) = mpsc::unbounded_channel();

        Self {
            runtime,
            tui,
            renderer: Renderer::new(),
            intervals,
            timers: None,
            raw_tx,
            raw_rx,
            tui_cmd_rx,
            render_req_rx,
            frame: FrameRequest::default(),
            host_closed: false,
        }
    }

    /// Build the runner from validated configuration
    pub fn new_with_config(config: &Config, tui: Arc<Mutex<dyn TuiLike>>) -> Result<Self> {
        let geometry = config.face_geometry()?;
        let intervals = config.timer_intervals()?;
        let state = AppState::new(config.clock_model(), geometry, config.styles)
            .with_keybindings(config.keybindings.clone());
        Ok(Self::new(state, intervals, tui))
    }

    pub fn state(&self) -> &AppState {
        self.runtime.state()
    }

    /// Sender that injects raw messages alongside host events and timer fires
    pub fn raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_tx.clone()
    }

    /// Enter the terminal, start the timers and loop until quit.
    ///
    /// Timers are cancelled and the terminal restored even when the loop fails.
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.start_timers();
        self.frame.request_render();

        let result = self.run_loop().await;

        self.stop_timers().await;
        self.tui.lock().await.exit()?;
        result
    }

    async fn run_loop(&mut self) -> Result<()> {
        loop {
            self.flush_frame().await?;

            let incoming = {
                let mut tui = self.tui.lock().await;
                if self.host_closed {
                    Incoming::Raw(self.raw_rx.recv().await)
                } else {
                    tokio::select! {
                        ev = tui.next() => Incoming::Host(ev),
                        raw = self.raw_rx.recv() => Incoming::Raw(raw),
                    }
                }
            };

            match incoming {
                Incoming::Host(Some(event)) => self.handle_event(event),
                Incoming::Host(None) => {
                    log::debug!("Host event stream ended");
                    self.host_closed = true;
                }
                Incoming::Raw(Some(raw)) => self.runtime.send_raw_msg(raw),
                Incoming::Raw(None) => break,
            }

            self.runtime.run_update_cycle();
            self.collect_frame_work();

            if self.state().system.should_suspend {
                self.suspend().await?;
            }
            if self.state().system.should_quit {
                log::info!("Quit requested");
                break;
            }
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Quit => self.runtime.send_raw_msg(RawMsg::Quit),
            Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
            Event::Render => self.frame.request_render(),
            Event::Resize(w, h) => self.runtime.send_raw_msg(RawMsg::Resize(w, h)),
            Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
            Event::Error => self
                .runtime
                .send_raw_msg(RawMsg::Error("terminal event error".to_string())),
            Event::Init
            | Event::Closed
            | Event::FocusGained
            | Event::FocusLost
            | Event::Paste(_)
            | Event::Mouse(_) => {}
        }
    }

    /// Pull coalesced render requests and host commands out of the executor
    fn collect_frame_work(&mut self) {
        while self.render_req_rx.try_recv().is_ok() {
            self.frame.request_render();
        }
        while let Ok(cmd) = self.tui_cmd_rx.try_recv() {
            match cmd {
                TuiCommand::Resize { width, height } => self.frame.resize_to(width, height),
            }
        }
    }

    async fn flush_frame(&mut self) -> Result<()> {
        let frame = self.frame.take();
        if let Some((width, height)) = frame.resize() {
            self.tui
                .lock()
                .await
                .resize(Rect::new(0, 0, width, height))?;
        }
        if frame.should_render() {
            self.renderer
                .render(&self.tui, self.runtime.state())
                .await?;
        }
        Ok(())
    }

    // SIGTSTP stops the process inside `suspend`, so `resume` runs once the
    // shell continues it.
    async fn suspend(&mut self) -> Result<()> {
        log::info!("Suspending");
        {
            let mut tui = self.tui.lock().await;
            tui.suspend()?;
            tui.resume()?;
        }
        self.runtime.send_raw_msg(RawMsg::Resume);
        self.runtime.run_update_cycle();
        self.collect_frame_work();
        Ok(())
    }

    fn start_timers(&mut self) {
        let units = self.state().clock.mode().timed_units();
        self.timers = Some(ClockTimers::start(
            units,
            self.intervals,
            self.raw_tx.clone(),
        ));
    }

    async fn stop_timers(&mut self) {
        if let Some(mut timers) = self.timers.take() {
            timers.shutdown().await;
        }
    }

    /// Whether clock timers are currently spawned
    pub fn timers_running(&self) -> bool {
        self.timers.as_ref().is_some_and(ClockTimers::is_running)
    }
}
