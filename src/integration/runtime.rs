use std::collections::VecDeque;

use tokio::sync::mpsc;

use crate::core::{
    cmd::{Cmd, TuiCommand},
    cmd_executor::CmdExecutor,
    msg::Msg,
    raw_msg::RawMsg,
    state::AppState,
    translator::translate_raw_to_domain,
    update::update,
};

/// Owns the application state and drives translate → update → execute
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    cmd_queue: VecDeque<Cmd>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: CmdExecutor,
}

impl Runtime {
    pub fn new(initial_state: AppState) -> Self {
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();
        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: CmdExecutor::new(),
        }
    }

    pub fn set_tui_sender(&mut self, tui_sender: mpsc::UnboundedSender<TuiCommand>) {
        self.cmd_executor.set_tui_sender(tui_sender);
    }

    pub fn set_render_request_sender(&mut self, render_sender: mpsc::Sender<()>) {
        self.cmd_executor.set_render_request_sender(render_sender);
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Queue a domain message directly
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        // The receiver lives in self, so the channel cannot be closed here
        let _ = self.raw_msg_tx.send(raw_msg);
    }

    /// Sender for producers living outside the runtime, such as timers
    pub fn raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::debug!("Processing {msg:?}");
        }
        let (new_state, commands) = update(msg, self.state.clone());
        self.state = new_state;
        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Translate every pending raw message, then apply every domain message
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        while let Ok(raw_msg) = self.raw_msg_rx.try_recv() {
            let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
            self.msg_queue.extend(domain_msgs);
        }

        let mut all_commands = Vec::new();
        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }
        all_commands
    }

    pub fn execute_pending_commands(&mut self) -> Vec<String> {
        let commands: Vec<Cmd> = self.cmd_queue.drain(..).collect();
        if commands.is_empty() {
            return vec![];
        }
        self.cmd_executor.execute_commands(&commands)
    }

    pub fn run_update_cycle(&mut self) -> Vec<String> {
        self.process_all_messages();
        self.execute_pending_commands()
    }

    pub fn stats(&self) -> RuntimeStats {
        let clock = self.state.clock.state();
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            seconds: clock.seconds,
            minutes: clock.minutes,
            hours: clock.hours,
        }
    }
}

/// Snapshot of the runtime for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_commands: usize,
    pub seconds: u64,
    pub minutes: u64,
    pub hours: u64,
}
