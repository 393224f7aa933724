use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};

/// Seconds ticks a status message stays up before the key hints return
pub const STATUS_MESSAGE_TICKS: u32 = 3;

/// System-related state
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub status_message: Option<String>,
    status_ticks_left: u32,
}

impl SystemState {
    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            // System control
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![Cmd::RequestRender]
            }

            SystemMsg::Resize(width, height) => {
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            // Status management
            SystemMsg::UpdateStatusMessage(message) => {
                self.show_status(message);
                vec![Cmd::RequestRender]
            }

            SystemMsg::ClearStatusMessage => {
                self.status_message = None;
                self.status_ticks_left = 0;
                vec![Cmd::RequestRender]
            }

            SystemMsg::ShowError(error) => {
                let cmd = Cmd::LogError {
                    message: error.clone(),
                };
                self.show_status(format!("Error: {error}"));
                vec![cmd, Cmd::RequestRender]
            }
        }
    }

    fn show_status(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_ticks_left = STATUS_MESSAGE_TICKS;
    }

    /// Count one seconds tick against the visible status message and clear it
    /// once it has been up for [`STATUS_MESSAGE_TICKS`].
    pub fn age_status(&mut self) -> Vec<Cmd> {
        if self.status_message.is_none() {
            return vec![];
        }
        self.status_ticks_left = self.status_ticks_left.saturating_sub(1);
        if self.status_ticks_left == 0 {
            self.update(SystemMsg::ClearStatusMessage)
        } else {
            vec![]
        }
    }
}
