use crate::{
    core::{
        cmd::Cmd,
        msg::{clock::ClockMsg, Msg},
        state::AppState,
    },
    domain::clock::TimeUnit,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // Clock messages (delegated to ClockFaceModel)
        // Seconds ticks also age the status line
        Msg::Clock(clock_msg) => {
            let ages_status = clock_msg == ClockMsg::Tick(TimeUnit::Seconds);
            let mut commands = state.clock.update(clock_msg);
            if ages_status {
                commands.extend(state.system.age_status());
            }
            (state, commands)
        }
    }
}
