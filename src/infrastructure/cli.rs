use clap::Parser;

use crate::{domain::clock::CounterMode, infrastructure::config::Config, utils::version};

/// Above this the repaint period rounds down to zero
pub const MAX_FRAME_RATE: f64 = 1000.0;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 4.0,
        value_parser = parse_frame_rate
    )]
    pub frame_rate: f64,

    #[arg(
        long,
        value_name = "FLOAT",
        help = "Width of the band between the rim and the inner face"
    )]
    pub hand_margin_width: Option<f64>,

    #[arg(long, value_name = "COUNT", help = "Initial seconds counter")]
    pub seconds: Option<u64>,

    #[arg(long, value_name = "COUNT", help = "Initial minutes counter")]
    pub minutes: Option<u64>,

    #[arg(long, value_name = "COUNT", help = "Initial hours counter")]
    pub hours: Option<u64>,

    #[arg(long, value_enum, help = "How counters behave past a full turn")]
    pub counter_mode: Option<CounterMode>,
}

fn parse_frame_rate(arg: &str) -> Result<f64, String> {
    let rate: f64 = arg.parse().map_err(|e| format!("{e}"))?;
    if rate > 0.0 && rate <= MAX_FRAME_RATE {
        Ok(rate)
    } else {
        Err(format!("must be in (0, {MAX_FRAME_RATE}], got {arg}"))
    }
}

impl Cli {
    /// Flags given on the command line win over the config files
    pub fn apply_to(&self, config: &mut Config) {
        let clock = &mut config.clock;
        if let Some(margin) = self.hand_margin_width {
            clock.hand_margin_width = margin;
        }
        if let Some(seconds) = self.seconds {
            clock.initial.seconds = seconds;
        }
        if let Some(minutes) = self.minutes {
            clock.initial.minutes = minutes;
        }
        if let Some(hours) = self.hours {
            clock.initial.hours = hours;
        }
        if let Some(mode) = self.counter_mode {
            clock.counter_mode = mode;
        }
    }
}
