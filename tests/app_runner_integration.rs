use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use tokio::sync::Mutex;
use tokio::time::timeout;

use clockface::core::raw_msg::RawMsg;
use clockface::core::state::clock::ClockState;
use clockface::domain::clock::TimeUnit;
use clockface::infrastructure::config::Config;
use clockface::infrastructure::tui::test::TestTui;
use clockface::infrastructure::tui::{Event, TuiLike};
use clockface::integration::app_runner::AppRunner;

fn key(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

fn runner_with(tui: &Arc<Mutex<TestTui>>, config: &Config) -> Result<AppRunner> {
    let host: Arc<Mutex<dyn TuiLike>> = Arc::<Mutex<TestTui>>::clone(tui);
    AppRunner::new_with_config(config, host)
}

#[tokio::test]
async fn test_quit_key_ends_loop_and_stops_timers() -> Result<()> {
    let tui = Arc::new(Mutex::new(TestTui::with_events(80, 40, [key('q')])?));
    let mut runner = runner_with(&tui, &Config::embedded()?)?;

    let res = timeout(Duration::from_millis(500), runner.run()).await;
    assert!(res.is_ok(), "runner should stop right after the quit key");
    res??;

    assert!(runner.state().system.should_quit);
    assert!(!runner.timers_running());
    let guard = tui.lock().await;
    assert_eq!(guard.draw_count(), 1);
    assert!(!guard.is_entered());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_second_ticks_trigger_renders() -> Result<()> {
    let tui = Arc::new(Mutex::new(TestTui::new(80, 40)?));
    let mut runner = runner_with(&tui, &Config::embedded()?)?;

    let quit = runner.raw_sender();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(3_500)).await;
        let _ = quit.send(RawMsg::Quit);
    });
    runner.run().await?;

    assert_eq!(
        runner.state().clock.state(),
        ClockState {
            seconds: 18,
            minutes: 0,
            hours: 4
        }
    );
    assert_eq!(runner.state().clock.seconds_angle(), 108.0);
    // the mount frame plus one per tick
    assert_eq!(tui.lock().await.draw_count(), 4);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_minute_timer_is_independent_of_seconds() -> Result<()> {
    let tui = Arc::new(Mutex::new(TestTui::new(80, 40)?));
    let mut runner = runner_with(&tui, &Config::embedded()?)?;

    let quit = runner.raw_sender();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(60_500)).await;
        let _ = quit.send(RawMsg::Quit);
    });
    runner.run().await?;

    let state = runner.state().clock.state();
    assert_eq!(state.seconds, 15 + 60);
    assert_eq!(state.minutes, 1);
    assert_eq!(state.hours, 4);
    Ok(())
}

#[tokio::test]
async fn test_resize_rerenders_at_new_size() -> Result<()> {
    let tui = Arc::new(Mutex::new(TestTui::with_events(
        80,
        40,
        [Event::Resize(100, 50), key('q')],
    )?));
    let mut runner = runner_with(&tui, &Config::embedded()?)?;

    timeout(Duration::from_millis(500), runner.run()).await??;

    let guard = tui.lock().await;
    assert_eq!(guard.size(), (100, 50));
    assert_eq!(guard.draw_count(), 2);
    Ok(())
}

#[tokio::test]
async fn test_suspend_resumes_and_redraws() -> Result<()> {
    let ctrl_z = Event::Key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL));
    let tui = Arc::new(Mutex::new(TestTui::with_events(80, 40, [ctrl_z, key('q')])?));
    let mut runner = runner_with(&tui, &Config::embedded()?)?;

    timeout(Duration::from_millis(500), runner.run()).await??;

    assert!(!runner.state().system.should_suspend);
    let guard = tui.lock().await;
    assert_eq!(guard.suspend_count(), 1);
    assert_eq!(guard.draw_count(), 2);
    Ok(())
}

#[tokio::test]
async fn test_reset_key_restores_initial_position() -> Result<()> {
    let tui = Arc::new(Mutex::new(TestTui::new(80, 40)?));
    let mut runner = runner_with(&tui, &Config::embedded()?)?;

    let tx = runner.raw_sender();
    tx.send(RawMsg::ClockTick(TimeUnit::Hours))?;
    tx.send(RawMsg::ClockTick(TimeUnit::Minutes))?;
    tx.send(RawMsg::Key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE)))?;
    tx.send(RawMsg::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)))?;

    timeout(Duration::from_millis(500), runner.run()).await??;

    assert_eq!(runner.state().clock.state(), ClockState::DEMO);
    assert_eq!(
        runner.state().system.status_message.as_deref(),
        Some("Clock reset")
    );
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_reset_status_gives_way_to_key_hints() -> Result<()> {
    let tui = Arc::new(Mutex::new(TestTui::new(80, 40)?));
    let mut runner = runner_with(&tui, &Config::embedded()?)?;

    let tx = runner.raw_sender();
    tx.send(RawMsg::Key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE)))?;
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(3_500)).await;
        let _ = tx.send(RawMsg::Quit);
    });
    runner.run().await?;

    assert_eq!(runner.state().system.status_message, None);
    let guard = tui.lock().await;
    let content: String = guard.buffer().content().iter().map(|c| c.symbol()).collect();
    assert!(content.contains("q: quit"));
    assert!(!content.contains("Clock reset"));
    Ok(())
}

#[tokio::test]
async fn test_invalid_margin_refuses_to_mount() -> Result<()> {
    let tui = Arc::new(Mutex::new(TestTui::new(80, 40)?));
    let mut config = Config::embedded()?;
    config.clock.hand_margin_width = 0.0;

    assert!(runner_with(&tui, &config).is_err());
    assert_eq!(tui.lock().await.draw_count(), 0);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_carry_mode_rolls_minutes_from_seconds() -> Result<()> {
    let tui = Arc::new(Mutex::new(TestTui::new(80, 40)?));
    let mut config = Config::embedded()?;
    config.clock.counter_mode = clockface::domain::clock::CounterMode::Carry;
    config.clock.initial = ClockState {
        seconds: 58,
        minutes: 59,
        hours: 11,
    };
    let mut runner = runner_with(&tui, &config)?;

    let quit = runner.raw_sender();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(2_500)).await;
        let _ = quit.send(RawMsg::Quit);
    });
    runner.run().await?;

    assert_eq!(
        runner.state().clock.state(),
        ClockState {
            seconds: 0,
            minutes: 0,
            hours: 0
        }
    );
    Ok(())
}
