// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the showcase page to localization, configuration,
//! and the Iced runtime. Step timers for the demo are scheduled here: the
//! showcase update reports which timers it needs and `App::update` turns
//! them into tasks that deliver `StepDue` messages after the step period.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::showcase;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Root Iced application state bridging the showcase page, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    showcase: showcase::State,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("demo_running", &self.showcase.sequencer.any_running())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            showcase: showcase::State::default(),
            theme_mode: ThemeMode::System,
        }
    }
}

/// Delivers a `StepDue` message for `step` after the step period elapses.
fn schedule_step(step: showcase::ScheduledStep, period: Duration) -> Task<Message> {
    Task::perform(async move { tokio::time::sleep(period).await }, move |()| {
        Message::Showcase(showcase::Message::StepDue {
            lane: step.lane,
            generation: step.generation,
        })
    })
}

impl App {
    /// Initializes application state from the config file and `Flags`
    /// received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);

        let app = App {
            i18n,
            showcase: showcase::State::new(&config),
            theme_mode: config.general.theme_mode,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_morph_subscription(&self.showcase),
            subscription::create_effects_subscription(&self.showcase),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Showcase(showcase_message) => {
                match showcase::update(&mut self.showcase, showcase_message) {
                    showcase::Event::None => Task::none(),
                    showcase::Event::ScheduleSteps(steps) => {
                        let period = self.showcase.step_period();
                        Task::batch(steps.into_iter().map(|step| schedule_step(step, period)))
                    }
                }
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        showcase::view(&self.showcase, &self.i18n).map(Message::Showcase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequencer::{BlockState, LaneId};
    use std::fs;
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    fn config_env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var("XDG_CONFIG_HOME").ok();
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var("XDG_CONFIG_HOME", value);
        } else {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }

    #[test]
    fn new_starts_idle() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            assert!(!app.showcase.sequencer.any_running());
            assert_eq!(app.showcase.sequencer.generation(), 0);
        });
    }

    #[test]
    fn new_applies_demo_config() {
        with_temp_config_dir(|config_root| {
            let settings_dir = config_root.join("IcedStage");
            fs::create_dir_all(&settings_dir).expect("failed to create config dir");
            fs::write(settings_dir.join("settings.toml"), "[demo]\nstep_ms = 250\n")
                .expect("failed to write config");

            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.showcase.step_period(), Duration::from_millis(250));
        });
    }

    #[test]
    fn run_demo_starts_both_lanes() {
        let mut app = App::default();

        let _ = app.update(Message::Showcase(showcase::Message::RunDemo));

        assert!(app.showcase.sequencer.lane_running(LaneId::Sequential));
        assert!(app.showcase.sequencer.lane_running(LaneId::Parallel));
        assert_eq!(app.showcase.sequencer.generation(), 1);
    }

    #[test]
    fn stale_step_after_restart_leaves_new_run_untouched() {
        let mut app = App::default();
        let _ = app.update(Message::Showcase(showcase::Message::RunDemo));
        let _ = app.update(Message::Showcase(showcase::Message::RunDemo));

        let _ = app.update(Message::Showcase(showcase::Message::StepDue {
            lane: LaneId::Sequential,
            generation: 1,
        }));

        assert_eq!(
            app.showcase.sequencer.sequential_block(0),
            BlockState::Idle
        );
        assert_eq!(app.showcase.sequencer.progress(LaneId::Sequential), 0.0);
    }

    #[test]
    fn current_step_advances_the_run() {
        let mut app = App::default();
        let _ = app.update(Message::Showcase(showcase::Message::RunDemo));

        let _ = app.update(Message::Showcase(showcase::Message::StepDue {
            lane: LaneId::Parallel,
            generation: 1,
        }));

        assert_eq!(app.showcase.sequencer.progress(LaneId::Parallel), 50.0);
    }

    #[test]
    fn title_uses_localized_app_name() {
        let app = App::default();
        assert_eq!(app.title(), "IcedStage");
    }

    #[test]
    fn explicit_theme_modes_map_directly() {
        let light = App {
            theme_mode: ThemeMode::Light,
            ..App::default()
        };
        let dark = App {
            theme_mode: ThemeMode::Dark,
            ..App::default()
        };
        assert_eq!(light.theme(), Theme::Light);
        assert_eq!(dark.theme(), Theme::Dark);
    }
}
