// SPDX-License-Identifier: MPL-2.0
//! The showcase page component.
//!
//! One vertically scrollable page: hero (with the particle field), feature
//! cards, the morphing chart, the sequential-vs-parallel demo, and a footer.
//! Sections have fixed heights so the scroll offset maps directly to section
//! visibility; the scroll handler uses that to fire the viewport-entry
//! triggers (morph loop start, one-time demo auto-run).

mod demo;
pub mod morph_chart;
pub mod particles;

use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::sequencer::{LaneId, Sequencer};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use chrono::Datelike;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, canvas, scrollable, text, Column, Container, Row, Stack};
use iced::{Element, Length, Rectangle};
use morph_chart::MorphChart;
use particles::ParticleField;
use std::time::{Duration, Instant};

/// Frame period for the decorative effects (particle motion).
pub const EFFECTS_FRAME: Duration = Duration::from_millis(40);

// Section layout. Fixed heights keep scroll offsets predictable.
const SECTION_SPACING: f32 = spacing::XXL;
const HERO_HEIGHT: f32 = 420.0;
const FEATURES_HEIGHT: f32 = 320.0;
const MORPH_HEIGHT: f32 = 360.0;
const DEMO_HEIGHT: f32 = 480.0;
const FOOTER_HEIGHT: f32 = 90.0;

const fn morph_top() -> f32 {
    HERO_HEIGHT + SECTION_SPACING + FEATURES_HEIGHT + SECTION_SPACING
}

const fn demo_top() -> f32 {
    morph_top() + MORPH_HEIGHT + SECTION_SPACING
}

/// Fraction of a section currently inside the viewport, 0–1.
fn visible_fraction(
    section_top: f32,
    section_height: f32,
    scroll_top: f32,
    viewport_height: f32,
) -> f32 {
    let view_bottom = scroll_top + viewport_height;
    let section_bottom = section_top + section_height;
    let overlap = view_bottom.min(section_bottom) - scroll_top.max(section_top);
    (overlap / section_height).clamp(0.0, 1.0)
}

/// Messages handled by the showcase page.
#[derive(Debug, Clone)]
pub enum Message {
    /// Start (or restart) the demo run. Emitted by the run button, the hero
    /// call-to-action, the space key, and the one-time viewport trigger.
    RunDemo,
    /// A lane's step timer fired. Stale generations are dropped.
    StepDue { lane: LaneId, generation: u64 },
    /// The page scrolled; drives the viewport-entry triggers.
    Scrolled {
        offset: scrollable::AbsoluteOffset,
        bounds: Rectangle,
    },
    /// The morph chart's 3-second phase timer fired.
    MorphTick(Instant),
    /// Decorative-effects frame timer fired.
    EffectsTick(Instant),
    BlockEntered { lane: LaneId, index: usize },
    BlockExited,
}

/// A step timer the parent must schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledStep {
    pub lane: LaneId,
    pub generation: u64,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Schedule one step timer per entry, each firing after the step period.
    ScheduleSteps(Vec<ScheduledStep>),
}

/// Showcase page state.
pub struct State {
    pub sequencer: Sequencer,
    pub(crate) morph: MorphChart,
    pub(crate) particles: ParticleField,
    pub(crate) hovered_block: Option<(LaneId, usize)>,
    auto_run_enabled: bool,
    auto_run_fired: bool,
    reveal_threshold: f32,
    particles_enabled: bool,
    scroll_top: f32,
    viewport_height: f32,
}

impl Default for State {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl State {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            sequencer: Sequencer::with_step(config.step_period()),
            morph: MorphChart::new(),
            particles: ParticleField::new(),
            hovered_block: None,
            auto_run_enabled: config.auto_run(),
            auto_run_fired: false,
            reveal_threshold: config.reveal_threshold(),
            particles_enabled: config.particles_enabled(),
            scroll_top: 0.0,
            viewport_height: 0.0,
        }
    }

    /// Period between demo steps, used by the parent to schedule timers.
    #[must_use]
    pub fn step_period(&self) -> Duration {
        self.sequencer.step_period()
    }

    /// Whether the morph chart loop is running (gates its subscription).
    #[must_use]
    pub fn morph_running(&self) -> bool {
        self.morph.started()
    }

    /// Whether the particle field animates (gates its subscription).
    #[must_use]
    pub fn particles_active(&self) -> bool {
        self.particles_enabled
    }

    /// Whether the one-time automatic demo run has already fired.
    #[must_use]
    pub fn auto_run_fired(&self) -> bool {
        self.auto_run_fired
    }

    fn section_fraction(&self, top: f32, height: f32) -> f32 {
        visible_fraction(top, height, self.scroll_top, self.viewport_height)
    }
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::RunDemo => start_run(state),
        Message::StepDue { lane, generation } => {
            if !state.sequencer.is_current(generation) {
                // Timer from a cancelled run.
                return Event::None;
            }
            if state.sequencer.advance(lane, Instant::now()) {
                Event::ScheduleSteps(vec![ScheduledStep { lane, generation }])
            } else {
                Event::None
            }
        }
        Message::Scrolled { offset, bounds } => {
            state.scroll_top = offset.y;
            state.viewport_height = bounds.height;
            handle_reveals(state)
        }
        Message::MorphTick(_) => {
            state.morph.toggle();
            Event::None
        }
        Message::EffectsTick(now) => {
            state.particles.tick(now);
            Event::None
        }
        Message::BlockEntered { lane, index } => {
            state.hovered_block = Some((lane, index));
            Event::None
        }
        Message::BlockExited => {
            state.hovered_block = None;
            Event::None
        }
    }
}

fn start_run(state: &mut State) -> Event {
    let generation = state.sequencer.start(Instant::now());
    Event::ScheduleSteps(vec![
        ScheduledStep {
            lane: LaneId::Sequential,
            generation,
        },
        ScheduledStep {
            lane: LaneId::Parallel,
            generation,
        },
    ])
}

/// Applies the viewport-entry triggers after a scroll.
fn handle_reveals(state: &mut State) -> Event {
    let revealed = |fraction: f32| fraction > 0.0 && fraction >= state.reveal_threshold;

    if !state.morph.started() && revealed(state.section_fraction(morph_top(), MORPH_HEIGHT)) {
        state.morph.start();
    }

    if state.auto_run_enabled
        && !state.auto_run_fired
        && revealed(state.section_fraction(demo_top(), DEMO_HEIGHT))
    {
        state.auto_run_fired = true;
        return start_run(state);
    }

    Event::None
}

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let page = Column::new()
        .spacing(SECTION_SPACING)
        .width(Length::Fill)
        .push(hero(state, i18n))
        .push(features(i18n))
        .push(morph_section(state, i18n))
        .push(
            Container::new(demo::section(state, i18n))
                .width(Length::Fill)
                .height(Length::Fixed(DEMO_HEIGHT))
                .align_y(Vertical::Center),
        )
        .push(footer(i18n));

    scrollable(page)
        .on_scroll(|viewport: scrollable::Viewport| Message::Scrolled {
            offset: viewport.absolute_offset(),
            bounds: viewport.bounds(),
        })
        .into()
}

fn hero<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let copy = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(text(i18n.tr("hero-title")).size(typography::DISPLAY))
        .push(
            text(i18n.tr("hero-tagline"))
                .size(typography::BODY_LG)
                .color(palette::GRAY_400),
        )
        .push(
            button(text(i18n.tr("hero-cta")).size(typography::BODY))
                .style(styles::button::primary)
                .padding([spacing::XS, spacing::LG])
                .on_press(Message::RunDemo),
        );

    let copy = Container::new(copy)
        .width(Length::Fill)
        .height(Length::Fixed(HERO_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    if state.particles_enabled {
        Stack::new()
            .width(Length::Fill)
            .height(Length::Fixed(HERO_HEIGHT))
            .push(
                canvas::Canvas::new(&state.particles)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .push(copy)
            .into()
    } else {
        copy.into()
    }
}

fn features(i18n: &I18n) -> Element<'_, Message> {
    let cards = Row::new()
        .spacing(spacing::LG)
        .push(feature_card(
            "⚡",
            i18n.tr("feature-throughput-title"),
            i18n.tr("feature-throughput-description"),
        ))
        .push(feature_card(
            "🧩",
            i18n.tr("feature-composability-title"),
            i18n.tr("feature-composability-description"),
        ))
        .push(feature_card(
            "🔒",
            i18n.tr("feature-safety-title"),
            i18n.tr("feature-safety-description"),
        ));

    Container::new(cards)
        .width(Length::Fill)
        .height(Length::Fixed(FEATURES_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn feature_card<'a>(icon: &'a str, title: String, description: String) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(text(icon).size(typography::TITLE_LG))
        .push(text(title).size(typography::TITLE_MD))
        .push(
            text(description)
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );

    Container::new(content)
        .padding(spacing::LG)
        .width(Length::Fixed(sizing::FEATURE_CARD_WIDTH))
        .style(styles::container::card)
        .into()
}

fn morph_section<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let phase = state.morph.phase();

    let chart = canvas::Canvas::new(&state.morph)
        .width(Length::Fixed(240.0))
        .height(Length::Fixed(280.0));

    let label = text(i18n.tr(phase.label_key()))
        .size(typography::TITLE_MD)
        .color(phase.accent());

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(text(i18n.tr("morph-title")).size(typography::TITLE_LG))
        .push(chart)
        .push(label);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(MORPH_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn footer(i18n: &I18n) -> Element<'_, Message> {
    let year = chrono::Local::now().year();
    let line = text(format!("© {} {}", year, i18n.tr("footer-copyright")))
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    Container::new(line)
        .width(Length::Fill)
        .height(Length::Fixed(FOOTER_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
