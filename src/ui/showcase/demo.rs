// SPDX-License-Identifier: MPL-2.0
//! Demo section: the sequential-vs-parallel lanes driven by the sequencer.

use super::{Message, State};
use crate::i18n::fluent::I18n;
use crate::sequencer::{BlockState, LaneId, PARALLEL_COLUMNS, PARALLEL_CORES, SEQUENTIAL_BLOCKS};
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, mouse_area, progress_bar, text, Column, Container, Row};
use iced::{Background, Border, Element, Length, Theme};

pub(super) fn section<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let title = text(i18n.tr("demo-title")).size(typography::TITLE_LG);

    let lanes = Row::new()
        .spacing(spacing::XL)
        .push(sequential_lane(state, i18n))
        .push(parallel_lane(state, i18n));

    let run_button = button(text(i18n.tr("demo-run-button")).size(typography::BODY))
        .style(styles::button::primary)
        .padding([spacing::XS, spacing::LG])
        .on_press(Message::RunDemo);

    let hint = text(i18n.tr("demo-space-hint"))
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(title)
        .push(lanes)
        .push(run_button)
        .push(hint)
        .into()
}

fn sequential_lane<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let mut blocks = Column::new().spacing(spacing::XXS);
    for index in 0..SEQUENTIAL_BLOCKS {
        blocks = blocks.push(block(
            state.sequencer.sequential_block(index),
            LaneId::Sequential,
            index,
            state.hovered_block == Some((LaneId::Sequential, index)),
        ));
    }

    lane_card(
        i18n.tr("demo-sequential-heading"),
        blocks.into(),
        state,
        i18n,
        LaneId::Sequential,
    )
}

fn parallel_lane<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let mut cores = Row::new().spacing(spacing::XS);
    for core in 0..PARALLEL_CORES {
        let mut column = Column::new().spacing(spacing::XXS);
        for position in 0..PARALLEL_COLUMNS {
            let index = core * PARALLEL_COLUMNS + position;
            column = column.push(block(
                state.sequencer.parallel_block(core, position),
                LaneId::Parallel,
                index,
                state.hovered_block == Some((LaneId::Parallel, index)),
            ));
        }
        cores = cores.push(column);
    }

    lane_card(
        i18n.tr("demo-parallel-heading"),
        cores.into(),
        state,
        i18n,
        LaneId::Parallel,
    )
}

/// Shared lane chrome: heading, blocks, progress bar, elapsed readout.
fn lane_card<'a>(
    heading: String,
    blocks: Element<'a, Message>,
    state: &'a State,
    i18n: &'a I18n,
    lane: LaneId,
) -> Element<'a, Message> {
    let elapsed = Row::new()
        .spacing(spacing::XXS)
        .push(
            text(i18n.tr("demo-elapsed-label"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        )
        .push(text(state.sequencer.elapsed(lane)).size(typography::CAPTION));

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(text(heading).size(typography::TITLE_MD))
        .push(blocks)
        .push(progress_bar(0.0..=100.0, state.sequencer.progress(lane)))
        .push(elapsed);

    Container::new(content)
        .padding(spacing::MD)
        .width(Length::Fixed(220.0))
        .style(styles::container::card)
        .into()
}

/// One transaction block with its hover highlight.
fn block<'a>(
    block_state: BlockState,
    lane: LaneId,
    index: usize,
    hovered: bool,
) -> Element<'a, Message> {
    let label = text(format!("{}", index + 1)).size(typography::CAPTION);

    let square = Container::new(label)
        .width(Length::Fixed(sizing::TX_BLOCK))
        .height(Length::Fixed(sizing::TX_BLOCK))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(move |theme: &Theme| block_style(theme, block_state, hovered));

    mouse_area(square)
        .on_enter(Message::BlockEntered { lane, index })
        .on_exit(Message::BlockExited)
        .into()
}

fn block_style(theme: &Theme, state: BlockState, hovered: bool) -> container::Style {
    let background = match state {
        BlockState::Idle => theme.extended_palette().background.strong.color,
        BlockState::Processing => palette::WARNING_500,
        BlockState::Completed => palette::SUCCESS_500,
    };
    let text_color = match state {
        BlockState::Idle => None,
        _ => Some(palette::WHITE),
    };
    let border = if hovered {
        Border {
            color: palette::BRAND_400,
            width: 2.0,
            radius: radius::SM.into(),
        }
    } else {
        Border {
            radius: radius::SM.into(),
            ..Border::default()
        }
    };

    container::Style {
        background: Some(Background::Color(background)),
        text_color,
        border,
        ..container::Style::default()
    }
}
