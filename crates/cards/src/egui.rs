// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards procedural painting.
//!
//! Faces and backs are painted with the egui painter so cards scale to any
//! rect without image assets.
use eframe::egui::{Align2, Color32, FontFamily, FontId, Rect, Stroke, StrokeKind, Ui, vec2};

use crate::Card;

const FACE_FILL: Color32 = Color32::from_gray(235);
const FACE_BORDER: Color32 = Color32::from_gray(120);
const RED_PIP: Color32 = Color32::from_rgb(190, 30, 40);
const BLACK_PIP: Color32 = Color32::from_gray(25);
const BACK_FILL: Color32 = Color32::from_rgb(25, 60, 130);
const BACK_PANEL: Color32 = Color32::from_rgb(90, 120, 185);

/// Paints a card face up in the given rect.
pub fn paint_face(ui: &mut Ui, rect: &Rect, card: Card) {
    let rounding = rect.height() * 0.08;

    ui.painter()
        .rect(*rect, rounding, FACE_FILL, Stroke::NONE, StrokeKind::Inside);
    ui.painter().rect_stroke(
        *rect,
        rounding,
        Stroke::new(1.0, FACE_BORDER),
        StrokeKind::Inside,
    );

    let pip = if card.suit().is_red() {
        RED_PIP
    } else {
        BLACK_PIP
    };

    // Corner index, rank over suit.
    let index_font = FontId::new(rect.height() * 0.22, FontFamily::Monospace);
    let suit_font = FontId::new(rect.height() * 0.18, FontFamily::Proportional);

    let corner = rect.left_top() + vec2(rect.width() * 0.08, rect.height() * 0.04);
    let index_rect = ui.painter().text(
        corner,
        Align2::LEFT_TOP,
        card.rank().to_string(),
        index_font,
        pip,
    );

    ui.painter().text(
        index_rect.left_bottom(),
        Align2::LEFT_TOP,
        card.suit().symbol(),
        suit_font,
        pip,
    );

    // Center pip.
    ui.painter().text(
        rect.center() + vec2(0.0, rect.height() * 0.12),
        Align2::CENTER_CENTER,
        card.suit().symbol(),
        FontId::new(rect.height() * 0.42, FontFamily::Proportional),
        pip,
    );
}

/// Paints a card face down in the given rect.
pub fn paint_back(ui: &mut Ui, rect: &Rect) {
    let rounding = rect.height() * 0.08;

    ui.painter()
        .rect(*rect, rounding, BACK_FILL, Stroke::NONE, StrokeKind::Inside);
    ui.painter().rect_stroke(
        *rect,
        rounding,
        Stroke::new(1.0, FACE_BORDER),
        StrokeKind::Inside,
    );

    let panel = rect.shrink2(vec2(rect.width() * 0.12, rect.height() * 0.08));
    ui.painter().rect_stroke(
        panel,
        rounding * 0.5,
        Stroke::new(1.0, BACK_PANEL),
        StrokeKind::Inside,
    );

    ui.painter()
        .circle_stroke(rect.center(), panel.width() * 0.3, Stroke::new(1.0, BACK_PANEL));
}
