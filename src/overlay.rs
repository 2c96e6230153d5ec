//! Transport-control strip rendering.
//!
//! The same strip serves two roles: the on-screen controller overlay while
//! the window is foregrounded, and the chrome around the miniature window
//! that stands in for OS-rendered remote actions. Callers decide what a
//! click means (direct player command vs. control signal).

use eframe::egui::{self, Align2, CornerRadius, FontId, Sense, UiBuilder};

use crate::pip::{ControlCode, RemoteAction};

#[derive(Debug, Clone, Copy)]
pub struct ControlStripGeometry {
    pub rect: egui::Rect,
    pub icon_slot: f32,
    pub icon_spacing: f32,
    pub height: f32,
}

/// Lay the strip out near the bottom of `rect`, centered, sized to the
/// available width. Returns `None` for an empty action set.
pub fn control_strip_geometry(
    rect: egui::Rect,
    icon_count: usize,
) -> Option<ControlStripGeometry> {
    if icon_count == 0 {
        return None;
    }

    let icon_count_f = icon_count as f32;
    let available_width = (rect.width() - 20.0).max(60.0);
    let icon_slot = (available_width / icon_count_f).clamp(18.0, 44.0);
    let icon_spacing = (icon_slot * 0.2).clamp(4.0, 12.0);
    let strip_width = icon_slot * icon_count_f + icon_spacing * (icon_count_f - 1.0);
    let strip_height = icon_slot + 6.0;

    let mut center_y = rect.max.y - strip_height * 0.5 - 8.0;
    let min_y = rect.min.y + strip_height * 0.5 + 6.0;
    if center_y < min_y {
        center_y = rect.center().y;
    }

    let mut strip_rect = egui::Rect::from_center_size(
        egui::pos2(rect.center().x, center_y),
        egui::vec2(strip_width, strip_height),
    );

    if strip_rect.max.y > rect.max.y - 4.0 {
        let shift = strip_rect.max.y - (rect.max.y - 4.0);
        strip_rect = strip_rect.translate(egui::vec2(0.0, -shift));
    }
    if strip_rect.min.y < rect.min.y + 4.0 {
        let shift = (rect.min.y + 4.0) - strip_rect.min.y;
        strip_rect = strip_rect.translate(egui::vec2(0.0, shift));
    }

    Some(ControlStripGeometry {
        rect: strip_rect,
        icon_slot,
        icon_spacing,
        height: strip_height,
    })
}

/// Draw the strip and report which action, if any, was clicked this frame.
pub fn draw_control_strip(
    ui: &mut egui::Ui,
    geometry: ControlStripGeometry,
    actions: &[RemoteAction],
) -> Option<ControlCode> {
    let visuals = ui.visuals().clone();

    let bg_color = egui::Color32::from_rgba_unmultiplied(15, 23, 42, 110);
    let rounding = CornerRadius::same((geometry.height / 2.0).round() as u8);
    ui.painter_at(geometry.rect)
        .rect_filled(geometry.rect, rounding, bg_color);

    let strip_id = ui.id().with("transport.strip");
    let mut strip_ui = ui.new_child(
        UiBuilder::new()
            .max_rect(geometry.rect)
            .layout(egui::Layout::left_to_right(egui::Align::Center))
            .id_salt(strip_id),
    );
    strip_ui.spacing_mut().item_spacing.x = geometry.icon_spacing;
    strip_ui.set_min_height(geometry.height);

    let mut clicked = None;
    for action in actions {
        let (icon_rect, icon_response) = strip_ui.allocate_exact_size(
            egui::vec2(geometry.icon_slot, geometry.height),
            Sense::click(),
        );

        let mut icon_color = visuals.widgets.inactive.fg_stroke.color;
        if icon_response.hovered() {
            strip_ui
                .ctx()
                .set_cursor_icon(egui::CursorIcon::PointingHand);
            icon_color = visuals.hyperlink_color;
        }

        strip_ui.painter().text(
            icon_rect.center(),
            Align2::CENTER_CENTER,
            action.icon,
            FontId::proportional(geometry.icon_slot * 0.65),
            icon_color,
        );
        if icon_response.clicked() {
            clicked = Some(action.control);
        }
        icon_response.on_hover_text(action.title);
    }

    clicked
}
