use comfy_table::{Attribute, Cell, Table, modifiers, presets};

use crate::core::schedule::DailySchedule;

pub fn build_schedule_table(schedule: &DailySchedule) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec!["Start", "End", "Program"]);
    for entry in schedule.iter() {
        table.add_row(vec![
            Cell::new(entry.airs_at.start),
            Cell::new(entry.airs_at.end).add_attribute(Attribute::Dim),
            Cell::new(&entry.name),
        ]);
    }
    table
}
